use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Let's build something.".to_owned(),
    }
}

#[test]
fn validate_reports_first_missing_field() {
    let mut form = filled();
    form.subject = "   ".to_owned();
    form.message = String::new();
    assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Subject)));
}

#[test]
fn validate_rejects_malformed_email() {
    let bad_emails = [
        "ada",
        "ada@",
        "@example.com",
        "ada@example",
        "ada@@example.com",
        "a da@example.com",
        "a@b..c",
        "a@b.c..d",
        "a@.b.c",
        "a@b.c.",
    ];
    for bad in bad_emails {
        let mut form = filled();
        form.email = bad.to_owned();
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
    }
}

#[test]
fn validate_accepts_complete_form() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn validate_accepts_subdomain_email() {
    let mut form = filled();
    form.email = "ada@mail.example.co.uk".to_owned();
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn begin_submit_moves_to_submitting_and_returns_snapshot() {
    let mut state = ContactState { form: filled(), ..ContactState::default() };
    let sent = state.begin_submit().unwrap();
    assert_eq!(sent, filled());
    assert!(state.is_submitting());
    assert!(!state.banner_visible());
}

#[test]
fn begin_submit_rejects_second_submit_in_flight() {
    let mut state = ContactState { form: filled(), ..ContactState::default() };
    state.begin_submit().unwrap();
    assert_eq!(state.begin_submit(), Err(ContactError::AlreadySubmitting));
}

#[test]
fn invalid_submit_keeps_phase_and_records_error() {
    let mut state = ContactState::default();
    assert_eq!(state.begin_submit(), Err(ContactError::MissingField(Field::Name)));
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.error, Some(ContactError::MissingField(Field::Name)));

    state.edit(Field::Name, "Ada".to_owned());
    assert_eq!(state.error, None);
}

#[test]
fn complete_submit_clears_fields_and_shows_banner() {
    let mut state = ContactState { form: filled(), ..ContactState::default() };
    state.begin_submit().unwrap();
    let ticket = state.complete_submit();
    assert_eq!(state.form, ContactForm::default());
    assert!(state.banner_visible());
    assert!(!state.is_submitting());

    state.dismiss_banner(ticket);
    assert_eq!(state.phase, Phase::Idle);
}

#[test]
fn stale_banner_timer_does_not_hide_newer_banner() {
    let mut state = ContactState { form: filled(), ..ContactState::default() };
    state.begin_submit().unwrap();
    let first = state.complete_submit();

    state.form = filled();
    state.begin_submit().unwrap();
    let second = state.complete_submit();

    state.dismiss_banner(first);
    assert!(state.banner_visible());
    state.dismiss_banner(second);
    assert!(!state.banner_visible());
}

#[test]
fn dismiss_during_new_submit_leaves_phase_alone() {
    let mut state = ContactState { form: filled(), ..ContactState::default() };
    state.begin_submit().unwrap();
    let ticket = state.complete_submit();

    state.form = filled();
    state.begin_submit().unwrap();
    state.dismiss_banner(ticket);
    assert!(state.is_submitting());
}

#[test]
fn field_ids_and_labels() {
    let ids: Vec<_> = Field::ALL.iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["name", "email", "subject", "message"]);
    assert_eq!(ContactError::MissingField(Field::Email).to_string(), "Email is required");
}
