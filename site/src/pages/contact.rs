//! Contact page with a simulated message form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_content;
use crate::components::button::{AnimatedButton, ButtonSize, ButtonVariant, GlowColor, button_class};
use crate::components::card::{AnimatedCard, Card, CardContent, CardDescription, CardHeader, CardTitle, stagger};
use crate::components::field::{FieldLabel, Input, Textarea};
use crate::components::icon::{Icon, IconKind};
use crate::state::contact::{ContactForm, ContactState, Field};
use crate::util::meta;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "your.email@example.com",
        Field::Subject => "What's this about?",
        Field::Message => "Tell me about your project or idea...",
    }
}

pub fn channel_icon(title: &str) -> IconKind {
    match title {
        "Email" => IconKind::Mail,
        "Phone" => IconKind::Phone,
        "Location" => IconKind::MapPin,
        _ => IconKind::Clock,
    }
}

#[cfg(feature = "hydrate")]
fn simulate_delivery(state: RwSignal<ContactState>, message: ContactForm) {
    use crate::state::contact::{BANNER_TIMEOUT_MS, SUBMIT_DELAY_MS};
    use gloo_timers::future::TimeoutFuture;

    leptos::task::spawn_local(async move {
        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
        let Some(ticket) = state.try_update(ContactState::complete_submit) else {
            return;
        };
        log::info!("contact message from {} <{}> sent", message.name, message.email);

        TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
        state.try_update(|s| s.dismiss_banner(ticket));
    });
}

#[cfg(not(feature = "hydrate"))]
fn simulate_delivery(state: RwSignal<ContactState>, message: ContactForm) {
    let _ = (state, message);
}

#[component]
fn FormField(field: Field, state: RwSignal<ContactState>) -> impl IntoView {
    let value = Signal::derive(move || state.with(|s| s.form.get(field).to_owned()));
    let on_input = Callback::new(move |v: String| state.update(|s| s.edit(field, v)));
    let disabled = Signal::derive(move || state.with(ContactState::is_submitting));

    let control = match field {
        Field::Message => view! {
            <Textarea
                id=field.id()
                value=value
                on_input=on_input
                placeholder=placeholder(field)
                required=true
                disabled=disabled
            />
        }
        .into_any(),
        Field::Email => view! {
            <Input
                id=field.id()
                kind="email"
                value=value
                on_input=on_input
                placeholder=placeholder(field)
                required=true
                disabled=disabled
            />
        }
        .into_any(),
        Field::Name | Field::Subject => view! {
            <Input
                id=field.id()
                value=value
                on_input=on_input
                placeholder=placeholder(field)
                required=true
                disabled=disabled
            />
        }
        .into_any(),
    };

    view! {
        <div class="field">
            <FieldLabel for_id=field.id()>{field.label()} " *"</FieldLabel>
            {control}
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let profile = use_content().profile();
    let state = RwSignal::new(ContactState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Ok(message)) = state.try_update(ContactState::begin_submit) {
            simulate_delivery(state, message);
        }
    };

    let submitting = move || state.with(ContactState::is_submitting);

    view! {
        <Title text=meta::page_title("Contact", profile)/>
        <div class="page">
            <header class="page__header fade-up">
                <h1>"Get In Touch"</h1>
                <p>
                    "Have a project in mind or want to collaborate? I'd love to hear from you. Let's create something amazing together."
                </p>
            </header>

            <section class="grid grid--4">
                {profile
                    .contact_channels
                    .iter()
                    .enumerate()
                    .map(|(index, channel)| {
                        view! {
                            <AnimatedCard delay=stagger(index) class="channel">
                                <CardContent>
                                    <div class="channel__icon">
                                        <Icon kind=channel_icon(channel.title) size=22/>
                                    </div>
                                    <h3>{channel.title}</h3>
                                    <p class="channel__value">{channel.value}</p>
                                    <p class="muted small">{channel.description}</p>
                                </CardContent>
                            </AnimatedCard>
                        }
                    })
                    .collect_view()}
            </section>

            <div class="split">
                <Card>
                    <CardHeader>
                        <CardTitle>
                            <Icon kind=IconKind::Message size=20/>
                            "Send me a message"
                        </CardTitle>
                        <CardDescription>
                            "Fill out the form below and I'll get back to you as soon as possible."
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <Show when=move || state.with(ContactState::banner_visible)>
                            <div class="banner banner--success" role="status">
                                <p>{SUCCESS_MESSAGE}</p>
                            </div>
                        </Show>
                        {move || {
                            state
                                .with(|s| s.error.clone())
                                .map(|err| view! { <p class="form-error" role="alert">{err.to_string()}</p> })
                        }}
                        <form class="contact-form" on:submit=on_submit novalidate=true>
                            <div class="contact-form__row">
                                <FormField field=Field::Name state=state/>
                                <FormField field=Field::Email state=state/>
                            </div>
                            <FormField field=Field::Subject state=state/>
                            <FormField field=Field::Message state=state/>
                            <button
                                type="submit"
                                class=button_class(ButtonVariant::Default, ButtonSize::Md, true, "")
                                disabled=submitting
                            >
                                {move || {
                                    if submitting() {
                                        view! {
                                            <span class="spinner" aria-hidden="true"></span>
                                            "Sending..."
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <Icon kind=IconKind::Send size=16/>
                                            "Send Message"
                                        }
                                            .into_any()
                                    }
                                }}
                            </button>
                        </form>
                    </CardContent>
                </Card>

                <div class="stack">
                    <div>
                        <h2>"Let's Connect"</h2>
                        <p class="muted">
                            "I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology and development. Whether you're a startup looking for a developer, an agency needing additional resources, or a fellow developer wanting to collaborate, I'd love to hear from you."
                        </p>
                        <h3>"What I can help with:"</h3>
                        <ul class="bullet-list">
                            {profile.services.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                        </ul>
                    </div>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Prefer other ways to connect?"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            <div class="stack stack--tight">
                                {profile
                                    .socials
                                    .iter()
                                    .filter(|social| social.is_external())
                                    .map(|social| {
                                        let icon = IconKind::for_social(social.label).unwrap_or(IconKind::ExternalLink);
                                        view! {
                                            <AnimatedButton
                                                href=social.href
                                                external=true
                                                variant=ButtonVariant::Outline
                                                glow=GlowColor::Purple
                                                full_width=true
                                            >
                                                <Icon kind=icon size=16/>
                                                {social.label}
                                            </AnimatedButton>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"FAQ"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            {profile
                                .faqs
                                .iter()
                                .map(|faq| {
                                    view! {
                                        <div class="faq">
                                            <h4>{faq.question}</h4>
                                            <p class="muted small">{faq.answer}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </CardContent>
                    </Card>
                </div>
            </div>
        </div>
    }
}
