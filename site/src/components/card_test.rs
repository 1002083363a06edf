use super::*;

#[test]
fn stagger_steps_by_a_tenth_of_a_second() {
    assert_eq!(animation_style(stagger(0)), "animation-delay: 0.00s");
    assert_eq!(animation_style(stagger(3)), "animation-delay: 0.30s");
}

#[test]
fn hover_lift_is_opt_out() {
    assert_eq!(animated_card_class(true, ""), "card animated-card animated-card--hover");
    assert_eq!(animated_card_class(false, "stat"), "card animated-card stat");
}

#[test]
fn extra_classes_are_trimmed() {
    assert_eq!(with_extra("card__title", "  big "), "card__title big");
    assert_eq!(with_extra("card__title", " "), "card__title");
}
