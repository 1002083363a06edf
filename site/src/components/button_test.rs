use super::*;

#[test]
fn default_button_class() {
    assert_eq!(
        button_class(ButtonVariant::default(), ButtonSize::default(), false, ""),
        "btn btn--default btn--md"
    );
}

#[test]
fn full_width_and_extra_classes_append() {
    assert_eq!(
        button_class(ButtonVariant::Outline, ButtonSize::Lg, true, "  hero-cta "),
        "btn btn--outline btn--lg btn--full hero-cta"
    );
}

#[test]
fn each_variant_and_size_has_distinct_class() {
    let variants = [ButtonVariant::Default, ButtonVariant::Outline, ButtonVariant::Ghost, ButtonVariant::Secondary];
    let mut classes: Vec<_> = variants.iter().map(|v| v.class()).collect();
    classes.dedup();
    assert_eq!(classes.len(), 4);
    assert_eq!(ButtonSize::Sm.class(), "btn--sm");
    assert_eq!(ButtonSize::Lg.class(), "btn--lg");
}

#[test]
fn glow_shadows_use_fixed_rgba() {
    assert_eq!(GlowColor::Blue.shadow(), "0 0 20px rgba(59, 130, 246, 0.5)");
    assert_eq!(GlowColor::Purple.shadow(), "0 0 20px rgba(147, 51, 234, 0.5)");
    assert_eq!(GlowColor::Pink.shadow(), "0 0 20px rgba(236, 72, 153, 0.5)");
    assert_eq!(GlowColor::Green.shadow(), "0 0 20px rgba(34, 197, 94, 0.5)");
    assert_eq!(GlowColor::default(), GlowColor::Blue);
}

#[test]
fn external_links_open_in_new_tab() {
    assert_eq!(external_attrs(true), (Some("_blank"), Some("noopener noreferrer")));
    assert_eq!(external_attrs(false), (None, None));
}
