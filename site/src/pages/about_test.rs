use content::{ContentSource, StaticContent};

use super::*;

#[test]
fn every_skill_gets_a_distinct_icon() {
    let icons: Vec<_> = StaticContent::builtin().profile().skills.iter().map(|s| skill_icon(s.title)).collect();
    assert_eq!(icons, [IconKind::Code, IconKind::Palette, IconKind::Zap, IconKind::Users]);
}

#[test]
fn stat_icons_follow_labels() {
    assert_eq!(stat_icon("Cups of Coffee"), IconKind::Coffee);
    assert_eq!(stat_icon("Happy Clients"), IconKind::Users);
    assert_eq!(stat_icon("Lines of Code"), IconKind::Code);
    assert_eq!(stat_icon("Projects Completed"), IconKind::Award);
}
