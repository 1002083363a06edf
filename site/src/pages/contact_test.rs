use content::{ContentSource, StaticContent};

use super::*;

#[test]
fn every_field_has_a_placeholder() {
    for field in Field::ALL {
        assert!(!placeholder(field).is_empty(), "{field}");
    }
    assert_eq!(placeholder(Field::Email), "your.email@example.com");
}

#[test]
fn contact_channels_map_to_icons() {
    let icons: Vec<_> = StaticContent::builtin()
        .profile()
        .contact_channels
        .iter()
        .map(|c| channel_icon(c.title))
        .collect();
    assert_eq!(icons, [IconKind::Mail, IconKind::Phone, IconKind::MapPin, IconKind::Clock]);
}
