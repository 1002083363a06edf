use super::*;

#[test]
fn social_labels_map_to_icons() {
    assert_eq!(IconKind::for_social("GitHub"), Some(IconKind::Github));
    assert_eq!(IconKind::for_social("LinkedIn"), Some(IconKind::Linkedin));
    assert_eq!(IconKind::for_social("Email"), Some(IconKind::Mail));
    assert_eq!(IconKind::for_social("Mastodon"), None);
}

#[test]
fn every_icon_has_path_data() {
    for kind in [IconKind::Menu, IconKind::Sun, IconKind::Moon, IconKind::Github, IconKind::Send, IconKind::Check] {
        assert!(!kind.paths().is_empty());
        assert!(kind.paths().iter().all(|d| d.starts_with(['M', 'm'])), "{kind:?}");
    }
}
