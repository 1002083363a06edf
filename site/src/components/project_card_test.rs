use super::*;

#[test]
fn more_label_only_when_technologies_are_hidden() {
    assert_eq!(more_label(0), None);
    assert_eq!(more_label(2).as_deref(), Some("+2 more"));
}
