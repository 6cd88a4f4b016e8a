use super::*;

#[test]
fn event_result_predicates() {
    assert!(EventResult::Consumed.is_consumed());
    assert!(EventResult::Ignored.is_ignored());
    assert!(EventResult::Quit.is_quit());
    assert!(!EventResult::Quit.is_consumed());
}

#[test]
fn from_changed_maps_flag() {
    assert_eq!(EventResult::from_changed(true), EventResult::Consumed);
    assert_eq!(EventResult::from_changed(false), EventResult::Ignored);
}
