use super::*;
use atlas::location::SavedLocation;

#[test]
fn default_has_no_notice() {
    assert!(NoticeState::default().current.is_none());
}

#[test]
fn show_replaces_current_with_fresh_id() {
    let mut state = NoticeState::default();
    let first = state.show(NoticeKind::Info, "one");
    let second = state.show(NoticeKind::Error, "two");
    assert_ne!(first, second);
    let current = state.current.unwrap();
    assert_eq!(current.id, second);
    assert_eq!(current.kind, NoticeKind::Error);
    assert_eq!(current.message, "two");
}

#[test]
fn dismiss_clears_notice() {
    let mut state = NoticeState::default();
    state.show(NoticeKind::Error, "denied");
    state.dismiss();
    assert!(state.current.is_none());
}

#[test]
fn stale_timer_does_not_clear_newer_notice() {
    let mut state = NoticeState::default();
    let old = state.show(NoticeKind::Info, "Location saved");
    state.show(NoticeKind::Error, "User denied Geolocation");

    state.expire(old);
    assert_eq!(state.current.unwrap().message, "User denied Geolocation");
}

#[test]
fn matching_timer_clears_notice() {
    let mut state = NoticeState::default();
    let id = state.show(NoticeKind::Info, "Location saved");
    state.expire(id);
    assert!(state.current.is_none());
}

#[test]
fn add_messages() {
    let loc = SavedLocation::new(13.08, 80.24, 4);
    assert_eq!(add_message(AddOutcome::Inserted(loc)), (NoticeKind::Info, "Location saved".to_owned()));
    assert_eq!(
        add_message(AddOutcome::Duplicate(loc)),
        (NoticeKind::Info, "A location at latitude 13.08 is already saved".to_owned())
    );
}

#[test]
fn locate_messages_are_errors() {
    assert_eq!(
        locate_message(&LocateError::Failed("User denied Geolocation".into())),
        (NoticeKind::Error, "User denied Geolocation".to_owned())
    );
    assert_eq!(
        locate_message(&LocateError::Pending),
        (NoticeKind::Error, "Location is not available yet".to_owned())
    );
}
