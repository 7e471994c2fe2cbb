//! Tests for the transient message board

use super::super::{MessageBoard, MessageKind, MessagePhase};
use std::time::{Duration, Instant};

fn board() -> MessageBoard {
    MessageBoard::new(Duration::from_millis(3000), Duration::from_millis(300))
}

#[test]
fn test_message_lifecycle() {
    let mut board = board();
    let start = Instant::now();
    let message = board.post(MessageKind::Error, "Please enter semantic rules.", start);

    assert_eq!(board.phase(&message, start), MessagePhase::Shown);
    assert_eq!(
        board.phase(&message, start + Duration::from_millis(2999)),
        MessagePhase::Shown
    );
    assert_eq!(
        board.phase(&message, start + Duration::from_millis(3000)),
        MessagePhase::FadingOut
    );
    assert_eq!(
        board.phase(&message, start + Duration::from_millis(3300)),
        MessagePhase::Expired
    );
}

#[test]
fn test_active_prunes_expired() {
    let mut board = board();
    let start = Instant::now();
    board.post(MessageKind::Info, "first", start);
    board.post(MessageKind::Error, "second", start + Duration::from_secs(2));

    let active = board.active(start + Duration::from_millis(3100));
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].1, MessagePhase::FadingOut);
    assert_eq!(active[1].1, MessagePhase::Shown);

    let active = board.active(start + Duration::from_secs(4));
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].0.text, "second");

    board.prune(start + Duration::from_secs(10));
    assert!(board.is_empty());
}

#[test]
fn test_kind() {
    assert!(MessageKind::Error.is_error());
    assert!(!MessageKind::default().is_error());
    assert_eq!(MessageKind::Info.as_str(), "info");
}
