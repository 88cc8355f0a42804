use super::*;

#[test]
fn empty_playlist_is_inactive() {
    let mut cursor = Cursor::for_playlist(0);
    assert_eq!(cursor, Cursor::Inactive);
    assert_eq!(cursor.advance(0), Step::Stayed);
    assert_eq!(cursor.retreat(), Step::Stayed);
    assert!(!cursor.can_advance(0));
    assert!(!cursor.can_retreat());
    assert_eq!(cursor, Cursor::Inactive);
}

#[test]
fn new_playlist_starts_at_first_card() {
    assert_eq!(Cursor::for_playlist(3), Cursor::Active(0));
}

#[test]
fn advances_until_last_card() {
    let mut cursor = Cursor::for_playlist(3);
    assert_eq!(cursor.advance(3), Step::Moved(1));
    assert_eq!(cursor.advance(3), Step::Moved(2));
    assert!(!cursor.can_advance(3));
    assert_eq!(cursor.advance(3), Step::Stayed);
    assert_eq!(cursor, Cursor::Active(2));
}

#[test]
fn retreat_at_first_card_is_noop() {
    let mut cursor = Cursor::for_playlist(3);
    assert!(!cursor.can_retreat());
    assert_eq!(cursor.retreat(), Step::Stayed);
    assert_eq!(cursor, Cursor::Active(0));

    cursor.advance(3);
    assert!(cursor.can_retreat());
    assert_eq!(cursor.retreat(), Step::Moved(0));
}

#[test]
fn jump_does_not_clamp() {
    let mut cursor = Cursor::for_playlist(3);
    assert!(cursor.jump_to(2, 3).is_ok());
    assert_eq!(cursor, Cursor::Active(2));

    match cursor.jump_to(3, 3) {
        Err(Error::OutOfRange { index: 3, len: 3 }) => (),
        other => panic!("Unexpected jump result: {:?}", other),
    }
    assert_eq!(cursor, Cursor::Active(2));
}

#[test]
fn jump_on_empty_playlist_fails() {
    let mut cursor = Cursor::for_playlist(0);
    assert!(cursor.jump_to(0, 0).is_err());
    assert_eq!(cursor, Cursor::Inactive);
}
