use super::*;

#[test]
fn schedule_staggers_by_index() {
    assert_eq!(schedule(4, 150), vec![0, 150, 300, 450]);
}

#[test]
fn schedule_is_empty_without_cards() {
    assert!(schedule(0, 150).is_empty());
}

#[test]
fn first_card_starts_immediately() {
    assert_eq!(delay_ms(0, 1_000), 0);
}

#[test]
fn delay_saturates_instead_of_wrapping() {
    assert_eq!(delay_ms(usize::MAX, 150), u32::MAX);
    assert_eq!(delay_ms(40_000_000, 150), u32::MAX);
}

#[test]
fn transition_is_half_second_ease() {
    assert_eq!(FADE_TRANSITION, "opacity 0.5s ease-in-out");
}
