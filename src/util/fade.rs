//! Staggered fade-in schedule for news cards.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

/// Transition applied when a card becomes visible.
pub const FADE_TRANSITION: &str = "opacity 0.5s ease-in-out";

/// Delay before the card at `index` starts fading in.
pub fn delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(stagger_ms))
}

/// Delays for `count` cards in document order.
pub fn schedule(count: usize, stagger_ms: u32) -> Vec<u32> {
    (0..count).map(|i| delay_ms(i, stagger_ms)).collect()
}
