//! Market ticker sample data.
//!
//! The strip is static: five quotes rendered twice in a row so the CSS
//! marquee animation can wrap without a visible seam.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickerQuote {
    pub symbol: &'static str,
    pub change: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

pub const SAMPLE_QUOTES: [TickerQuote; 5] = [
    TickerQuote { symbol: "NIFTY 50", change: "+0.76%" },
    TickerQuote { symbol: "SENSEX", change: "+0.42%" },
    TickerQuote { symbol: "USD/INR", change: "-0.18%" },
    TickerQuote { symbol: "BTC", change: "+1.45%" },
    TickerQuote { symbol: "GOLD", change: "-0.21%" },
];

impl TickerQuote {
    /// `Up` iff the change starts with `+`; anything else reads as down.
    pub fn direction(&self) -> Direction {
        if self.change.starts_with('+') { Direction::Up } else { Direction::Down }
    }

    pub fn class_name(&self) -> String {
        format!("ticker-item {}", self.direction().as_class())
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.symbol, self.change)
    }
}

/// The quotes followed by themselves, for a seamless loop.
pub fn looped(quotes: &[TickerQuote]) -> Vec<TickerQuote> {
    quotes.iter().chain(quotes).copied().collect()
}
