//! Ticker strip items.
//!
//! Mounted once into the ticker track; the CSS marquee scrolls the doubled
//! sequence so the wrap point is invisible.

#[cfg(all(test, feature = "ssr"))]
#[path = "ticker_strip_test.rs"]
mod ticker_strip_test;

use leptos::prelude::*;

use crate::util::ticker::TickerQuote;

/// One span per quote, classed `ticker-item up|down`.
#[component]
pub fn TickerItems(quotes: Vec<TickerQuote>) -> impl IntoView {
    quotes
        .into_iter()
        .map(|quote| {
            view! { <span class=quote.class_name()>{quote.label()}</span> }
        })
        .collect_view()
}
