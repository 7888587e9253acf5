//! Trending list items built from on-page headlines.

#[cfg(all(test, feature = "ssr"))]
#[path = "trending_list_test.rs"]
mod trending_list_test;

use leptos::prelude::*;

use crate::util::trending::TrendingEntry;

/// One `<li>` per entry, ranked through `aria-posinset`.
#[component]
pub fn TrendingItems(entries: Vec<TrendingEntry>) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| {
            view! { <li aria-posinset=entry.position.to_string()>{entry.title}</li> }
        })
        .collect_view()
}
