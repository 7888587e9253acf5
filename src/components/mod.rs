//! Leptos views mounted into containers of the server-rendered page.

pub mod ticker_strip;
pub mod trending_list;
