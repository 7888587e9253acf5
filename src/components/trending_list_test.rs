use super::*;
use crate::util::trending::trending_entries;

fn render(entries: Vec<TrendingEntry>) -> String {
    view! { <TrendingItems entries=entries/> }.to_html()
}

#[test]
fn items_carry_their_rank() {
    let html = render(trending_entries(["First", "Second"], 8));
    assert!(html.contains(r#"<li aria-posinset="1">First</li>"#));
    assert!(html.contains(r#"<li aria-posinset="2">Second</li>"#));
    assert_eq!(html.matches("<li ").count(), 2);
}

#[test]
fn headline_text_is_escaped() {
    let html = render(trending_entries(["a <b>"], 8));
    assert!(html.contains(r#"<li aria-posinset="1">a &lt;b&gt;</li>"#));
}
