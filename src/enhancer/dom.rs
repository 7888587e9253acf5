//! Browser wiring for each enhancement.
//!
//! Every function reads its targets through the configured selectors, hands
//! the decision to the matching `util` module, and writes the result back.
//! A missing target is reported as a skip; only failing DOM calls are errors.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, HtmlInputElement};

use super::{Enhancement, EnhancementReport};
use crate::components::{ticker_strip::TickerItems, trending_list::TrendingItems};
use crate::config::EnhancerConfig;
use crate::error::EnhanceError;
use crate::util::fade::{FADE_TRANSITION, schedule};
use crate::util::fallback::{fallback_label, is_broken};
use crate::util::relative_time::{Clock, to_relative};
use crate::util::search::{SearchOutcome, normalize};
use crate::util::theme::{LocalThemeStore, ThemeToggle};
use crate::util::ticker::{SAMPLE_QUOTES, looped};
use crate::util::trending::trending_entries;

type Outcome = Result<EnhancementReport, EnhanceError>;

fn dom_err(err: wasm_bindgen::JsValue) -> EnhanceError {
    EnhanceError::dom(&err)
}

fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let list = root.query_selector_all(selector).map_err(dom_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

fn query_in<T: JsCast + Clone>(scope: &Element, selector: &str) -> Result<Option<T>, EnhanceError> {
    Ok(scope
        .query_selector(selector)
        .map_err(dom_err)?
        .and_then(|el| el.dyn_ref::<T>().cloned()))
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

// =============================================================
// Card fade-in
// =============================================================

pub(super) fn fade_in_cards(document: &Document, config: &EnhancerConfig) -> Outcome {
    let cards: Vec<HtmlElement> = query_all(document, &config.card_selector)?
        .iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
        .collect();
    if cards.is_empty() {
        return Ok(EnhancementReport::skipped(Enhancement::CardFadeIn));
    }
    let count = cards.len();
    for (card, delay) in cards.into_iter().zip(schedule(count, config.stagger_ms)) {
        card.style().set_property("opacity", "0").map_err(dom_err)?;
        gloo_timers::callback::Timeout::new(delay, move || {
            let style = card.style();
            if let Err(err) = style
                .set_property("transition", FADE_TRANSITION)
                .and_then(|()| style.set_property("opacity", "1"))
            {
                log::debug!("card fade-in interrupted: {err:?}");
            }
        })
        .forget();
    }
    Ok(EnhancementReport::applied(Enhancement::CardFadeIn, count))
}

// =============================================================
// Theme toggle
// =============================================================

fn prefers_dark() -> Option<bool> {
    match web_sys::window()?.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => Some(query.matches()),
        _ => None,
    }
}

pub(super) fn init_theme_toggle(document: &Document, config: &EnhancerConfig) -> Outcome {
    let root = document
        .document_element()
        .ok_or_else(|| EnhanceError::Dom("document has no root element".into()))?;
    let mut toggle = ThemeToggle::new(LocalThemeStore::new(&config.theme_storage_key));
    let system_dark = if config.follow_system_theme { prefers_dark() } else { None };
    let rendered = root.get_attribute(&config.theme_attribute);
    let initial = toggle.initial(rendered.as_deref(), system_dark);
    if let Some(theme) = initial.apply {
        root.set_attribute(&config.theme_attribute, theme.as_str()).map_err(dom_err)?;
    }

    let Some(switch) = document
        .get_element_by_id(&config.theme_switch_id)
        .and_then(|el| el.dyn_ref::<HtmlInputElement>().cloned())
    else {
        return Ok(EnhancementReport::applied(Enhancement::ThemeToggle, usize::from(initial.apply.is_some())));
    };
    switch.set_checked(initial.checked);

    let attribute = config.theme_attribute.clone();
    let switch_for_cb = switch.clone();
    let on_change = Closure::wrap(Box::new(move || {
        let theme = toggle.toggle(switch_for_cb.checked());
        if let Err(err) = root.set_attribute(&attribute, theme.as_str()) {
            log::warn!("theme attribute not applied: {err:?}");
        }
    }) as Box<dyn FnMut()>);
    switch
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    on_change.forget();
    Ok(EnhancementReport::applied(Enhancement::ThemeToggle, 1))
}

// =============================================================
// Relative published times
// =============================================================

pub(super) fn render_relative_times(document: &Document, config: &EnhancerConfig, clock: &impl Clock) -> Outcome {
    let nodes = query_all(document, &config.published_selector)?;
    if nodes.is_empty() {
        return Ok(EnhancementReport::skipped(Enhancement::RelativeTime));
    }
    let mut touched = 0;
    for node in &nodes {
        let Some(text_el) = query_in::<Element>(node, &config.published_text_selector)? else {
            continue;
        };
        let relative = to_relative(node.get_attribute(&config.published_attribute).as_deref(), clock);
        if !relative.is_empty() {
            text_el.set_text_content(Some(&relative));
            touched += 1;
        }
    }
    Ok(EnhancementReport::applied(Enhancement::RelativeTime, touched))
}

// =============================================================
// Image fallback
// =============================================================

struct FallbackSettings {
    image_selector: String,
    attribute: String,
    label: String,
    class: String,
}

fn replace_with_fallback(document: &Document, img: &Element, settings: &FallbackSettings) -> Result<bool, EnhanceError> {
    if img.parent_node().is_none() || !img.matches(&settings.image_selector).map_err(dom_err)? {
        return Ok(false);
    }
    let label = fallback_label(img.get_attribute(&settings.attribute).as_deref(), &settings.label);
    let container = document.create_element("div").map_err(dom_err)?;
    container.set_class_name(&settings.class);
    let span = document.create_element("span").map_err(dom_err)?;
    span.set_text_content(Some(&label));
    container.append_child(&span).map_err(dom_err)?;
    img.replace_with_with_node_1(&container).map_err(dom_err)?;
    Ok(true)
}

pub(super) fn install_image_fallback(document: &Document, config: &EnhancerConfig) -> Outcome {
    let settings = FallbackSettings {
        image_selector: config.fallback_image_selector.clone(),
        attribute: config.fallback_attribute.clone(),
        label: config.fallback_label.clone(),
        class: config.fallback_class.clone(),
    };

    // Images that failed before this listener existed.
    let mut replaced = 0;
    for el in query_all(document, "img")? {
        let Some(img) = el.dyn_ref::<HtmlImageElement>() else {
            continue;
        };
        if is_broken(&img.src(), img.complete(), img.natural_width()) && replace_with_fallback(document, &el, &settings)? {
            replaced += 1;
        }
    }

    // `error` does not bubble from images; listen in the capture phase.
    let doc = document.clone();
    let on_error = Closure::wrap(Box::new(move |event: Event| {
        let Some(img) = event.target().and_then(|t| t.dyn_ref::<HtmlImageElement>().cloned()) else {
            return;
        };
        if let Err(err) = replace_with_fallback(&doc, &img, &settings) {
            log::warn!("image fallback failed: {err}");
        }
    }) as Box<dyn FnMut(Event)>);
    document
        .add_event_listener_with_callback_and_bool("error", on_error.as_ref().unchecked_ref(), true)
        .map_err(dom_err)?;
    on_error.forget();
    Ok(EnhancementReport::applied(Enhancement::ImageFallback, replaced))
}

// =============================================================
// Ticker and trending
// =============================================================

pub(super) fn render_ticker(document: &Document, config: &EnhancerConfig) -> Outcome {
    let Some(track) = html_by_id(document, &config.ticker_track_id) else {
        return Ok(EnhancementReport::skipped(Enhancement::Ticker));
    };
    let quotes = looped(&SAMPLE_QUOTES);
    let count = quotes.len();
    leptos::mount::mount_to(track, move || view! { <TickerItems quotes=quotes/> }).forget();
    Ok(EnhancementReport::applied(Enhancement::Ticker, count))
}

pub(super) fn render_trending(document: &Document, config: &EnhancerConfig) -> Outcome {
    let Some(list) = html_by_id(document, &config.trending_list_id) else {
        return Ok(EnhancementReport::skipped(Enhancement::Trending));
    };
    let titles: Vec<String> = query_all(document, &config.title_selector)?
        .iter()
        .map(|el| el.text_content().unwrap_or_default())
        .collect();
    let entries = trending_entries(titles, config.trending_limit);
    if entries.is_empty() {
        return Ok(EnhancementReport::skipped(Enhancement::Trending));
    }
    let count = entries.len();
    leptos::mount::mount_to(list, move || view! { <TrendingItems entries=entries/> }).forget();
    Ok(EnhancementReport::applied(Enhancement::Trending, count))
}

// =============================================================
// Search form
// =============================================================

fn handle_submit(
    form: &Element,
    event: &Event,
    input_selector: &str,
    category_selector: &str,
) -> Result<(), EnhanceError> {
    let input = query_in::<HtmlInputElement>(form, input_selector)?;
    let raw = input.as_ref().map(HtmlInputElement::value).unwrap_or_default();
    let category = query_in::<HtmlInputElement>(form, category_selector)?.map(|el| el.value());
    let location = web_sys::window().ok_or(EnhanceError::NoWindow)?.location();
    let href = location.href().map_err(dom_err)?;

    match normalize(&raw, &href, category.as_deref())? {
        SearchOutcome::Submit { query } => {
            if let Some(input) = input {
                input.set_value(&query);
            }
        }
        SearchOutcome::Navigate { url } => {
            event.prevent_default();
            location.assign(&url).map_err(dom_err)?;
        }
    }
    Ok(())
}

pub(super) fn install_search_normalizer(document: &Document, config: &EnhancerConfig) -> Outcome {
    let Some(form) = document.query_selector(&config.search_form_selector).map_err(dom_err)? else {
        return Ok(EnhancementReport::skipped(Enhancement::SearchForm));
    };
    let input_selector = config.search_input_selector.clone();
    let category_selector = config.category_input_selector.clone();
    let form_for_cb = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        if let Err(err) = handle_submit(&form_for_cb, &event, &input_selector, &category_selector) {
            log::warn!("search normalization skipped: {err}");
        }
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    on_submit.forget();
    Ok(EnhancementReport::applied(Enhancement::SearchForm, 1))
}
