//! Page enhancer: runs every enhancement once the document is ready.
//!
//! ARCHITECTURE
//! ============
//! Enhancements are independent. Each reads its own slice of the page through
//! the configured selectors and returns a report. `run_isolated` logs each
//! outcome and moves on, so one failing step never blocks the others.
//!
//! Long-lived listeners (theme switch, image errors, search submit) and fade
//! timers are leaked on purpose: they live as long as the page.


#[cfg(feature = "hydrate")]
mod dom;

use std::fmt;

use crate::error::EnhanceError;
#[cfg(feature = "hydrate")]
use crate::{
    config::EnhancerConfig,
    util::relative_time::{Clock, SystemClock},
};

/// The independent enhancements applied to a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Enhancement {
    CardFadeIn,
    ThemeToggle,
    RelativeTime,
    ImageFallback,
    Ticker,
    Trending,
    SearchForm,
}

impl Enhancement {
    pub const ALL: [Self; 7] = [
        Self::CardFadeIn,
        Self::ThemeToggle,
        Self::RelativeTime,
        Self::ImageFallback,
        Self::Ticker,
        Self::Trending,
        Self::SearchForm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CardFadeIn => "card-fade-in",
            Self::ThemeToggle => "theme-toggle",
            Self::RelativeTime => "relative-time",
            Self::ImageFallback => "image-fallback",
            Self::Ticker => "ticker",
            Self::Trending => "trending",
            Self::SearchForm => "search-form",
        }
    }
}

impl fmt::Display for Enhancement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one enhancement that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnhancementReport {
    pub enhancement: Enhancement,
    /// Elements created, rewritten, or wired.
    pub touched: usize,
    /// The target element was not on the page.
    pub skipped: bool,
}

impl EnhancementReport {
    pub fn applied(enhancement: Enhancement, touched: usize) -> Self {
        Self { enhancement, touched, skipped: false }
    }

    pub fn skipped(enhancement: Enhancement) -> Self {
        Self { enhancement, touched: 0, skipped: true }
    }
}

/// One enhancement, deferred until `run_isolated` calls it.
pub type Step<'a> = (Enhancement, Box<dyn FnOnce() -> Result<EnhancementReport, EnhanceError> + 'a>);

pub fn step<'a>(
    enhancement: Enhancement,
    run: impl FnOnce() -> Result<EnhancementReport, EnhanceError> + 'a,
) -> Step<'a> {
    (enhancement, Box::new(run))
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub applied: Vec<EnhancementReport>,
    pub skipped: Vec<Enhancement>,
    pub failed: Vec<(Enhancement, String)>,
}

/// Run every step in order, logging failures without stopping.
pub fn run_isolated(steps: Vec<Step<'_>>) -> RunSummary {
    let mut summary = RunSummary::default();
    for (enhancement, run) in steps {
        match run() {
            Ok(report) if report.skipped => {
                log::debug!("{enhancement}: target not on page");
                summary.skipped.push(enhancement);
            }
            Ok(report) => {
                log::debug!("{enhancement}: {} element(s)", report.touched);
                summary.applied.push(report);
            }
            Err(err) => {
                log::warn!("{enhancement} failed: {err}");
                summary.failed.push((enhancement, err.to_string()));
            }
        }
    }
    summary
}

/// Whether `document.readyState` means the markup is fully parsed.
///
/// Both `interactive` and `complete` qualify; only `loading` waits for
/// `DOMContentLoaded`.
pub fn is_structure_ready(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Enhancer bound to one document.
#[cfg(feature = "hydrate")]
pub struct PageEnhancer<C = SystemClock> {
    document: web_sys::Document,
    config: EnhancerConfig,
    clock: C,
}

#[cfg(feature = "hydrate")]
impl PageEnhancer<SystemClock> {
    /// Bind to the current window's document, reading inline config overrides.
    pub fn from_window() -> Result<Self, EnhanceError> {
        let document = web_sys::window()
            .ok_or(EnhanceError::NoWindow)?
            .document()
            .ok_or(EnhanceError::NoDocument)?;
        let config = EnhancerConfig::from_document(&document);
        Ok(Self::new(document, config, SystemClock))
    }
}

#[cfg(feature = "hydrate")]
impl<C: Clock> PageEnhancer<C> {
    pub fn new(document: web_sys::Document, config: EnhancerConfig, clock: C) -> Self {
        Self { document, config, clock }
    }

    pub fn run(&self) -> RunSummary {
        let document = &self.document;
        let config = &self.config;
        let clock = &self.clock;
        run_isolated(vec![
            step(Enhancement::CardFadeIn, || dom::fade_in_cards(document, config)),
            step(Enhancement::ThemeToggle, || dom::init_theme_toggle(document, config)),
            step(Enhancement::RelativeTime, || dom::render_relative_times(document, config, clock)),
            step(Enhancement::ImageFallback, || dom::install_image_fallback(document, config)),
            step(Enhancement::Ticker, || dom::render_ticker(document, config)),
            step(Enhancement::Trending, || dom::render_trending(document, config)),
            step(Enhancement::SearchForm, || dom::install_search_normalizer(document, config)),
        ])
    }
}

/// Enhance the page now if its structure is ready, otherwise on
/// `DOMContentLoaded`.
#[cfg(feature = "hydrate")]
pub fn run_when_ready() -> Result<(), EnhanceError> {
    use wasm_bindgen::{JsCast, closure::Closure};

    let document = web_sys::window()
        .ok_or(EnhanceError::NoWindow)?
        .document()
        .ok_or(EnhanceError::NoDocument)?;
    if is_structure_ready(&document.ready_state()) {
        enhance_now();
        return Ok(());
    }
    let on_ready = Closure::<dyn FnMut()>::once(enhance_now);
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| EnhanceError::dom(&e))?;
    on_ready.forget();
    Ok(())
}

#[cfg(feature = "hydrate")]
fn enhance_now() {
    match PageEnhancer::from_window() {
        Ok(enhancer) => {
            let summary = enhancer.run();
            log::info!(
                "page enhanced: {} applied, {} skipped, {} failed",
                summary.applied.len(),
                summary.skipped.len(),
                summary.failed.len()
            );
        }
        Err(err) => log::warn!("page enhancer unavailable: {err}"),
    }
}
