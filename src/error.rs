//! Error type shared by every page enhancement.
//!
//! A missing target element is never an error; enhancements report that as a
//! skip. Errors describe a broken environment: no window, a DOM call that
//! threw, or input that could not be parsed.

/// Failure raised while enhancing the page.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid page url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid enhancer config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl EnhanceError {
    /// Wrap a thrown JS value from a DOM call.
    pub fn dom(err: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{err:?}"))
    }

    /// Wrap a thrown JS value from a `localStorage` call.
    pub fn storage(err: &wasm_bindgen::JsValue) -> Self {
        Self::Storage(format!("{err:?}"))
    }
}
