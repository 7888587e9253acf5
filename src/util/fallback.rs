//! Label resolution for the placeholder that replaces a broken image.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

/// Label shown in the fallback container. Missing or blank attributes use
/// `default`.
pub fn fallback_label(attr: Option<&str>, default: &str) -> String {
    attr.filter(|text| !text.is_empty()).unwrap_or(default).to_owned()
}

/// Whether an image element is already known to have failed loading.
///
/// An image with no source never loads but is not broken either.
pub fn is_broken(src: &str, complete: bool, natural_width: u32) -> bool {
    !src.is_empty() && complete && natural_width == 0
}
