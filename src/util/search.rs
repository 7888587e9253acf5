//! Search form normalization.
//!
//! A non-empty query is trimmed and submitted as usual. An empty query
//! cancels the submission and navigates to the current page with `search`
//! removed, keeping the selected category.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use url::Url;

use crate::error::EnhanceError;

pub const SEARCH_PARAM: &str = "search";
pub const CATEGORY_PARAM: &str = "category";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Let the form submit with the input rewritten to `query`.
    Submit { query: String },
    /// Cancel the submission and load `url` instead.
    Navigate { url: String },
}

/// Decide what a submission of `raw` should do.
///
/// `current_url` is only parsed when the query is empty.
pub fn normalize(raw: &str, current_url: &str, hidden_category: Option<&str>) -> Result<SearchOutcome, EnhanceError> {
    let query = raw.trim();
    if !query.is_empty() {
        return Ok(SearchOutcome::Submit { query: query.to_owned() });
    }
    let url = cleared_search_url(current_url, hidden_category.filter(|c| !c.is_empty()))?;
    Ok(SearchOutcome::Navigate { url: url.into() })
}

/// `current_url` without any `search` parameter, with `category` set when
/// given. Setting replaces the first existing `category` in place and drops
/// any repeats.
pub fn cleared_search_url(current_url: &str, category: Option<&str>) -> Result<Url, EnhanceError> {
    let mut url = Url::parse(current_url)?;
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| *key != SEARCH_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if let Some(category) = category {
        let mut seen = false;
        pairs.retain_mut(|(key, value)| {
            if *key != CATEGORY_PARAM {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            category.clone_into(value);
            true
        });
        if !seen {
            pairs.push((CATEGORY_PARAM.to_owned(), category.to_owned()));
        }
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(&pairs);
    }
    Ok(url)
}
