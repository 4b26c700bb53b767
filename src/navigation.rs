//! Search criteria live in the page URL query string.

use gloo::utils::window;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

use crate::criteria::{ANIMAL_KEY, SEARCH_KEY, SearchCriteria};

pub fn read_criteria() -> Result<SearchCriteria, JsValue> {
    let query = window().location().search()?;
    let params = UrlSearchParams::new_with_str(&query)?;
    let pairs = [SEARCH_KEY, ANIMAL_KEY]
        .into_iter()
        .filter_map(|key| params.get(key).map(|value| (key, value)));
    Ok(SearchCriteria::from_query_pairs(pairs))
}

/// Replaces the current history entry so reloading repeats the search.
pub fn write_criteria(criteria: &SearchCriteria) -> Result<(), JsValue> {
    let location = window().location();
    let params = UrlSearchParams::new()?;
    for (key, value) in criteria.to_query_pairs() {
        params.append(key, value);
    }
    let query = String::from(params.to_string());
    let url = if query.is_empty() {
        location.pathname()?
    } else {
        format!("{}?{}", location.pathname()?, query)
    };
    window().history()?.replace_state_with_url(&JsValue::NULL, "", Some(&url))
}
