use serde::Deserialize;

/// Raw query string pairs, in request order.
///
/// Browsers and older clients repeat keys (`?page=1&page=2`); a plain struct
/// would reject the duplicate field, so the first occurrence wins instead.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    // `?page=abc` falls back to the default page instead of rejecting the request
    pub fn page(&self) -> Option<i64> {
        self.first("page")
            .and_then(|v| v.trim().parse::<i64>().ok())
    }
}
