//! Page state handed to resolvers.
//!
//! The host owns the live [`Page`]. Before resolving a trail it is captured
//! into an immutable [`PageSnapshot`], which every resolver of that request
//! shares. The core fields (`url`, `params`, `route_id`, `data`) are always
//! captured; the optional ones only when listed in the snapshot options.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// Optional page fields that are not captured unless requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageField {
    Status,
    Error,
    Form,
    State,
}

/// The full state of the current page, as supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub url: Url,
    pub params: BTreeMap<String, String>,
    /// The route pattern that matched, e.g. `/products/[id]`.
    pub route_id: Option<String>,
    pub data: Value,
    pub status: u16,
    pub error: Option<Value>,
    pub form: Option<Value>,
    pub state: Value,
}

impl Page {
    /// Creates a page for a URL with empty params and data and a 200 status.
    pub fn new(url: Url) -> Self {
        Page {
            url,
            params: BTreeMap::new(),
            route_id: None,
            data: Value::Null,
            status: 200,
            error: None,
            form: None,
            state: Value::Null,
        }
    }

    /// The path component of the URL, used to compose the trail.
    pub fn pathname(&self) -> &str {
        self.url.path()
    }
}

/// An immutable copy of the page state shared by all resolvers of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub url: Url,
    pub params: BTreeMap<String, String>,
    pub route_id: Option<String>,
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
}

impl PageSnapshot {
    /// Captures the core fields of `page` plus the optional fields in `include`.
    pub fn capture(page: &Page, include: &[PageField]) -> Self {
        let mut snapshot = PageSnapshot {
            url: page.url.clone(),
            params: page.params.clone(),
            route_id: page.route_id.clone(),
            data: page.data.clone(),
            status: None,
            error: None,
            form: None,
            state: None,
        };

        for field in include {
            match field {
                PageField::Status => snapshot.status = Some(page.status),
                PageField::Error => snapshot.error = page.error.clone(),
                PageField::Form => snapshot.form = page.form.clone(),
                PageField::State => snapshot.state = Some(page.state.clone()),
            }
        }

        snapshot
    }

    /// Returns the value of a route parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page() -> Page {
        let mut page = Page::new(Url::parse("https://shop.test/products/42?tab=reviews").unwrap());
        page.params.insert("id".to_owned(), "42".to_owned());
        page.route_id = Some("/products/[id]".to_owned());
        page.data = json!({ "product": { "name": "Wireless Headphones" } });
        page.status = 404;
        page.state = json!({ "scroll": 10 });
        page
    }

    #[test]
    fn core_fields_only() {
        let snapshot = PageSnapshot::capture(&page(), &[]);

        assert_eq!(snapshot.url.path(), "/products/42");
        assert_eq!(snapshot.param("id"), Some("42"));
        assert_eq!(snapshot.route_id.as_deref(), Some("/products/[id]"));
        assert_eq!(snapshot.data["product"]["name"], "Wireless Headphones");
        assert_eq!(snapshot.status, None);
        assert_eq!(snapshot.state, None);
    }

    #[test]
    fn included_fields() {
        let snapshot = PageSnapshot::capture(&page(), &[PageField::Status, PageField::State]);

        assert_eq!(snapshot.status, Some(404));
        assert_eq!(snapshot.state, Some(json!({ "scroll": 10 })));
        assert_eq!(snapshot.error, None);
    }

    #[test]
    fn pathname_ignores_query() {
        assert_eq!(page().pathname(), "/products/42");
    }
}
