use crate::transport::{HttpRequest, Transport};
use scraper::{Html, Selector};
use serde_json::Value;

/// Selects the `<script>` element in which a Behance page embeds its initial
/// store state as JSON
static STORE_STATE_SELECTOR: &str = r#"script[type="application/json"]#beconfig-store_state"#;

/// Fetches image URLs from Behance gallery (project) pages by reading the
/// store state embedded in the page's HTML
#[derive(Clone, Debug)]
pub struct GalleryScraper<T> {
    transport: T,
}

impl<T: Transport> GalleryScraper<T> {
    pub fn new(transport: T) -> GalleryScraper<T> {
        GalleryScraper { transport }
    }

    /// Fetch the gallery page at `url` and return the URLs of the images in
    /// its project modules, in page order.
    ///
    /// Failures are logged and result in an empty list.
    pub fn scrape(&self, url: &str) -> Vec<String> {
        let request = HttpRequest::get(url).header("X-Requested-With", "XMLHttpRequest");
        let response = match self.transport.perform(request) {
            Ok(r) if r.is_success() => r,
            Ok(r) => {
                tracing::warn!(url, status = r.status, "Gallery page request was not successful");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Failed to fetch gallery page");
                return Vec::new();
            }
        };
        extract_image_urls(&String::from_utf8_lossy(&response.body))
    }
}

/// Extract the project module image URLs from the store state embedded in a
/// Behance gallery page.  Returns an empty list if the page has no store
/// state or the state lacks project modules.
pub fn extract_image_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = store_state_selector();
    let mut urls = Vec::new();
    for script in document.select(&selector) {
        let text = script.text().collect::<String>();
        match serde_json::from_str::<Value>(&text) {
            Ok(state) => urls.extend(module_image_urls(&state)),
            Err(e) => tracing::debug!(error = %e, "Store state is not valid JSON"),
        }
    }
    urls
}

fn module_image_urls(state: &Value) -> Vec<String> {
    state
        .pointer("/project/project/modules")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|module| {
            module
                .pointer("/imageSizes/allAvailable/0/url")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .collect()
}

fn store_state_selector() -> Selector {
    Selector::parse(STORE_STATE_SELECTOR).expect("store state selector should be valid")
}
