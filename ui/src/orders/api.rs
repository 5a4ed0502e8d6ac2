//! Order-fetch client: repository trait, wire format, and the HTTP
//! implementation used in web builds.

use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use thiserror::Error;

use super::Order;

/// Failure taxonomy of the fetch service. The view never inspects these;
/// they reach it as an opaque display string.
#[derive(Debug, Error)]
pub enum OrdersApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("order service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed order payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("order service is only reachable from web builds")]
    Unsupported,
}

/// One page of results as delivered by the commerce API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderPage {
    #[serde(default)]
    pub orders: Vec<Order>,
    pub page: u32,
    pub page_count: u32,
}

/// Asynchronous source of order pages. Implementations own retries,
/// timeouts, and dedup if they want any; callers just issue requests and
/// apply whatever completion arrives.
pub trait OrdersRepository {
    fn fetch_page(
        &self,
        username: &str,
        page: u32,
    ) -> LocalBoxFuture<'static, Result<OrderPage, OrdersApiError>>;
}

/// Shared repository handle injected into views through Dioxus context.
#[derive(Clone)]
pub struct OrdersClient(pub Rc<dyn OrdersRepository>);

/// Fetches order pages from the commerce API over HTTP.
pub struct HttpOrdersRepository {
    api_base: String,
}

impl HttpOrdersRepository {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

impl OrdersRepository for HttpOrdersRepository {
    fn fetch_page(
        &self,
        username: &str,
        page: u32,
    ) -> LocalBoxFuture<'static, Result<OrderPage, OrdersApiError>> {
        let url = page_url(&self.api_base, username, page);
        Box::pin(async move {
            let body = fetch_json(&url).await?;
            let page: OrderPage = serde_json::from_str(&body)?;
            Ok(page)
        })
    }
}

/// Build the page-fetch URL. Out-of-range page numbers are forwarded as-is;
/// rejecting them is the service's call.
fn page_url(api_base: &str, username: &str, page: u32) -> String {
    format!(
        "{}/orders?username={}&page={}",
        api_base.trim_end_matches('/'),
        percent_encode(username),
        page
    )
}

/// Percent-encoding for query values.
fn percent_encode(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => c.to_string(),
            _ => {
                let mut buf = [0u8; 4];
                c.encode_utf8(&mut buf)
                    .bytes()
                    .map(|b| format!("%{b:02X}"))
                    .collect()
            }
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
async fn fetch_json(url: &str) -> Result<String, OrdersApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let network = |detail: String| OrdersApiError::Network(detail);

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::Cors);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| network(format!("failed to create request: {e:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| network(format!("failed to set header: {e:?}")))?;

    let window = web_sys::window().ok_or_else(|| network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| network(format!("fetch failed: {e:?}")))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| network("response is not a Response object".to_string()))?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| network(format!("failed to read body: {e:?}")))?,
    )
    .await
    .map_err(|e| network(format!("failed to read body: {e:?}")))?;
    let body = text.as_string().unwrap_or_default();

    let status = resp.status();
    if status >= 400 {
        return Err(OrdersApiError::Status { status, body });
    }
    Ok(body)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_json(url: &str) -> Result<String, OrdersApiError> {
    let _ = url;
    Err(OrdersApiError::Unsupported)
}
