//! Bootstrap data handed over by the hosting page shell.
//!
//! The account shell renders this app into a page whose root element carries
//! `data-username` and `data-api-base` attributes; authentication itself
//! happens upstream. Native builds (tests) fall back to the defaults.

const DEFAULT_API_BASE: &str = "/api/commerce/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Account whose orders are shown. Empty when the shell supplied none;
    /// the order service rejects the fetch in that case.
    pub username: String,
    /// Base URL of the commerce API.
    pub api_base: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl BootstrapConfig {
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());

        let attr = |name: &str| {
            root.as_ref()
                .and_then(|el| el.get_attribute(name))
                .filter(|value| !value.trim().is_empty())
        };

        Self {
            username: attr("data-username").unwrap_or_default(),
            api_base: attr("data-api-base").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
