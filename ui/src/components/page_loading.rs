use dioxus::prelude::*;

/// Accessible loading indicator. The status message is visually hidden but
/// announced by screen readers.
#[component]
pub fn PageLoading(sr_message: String) -> Element {
    rsx! {
        div { class: "page-loading",
            div { class: "page-loading__spinner", role: "status",
                span { class: "sr-only", "{sr_message}" }
            }
        }
    }
}
