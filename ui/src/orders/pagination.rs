use dioxus::prelude::*;

use crate::t;

/// Page selection control under the order table.
///
/// Hidden entirely for a single page. Re-selecting the current page is
/// allowed and re-issues the fetch; any dedup is the fetch service's call.
#[component]
pub fn Pagination(
    page_count: u32,
    current_page: Option<u32>,
    on_page_select: EventHandler<u32>,
) -> Element {
    if !is_rendered(page_count) {
        return rsx! {};
    }

    let current = current_page.unwrap_or(1);
    let summary = t!(
        "orders-pagination-summary",
        page = current.to_string(),
        count = page_count.to_string(),
    );

    rsx! {
        nav { class: "pagination", aria_label: t!("orders-pagination-label"),
            button {
                r#type: "button",
                class: "pagination__control",
                disabled: current <= 1,
                onclick: move |_| on_page_select.call(current.saturating_sub(1).max(1)),
                {t!("orders-pagination-previous")}
            }

            for page in 1..=page_count {
                button {
                    r#type: "button",
                    class: if Some(page) == current_page {
                        "pagination__page pagination__page--active"
                    } else {
                        "pagination__page"
                    },
                    aria_label: t!("orders-pagination-page", page = page.to_string()),
                    onclick: move |_| on_page_select.call(page),
                    "{page}"
                }
            }

            button {
                r#type: "button",
                class: "pagination__control",
                disabled: current >= page_count,
                onclick: move |_| on_page_select.call((current + 1).min(page_count)),
                {t!("orders-pagination-next")}
            }

            span { class: "pagination__summary", {summary} }
        }
    }
}

/// The control only appears once there is more than one page.
pub(crate) fn is_rendered(page_count: u32) -> bool {
    page_count > 1
}
