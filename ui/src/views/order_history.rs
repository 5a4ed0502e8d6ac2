//! The order-history page: the fetch loop plus the four render stages.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::PageLoading;
use crate::orders::{OrdersClient, OrdersState, OrdersTable, Pagination};
use crate::t;

/// Which of the four mutually exclusive stages the page is in, derived
/// purely from [`OrdersState`]. Loading wins over everything else; an error
/// only shows once the fetch that produced it is no longer in flight.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Stage {
    Loading,
    Failed(String),
    Populated,
    Empty,
}

impl Stage {
    pub(crate) fn derive(state: &OrdersState) -> Self {
        if state.loading {
            return Self::Loading;
        }
        if let Some(error) = &state.loading_error {
            return Self::Failed(error.clone());
        }
        if state.orders.is_empty() {
            Self::Empty
        } else {
            Self::Populated
        }
    }
}

/// Paginated list of the account's past purchase orders.
///
/// The repository arrives through context ([`OrdersClient`]); the username
/// comes from the hosting shell and is fixed for the lifetime of the mount.
/// Page selection goes through a coroutine so each request spawns as its
/// own task: a new selection never waits on an in-flight fetch, and the
/// sequence check in `OrdersState` drops whatever lands late.
#[component]
pub fn OrderHistoryView(username: String) -> Element {
    let client = use_context::<OrdersClient>();
    // Seeded as loading: the mount fetch below is queued in the same frame,
    // so the first paint must not flash the empty stage.
    let mut state = use_signal(OrdersState::mounting);

    let fetcher = use_coroutine(move |mut rx: UnboundedReceiver<u32>| {
        let client = client.clone();
        let username = username.clone();

        async move {
            while let Some(page) = rx.next().await {
                let seq = state.with_mut(|s| s.begin_fetch());
                tracing::debug!(page, seq, "fetching order history page");

                let request = client.0.fetch_page(&username, page);
                spawn(async move {
                    match request.await {
                        Ok(result) => state.with_mut(|s| s.apply_success(seq, result)),
                        Err(err) => {
                            tracing::warn!(%err, page, "order history fetch failed");
                            state.with_mut(|s| s.apply_failure(seq, err.to_string()));
                        }
                    }
                });
            }
        }
    });

    // One fetch per mount. TODO: drive the page number from the route once
    // the account shell exposes /orders/page/:n.
    use_hook(|| fetcher.send(1));

    let snapshot = state();
    let stage = Stage::derive(&snapshot);

    rsx! {
        div { class: "page page-order-history",
            h1 { {t!("orders-heading")} }

            match stage {
                Stage::Loading => rsx! {
                    PageLoading { sr_message: t!("orders-loading") }
                },
                Stage::Failed(error) => rsx! {
                    div { class: "order-history__error", role: "alert",
                        {t!("orders-loading-error", error = error)}
                    }
                },
                Stage::Populated => rsx! {
                    OrdersTable { orders: snapshot.orders.clone() }
                    Pagination {
                        page_count: snapshot.page_count,
                        current_page: snapshot.current_page,
                        on_page_select: move |page| fetcher.send(page),
                    }
                },
                Stage::Empty => rsx! {
                    p { class: "order-history__empty", {t!("orders-none")} }
                },
            }
        }
    }
}
