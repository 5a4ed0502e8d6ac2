//! Order-history domain: models, page state, the fetch client, and the
//! table/pagination components.

mod api;
pub use api::{HttpOrdersRepository, OrderPage, OrdersApiError, OrdersClient, OrdersRepository};

mod table;
pub use table::OrdersTable;

mod pagination;
pub use pagination::Pagination;

use serde::Deserialize;

/// One completed purchase. Immutable once fetched; views read it out of
/// [`OrdersState`] and never copy it back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub order_id: String,
    /// ISO date string as delivered by the commerce API.
    pub date_placed: String,
    /// Decimal amount as a string; formatting happens at render time.
    pub total: String,
    /// ISO 4217 currency code.
    pub currency: String,
    pub receipt_url: String,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// One purchased unit within an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItem {
    /// Unique within its order.
    pub item_id: u64,
    pub description: String,
    pub quantity: u32,
}

/// Fetch-derived view model for one page of order history.
///
/// Mutated only by the sequence-checked transitions below; the view holds a
/// read reference. `current_page` stays `None` until a fetch completes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub loading: bool,
    pub loading_error: Option<String>,
    pub page_count: u32,
    pub current_page: Option<u32>,
    /// Sequence number of the most recently issued fetch. Completions
    /// carrying an older sequence are discarded, so a slow response for an
    /// earlier page can never overwrite a newer page's result.
    latest_seq: u64,
}

impl OrdersState {
    /// State for a freshly mounted view. The mount fetch is issued in the
    /// same frame, so the first paint is already the loading stage rather
    /// than an empty-page flash.
    pub fn mounting() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Start a new fetch: bump the sequence, raise the loading flag, and
    /// clear any previous error so the flags stay mutually exclusive.
    /// Orders from the last good fetch are left in place until the response
    /// lands.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.loading = true;
        self.loading_error = None;
        self.latest_seq
    }

    /// Apply a successful fetch completion, unless it is stale.
    pub fn apply_success(&mut self, seq: u64, page: OrderPage) {
        if self.is_stale(seq) {
            tracing::warn!(seq, latest = self.latest_seq, "discarding stale order page");
            return;
        }
        self.loading = false;
        self.loading_error = None;
        self.orders = page.orders;
        self.page_count = page.page_count;
        self.current_page = Some(page.page);
    }

    /// Apply a failed fetch completion, unless it is stale. Orders and
    /// pagination metadata from the last good fetch are retained.
    pub fn apply_failure(&mut self, seq: u64, message: String) {
        if self.is_stale(seq) {
            tracing::warn!(seq, latest = self.latest_seq, "discarding stale fetch failure");
            return;
        }
        self.loading = false;
        self.loading_error = Some(message);
    }

    fn is_stale(&self, seq: u64) -> bool {
        seq != self.latest_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order(id: &str) -> Order {
        Order {
            order_id: id.to_string(),
            date_placed: "2024-03-05".to_string(),
            total: "149.00".to_string(),
            currency: "USD".to_string(),
            receipt_url: format!("https://shop.example.com/receipts/{id}"),
            line_items: vec![LineItem {
                item_id: 1,
                description: "Course A".to_string(),
                quantity: 2,
            }],
        }
    }

    fn page(orders: Vec<Order>, page: u32, page_count: u32) -> OrderPage {
        OrderPage {
            orders,
            page,
            page_count,
        }
    }

    #[test]
    fn mounting_state_is_already_loading() {
        let state = OrdersState::mounting();
        assert!(state.loading);
        assert_eq!(state.loading_error, None);
        assert!(state.orders.is_empty());
        assert_eq!(state.current_page, None);
    }

    #[test]
    fn begin_fetch_raises_loading_and_clears_error() {
        let mut state = OrdersState {
            loading_error: Some("boom".to_string()),
            ..OrdersState::default()
        };
        state.begin_fetch();
        assert!(state.loading);
        assert_eq!(state.loading_error, None);
    }

    #[test]
    fn begin_fetch_does_not_touch_orders() {
        let mut state = OrdersState::default();
        let seq = state.begin_fetch();
        state.apply_success(seq, page(vec![sample_order("A1")], 1, 3));

        state.begin_fetch();
        assert_eq!(state.orders.len(), 1, "orders must stay until the fetch resolves");
        assert_eq!(state.current_page, Some(1));
    }

    #[test]
    fn success_populates_page_metadata() {
        let mut state = OrdersState::default();
        assert_eq!(state.current_page, None);

        let seq = state.begin_fetch();
        state.apply_success(seq, page(vec![sample_order("A1"), sample_order("A2")], 2, 7));

        assert!(!state.loading);
        assert_eq!(state.loading_error, None);
        assert_eq!(state.orders.len(), 2);
        assert_eq!(state.page_count, 7);
        assert_eq!(state.current_page, Some(2));
    }

    #[test]
    fn failure_sets_error_and_keeps_last_good_page() {
        let mut state = OrdersState::default();
        let seq = state.begin_fetch();
        state.apply_success(seq, page(vec![sample_order("A1")], 1, 2));

        let seq = state.begin_fetch();
        state.apply_failure(seq, "HTTP 502".to_string());

        assert!(!state.loading);
        assert_eq!(state.loading_error.as_deref(), Some("HTTP 502"));
        assert_eq!(state.orders.len(), 1);
    }

    #[test]
    fn stale_success_is_discarded() {
        let mut state = OrdersState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // The slow page-1 response lands after page 2 was requested.
        state.apply_success(second, page(vec![sample_order("B1")], 2, 5));
        state.apply_success(first, page(vec![sample_order("A1")], 1, 5));

        assert_eq!(state.current_page, Some(2));
        assert_eq!(state.orders[0].order_id, "B1");
    }

    #[test]
    fn stale_failure_cannot_clobber_a_newer_result() {
        let mut state = OrdersState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        state.apply_success(second, page(vec![sample_order("B1")], 2, 5));
        state.apply_failure(first, "timed out".to_string());

        assert_eq!(state.loading_error, None);
        assert_eq!(state.orders.len(), 1);
    }
}
