//! Shared UI crate for the Shopfront account area. Views, order state, and
//! the order-fetch client live here.

pub mod core;
pub mod i18n;
pub mod orders;
pub mod views;

pub mod components {
    // Accessible loading indicator (components/page_loading.rs)
    pub mod page_loading;
    pub use page_loading::PageLoading;
}
