use std::rc::Rc;

use dioxus::prelude::*;

use ui::core::session::BootstrapConfig;
use ui::orders::{HttpOrdersRepository, OrdersClient};
use ui::views::OrderHistoryView;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    OrderHistory {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // The hosting shell owns authentication and hands us the username and
    // API base; everything downstream is injected through context.
    let config = BootstrapConfig::load();
    provide_context(OrdersClient(Rc::new(HttpOrdersRepository::new(
        config.api_base.clone(),
    ))));
    provide_context(config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn OrderHistory() -> Element {
    let config = use_context::<BootstrapConfig>();

    rsx! {
        OrderHistoryView { username: config.username }
    }
}
