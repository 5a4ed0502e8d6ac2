use dioxus::prelude::*;

use crate::core::format;
use crate::orders::Order;
use crate::t;

/// Five-column order table: items, date placed, total cost, order number,
/// and the receipt link.
#[component]
pub fn OrdersTable(orders: Vec<Order>) -> Element {
    let rows: Vec<OrderRow> = orders.iter().map(project_row).collect();

    rsx! {
        table { class: "order-history",
            thead {
                tr {
                    th { {t!("orders-column-items")} }
                    th { {t!("orders-column-date-placed")} }
                    th { {t!("orders-column-total-cost")} }
                    th { {t!("orders-column-order-number")} }
                    th {}
                }
            }
            tbody {
                for row in rows.into_iter() {
                    tr { key: "{row.order_id}",
                        td {
                            for item in row.items.iter() {
                                p { class: "order-history__line-item", key: "{item.item_id}",
                                    span { class: "order-history__quantity", "{item.quantity_label}" }
                                    span { "{item.description}" }
                                }
                            }
                        }
                        td { "{row.date_placed}" }
                        td { "{row.total}" }
                        td { "{row.order_id}" }
                        td {
                            a { class: "order-history__receipt", href: "{row.receipt_url}",
                                {t!("orders-view-detail")}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Display projection of one order, kept apart from the markup so it can be
/// unit tested.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OrderRow {
    pub items: Vec<ItemLine>,
    pub date_placed: String,
    pub total: String,
    pub order_id: String,
    pub receipt_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ItemLine {
    pub item_id: u64,
    pub quantity_label: String,
    pub description: String,
}

pub(crate) fn project_row(order: &Order) -> OrderRow {
    OrderRow {
        items: order
            .line_items
            .iter()
            .map(|item| ItemLine {
                item_id: item.item_id,
                quantity_label: format!("{}x", item.quantity),
                description: item.description.clone(),
            })
            .collect(),
        date_placed: format::format_date(&order.date_placed),
        total: format::format_currency(&order.total, &order.currency),
        order_id: order.order_id.clone(),
        receipt_url: order.receipt_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::LineItem;

    fn order(total: &str, currency: &str) -> Order {
        Order {
            order_id: "EDX-100042".to_string(),
            date_placed: "2024-03-05".to_string(),
            total: total.to_string(),
            currency: currency.to_string(),
            receipt_url: "https://shop.example.com/receipts/EDX-100042".to_string(),
            line_items: vec![LineItem {
                item_id: 1,
                description: "Course A".to_string(),
                quantity: 2,
            }],
        }
    }

    #[test]
    fn line_items_render_as_quantity_description_pairs() {
        let row = project_row(&order("149.00", "USD"));
        assert_eq!(row.items.len(), 1);
        assert_eq!(row.items[0].quantity_label, "2x");
        assert_eq!(row.items[0].description, "Course A");
    }

    #[test]
    fn totals_are_formatted_per_order_currency() {
        assert_eq!(project_row(&order("149.00", "USD")).total, "$149.00");
        assert_eq!(project_row(&order("149.00", "EUR")).total, "€149.00");
        assert_eq!(project_row(&order("15000", "JPY")).total, "¥15,000");
    }

    #[test]
    fn order_number_and_receipt_pass_through_verbatim() {
        let row = project_row(&order("149.00", "USD"));
        assert_eq!(row.order_id, "EDX-100042");
        assert_eq!(row.receipt_url, "https://shop.example.com/receipts/EDX-100042");
        assert_eq!(row.date_placed, "Mar 5, 2024");
    }
}
