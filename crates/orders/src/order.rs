use core::fmt;
use core::fmt::Write as _;

use serde::{Deserialize, Serialize};

use eoms_core::{DomainError, DomainResult, Entity, ValueObject};

use crate::product::Product;

/// Order identifier: a small sequential integer allocated by the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl OrderId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Order status lifecycle.
///
/// Transitions are unrestricted: any status may be overwritten with any
/// other, including itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in enumeration order. The status dialog and the reports
    /// both emit in this order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Upper-case token used by invoices and reports.
    pub fn token(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Resolve a 1-based dialog choice to a status.
    pub fn from_choice(choice: i64) -> DomainResult<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| DomainError::validation(format!("status choice out of range: {choice}")))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Order line: an owned product and a quantity.
///
/// Immutable once attached to an order. Quantities are accepted as read,
/// non-positive values included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    product: Product,
    quantity: i64,
}

impl OrderItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Line total: unit price × quantity.
    pub fn line_total(&self) -> f64 {
        self.product.price() * self.quantity as f64
    }
}

impl ValueObject for OrderItem {}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) x{} - ${:.2}",
            self.product.name(),
            self.product.kind().label(),
            self.quantity,
            self.line_total()
        )
    }
}

/// Entity: a customer order with an append-only item list and a lifecycle
/// status. Identity is the order id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    items: Vec<OrderItem>,
    status: OrderStatus,
}

impl Order {
    /// Create an order with no items, starting `Pending`.
    ///
    /// Customer names are not validated; empty is accepted.
    pub fn new(id: OrderId, customer_name: impl Into<String>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            items: Vec::new(),
            status: OrderStatus::Pending,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Append an item. Identical products are not deduplicated or merged.
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Sum of line totals; 0 for an empty order.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Overwrite the status. Any-to-any is allowed, the current value
    /// included.
    pub fn change_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Render the invoice block, leading blank line included.
    pub fn render_invoice(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "INVOICE - Order ID: {}", self.id);
        let _ = writeln!(out, "Customer: {}", self.customer_name);
        let _ = writeln!(out, "Status: {}", self.status);
        for item in &self.items {
            let _ = writeln!(out, " - {item}");
        }
        let _ = writeln!(out, "Total Amount: ${:.2}", self.total());
        out
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductKind;

    fn widget(price: f64, quantity: i64) -> OrderItem {
        OrderItem::new(Product::new("Widget", price, ProductKind::Physical), quantity)
    }

    #[test]
    fn status_tokens_are_upper_case_in_enumeration_order() {
        let tokens: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.token()).collect();
        assert_eq!(
            tokens,
            vec!["PENDING", "PROCESSING", "SHIPPED", "DELIVERED", "CANCELLED"]
        );
    }

    #[test]
    fn from_choice_maps_one_based_indices() {
        assert_eq!(OrderStatus::from_choice(1).unwrap(), OrderStatus::Pending);
        assert_eq!(OrderStatus::from_choice(3).unwrap(), OrderStatus::Shipped);
        assert_eq!(OrderStatus::from_choice(5).unwrap(), OrderStatus::Cancelled);
    }

    #[test]
    fn from_choice_rejects_out_of_range() {
        for choice in [0, 6, -1, i64::MAX] {
            match OrderStatus::from_choice(choice) {
                Err(DomainError::Validation(_)) => {}
                other => panic!("expected Validation error for {choice}, got {other:?}"),
            }
        }
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        let item = widget(9.5, 2);
        assert_eq!(item.line_total(), 19.0);
    }

    #[test]
    fn line_total_accepts_negative_price_and_quantity() {
        assert_eq!(widget(-2.0, 3).line_total(), -6.0);
        assert_eq!(widget(4.0, 0).line_total(), 0.0);
    }

    #[test]
    fn item_renders_name_kind_quantity_and_total() {
        let item = widget(9.5, 2);
        assert_eq!(item.to_string(), "Widget (Physical) x2 - $19.00");

        let song = OrderItem::new(Product::new("Song", 0.99, ProductKind::Digital), 3);
        assert_eq!(song.to_string(), "Song (Digital) x3 - $2.97");
    }

    #[test]
    fn new_order_starts_pending_and_empty() {
        let order = Order::new(OrderId::new(1), "Alice");
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.items().is_empty());
        assert_eq!(order.total(), 0.0);
    }

    #[test]
    fn add_item_preserves_insertion_order_without_merging() {
        let mut order = Order::new(OrderId::new(1), "Alice");
        order.add_item(widget(9.5, 2));
        order.add_item(widget(9.5, 2));
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total(), 38.0);
    }

    #[test]
    fn change_status_is_unrestricted() {
        let mut order = Order::new(OrderId::new(1), "Alice");
        order.change_status(OrderStatus::Delivered);
        assert_eq!(order.status(), OrderStatus::Delivered);

        // Backwards and same-to-same are both accepted.
        order.change_status(OrderStatus::Pending);
        assert_eq!(order.status(), OrderStatus::Pending);
        order.change_status(OrderStatus::Pending);
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn render_invoice_emits_the_exact_block() {
        let mut order = Order::new(OrderId::new(1), "Alice");
        order.add_item(widget(9.5, 2));

        assert_eq!(
            order.render_invoice(),
            "\nINVOICE - Order ID: 1\nCustomer: Alice\nStatus: PENDING\n - Widget (Physical) x2 - $19.00\nTotal Amount: $19.00\n"
        );
    }

    #[test]
    fn render_invoice_lists_items_in_insertion_order() {
        let mut order = Order::new(OrderId::new(2), "Bob");
        order.add_item(OrderItem::new(
            Product::new("Book", 12.0, ProductKind::Physical),
            1,
        ));
        order.add_item(OrderItem::new(
            Product::new("Song", 0.99, ProductKind::Digital),
            3,
        ));

        let invoice = order.render_invoice();
        let physical = invoice.find("(Physical)").unwrap();
        let digital = invoice.find("(Digital)").unwrap();
        assert!(physical < digital);
        assert!(invoice.contains("Total Amount: $14.97"));
    }

    #[test]
    fn render_invoice_handles_empty_orders() {
        let order = Order::new(OrderId::new(7), "");
        assert_eq!(
            order.render_invoice(),
            "\nINVOICE - Order ID: 7\nCustomer: \nStatus: PENDING\nTotal Amount: $0.00\n"
        );
    }
}
