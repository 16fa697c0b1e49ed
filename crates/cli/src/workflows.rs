//! Operator workflows: the five menu actions.
//!
//! Each workflow is a thin dialog over the domain crates. Not-found ids and
//! out-of-range choices recover locally with a one-line message; everything
//! else the domain accepts silently.

use std::io::{BufRead, Write};

use eoms_orders::{Order, OrderId, OrderItem, OrderStatus, OrderStore, Product, ProductKind};
use eoms_reporting::SalesReport;

use crate::console::{Console, ConsoleResult};

/// Create-order dialog.
///
/// The item loop runs at least once. The completed order is appended to the
/// store and its invoice rendered. An id consumed by a dialog that dies
/// mid-way is never reused.
pub fn create_order<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut OrderStore,
) -> ConsoleResult<()> {
    let customer_name = console.prompt_line("Enter customer name: ")?;
    let mut order = Order::new(store.allocate_id(), customer_name);

    loop {
        let name = console.prompt_line("Enter product name: ")?;
        let price: f64 = console.prompt_parse("Enter product price: ")?;
        let quantity: i64 = console.prompt_parse("Enter quantity: ")?;
        let kind_input = console.prompt_line("Product type (physical/digital): ")?;
        let kind = ProductKind::from_input(&kind_input);

        order.add_item(OrderItem::new(Product::new(name, price, kind), quantity));

        let more = console.prompt_line("Add another product? (yes/no): ")?;
        if !more.eq_ignore_ascii_case("yes") {
            break;
        }
    }

    tracing::info!(
        order_id = %order.id_typed(),
        items = order.items().len(),
        total = order.total(),
        "order created"
    );
    let invoice = order.render_invoice();
    store.append(order);
    console.write(&invoice)?;
    Ok(())
}

/// Dump every order's invoice in insertion order; an empty store prints a
/// one-line notice instead.
pub fn view_orders<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &OrderStore,
) -> ConsoleResult<()> {
    if store.is_empty() {
        console.write_line("No orders found.")?;
        return Ok(());
    }
    for order in store.iter() {
        console.write(&order.render_invoice())?;
    }
    Ok(())
}

/// Update-status dialog: look the order up first, then offer the status
/// list. A miss returns to the menu before any list is shown.
pub fn update_order_status<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut OrderStore,
) -> ConsoleResult<()> {
    let raw_id: i64 = console.prompt_parse("Enter Order ID to update: ")?;
    let order = u32::try_from(raw_id)
        .ok()
        .map(OrderId::new)
        .and_then(|id| store.get_mut(id).ok());
    let Some(order) = order else {
        tracing::debug!(order_id = raw_id, "order id not found");
        console.write_line("Order ID not found.")?;
        return Ok(());
    };

    console.write_line("Select new status:")?;
    for (i, status) in OrderStatus::ALL.iter().enumerate() {
        console.write_line(&format!("{}. {}", i + 1, status))?;
    }

    let selection: i64 = console.prompt_parse("")?;
    match OrderStatus::from_choice(selection) {
        Ok(status) => {
            order.change_status(status);
            tracing::info!(order_id = %order.id_typed(), status = %status, "order status updated");
            console.write_line("Order status updated.")?;
        }
        Err(err) => {
            tracing::debug!(%err, "rejected status choice");
            console.write_line("Invalid status.")?;
        }
    }
    Ok(())
}

/// Print total revenue and the per-status order counts in enumeration order.
pub fn generate_reports<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &OrderStore,
) -> ConsoleResult<()> {
    let report = SalesReport::compile(store);
    console.write_line(&format!("Total Revenue: ${:.2}", report.total_revenue))?;
    console.write_line("Order Status Report:")?;
    for (status, count) in report.status_counts {
        console.write_line(&format!("{status}: {count} orders"))?;
    }
    Ok(())
}
