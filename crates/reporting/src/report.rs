use serde::{Deserialize, Serialize};

use eoms_orders::{Order, OrderStatus, OrderStore};

/// Aggregate report over the whole store.
///
/// `status_counts` carries every status in enumeration order, zero counts
/// included, so the report always has exactly five rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub total_revenue: f64,
    pub status_counts: [(OrderStatus, usize); 5],
}

impl SalesReport {
    /// Derive the report from the store.
    ///
    /// Read-only: compiling twice with no intervening mutation yields the
    /// same report.
    pub fn compile(store: &OrderStore) -> Self {
        let total_revenue = store.iter().map(Order::total).sum();
        let status_counts = OrderStatus::ALL
            .map(|status| (status, store.iter().filter(|o| o.status() == status).count()));

        Self {
            total_revenue,
            status_counts,
        }
    }
}
