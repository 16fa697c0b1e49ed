//! In-memory order store.
//!
//! The store is the single owner of every order created during a run. It is
//! append-only and single-threaded by contract; nothing here is shared
//! across threads.

use serde::{Deserialize, Serialize};

use eoms_core::{DomainError, DomainResult};

use crate::order::{Order, OrderId};

/// Append-only collection of orders plus the id allocator.
///
/// The allocator is a plain field, not process-global state: a fresh store
/// starts counting at 1 again, so test harnesses can instantiate their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStore {
    orders: Vec<Order>,
    next_order_id: u32,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_order_id: 1,
        }
    }

    /// Allocate the next order id.
    ///
    /// Ids are strictly increasing and never reused, even when the order
    /// under construction is abandoned before [`Self::append`].
    pub fn allocate_id(&mut self) -> OrderId {
        let id = OrderId::new(self.next_order_id);
        self.next_order_id += 1;
        id
    }

    /// Append a completed order. Orders are never removed.
    pub fn append(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Find an order by id. Linear scan; the catalogue is operator-sized.
    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id_typed() == id)
    }

    /// Mutable lookup for the status-update workflow.
    pub fn get_mut(&mut self, id: OrderId) -> DomainResult<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.id_typed() == id)
            .ok_or_else(DomainError::not_found)
    }

    /// All orders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
