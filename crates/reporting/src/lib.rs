//! Reporting read model.
//!
//! Pure derivations over the order store; nothing here mutates state.

pub mod report;

pub use report::SalesReport;
