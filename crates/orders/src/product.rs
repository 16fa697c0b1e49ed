use serde::{Deserialize, Serialize};

use eoms_core::ValueObject;

/// Product kind: physical or digital.
///
/// Purely descriptive. No behaviour differs between the two kinds; the tag
/// only feeds the invoice renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Physical,
    Digital,
}

impl ProductKind {
    /// Label used by the invoice renderer.
    pub fn label(self) -> &'static str {
        match self {
            ProductKind::Physical => "Physical",
            ProductKind::Digital => "Digital",
        }
    }

    /// Interpret operator input: `digital` (case-insensitive) is digital,
    /// anything else is physical.
    pub fn from_input(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "digital" => ProductKind::Digital,
            _ => ProductKind::Physical,
        }
    }
}

/// Value object: a named product with a unit price and a kind tag.
///
/// Immutable after construction. No validation is performed: empty names and
/// negative prices are accepted and propagate into the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
    kind: ProductKind,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, kind: ProductKind) -> Self {
        Self {
            name: name.into(),
            price,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }
}

impl ValueObject for Product {}
