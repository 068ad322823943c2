//! Special prices: alternative offers attached to a product.

use serde::{Deserialize, Serialize};

use webcart_core::{Entity, RecordId};

/// Special price identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialPriceId(pub RecordId);

impl SpecialPriceId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SpecialPriceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// An alternative, typically lower, price offered for a product.
///
/// Several may coexist on one product; the lowest one is authoritative for
/// discount display. Two special prices with equal amounts and distinct ids
/// are distinct offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialPrice {
    id: SpecialPriceId,
    price: f64,
}

impl SpecialPrice {
    pub fn new(id: SpecialPriceId, price: f64) -> Self {
        Self { id, price }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl Entity for SpecialPrice {
    type Id = SpecialPriceId;

    fn id(&self) -> &SpecialPriceId {
        &self.id
    }
}
