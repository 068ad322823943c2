//! Backend variants: admin-configured sub-products of a catalog product.

use serde::{Deserialize, Serialize};

use webcart_core::{Entity, RecordId};

/// Something that can report whether it is currently sellable.
///
/// The product's availability check dispatches through this when stock is
/// handled per variant.
pub trait Availability {
    fn is_available(&self) -> bool;
}

/// Backend variant identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub RecordId);

impl VariantId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for VariantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Variant attribute identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantAttributeId(pub RecordId);

impl VariantAttributeId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for VariantAttributeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A sellable sub-configuration of a product (e.g. a size/colour combination)
/// configured by an administrator, with its own price and stock counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendVariant {
    id: VariantId,
    sku: String,
    title: String,
    price: f64,
    stock: i64,
}

impl BackendVariant {
    pub fn new(id: VariantId, sku: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            sku: sku.into(),
            title: title.into(),
            price: 0.0,
            stock: 0,
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }

    pub fn add_to_stock(&mut self, count: i64) {
        self.stock += count;
    }

    pub fn remove_from_stock(&mut self, count: i64) {
        self.stock -= count;
    }
}

impl Availability for BackendVariant {
    /// A variant is sellable while its own counter is strictly positive.
    fn is_available(&self) -> bool {
        self.stock > 0
    }
}

impl Entity for BackendVariant {
    type Id = VariantId;

    fn id(&self) -> &VariantId {
        &self.id
    }
}

/// An attribute axis (size, colour, ...) a product exposes through its
/// variant-attribute slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAttribute {
    id: VariantAttributeId,
    title: String,
}

impl VariantAttribute {
    pub fn new(id: VariantAttributeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

impl Entity for VariantAttribute {
    type Id = VariantAttributeId;

    fn id(&self) -> &VariantAttributeId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant() -> BackendVariant {
        BackendVariant::new(VariantId::new(RecordId::new()), "SHIRT-M-RED", "M / Red")
    }

    #[test]
    fn fresh_variant_is_not_available() {
        assert!(!variant().is_available());
    }

    #[test]
    fn stocked_variant_is_available() {
        let mut v = variant();
        v.add_to_stock(3);
        assert!(v.is_available());
    }

    #[test]
    fn emptied_variant_is_not_available() {
        let mut v = variant();
        v.set_stock(3);
        v.remove_from_stock(3);
        assert_eq!(v.stock(), 0);
        assert!(!v.is_available());
    }
}
