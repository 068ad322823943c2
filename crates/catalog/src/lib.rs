//! Catalog domain module.
//!
//! This crate contains the sellable-product model of the shop, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). A
//! [`Product`] owns its special prices and backend variants; pricing and
//! availability are derived on demand from the attached children.

pub mod product;
pub mod special_price;
pub mod variant;

pub use product::{Product, ProductId, StockLevel};
pub use special_price::{SpecialPrice, SpecialPriceId};
pub use variant::{Availability, BackendVariant, VariantAttribute, VariantAttributeId, VariantId};
