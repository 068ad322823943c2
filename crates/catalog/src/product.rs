//! The sellable product record.

use serde::{Deserialize, Serialize};

use webcart_core::{DomainError, DomainResult, Entity, EntityStorage, RecordId, ValueObject};

use crate::special_price::{SpecialPrice, SpecialPriceId};
use crate::variant::{Availability, BackendVariant, VariantAttribute, VariantId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// How much of a product can still be sold.
///
/// Products that do not handle stock are `Unlimited`; the tracked counter is
/// only observable while stock handling is on. This replaces the legacy
/// convention of reporting the maximum representable integer for untracked
/// products.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Unlimited,
    Tracked(i64),
}

impl StockLevel {
    /// Collapse to a unit count, mapping `Unlimited` onto `i64::MAX` for
    /// callers doing quantity arithmetic.
    pub fn units(self) -> i64 {
        match self {
            StockLevel::Unlimited => i64::MAX,
            StockLevel::Tracked(units) => units,
        }
    }

    pub fn is_unlimited(self) -> bool {
        matches!(self, StockLevel::Unlimited)
    }
}

impl ValueObject for StockLevel {}

/// A sellable product with pricing, stock handling, tax classification and
/// backend-configured variants.
///
/// The product owns its special prices and variants exclusively. All derived
/// figures (best special price, discounts, availability) are computed on
/// demand from current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    title: String,
    description: String,
    product_type: String,
    teaser: String,
    min_number_in_order: i64,
    max_number_in_order: i64,
    price: f64,
    special_prices: EntityStorage<SpecialPrice>,
    stock: i64,
    handle_stock: bool,
    handle_stock_in_variants: bool,
    tax_class_id: i64,
    variant_attribute_1: Option<VariantAttribute>,
    variant_attribute_2: Option<VariantAttribute>,
    variant_attribute_3: Option<VariantAttribute>,
    variants: EntityStorage<BackendVariant>,
}

impl Product {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            sku: String::new(),
            title: String::new(),
            description: String::new(),
            product_type: "simple".to_string(),
            teaser: String::new(),
            min_number_in_order: 0,
            max_number_in_order: 0,
            price: 0.0,
            special_prices: EntityStorage::new(),
            stock: 0,
            handle_stock: false,
            handle_stock_in_variants: false,
            tax_class_id: 1,
            variant_attribute_1: None,
            variant_attribute_2: None,
            variant_attribute_3: None,
            variants: EntityStorage::new(),
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn set_sku(&mut self, sku: impl Into<String>) {
        self.sku = sku.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Free-form classification tag; no enumeration is enforced.
    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    pub fn set_product_type(&mut self, product_type: impl Into<String>) {
        self.product_type = product_type.into();
    }

    pub fn teaser(&self) -> &str {
        &self.teaser
    }

    pub fn set_teaser(&mut self, teaser: impl Into<String>) {
        self.teaser = teaser.into();
    }

    pub fn min_number_in_order(&self) -> i64 {
        self.min_number_in_order
    }

    /// Set the minimum order quantity.
    ///
    /// Fails when `min` is negative or exceeds the current maximum.
    pub fn set_min_number_in_order(&mut self, min: i64) -> DomainResult<()> {
        if min < 0 {
            return Err(DomainError::validation(
                "minimum order quantity cannot be negative",
            ));
        }
        if min > self.max_number_in_order {
            return Err(DomainError::invariant(
                "minimum order quantity exceeds the maximum",
            ));
        }
        self.min_number_in_order = min;
        Ok(())
    }

    pub fn max_number_in_order(&self) -> i64 {
        self.max_number_in_order
    }

    /// Set the maximum order quantity.
    ///
    /// Fails when `max` is negative or below the current minimum.
    pub fn set_max_number_in_order(&mut self, max: i64) -> DomainResult<()> {
        if max < 0 {
            return Err(DomainError::validation(
                "maximum order quantity cannot be negative",
            ));
        }
        if max < self.min_number_in_order {
            return Err(DomainError::invariant(
                "maximum order quantity is below the minimum",
            ));
        }
        self.max_number_in_order = max;
        Ok(())
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn tax_class_id(&self) -> i64 {
        self.tax_class_id
    }

    pub fn set_tax_class_id(&mut self, tax_class_id: i64) {
        self.tax_class_id = tax_class_id;
    }

    pub fn special_prices(&self) -> &EntityStorage<SpecialPrice> {
        &self.special_prices
    }

    /// Replace all special prices wholesale.
    pub fn set_special_prices(&mut self, special_prices: EntityStorage<SpecialPrice>) {
        self.special_prices = special_prices;
    }

    pub fn add_special_price(&mut self, special_price: SpecialPrice) {
        self.special_prices.attach(special_price);
    }

    pub fn remove_special_price(&mut self, id: &SpecialPriceId) -> Option<SpecialPrice> {
        self.special_prices.detach(id)
    }

    /// The lowest price this product is offered at.
    ///
    /// The minimum over all attached special prices, never worse than the
    /// base price; the base price itself when no special price exists.
    pub fn best_special_price(&self) -> f64 {
        self.special_prices
            .iter()
            .map(SpecialPrice::price)
            .fold(self.price, f64::min)
    }

    /// Absolute discount granted by the best special price (0.0 without one).
    pub fn best_special_price_discount(&self) -> f64 {
        self.price - self.best_special_price()
    }

    /// Discount of the best special price as a percentage of the base price.
    ///
    /// 0.0 for a zero base price.
    pub fn best_special_price_percentage_discount(&self) -> f64 {
        if self.price == 0.0 {
            return 0.0;
        }
        100.0 * self.best_special_price_discount() / self.price
    }

    pub fn handle_stock(&self) -> bool {
        self.handle_stock
    }

    /// Turn stock tracking on or off. The internal counter is kept either
    /// way, so toggling off and back on restores the tracked level.
    pub fn set_handle_stock(&mut self, handle_stock: bool) {
        self.handle_stock = handle_stock;
    }

    pub fn handle_stock_in_variants(&self) -> bool {
        self.handle_stock_in_variants
    }

    pub fn set_handle_stock_in_variants(&mut self, handle_stock_in_variants: bool) {
        self.handle_stock_in_variants = handle_stock_in_variants;
    }

    /// Current stock level: `Unlimited` while stock handling is off, the
    /// tracked counter otherwise.
    pub fn stock(&self) -> StockLevel {
        if self.handle_stock {
            StockLevel::Tracked(self.stock)
        } else {
            StockLevel::Unlimited
        }
    }

    pub fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }

    pub fn add_to_stock(&mut self, count: i64) {
        self.stock += count;
        tracing::debug!(product = %self.id, count, stock = self.stock, "stock increased");
    }

    /// Decrease the counter. Underflow below zero is not prevented; callers
    /// enforce their own floor if they need one.
    pub fn remove_from_stock(&mut self, count: i64) {
        self.stock -= count;
        tracing::debug!(product = %self.id, count, stock = self.stock, "stock decreased");
    }

    pub fn variant_attribute_1(&self) -> Option<&VariantAttribute> {
        self.variant_attribute_1.as_ref()
    }

    pub fn set_variant_attribute_1(&mut self, attribute: VariantAttribute) {
        self.variant_attribute_1 = Some(attribute);
    }

    pub fn variant_attribute_2(&self) -> Option<&VariantAttribute> {
        self.variant_attribute_2.as_ref()
    }

    pub fn set_variant_attribute_2(&mut self, attribute: VariantAttribute) {
        self.variant_attribute_2 = Some(attribute);
    }

    pub fn variant_attribute_3(&self) -> Option<&VariantAttribute> {
        self.variant_attribute_3.as_ref()
    }

    pub fn set_variant_attribute_3(&mut self, attribute: VariantAttribute) {
        self.variant_attribute_3 = Some(attribute);
    }

    pub fn variants(&self) -> &EntityStorage<BackendVariant> {
        &self.variants
    }

    /// Replace all backend variants wholesale.
    pub fn set_variants(&mut self, variants: EntityStorage<BackendVariant>) {
        self.variants = variants;
    }

    pub fn add_variant(&mut self, variant: BackendVariant) {
        self.variants.attach(variant);
    }

    pub fn remove_variant(&mut self, id: &VariantId) -> Option<BackendVariant> {
        self.variants.detach(id)
    }
}

impl Availability for Product {
    /// Whether at least one unit can be sold right now.
    ///
    /// Untracked products are always available. Tracked products are out of
    /// stock at a counter of exactly zero; otherwise availability falls
    /// through to the variants when stock is handled per variant (no variant
    /// configured means nothing to sell).
    fn is_available(&self) -> bool {
        if !self.handle_stock {
            return true;
        }
        if self.stock == 0 {
            return false;
        }
        if self.handle_stock_in_variants {
            return self.variants.iter().any(BackendVariant::is_available);
        }
        true
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}
