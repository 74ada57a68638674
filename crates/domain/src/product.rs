// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::money::price_euros;
use crate::types::{Badge, Brand, Category, Collection, GemShape, MaterialGroup};
use serde::{Deserialize, Serialize};

/// A stable product identifier.
///
/// Identifiers are opaque strings assigned by the catalog; identity
/// comparisons use the full string value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new `ProductId`.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier string
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product.
///
/// Products are immutable for the process lifetime: the catalog is loaded
/// once at startup and never mutated. All price arithmetic is carried out in
/// integer cents; conversion to display currency happens only at the
/// formatting boundary.
///
/// Field names serialize in camelCase so the seed catalog JSON loads
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category.
    pub category: Category,
    /// Price in integer cents.
    pub price_cents: u32,
    /// Free-text material description (e.g. "925 sterling silver").
    pub material: String,
    /// Coarse material grouping used for faceted filtering.
    pub material_group: MaterialGroup,
    /// Free-text gemstone description.
    pub gemstones: String,
    /// Gemstone cut shape used for faceted filtering.
    pub gem_shape: GemShape,
    /// Brand.
    pub brand: Brand,
    /// Collection.
    pub collection: Collection,
    /// Long-form description.
    pub description: String,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Optional merchandising badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl Product {
    /// Returns the product price rounded to whole euros.
    #[must_use]
    pub const fn price_euros(&self) -> u32 {
        price_euros(self.price_cents)
    }

    /// Returns whether this product carries a merchandising badge.
    #[must_use]
    pub const fn is_badged(&self) -> bool {
        self.badge.is_some()
    }

    /// Builds the case-folded haystack used by free-text search.
    ///
    /// The haystack is the space-joined concatenation of name, category,
    /// material, gemstones, description, brand, and collection.
    #[must_use]
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            self.name,
            self.category.as_str(),
            self.material,
            self.gemstones,
            self.description,
            self.brand.as_str(),
            self.collection.as_str()
        )
        .to_lowercase()
    }
}
