// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::product::Product;
use crate::types::{Brand, Collection, GemShape, MaterialGroup};
use std::collections::BTreeSet;

/// Faceted filter selection.
///
/// Price bounds are whole euros, inclusive on both ends. Each facet set is
/// an OR within the facet; facets combine with AND. An empty facet set
/// means "no constraint", never "match nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Minimum price in whole euros, inclusive.
    pub price_min: u32,
    /// Maximum price in whole euros, inclusive.
    pub price_max: u32,
    /// Selected brands.
    pub brands: BTreeSet<Brand>,
    /// Selected collections.
    pub collections: BTreeSet<Collection>,
    /// Selected gem shapes.
    pub gem_shapes: BTreeSet<GemShape>,
    /// Selected material groups.
    pub materials: BTreeSet<MaterialGroup>,
}

impl FilterState {
    /// Creates a filter with no constraints at all.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            price_min: 0,
            price_max: u32::MAX,
            brands: BTreeSet::new(),
            collections: BTreeSet::new(),
            gem_shapes: BTreeSet::new(),
            materials: BTreeSet::new(),
        }
    }

    /// Creates a filter constrained only by the given price range.
    ///
    /// # Arguments
    ///
    /// * `price_min` - Minimum price in whole euros, inclusive
    /// * `price_max` - Maximum price in whole euros, inclusive
    #[must_use]
    pub const fn with_price_range(price_min: u32, price_max: u32) -> Self {
        Self {
            price_min,
            price_max,
            brands: BTreeSet::new(),
            collections: BTreeSet::new(),
            gem_shapes: BTreeSet::new(),
            materials: BTreeSet::new(),
        }
    }

    /// Checks whether a product passes every facet condition.
    ///
    /// The rounded-euro price must fall within `[price_min, price_max]`,
    /// and each non-empty facet set must contain the product's value for
    /// that facet.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let euros: u32 = product.price_euros();
        if euros < self.price_min || euros > self.price_max {
            return false;
        }
        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }
        if !self.collections.is_empty() && !self.collections.contains(&product.collection) {
            return false;
        }
        if !self.gem_shapes.is_empty() && !self.gem_shapes.contains(&product.gem_shape) {
            return false;
        }
        if !self.materials.is_empty() && !self.materials.contains(&product.material_group) {
            return false;
        }
        true
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Coerces raw numeric filter input to a price bound.
///
/// Malformed input is never an error: empty or non-numeric text falls back
/// to the supplied catalog-wide bound.
///
/// # Arguments
///
/// * `raw` - The raw user input
/// * `fallback` - The catalog-wide bound to use when the input is unusable
#[must_use]
pub fn parse_price_bound(raw: &str, fallback: u32) -> u32 {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<u32>().unwrap_or(fallback)
}
