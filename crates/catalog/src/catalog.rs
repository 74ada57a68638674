// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gleam_store_domain::{Product, ProductId};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    ParseFailed(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseFailed(msg) => write!(f, "Failed to parse catalog JSON: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The immutable product catalog.
///
/// Loaded once at process startup and never mutated afterwards; every view
/// over it is computed fresh by the query pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an already-built product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Loads a catalog from a JSON array of products.
    ///
    /// # Arguments
    ///
    /// * `bytes` - UTF-8 JSON text containing an array of product objects
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseFailed` if the JSON is malformed or does
    /// not match the product shape.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_slice(bytes)
            .map_err(|err| CatalogError::ParseFailed(err.to_string()))?;
        Ok(Self::new(products))
    }

    /// Returns the full product list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Returns the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns the catalog-wide price bounds in rounded whole euros.
    ///
    /// These bounds seed the price facet so that a fresh filter admits every
    /// product. An empty catalog yields `(0, 0)`.
    #[must_use]
    pub fn price_bounds_euros(&self) -> (u32, u32) {
        let mut bounds: Option<(u32, u32)> = None;
        for product in &self.products {
            let euros: u32 = product.price_euros();
            bounds = Some(match bounds {
                None => (euros, euros),
                Some((min, max)) => (min.min(euros), max.max(euros)),
            });
        }
        bounds.unwrap_or((0, 0))
    }
}
