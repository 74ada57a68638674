// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod money;

use crate::{Brand, Category, Collection, GemShape, MaterialGroup, Product, ProductId};

pub fn create_test_product(id: &str, price_cents: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: String::from("Aalto Ring"),
        category: Category::Rings,
        price_cents,
        material: String::from("925 sterling silver"),
        material_group: MaterialGroup::Silver,
        gemstones: String::from("White topaz"),
        gem_shape: GemShape::Round,
        brand: Brand::Lumiere,
        collection: Collection::Modern,
        description: String::from("A sculptural band in polished silver."),
        rating: 4.5,
        badge: None,
    }
}
