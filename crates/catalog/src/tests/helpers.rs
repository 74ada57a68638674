// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Catalog;
use gleam_store_domain::{
    Badge, Brand, Category, Collection, GemShape, MaterialGroup, Product, ProductId,
};

pub fn create_product(id: &str, category: Category, price_cents: u32, rating: f64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Piece {id}"),
        category,
        price_cents,
        material: String::from("925 sterling silver"),
        material_group: MaterialGroup::Silver,
        gemstones: String::from("None"),
        gem_shape: GemShape::None,
        brand: Brand::Lumiere,
        collection: Collection::Modern,
        description: String::from("A quiet sculptural piece."),
        rating,
        badge: None,
    }
}

pub fn create_badged(id: &str, category: Category, rating: f64, badge: Badge) -> Product {
    Product {
        badge: Some(badge),
        ..create_product(id, category, 19_900, rating)
    }
}

/// Thirty ring products priced 50–500 EUR in ascending 15.52 EUR steps,
/// deliberately inserted in reverse price order.
pub fn create_ring_catalog() -> Catalog {
    let mut products: Vec<Product> = Vec::new();
    for i in (0..30u32).rev() {
        let cents: u32 = 5_000 + i * 1_552;
        products.push(create_product(
            &format!("ring-{i:02}"),
            Category::Rings,
            cents,
            4.0,
        ));
    }
    Catalog::new(products)
}
