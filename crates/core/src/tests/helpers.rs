// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::State;
use gleam_store_catalog::Catalog;
use gleam_store_domain::{
    Brand, Category, Collection, GemShape, MaterialGroup, Product, ProductId,
};
use std::sync::Arc;

pub fn create_test_product(id: &str, price_cents: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Piece {id}"),
        category: Category::Rings,
        price_cents,
        material: String::from("925 sterling silver"),
        material_group: MaterialGroup::Silver,
        gemstones: String::from("None"),
        gem_shape: GemShape::None,
        brand: Brand::Lumiere,
        collection: Collection::Modern,
        description: String::from("A quiet sculptural piece."),
        rating: 4.2,
        badge: None,
    }
}

pub fn create_test_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::new(vec![
        create_test_product("r1", 12_900),
        create_test_product("r2", 45_000),
        create_test_product("r3", 8_500),
    ]))
}

pub fn create_test_state() -> State {
    State::new(create_test_catalog())
}

pub fn pid(id: &str) -> ProductId {
    ProductId::new(id)
}
