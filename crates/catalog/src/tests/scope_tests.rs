// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::scope_to_page;
use crate::tests::helpers::create_product;
use gleam_store_domain::{Category, PageContext, Product};

fn mixed_products() -> Vec<Product> {
    vec![
        create_product("r1", Category::Rings, 10_000, 4.0),
        create_product("n1", Category::Necklaces, 12_000, 4.2),
        create_product("e1", Category::Earrings, 8_000, 3.9),
        create_product("b1", Category::Bracelets, 9_000, 4.1),
        create_product("h1", Category::HighJewellery, 250_000, 4.9),
        create_product("g1", Category::Gifts, 6_000, 4.4),
    ]
}

#[test]
fn test_category_page_keeps_only_its_category() {
    let products: Vec<Product> = mixed_products();

    let scoped: Vec<&Product> = scope_to_page(&products, PageContext::Rings);

    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].id.value(), "r1");
}

#[test]
fn test_jewellery_page_keeps_wearable_categories() {
    let products: Vec<Product> = mixed_products();

    let scoped: Vec<&Product> = scope_to_page(&products, PageContext::Jewellery);

    let ids: Vec<&str> = scoped.iter().map(|p| p.id.value()).collect();
    assert_eq!(ids, vec!["r1", "n1", "e1", "b1"]);
}

#[test]
fn test_non_grid_pages_yield_empty_results() {
    let products: Vec<Product> = mixed_products();

    assert!(scope_to_page(&products, PageContext::Home).is_empty());
    assert!(scope_to_page(&products, PageContext::Checkout).is_empty());
    assert!(scope_to_page(&products, PageContext::Account).is_empty());
    assert!(scope_to_page(&products, PageContext::About).is_empty());
}

#[test]
fn test_scoping_preserves_catalog_order() {
    let products: Vec<Product> = mixed_products();

    let scoped: Vec<&Product> = scope_to_page(&products, PageContext::Jewellery);

    for window in scoped.windows(2) {
        let first: usize = products.iter().position(|p| p.id == window[0].id).unwrap();
        let second: usize = products.iter().position(|p| p.id == window[1].id).unwrap();
        assert!(first < second);
    }
}
