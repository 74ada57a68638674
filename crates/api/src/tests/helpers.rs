// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Store;
use gleam_store_catalog::Catalog;
use gleam_store_domain::{
    Brand, Category, Collection, GemShape, MaterialGroup, Product, ProductId,
};
use gleam_store_persistence::{MemorySnapshotStore, SnapshotStore};
use gleam_store_remote::{InMemoryRemote, RemoteStore};
use std::sync::Arc;

pub const TEST_EMAIL: &str = "anna@example.com";
pub const TEST_PASSWORD: &str = "hunter42";

pub struct TestHarness {
    pub store: Store,
    pub snapshots: Arc<MemorySnapshotStore>,
    pub remote: Arc<InMemoryRemote>,
}

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

pub fn create_test_catalog() -> Catalog {
    Catalog::new(vec![
        create_test_product("r1", 12_900),
        create_test_product("r2", 45_000),
        create_test_product("g1", 6_500),
    ])
}

/// A store wired to fresh in-memory adapters, with one registered account
/// (signed out).
pub fn create_test_store() -> TestHarness {
    let snapshots: Arc<MemorySnapshotStore> = Arc::new(MemorySnapshotStore::new());
    let remote: Arc<InMemoryRemote> = Arc::new(InMemoryRemote::with_account(
        TEST_EMAIL,
        TEST_PASSWORD,
        Some("Anna"),
    ));
    let store: Store = Store::open(
        create_test_catalog(),
        Arc::clone(&snapshots) as Arc<dyn SnapshotStore>,
        Arc::clone(&remote) as Arc<dyn RemoteStore>,
    );
    TestHarness {
        store,
        snapshots,
        remote,
    }
}

pub fn pid(id: &str) -> ProductId {
    ProductId::new(id)
}

pub fn last_toast(store: &Store) -> Option<String> {
    store.state().ui.toast.as_ref().map(|t| t.message.clone())
}
