// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod file_store_tests;

use crate::Snapshot;
use gleam_store_domain::{ProductId, UserSession};
use std::collections::BTreeMap;

pub fn create_test_snapshot() -> Snapshot {
    let cart: BTreeMap<ProductId, u32> = [
        (ProductId::new("r1"), 2),
        (ProductId::new("n4"), 1),
    ]
    .into_iter()
    .collect();
    let favorites: BTreeMap<ProductId, bool> =
        [(ProductId::new("r1"), true), (ProductId::new("g2"), true)]
            .into_iter()
            .collect();

    Snapshot {
        cart,
        favorites,
        user: Some(UserSession::new("u-1", "anna@example.com", Some("Anna"))),
    }
}
