// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{format_eur, price_euros};

#[test]
fn test_price_euros_rounds_half_up() {
    assert_eq!(price_euros(0), 0);
    assert_eq!(price_euros(49), 0);
    assert_eq!(price_euros(50), 1);
    assert_eq!(price_euros(12_900), 129);
    assert_eq!(price_euros(12_949), 129);
    assert_eq!(price_euros(12_950), 130);
}

#[test]
fn test_format_eur_small_amounts() {
    assert_eq!(format_eur(0), "0,00\u{a0}€");
    assert_eq!(format_eur(5), "0,05\u{a0}€");
    assert_eq!(format_eur(12_900), "129,00\u{a0}€");
}

#[test]
fn test_format_eur_groups_thousands() {
    assert_eq!(format_eur(123_456), "1\u{a0}234,56\u{a0}€");
    assert_eq!(format_eur(123_456_789), "1\u{a0}234\u{a0}567,89\u{a0}€");
}
