// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Rings.
    Rings,
    /// Necklaces.
    Necklaces,
    /// Earrings.
    Earrings,
    /// Bracelets.
    Bracelets,
    /// High jewellery pieces.
    #[serde(rename = "High Jewellery")]
    HighJewellery,
    /// Gift items.
    Gifts,
}

impl Category {
    /// Converts this category to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rings => "Rings",
            Self::Necklaces => "Necklaces",
            Self::Earrings => "Earrings",
            Self::Bracelets => "Bracelets",
            Self::HighJewellery => "High Jewellery",
            Self::Gifts => "Gifts",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rings" => Ok(Self::Rings),
            "Necklaces" => Ok(Self::Necklaces),
            "Earrings" => Ok(Self::Earrings),
            "Bracelets" => Ok(Self::Bracelets),
            "High Jewellery" => Ok(Self::HighJewellery),
            "Gifts" => Ok(Self::Gifts),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Product brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Brand {
    /// Kalevala.
    Kalevala,
    /// Lumoava.
    Lumoava,
    /// Lapponia.
    Lapponia,
    /// Lumière, the house brand.
    #[serde(rename = "Lumière")]
    Lumiere,
}

impl Brand {
    /// Converts this brand to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kalevala => "Kalevala",
            Self::Lumoava => "Lumoava",
            Self::Lapponia => "Lapponia",
            Self::Lumiere => "Lumière",
        }
    }
}

impl FromStr for Brand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Kalevala" => Ok(Self::Kalevala),
            "Lumoava" => Ok(Self::Lumoava),
            "Lapponia" => Ok(Self::Lapponia),
            "Lumière" => Ok(Self::Lumiere),
            _ => Err(DomainError::UnknownBrand(s.to_string())),
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// Modern.
    Modern,
    /// Originals.
    Originals,
    /// Limited drops.
    #[serde(rename = "Limited drops")]
    LimitedDrops,
    /// Heritage.
    Heritage,
    /// Signature.
    Signature,
    /// Gift sets.
    #[serde(rename = "Gift Sets")]
    GiftSets,
}

impl Collection {
    /// Converts this collection to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Originals => "Originals",
            Self::LimitedDrops => "Limited drops",
            Self::Heritage => "Heritage",
            Self::Signature => "Signature",
            Self::GiftSets => "Gift Sets",
        }
    }
}

impl FromStr for Collection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Modern" => Ok(Self::Modern),
            "Originals" => Ok(Self::Originals),
            "Limited drops" => Ok(Self::LimitedDrops),
            "Heritage" => Ok(Self::Heritage),
            "Signature" => Ok(Self::Signature),
            "Gift Sets" => Ok(Self::GiftSets),
            _ => Err(DomainError::UnknownCollection(s.to_string())),
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gemstone cut shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GemShape {
    /// Round cut.
    Round,
    /// Oval cut.
    Oval,
    /// Pear cut.
    Pear,
    /// Emerald cut.
    Emerald,
    /// Marquise cut.
    Marquise,
    /// No gemstone.
    None,
}

impl GemShape {
    /// Converts this gem shape to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Round => "Round",
            Self::Oval => "Oval",
            Self::Pear => "Pear",
            Self::Emerald => "Emerald",
            Self::Marquise => "Marquise",
            Self::None => "None",
        }
    }
}

impl FromStr for GemShape {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Round" => Ok(Self::Round),
            "Oval" => Ok(Self::Oval),
            "Pear" => Ok(Self::Pear),
            "Emerald" => Ok(Self::Emerald),
            "Marquise" => Ok(Self::Marquise),
            "None" => Ok(Self::None),
            _ => Err(DomainError::UnknownGemShape(s.to_string())),
        }
    }
}

impl std::fmt::Display for GemShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Material group classification.
///
/// Products carry a free-text `material` description for display; filtering
/// uses this coarse grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaterialGroup {
    /// Silver.
    Silver,
    /// Gold.
    Gold,
    /// Vermeil.
    Vermeil,
    /// Mixed materials.
    Mixed,
}

impl MaterialGroup {
    /// Converts this material group to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Vermeil => "Vermeil",
            Self::Mixed => "Mixed",
        }
    }
}

impl FromStr for MaterialGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Silver" => Ok(Self::Silver),
            "Gold" => Ok(Self::Gold),
            "Vermeil" => Ok(Self::Vermeil),
            "Mixed" => Ok(Self::Mixed),
            _ => Err(DomainError::UnknownMaterialGroup(s.to_string())),
        }
    }
}

impl std::fmt::Display for MaterialGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Merchandising badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    /// Newly added product.
    New,
    /// Bestselling product.
    Bestseller,
    /// Limited availability.
    Limited,
}

impl Badge {
    /// Converts this badge to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Bestseller => "Bestseller",
            Self::Limited => "Limited",
        }
    }
}

impl FromStr for Badge {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Bestseller" => Ok(Self::Bestseller),
            "Limited" => Ok(Self::Limited),
            _ => Err(DomainError::UnknownBadge(s.to_string())),
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result-set ordering mode.
///
/// `Featured` ranks badged products first (badge presence only, never badge
/// type), then by descending rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Badged products first, then by descending rating.
    #[default]
    Featured,
    /// Ascending price.
    #[serde(rename = "Price: Low → High")]
    PriceLowHigh,
    /// Descending price.
    #[serde(rename = "Price: High → Low")]
    PriceHighLow,
    /// Descending rating.
    Rating,
}

impl SortMode {
    /// Converts this sort mode to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowHigh => "Price: Low → High",
            Self::PriceHighLow => "Price: High → Low",
            Self::Rating => "Rating",
        }
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Featured" => Ok(Self::Featured),
            "Price: Low → High" => Ok(Self::PriceLowHigh),
            "Price: High → Low" => Ok(Self::PriceHighLow),
            "Rating" => Ok(Self::Rating),
            _ => Err(DomainError::UnknownSortMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The navigation page a product grid is rendered on.
///
/// A page implies a category restriction for the query pipeline: category
/// pages scope to their category, the aggregate `Jewellery` page scopes to
/// the four wearable categories, and pages that do not render a grid scope
/// to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PageContext {
    /// Landing page. Does not render a product grid.
    #[default]
    Home,
    /// Aggregate shop page covering all wearable categories.
    Jewellery,
    /// Rings category page.
    Rings,
    /// Necklaces category page.
    Necklaces,
    /// High jewellery category page.
    HighJewellery,
    /// Gifts category page.
    Gifts,
    /// About page. Does not render a product grid.
    About,
    /// Checkout flow. Does not render a product grid.
    Checkout,
    /// Account page. Does not render a product grid.
    Account,
}

impl PageContext {
    /// Returns the page title used in breadcrumbs and headings.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Jewellery => "Jewellery",
            Self::Rings => "Rings",
            Self::Necklaces => "Necklaces",
            Self::HighJewellery => "High Jewellery",
            Self::Gifts => "Gifts",
            Self::About => "About",
            Self::Checkout => "Checkout",
            Self::Account => "Account",
        }
    }

    /// Returns the categories visible on this page.
    ///
    /// An empty slice means the page renders no product grid, so scoping to
    /// it yields an empty result set.
    #[must_use]
    pub const fn category_scope(&self) -> &'static [Category] {
        match self {
            Self::Rings => &[Category::Rings],
            Self::Necklaces => &[Category::Necklaces],
            Self::HighJewellery => &[Category::HighJewellery],
            Self::Gifts => &[Category::Gifts],
            Self::Jewellery => &[
                Category::Rings,
                Category::Necklaces,
                Category::Earrings,
                Category::Bracelets,
            ],
            Self::Home | Self::About | Self::Checkout | Self::Account => &[],
        }
    }

    /// Returns whether this page renders a product grid at all.
    #[must_use]
    pub const fn renders_grid(&self) -> bool {
        !self.category_scope().is_empty()
    }
}

impl std::fmt::Display for PageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
