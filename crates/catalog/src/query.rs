// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use gleam_store_domain::{FilterState, PageContext, Product, SortMode};

/// Fixed number of products per result page.
pub const PAGE_SIZE: usize = 24;

/// The five inputs of the query pipeline.
///
/// `page_number` is 1-indexed and clamped against the result size during
/// pagination. Changing the page context, search text, filters, or sort
/// mode invalidates any previously chosen page number; callers reset it
/// to 1 on such changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// The navigation page whose grid is being rendered.
    pub page: PageContext,
    /// Free-text search input, used as typed (trimming happens inside).
    pub search: String,
    /// Facet filter selection.
    pub filters: FilterState,
    /// Result ordering.
    pub sort: SortMode,
    /// Requested 1-indexed page number.
    pub page_number: usize,
}

impl QueryParams {
    /// Creates default params for a page: no search, no facet constraints,
    /// featured ordering, first page.
    #[must_use]
    pub fn for_page(page: PageContext) -> Self {
        Self {
            page,
            search: String::new(),
            filters: FilterState::unbounded(),
            sort: SortMode::default(),
            page_number: 1,
        }
    }
}

/// One page of an ordered, filtered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    /// The products on the requested page, in final order.
    pub items: Vec<&'a Product>,
    /// Size of the full result set before pagination.
    pub total_items: usize,
    /// The page number actually served, after clamping.
    pub page_number: usize,
    /// Total number of pages (at least 1, even for an empty result).
    pub total_pages: usize,
}

/// Stage 1: restricts products to the categories visible on a page.
///
/// Pages that render no grid scope to the empty set and therefore yield an
/// empty result.
#[must_use]
pub fn scope_to_page(products: &[Product], page: PageContext) -> Vec<&Product> {
    let scope: &[_] = page.category_scope();
    products
        .iter()
        .filter(|p| scope.contains(&p.category))
        .collect()
}

/// Stage 2: free-text search by substring containment.
///
/// The query is trimmed and case-folded; an empty query passes everything
/// through. There is no tokenization and no ranking.
#[must_use]
pub fn apply_search<'a>(items: Vec<&'a Product>, search: &str) -> Vec<&'a Product> {
    let query: String = search.trim().to_lowercase();
    if query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|p| p.search_haystack().contains(&query))
        .collect()
}

/// Stage 3: faceted filtering.
///
/// Delegates the per-product predicate to [`FilterState::matches`]: price
/// within inclusive rounded-euro bounds, AND across facets, OR within each
/// facet, empty facet sets pass.
#[must_use]
pub fn apply_facets<'a>(items: Vec<&'a Product>, filters: &FilterState) -> Vec<&'a Product> {
    items.into_iter().filter(|p| filters.matches(p)).collect()
}

/// Stage 4: stable sort by the selected mode.
///
/// Products with equal sort keys keep their relative order from the
/// previous stage, for every mode.
pub fn apply_sort(items: &mut [&Product], mode: SortMode) {
    match mode {
        SortMode::PriceLowHigh => items.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
        SortMode::PriceHighLow => items.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortMode::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortMode::Featured => items.sort_by(|a, b| {
            // Badge presence is a boolean tier; badge type never orders
            b.is_badged()
                .cmp(&a.is_badged())
                .then_with(|| b.rating.total_cmp(&a.rating))
        }),
    }
}

/// Stage 5: slices one page out of the final ordered set.
///
/// The requested 1-indexed page is clamped to `[1, total_pages]` where
/// `total_pages` is at least 1, so an out-of-range request serves the
/// nearest valid page rather than an empty one.
#[must_use]
pub fn paginate(items: Vec<&Product>, requested_page: usize) -> QueryResult<'_> {
    let total_items: usize = items.len();
    let total_pages: usize = total_items.div_ceil(PAGE_SIZE).max(1);
    let page_number: usize = requested_page.clamp(1, total_pages);

    let start: usize = (page_number - 1) * PAGE_SIZE;
    let end: usize = (start + PAGE_SIZE).min(total_items);
    let page_items: Vec<&Product> = items[start..end].to_vec();

    QueryResult {
        items: page_items,
        total_items,
        page_number,
        total_pages,
    }
}

/// Runs the full pipeline: page scoping, text search, facet filtering,
/// sorting, pagination, strictly in that order.
///
/// Pure function of the catalog and params; no side effects and no error
/// conditions.
#[must_use]
pub fn run_query<'a>(catalog: &'a Catalog, params: &QueryParams) -> QueryResult<'a> {
    let scoped: Vec<&Product> = scope_to_page(catalog.products(), params.page);
    let searched: Vec<&Product> = apply_search(scoped, &params.search);
    let mut filtered: Vec<&Product> = apply_facets(searched, &params.filters);
    apply_sort(&mut filtered, params.sort);
    paginate(filtered, params.page_number)
}
