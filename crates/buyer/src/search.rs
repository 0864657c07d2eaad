//! Catalog search and the browse state machine.
//!
//! [`search`] is a pure function of a query and a catalog: a case-insensitive
//! substring match over a few text fields, businesses first, then items, each
//! in catalog order. There is no tokenizing, stemming or ranking.
//!
//! [`BrowseState`] holds the query the buyer typed, the last computed results
//! and an optional business drill-down. Results are recomputed explicitly
//! whenever the query changes.

use std::slice;

use serde::Serialize;
use tracing::debug;

use supply_stall_core::{Business, BusinessId, Catalog, Item, ItemId};

/// A single search match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHit<'a> {
    Business(&'a Business),
    Item(&'a Item),
}

impl SearchHit<'_> {
    /// Identifier-only form of this hit, for storing in view state.
    #[must_use]
    pub const fn key(&self) -> SearchResult {
        match self {
            Self::Business(business) => SearchResult::Business(business.id),
            Self::Item(item) => SearchResult::Item(item.id),
        }
    }
}

/// A search match by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum SearchResult {
    Business(BusinessId),
    Item(ItemId),
}

impl SearchResult {
    /// Resolve against `catalog`. `None` if the catalog no longer has it.
    #[must_use]
    pub fn resolve(self, catalog: &Catalog) -> Option<SearchHit<'_>> {
        match self {
            Self::Business(id) => catalog.business(id).map(SearchHit::Business),
            Self::Item(id) => catalog.item(id).map(SearchHit::Item),
        }
    }
}

/// Lazy iterator over the matches for one query.
///
/// Finite and side-effect free; call [`search`] again to start over.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    needle: String,
    businesses: slice::Iter<'a, Business>,
    items: slice::Iter<'a, Item>,
}

impl<'a> Iterator for Search<'a> {
    type Item = SearchHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();

        if let Some(business) = self
            .businesses
            .by_ref()
            .find(|business| business_matches(business, needle))
        {
            return Some(SearchHit::Business(business));
        }

        self.items
            .by_ref()
            .find(|item| item_matches(item, needle))
            .map(SearchHit::Item)
    }
}

/// Search `catalog` for `query`.
///
/// A blank query yields nothing rather than the whole catalog.
#[must_use]
pub fn search<'a>(query: &str, catalog: &'a Catalog) -> Search<'a> {
    if query.trim().is_empty() {
        return Search {
            needle: String::new(),
            businesses: slice::Iter::default(),
            items: slice::Iter::default(),
        };
    }

    Search {
        needle: query.to_lowercase(),
        businesses: catalog.businesses().iter(),
        items: catalog.items().iter(),
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn business_matches(business: &Business, needle: &str) -> bool {
    contains_folded(&business.name, needle)
        || contains_folded(&business.owner, needle)
        || contains_folded(&business.description, needle)
}

fn item_matches(item: &Item, needle: &str) -> bool {
    contains_folded(&item.name, needle)
        || contains_folded(item.category.as_str(), needle)
        || contains_folded(&item.description, needle)
}

/// Which view the browse panel is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowseMode {
    /// No query typed.
    Idle,
    /// A query is typed and its matches are listed.
    ShowingResults,
    /// A business was picked; only its items are shown.
    BusinessDrillDown,
}

/// The business a buyer drilled into and the items it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrillDown {
    pub business_id: BusinessId,
    pub business_name: String,
    pub items: Vec<ItemId>,
}

/// Query, results and drill-down selection for the browse panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrowseState {
    query: String,
    results: Vec<SearchResult>,
    drill_down: Option<DrillDown>,
}

impl BrowseState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new query and recompute results against `catalog`.
    ///
    /// A blank query returns to [`BrowseMode::Idle`], dropping any
    /// drill-down.
    pub fn set_query(&mut self, query: &str, catalog: &Catalog) {
        if query.trim().is_empty() {
            self.reset();
            self.query = query.to_string();
            return;
        }

        self.query = query.to_string();
        self.refresh(catalog);
    }

    /// Recompute results for the current query.
    pub fn refresh(&mut self, catalog: &Catalog) {
        self.results = search(&self.query, catalog).map(|hit| hit.key()).collect();
        debug!(query = %self.query, results = self.results.len(), "search refreshed");
    }

    /// Narrow the product view to the items `business` offers.
    pub fn select_business(&mut self, business: &Business, catalog: &Catalog) {
        let items = catalog
            .items_by_business(&business.name)
            .map(|item| item.id)
            .collect();
        self.drill_down = Some(DrillDown {
            business_id: business.id,
            business_name: business.name.clone(),
            items,
        });
        debug!(business_id = %business.id, "entered business drill-down");
    }

    /// Leave the drill-down and clear the query and results.
    pub fn back(&mut self) {
        self.reset();
    }

    /// Clear the search box; same end state as [`BrowseState::back`].
    pub fn clear_query(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.drill_down = None;
    }

    #[must_use]
    pub fn mode(&self) -> BrowseMode {
        if self.drill_down.is_some() {
            BrowseMode::BusinessDrillDown
        } else if self.query.trim().is_empty() {
            BrowseMode::Idle
        } else {
            BrowseMode::ShowingResults
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the last recomputation.
    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    #[must_use]
    pub const fn drill_down(&self) -> Option<&DrillDown> {
        self.drill_down.as_ref()
    }

    /// Items the product grid should show right now.
    ///
    /// In a drill-down that is the selected business's items; otherwise the
    /// item matches of the current query.
    pub fn visible_items<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        let ids: Box<dyn Iterator<Item = ItemId> + 'a> = match &self.drill_down {
            Some(drill_down) => Box::new(drill_down.items.iter().copied()),
            None => Box::new(self.results.iter().filter_map(|result| match result {
                SearchResult::Item(id) => Some(*id),
                SearchResult::Business(_) => None,
            })),
        };
        ids.filter_map(|id| catalog.item(id))
    }
}
