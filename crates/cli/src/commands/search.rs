//! `stall search`: query the catalog and optionally drill into one business.

use serde::Serialize;

use supply_stall_buyer::{BrowseMode, BuyerSession, SearchHit};
use supply_stall_core::Catalog;

use super::CommandError;
use super::catalog::{BusinessRow, ItemRow};
use crate::output::Printer;

/// What the browse panel shows after a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub mode: BrowseMode,
    pub businesses: Vec<BusinessRow>,
    /// Matching items, or the drilled-into business's items.
    pub items: Vec<ItemRow>,
    pub drill_down: Option<String>,
}

impl SearchReport {
    pub fn from_session(session: &BuyerSession, threshold: u32) -> Self {
        let catalog = session.catalog();
        let businesses = session
            .search_results()
            .into_iter()
            .filter_map(|hit| match hit {
                SearchHit::Business(business) => Some(BusinessRow::new(business, threshold)),
                SearchHit::Item(_) => None,
            })
            .collect();
        let items = session
            .visible_items()
            .into_iter()
            .map(|item| ItemRow::new(item, catalog, threshold))
            .collect();

        Self {
            query: session.browse().query().to_string(),
            mode: session.browse_mode(),
            businesses,
            items,
            drill_down: session
                .browse()
                .drill_down()
                .map(|drill_down| drill_down.business_name.clone()),
        }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(business) = &self.drill_down {
            lines.push(format!("Products from {business}:"));
        } else {
            if self.businesses.is_empty() && self.items.is_empty() {
                return vec![format!("No results for \"{}\"", self.query)];
            }
            lines.push(format!("Results for \"{}\":", self.query));
            if !self.businesses.is_empty() {
                lines.push("Businesses:".to_string());
                lines.extend(self.businesses.iter().map(|row| format!("  {}", row.line())));
            }
            if !self.items.is_empty() {
                lines.push("Items:".to_string());
            }
        }

        lines.extend(self.items.iter().map(|row| format!("  {}", row.line())));
        lines
    }
}

/// Run a search, drilling into `business` when given.
pub fn run(
    catalog: Catalog,
    query: &str,
    business: Option<&str>,
    threshold: u32,
    printer: Printer,
) -> Result<(), CommandError> {
    let report = search(catalog, query, business, threshold)?;
    printer.emit(&report, SearchReport::lines)?;
    Ok(())
}

fn search(
    catalog: Catalog,
    query: &str,
    business: Option<&str>,
    threshold: u32,
) -> Result<SearchReport, CommandError> {
    let mut session = BuyerSession::new(catalog);
    session.set_query(query);

    if let Some(name) = business {
        let id = session
            .catalog()
            .business_named(name)
            .map(|business| business.id)
            .ok_or_else(|| CommandError::UnknownBusiness(name.to_string()))?;
        session.select_business(id)?;
    }

    Ok(SearchReport::from_session(&session, threshold))
}
