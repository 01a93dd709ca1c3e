//! Scripted walkthrough of the inventory catalog.
//!
//! Rejected calls are reported as `Error: <message>` and the script carries on.

use std::io::Write;

use stockroom_core::DomainResult;
use stockroom_inventory::{InventoryManager, SearchQuery};

/// Run the fixed demo sequence, writing human-readable output to `out`.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let mut manager = InventoryManager::new();

    report(out, manager.register_item("Milk", "Amul", -10))?;

    manager.register_item("Milk", "Amul", 100)?;
    manager.register_item("Curd", "Amul", 50)?;
    manager.register_item("Milk", "Nestle", 60)?;
    manager.register_item("Curd", "Nestle", 90)?;

    report(out, manager.add_stock("Milk", "Amul", -5))?;

    manager.add_stock("Milk", "Amul", 20)?;
    manager.add_stock("Curd", "Amul", 5)?;
    manager.add_stock("Milk", "Nestle", 15)?;
    manager.add_stock("Curd", "Nestle", 10)?;

    let scenarios = [
        ("Search by brand Nestle:", SearchQuery::new().brand("Nestle")),
        ("Search by category Milk:", SearchQuery::new().category("Milk")),
        (
            "Search by category Milk ordered by price descending:",
            SearchQuery::new().category("Milk").order_by("price").descending(),
        ),
        (
            "Search by price range 70 to 100:",
            SearchQuery::new().price_from(70).price_to(100),
        ),
        ("Search non-existent category:", SearchQuery::new().category("Bread")),
    ];

    for (header, query) in &scenarios {
        writeln!(out)?;
        writeln!(out, "{header}")?;
        let results = manager.search(query);
        tracing::debug!(?query, matches = results.len(), "search");
        for item in results {
            writeln!(out, "{item}")?;
        }
    }

    Ok(())
}

fn report<W: Write>(out: &mut W, outcome: DomainResult<()>) -> std::io::Result<()> {
    if let Err(err) = outcome {
        writeln!(out, "Error: {err}")?;
    }
    Ok(())
}
