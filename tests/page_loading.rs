//! Page store loading tests
//!
//! Exercises the sync and async loaders against the checked-in sample store
//! under testdata/pages.

use dm_catalog_rs::loader::{AsyncPageLoader, PageLoader};
use dm_catalog_rs::wikitext::Ability;
use std::path::PathBuf;

fn store_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/pages")
}

fn manifest(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

#[test]
fn test_load_dir_orders_by_file_name() {
    let outcome = PageLoader::new().load_dir(&store_dir()).unwrap();
    let names: Vec<&str> = outcome
        .catalog
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Aqua Hulcus", "Bolshack Dragon", "Gran Gure, Space Guardian"]
    );
}

#[test]
fn test_loaded_records_carry_extracted_metadata() {
    let outcome = PageLoader::new().load_dir(&store_dir()).unwrap();
    let catalog = outcome.catalog;

    let hulcus = catalog.get("Aqua_Hulcus").unwrap();
    assert_eq!(hulcus.cost, 3);
    assert_eq!(hulcus.power, 2000);
    assert_eq!(hulcus.civilization, "Water");
    assert_eq!(hulcus.tribe, "Liquid People");
    assert_eq!(hulcus.img, "dm01_images/Aqua_Hulcus.jpg");
    assert!(hulcus.is_vanilla());

    let bolshack = catalog.get("Bolshack_Dragon").unwrap();
    assert!(bolshack.has_ability(Ability::DoubleBreaker));

    let gran_gure = catalog.get("Gran_Gure,_Space_Guardian").unwrap();
    assert_eq!(gran_gure.power, 9000);
    assert!(gran_gure.has_ability(Ability::Blocker));
}

#[test]
fn test_manifest_pins_catalog_order() {
    let outcome = PageLoader::new()
        .load_manifest(&store_dir(), &manifest("manifest.txt"))
        .unwrap();
    let ids: Vec<&str> = outcome
        .catalog
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["Gran_Gure,_Space_Guardian", "Aqua_Hulcus", "Bolshack_Dragon"]
    );
    assert!(outcome.anomalies.is_empty());
}

#[test]
fn test_manifest_entry_without_page_degrades_to_defaults() {
    let outcome = PageLoader::new()
        .load_manifest(&store_dir(), &manifest("manifest_with_missing.txt"))
        .unwrap();

    assert_eq!(outcome.catalog.len(), 2);
    let phantom = outcome.catalog.get("Phantom_Card").unwrap();
    assert_eq!(phantom.cost, 0);
    assert_eq!(phantom.abilities.as_slice(), &[Ability::None]);

    let missing: Vec<&str> = outcome
        .anomalies
        .iter()
        .filter(|a| a.missing_page)
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(missing, vec!["Phantom Card"]);
}

#[tokio::test]
async fn test_async_loader_agrees_with_sync() {
    let sync_outcome = PageLoader::new().load_dir(&store_dir()).unwrap();
    let async_outcome = AsyncPageLoader::new().load_dir(&store_dir()).await.unwrap();
    assert_eq!(async_outcome.catalog, sync_outcome.catalog);
}

#[test]
fn test_clean_store_has_no_field_anomalies() {
    let outcome = PageLoader::new().load_dir(&store_dir()).unwrap();
    let noisy: Vec<&str> = outcome
        .anomalies
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert!(noisy.is_empty(), "unexpected anomalies for {noisy:?}");
}
