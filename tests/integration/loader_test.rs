//! Loading catalogs from JSON files on disk

use car_catalog::{CatalogConfig, CatalogError, TyreType, load_cars, load_catalog};
use rust_decimal::Decimal;

use crate::utils::{car_json, write_catalog_file};

#[test]
fn test_load_array_and_wrapped_files_in_order() {
    let (_dir_a, first) = write_catalog_file(
        "first.json",
        &format!("[{}]", car_json("Astra", "\"100.50\"", "WINTER", &["ABS"])),
    );
    let (_dir_b, second) = write_catalog_file(
        "second.json",
        &format!(
            r#"{{"cars": [{}, {}]}}"#,
            car_json("Corsa", "80", "SUMMER", &[]),
            car_json("Mokka", "120", "ALL_SEASON", &["GPS", "gps"])
        ),
    );

    let cars = load_cars(&[&first, &second]).unwrap();
    let names: Vec<&str> = cars.iter().map(|car| car.model()).collect();
    assert_eq!(names, vec!["Astra", "Corsa", "Mokka"]);
    assert_eq!(cars[0].price(), "100.50".parse::<Decimal>().unwrap());
    assert_eq!(cars[2].tyre_type(), TyreType::AllSeason);
    // Repeated components collapse to the first spelling
    assert_eq!(cars[2].components().len(), 1);
}

#[test]
fn test_load_catalog_applies_config() {
    let (_dir, path) = write_catalog_file(
        "cars.json",
        &format!("[{}]", car_json("Astra", "10", "WINTER", &[])),
    );
    let config = CatalogConfig::builder().average_scale(4).build();
    let catalog = load_catalog(&[path], config.clone()).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.config(), &config);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_cars(&[dir.path().join("absent.json")]).unwrap_err();

    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_json_names_the_file() {
    let (_dir, path) = write_catalog_file("broken.json", "[{\"model\": ");
    let err = load_cars(&[path]).unwrap_err();

    assert!(matches!(err, CatalogError::Json { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_unknown_category_is_rejected() {
    let (_dir, path) = write_catalog_file(
        "cars.json",
        &format!("[{}]", car_json("Astra", "10", "SNOW", &[])),
    );
    assert!(matches!(load_cars(&[path]), Err(CatalogError::Json { .. })));
}

#[test]
fn test_file_name_checked_before_reading() {
    let (_dir, path) = write_catalog_file("cars.txt", "[]");
    assert!(matches!(
        load_cars(&[path]),
        Err(CatalogError::InvalidFileName(_))
    ));
}
