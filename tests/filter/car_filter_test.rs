//! Tests for price range, body type and component filtering

use car_catalog::filter::{AndFilter, EngineTypeFilter, Filter, IncludeAllFilter};
use car_catalog::{BodyType, Car, CatalogError, EngineType};
use rust_decimal::Decimal;

use crate::utils::{models, sample_catalog};

fn price(value: &str) -> Decimal {
    value.parse().unwrap()
}

#[test]
fn test_price_and_body_bounds_are_inclusive() {
    let cars = sample_catalog()
        .filter_by_price_and_body(price("100"), price("200"), BodyType::Sedan)
        .unwrap();

    // Mokka (99.99) and Corsa (250.5, hatchback) fall outside
    assert_eq!(models(&cars), vec!["Astra", "Insignia", "Zafira"]);
}

#[test]
fn test_price_and_body_requires_both() {
    let catalog = sample_catalog();
    let cars = catalog
        .filter_by_price_and_body(price("0"), price("1000"), BodyType::Suv)
        .unwrap();
    assert_eq!(models(&cars), vec!["Mokka"]);

    let cars = catalog
        .filter_by_price_and_body(price("100.01"), price("199.99"), BodyType::Sedan)
        .unwrap();
    assert_eq!(models(&cars), vec!["Zafira"]);
}

#[test]
fn test_inverted_range_fails() {
    let err = sample_catalog()
        .filter_by_price_and_body(price("200"), price("100"), BodyType::Sedan)
        .unwrap_err();

    assert!(matches!(err, CatalogError::InvalidRange { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_components_superset() {
    let catalog = sample_catalog();

    let abs = catalog.filter_by_components(&["abs"]);
    assert_eq!(models(&abs), vec!["Astra", "Corsa"]);
    let gps_and_ac = catalog.filter_by_components(&["GPS", "ac"]);
    assert_eq!(models(&gps_and_ac), vec!["Zafira"]);
    assert!(catalog.filter_by_components(&["NONEXISTENT"]).is_empty());

    let everything = catalog.filter_by_components::<String>(&[]);
    assert_eq!(everything.len(), catalog.len());
}

#[test]
fn test_only_record_with_component() {
    use crate::utils::car;
    use car_catalog::{CarCatalog, TyreType};

    let equipped = |model: &str, components: &str| {
        let (tyre, body) = (TyreType::Summer, BodyType::Sedan);
        car(model, "1", 0, tyre, body, EngineType::Diesel, components)
    };
    let catalog = CarCatalog::new(vec![equipped("R", "ABS GPS"), equipped("S", "AC")]);

    let abs = catalog.filter_by_components(&["ABS"]);
    assert_eq!(models(&abs), vec!["R"]);
}

#[test]
fn test_generic_filters() {
    let catalog = sample_catalog();

    let all = Filter::<Car>::apply(&IncludeAllFilter, catalog.cars());
    assert_eq!(all.len(), catalog.len());

    let diesel = AndFilter::<Car>::default()
        .and(IncludeAllFilter)
        .and(EngineTypeFilter::new(EngineType::Diesel));
    let matched = diesel.apply(catalog.cars());
    assert_eq!(models(&matched), vec!["Astra", "Mokka"]);
    assert!(diesel.required_fields().contains("engine_type"));
}
