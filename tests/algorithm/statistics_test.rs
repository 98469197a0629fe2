//! Tests for the aggregation engine

use car_catalog::algorithm::{NumericValue, aggregate};
use car_catalog::config::RoundingMode;
use car_catalog::{
    BodyType, Car, CarCatalog, CatalogConfig, EngineType, Grouping, NumericAttribute, Quantity,
    Reduction, Statistic, TyreType,
};
use rust_decimal::Decimal;

use crate::utils::{car, sample_catalog};

fn quantity(tag: &str) -> Quantity {
    tag.parse().unwrap()
}

fn priced(model: &str, price: &str, tyre: TyreType) -> Car {
    let (body, engine) = (BodyType::Sedan, EngineType::Diesel);
    car(model, price, 0, tyre, body, engine, "")
}

#[test]
fn test_count_by_tyre_keeps_first_seen_order() {
    let cars = vec![
        priced("A", "1", TyreType::Winter),
        priced("B", "1", TyreType::Summer),
        priced("C", "1", TyreType::Winter),
    ];
    let counts = CarCatalog::new(cars)
        .aggregate(&quantity("price:count"), Grouping::TyreType)
        .unwrap();

    let entries: Vec<(&str, &Statistic)> = counts.iter().map(|(k, v)| (k.as_str(), v)).collect();
    let (two, one) = (Statistic::Count(2), Statistic::Count(1));
    assert_eq!(entries, vec![("WINTER", &two), ("SUMMER", &one)]);
}

#[test]
fn test_price_total_is_exact() {
    let cars = ["10.00", "20.00", "5.00"]
        .iter()
        .map(|price| priced("X", price, TyreType::Summer))
        .collect::<Vec<_>>();

    let totals = aggregate(
        &cars,
        &quantity("price:total"),
        |_| "ALL",
        &CatalogConfig::default(),
    )
    .unwrap();

    let expected = Statistic::Amount(Decimal::new(3500, 2));
    assert_eq!(totals.get("ALL"), Some(&expected));
}

#[test]
fn test_fractional_prices_sum_without_drift() {
    let cars = ["0.10", "0.20"]
        .iter()
        .map(|price| priced("X", price, TyreType::Summer))
        .collect::<Vec<_>>();
    let totals = CarCatalog::new(cars)
        .aggregate(&quantity("price:total"), Grouping::All)
        .unwrap();

    let expected = Statistic::Amount("0.30".parse().unwrap());
    assert_eq!(totals.get("ALL"), Some(&expected));
}

#[test]
fn test_mileage_total_per_body_type() {
    let totals = sample_catalog()
        .aggregate(&quantity("mileage:total"), Grouping::BodyType)
        .unwrap();

    let bodies: Vec<&String> = totals.keys().collect();
    assert_eq!(bodies, vec!["SEDAN", "HATCHBACK", "SUV"]);
    assert_eq!(totals.get("SEDAN"), Some(&Statistic::Whole(170_000)));
    assert_eq!(totals.get("SUV"), Some(&Statistic::Whole(10_000)));
}

#[test]
fn test_average_rounding_modes() {
    // (2.34 + 2.35) / 2 = 2.345, a midpoint at scale 2
    let cars = || {
        vec![
            priced("A", "2.34", TyreType::Summer),
            priced("B", "2.35", TyreType::Summer),
        ]
    };
    let average = |rounding: RoundingMode| {
        let config = CatalogConfig::builder().rounding(rounding).build();
        CarCatalog::with_config(cars(), config)
            .aggregate(&quantity("price:average"), Grouping::All)
            .unwrap()
    };

    assert_eq!(
        average(RoundingMode::HalfUp).get("ALL"),
        Some(&Statistic::Amount(Decimal::new(235, 2)))
    );
    assert_eq!(
        average(RoundingMode::HalfEven).get("ALL"),
        Some(&Statistic::Amount(Decimal::new(234, 2)))
    );

    // (100 + 250.5 + 200 + 99.99 + 150) / 5 = 160.098
    let catalog = sample_catalog();
    let average = catalog
        .aggregate(&quantity("price:average"), Grouping::All)
        .unwrap();
    let expected = Statistic::Amount(Decimal::new(16010, 2));
    assert_eq!(average.get("ALL"), Some(&expected));
}

#[test]
fn test_extremum_names_first_holder() {
    let max = sample_catalog()
        .aggregate(&quantity("mileage:min"), Grouping::EngineType)
        .unwrap();

    assert_eq!(
        max.get("GASOLINE"),
        Some(&Statistic::Extremum {
            value: NumericValue::Whole(20_000),
            model: "Corsa".to_string(),
        })
    );

    let max = sample_catalog()
        .aggregate(&quantity("mileage:max"), Grouping::TyreType)
        .unwrap();
    // Astra and Insignia tie on 50000; the first one wins
    assert!(matches!(
        max.get("WINTER"),
        Some(Statistic::Extremum { model, .. }) if model == "Astra"
    ));
}

#[test]
fn test_empty_catalog_aggregates_to_empty_mapping() {
    let catalog = CarCatalog::new(Vec::new());
    for attribute in NumericAttribute::ALL {
        for reduction in Reduction::ALL {
            let result = catalog
                .aggregate(&Quantity::new(*attribute, *reduction), Grouping::Model)
                .unwrap();
            assert!(result.is_empty(), "{attribute}:{reduction}");
        }
        assert!(catalog.statistics(*attribute).unwrap().is_none());
    }
}

#[test]
fn test_summary_of_prices() {
    let summary = sample_catalog()
        .statistics(NumericAttribute::Price)
        .unwrap()
        .unwrap();

    assert_eq!(summary.count, 5);
    assert_eq!(summary.total, Statistic::Amount(Decimal::new(80049, 2)));
    assert!(matches!(summary.min, Statistic::Extremum { ref model, .. } if model == "Mokka"));
    assert!(matches!(summary.max, Statistic::Extremum { ref model, .. } if model == "Corsa"));

    let rendered = summary.to_string();
    for label in ["MIN", "MAX", "AVERAGE", "TOTAL", "COUNT"] {
        assert!(rendered.contains(label), "{rendered}");
    }
}

#[test]
fn test_unknown_quantity_is_rejected() {
    assert!(matches!(
        "price:median".parse::<Quantity>(),
        Err(car_catalog::CatalogError::UnsupportedQuantity(_))
    ));
}
