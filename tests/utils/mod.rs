use std::io::Write;
use std::path::PathBuf;

use car_catalog::{BodyType, Car, CarCatalog, EngineType, TyreType};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Build a car with the attributes the tests vary; everything else is neutral
///
/// `components` is a whitespace-separated list.
#[must_use]
pub fn car(
    model: &str,
    price: &str,
    mileage: u32,
    tyre: TyreType,
    body: BodyType,
    engine: EngineType,
    components: &str,
) -> Car {
    Car::builder(model)
        .price(price.parse::<Decimal>().unwrap())
        .mileage(mileage)
        .tyre_type(tyre)
        .body_type(body)
        .engine_type(engine)
        .components(components.split_whitespace())
        .build()
        .unwrap()
}

/// A small catalog covering every operation of the service
///
/// | model    | price  | mileage | tyre       | body      | engine   | components |
/// |----------|--------|---------|------------|-----------|----------|------------|
/// | Astra    | 100    | 50000   | WINTER     | SEDAN     | DIESEL   | ABS, GPS   |
/// | Corsa    | 250.5  | 20000   | SUMMER     | HATCHBACK | GASOLINE | ABS        |
/// | Insignia | 200    | 50000   | WINTER     | SEDAN     | GASOLINE | AC         |
/// | Mokka    | 99.99  | 10000   | ALL_SEASON | SUV       | DIESEL   |            |
/// | Zafira   | 150    | 70000   | SUMMER     | SEDAN     | LPG      | GPS, AC    |
#[must_use]
pub fn sample_cars() -> Vec<Car> {
    use BodyType::{Hatchback, Sedan, Suv};
    use EngineType::{Diesel, Gasoline, Lpg};
    use TyreType::{AllSeason, Summer, Winter};

    vec![
        car("Astra", "100", 50_000, Winter, Sedan, Diesel, "ABS GPS"),
        car("Corsa", "250.5", 20_000, Summer, Hatchback, Gasoline, "ABS"),
        car("Insignia", "200", 50_000, Winter, Sedan, Gasoline, "AC"),
        car("Mokka", "99.99", 10_000, AllSeason, Suv, Diesel, ""),
        car("Zafira", "150", 70_000, Summer, Sedan, Lpg, "GPS AC"),
    ]
}

#[must_use]
pub fn sample_catalog() -> CarCatalog {
    CarCatalog::new(sample_cars())
}

/// Model names of a sequence of cars
pub fn models<C: AsRef<Car>>(cars: &[C]) -> Vec<String> {
    cars.iter()
        .map(|car| car.as_ref().model().to_string())
        .collect()
}

/// Write a catalog file into a fresh temporary directory
pub fn write_catalog_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

/// One car in the on-disk catalog shape
#[must_use]
pub fn car_json(model: &str, price: &str, tyre: &str, components: &[&str]) -> String {
    let components = components
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"{{
            "model": "{model}",
            "price": {price},
            "mileage": 1000,
            "engine": {{"type": "DIESEL", "power": 1.6}},
            "carBody": {{"color": "BLACK", "type": "SEDAN", "components": [{components}]}},
            "wheel": {{"model": "Borbet", "size": 17, "type": "{tyre}"}}
        }}"#
    )
}
