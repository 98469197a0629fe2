//! Catalog file loading
//!
//! Catalog files are JSON documents holding either a top-level array of cars
//! or an object with a `cars` array. Every record passes through `CarBuilder`,
//! so a loaded catalog only contains valid cars.

use std::path::Path;

use log::{debug, info};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::catalog::CarCatalog;
use crate::config::CatalogConfig;
use crate::error::util::safe_read_to_string;
use crate::error::{CatalogError, Result};
use crate::models::{BodyColor, BodyType, Car, EngineType, TyreType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CarRecord {
    model: String,
    price: Decimal,
    mileage: u32,
    engine: EngineRecord,
    car_body: CarBodyRecord,
    wheel: WheelRecord,
}

#[derive(Debug, Deserialize)]
struct EngineRecord {
    #[serde(rename = "type")]
    engine_type: EngineType,
    #[serde(default)]
    power: Decimal,
}

#[derive(Debug, Deserialize)]
struct CarBodyRecord {
    color: BodyColor,
    #[serde(rename = "type")]
    body_type: BodyType,
    #[serde(default)]
    components: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WheelRecord {
    #[serde(default)]
    model: String,
    size: u32,
    #[serde(rename = "type")]
    tyre_type: TyreType,
}

impl CarRecord {
    fn into_car(self) -> Result<Car> {
        Car::builder(self.model)
            .price(self.price)
            .mileage(self.mileage)
            .engine_type(self.engine.engine_type)
            .engine_power(self.engine.power)
            .body_type(self.car_body.body_type)
            .body_color(self.car_body.color)
            .components(self.car_body.components)
            .tyre_type(self.wheel.tyre_type)
            .wheel(self.wheel.model, self.wheel.size)
            .build()
    }
}

/// Check that at least one file is named and every name ends in `.json`
///
/// # Errors
/// `EmptyCatalogSources` for an empty list, `InvalidFileName` otherwise.
pub fn validate_file_names<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    if paths.is_empty() {
        return Err(CatalogError::EmptyCatalogSources);
    }

    for path in paths {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json || path.file_stem().is_none() {
            return Err(CatalogError::InvalidFileName(path.to_path_buf()));
        }
    }
    Ok(())
}

/// Parse the cars held in one catalog document
///
/// `source` only labels errors.
///
/// # Errors
/// `Json` for malformed documents, `InvalidRecord` for invalid cars.
pub fn parse_cars(json: &str, source: &Path) -> Result<Vec<Car>> {
    let json_error = |source_error| CatalogError::Json {
        path: source.to_path_buf(),
        source: source_error,
    };

    let document: Value = serde_json::from_str(json).map_err(json_error)?;
    let records = match document {
        Value::Object(mut object) if object.contains_key("cars") => {
            object.remove("cars").unwrap_or(Value::Null)
        }
        other => other,
    };
    let records: Vec<CarRecord> = serde_json::from_value(records).map_err(json_error)?;

    records.into_iter().map(CarRecord::into_car).collect()
}

/// Read and concatenate the cars of every file, in the given order
///
/// # Errors
/// File name, I/O, JSON and record validation errors, naming the file involved.
pub fn load_cars<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Car>> {
    validate_file_names(paths)?;

    let mut cars = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let json = safe_read_to_string(path, "loading the car catalog")?;
        let loaded = parse_cars(&json, path)?;
        debug!("Loaded {} car(s) from {}", loaded.len(), path.display());
        cars.extend(loaded);
    }

    info!("Loaded {} car(s) from {} file(s)", cars.len(), paths.len());
    Ok(cars)
}

/// Load the files into a catalog with the given configuration
///
/// # Errors
/// Any error of [`load_cars`].
pub fn load_catalog<P: AsRef<Path>>(paths: &[P], config: CatalogConfig) -> Result<CarCatalog> {
    Ok(CarCatalog::with_config(load_cars(paths)?, config))
}
