//! Catalog service
//!
//! `CarCatalog` owns the loaded records and is the single entry point the menu
//! layer talks to. Every operation reads the shared record set and returns a
//! fresh sequence or mapping; nothing here mutates a record.

use std::str::FromStr;
use std::sync::Arc;

use catalog_macros::CatalogEnum;
use itertools::Itertools;
use log::{debug, info};
use rust_decimal::Decimal;

use crate::algorithm::{
    self, NumericAttribute, Quantity, SortCriterion, SortDirection, SortField, Statistic, Summary,
};
use crate::collections::GroupedMap;
use crate::common::traits::collection::{LookupCollection, ModelCollection};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::filter::{
    AndFilter, BodyTypeFilter, ComponentsFilter, EngineTypeFilter, Filter, PriceRange,
    PriceRangeFilter,
};
use crate::models::{BodyType, Car, EngineType, EntityModel, TyreType};

/// Key used to partition records before aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, CatalogEnum)]
pub enum Grouping {
    /// One group labelled `ALL` holding every record
    #[default]
    #[catalog(alias = "NONE")]
    All,
    /// One group per model name
    #[catalog(alias = "CAR")]
    Model,
    /// One group per tyre type
    #[catalog(alias = "TYRE")]
    TyreType,
    /// One group per body type
    #[catalog(alias = "BODY")]
    BodyType,
    /// One group per engine type
    #[catalog(alias = "ENGINE")]
    EngineType,
}

impl Grouping {
    /// Group label of a record
    #[must_use]
    pub fn label(self, car: &Car) -> String {
        match self {
            Self::All => Self::All.name().to_string(),
            Self::Model => car.model().to_string(),
            Self::TyreType => car.tyre_type().to_string(),
            Self::BodyType => car.body_type().to_string(),
            Self::EngineType => car.engine_type().to_string(),
        }
    }
}

impl FromStr for Grouping {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| CatalogError::unknown_variant("grouping", s.trim()))
    }
}

/// The loaded vehicle catalog and its request operations
#[derive(Debug, Clone, Default)]
pub struct CarCatalog {
    cars: Vec<Arc<Car>>,
    config: CatalogConfig,
}

impl CarCatalog {
    /// Create a catalog with the default configuration
    #[must_use]
    pub fn new(cars: Vec<Car>) -> Self {
        Self::with_config(cars, CatalogConfig::default())
    }

    /// Create a catalog with an explicit configuration
    #[must_use]
    pub fn with_config(cars: Vec<Car>, config: CatalogConfig) -> Self {
        info!("Catalog holds {} car(s)", cars.len());
        Self {
            cars: cars.into_iter().map(Arc::new).collect(),
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Every car, in load order
    #[must_use]
    pub fn cars(&self) -> &[Arc<Car>] {
        &self.cars
    }

    /// Number of cars
    #[must_use]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Cars grouped by tyre type, in first-seen order
    #[must_use]
    pub fn group_by_tyre_type(&self) -> GroupedMap<TyreType, Vec<Arc<Car>>> {
        self.create_multi_lookup(Car::tyre_type)
    }

    /// Cars priced within `[min, max]` that have the given body type
    ///
    /// # Errors
    /// Returns `InvalidRange` when `min > max`.
    pub fn filter_by_price_and_body(
        &self,
        min: Decimal,
        max: Decimal,
        body_type: BodyType,
    ) -> Result<Vec<Arc<Car>>> {
        let filter = AndFilter::default()
            .and(PriceRangeFilter::new(PriceRange::new(min, max)?))
            .and(BodyTypeFilter::new(body_type));
        debug!("Filtering on {:?}", filter.required_fields());
        Ok(filter.apply(&self.cars))
    }

    /// Cars having every requested component, ignoring case
    ///
    /// An empty request returns the whole catalog. A component no car has
    /// simply yields an empty result.
    #[must_use]
    pub fn filter_by_components<S: AsRef<str>>(&self, required: &[S]) -> Vec<Arc<Car>> {
        ComponentsFilter::new(required.iter().map(|c| c.as_ref().to_string())).apply(&self.cars)
    }

    /// Canonical spelling of a component some car in the catalog has
    ///
    /// # Errors
    /// Returns `UnknownComponent` if no car has it.
    pub fn resolve_component(&self, component: &str) -> Result<String> {
        let component = component.trim();
        self.cars
            .iter()
            .find_map(|car| car.components().get(component))
            .map(str::to_string)
            .ok_or_else(|| CatalogError::UnknownComponent(component.to_string()))
    }

    /// Every component present in the catalog, first spelling and first-seen order
    #[must_use]
    pub fn known_components(&self) -> Vec<String> {
        self.cars
            .iter()
            .flat_map(|car| car.components().iter())
            .unique_by(|component| component.to_lowercase())
            .map(str::to_string)
            .collect()
    }

    /// Mileage per model label; repeated labels are summed
    #[must_use]
    pub fn mileage_by_car(&self) -> GroupedMap<String, u64> {
        let mut mileage = GroupedMap::new();
        for car in &self.cars {
            *mileage.entry_or_insert_with(car.id().clone(), || 0) += u64::from(car.mileage());
        }
        mileage
    }

    /// Distinct engine types, in first-seen order
    #[must_use]
    pub fn distinct_engine_types(&self) -> Vec<EngineType> {
        self.distinct(Car::engine_type)
    }

    /// Distinct model names of cars with the given engine type
    #[must_use]
    pub fn models_for_engine_type(&self, engine_type: EngineType) -> Vec<String> {
        EngineTypeFilter::new(engine_type)
            .apply(&self.cars)
            .iter()
            .map(|car| car.model().to_string())
            .unique()
            .collect()
    }

    /// Cars ordered by a criterion
    #[must_use]
    pub fn sort(&self, criterion: &SortCriterion) -> Vec<Arc<Car>> {
        let extractor = criterion.extractor();
        algorithm::sort(
            &self.cars,
            |a: &Arc<Car>, b: &Arc<Car>| extractor.compare(a, b),
            criterion.direction,
            criterion.algorithm,
        )
    }

    /// Cars ordered by a field with the configured default algorithm
    #[must_use]
    pub fn sort_by(&self, field: SortField, direction: SortDirection) -> Vec<Arc<Car>> {
        self.sort(&SortCriterion::new(
            field,
            direction,
            self.config.default_algorithm,
        ))
    }

    /// Reduce every group of cars for one quantity
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if a total or average does not fit.
    pub fn aggregate(
        &self,
        quantity: &Quantity,
        grouping: Grouping,
    ) -> Result<GroupedMap<String, Statistic>> {
        let key_fn = |car: &Car| grouping.label(car);
        algorithm::aggregate(&self.cars, quantity, key_fn, &self.config)
    }

    /// Min, max, average, total and count of one attribute over the catalog
    ///
    /// `None` when the catalog is empty.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if the total or average does not fit.
    pub fn statistics(&self, attribute: NumericAttribute) -> Result<Option<Summary>> {
        algorithm::summarize(&self.cars, attribute, &self.config)
    }
}

impl ModelCollection<Car> for CarCatalog {
    fn all(&self) -> Vec<Arc<Car>> {
        self.cars.clone()
    }

    fn count(&self) -> usize {
        self.cars.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<Car>>
    where
        F: Fn(&Car) -> bool,
    {
        self.cars
            .iter()
            .filter(|car| predicate(car))
            .cloned()
            .collect()
    }
}

impl LookupCollection<Car> for CarCatalog {}
