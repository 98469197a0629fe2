//! Vehicle record model
//!
//! A `Car` is one catalog entry. It is created once (through `CarBuilder`,
//! either by the loader or by tests) and never mutated afterwards: all fields
//! are private and exposed through read-only accessors.

use std::fmt;

use itertools::Itertools;
use log::warn;
use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::error::{CatalogError, Result};
use crate::models::traits::EntityModel;
use crate::models::types::{BodyColor, BodyType, EngineType, TyreType};

/// Compare two component names ignoring case
fn same_component(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Set of body components, unique ignoring case
///
/// Components keep the spelling and order in which they were first inserted;
/// equality ignores both order and case.
#[derive(Debug, Clone, Default)]
pub struct ComponentSet {
    items: SmallVec<[String; 4]>,
}

impl ComponentSet {
    /// Create an empty component set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component unless one with the same name (ignoring case) is present
    ///
    /// Returns `false` when the component was already in the set.
    fn insert(&mut self, component: impl Into<String>) -> bool {
        let component = component.into();
        if self.contains(&component) {
            return false;
        }
        self.items.push(component);
        true
    }

    /// Check whether the set contains a component, ignoring case
    #[must_use]
    pub fn contains(&self, component: &str) -> bool {
        self.get(component).is_some()
    }

    /// Get the stored spelling of a component, matched ignoring case
    #[must_use]
    pub fn get(&self, component: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| same_component(item, component))
            .map(String::as_str)
    }

    /// Check whether every requested component is present
    ///
    /// An empty request is satisfied by every set.
    #[must_use]
    pub fn is_superset_of<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|c| self.contains(c.as_ref()))
    }

    /// Iterate over the components in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Number of components
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set has no components
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PartialEq for ComponentSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|c| other.contains(c))
    }
}

impl Eq for ComponentSet {}

impl<S: Into<String>> FromIterator<S> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for component in iter {
            set.insert(component);
        }
        set
    }
}

impl fmt::Display for ComponentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

/// One vehicle in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    model: String,
    price: Decimal,
    mileage: u32,
    engine_type: EngineType,
    engine_power: Decimal,
    body_type: BodyType,
    body_color: BodyColor,
    components: ComponentSet,
    tyre_type: TyreType,
    wheel_model: String,
    wheel_size: u32,
}

impl Car {
    /// Start building a car with the given model name
    #[must_use]
    pub fn builder(model: impl Into<String>) -> CarBuilder {
        CarBuilder::new(model)
    }

    /// Model name, used as the record label
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Price, never negative
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Mileage in kilometres
    #[must_use]
    pub const fn mileage(&self) -> u32 {
        self.mileage
    }

    /// Engine fuel type
    #[must_use]
    pub const fn engine_type(&self) -> EngineType {
        self.engine_type
    }

    /// Engine power, never negative
    #[must_use]
    pub const fn engine_power(&self) -> Decimal {
        self.engine_power
    }

    /// Body style
    #[must_use]
    pub const fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// Body colour
    #[must_use]
    pub const fn body_color(&self) -> BodyColor {
        self.body_color
    }

    /// Body components
    #[must_use]
    pub const fn components(&self) -> &ComponentSet {
        &self.components
    }

    /// Tyre type
    #[must_use]
    pub const fn tyre_type(&self) -> TyreType {
        self.tyre_type
    }

    /// Wheel (rim) model name
    #[must_use]
    pub fn wheel_model(&self) -> &str {
        &self.wheel_model
    }

    /// Wheel size in inches
    #[must_use]
    pub const fn wheel_size(&self) -> u32 {
        self.wheel_size
    }
}

impl EntityModel for Car {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.model
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{price: {}, mileage: {}, engine: {} {}, body: {} {} {}, wheel: {} {}\" {}}}",
            self.model,
            self.price,
            self.mileage,
            self.engine_type,
            self.engine_power,
            self.body_type,
            self.body_color,
            self.components,
            self.wheel_model,
            self.wheel_size,
            self.tyre_type,
        )
    }
}

/// Builder for constructing validated cars
///
/// Unset attributes fall back to neutral defaults (zero price and mileage,
/// gasoline engine, black sedan on summer tyres).
#[derive(Debug, Clone)]
pub struct CarBuilder {
    model: String,
    price: Decimal,
    mileage: u32,
    engine_type: EngineType,
    engine_power: Decimal,
    body_type: BodyType,
    body_color: BodyColor,
    components: Vec<String>,
    tyre_type: TyreType,
    wheel_model: String,
    wheel_size: u32,
}

impl CarBuilder {
    /// Create a new builder for the given model name
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            price: Decimal::ZERO,
            mileage: 0,
            engine_type: EngineType::Gasoline,
            engine_power: Decimal::ZERO,
            body_type: BodyType::Sedan,
            body_color: BodyColor::Black,
            components: Vec::new(),
            tyre_type: TyreType::Summer,
            wheel_model: String::new(),
            wheel_size: 0,
        }
    }

    /// Set the price
    #[must_use]
    pub const fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Set the mileage
    #[must_use]
    pub const fn mileage(mut self, mileage: u32) -> Self {
        self.mileage = mileage;
        self
    }

    /// Set the engine type
    #[must_use]
    pub const fn engine_type(mut self, engine_type: EngineType) -> Self {
        self.engine_type = engine_type;
        self
    }

    /// Set the engine power
    #[must_use]
    pub const fn engine_power(mut self, power: Decimal) -> Self {
        self.engine_power = power;
        self
    }

    /// Set the body type
    #[must_use]
    pub const fn body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    /// Set the body colour
    #[must_use]
    pub const fn body_color(mut self, color: BodyColor) -> Self {
        self.body_color = color;
        self
    }

    /// Add body components
    #[must_use]
    pub fn components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components = components.into_iter().map(Into::<String>::into);
        self.components.extend(components);
        self
    }

    /// Set the tyre type
    #[must_use]
    pub const fn tyre_type(mut self, tyre_type: TyreType) -> Self {
        self.tyre_type = tyre_type;
        self
    }

    /// Set the wheel model and size
    #[must_use]
    pub fn wheel(mut self, model: impl Into<String>, size: u32) -> Self {
        self.wheel_model = model.into();
        self.wheel_size = size;
        self
    }

    /// Validate the attributes and build the car
    ///
    /// Rejects an empty model name and negative price or engine power.
    /// Components repeated with different case are collapsed to their first
    /// spelling.
    pub fn build(self) -> Result<Car> {
        let model = self.model.trim().to_string();
        if model.is_empty() {
            let reason = "model name is empty";
            return Err(CatalogError::invalid_record("<unnamed>", reason));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(CatalogError::invalid_record(
                model,
                format!("price {} is negative", self.price),
            ));
        }
        if self.engine_power.is_sign_negative() && !self.engine_power.is_zero() {
            return Err(CatalogError::invalid_record(
                model,
                format!("engine power {} is negative", self.engine_power),
            ));
        }

        let requested = self.components.len();
        let components: ComponentSet = self.components.into_iter().collect();
        if components.len() < requested {
            warn!(
                "Dropped {} duplicate component(s) from '{model}'",
                requested - components.len()
            );
        }

        Ok(Car {
            model,
            price: self.price,
            mileage: self.mileage,
            engine_type: self.engine_type,
            engine_power: self.engine_power,
            body_type: self.body_type,
            body_color: self.body_color,
            components,
            tyre_type: self.tyre_type,
            wheel_model: self.wheel_model,
            wheel_size: self.wheel_size,
        })
    }
}
