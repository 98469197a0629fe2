//! Common domain type definitions
//!
//! Enumerated vehicle categories shared by the record model, the filters and
//! the statistics engine. Declaration order is the sort order.

use std::str::FromStr;

use catalog_macros::CatalogEnum;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Tyre type fitted to a vehicle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, CatalogEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TyreType {
    /// Winter tyres
    Winter,
    /// Summer tyres
    Summer,
    /// All-season tyres
    AllSeason,
}

/// Body style of a vehicle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, CatalogEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyType {
    /// Saloon with separate boot
    Sedan,
    /// Hatchback
    Hatchback,
    /// Estate
    #[catalog(alias = "ESTATE")]
    Combi,
    /// Sport utility vehicle
    Suv,
    /// Two-door coupe
    Coupe,
    /// Convertible
    #[catalog(alias = "CONVERTIBLE")]
    Cabrio,
}

/// Engine fuel type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, CatalogEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineType {
    /// Diesel engine
    Diesel,
    /// Petrol engine
    #[catalog(alias = "PETROL")]
    Gasoline,
    /// Liquefied petroleum gas
    Lpg,
    /// Battery electric
    Electric,
    /// Hybrid drive
    Hybrid,
}

/// Paint colour of the body
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, CatalogEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyColor {
    /// Black
    Black,
    /// White
    White,
    /// Red
    Red,
    /// Blue
    Blue,
    /// Silver
    Silver,
    /// Green
    Green,
}

/// Implement `FromStr` for a catalog enum, mapping unknown names onto
/// `CatalogError::UnknownVariant`
macro_rules! impl_category_from_str {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| CatalogError::unknown_variant($kind, s))
            }
        }
    };
}

impl_category_from_str!(TyreType, "tyre type");
impl_category_from_str!(BodyType, "body type");
impl_category_from_str!(EngineType, "engine type");
impl_category_from_str!(BodyColor, "body color");
