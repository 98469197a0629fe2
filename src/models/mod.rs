//! Domain models for the vehicle catalog
//!
//! The record model (`Car`), its component set, the enumerated categories and
//! the `EntityModel` trait used by generic collection code.

pub mod car;
pub mod traits;
pub mod types;

pub use car::{Car, CarBuilder, ComponentSet};
pub use traits::EntityModel;
pub use types::{BodyColor, BodyType, EngineType, TyreType};
