//! Core library for the weather forecast API.
//!
//! This crate defines:
//! - Coordinate parsing & validation
//! - Abstraction over the upstream forecast provider
//! - Shared domain models and the response-shaping transform
//!
//! It is used by `forecast-api`, but can also be reused by other binaries or services.

pub mod coords;
pub mod model;
pub mod provider;
pub mod transform;

pub use coords::{CoordinateError, Coordinates};
pub use model::{DailyForecast, ForecastResponse, RawForecast};
pub use provider::ForecastProvider;
pub use transform::{TransformError, shape_forecast};
