use crate::{Coordinates, model::RawForecast};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Seam between the HTTP handlers and the upstream weather service.
///
/// A single call returns the raw one-call payload for the given coordinates;
/// errors propagate verbatim to the caller as internal errors.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn one_call(&self, coords: Coordinates) -> anyhow::Result<RawForecast>;
}
