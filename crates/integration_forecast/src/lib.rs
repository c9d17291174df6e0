//! Open-Meteo forecast integration
//!
//! Two ways to the same data: [`OpenMeteoClient`] talks to the upstream
//! forecast API directly with a hard timeout, and [`ForecastProxyClient`]
//! talks to another Hearth instance's passthrough endpoint for split
//! deployments. Both implement [`ForecastProvider`].

mod client;
mod models;
mod provider;
mod proxy;

pub use client::{ForecastError, OpenMeteoClient, OpenMeteoConfig};
pub use models::{OpenMeteoPayload, ParsedForecast};
pub use provider::{ForecastProvider, ForecastSourceKind};
pub use proxy::{ForecastProxyClient, ProxyConfig};
