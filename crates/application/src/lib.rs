//! Application layer - Use cases and orchestration
//!
//! Contains the snapshot and ledger services, the ports they depend on,
//! and the tri-state [`Loaded`] decode result. Orchestrates domain
//! objects and infrastructure adapters.

pub mod error;
pub mod loaded;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use loaded::Loaded;
pub use ports::*;
pub use services::*;
