//! Domain layer for Hearth
//!
//! Contains the weather classification rules, the snapshot and tax record
//! entities, value objects, and domain errors. This layer has no I/O and no
//! knowledge of HTTP or storage.

pub mod display;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use display::{SceneCopy, SceneTable, category_icon};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
