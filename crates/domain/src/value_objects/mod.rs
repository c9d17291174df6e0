//! Value Objects - Immutable, identity-less domain primitives

mod condition;
mod confidence;
mod expense_id;
mod geo_location;
mod time_of_day;

pub use condition::Condition;
pub use confidence::Confidence;
pub use expense_id::ExpenseId;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use time_of_day::TimeOfDay;
