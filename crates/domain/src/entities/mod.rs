//! Domain entities - Objects with identity and lifecycle

mod expense;
mod expense_category;
mod tax_profile;
mod weather_snapshot;

pub use expense::{Expense, ExpenseDraft, ExpenseUpdate};
pub use expense_category::ExpenseCategory;
pub use tax_profile::{IncomeType, LodgmentCadence, ProfileUpdate, TaxProfile};
pub use weather_snapshot::{CurrentConditions, DailyEntry, HourlyEntry, WeatherSnapshot};
