//! Expense entity
//!
//! A user-recorded expense. The claimable amount is derived from the
//! amount and the work-use percentage and is recomputed on every merge,
//! never taken from the caller.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::ExpenseId;

/// Fields supplied when creating an expense
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseDraft {
    /// Category the expense belongs to. Not checked against the stored
    /// category list.
    pub category_id: String,
    /// Amount in dollars
    pub amount: f64,
    /// Work-use percentage (0-100)
    pub work_percentage: u8,
    /// When the expense was incurred
    pub date: NaiveDate,
    /// Optional receipt image reference
    #[serde(default)]
    pub receipt: Option<String>,
}

/// Partial update applied to an expense. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseUpdate {
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub work_percentage: Option<u8>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub receipt: Option<String>,
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    category_id: String,
    amount: f64,
    work_percentage: u8,
    date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receipt: Option<String>,
    claimable_amount: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create an expense from a draft
    ///
    /// # Errors
    ///
    /// Returns a validation error when the amount is negative or not a
    /// number, or the work percentage exceeds 100.
    pub fn new(id: ExpenseId, draft: ExpenseDraft) -> Result<Self, DomainError> {
        validate(draft.amount, draft.work_percentage)?;
        let now = Utc::now();
        Ok(Self {
            id,
            claimable_amount: claimable(draft.amount, draft.work_percentage),
            category_id: draft.category_id,
            amount: draft.amount,
            work_percentage: draft.work_percentage,
            date: draft.date,
            receipt: draft.receipt,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get the expense ID
    #[must_use]
    pub const fn id(&self) -> &ExpenseId {
        &self.id
    }

    /// Get the category id
    #[must_use]
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    /// Get the amount in dollars
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Get the work-use percentage
    #[must_use]
    pub const fn work_percentage(&self) -> u8 {
        self.work_percentage
    }

    /// Get the expense date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the receipt reference
    #[must_use]
    pub fn receipt(&self) -> Option<&str> {
        self.receipt.as_deref()
    }

    /// Get the claimable amount in dollars
    #[must_use]
    pub const fn claimable_amount(&self) -> f64 {
        self.claimable_amount
    }

    /// Get the creation timestamp
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the last update timestamp
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merge a partial update into the expense.
    ///
    /// The claimable amount and `updated_at` are recomputed from the
    /// merged record, so updating only the amount still refreshes the
    /// claimable figure against the stored percentage.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the merged record would be invalid;
    /// the expense is left unchanged in that case.
    pub fn apply(&mut self, update: ExpenseUpdate) -> Result<(), DomainError> {
        let amount = update.amount.unwrap_or(self.amount);
        let work_percentage = update.work_percentage.unwrap_or(self.work_percentage);
        validate(amount, work_percentage)?;

        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(receipt) = update.receipt {
            self.receipt = Some(receipt);
        }
        self.amount = amount;
        self.work_percentage = work_percentage;
        self.claimable_amount = claimable(amount, work_percentage);
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate(amount: f64, work_percentage: u8) -> Result<(), DomainError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DomainError::validation("amount must be a non-negative number"));
    }
    if work_percentage > 100 {
        return Err(DomainError::validation(
            "work percentage must be between 0 and 100",
        ));
    }
    Ok(())
}

/// Claimable portion of an amount, rounded to cents
fn claimable(amount: f64, work_percentage: u8) -> f64 {
    let raw = amount * f64::from(work_percentage) / 100.0;
    (raw * 100.0).round() / 100.0
}
