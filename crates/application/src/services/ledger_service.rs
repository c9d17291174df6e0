//! Tax ledger service
//!
//! CRUD over the three tax records (profile, categories, expenses) stored
//! as JSON under fixed keys. Seeding of the nine default categories runs
//! once, guarded by a separate initialized flag, so later edits to the
//! list are never clobbered by a restart.

use std::{fmt, sync::Arc};

use chrono::Utc;
use domain::entities::{Expense, ExpenseCategory, ExpenseDraft, ExpenseUpdate, ProfileUpdate, TaxProfile};
use domain::errors::DomainError;
use domain::value_objects::ExpenseId;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    loaded::Loaded,
    ports::{StoragePort, StoragePortExt, keys},
};

/// Service managing the tax records
pub struct LedgerService {
    storage: Arc<dyn StoragePort>,
}

impl fmt::Debug for LedgerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerService").finish_non_exhaustive()
    }
}

impl LedgerService {
    /// Create a new ledger service
    #[must_use]
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Seed the default categories on first run.
    ///
    /// Idempotent: the initialized flag, not the category list, decides
    /// whether seeding happens, so a user who deleted or edited
    /// categories does not get them re-seeded on the next start.
    #[instrument(skip(self))]
    pub async fn initialize_if_needed(&self) -> Result<(), ApplicationError> {
        let flag = self.storage.get_json::<bool>(keys::TAX_INITIALIZED).await?;
        if flag.is_value() {
            debug!("Tax store already initialized");
            return Ok(());
        }
        if flag.is_corrupt() {
            warn!("Initialized flag is corrupt, re-seeding categories");
        }

        self.storage
            .set_json(keys::TAX_CATEGORIES, &ExpenseCategory::defaults())
            .await?;
        self.storage.set_json(keys::TAX_INITIALIZED, &true).await?;
        info!("Seeded default expense categories");
        Ok(())
    }

    /// The tax profile, created with defaults on first read.
    ///
    /// A corrupt stored profile is logged and replaced with defaults.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<TaxProfile, ApplicationError> {
        match self.storage.get_json::<TaxProfile>(keys::TAX_PROFILE).await? {
            Loaded::Value(profile) => Ok(profile),
            Loaded::Absent => {
                let profile = TaxProfile::default();
                self.storage.set_json(keys::TAX_PROFILE, &profile).await?;
                debug!("Created default tax profile");
                Ok(profile)
            },
            Loaded::Corrupt { error } => {
                warn!(%error, "Stored profile is corrupt, falling back to defaults");
                let profile = TaxProfile::default();
                self.storage.set_json(keys::TAX_PROFILE, &profile).await?;
                Ok(profile)
            },
        }
    }

    /// Merge a partial update into the profile and persist the result
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<TaxProfile, ApplicationError> {
        let mut profile = self.profile().await?;
        profile.apply(update);
        self.storage.set_json(keys::TAX_PROFILE, &profile).await?;
        Ok(profile)
    }

    /// The stored category list.
    ///
    /// Absent or corrupt storage falls back to the nine defaults without
    /// writing them back; seeding is [`Self::initialize_if_needed`]'s job.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<ExpenseCategory>, ApplicationError> {
        let loaded = self
            .storage
            .get_json::<Vec<ExpenseCategory>>(keys::TAX_CATEGORIES)
            .await?;
        if let Loaded::Corrupt { error } = &loaded {
            warn!(%error, "Stored categories are corrupt, falling back to defaults");
        }
        Ok(loaded.into_option().unwrap_or_else(ExpenseCategory::defaults))
    }

    /// Replace the whole category list
    #[instrument(skip(self, categories))]
    pub async fn replace_categories(
        &self,
        categories: Vec<ExpenseCategory>,
    ) -> Result<Vec<ExpenseCategory>, ApplicationError> {
        self.storage.set_json(keys::TAX_CATEGORIES, &categories).await?;
        Ok(categories)
    }

    /// All recorded expenses.
    ///
    /// A corrupt stored list is logged and reported as empty.
    #[instrument(skip(self))]
    pub async fn expenses(&self) -> Result<Vec<Expense>, ApplicationError> {
        let loaded = self
            .storage
            .get_json::<Vec<Expense>>(keys::TAX_EXPENSES)
            .await?;
        if let Loaded::Corrupt { error } = &loaded {
            warn!(%error, "Stored expenses are corrupt, treating as empty");
        }
        Ok(loaded.into_option().unwrap_or_default())
    }

    /// Record a new expense.
    ///
    /// The id is derived from the creation timestamp; a collision within
    /// the same millisecond bumps to the next unused one.
    #[instrument(skip(self, draft))]
    pub async fn add_expense(&self, draft: ExpenseDraft) -> Result<Expense, ApplicationError> {
        let mut expenses = self.expenses().await?;

        let mut millis = Utc::now().timestamp_millis();
        while expenses
            .iter()
            .any(|e| e.id().timestamp_millis() == Some(millis))
        {
            millis += 1;
        }

        let expense = Expense::new(ExpenseId::from_timestamp_millis(millis), draft)?;
        expenses.push(expense.clone());
        self.storage.set_json(keys::TAX_EXPENSES, &expenses).await?;
        debug!(id = %expense.id(), "Expense recorded");
        Ok(expense)
    }

    /// Merge a partial update into an expense by id.
    ///
    /// Derived fields are recomputed from the merged record.
    #[instrument(skip(self, update))]
    pub async fn update_expense(
        &self,
        id: &ExpenseId,
        update: ExpenseUpdate,
    ) -> Result<Expense, ApplicationError> {
        let mut expenses = self.expenses().await?;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| DomainError::not_found("Expense", id.as_str()))?;
        expense.apply(update)?;
        let updated = expense.clone();
        self.storage.set_json(keys::TAX_EXPENSES, &expenses).await?;
        Ok(updated)
    }

    /// Delete an expense by id
    #[instrument(skip(self))]
    pub async fn delete_expense(&self, id: &ExpenseId) -> Result<(), ApplicationError> {
        let mut expenses = self.expenses().await?;
        let before = expenses.len();
        expenses.retain(|e| e.id() != id);
        if expenses.len() == before {
            return Err(DomainError::not_found("Expense", id.as_str()).into());
        }
        self.storage.set_json(keys::TAX_EXPENSES, &expenses).await?;
        Ok(())
    }

    /// Clear every tax record and re-seed the default categories
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), ApplicationError> {
        self.storage.remove(keys::TAX_PROFILE).await?;
        self.storage.remove(keys::TAX_CATEGORIES).await?;
        self.storage.remove(keys::TAX_EXPENSES).await?;
        self.storage.remove(keys::TAX_INITIALIZED).await?;
        self.initialize_if_needed().await?;
        info!("Tax store reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    /// In-memory storage backing the service tests
    #[derive(Default)]
    struct FakeStorage {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait::async_trait]
    impl StoragePort for FakeStorage {
        async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
            Ok(self.entries.lock().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: String) -> Result<(), ApplicationError> {
            self.entries.lock().await.insert(key.to_string(), value);
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
            self.entries.lock().await.remove(key);
            Ok(())
        }
    }

    fn service() -> (LedgerService, Arc<FakeStorage>) {
        let storage = Arc::new(FakeStorage::default());
        (LedgerService::new(Arc::clone(&storage) as Arc<dyn StoragePort>), storage)
    }

    fn draft(amount: f64, work_percentage: u8) -> ExpenseDraft {
        ExpenseDraft {
            category_id: "equipment".to_string(),
            amount,
            work_percentage,
            date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            receipt: None,
        }
    }

    #[tokio::test]
    async fn initialize_seeds_once() {
        let (service, _) = service();

        service.initialize_if_needed().await.unwrap();
        let mut categories = service.categories().await.unwrap();
        assert_eq!(categories.len(), 9);

        // A user edit survives a second initialization
        categories.retain(|c| c.id != "donations");
        service.replace_categories(categories).await.unwrap();
        service.initialize_if_needed().await.unwrap();

        assert_eq!(service.categories().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn first_profile_read_creates_defaults() {
        let (service, storage) = service();

        let profile = service.profile().await.unwrap();
        assert!(!profile.setup_complete());

        // The default got persisted, not just returned
        assert!(storage.get(keys::TAX_PROFILE).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn corrupt_profile_falls_back_to_defaults() {
        let (service, storage) = service();
        storage
            .set(keys::TAX_PROFILE, "{broken".to_string())
            .await
            .unwrap();

        let profile = service.profile().await.unwrap();
        assert_eq!(profile.enabled_categories().len(), 9);
    }

    #[tokio::test]
    async fn profile_update_merges_and_persists() {
        let (service, _) = service();

        let updated = service
            .update_profile(ProfileUpdate {
                setup_complete: Some(true),
                ..ProfileUpdate::default()
            })
            .await
            .unwrap();
        assert!(updated.setup_complete());

        // Re-read sees the persisted merge
        let reread = service.profile().await.unwrap();
        assert!(reread.setup_complete());
        assert!(reread.reminders_enabled());
    }

    #[tokio::test]
    async fn add_expense_computes_claimable() {
        let (service, _) = service();

        let expense = service.add_expense(draft(1000.0, 50)).await.unwrap();
        assert!((expense.claimable_amount() - 500.0).abs() < f64::EPSILON);

        let listed = service.expenses().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), expense.id());
    }

    #[tokio::test]
    async fn expense_ids_stay_unique_within_a_millisecond() {
        let (service, _) = service();

        let first = service.add_expense(draft(10.0, 100)).await.unwrap();
        let second = service.add_expense(draft(20.0, 100)).await.unwrap();
        let third = service.add_expense(draft(30.0, 100)).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_ne!(second.id(), third.id());
    }

    #[tokio::test]
    async fn update_recomputes_claimable_from_stored_percentage() {
        let (service, _) = service();
        let expense = service.add_expense(draft(1000.0, 50)).await.unwrap();

        let updated = service
            .update_expense(
                expense.id(),
                ExpenseUpdate {
                    amount: Some(2000.0),
                    ..ExpenseUpdate::default()
                },
            )
            .await
            .unwrap();

        assert!((updated.claimable_amount() - 1000.0).abs() < f64::EPSILON);
        assert_eq!(updated.work_percentage(), 50);
    }

    #[tokio::test]
    async fn update_of_missing_expense_is_not_found() {
        let (service, _) = service();
        let result = service
            .update_expense(
                &ExpenseId::from_timestamp_millis(1),
                ExpenseUpdate::default(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn delete_removes_expense() {
        let (service, _) = service();
        let expense = service.add_expense(draft(50.0, 100)).await.unwrap();

        service.delete_expense(expense.id()).await.unwrap();
        assert!(service.expenses().await.unwrap().is_empty());

        // Deleting again is not found
        assert!(service.delete_expense(expense.id()).await.is_err());
    }

    #[tokio::test]
    async fn corrupt_expenses_read_as_empty() {
        let (service, storage) = service();
        storage
            .set(keys::TAX_EXPENSES, "not json at all".to_string())
            .await
            .unwrap();

        assert!(service.expenses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reset_clears_everything_and_reseeds() {
        let (service, storage) = service();
        service.initialize_if_needed().await.unwrap();

        service
            .update_profile(ProfileUpdate {
                setup_complete: Some(true),
                ..ProfileUpdate::default()
            })
            .await
            .unwrap();
        service.add_expense(draft(100.0, 100)).await.unwrap();
        let mut edited = service.categories().await.unwrap();
        edited.truncate(3);
        service.replace_categories(edited).await.unwrap();

        service.reset().await.unwrap();

        assert!(storage.get(keys::TAX_PROFILE).await.unwrap().is_none());
        assert!(service.expenses().await.unwrap().is_empty());
        assert_eq!(service.categories().await.unwrap().len(), 9);
        assert!(!service.profile().await.unwrap().setup_complete());
    }
}
