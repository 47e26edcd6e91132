//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Provides atomic operations for multi-statement workflows such as seeding

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    EmployeeRepository, EmployeeStore, FeedbackRepository, FeedbackStore, GoalRepository,
    GoalStore, InsightsRepository, InsightsStore, TaskRepository, TaskStore,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly due to generic methods; tests implement it by hand
/// around mocked repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    fn goals(&self) -> Arc<dyn GoalRepository>;

    fn tasks(&self) -> Arc<dyn TaskRepository>;

    fn feedback(&self) -> Arc<dyn FeedbackRepository>;

    fn insights(&self) -> Arc<dyn InsightsRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get employee repository for this transaction
    pub fn employees(&self) -> TxEmployeeRepository<'_> {
        TxEmployeeRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: Arc<DatabaseConnection>,
    employee_repo: Arc<EmployeeStore>,
    goal_repo: Arc<GoalStore>,
    task_repo: Arc<TaskStore>,
    feedback_repo: Arc<FeedbackStore>,
    insights_repo: Arc<InsightsStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        let db = db.into();
        Self {
            employee_repo: Arc::new(EmployeeStore::new(db.clone())),
            goal_repo: Arc::new(GoalStore::new(db.clone())),
            task_repo: Arc::new(TaskStore::new(db.clone())),
            feedback_repo: Arc::new(FeedbackStore::new(db.clone())),
            insights_repo: Arc::new(InsightsStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    fn goals(&self) -> Arc<dyn GoalRepository> {
        self.goal_repo.clone()
    }

    fn tasks(&self) -> Arc<dyn TaskRepository> {
        self.task_repo.clone()
    }

    fn feedback(&self) -> Arc<dyn FeedbackRepository> {
        self.feedback_repo.clone()
    }

    fn insights(&self) -> Arc<dyn InsightsRepository> {
        self.insights_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware employee repository.
pub struct TxEmployeeRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxEmployeeRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Count employees
    pub async fn count(&self) -> AppResult<u64> {
        use super::repositories::entities::employee::Entity as EmployeeEntity;
        use sea_orm::{EntityTrait, PaginatorTrait};

        EmployeeEntity::find()
            .count(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Create a new employee
    pub async fn create(
        &self,
        name: &str,
        manager_id: Option<i32>,
    ) -> AppResult<crate::domain::Employee> {
        use super::repositories::entities::employee::ActiveModel;
        use sea_orm::{ActiveModelTrait, NotSet, Set};

        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            manager_id: Set(manager_id),
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(crate::domain::Employee::from(model))
    }
}

/// Simpler API for executing transactional operations.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
