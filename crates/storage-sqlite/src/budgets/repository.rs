use finfusion_core::budgets::{
    Budget, BudgetAlert, BudgetRepositoryTrait, BudgetUpdate, NewBudget, NewBudgetAlert,
};
use finfusion_core::errors::{DatabaseError, ValidationError};
use finfusion_core::{Error, Result};

use super::model::{BudgetAlertDB, BudgetDB, NewBudgetAlertDB, NewBudgetDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budget_alerts;
use crate::schema::budgets;
use crate::schema::budgets::dsl::*;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct BudgetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BudgetRepository { pool, writer }
    }
}

fn find_owned(
    conn: &mut SqliteConnection,
    owner_id: &str,
    budget_id_param: &str,
) -> Result<BudgetDB> {
    budgets::table
        .filter(budgets::id.eq(budget_id_param))
        .filter(budgets::user_id.eq(owner_id))
        .first::<BudgetDB>(conn)
        .map_err(|e| Error::from(StorageError::from(e)))
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn create(&self, user_id_param: &str, new_budget: NewBudget) -> Result<Budget> {
        let owner_id = user_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let mut new_budget_db = NewBudgetDB::from_domain(owner_id, new_budget);
                if new_budget_db.id.is_none() {
                    new_budget_db.id = Some(Uuid::new_v4().to_string());
                }

                let result_db = diesel::insert_into(budgets::table)
                    .values(&new_budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Budget::try_from(result_db)
            })
            .await
    }

    async fn update(&self, user_id_param: &str, update: BudgetUpdate) -> Result<Budget> {
        let owner_id = user_id_param.to_string();
        let budget_id_owned = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Budget ID is required for updates".to_string(),
            ))
        })?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                find_owned(conn, &owner_id, &budget_id_owned)?;

                let result_db = diesel::update(budgets.find(&budget_id_owned))
                    .set((
                        amount.eq(update.amount.to_string()),
                        period.eq(update.period.as_str()),
                        alert_threshold_pct.eq(update.alert_threshold_pct),
                        is_active.eq(update.is_active),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Budget::try_from(result_db)
            })
            .await
    }

    async fn delete(&self, user_id_param: &str, budget_id_param: &str) -> Result<usize> {
        let owner_id = user_id_param.to_string();
        let budget_id_owned = budget_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Alerts go with the budget via ON DELETE CASCADE.
                let deleted = diesel::delete(
                    budgets
                        .filter(id.eq(&budget_id_owned))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Budget {} not found",
                        budget_id_owned
                    ))));
                }
                Ok(deleted)
            })
            .await
    }

    fn get_by_id(&self, user_id_param: &str, budget_id_param: &str) -> Result<Budget> {
        let mut conn = get_connection(&self.pool)?;
        let budget_db = find_owned(&mut conn, user_id_param, budget_id_param)?;
        Budget::try_from(budget_db)
    }

    fn list(&self, user_id_param: &str, active_only: bool) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = budgets
            .filter(user_id.eq(user_id_param))
            .order(created_at.asc())
            .into_boxed();
        if active_only {
            query = query.filter(is_active.eq(true));
        }
        let budgets_db = query
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        budgets_db.into_iter().map(Budget::try_from).collect()
    }

    async fn insert_alert(&self, alert: NewBudgetAlert) -> Result<BudgetAlert> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BudgetAlert> {
                let mut new_alert_db: NewBudgetAlertDB = alert.into();
                new_alert_db.id = Some(Uuid::new_v4().to_string());

                let result_db = diesel::insert_into(budget_alerts::table)
                    .values(&new_alert_db)
                    .returning(BudgetAlertDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(BudgetAlert::from(result_db))
            })
            .await
    }

    fn find_alert(
        &self,
        budget_id_param: &str,
        period_start_param: NaiveDate,
        threshold_pct_param: i32,
    ) -> Result<Option<BudgetAlert>> {
        let mut conn = get_connection(&self.pool)?;
        let alert_db = budget_alerts::table
            .filter(budget_alerts::budget_id.eq(budget_id_param))
            .filter(budget_alerts::period_start.eq(period_start_param))
            .filter(budget_alerts::threshold_pct.eq(threshold_pct_param))
            .first::<BudgetAlertDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(alert_db.map(BudgetAlert::from))
    }

    fn list_alerts(&self, user_id_param: &str, budget_id_param: &str) -> Result<Vec<BudgetAlert>> {
        let mut conn = get_connection(&self.pool)?;
        // Ownership check first so another user's budget id reads as missing.
        find_owned(&mut conn, user_id_param, budget_id_param)?;

        let alerts_db = budget_alerts::table
            .filter(budget_alerts::budget_id.eq(budget_id_param))
            .order(budget_alerts::created_at.desc())
            .load::<BudgetAlertDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(alerts_db.into_iter().map(BudgetAlert::from).collect())
    }
}
