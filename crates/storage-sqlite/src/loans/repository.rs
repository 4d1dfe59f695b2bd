use finfusion_core::errors::{DatabaseError, ValidationError};
use finfusion_core::loans::{
    Loan, LoanPayment, LoanRepositoryTrait, LoanUpdate, NewLoan, NewLoanPayment,
};
use finfusion_core::{Error, Result};
use rust_decimal::Decimal;

use super::model::{LoanDB, LoanPaymentDB, NewLoanDB, NewLoanPaymentDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::loan_payments;
use crate::schema::loans;
use crate::schema::loans::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct LoanRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl LoanRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        LoanRepository { pool, writer }
    }
}

fn find_owned(conn: &mut SqliteConnection, owner_id: &str, loan_id_param: &str) -> Result<LoanDB> {
    loans::table
        .filter(loans::id.eq(loan_id_param))
        .filter(loans::user_id.eq(owner_id))
        .first::<LoanDB>(conn)
        .map_err(|e| Error::from(StorageError::from(e)))
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn create(&self, user_id_param: &str, new_loan: NewLoan, emi_param: Decimal) -> Result<Loan> {
        let owner_id = user_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Loan> {
                let mut new_loan_db = NewLoanDB::from_domain(owner_id, emi_param, new_loan);
                if new_loan_db.id.is_none() {
                    new_loan_db.id = Some(Uuid::new_v4().to_string());
                }

                let result_db = diesel::insert_into(loans::table)
                    .values(&new_loan_db)
                    .returning(LoanDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Loan::from(result_db))
            })
            .await
    }

    async fn update(&self, user_id_param: &str, update: LoanUpdate) -> Result<Loan> {
        let owner_id = user_id_param.to_string();
        let loan_id_owned = update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Loan ID is required for updates".to_string(),
            ))
        })?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Loan> {
                find_owned(conn, &owner_id, &loan_id_owned)?;

                let result_db = diesel::update(loans.find(&loan_id_owned))
                    .set((
                        name.eq(update.name),
                        is_active.eq(update.is_active),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(LoanDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Loan::from(result_db))
            })
            .await
    }

    async fn delete(&self, user_id_param: &str, loan_id_param: &str) -> Result<usize> {
        let owner_id = user_id_param.to_string();
        let loan_id_owned = loan_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Payments go with the loan via ON DELETE CASCADE.
                let deleted = diesel::delete(
                    loans
                        .filter(id.eq(&loan_id_owned))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Loan {} not found",
                        loan_id_owned
                    ))));
                }
                Ok(deleted)
            })
            .await
    }

    fn get_by_id(&self, user_id_param: &str, loan_id_param: &str) -> Result<Loan> {
        let mut conn = get_connection(&self.pool)?;
        let loan_db = find_owned(&mut conn, user_id_param, loan_id_param)?;
        Ok(Loan::from(loan_db))
    }

    fn list(&self, user_id_param: &str, active_only: bool) -> Result<Vec<Loan>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = loans
            .filter(user_id.eq(user_id_param))
            .order(start_date.asc())
            .into_boxed();
        if active_only {
            query = query.filter(is_active.eq(true));
        }
        let loans_db = query.load::<LoanDB>(&mut conn).map_err(StorageError::from)?;
        Ok(loans_db.into_iter().map(Loan::from).collect())
    }

    async fn insert_payment(
        &self,
        loan_id_param: &str,
        payment: NewLoanPayment,
        interest_component_param: Decimal,
        principal_component_param: Decimal,
        deactivate: bool,
    ) -> Result<LoanPayment> {
        let loan_id_owned = loan_id_param.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<LoanPayment> {
                let new_payment_db = NewLoanPaymentDB {
                    id: Some(Uuid::new_v4().to_string()),
                    loan_id: loan_id_owned.clone(),
                    amount: payment.amount.to_string(),
                    principal_component: principal_component_param.to_string(),
                    interest_component: interest_component_param.to_string(),
                    payment_date: payment.payment_date,
                    notes: payment.notes,
                };

                let result_db = diesel::insert_into(loan_payments::table)
                    .values(&new_payment_db)
                    .returning(LoanPaymentDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                // A fully repaid loan is closed in the same write.
                if deactivate {
                    diesel::update(loans.find(&loan_id_owned))
                        .set((
                            is_active.eq(false),
                            updated_at.eq(Utc::now().naive_utc()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(LoanPayment::from(result_db))
            })
            .await
    }

    fn list_payments(&self, loan_id_param: &str) -> Result<Vec<LoanPayment>> {
        let mut conn = get_connection(&self.pool)?;
        let payments_db = loan_payments::table
            .filter(loan_payments::loan_id.eq(loan_id_param))
            .order((
                loan_payments::payment_date.asc(),
                loan_payments::created_at.asc(),
            ))
            .load::<LoanPaymentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(payments_db.into_iter().map(LoanPayment::from).collect())
    }
}
