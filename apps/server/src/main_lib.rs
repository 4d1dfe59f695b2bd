use std::sync::Arc;

use crate::{auth::AuthContext, config::Config};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use finfusion_core::{
    accounts::{AccountService, AccountServiceTrait},
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    loans::{LoanService, LoanServiceTrait},
    notifications::{NotificationService, NotificationServiceTrait},
    payment_methods::{PaymentMethodService, PaymentMethodServiceTrait},
    recurring::{RecurringService, RecurringServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use finfusion_storage_sqlite::{
    accounts::AccountRepository,
    budgets::BudgetRepository,
    categories::CategoryRepository,
    db::{self, write_actor},
    loans::LoanRepository,
    notifications::NotificationRepository,
    payment_methods::PaymentMethodRepository,
    recurring::RecurringRepository,
    transactions::TransactionRepository,
    users::UserRepository,
};

pub struct AppState {
    pub auth: AuthContext,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub recurring_service: Arc<dyn RecurringServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub loan_service: Arc<dyn LoanServiceTrait>,
    pub notification_service: Arc<dyn NotificationServiceTrait>,
    pub payment_method_service: Arc<dyn PaymentMethodServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("FF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let account_repo = Arc::new(AccountRepository::new(pool.clone(), writer.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let transaction_repo = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let recurring_repo = Arc::new(RecurringRepository::new(pool.clone(), writer.clone()));
    let budget_repo = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let loan_repo = Arc::new(LoanRepository::new(pool.clone(), writer.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(pool.clone(), writer.clone()));
    let payment_method_repo =
        Arc::new(PaymentMethodRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(user_repo));
    let account_service = Arc::new(AccountService::new(account_repo.clone()));
    let category_service = Arc::new(CategoryService::new(category_repo.clone()));
    let notification_service = Arc::new(NotificationService::new(notification_repo.clone()));
    let transaction_service = Arc::new(TransactionService::new(
        transaction_repo.clone(),
        account_repo.clone(),
        category_repo.clone(),
    ));
    let recurring_service = Arc::new(RecurringService::new(
        recurring_repo,
        account_repo.clone(),
        category_repo.clone(),
        transaction_service.clone(),
    ));
    let budget_service = Arc::new(BudgetService::new(
        budget_repo.clone(),
        category_repo,
        transaction_repo.clone(),
        notification_service.clone(),
    ));
    let loan_service = Arc::new(LoanService::new(loan_repo));
    let payment_method_service = Arc::new(PaymentMethodService::new(payment_method_repo));
    let analytics_service = Arc::new(AnalyticsService::new(
        account_repo,
        transaction_repo,
        budget_repo,
        notification_repo,
    ));

    Ok(Arc::new(AppState {
        auth: AuthContext::new(&config.jwt_secret, config.token_ttl_secs),
        user_service,
        account_service,
        category_service,
        transaction_service,
        recurring_service,
        budget_service,
        loan_service,
        notification_service,
        payment_method_service,
        analytics_service,
        db_path,
    }))
}
