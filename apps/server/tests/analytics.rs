mod common;

use chrono::Datelike;
use tempfile::tempdir;

use common::{create_account, create_category, get, post, register_user};

async fn spend(
    app: &axum::Router,
    token: &str,
    account_id: &str,
    category_id: &str,
    transaction_type: &str,
    amount: f64,
) {
    let today = chrono::Utc::now().date_naive().to_string();
    let (status, body) = post(
        app,
        "/api/v1/transactions",
        token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": category_id,
            "transactionType": transaction_type,
            "amount": amount,
            "description": null,
            "transactionDate": today,
            "paymentMethodCode": null,
        }),
    )
    .await;
    assert_eq!(status, 200, "transaction failed: {body}");
}

#[tokio::test]
async fn dashboard_trends_and_breakdown_aggregate_the_month() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "analytics@example.com").await;

    let checking = create_account(&app, &token, "Checking", 1000.0).await;

    // Credit card balances count against the net position.
    let (status, card) = post(
        &app,
        "/api/v1/accounts",
        &token,
        serde_json::json!({
            "name": "Card",
            "accountType": "CREDIT_CARD",
            "currency": "USD",
            "balance": 200.0,
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(card["balance"].as_f64(), Some(200.0));

    let salary = create_category(&app, &token, "Salary", "INCOME").await;
    let food = create_category(&app, &token, "Food", "EXPENSE").await;
    let travel = create_category(&app, &token, "Travel", "EXPENSE").await;

    spend(&app, &token, &checking, &salary, "INCOME", 500.0).await;
    spend(&app, &token, &checking, &food, "EXPENSE", 100.0).await;
    spend(&app, &token, &checking, &travel, "EXPENSE", 300.0).await;

    // Checking ended at 1100; the card liability of 200 nets to 900.
    let (status, dashboard) = get(&app, "/api/v1/analytics/dashboard", &token).await;
    assert_eq!(status, 200, "dashboard failed: {dashboard}");
    assert_eq!(dashboard["totalBalance"].as_f64(), Some(900.0));
    assert_eq!(dashboard["monthIncome"].as_f64(), Some(500.0));
    assert_eq!(dashboard["monthExpenses"].as_f64(), Some(400.0));
    assert_eq!(dashboard["monthNet"].as_f64(), Some(100.0));
    assert_eq!(dashboard["activeBudgets"], 0);
    assert_eq!(dashboard["unreadNotifications"], 0);
    assert_eq!(dashboard["recentTransactions"].as_array().unwrap().len(), 3);

    // The current month is the last trend point.
    let (status, trends) = get(&app, "/api/v1/analytics/trends?months=3", &token).await;
    assert_eq!(status, 200);
    let points = trends.as_array().unwrap();
    assert_eq!(points.len(), 3);
    let current = points.last().unwrap();
    let today = chrono::Utc::now().date_naive();
    let month_start = today.with_day(1).unwrap_or(today).to_string();
    assert_eq!(current["month"], month_start);
    assert_eq!(current["income"].as_f64(), Some(500.0));
    assert_eq!(current["expenses"].as_f64(), Some(400.0));
    assert_eq!(points[0]["income"].as_f64(), Some(0.0));

    // Expense breakdown splits 100/300 into 25/75 percent.
    let (status, breakdown) = get(&app, "/api/v1/analytics/breakdown", &token).await;
    assert_eq!(status, 200);
    let entries = breakdown.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    let travel_entry = entries
        .iter()
        .find(|e| e["categoryId"] == travel.as_str())
        .unwrap();
    assert_eq!(travel_entry["total"].as_f64(), Some(300.0));
    assert_eq!(travel_entry["percent"].as_f64(), Some(75.0));

    // Income breakdown sees only the salary.
    let (status, breakdown) = get(
        &app,
        "/api/v1/analytics/breakdown?breakdownType=INCOME",
        &token,
    )
    .await;
    assert_eq!(status, 200);
    let entries = breakdown.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["categoryId"], salary.as_str());
    assert_eq!(entries[0]["percent"].as_f64(), Some(100.0));
}

#[tokio::test]
async fn empty_users_get_empty_aggregates() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "empty@example.com").await;

    let (status, dashboard) = get(&app, "/api/v1/analytics/dashboard", &token).await;
    assert_eq!(status, 200);
    assert_eq!(dashboard["totalBalance"].as_f64(), Some(0.0));
    assert!(dashboard["recentTransactions"].as_array().unwrap().is_empty());

    let (status, breakdown) = get(&app, "/api/v1/analytics/breakdown", &token).await;
    assert_eq!(status, 200);
    assert!(breakdown.as_array().unwrap().is_empty());
}
