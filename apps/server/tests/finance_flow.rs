mod common;

use tempfile::tempdir;

use common::{create_account, create_category, delete, get, post, put, register_user};

async fn account_balance(app: &axum::Router, token: &str, account_id: &str) -> f64 {
    let (status, body) = get(app, &format!("/api/v1/accounts/{account_id}"), token).await;
    assert_eq!(status, 200, "account fetch failed: {body}");
    body["balance"].as_f64().unwrap()
}

#[tokio::test]
async fn transactions_move_account_balances() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "mei@example.com").await;

    let account_id = create_account(&app, &token, "Checking", 1000.0).await;
    let salary = create_category(&app, &token, "Salary", "INCOME").await;
    let food = create_category(&app, &token, "Food", "EXPENSE").await;

    // Unknown account types are rejected up front.
    let (status, _) = post(
        &app,
        "/api/v1/accounts",
        &token,
        serde_json::json!({
            "name": "Bad",
            "accountType": "MATTRESS",
            "currency": "USD",
        }),
    )
    .await;
    assert_eq!(status, 400);

    // Duplicate category names within the same type are rejected.
    let (status, _) = post(
        &app,
        "/api/v1/categories",
        &token,
        serde_json::json!({ "name": "Food", "categoryType": "EXPENSE" }),
    )
    .await;
    assert_eq!(status, 400);

    // Income raises the balance.
    let (status, income) = post(
        &app,
        "/api/v1/transactions",
        &token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": salary,
            "transactionType": "INCOME",
            "amount": 500.0,
            "description": "August salary",
            "transactionDate": "2026-08-10",
            "paymentMethodCode": null,
        }),
    )
    .await;
    assert_eq!(status, 200, "income creation failed: {income}");
    assert_eq!(account_balance(&app, &token, &account_id).await, 1500.0);

    // Expenses lower it.
    let (status, expense) = post(
        &app,
        "/api/v1/transactions",
        &token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": food,
            "transactionType": "EXPENSE",
            "amount": 200.0,
            "description": "Groceries",
            "transactionDate": "2026-08-15",
            "paymentMethodCode": null,
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(account_balance(&app, &token, &account_id).await, 1300.0);

    // Updating an amount reverses the old delta before applying the new one.
    let expense_id = expense["id"].as_str().unwrap();
    let (status, _) = put(
        &app,
        &format!("/api/v1/transactions/{expense_id}"),
        &token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": food,
            "transactionType": "EXPENSE",
            "amount": 300.0,
            "description": "Groceries",
            "transactionDate": "2026-08-15",
            "paymentMethodCode": null,
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(account_balance(&app, &token, &account_id).await, 1200.0);

    // Filters narrow the listing.
    let (status, body) = get(&app, "/api/v1/transactions?transactionType=EXPENSE", &token).await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get(
        &app,
        "/api/v1/transactions?dateFrom=2026-08-01&dateTo=2026-08-31",
        &token,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Deleting a transaction restores the balance it moved.
    let income_id = income["id"].as_str().unwrap();
    let (status, _) = delete(&app, &format!("/api/v1/transactions/{income_id}"), &token).await;
    assert_eq!(status, 204);
    assert_eq!(account_balance(&app, &token, &account_id).await, 700.0);

    let (status, _) = get(&app, &format!("/api/v1/transactions/{income_id}"), &token).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn payment_method_codes_are_normalized_and_unique() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "pay@example.com").await;

    let (status, body) = post(
        &app,
        "/api/v1/payment-methods",
        &token,
        serde_json::json!({ "code": "credit card", "label": "Visa" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["code"], "CREDIT_CARD");

    // The normalized code collides with the existing one.
    let (status, body) = post(
        &app,
        "/api/v1/payment-methods",
        &token,
        serde_json::json!({ "code": "Credit-Card", "label": "Mastercard" }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);

    let (status, body) = get(&app, "/api/v1/payment-methods/code/CREDIT_CARD", &token).await;
    assert_eq!(status, 200);
    assert_eq!(body["label"], "Visa");

    let (status, _) = get(&app, "/api/v1/payment-methods/code/UPI", &token).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn missing_resources_return_not_found() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "nf@example.com").await;

    let (status, body) = get(&app, "/api/v1/accounts/no-such-id", &token).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);

    let (status, _) = delete(&app, "/api/v1/notifications/no-such-id", &token).await;
    assert_eq!(status, 404);

    // Deletes run inside the writer; the lookup failure must still come
    // back out as 404, not 500.
    let (status, body) = delete(&app, "/api/v1/transactions/no-such-id", &token).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn users_cannot_see_each_others_data() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let alice = register_user(&app, "alice@example.com").await;
    let bob = register_user(&app, "bob@example.com").await;

    let account_id = create_account(&app, &alice, "Alice savings", 50.0).await;

    let (status, body) = get(&app, "/api/v1/accounts", &bob).await;
    assert_eq!(status, 200);
    assert!(body.as_array().unwrap().is_empty());

    // A foreign id behaves exactly like a missing one.
    let (status, _) = get(&app, &format!("/api/v1/accounts/{account_id}"), &bob).await;
    assert_eq!(status, 404);

    let (status, _) = delete(&app, &format!("/api/v1/accounts/{account_id}"), &bob).await;
    assert_eq!(status, 404);

    // Alice still has her account.
    let (status, _) = get(&app, &format!("/api/v1/accounts/{account_id}"), &alice).await;
    assert_eq!(status, 200);
}
