mod common;

use chrono::{Duration, Utc};
use tempfile::tempdir;

use common::{create_account, create_category, get, post, put, register_user};

#[tokio::test]
async fn materialization_catches_up_missed_periods() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "recurring@example.com").await;

    let account_id = create_account(&app, &token, "Checking", 100.0).await;
    let category_id = create_category(&app, &token, "Subscriptions", "EXPENSE").await;

    let today = Utc::now().date_naive();
    let start = today - Duration::days(2);

    let (status, template) = post(
        &app,
        "/api/v1/recurring",
        &token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": category_id,
            "transactionType": "EXPENSE",
            "amount": 10.0,
            "description": "Streaming",
            "frequency": "DAILY",
            "startDate": start.to_string(),
            "endDate": null,
        }),
    )
    .await;
    assert_eq!(status, 200, "template creation failed: {template}");
    let template_id = template["id"].as_str().unwrap().to_string();
    // Currency falls back to the account's.
    assert_eq!(template["currency"], "USD");
    assert_eq!(template["nextDueDate"], start.to_string());

    let (status, due) = get(&app, "/api/v1/recurring/due", &token).await;
    assert_eq!(status, 200);
    assert_eq!(due.as_array().unwrap().len(), 1);

    // Three daily occurrences were missed: start, start+1, today.
    let (status, created) = post(
        &app,
        "/api/v1/recurring/materialize",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(status, 200);
    let created = created.as_array().unwrap();
    assert_eq!(created.len(), 3);
    assert!(created.iter().all(|tx| tx["amount"].as_f64() == Some(10.0)));

    let (status, account) = get(&app, &format!("/api/v1/accounts/{account_id}"), &token).await;
    assert_eq!(status, 200);
    assert_eq!(account["balance"].as_f64(), Some(70.0));

    // The template advanced past today, so nothing is due anymore.
    let (_, template) = get(&app, &format!("/api/v1/recurring/{template_id}"), &token).await;
    assert_eq!(
        template["nextDueDate"],
        (today + Duration::days(1)).to_string()
    );

    let (status, due) = get(&app, "/api/v1/recurring/due", &token).await;
    assert_eq!(status, 200);
    assert!(due.as_array().unwrap().is_empty());

    let (status, created) = post(
        &app,
        "/api/v1/recurring/materialize",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(status, 200);
    assert!(created.as_array().unwrap().is_empty());

    // Deactivated templates never fire.
    let (status, template) = put(
        &app,
        &format!("/api/v1/recurring/{template_id}"),
        &token,
        serde_json::json!({
            "amount": 10.0,
            "description": "Streaming",
            "frequency": "DAILY",
            "endDate": null,
            "isActive": false,
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(template["isActive"], false);
}

#[tokio::test]
async fn templates_past_their_end_date_are_not_due() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "ended@example.com").await;

    let account_id = create_account(&app, &token, "Checking", 100.0).await;
    let category_id = create_category(&app, &token, "Gym", "EXPENSE").await;

    let today = Utc::now().date_naive();
    let (status, template) = post(
        &app,
        "/api/v1/recurring",
        &token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": category_id,
            "transactionType": "EXPENSE",
            "amount": 25.0,
            "description": "Membership",
            "frequency": "DAILY",
            "startDate": today.to_string(),
            "endDate": null,
        }),
    )
    .await;
    assert_eq!(status, 200);
    let template_id = template["id"].as_str().unwrap().to_string();

    let (status, due) = get(&app, "/api/v1/recurring/due", &token).await;
    assert_eq!(status, 200);
    assert_eq!(due.as_array().unwrap().len(), 1);

    // Moving the end date behind the next due date retires the template.
    let (status, _) = put(
        &app,
        &format!("/api/v1/recurring/{template_id}"),
        &token,
        serde_json::json!({
            "amount": 25.0,
            "description": "Membership",
            "frequency": "DAILY",
            "endDate": (today - Duration::days(1)).to_string(),
            "isActive": true,
        }),
    )
    .await;
    assert_eq!(status, 200);

    let (status, due) = get(&app, "/api/v1/recurring/due", &token).await;
    assert_eq!(status, 200);
    assert!(due.as_array().unwrap().is_empty());

    let (status, created) = post(
        &app,
        "/api/v1/recurring/materialize",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(status, 200);
    assert!(created.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn templates_validate_their_references() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "refs@example.com").await;

    let account_id = create_account(&app, &token, "Checking", 0.0).await;
    let category_id = create_category(&app, &token, "Rent", "EXPENSE").await;

    // Unknown account.
    let (status, _) = post(
        &app,
        "/api/v1/recurring",
        &token,
        serde_json::json!({
            "accountId": "no-such-account",
            "categoryId": category_id,
            "transactionType": "EXPENSE",
            "amount": 800.0,
            "description": null,
            "frequency": "MONTHLY",
            "startDate": "2026-09-01",
            "endDate": null,
        }),
    )
    .await;
    assert_eq!(status, 404);

    // End date before start date.
    let (status, _) = post(
        &app,
        "/api/v1/recurring",
        &token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": category_id,
            "transactionType": "EXPENSE",
            "amount": 800.0,
            "description": null,
            "frequency": "MONTHLY",
            "startDate": "2026-09-01",
            "endDate": "2026-08-01",
        }),
    )
    .await;
    assert_eq!(status, 400);

    // Non-positive amounts.
    let (status, _) = post(
        &app,
        "/api/v1/recurring",
        &token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": category_id,
            "transactionType": "EXPENSE",
            "amount": 0.0,
            "description": null,
            "frequency": "MONTHLY",
            "startDate": "2026-09-01",
            "endDate": null,
        }),
    )
    .await;
    assert_eq!(status, 400);
}
