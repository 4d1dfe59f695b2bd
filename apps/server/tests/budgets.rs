mod common;

use std::time::Duration;

use tempfile::tempdir;

use common::{create_account, create_category, get, post, register_user};

/// Alert evaluation runs in a background task after each transaction write,
/// so tests poll instead of asserting immediately.
async fn wait_for_alerts(
    app: &axum::Router,
    token: &str,
    budget_id: &str,
    expected: usize,
) -> serde_json::Value {
    for _ in 0..50 {
        let (status, body) = get(app, &format!("/api/v1/budgets/{budget_id}/alerts"), token).await;
        assert_eq!(status, 200, "alert listing failed: {body}");
        if body.as_array().map_or(0, Vec::len) >= expected {
            return body;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("expected {expected} alerts for budget {budget_id}, never arrived");
}

#[tokio::test]
async fn overspending_raises_alerts_and_notifications() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "budget@example.com").await;

    let account_id = create_account(&app, &token, "Checking", 1000.0).await;
    let food = create_category(&app, &token, "Food", "EXPENSE").await;

    let (status, budget) = post(
        &app,
        "/api/v1/budgets",
        &token,
        serde_json::json!({
            "categoryId": food,
            "amount": 100.0,
            "period": "MONTHLY",
            "startDate": "2026-01-01",
            "alertThresholdPct": 80,
        }),
    )
    .await;
    assert_eq!(status, 200, "budget creation failed: {budget}");
    let budget_id = budget["id"].as_str().unwrap().to_string();

    let today = chrono::Utc::now().date_naive().to_string();

    // Spend 90% of the cap; the warning threshold fires.
    let (status, _) = post(
        &app,
        "/api/v1/transactions",
        &token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": food,
            "transactionType": "EXPENSE",
            "amount": 90.0,
            "description": "Groceries",
            "transactionDate": today,
            "paymentMethodCode": null,
        }),
    )
    .await;
    assert_eq!(status, 200);

    let alerts = wait_for_alerts(&app, &token, &budget_id, 1).await;
    assert_eq!(alerts[0]["thresholdPct"], 80);
    assert_eq!(alerts[0]["spent"].as_f64(), Some(90.0));

    let (status, progress) = get(
        &app,
        &format!("/api/v1/budgets/{budget_id}/progress"),
        &token,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(progress["limit"].as_f64(), Some(100.0));
    assert_eq!(progress["spent"].as_f64(), Some(90.0));
    assert_eq!(progress["remaining"].as_f64(), Some(10.0));
    assert_eq!(progress["percentUsed"].as_f64(), Some(90.0));

    // Explicit evaluation is idempotent within the period.
    let (status, created) = post(
        &app,
        "/api/v1/budgets/evaluate",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(status, 200);
    assert!(created.as_array().unwrap().is_empty());

    let (status, notifications) = get(&app, "/api/v1/notifications", &token).await;
    assert_eq!(status, 200);
    let notifications = notifications.as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["severity"], "WARNING");
    assert_eq!(notifications[0]["title"], "Budget warning: Food");
    assert_eq!(notifications[0]["isRead"], false);

    // Cross the cap; a separate 100% alert fires once.
    let (status, _) = post(
        &app,
        "/api/v1/transactions",
        &token,
        serde_json::json!({
            "accountId": account_id,
            "categoryId": food,
            "transactionType": "EXPENSE",
            "amount": 20.0,
            "description": "More groceries",
            "transactionDate": today,
            "paymentMethodCode": null,
        }),
    )
    .await;
    assert_eq!(status, 200);

    let alerts = wait_for_alerts(&app, &token, &budget_id, 2).await;
    let thresholds: Vec<i64> = alerts
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["thresholdPct"].as_i64().unwrap())
        .collect();
    assert!(thresholds.contains(&80));
    assert!(thresholds.contains(&100));

    let (status, notifications) = get(&app, "/api/v1/notifications?unreadOnly=true", &token).await;
    assert_eq!(status, 200);
    let notifications = notifications.as_array().unwrap();
    assert_eq!(notifications.len(), 2);
    assert!(notifications
        .iter()
        .any(|n| n["severity"] == "ALERT" && n["title"] == "Budget exceeded: Food"));

    // Mark everything read and verify the counters agree.
    let (status, body) = get(&app, "/api/v1/notifications/unread-count", &token).await;
    assert_eq!(status, 200);
    assert_eq!(body["unread"], 2);

    let (status, body) = post(
        &app,
        "/api/v1/notifications/read-all",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["count"], 2);

    let (status, body) = get(&app, "/api/v1/notifications/unread-count", &token).await;
    assert_eq!(status, 200);
    assert_eq!(body["unread"], 0);
}

#[tokio::test]
async fn budget_progress_tracks_only_its_category() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "split@example.com").await;

    let account_id = create_account(&app, &token, "Checking", 500.0).await;
    let food = create_category(&app, &token, "Food", "EXPENSE").await;
    let travel = create_category(&app, &token, "Travel", "EXPENSE").await;

    let (_, budget) = post(
        &app,
        "/api/v1/budgets",
        &token,
        serde_json::json!({
            "categoryId": food,
            "amount": 200.0,
            "period": "MONTHLY",
            "startDate": "2026-01-01",
        }),
    )
    .await;
    let budget_id = budget["id"].as_str().unwrap().to_string();

    let today = chrono::Utc::now().date_naive().to_string();
    for (category, amount) in [(&food, 40.0), (&travel, 150.0)] {
        let (status, _) = post(
            &app,
            "/api/v1/transactions",
            &token,
            serde_json::json!({
                "accountId": account_id,
                "categoryId": category,
                "transactionType": "EXPENSE",
                "amount": amount,
                "description": null,
                "transactionDate": today,
                "paymentMethodCode": null,
            }),
        )
        .await;
        assert_eq!(status, 200);
    }

    let (status, progress) = get(
        &app,
        &format!("/api/v1/budgets/{budget_id}/progress"),
        &token,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(progress["spent"].as_f64(), Some(40.0));
    assert_eq!(progress["percentUsed"].as_f64(), Some(20.0));

    // Nothing crossed the default threshold, so no alerts exist.
    let (status, alerts) = get(&app, &format!("/api/v1/budgets/{budget_id}/alerts"), &token).await;
    assert_eq!(status, 200);
    assert!(alerts.as_array().unwrap().is_empty());
}
