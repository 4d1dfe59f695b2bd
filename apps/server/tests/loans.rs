mod common;

use tempfile::tempdir;

use common::{get, post, register_user};

#[tokio::test]
async fn zero_rate_loan_amortizes_linearly_and_closes_when_repaid() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "loans@example.com").await;

    let (status, loan) = post(
        &app,
        "/api/v1/loans",
        &token,
        serde_json::json!({
            "name": "Family loan",
            "principal": 1200.0,
            "annualRatePct": 0.0,
            "termMonths": 12,
            "startDate": "2026-01-01",
        }),
    )
    .await;
    assert_eq!(status, 200, "loan creation failed: {loan}");
    let loan_id = loan["id"].as_str().unwrap().to_string();
    assert_eq!(loan["emi"].as_f64(), Some(100.0));
    assert_eq!(loan["isActive"], true);

    // Without interest the schedule is twelve equal installments.
    let (status, schedule) = get(&app, &format!("/api/v1/loans/{loan_id}/schedule"), &token).await;
    assert_eq!(status, 200);
    let rows = schedule.as_array().unwrap();
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| r["interest"].as_f64() == Some(0.0)));
    assert_eq!(rows[11]["balance"].as_f64(), Some(0.0));

    let (status, body) = get(&app, &format!("/api/v1/loans/{loan_id}/outstanding"), &token).await;
    assert_eq!(status, 200);
    assert_eq!(body["loanId"], loan_id);
    assert_eq!(body["outstanding"].as_f64(), Some(1200.0));

    // One installment reduces the principal by the full payment.
    let (status, payment) = post(
        &app,
        &format!("/api/v1/loans/{loan_id}/payments"),
        &token,
        serde_json::json!({ "amount": 100.0, "paymentDate": "2026-02-01", "notes": "EMI 1" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(payment["interestComponent"].as_f64(), Some(0.0));
    assert_eq!(payment["principalComponent"].as_f64(), Some(100.0));

    let (_, body) = get(&app, &format!("/api/v1/loans/{loan_id}/outstanding"), &token).await;
    assert_eq!(body["outstanding"].as_f64(), Some(1100.0));

    // Paying off the remainder closes the loan.
    let (status, _) = post(
        &app,
        &format!("/api/v1/loans/{loan_id}/payments"),
        &token,
        serde_json::json!({ "amount": 1100.0, "paymentDate": "2026-03-01", "notes": "payoff" }),
    )
    .await;
    assert_eq!(status, 200);

    let (_, body) = get(&app, &format!("/api/v1/loans/{loan_id}/outstanding"), &token).await;
    assert_eq!(body["outstanding"].as_f64(), Some(0.0));

    let (_, loan) = get(&app, &format!("/api/v1/loans/{loan_id}"), &token).await;
    assert_eq!(loan["isActive"], false);

    let (status, body) = get(&app, "/api/v1/loans?activeOnly=true", &token).await;
    assert_eq!(status, 200);
    assert!(body.as_array().unwrap().is_empty());

    // Further payments against a repaid loan are rejected.
    let (status, body) = post(
        &app,
        &format!("/api/v1/loans/{loan_id}/payments"),
        &token,
        serde_json::json!({ "amount": 50.0, "paymentDate": "2026-04-01", "notes": null }),
    )
    .await;
    assert_eq!(status, 400, "expected rejection, got: {body}");

    let (status, payments) = get(&app, &format!("/api/v1/loans/{loan_id}/payments"), &token).await;
    assert_eq!(status, 200);
    assert_eq!(payments.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn interest_splits_and_prepayment_simulation() {
    let tmp = tempdir().unwrap();
    let app = common::build_test_router(&tmp).await;
    let token = register_user(&app, "mortgage@example.com").await;

    // 12% annual is 1% per month, which keeps the arithmetic legible.
    let (status, loan) = post(
        &app,
        "/api/v1/loans",
        &token,
        serde_json::json!({
            "name": "Home loan",
            "principal": 100000.0,
            "annualRatePct": 12.0,
            "termMonths": 120,
            "startDate": "2026-01-01",
        }),
    )
    .await;
    assert_eq!(status, 200);
    let loan_id = loan["id"].as_str().unwrap().to_string();
    let emi = loan["emi"].as_f64().unwrap();
    assert!((emi - 1434.71).abs() < 0.02, "unexpected EMI {emi}");

    // The first installment is mostly interest.
    let (status, payment) = post(
        &app,
        &format!("/api/v1/loans/{loan_id}/payments"),
        &token,
        serde_json::json!({ "amount": 1434.71, "paymentDate": "2026-02-01", "notes": null }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(payment["interestComponent"].as_f64(), Some(1000.0));
    assert!((payment["principalComponent"].as_f64().unwrap() - 434.71).abs() < 0.001);

    // Extra monthly payments shorten the schedule and save interest.
    let (status, outcome) = post(
        &app,
        &format!("/api/v1/loans/{loan_id}/simulate"),
        &token,
        serde_json::json!({ "extraMonthly": 500.0 }),
    )
    .await;
    assert_eq!(status, 200, "simulation failed: {outcome}");
    let baseline_months = outcome["baseline"]["months"].as_i64().unwrap();
    let scenario_months = outcome["scenario"]["months"].as_i64().unwrap();
    assert_eq!(baseline_months, 120);
    assert!(scenario_months < baseline_months);
    assert_eq!(
        outcome["monthsSaved"].as_i64().unwrap(),
        baseline_months - scenario_months
    );
    assert!(outcome["interestSaved"].as_f64().unwrap() > 0.0);

    // Negative extras are invalid.
    let (status, _) = post(
        &app,
        &format!("/api/v1/loans/{loan_id}/simulate"),
        &token,
        serde_json::json!({ "extraMonthly": -5.0 }),
    )
    .await;
    assert_eq!(status, 400);

    // So are loans that can never amortize.
    let (status, _) = post(
        &app,
        "/api/v1/loans",
        &token,
        serde_json::json!({
            "name": "Bad loan",
            "principal": -10.0,
            "annualRatePct": 5.0,
            "termMonths": 12,
            "startDate": "2026-01-01",
        }),
    )
    .await;
    assert_eq!(status, 400);
}
