//! API integration tests
//!
//! Run against a live server with seeded demo data:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Seeded demo barber (see migrations/0002_seed_catalog.sql)
const DEMO_BARBER_ID: &str = "c0a80121-0000-4000-8000-000000000101";
const DEMO_BARBERSHOP_ID: &str = "c0a80121-0000-4000-8000-000000000001";

/// Helper to register a fresh client and get a token
async fn register_client(client: &Client) -> String {
    let email = format!(
        "client{}@example.com",
        chrono::Utc::now().timestamp_micros()
    );
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Test Client",
            "email": email,
            "password": "hunter2hunter2"
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse register response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_register_and_me() {
    let client = Client::new();
    let token = register_client(&client).await;

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Test Client");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_list_barbershops() {
    let client = Client::new();

    let response = client
        .get(format!("{}/barbershops", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let shops = body.as_array().expect("Expected array");
    assert!(shops.iter().any(|s| s["id"] == DEMO_BARBERSHOP_ID));
}

#[tokio::test]
#[ignore]
async fn test_list_barbers_of_unknown_shop_is_404() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/barbershops/00000000-0000-4000-8000-000000000000/barbers",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_available_dates_skip_closed_weekdays() {
    let client = Client::new();

    let response = client
        .get(format!("{}/barbers/{}/dates", BASE_URL, DEMO_BARBER_ID))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let dates: Vec<String> = body
        .as_array()
        .expect("Expected array")
        .iter()
        .map(|d| d.as_str().unwrap().to_string())
        .collect();

    // demo barber is off on Sundays and Wednesdays: 30-day window, 5 open
    // weekdays, so at most 22 dates and strictly ascending
    assert!(dates.len() <= 22);
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
#[ignore]
async fn test_available_dates_rejects_oversized_window() {
    let client = Client::new();

    for days in ["4294967295", "100000000", "366"] {
        let response = client
            .get(format!(
                "{}/barbers/{}/dates?days={}",
                BASE_URL, DEMO_BARBER_ID, days
            ))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400, "days={}", days);
    }

    // the cap itself is still accepted
    let response = client
        .get(format!(
            "{}/barbers/{}/dates?days=365",
            BASE_URL, DEMO_BARBER_ID
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_available_slots_for_a_monday() {
    let client = Client::new();

    // 2030-01-07 is a Monday; demo barber works 09:00am - 06:00pm
    let response = client
        .get(format!(
            "{}/barbers/{}/slots?date=2030-01-07",
            BASE_URL, DEMO_BARBER_ID
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let slots: Vec<&str> = body
        .as_array()
        .expect("Expected array")
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();

    assert_eq!(
        slots,
        vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00"]
    );
}

#[tokio::test]
#[ignore]
async fn test_available_slots_rejects_bad_date() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/barbers/{}/slots?date=not-a-date",
            BASE_URL, DEMO_BARBER_ID
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_requires_authentication() {
    let client = Client::new();

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "barber_id": DEMO_BARBER_ID,
            "date": "2030-01-07",
            "time": "10:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_booking_flow_and_double_booking_conflict() {
    let client = Client::new();
    let token = register_client(&client).await;

    // a slot far enough out that reruns rarely collide
    let date = (chrono::Utc::now().date_naive() + chrono::Duration::days(370))
        .format("%Y-%m-%d")
        .to_string();

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "barber_id": DEMO_BARBER_ID,
            "date": date,
            "time": "11:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["barber_id"], DEMO_BARBER_ID);
    assert_eq!(body["barbershop_id"], DEMO_BARBERSHOP_ID);
    assert!(body["starts_at"].as_str().unwrap().contains("11:00:00"));

    // appointment shows up in the client's upcoming list
    let response = client
        .get(format!("{}/appointments", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let list: Value = response.json().await.expect("Failed to parse response");
    assert!(!list.as_array().expect("Expected array").is_empty());

    // same barber, same instant: rejected
    let token2 = register_client(&client).await;
    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .header("Authorization", format!("Bearer {}", token2))
        .json(&json!({
            "barber_id": DEMO_BARBER_ID,
            "date": date,
            "time": "11:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_booking_with_missing_date_is_invalid() {
    let client = Client::new();
    let token = register_client(&client).await;

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "barber_id": DEMO_BARBER_ID,
            "time": "10:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "invalid date");
}
