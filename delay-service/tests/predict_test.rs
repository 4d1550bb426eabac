mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn detail(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Failed to parse JSON");
    body["detail"]
        .as_str()
        .expect("Missing detail message")
        .to_string()
}

#[tokio::test]
async fn valid_flight_returns_single_label() {
    let app = TestApp::spawn().await;

    let response = app
        .post_predict(&json!({
            "flights": [{"OPERA": "Grupo LATAM", "TIPOVUELO": "I", "MES": 3}]
        }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    let labels = body["predict"].as_array().expect("predict should be an array");
    assert_eq!(labels.len(), 1);
    assert!(labels[0] == 0 || labels[0] == 1);
}

#[tokio::test]
async fn builtin_model_scores_known_flights() {
    let app = TestApp::spawn().await;

    let response = app
        .post_predict(&json!({
            "flights": [{"OPERA": "Latin American Wings", "TIPOVUELO": "I", "MES": 7}]
        }))
        .await;
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({"predict": [1]}));

    let response = app
        .post_predict(&json!({
            "flights": [{"OPERA": "Copa Air", "TIPOVUELO": "N", "MES": 4}]
        }))
        .await;
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({"predict": [0]}));
}

#[tokio::test]
async fn unknown_operator_returns_400() {
    let app = TestApp::spawn().await;

    for opera in ["Aerolineas Argentinas SA", "grupo latam", "", "Ryanair"] {
        let response = app
            .post_predict(&json!({
                "flights": [{"OPERA": opera, "TIPOVUELO": "N", "MES": 3}]
            }))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "OPERA = {:?}", opera);
        assert_eq!(detail(response).await, "OPERA should be an airline operator");
    }
}

#[tokio::test]
async fn unknown_flight_type_returns_400() {
    let app = TestApp::spawn().await;

    for tipovuelo in ["O", "n", "i", "", "NI"] {
        let response = app
            .post_predict(&json!({
                "flights": [{"OPERA": "Aerolineas Argentinas", "TIPOVUELO": tipovuelo, "MES": 3}]
            }))
            .await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "TIPOVUELO = {:?}",
            tipovuelo
        );
        assert_eq!(
            detail(response).await,
            "TIPOVUELO should be either 'N' or 'I'"
        );
    }
}

#[tokio::test]
async fn out_of_range_month_returns_400() {
    let app = TestApp::spawn().await;

    for mes in [json!(0), json!(13), json!(-4), json!(2.5)] {
        let response = app
            .post_predict(&json!({
                "flights": [{"OPERA": "Aerolineas Argentinas", "TIPOVUELO": "N", "MES": mes}]
            }))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "MES = {}", mes);
        assert_eq!(
            detail(response).await,
            "MES should be an integer between 1 and 12"
        );
    }
}

#[tokio::test]
async fn whole_float_month_is_accepted() {
    let app = TestApp::spawn().await;

    let response = app
        .post_predict(&json!({
            "flights": [{"OPERA": "Grupo LATAM", "TIPOVUELO": "I", "MES": 3.0}]
        }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"predict": [0]}));
}

#[tokio::test]
async fn non_numeric_month_returns_400() {
    let app = TestApp::spawn().await;

    let response = app
        .post_predict(&json!({
            "flights": [{"OPERA": "Aerolineas Argentinas", "TIPOVUELO": "N", "MES": "3"}]
        }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_flights_returns_400() {
    let app = TestApp::spawn().await;

    let response = app.post_predict(&json!({"flights": []})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        detail(response).await,
        "flights should contain at least one flight"
    );
}

#[tokio::test]
async fn malformed_body_returns_400() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/predict", app.address))
        .header("content-type", "application/json")
        .body("{\"flights\": [")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.post_predict(&json!({"flight": []})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn only_first_flight_is_scored() {
    let app = TestApp::spawn().await;
    let first = json!({"OPERA": "Latin American Wings", "TIPOVUELO": "I", "MES": 7});

    let single = app.post_predict(&json!({"flights": [first.clone()]})).await;
    let single: Value = single.json().await.expect("Failed to parse JSON");

    // Trailing flights are neither validated nor scored
    let batch = app
        .post_predict(&json!({
            "flights": [
                first,
                {"OPERA": "Copa Air", "TIPOVUELO": "N", "MES": 4},
                {"OPERA": "Not An Airline", "TIPOVUELO": "X", "MES": 99}
            ]
        }))
        .await;
    assert_eq!(batch.status(), StatusCode::OK);

    let batch: Value = batch.json().await.expect("Failed to parse JSON");
    assert_eq!(batch, single);
    assert_eq!(batch["predict"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn invalid_first_flight_fails_whole_batch() {
    let app = TestApp::spawn().await;

    let response = app
        .post_predict(&json!({
            "flights": [
                {"OPERA": "Aerolineas Argentinas", "TIPOVUELO": "N", "MES": 13},
                {"OPERA": "Grupo LATAM", "TIPOVUELO": "I", "MES": 3}
            ]
        }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
