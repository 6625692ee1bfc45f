// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Hotel browsing API tests: listing, search, filtering, and sorting.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_hotels_sorted_by_name() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/hotels")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    assert_eq!(body["total"], 5);
    let names: Vec<&str> = body["hotels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();

    // Default sort is by name; the unnamed hotel sorts first as an empty
    // string but is displayed with the fallback name.
    assert_eq!(
        names,
        vec![
            "Unnamed Hotel",
            "Dar Zaghouan",
            "Hotel Carlton",
            "Hotel Dar Said",
            "Hotel Yasmine",
        ]
    );
}

#[tokio::test]
async fn test_search_matches_name_or_city() {
    let (app, _state) = common::create_test_app();

    // "carlton" only matches one hotel name.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/hotels?search=carlton")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["hotels"][0]["id"], "hotel-tunis");

    // "tunis" matches by city, including the unnamed hotel.
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/hotels?search=TUNIS")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_city_filter_is_exact() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/hotels?city=Hammamet")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["hotels"][0]["name"], "Hotel Yasmine");
}

#[tokio::test]
async fn test_sort_by_city() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/hotels?sort=city")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_json(response).await;
    let cities: Vec<&str> = body["hotels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["city"].as_str().unwrap())
        .collect();

    assert_eq!(
        cities,
        vec!["Hammamet", "Sidi Bou Said", "Tunis", "Tunis", "Zaghouan"]
    );
}

#[tokio::test]
async fn test_invalid_sort_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/hotels?sort=distance")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_flags_special_region_hotels() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/hotels?city=Zaghouan")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["hotels"][0]["special_region"], "zaghouan");
}

#[tokio::test]
async fn test_cities_sorted_and_deduplicated() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/cities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    // Two Tunis hotels collapse into one entry.
    assert_eq!(
        body["cities"],
        serde_json::json!(["Hammamet", "Sidi Bou Said", "Tunis", "Zaghouan"])
    );
}
