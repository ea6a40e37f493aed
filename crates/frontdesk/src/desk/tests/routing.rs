use super::common::*;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::desk::router::{guest_credibility_handler, score_handler};
use crate::desk::CredibilityService;

fn post_json(uri: &str, body: serde_json::Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serializable body"),
        ))
        .expect("request builds")
}

fn get(uri: &str) -> Request<axum::body::Body> {
    Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn score_route_returns_assessment() {
    let router = router_with_seeded_store();

    let response = router
        .oneshot(post_json(
            "/api/v1/credibility/score",
            json!({"totalBookings": 5, "completedStays": 4, "cancellations": 1, "noShows": 0}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 80);
    assert_eq!(payload["cash_eligible"], true);
    assert_eq!(payload["band_label"], "Good");
    assert_eq!(payload["turn_up_likelihood"], "High");
}

#[tokio::test]
async fn score_handler_rejects_negative_counts() {
    let (service, _) = build_service();

    let response = score_handler::<MemoryStore>(
        State(Arc::new(service)),
        Ok(axum::Json(crate::credibility::RawOutcomeCounts {
            no_shows: -2,
            ..Default::default()
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("no_shows")));
}

#[tokio::test]
async fn score_route_rejects_fractional_counts_as_json() {
    for body in [json!({"completedStays": 1.5}), json!({"noShows": 1e30})] {
        let response = router_with_seeded_store()
            .oneshot(post_json("/api/v1/credibility/score", body))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = read_json_body(response).await;
        let message = payload["error"].as_str().expect("json error message");
        assert!(message.starts_with("invalid argument `body`"), "{message}");
    }
}

#[tokio::test]
async fn score_route_rejects_malformed_json() {
    let request = Request::post("/api/v1/credibility/score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"completedStays\": "))
        .expect("request builds");

    let response = router_with_seeded_store()
        .oneshot(request)
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"].is_string());
}

#[tokio::test]
async fn guest_route_returns_not_found_for_unknown_guest() {
    let router = router_with_seeded_store();

    let response = router
        .oneshot(get("/api/v1/guests/g-ghost/credibility"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn guest_handler_returns_current_score() {
    let (service, _) = build_service();

    let response = guest_credibility_handler::<MemoryStore>(
        State(Arc::new(service)),
        Path(RISKY.to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["guest_id"], RISKY);
    assert_eq!(payload["credibility"]["score"], 40);
    assert_eq!(payload["credibility"]["cash_eligible"], false);
}

#[tokio::test]
async fn payment_options_route_lists_disabled_cash() {
    let router = router_with_seeded_store();

    let response = router
        .oneshot(get("/api/v1/bookings/b-new-open/payment-options"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let options = payload["options"].as_array().expect("options array");
    let cash = options
        .iter()
        .find(|option| option["method"] == "cash")
        .expect("cash listed");
    assert_eq!(cash["enabled"], false);
    assert!(cash["reason"]
        .as_str()
        .is_some_and(|reason| reason.contains("80%")));
}

#[tokio::test]
async fn payment_method_route_forbids_ineligible_cash() {
    let router = router_with_seeded_store();

    let response = router
        .oneshot(post_json(
            "/api/v1/bookings/b-risky-open/payment-method",
            json!({"method": "cash"}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn payment_method_route_accepts_eligible_cash() {
    let router = router_with_seeded_store();

    let response = router
        .oneshot(post_json(
            "/api/v1/bookings/b-loyal-open/payment-method",
            json!({"method": "cash"}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["booking"]["payment_method"], "cash");
}

#[tokio::test]
async fn payment_method_route_conflicts_on_closed_booking() {
    let router = router_with_seeded_store();

    let response = router
        .oneshot(post_json(
            "/api/v1/bookings/b-loyal-0/payment-method",
            json!({"method": "credit_card"}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn booking_route_reports_store_outage() {
    let router = crate::desk::credibility_router(Arc::new(CredibilityService::new(Arc::new(
        UnavailableStore,
    ))));

    let response = router
        .oneshot(get("/api/v1/bookings/b-loyal-open"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
