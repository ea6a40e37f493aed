use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::{CredibilityService, ServiceError};
use crate::bookings::{BookingId, BookingStore, GuestId, StoreError};
use crate::credibility::{CredibilityError, RawOutcomeCounts};
use crate::payments::PaymentMethod;
use crate::session::SessionError;

/// Request body for choosing how a booking will be paid.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSelection {
    pub method: PaymentMethod,
}

/// Router builder exposing credibility and payment endpoints.
pub fn credibility_router<S>(service: Arc<CredibilityService<S>>) -> Router
where
    S: BookingStore + 'static,
{
    Router::new()
        .route("/api/v1/credibility/score", post(score_handler::<S>))
        .route(
            "/api/v1/guests/:guest_id/credibility",
            get(guest_credibility_handler::<S>),
        )
        .route("/api/v1/bookings/:booking_id", get(booking_handler::<S>))
        .route(
            "/api/v1/bookings/:booking_id/payment-options",
            get(payment_options_handler::<S>),
        )
        .route(
            "/api/v1/bookings/:booking_id/payment-method",
            post(select_payment_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<CredibilityService<S>>>,
    body: Result<axum::Json<RawOutcomeCounts>, JsonRejection>,
) -> Response
where
    S: BookingStore + 'static,
{
    // Non-integer counters are rejected by the extractor before `RawOutcomeCounts` validation.
    let counts = match body {
        Ok(axum::Json(counts)) => counts,
        Err(rejection) => {
            return error_response(ServiceError::Credibility(
                CredibilityError::InvalidArgument {
                    field: "body",
                    reason: rejection.body_text(),
                },
            ))
        }
    };

    match service.assess_summary(counts) {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn guest_credibility_handler<S>(
    State(service): State<Arc<CredibilityService<S>>>,
    Path(guest_id): Path<String>,
) -> Response
where
    S: BookingStore + 'static,
{
    let id = GuestId(guest_id);
    match service.assess_guest(&id) {
        Ok(assessment) => {
            let payload = json!({
                "guest_id": id.0,
                "credibility": assessment,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn booking_handler<S>(
    State(service): State<Arc<CredibilityService<S>>>,
    Path(booking_id): Path<String>,
) -> Response
where
    S: BookingStore + 'static,
{
    match service.booking_view(&BookingId(booking_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn payment_options_handler<S>(
    State(service): State<Arc<CredibilityService<S>>>,
    Path(booking_id): Path<String>,
) -> Response
where
    S: BookingStore + 'static,
{
    match service.payment_options(&BookingId(booking_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn select_payment_handler<S>(
    State(service): State<Arc<CredibilityService<S>>>,
    Path(booking_id): Path<String>,
    axum::Json(selection): axum::Json<PaymentSelection>,
) -> Response
where
    S: BookingStore + 'static,
{
    match service.select_payment(&BookingId(booking_id), selection.method) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) fn status_for(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::Credibility(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Payment(_) => StatusCode::FORBIDDEN,
        ServiceError::BookingClosed { .. } => StatusCode::CONFLICT,
        ServiceError::Store(StoreError::NotFound)
        | ServiceError::Session(SessionError::UnknownGuest(_))
        | ServiceError::Session(SessionError::Store(StoreError::NotFound)) => {
            StatusCode::NOT_FOUND
        }
        ServiceError::Store(StoreError::Unavailable(_))
        | ServiceError::Session(SessionError::Store(StoreError::Unavailable(_)))
        | ServiceError::Resolve(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: ServiceError) -> Response {
    let status = status_for(&error);
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
