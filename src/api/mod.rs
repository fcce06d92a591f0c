use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::reservation::{ReservationResult, SeatReservationService};
use crate::schedule::index::GameSummary;
use crate::schedule::ScheduleIndex;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<ScheduleIndex>,
    pub reservations: SeatReservationService,
}

/// Build the Axum router for the schedule and reservation endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/schedule/:match_date", get(schedule_handler))
        .route("/reserve-seat/:game_id", post(reserve_seat_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Parse a strict ISO 8601 calendar date (`YYYY-MM-DD`, zero-padded).
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    // chrono accepts unpadded fields like "2023-12-5"
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// GET /schedule/:match_date
///
/// Dates that are not strict `YYYY-MM-DD` are rejected with 400 before the
/// index is consulted.
async fn schedule_handler(
    State(state): State<Arc<AppState>>,
    Path(match_date): Path<String>,
) -> Result<Json<Vec<GameSummary>>, (StatusCode, String)> {
    let date = parse_iso_date(&match_date).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            format!("invalid date '{}', expected YYYY-MM-DD", match_date),
        )
    })?;
    let games = state.index.games_on_date(date);
    debug!("Schedule lookup {}: {} game(s)", date, games.len());
    Ok(Json(games.to_vec()))
}

/// POST /reserve-seat/:game_id
async fn reserve_seat_handler(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> impl IntoResponse {
    let outcome = state.reservations.reserve(&game_id);
    let status = if outcome.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::CONFLICT
    };
    (status, Json(ReservationResult::from(outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::service::tests::FixedDecider;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn build_test_app(grant: bool) -> Router {
        let index = ScheduleIndex::build(&json!({
            "lscd": [{ "mscd": { "mon": "December", "g": [
                { "gid": "0022300425", "gdtutc": "2023-12-25", "h": { "tn": "Knicks" }, "v": { "tn": "Bucks" } },
                { "gid": "0022300426", "gdtutc": "2023-12-25", "h": { "tn": "Nuggets" }, "v": { "tn": "Warriors" } }
            ]}}]
        }))
        .expect("expected valid schedule document");

        router(AppState {
            index: Arc::new(index),
            reservations: SeatReservationService::new(Arc::new(FixedDecider(grant))),
        })
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("expected request to build");

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_schedule_returns_games_for_date() {
        let (status, body) = send(build_test_app(true), "GET", "/schedule/2023-12-25").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "id": "0022300425", "homeTeam": "Knicks", "awayTeam": "Bucks" },
                { "id": "0022300426", "homeTeam": "Nuggets", "awayTeam": "Warriors" }
            ])
        );
    }

    #[tokio::test]
    async fn test_schedule_empty_for_unknown_date() {
        let (status, body) = send(build_test_app(true), "GET", "/schedule/2023-12-26").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_schedule_rejects_malformed_date() {
        let (status, _) = send(build_test_app(true), "GET", "/schedule/christmas").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(build_test_app(true), "GET", "/schedule/2023-13-45").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_schedule_rejects_unpadded_date() {
        let (status, _) = send(build_test_app(true), "GET", "/schedule/2023-12-5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(build_test_app(true), "GET", "/schedule/2023-1-05").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-12-25"), NaiveDate::from_ymd_opt(2023, 12, 25));
        assert_eq!(parse_iso_date("2023-12-5"), None);
        assert_eq!(parse_iso_date("2023-12-25T00:00:00"), None);
        assert_eq!(parse_iso_date("2023-02-30"), None);
    }

    #[tokio::test]
    async fn test_concurrent_lookups_and_reservations_share_state() {
        let app = build_test_app(true);

        let lookups: Vec<_> = (0..50)
            .map(|_| {
                let app = app.clone();
                tokio::spawn(async move { send(app, "GET", "/schedule/2023-12-25").await })
            })
            .collect();
        let reservations: Vec<_> = (0..50)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    send(app, "POST", &format!("/reserve-seat/G{}", i % 3)).await
                })
            })
            .collect();

        let expected = json!([
            { "id": "0022300425", "homeTeam": "Knicks", "awayTeam": "Bucks" },
            { "id": "0022300426", "homeTeam": "Nuggets", "awayTeam": "Warriors" }
        ]);
        for handle in lookups {
            let (status, body) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, expected);
        }
        for handle in reservations {
            let (status, body) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], json!(true));
        }
    }

    #[tokio::test]
    async fn test_reserve_seat_granted() {
        let (status, body) = send(build_test_app(true), "POST", "/reserve-seat/G123").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!("Seat reserved successfully."));
        assert_eq!(body["gameId"], json!("G123"));
        assert!(body["reservationId"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(body["seatNumber"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn test_reserve_seat_conflict() {
        let (status, body) = send(build_test_app(false), "POST", "/reserve-seat/G123").await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "No seats available for the requested game.",
                "gameId": "G123"
            })
        );
    }

    #[tokio::test]
    async fn test_reserve_seat_requires_post() {
        let (status, _) = send(build_test_app(true), "GET", "/reserve-seat/G123").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
