use crate::infra::{deserialize_date, deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use rentroll::error::AppError;
use rentroll::import::{RentRollImporter, UnitRecord};
use rentroll::occupancy::{
    classify_lease, compute_unit_revenue, has_active_tenant, incoming_starts_this_month,
    resolve_status, LeaseStatus, OccupancyStatus, PortfolioSummary, UnitLeaseInfo,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct UnitStatusRequest {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) units: Vec<UnitRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UnitStatusResponse {
    pub(crate) today: NaiveDate,
    pub(crate) units: Vec<UnitStatusEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UnitStatusEntry {
    pub(crate) unit_id: String,
    pub(crate) status: OccupancyStatus,
    pub(crate) status_label: &'static str,
    pub(crate) has_active_tenant: bool,
    pub(crate) incoming_starts_this_month: bool,
    pub(crate) monthly_revenue: f64,
    pub(crate) expected_revenue: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PortfolioSummaryRequest {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) units: Vec<UnitRecord>,
    #[serde(default)]
    pub(crate) rent_roll_csv: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LeaseClassifyRequest {
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) start: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) end: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeaseClassifyResponse {
    pub(crate) today: NaiveDate,
    pub(crate) status: LeaseStatus,
    pub(crate) status_label: &'static str,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/units/status", post(unit_status_endpoint))
        .route("/api/v1/portfolio/summary", post(portfolio_summary_endpoint))
        .route("/api/v1/leases/classify", post(lease_classify_endpoint))
}

fn reference_day(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn unit_status_endpoint(
    Json(payload): Json<UnitStatusRequest>,
) -> Json<UnitStatusResponse> {
    let today = reference_day(payload.today);

    let units = payload
        .units
        .into_iter()
        .map(UnitLeaseInfo::from)
        .map(|unit| {
            let status = resolve_status(&unit, today);
            let revenue = compute_unit_revenue(&unit, today);
            UnitStatusEntry {
                status,
                status_label: status.label(),
                has_active_tenant: has_active_tenant(&unit, today),
                incoming_starts_this_month: incoming_starts_this_month(&unit, today),
                monthly_revenue: revenue.monthly_revenue,
                expected_revenue: revenue.expected_revenue,
                unit_id: unit.unit_id,
            }
        })
        .collect();

    Json(UnitStatusResponse { today, units })
}

pub(crate) async fn portfolio_summary_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<PortfolioSummaryRequest>,
) -> Result<Json<PortfolioSummary>, AppError> {
    let PortfolioSummaryRequest {
        today,
        units,
        rent_roll_csv,
    } = payload;

    let today = reference_day(today);
    let mut units: Vec<UnitLeaseInfo> = units.into_iter().map(UnitLeaseInfo::from).collect();
    if let Some(csv) = rent_roll_csv {
        let reader = Cursor::new(csv.into_bytes());
        units.extend(RentRollImporter::from_reader(reader)?);
    }

    let summary = PortfolioSummary::build(&units, today, state.portfolio.currency.clone());
    debug!(
        units = summary.total_units,
        %today,
        occupancy_rate = summary.occupancy_rate,
        "portfolio summary computed"
    );

    Ok(Json(summary))
}

pub(crate) async fn lease_classify_endpoint(
    Json(payload): Json<LeaseClassifyRequest>,
) -> Json<LeaseClassifyResponse> {
    let today = reference_day(payload.today);
    let status = classify_lease(payload.start, payload.end, today);

    Json(LeaseClassifyResponse {
        today,
        status,
        status_label: status.label(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn record(unit_id: &str) -> UnitRecord {
        UnitRecord {
            unit_id: unit_id.to_string(),
            ..Default::default()
        }
    }

    async fn post_json(ready: bool, uri: &str, body: Value) -> (StatusCode, Value) {
        let app = router().layer(Extension(test_state(ready)));
        let response = app
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let payload = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, payload)
    }

    async fn get_json(ready: bool, uri: &str) -> (StatusCode, Value) {
        let app = router().layer(Extension(test_state(ready)));
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn unit_status_endpoint_resolves_each_unit() {
        let request = UnitStatusRequest {
            today: Some(date(2025, 9, 12)),
            units: vec![
                UnitRecord {
                    required_rent: Some(1500.0),
                    current_lease_start: Some("2025-01-01".into()),
                    current_lease_end: Some("2025-12-31".into()),
                    ..record("101")
                },
                UnitRecord {
                    required_rent: Some(1200.0),
                    incoming_lease_start: Some("2025-09-17".into()),
                    incoming_lease_end: Some("2026-09-16".into()),
                    ..record("102")
                },
                UnitRecord {
                    maintenance_active: true,
                    ..record("103")
                },
            ],
        };

        let Json(body) = unit_status_endpoint(Json(request)).await;

        assert_eq!(body.today, date(2025, 9, 12));
        assert_eq!(body.units[0].status, OccupancyStatus::Occupied);
        assert!(body.units[0].has_active_tenant);
        assert_eq!(body.units[0].monthly_revenue, 1500.0);

        assert_eq!(body.units[1].status, OccupancyStatus::Vacant);
        assert!(body.units[1].incoming_starts_this_month);
        assert_eq!(body.units[1].monthly_revenue, 0.0);
        assert_eq!(body.units[1].expected_revenue, 1200.0);

        assert_eq!(body.units[2].status_label, "Repairs");
    }

    #[tokio::test]
    async fn lease_classify_endpoint_uses_supplied_day() {
        let request = LeaseClassifyRequest {
            start: date(2025, 9, 13),
            end: date(2026, 9, 12),
            today: Some(date(2025, 9, 12)),
        };

        let Json(body) = lease_classify_endpoint(Json(request)).await;
        assert_eq!(body.status, LeaseStatus::Upcoming);
        assert_eq!(body.status_label, "Upcoming");
    }

    #[tokio::test]
    async fn portfolio_route_merges_json_units_and_csv() {
        let (status, body) = post_json(
            true,
            "/api/v1/portfolio/summary",
            json!({
                "today": "2025-09-12",
                "units": [{
                    "unit_id": "201",
                    "required_rent": 1000,
                    "current_lease_start": "2025-01-01",
                    "current_lease_end": "2025-12-31",
                    "declared_status": "occupied"
                }],
                "rent_roll_csv": "Unit,Required Rent,Declared Status\n202,800,occupied\n"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_units"], 2);
        assert_eq!(body["occupancy_rate"], 0.5);
        assert_eq!(body["revenue"]["monthly_revenue"], 1000.0);
        assert_eq!(body["revenue"]["currency"], "USD");
        assert_eq!(body["units_with_drift"], 1);
        assert_eq!(body["units"][1]["status"], "vacant");
    }

    #[tokio::test]
    async fn portfolio_route_rejects_malformed_csv() {
        let (status, body) = post_json(
            true,
            "/api/v1/portfolio/summary",
            json!({
                "today": "2025-09-12",
                "rent_roll_csv": "Unit,Required Rent\n101,1,2\n"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("rent roll"));
    }

    #[tokio::test]
    async fn classify_route_rejects_bad_dates() {
        let (status, _) = post_json(
            true,
            "/api/v1/leases/classify",
            json!({ "start": "someday", "end": "2025-12-31" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, body) = get_json(false, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (status, body) = get_json(true, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }
}
