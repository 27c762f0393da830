use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{auth::Caller, state::AppState};
use crate::domain::model::{CalculationRecord, Domain, Identity, Reading};
use crate::utils::error::{NumerologyError, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileRequest {
    pub mobile_number: String,
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    pub vehicle_number: String,
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn mobile_handler(
    State(state): State<Arc<AppState>>,
    Caller(identity): Caller,
    payload: std::result::Result<Json<MobileRequest>, JsonRejection>,
) -> Result<Json<Reading>> {
    let Json(request) = payload.map_err(|e| malformed(Domain::Mobile, e))?;
    calculate(&state, &identity, Domain::Mobile, &request.mobile_number).await
}

pub async fn name_handler(
    State(state): State<Arc<AppState>>,
    Caller(identity): Caller,
    payload: std::result::Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<Reading>> {
    let Json(request) = payload.map_err(|e| malformed(Domain::Name, e))?;
    calculate(&state, &identity, Domain::Name, &request.name).await
}

pub async fn vehicle_handler(
    State(state): State<Arc<AppState>>,
    Caller(identity): Caller,
    payload: std::result::Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<Json<Reading>> {
    let Json(request) = payload.map_err(|e| malformed(Domain::Vehicle, e))?;
    calculate(&state, &identity, Domain::Vehicle, &request.vehicle_number).await
}

pub async fn history_handler(
    State(state): State<Arc<AppState>>,
    Caller(identity): Caller,
) -> Result<Json<Vec<CalculationRecord>>> {
    let records = state.recorder.history(&identity).await?;
    Ok(Json(records))
}

async fn calculate(
    state: &AppState,
    identity: &Identity,
    domain: Domain,
    raw: &str,
) -> Result<Json<Reading>> {
    state.rules.check(domain, raw)?;

    let reading = state.engine.compute(domain, raw);

    // 歷史紀錄失敗不影響回應
    if let Err(e) = state.recorder.record_calculation(identity, &reading).await {
        tracing::warn!("⚠️ Failed to record calculation: {}", e);
    }

    tracing::info!(
        subject = %identity.subject,
        %domain,
        destiny_number = %reading.destiny_number,
        "Numerology reading served"
    );
    Ok(Json(reading))
}

fn malformed(domain: Domain, rejection: JsonRejection) -> NumerologyError {
    NumerologyError::validation(
        domain.input_field(),
        "",
        format!("malformed request body ({})", rejection.body_text()),
    )
}
