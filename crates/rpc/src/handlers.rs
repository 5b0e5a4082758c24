use crate::{RpcError, RpcState, types::*};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use plexdi_types::{Commission, CommissionId, CommissionStatus, NewCommission};

/// Parse the numeric commission id from the path
fn parse_id(raw: &str) -> Result<CommissionId, RpcError> {
    raw.trim()
        .parse()
        .map_err(|_| RpcError::InvalidRequest("Invalid commission ID".to_string()))
}

/// Unwrap a JSON body, mapping rejections to a 400
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, RpcError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| RpcError::InvalidRequest(format!("Invalid JSON body: {}", e.body_text())))
}

/// Health check handler
pub async fn health() -> &'static str {
    "OK"
}

/// Metrics endpoint handler
pub async fn metrics(State(state): State<RpcState>) -> String {
    state
        .metrics
        .as_ref()
        .and_then(|m| m.export().ok())
        .unwrap_or_else(|| "# Metrics not enabled\n".to_string())
}

/// Create commission handler
pub async fn create_commission(
    State(state): State<RpcState>,
    payload: Result<Json<NewCommission>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateCommissionResponse>), RpcError> {
    let result = async {
        let fields = json_body(payload)?;
        Ok::<_, RpcError>(state.controller.request_commission(fields).await?)
    }
    .await;

    let commission = state.observe(result)?;
    if let Some(metrics) = &state.metrics {
        metrics.record_created();
    }
    Ok((StatusCode::CREATED, Json(commission.into())))
}

/// List commissions handler
pub async fn list_commissions(
    State(state): State<RpcState>,
) -> Result<Json<Vec<Commission>>, RpcError> {
    let result = state.controller.list_commissions().await.map_err(Into::into);
    Ok(Json(state.observe(result)?))
}

/// Get commission handler
pub async fn get_commission(
    State(state): State<RpcState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Commission>, RpcError> {
    let result = async {
        let id = parse_id(&raw_id)?;
        Ok::<_, RpcError>(state.controller.get_commission(id).await?)
    }
    .await;

    Ok(Json(state.observe(result)?))
}

/// Status transition handler
pub async fn update_status(
    State(state): State<RpcState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<UpdateStatusResponse>, RpcError> {
    let result = async {
        let id = parse_id(&raw_id)?;
        let req = json_body(payload)?;
        let status = CommissionStatus::from(req.status);
        Ok::<_, RpcError>(state.controller.transition_status(id, status).await?)
    }
    .await;

    let commission = state.observe(result)?;
    if let Some(metrics) = &state.metrics {
        metrics.record_transition(&commission.status);
    }
    Ok(Json(commission.into()))
}

/// Delete commission handler
pub async fn delete_commission(
    State(state): State<RpcState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteCommissionResponse>, RpcError> {
    let result = async {
        let id = parse_id(&raw_id)?;
        state.controller.remove_commission(id).await?;
        Ok::<_, RpcError>(id)
    }
    .await;

    let id = state.observe(result)?;
    if let Some(metrics) = &state.metrics {
        metrics.record_deleted();
    }
    Ok(Json(id.into()))
}
