use axum::extract::{Query, State};
use axum::Json;

use crate::app::router::AppState;
use crate::core::diagram::{parse_pressure, PRESSURE_PARAM};
use crate::domain::model::DiagramResult;
use crate::utils::error::Result;

/// GET /phase-change-diagram?pressure=<MPa>
pub async fn phase_change_diagram(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DiagramResult>> {
    // 同名參數重複時取第一個
    let raw = params
        .iter()
        .find(|(key, _)| key == PRESSURE_PARAM)
        .map(|(_, value)| value.as_str());
    let pressure = parse_pressure(raw)?;
    tracing::info!("📥 Computing phase change diagram for {} MPa", pressure);

    let result = state.service.compute_diagram(pressure);

    // 非有限值會被序列化為 null
    if !result.specific_volume_liquid.is_finite() || !result.specific_volume_vapor.is_finite() {
        tracing::warn!(
            "⚠️ Non-finite specific volume for pressure {} MPa: {:?}",
            pressure,
            result
        );
    }

    Ok(Json(result))
}
