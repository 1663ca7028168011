//! 飽和點比容的經驗估算
//!
//! 溫度與莫耳數皆為線性迴歸得到的近似式，比容再以理想氣體定律計算。
//! 壓力單位為 MPa，溫度為 K。

use crate::domain::model::{DiagramResult, SaturationEstimate};
use crate::utils::error::{DiagramError, Result};

/// 理想氣體常數 J/(mol·K)
pub const R: f64 = 8.3145;

pub const PRESSURE_PARAM: &str = "pressure";

const ROUNDING_FACTOR: f64 = 100_000.0;

/// 飽和溫度 (K)
pub fn approx_saturation_temperature(pressure: f64) -> f64 {
    (27.6382 + (47.2362 * pressure)) + 273.15
}

pub fn approx_saturated_liquid_mole(pressure: f64) -> f64 {
    (0.545 * pressure) - 0.0065
}

pub fn approx_saturated_gas_mole(pressure: f64) -> f64 {
    598.1093 - (pressure * 59.2664)
}

/// V = nRT / P，壓力由 MPa 換算為 Pa
pub fn ideal_gas_volume(pressure: f64, temperature: f64, mole: f64) -> f64 {
    (temperature * R * mole) / (pressure * 1e6)
}

/// 四捨五入至小數第五位 (遠離零)
pub fn round5(value: f64) -> f64 {
    (value * ROUNDING_FACTOR).round() / ROUNDING_FACTOR
}

/// 解析 `pressure` 查詢參數
///
/// 以 32 位元精度解析後再轉為 f64。明確寫出的 inf / NaN 可接受 (NaN 不可帶正負號)，
/// 但超出 f32 範圍的有限數字 (例如 `1e40`) 視為無效。不支援十六進位浮點數 (`0x1p0`)。
pub fn parse_pressure(raw: Option<&str>) -> Result<f64> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(DiagramError::missing_parameter(PRESSURE_PARAM)),
    };

    let parsed: f32 = raw
        .parse()
        .map_err(|_| DiagramError::invalid_parameter(PRESSURE_PARAM, raw))?;

    if parsed.is_infinite() && !is_infinity_literal(raw) {
        return Err(DiagramError::invalid_parameter(PRESSURE_PARAM, raw));
    }

    if parsed.is_nan() && (raw.starts_with('+') || raw.starts_with('-')) {
        return Err(DiagramError::invalid_parameter(PRESSURE_PARAM, raw));
    }

    Ok(f64::from(parsed))
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw
        .strip_prefix('+')
        .or_else(|| raw.strip_prefix('-'))
        .unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiagramService;

impl DiagramService {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, pressure: f64) -> SaturationEstimate {
        tracing::debug!("pressure: {} MPa", pressure);

        let temperature = approx_saturation_temperature(pressure);
        tracing::debug!("temperature: {} K", temperature);

        let mole_liquid = approx_saturated_liquid_mole(pressure);
        tracing::debug!("mole liquid number: {}", mole_liquid);
        let volume_liquid = ideal_gas_volume(pressure, temperature, mole_liquid);
        tracing::debug!("volume liquid: {}", volume_liquid);

        let mole_gas = approx_saturated_gas_mole(pressure);
        tracing::debug!("mole gas number: {}", mole_gas);
        let volume_vapor = ideal_gas_volume(pressure, temperature, mole_gas);
        tracing::debug!("volume vapor: {}", volume_vapor);

        SaturationEstimate {
            pressure,
            temperature,
            mole_liquid,
            mole_gas,
            volume_liquid,
            volume_vapor,
        }
    }

    /// 計算液相與氣相比容。任何輸入都會回傳結果，壓力為 0 時得到 Inf/NaN。
    pub fn compute_diagram(&self, pressure: f64) -> DiagramResult {
        let estimate = self.estimate(pressure);

        let result = DiagramResult {
            specific_volume_liquid: round5(estimate.volume_liquid),
            specific_volume_vapor: round5(estimate.volume_vapor),
        };
        tracing::debug!(
            "rounded result - liquid: {}, vapor: {}",
            result.specific_volume_liquid,
            result.specific_volume_vapor
        );

        result
    }
}
