use serde::{Deserialize, Serialize};

/// 飽和點的液相與氣相比容，皆已四捨五入至小數第五位
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramResult {
    pub specific_volume_liquid: f64,
    pub specific_volume_vapor: f64,
}

/// 單次計算的中間值 (未四捨五入)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationEstimate {
    pub pressure: f64,
    pub temperature: f64,
    pub mole_liquid: f64,
    pub mole_gas: f64,
    pub volume_liquid: f64,
    pub volume_vapor: f64,
}
