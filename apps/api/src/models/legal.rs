use serde::Serialize;

/// Legal and financial constants consumed by the simulation frontend.
/// Field names map 1:1 onto the JSON keys the frontend expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegalConfig {
    /// Net monthly SMIC, in euros.
    pub smic: f64,
    pub tax_rate_low: f64,
    pub tax_rate_high: f64,
    /// Name of the points-based maintenance methodology; echoed, never computed.
    pub legal_points_method: String,
}

impl LegalConfig {
    /// 2024/2025 French figures, approximate for demo purposes.
    pub fn current() -> Self {
        LegalConfig {
            smic: 1398.69,
            tax_rate_low: 0.11,
            tax_rate_high: 0.30,
            legal_points_method: "Pilotelle".to_string(),
        }
    }
}
