use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseCost {
    pub cases: f64,
    pub cost: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancerGroup {
    pub fatal: CaseCost,
    pub non_fatal: CaseCost,
    /// Annual cases (fatal + non-fatal)
    pub total_cases: f64,
    pub total_cost: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancerTotals {
    pub fatal_cases: f64,
    pub fatal_cost: f64,
    pub non_fatal_cases: f64,
    pub non_fatal_cost: f64,
    pub total_cases: f64,
    pub total_cost: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancerResult {
    pub physicians: CancerGroup,
    pub support: CancerGroup,
    pub total: CancerTotals,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsdGroup {
    pub cases: f64,
    pub cost_per_case: f64,
    pub cost: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsdTotals {
    pub cases: f64,
    pub cost: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsdResult {
    pub physicians: MsdGroup,
    pub support: MsdGroup,
    pub total: MsdTotals,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workforce {
    pub physicians: f64,
    pub support: f64,
    pub total: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub fatal_cancer_physicians: f64,
    pub fatal_cancer_support: f64,
    pub non_fatal_cancer_physicians: f64,
    pub non_fatal_cancer_support: f64,
    pub msd_physicians: f64,
    pub msd_support: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub cancer: CancerResult,
    pub msd: MsdResult,
    pub grand_total: f64,
    pub workforce: Workforce,
    pub breakdown: CostBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedComparison {
    pub change: String,
    pub percent_change: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub current: CalculationResult,
    pub baseline: CalculationResult,
    pub change: f64,
    /// `None` when the baseline total is zero.
    pub percent_change: Option<f64>,
    pub formatted: FormattedComparison,
}
