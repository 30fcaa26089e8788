use crate::engine::Calculator;
use crate::format::format_currency;
use crate::inputs::InputSet;
use crate::model::{CalculationResult, ComparisonResult};
use crate::projections::{ChartBundle, SensitivityPoint, TableRow};
use crate::query::{self, QueryOutcome};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::info;

/// Shared calculator for hosts that call in from several threads.
///
/// Every service holds the lock for its whole call, so the temporary input
/// swaps done by comparisons and sweeps are never observable from outside.
pub struct CalculatorState {
    pub calculator: Mutex<Calculator>,
    pub preset_label: Mutex<String>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(Calculator::default(), "2025")
    }
}

impl CalculatorState {
    pub fn new(calculator: Calculator, preset_label: &str) -> Self {
        Self {
            calculator: Mutex::new(calculator),
            preset_label: Mutex::new(preset_label.to_string()),
        }
    }
}

pub const CUSTOM_LABEL: &str = "custom";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Preset name, or "custom" once any input was edited
    pub preset: String,
    pub inputs: InputSet,
    pub results: CalculationResult,
    pub grand_total_label: String,
    pub table: [TableRow; 6],
    pub charts: ChartBundle,
    pub comparison: ComparisonResult,
    pub vsl_sensitivity: Vec<SensitivityPoint>,
}

fn snapshot(calc: &mut Calculator, preset: String) -> Snapshot {
    let results = calc.calculate();
    Snapshot {
        preset,
        inputs: calc.inputs(),
        results,
        grand_total_label: format_currency(results.grand_total),
        table: calc.generate_table_data(),
        charts: calc.chart_data(),
        comparison: calc.compare_to_baseline(),
        vsl_sensitivity: calc.vsl_sensitivity(),
    }
}

/// Service: current state of every output.
pub fn refresh(state: &CalculatorState) -> Result<Snapshot, String> {
    let mut calc = state.calculator.lock().map_err(|e| e.to_string())?;
    let label = state.preset_label.lock().map_err(|e| e.to_string())?.clone();
    Ok(snapshot(&mut calc, label))
}

/// Service: switch presets. `"custom"` keeps the current inputs.
pub fn select_preset(state: &CalculatorState, name: &str) -> Result<Snapshot, String> {
    let mut calc = state.calculator.lock().map_err(|e| e.to_string())?;
    let mut label = state.preset_label.lock().map_err(|e| e.to_string())?;

    if name != CUSTOM_LABEL {
        calc.try_load_preset(name).map_err(|e| e.to_string())?;
        info!("API: preset '{}' selected", name);
    }
    *label = name.to_string();
    Ok(snapshot(&mut calc, label.clone()))
}

/// Service: edit one input from a form control. Unknown keys and bad values
/// are ignored; a successful edit marks the state as custom.
pub fn update_input(state: &CalculatorState, key: &str, raw: &str) -> Result<Snapshot, String> {
    let mut calc = state.calculator.lock().map_err(|e| e.to_string())?;
    let mut label = state.preset_label.lock().map_err(|e| e.to_string())?;

    if calc.update_input(key, raw) {
        *label = CUSTOM_LABEL.to_string();
    }
    Ok(snapshot(&mut calc, label.clone()))
}

/// Service: apply overrides from a share link.
pub fn load_from_query(state: &CalculatorState, query: &str) -> Result<QueryOutcome, String> {
    let mut calc = state.calculator.lock().map_err(|e| e.to_string())?;
    let outcome = query::apply_query(&mut calc, query);
    if let QueryOutcome::Custom { .. } = outcome {
        *state.preset_label.lock().map_err(|e| e.to_string())? = CUSTOM_LABEL.to_string();
    }
    Ok(outcome)
}

/// Service: query string for the current inputs.
pub fn share_query(state: &CalculatorState) -> Result<String, String> {
    let calc = state.calculator.lock().map_err(|e| e.to_string())?;
    Ok(query::share_query(&calc.inputs()))
}

/// Service: sweep an input by name.
pub fn sensitivity(
    state: &CalculatorState,
    key: &str,
    values: &[f64],
) -> Result<Vec<SensitivityPoint>, String> {
    let mut calc = state.calculator.lock().map_err(|e| e.to_string())?;
    calc.sensitivity_by_name(key, values)
        .map_err(|e| e.to_string())
}

/// Service: results summary for the clipboard.
pub fn summary_text(state: &CalculatorState) -> Result<String, String> {
    let calc = state.calculator.lock().map_err(|e| e.to_string())?;
    Ok(calc.summary_text())
}
