use crate::error::{CalcError, CalcResult};
use crate::format::{format_change, format_currency};
use crate::inputs::{parse_input_value, InputKey, InputSet};
use crate::model::{self, percent_change, CalculationResult, ComparisonResult, FormattedComparison};
use crate::presets::{KnownPreset, PresetTable, BASELINE_PRESET};
use crate::projections::{
    self, ChartBundle, RowComparison, SensitivityPoint, TableRow, VSL_SWEEP,
};
use tracing::{debug, info, warn};

/// One calculator session: the live inputs plus the presets they can be reset to.
///
/// Operations that need another input set temporarily (baseline comparison,
/// sensitivity sweeps) take `&mut self` and put the live inputs back before
/// returning.
#[derive(Debug, Clone)]
pub struct Calculator {
    inputs: InputSet,
    presets: PresetTable,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(PresetTable::default())
    }
}

impl Calculator {
    pub fn new(presets: PresetTable) -> Self {
        Self {
            inputs: InputSet::default(),
            presets,
        }
    }

    pub fn inputs(&self) -> InputSet {
        self.inputs
    }

    pub fn replace_inputs(&mut self, inputs: InputSet) {
        self.inputs = inputs;
    }

    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }

    // --- Inputs & presets ---

    /// Replaces the live inputs with a copy of the named preset.
    /// Unknown names return `false` and change nothing.
    pub fn load_preset(&mut self, name: &str) -> bool {
        self.try_load_preset(name).is_ok()
    }

    pub fn try_load_preset(&mut self, name: &str) -> CalcResult<()> {
        let preset = self
            .presets
            .get(name)
            .ok_or_else(|| CalcError::UnknownPreset(name.to_string()))?;
        debug!("Loading preset '{}'", name);
        self.inputs = preset;
        Ok(())
    }

    pub fn load_known(&mut self, preset: KnownPreset) {
        self.inputs = preset.inputs();
    }

    pub fn get(&self, key: InputKey) -> f64 {
        self.inputs.get(key)
    }

    pub fn set(&mut self, key: InputKey, value: f64) {
        self.inputs.set(key, value);
    }

    /// String-keyed update used by forms and query strings.
    ///
    /// Unknown keys and unparsable values are ignored and leave the inputs
    /// untouched; the return value reports whether anything was stored.
    pub fn update_input(&mut self, key: &str, raw: &str) -> bool {
        match self.try_update_input(key, raw) {
            Ok(()) => true,
            Err(CalcError::UnknownInput(k)) => {
                debug!("Ignoring unknown input '{}'", k);
                false
            }
            Err(e) => {
                warn!("Ignoring update: {}", e);
                false
            }
        }
    }

    pub fn try_update_input(&mut self, key: &str, raw: &str) -> CalcResult<()> {
        let key_enum = InputKey::parse_name(key)?;
        let value = parse_input_value(key, raw)?;
        self.inputs.set(key_enum, value);
        Ok(())
    }

    pub fn total_physicians(&self) -> f64 {
        self.inputs.total_physicians()
    }

    pub fn total_support(&self) -> f64 {
        self.inputs.total_support()
    }

    // --- Calculation ---

    pub fn calculate(&self) -> CalculationResult {
        model::calculate(&self.inputs)
    }

    fn baseline_inputs(&self) -> InputSet {
        self.presets
            .get(&BASELINE_PRESET.to_string())
            .unwrap_or_else(|| BASELINE_PRESET.inputs())
    }

    /// Runs `f` against the baseline preset, then restores the live inputs.
    fn with_baseline<T>(&mut self, f: impl FnOnce(&Self) -> T) -> T {
        let saved = self.inputs;
        self.inputs = self.baseline_inputs();
        let out = f(self);
        self.inputs = saved;
        out
    }

    /// Compares the live inputs against the 2018 baseline preset.
    pub fn compare_to_baseline(&mut self) -> ComparisonResult {
        let current = self.calculate();
        let baseline = self.with_baseline(|c| c.calculate());

        let change = current.grand_total - baseline.grand_total;
        let pct = percent_change(current.grand_total, baseline.grand_total);
        if pct.is_none() {
            info!("Baseline total is zero; percent change reported as unavailable");
        }

        ComparisonResult {
            current,
            baseline,
            change,
            percent_change: pct,
            formatted: FormattedComparison {
                change: format_currency(change),
                percent_change: format_change(pct),
            },
        }
    }

    /// Row-by-row comparison of the live inputs against the baseline preset.
    pub fn compare_rows(&mut self) -> Vec<RowComparison> {
        let current = self.generate_table_data();
        let baseline = self.with_baseline(|c| c.generate_table_data());
        projections::compare_rows(&current, &baseline)
    }

    // --- Projections ---

    pub fn generate_table_data(&self) -> [TableRow; 6] {
        projections::table_rows(&self.inputs, &self.calculate())
    }

    pub fn chart_data(&self) -> ChartBundle {
        projections::chart_bundle(&self.calculate())
    }

    /// Sweeps one input over `values` in order, recording the grand total for
    /// each. Only the swept key is restored afterwards.
    pub fn sensitivity_analysis(&mut self, key: InputKey, values: &[f64]) -> Vec<SensitivityPoint> {
        let saved = self.inputs.get(key);
        let mut points = Vec::with_capacity(values.len());
        for &value in values {
            self.inputs.set(key, value);
            points.push(SensitivityPoint {
                value,
                grand_total: self.calculate().grand_total,
            });
        }
        self.inputs.set(key, saved);
        points
    }

    pub fn sensitivity_by_name(
        &mut self,
        name: &str,
        values: &[f64],
    ) -> CalcResult<Vec<SensitivityPoint>> {
        let key = InputKey::parse_name(name)?;
        Ok(self.sensitivity_analysis(key, values))
    }

    pub fn vsl_sensitivity(&mut self) -> Vec<SensitivityPoint> {
        self.sensitivity_analysis(InputKey::Vsl, &VSL_SWEEP)
    }

    pub fn summary_text(&self) -> String {
        projections::summary_text(&self.calculate(), &self.generate_table_data())
    }
}
