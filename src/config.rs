use crate::engine::Calculator;
use crate::error::{CalcError, CalcResult};
use crate::inputs::InputKey;
use crate::presets::{KnownPreset, PresetTable};
use crate::query::{self, QueryOutcome};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub scenario: ScenarioParams,
    #[command(flatten)]
    pub overrides: InputOverrides,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioParams {
    /// Preset to start from before overrides are applied
    #[arg(long, default_value = "2025")]
    pub preset: String,

    /// JSON file with extra named presets
    #[arg(long)]
    pub presets_file: Option<String>,

    /// Share link or query string carrying overrides (needs `vsl=`)
    #[arg(long)]
    pub query: Option<String>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            preset: KnownPreset::Y2025.to_string(),
            presets_file: None,
            query: None,
        }
    }
}

/// Per-input overrides. Unset fields keep the preset's value.
#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InputOverrides {
    // === WORKFORCE ===
    #[arg(long)]
    pub interventional_cardiologists: Option<f64>,
    #[arg(long)]
    pub interventional_radiologists: Option<f64>,
    #[arg(long)]
    pub electrophysiologists: Option<f64>,
    #[arg(long)]
    pub nurses: Option<f64>,
    #[arg(long)]
    pub technicians: Option<f64>,

    // === RISK ===
    #[arg(long)]
    pub physician_cancer_risk: Option<f64>,
    #[arg(long)]
    pub support_cancer_risk: Option<f64>,
    #[arg(long)]
    pub cancer_fatality_rate: Option<f64>,
    #[arg(long)]
    pub msd_annual_incidence: Option<f64>,
    #[arg(long)]
    pub career_duration: Option<f64>,

    // === VALUATION ===
    #[arg(long)]
    pub vsl: Option<f64>,
    #[arg(long)]
    pub non_fatal_cancer_cost: Option<f64>,
    #[arg(long)]
    pub msd_physician_cost: Option<f64>,
    #[arg(long)]
    pub msd_support_cost: Option<f64>,
}

impl InputOverrides {
    pub fn get(&self, key: InputKey) -> Option<f64> {
        match key {
            InputKey::InterventionalCardiologists => self.interventional_cardiologists,
            InputKey::InterventionalRadiologists => self.interventional_radiologists,
            InputKey::Electrophysiologists => self.electrophysiologists,
            InputKey::Nurses => self.nurses,
            InputKey::Technicians => self.technicians,
            InputKey::PhysicianCancerRisk => self.physician_cancer_risk,
            InputKey::SupportCancerRisk => self.support_cancer_risk,
            InputKey::CancerFatalityRate => self.cancer_fatality_rate,
            InputKey::MsdAnnualIncidence => self.msd_annual_incidence,
            InputKey::CareerDuration => self.career_duration,
            InputKey::Vsl => self.vsl,
            InputKey::NonFatalCancerCost => self.non_fatal_cancer_cost,
            InputKey::MsdPhysicianCost => self.msd_physician_cost,
            InputKey::MsdSupportCost => self.msd_support_cost,
        }
    }

    pub fn is_empty(&self) -> bool {
        use strum::IntoEnumIterator;
        InputKey::iter().all(|k| self.get(k).is_none())
    }

    /// Writes every set override into the calculator. Returns how many were applied.
    pub fn apply(&self, calc: &mut Calculator) -> CalcResult<usize> {
        use strum::IntoEnumIterator;
        let mut applied = 0;
        for key in InputKey::iter() {
            if let Some(value) = self.get(key) {
                if !value.is_finite() {
                    return Err(CalcError::InvalidNumber {
                        key: key.to_string(),
                        raw: value.to_string(),
                    });
                }
                debug!("Override {} = {}", key, value);
                calc.set(key, value);
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// Copies overrides the user typed on the command line over `self`.
    pub fn merge_from_cli(&mut self, cli: &InputOverrides, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(interventional_cardiologists);
        update_if_present!(interventional_radiologists);
        update_if_present!(electrophysiologists);
        update_if_present!(nurses);
        update_if_present!(technicians);

        update_if_present!(physician_cancer_risk);
        update_if_present!(support_cancer_risk);
        update_if_present!(cancer_fatality_rate);
        update_if_present!(msd_annual_incidence);
        update_if_present!(career_duration);

        update_if_present!(vsl);
        update_if_present!(non_fatal_cancer_cost);
        update_if_present!(msd_physician_cost);
        update_if_present!(msd_support_cost);
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Merges a config file with whatever the user typed explicitly.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        if matches.value_source("preset") == Some(ValueSource::CommandLine) {
            self.scenario.preset = cli.scenario.preset.clone();
        }
        if cli.scenario.presets_file.is_some() {
            self.scenario.presets_file = cli.scenario.presets_file.clone();
        }
        if cli.scenario.query.is_some() {
            self.scenario.query = cli.scenario.query.clone();
        }
        self.overrides.merge_from_cli(&cli.overrides, matches);
    }

    /// Builds a calculator: preset table, starting preset, query, then overrides.
    ///
    /// The second value is `true` when the final state is custom, i.e. no
    /// longer identical to the named preset.
    pub fn build_calculator(&self) -> CalcResult<(Calculator, bool)> {
        let mut presets = PresetTable::default();
        if let Some(path) = &self.scenario.presets_file {
            presets.extend_from_file(path)?;
        }

        let mut calc = Calculator::new(presets);
        calc.try_load_preset(&self.scenario.preset)?;
        info!("Starting from preset '{}'", self.scenario.preset);

        let mut custom = false;
        if let Some(q) = &self.scenario.query {
            if let QueryOutcome::Custom { .. } = query::apply_query(&mut calc, q) {
                custom = true;
            }
        }
        if self.overrides.apply(&mut calc)? > 0 {
            custom = true;
        }
        Ok((calc, custom))
    }
}
