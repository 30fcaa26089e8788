use crate::error::{CalcError, CalcResult};
use crate::inputs::InputSet;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, info};

/// Preset every comparison is measured against.
pub const BASELINE_PRESET: KnownPreset = KnownPreset::Y2018;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum KnownPreset {
    #[strum(serialize = "2018")]
    Y2018,
    #[strum(serialize = "2025")]
    Y2025,
}

impl KnownPreset {
    pub fn inputs(&self) -> InputSet {
        match self {
            Self::Y2018 => InputSet {
                interventional_cardiologists: 3255.0,
                interventional_radiologists: 3358.0,
                electrophysiologists: 1925.0,
                nurses: 13000.0,
                technicians: 11300.0,
                physician_cancer_risk: 0.01,
                support_cancer_risk: 0.005,
                cancer_fatality_rate: 0.5,
                msd_annual_incidence: 0.018,
                career_duration: 25.0,
                vsl: 9_000_000.0,
                non_fatal_cancer_cost: 200_000.0,
                msd_physician_cost: 45_000.0,
                msd_support_cost: 12_000.0,
            },
            // 1% lifetime cancer risk at 100 mSv for physicians, 0.5% at 50 mSv for support staff.
            Self::Y2025 => InputSet {
                interventional_cardiologists: 5639.0,
                interventional_radiologists: 3358.0,
                electrophysiologists: 2629.0,
                nurses: 13000.0,
                technicians: 11300.0,
                physician_cancer_risk: 0.01,
                support_cancer_risk: 0.005,
                cancer_fatality_rate: 0.5,
                msd_annual_incidence: 0.018,
                career_duration: 25.0,
                vsl: 13_600_000.0,
                non_fatal_cancer_cost: 250_000.0,
                msd_physician_cost: 94_285.0,
                msd_support_cost: 47_316.0,
            },
        }
    }
}

/// Named, immutable input templates. Lookups hand out copies.
#[derive(Debug, Clone)]
pub struct PresetTable {
    presets: BTreeMap<String, InputSet>,
}

impl Default for PresetTable {
    fn default() -> Self {
        let presets = KnownPreset::iter()
            .map(|p| (p.to_string(), p.inputs()))
            .collect();
        Self { presets }
    }
}

impl PresetTable {
    pub fn get(&self, name: &str) -> Option<InputSet> {
        self.presets.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.presets.keys().cloned().collect()
    }

    fn check_user_name(name: &str) -> CalcResult<()> {
        if name.parse::<KnownPreset>().is_ok() {
            return Err(CalcError::Config(format!(
                "Preset '{}' is built in and cannot be redefined",
                name
            )));
        }
        Ok(())
    }

    /// Adds a user-defined preset. Built-in names cannot be replaced.
    pub fn insert(&mut self, name: &str, inputs: InputSet) -> CalcResult<()> {
        Self::check_user_name(name)?;
        debug!("Registering preset '{}'", name);
        self.presets.insert(name.to_string(), inputs);
        Ok(())
    }

    /// Merges presets from a JSON object of `name -> complete input set`.
    /// Either every preset is added or, on error, none is.
    pub fn extend_from_json(&mut self, json: &str) -> CalcResult<usize> {
        let parsed: BTreeMap<String, InputSet> = serde_json::from_str(json)?;
        for name in parsed.keys() {
            Self::check_user_name(name)?;
        }
        let count = parsed.len();
        for (name, inputs) in parsed {
            self.insert(&name, inputs)?;
        }
        Ok(count)
    }

    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> CalcResult<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let count = self.extend_from_json(&content)?;
        info!("Loaded {} preset(s) from {}", count, path.display());
        Ok(count)
    }
}
