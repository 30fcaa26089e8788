use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every adjustable model parameter. The string form is the camelCase name
/// used by preset files and share queries.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, IntoStaticStr, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum InputKey {
    // Workforce
    InterventionalCardiologists,
    InterventionalRadiologists,
    Electrophysiologists,
    Nurses,
    Technicians,

    // Risk
    PhysicianCancerRisk,
    SupportCancerRisk,
    CancerFatalityRate,
    MsdAnnualIncidence,
    CareerDuration,

    // Valuation
    Vsl,
    NonFatalCancerCost,
    MsdPhysicianCost,
    MsdSupportCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputGroup {
    Workforce,
    Risk,
    Valuation,
}

/// How a value is rendered next to its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Number,
    Percent,
    Years,
    Currency,
}

impl InputKey {
    pub fn group(&self) -> InputGroup {
        match self {
            Self::InterventionalCardiologists
            | Self::InterventionalRadiologists
            | Self::Electrophysiologists
            | Self::Nurses
            | Self::Technicians => InputGroup::Workforce,
            Self::PhysicianCancerRisk
            | Self::SupportCancerRisk
            | Self::CancerFatalityRate
            | Self::MsdAnnualIncidence
            | Self::CareerDuration => InputGroup::Risk,
            Self::Vsl | Self::NonFatalCancerCost | Self::MsdPhysicianCost | Self::MsdSupportCost => {
                InputGroup::Valuation
            }
        }
    }

    pub fn display_kind(&self) -> DisplayKind {
        match self {
            Self::CareerDuration => DisplayKind::Years,
            Self::PhysicianCancerRisk
            | Self::SupportCancerRisk
            | Self::CancerFatalityRate
            | Self::MsdAnnualIncidence => DisplayKind::Percent,
            _ => match self.group() {
                InputGroup::Valuation => DisplayKind::Currency,
                _ => DisplayKind::Number,
            },
        }
    }

    /// Typed lookup that reports unrecognised names instead of ignoring them.
    pub fn parse_name(name: &str) -> CalcResult<Self> {
        name.parse()
            .map_err(|_| CalcError::UnknownInput(name.to_string()))
    }
}

/// A complete set of model inputs.
///
/// This is a plain value type: copies never alias each other, so a snapshot
/// taken before a temporary change can always be written back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InputSet {
    // Workforce counts
    pub interventional_cardiologists: f64,
    pub interventional_radiologists: f64,
    pub electrophysiologists: f64,
    pub nurses: f64,
    pub technicians: f64,

    // Risk (fractions) and career length (years)
    pub physician_cancer_risk: f64,
    pub support_cancer_risk: f64,
    pub cancer_fatality_rate: f64,
    pub msd_annual_incidence: f64,
    pub career_duration: f64,

    // Valuations (USD)
    pub vsl: f64,
    pub non_fatal_cancer_cost: f64,
    pub msd_physician_cost: f64,
    pub msd_support_cost: f64,
}

impl Default for InputSet {
    fn default() -> Self {
        crate::presets::KnownPreset::Y2025.inputs()
    }
}

impl InputSet {
    pub fn get(&self, key: InputKey) -> f64 {
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

    pub fn set(&mut self, key: InputKey, value: f64) {
        let slot = match key {
            InputKey::InterventionalCardiologists => &mut self.interventional_cardiologists,
            InputKey::InterventionalRadiologists => &mut self.interventional_radiologists,
            InputKey::Electrophysiologists => &mut self.electrophysiologists,
            InputKey::Nurses => &mut self.nurses,
            InputKey::Technicians => &mut self.technicians,
            InputKey::PhysicianCancerRisk => &mut self.physician_cancer_risk,
            InputKey::SupportCancerRisk => &mut self.support_cancer_risk,
            InputKey::CancerFatalityRate => &mut self.cancer_fatality_rate,
            InputKey::MsdAnnualIncidence => &mut self.msd_annual_incidence,
            InputKey::CareerDuration => &mut self.career_duration,
            InputKey::Vsl => &mut self.vsl,
            InputKey::NonFatalCancerCost => &mut self.non_fatal_cancer_cost,
            InputKey::MsdPhysicianCost => &mut self.msd_physician_cost,
            InputKey::MsdSupportCost => &mut self.msd_support_cost,
        };
        *slot = value;
    }

    pub fn total_physicians(&self) -> f64 {
        self.interventional_cardiologists + self.interventional_radiologists + self.electrophysiologists
    }

    pub fn total_support(&self) -> f64 {
        self.nurses + self.technicians
    }

    /// Bitwise equality, so NaN-bearing sets still compare equal to themselves.
    pub fn bits_eq(&self, other: &InputSet) -> bool {
        use strum::IntoEnumIterator;
        InputKey::iter().all(|k| self.get(k).to_bits() == other.get(k).to_bits())
    }
}

/// Strict numeric parse: trimmed text must be a finite `f64`.
pub fn parse_input_value(key: &str, raw: &str) -> CalcResult<f64> {
    let invalid = || CalcError::InvalidNumber {
        key: key.to_string(),
        raw: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}
