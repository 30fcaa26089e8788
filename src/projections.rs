use crate::error::CalcResult;
use crate::format::format_currency;
use crate::inputs::InputSet;
use crate::model::{percent_change, CalculationResult};
use serde::{Deserialize, Serialize};
use std::io::Write;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    #[strum(serialize = "Fatal Cancer")]
    #[serde(rename = "Fatal Cancer")]
    FatalCancer,
    #[strum(serialize = "Non-Fatal Cancer")]
    #[serde(rename = "Non-Fatal Cancer")]
    NonFatalCancer,
    #[strum(serialize = "Musculoskeletal Disorders")]
    #[serde(rename = "Musculoskeletal Disorders")]
    Msd,
}

#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffGroup {
    #[strum(serialize = "Physicians")]
    #[serde(rename = "Physicians")]
    Physicians,
    #[strum(serialize = "Nurses and Techs")]
    #[serde(rename = "Nurses and Techs")]
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub category: CostCategory,
    pub group: StaffGroup,
    pub cases: f64,
    pub cost_per_case: f64,
    pub total: f64,
}

/// Builds the six breakdown rows. The order is fixed (category-major,
/// physicians before support) so rows from two runs can be zipped by index.
pub fn table_rows(inputs: &InputSet, r: &CalculationResult) -> [TableRow; 6] {
    let row = |category, group, cases, cost_per_case, total| TableRow {
        category,
        group,
        cases,
        cost_per_case,
        total,
    };
    let cancer = &r.cancer;
    let msd = &r.msd;

    [
        row(
            CostCategory::FatalCancer,
            StaffGroup::Physicians,
            cancer.physicians.fatal.cases,
            inputs.vsl,
            cancer.physicians.fatal.cost,
        ),
        row(
            CostCategory::FatalCancer,
            StaffGroup::Support,
            cancer.support.fatal.cases,
            inputs.vsl,
            cancer.support.fatal.cost,
        ),
        row(
            CostCategory::NonFatalCancer,
            StaffGroup::Physicians,
            cancer.physicians.non_fatal.cases,
            inputs.non_fatal_cancer_cost,
            cancer.physicians.non_fatal.cost,
        ),
        row(
            CostCategory::NonFatalCancer,
            StaffGroup::Support,
            cancer.support.non_fatal.cases,
            inputs.non_fatal_cancer_cost,
            cancer.support.non_fatal.cost,
        ),
        row(
            CostCategory::Msd,
            StaffGroup::Physicians,
            msd.physicians.cases,
            inputs.msd_physician_cost,
            msd.physicians.cost,
        ),
        row(
            CostCategory::Msd,
            StaffGroup::Support,
            msd.support.cases,
            inputs.msd_support_cost,
            msd.support.cost,
        ),
    ]
}

// --- CHARTS ---

const CATEGORY_COLORS: [&str; 3] = ["#c0392b", "#e74c3c", "#2980b9"];
const GROUP_COLORS: [&str; 2] = ["#8e44ad", "#16a085"];
const BREAKDOWN_COLORS: [&str; 6] = [
    "#c0392b", "#e74c3c", "#9b59b6", "#8e44ad", "#2980b9", "#3498db",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartSeries {
    fn new(labels: &[&str], data: Vec<f64>, colors: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            data,
            colors: colors.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Each value as a percentage of the series total; `None` if the total is zero.
    pub fn shares(&self) -> Option<Vec<f64>> {
        let sum: f64 = self.data.iter().sum();
        if sum == 0.0 || !sum.is_finite() {
            return None;
        }
        Some(self.data.iter().map(|v| v / sum * 100.0).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    pub by_category: ChartSeries,
    pub by_group: ChartSeries,
    pub breakdown: ChartSeries,
}

pub fn chart_bundle(r: &CalculationResult) -> ChartBundle {
    let by_category = ChartSeries::new(
        &["Fatal Cancer", "Non-Fatal Cancer", "MSDs"],
        vec![
            r.cancer.total.fatal_cost,
            r.cancer.total.non_fatal_cost,
            r.msd.total.cost,
        ],
        &CATEGORY_COLORS,
    );

    let by_group = ChartSeries::new(
        &["Physicians", "Support Staff"],
        vec![
            r.cancer.physicians.total_cost + r.msd.physicians.cost,
            r.cancer.support.total_cost + r.msd.support.cost,
        ],
        &GROUP_COLORS,
    );

    let b = &r.breakdown;
    let breakdown = ChartSeries::new(
        &[
            "Fatal Cancer (Physicians)",
            "Fatal Cancer (Support)",
            "Non-Fatal Cancer (Physicians)",
            "Non-Fatal Cancer (Support)",
            "MSDs (Physicians)",
            "MSDs (Support)",
        ],
        vec![
            b.fatal_cancer_physicians,
            b.fatal_cancer_support,
            b.non_fatal_cancer_physicians,
            b.non_fatal_cancer_support,
            b.msd_physicians,
            b.msd_support,
        ],
        &BREAKDOWN_COLORS,
    );

    ChartBundle {
        by_category,
        by_group,
        breakdown,
    }
}

// --- SENSITIVITY ---

pub const VSL_SWEEP: [f64; 7] = [
    6_300_000.0,
    9_000_000.0,
    11_000_000.0,
    13_600_000.0,
    16_000_000.0,
    18_000_000.0,
    20_700_000.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityPoint {
    pub value: f64,
    pub grand_total: f64,
}

// --- ROW COMPARISON ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowComparison {
    pub category: CostCategory,
    pub group: StaffGroup,
    pub baseline_total: f64,
    pub current_total: f64,
    pub percent_change: Option<f64>,
}

pub fn compare_rows(current: &[TableRow; 6], baseline: &[TableRow; 6]) -> Vec<RowComparison> {
    current
        .iter()
        .zip(baseline.iter())
        .map(|(c, b)| RowComparison {
            category: c.category,
            group: c.group,
            baseline_total: b.total,
            current_total: c.total,
            percent_change: percent_change(c.total, b.total),
        })
        .collect()
}

// --- EXPORT ---

/// Plain-text results summary suitable for pasting elsewhere.
pub fn summary_text(r: &CalculationResult, rows: &[TableRow]) -> String {
    let mut text = String::from("Occupational Cost Impact Results\n");
    text.push_str(&"=".repeat(40));
    text.push_str("\n\n");
    text.push_str(&format!(
        "Total Annual Economic Cost: {}\n\n",
        format_currency(r.grand_total)
    ));
    text.push_str("Breakdown:\n");
    for row in rows {
        text.push_str(&format!(
            "- {} ({}): {}\n",
            row.category,
            row.group,
            format_currency(row.total)
        ));
    }
    text.push_str("\nGenerated by the Occupational Cost Impact Calculator\n");
    text
}

pub fn write_table_csv<W: Write>(writer: W, rows: &[TableRow]) -> CalcResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["category", "group", "cases", "cost_per_case", "total"])?;
    for row in rows {
        wtr.write_record([
            row.category.to_string(),
            row.group.to_string(),
            row.cases.to_string(),
            row.cost_per_case.to_string(),
            row.total.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
