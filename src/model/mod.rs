pub mod cancer;
pub mod msd;
pub mod types;

pub use self::cancer::calculate_cancer;
pub use self::msd::calculate_msd;
pub use self::types::{
    CalculationResult, CancerGroup, CancerResult, CancerTotals, CaseCost, ComparisonResult,
    CostBreakdown, FormattedComparison, MsdGroup, MsdResult, MsdTotals, Workforce,
};

use crate::inputs::InputSet;

/// Full cost breakdown for one input set. Pure; no rounding.
pub fn calculate(inputs: &InputSet) -> CalculationResult {
    let cancer = calculate_cancer(inputs);
    let msd = calculate_msd(inputs);
    let grand_total = cancer.total.total_cost + msd.total.cost;

    let physicians = inputs.total_physicians();
    let support = inputs.total_support();

    CalculationResult {
        cancer,
        msd,
        grand_total,
        workforce: Workforce {
            physicians,
            support,
            total: physicians + support,
        },
        breakdown: CostBreakdown {
            fatal_cancer_physicians: cancer.physicians.fatal.cost,
            fatal_cancer_support: cancer.support.fatal.cost,
            non_fatal_cancer_physicians: cancer.physicians.non_fatal.cost,
            non_fatal_cancer_support: cancer.support.non_fatal.cost,
            msd_physicians: msd.physicians.cost,
            msd_support: msd.support.cost,
        },
    }
}

/// Relative change in percent, or `None` when the baseline is zero or the
/// ratio is not a finite number.
pub fn percent_change(current: f64, baseline: f64) -> Option<f64> {
    if baseline == 0.0 {
        return None;
    }
    let pct = (current - baseline) / baseline * 100.0;
    pct.is_finite().then_some(pct)
}
