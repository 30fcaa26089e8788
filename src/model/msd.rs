use super::types::{MsdGroup, MsdResult, MsdTotals};
use crate::inputs::InputSet;

// One incidence rate for everyone; only the unit cost differs by group.
fn group_msd(headcount: f64, incidence: f64, cost_per_case: f64) -> MsdGroup {
    let cases = headcount * incidence;
    MsdGroup {
        cases,
        cost_per_case,
        cost: cases * cost_per_case,
    }
}

pub fn calculate_msd(inputs: &InputSet) -> MsdResult {
    let physicians = group_msd(
        inputs.total_physicians(),
        inputs.msd_annual_incidence,
        inputs.msd_physician_cost,
    );
    let support = group_msd(
        inputs.total_support(),
        inputs.msd_annual_incidence,
        inputs.msd_support_cost,
    );

    MsdResult {
        physicians,
        support,
        total: MsdTotals {
            cases: physicians.cases + support.cases,
            cost: physicians.cost + support.cost,
        },
    }
}
