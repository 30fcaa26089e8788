use super::types::{CancerGroup, CancerResult, CancerTotals, CaseCost};
use crate::inputs::InputSet;

/// Annual cancer cases and costs for one staff group.
///
/// Lifetime risk is spread evenly over the career, then split by the shared
/// fatality rate. Fatal cases are valued at the VSL.
pub fn group_cancer(inputs: &InputSet, headcount: f64, lifetime_risk: f64) -> CancerGroup {
    let lifetime_cases = headcount * lifetime_risk;
    let annual_cases = lifetime_cases / inputs.career_duration;

    let fatal_cases = annual_cases * inputs.cancer_fatality_rate;
    let non_fatal_cases = annual_cases * (1.0 - inputs.cancer_fatality_rate);

    let fatal_cost = fatal_cases * inputs.vsl;
    let non_fatal_cost = non_fatal_cases * inputs.non_fatal_cancer_cost;

    CancerGroup {
        fatal: CaseCost {
            cases: fatal_cases,
            cost: fatal_cost,
        },
        non_fatal: CaseCost {
            cases: non_fatal_cases,
            cost: non_fatal_cost,
        },
        total_cases: annual_cases,
        total_cost: fatal_cost + non_fatal_cost,
    }
}

pub fn calculate_cancer(inputs: &InputSet) -> CancerResult {
    let physicians = group_cancer(inputs, inputs.total_physicians(), inputs.physician_cancer_risk);
    let support = group_cancer(inputs, inputs.total_support(), inputs.support_cancer_risk);

    let total = CancerTotals {
        fatal_cases: physicians.fatal.cases + support.fatal.cases,
        fatal_cost: physicians.fatal.cost + support.fatal.cost,
        non_fatal_cases: physicians.non_fatal.cases + support.non_fatal.cases,
        non_fatal_cost: physicians.non_fatal.cost + support.non_fatal.cost,
        total_cases: physicians.total_cases + support.total_cases,
        total_cost: physicians.fatal.cost
            + support.fatal.cost
            + physicians.non_fatal.cost
            + support.non_fatal.cost,
    };

    CancerResult {
        physicians,
        support,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::KnownPreset;

    #[test]
    fn test_fatal_and_non_fatal_sum_to_annual() {
        let inputs = KnownPreset::Y2018.inputs();
        let g = group_cancer(&inputs, 1000.0, 0.02);
        // 1000 * 0.02 / 25
        assert!((g.total_cases - 0.8).abs() < 1e-12);
        assert!((g.fatal.cases + g.non_fatal.cases - g.total_cases).abs() < 1e-12);
    }

    #[test]
    fn test_zero_fatality_rate_costs_nothing_at_vsl() {
        let mut inputs = KnownPreset::Y2025.inputs();
        inputs.cancer_fatality_rate = 0.0;
        let r = calculate_cancer(&inputs);
        assert_eq!(r.total.fatal_cost, 0.0);
        assert_eq!(r.total.total_cost, r.total.non_fatal_cost);
    }
}
