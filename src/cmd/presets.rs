use crate::reports;
use clap::Args;
use impactcalc::config::Config;
use impactcalc::error::CalcResult;
use impactcalc::Calculator;

#[derive(Args, Debug, Clone)]
pub struct PresetsArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(_args: PresetsArgs, calc: &Calculator, label: &str) -> CalcResult<()> {
    reports::print_presets(&calc.presets().names(), label);
    Ok(())
}
