use crate::reports;
use clap::Args;
use impactcalc::config::Config;
use impactcalc::error::CalcResult;
use impactcalc::Calculator;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CompareArgs, calc: &mut Calculator) -> CalcResult<()> {
    let comparison = calc.compare_to_baseline();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    reports::print_comparison(&comparison);
    reports::print_row_comparison(&calc.compare_rows());
    Ok(())
}
