use clap::Args;
use impactcalc::config::Config;
use impactcalc::error::CalcResult;
use impactcalc::format::format_currency;
use impactcalc::Calculator;

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub config: Config,

    /// Print group shares instead of the chart JSON
    #[arg(long, default_value_t = false)]
    pub shares: bool,
}

pub fn run(args: ChartArgs, calc: &Calculator) -> CalcResult<()> {
    let bundle = calc.chart_data();

    if !args.shares {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(());
    }

    let series = &bundle.by_group;
    match series.shares() {
        Some(shares) => {
            for ((label, value), share) in series.labels.iter().zip(&series.data).zip(shares) {
                println!("{}: {} ({:.1}%)", label, format_currency(*value), share);
            }
        }
        None => println!("No costs to distribute."),
    }
    Ok(())
}
