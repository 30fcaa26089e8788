use crate::reports;
use clap::Args;
use impactcalc::config::Config;
use impactcalc::error::CalcResult;
use impactcalc::format::format_currency;
use impactcalc::projections::write_table_csv;
use impactcalc::Calculator;
use std::fs::File;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Print the full result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write the breakdown rows to a CSV file
    #[arg(long)]
    pub csv: Option<String>,

    /// Print the plain-text summary
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

pub fn run(args: CalculateArgs, calc: &Calculator, label: &str) -> CalcResult<()> {
    let results = calc.calculate();
    let rows = calc.generate_table_data();

    if let Some(path) = &args.csv {
        write_table_csv(File::create(path)?, &rows)?;
        info!("Wrote breakdown to {}", path);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if args.summary {
        println!("{}", calc.summary_text());
        return Ok(());
    }

    reports::print_inputs(label, &calc.inputs());
    reports::print_breakdown(&rows, results.grand_total);
    println!(
        "Total Annual Economic Cost: {}  (workforce {} = {} physicians + {} support)",
        format_currency(results.grand_total),
        results.workforce.total,
        results.workforce.physicians,
        results.workforce.support
    );
    Ok(())
}
