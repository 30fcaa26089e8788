use crate::reports;
use clap::Args;
use impactcalc::config::Config;
use impactcalc::error::{CalcError, CalcResult};
use impactcalc::inputs::{parse_input_value, InputKey};
use impactcalc::Calculator;

#[derive(Args, Debug, Clone)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub config: Config,

    /// Input to sweep
    #[arg(long, default_value = "vsl")]
    pub param: String,

    /// Comma-separated values (defaults to the VSL sweep)
    #[arg(long)]
    pub values: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn parse_values(key: &str, s: &str) -> CalcResult<Vec<f64>> {
    s.split(',')
        .filter(|p| !p.trim().is_empty())
        .map(|p| parse_input_value(key, p))
        .collect()
}

pub fn run(args: SensitivityArgs, calc: &mut Calculator) -> CalcResult<()> {
    let key = InputKey::parse_name(&args.param)?;

    let points = match &args.values {
        Some(values) => {
            let values = parse_values(&args.param, values)?;
            if values.is_empty() {
                return Err(CalcError::Config("--values needs at least one number".into()));
            }
            calc.sensitivity_analysis(key, &values)
        }
        None if key == InputKey::Vsl => calc.vsl_sensitivity(),
        None => {
            return Err(CalcError::Config(format!(
                "--values is required when sweeping '{}'",
                key
            )))
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        reports::print_sensitivity(key, &points);
    }
    Ok(())
}
