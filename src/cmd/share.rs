use clap::Args;
use impactcalc::config::Config;
use impactcalc::error::CalcResult;
use impactcalc::query::share_query;
use impactcalc::Calculator;

#[derive(Args, Debug, Clone)]
pub struct ShareArgs {
    #[command(flatten)]
    pub config: Config,

    /// Page the query is appended to
    #[arg(long)]
    pub base_url: Option<String>,
}

pub fn run(args: ShareArgs, calc: &Calculator) -> CalcResult<()> {
    let query = share_query(&calc.inputs());
    match args.base_url {
        Some(base) => println!("{}?{}", base.trim_end_matches('?'), query),
        None => println!("{}", query),
    }
    Ok(())
}
