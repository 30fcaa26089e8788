use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use impactcalc::config::Config;
use impactcalc::error::CalcResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON scenario file (preset, presetsFile, query, overrides)
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cost breakdown for the selected scenario
    Calculate(cmd::calculate::CalculateArgs),
    /// Compare the scenario with the 2018 baseline
    Compare(cmd::compare::CompareArgs),
    /// Sweep one input and report the total cost
    Sensitivity(cmd::sensitivity::SensitivityArgs),
    /// Chart-ready series as JSON
    Chart(cmd::chart::ChartArgs),
    /// Query string that reproduces the scenario
    Share(cmd::share::ShareArgs),
    /// List available presets
    Presets(cmd::presets::PresetsArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Logs go to stderr so JSON on stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &clap::ArgMatches) -> CalcResult<()> {
    let (cli_config, sub_name) = match &cli.command {
        Commands::Calculate(args) => (&args.config, "calculate"),
        Commands::Compare(args) => (&args.config, "compare"),
        Commands::Sensitivity(args) => (&args.config, "sensitivity"),
        Commands::Chart(args) => (&args.config, "chart"),
        Commands::Share(args) => (&args.config, "share"),
        Commands::Presets(args) => (&args.config, "presets"),
    };

    // A scenario file is the base; anything typed on the command line wins.
    let config = match &cli.config {
        Some(path) => {
            info!("📂 Loading scenario from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let (mut calc, custom) = config.build_calculator()?;
    let label = if custom {
        "custom".to_string()
    } else {
        config.scenario.preset.clone()
    };

    match cli.command {
        Commands::Calculate(args) => cmd::calculate::run(args, &calc, &label),
        Commands::Compare(args) => cmd::compare::run(args, &mut calc),
        Commands::Sensitivity(args) => cmd::sensitivity::run(args, &mut calc),
        Commands::Chart(args) => cmd::chart::run(args, &calc),
        Commands::Share(args) => cmd::share::run(args, &calc),
        Commands::Presets(args) => cmd::presets::run(args, &calc, &label),
    }
}
