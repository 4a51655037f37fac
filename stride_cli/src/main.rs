use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::PathBuf;
use stride_core::*;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Daily steps and training metrics calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Report distance and calories for `<steps>,<duration>` packages
    Daily(PackageArgs),

    /// Report sessions from `<steps>,<activity>,<duration>` packages
    Training(PackageArgs),
}

#[derive(Args)]
struct PackageArgs {
    /// Packages to process; read from stdin, one per line, when omitted.
    /// Use `--` before packages that start with a minus sign.
    packages: Vec<String>,

    /// Body weight in kilograms (overrides config)
    #[arg(long)]
    weight: Option<f64>,

    /// Height in meters (overrides config)
    #[arg(long)]
    height: Option<f64>,

    /// Step length in meters (overrides config)
    #[arg(long)]
    step_length: Option<f64>,

    /// Print one JSON object per package; stop at the first invalid package
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    stride_core::logging::init_for_verbosity(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Daily(args) => cmd_daily(args, &config),
        Commands::Training(args) => cmd_training(args, &config),
    }
}

fn cmd_daily(args: PackageArgs, config: &Config) -> Result<()> {
    let (tracker, profile) = prepare(&args, config)?;
    let packages = read_packages(args.packages)?;
    tracing::info!("Processing {} daily packages", packages.len());

    for data in &packages {
        if args.json {
            let summary = tracker.daily_steps(data, &profile)?;
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            let report = tracker.daily_steps_report(data, profile.weight_kg, profile.height_m);
            // Rejected packages were already logged.
            if !report.is_empty() {
                println!("{}", report);
            }
        }
    }

    Ok(())
}

fn cmd_training(args: PackageArgs, config: &Config) -> Result<()> {
    let (tracker, profile) = prepare(&args, config)?;
    let packages = read_packages(args.packages)?;
    tracing::info!("Processing {} training packages", packages.len());

    for data in &packages {
        if args.json {
            let outcome = tracker.training(data, &profile)?;
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            let report = tracker.training_report(data, profile.weight_kg, profile.height_m);
            println!("{}", report.trim_end());
        }
    }

    Ok(())
}

/// Resolve calculator and profile, flags first, then config
fn prepare(args: &PackageArgs, config: &Config) -> Result<(Tracker, UserProfile)> {
    let calculator = match args.step_length {
        Some(step_length) => Calculator::new(step_length)?,
        None => config.calculator()?,
    };

    let stored = config.profile.as_ref();
    let weight = args.weight.or(stored.map(|p| p.weight_kg));
    let height = args.height.or(stored.map(|p| p.height_m));

    let profile = match (weight, height) {
        (Some(weight), Some(height)) => UserProfile::new(weight, height)?,
        _ => {
            return Err(Error::Config(
                "No user profile: pass --weight and --height or set [profile] in the config file"
                    .into(),
            ))
        }
    };

    tracing::debug!(
        "Using profile {:?} with step length {} m",
        profile,
        calculator.step_length_m()
    );

    Ok((Tracker::new(calculator), profile))
}

fn read_packages(packages: Vec<String>) -> Result<Vec<String>> {
    if !packages.is_empty() {
        return Ok(packages);
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}
