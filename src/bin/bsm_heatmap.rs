//! bsm-heatmap CLI
//!
//! Prices a European call and put at the given inputs and writes the spot x
//! volatility heatmaps as SVG (and optionally CSV).
//!
//! Usage:
//!     bsm-heatmap --spot 100 --strike 100 --time 1 --rate 0.05 --vol 0.2 \
//!         --spot-min 90 --spot-max 110 --vol-min 10 --vol-max 30 --csv grid.csv

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use bsm_heatmap::config::{default_config_template, HeatmapConfig};
use bsm_heatmap::render::write_csv_file;
use bsm_heatmap::{generate, render_svg, HeatmapError, RawInputs};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "bsm-heatmap")]
#[command(about = "Black-Scholes call/put prices and spot x volatility heatmaps")]
struct Args {
    /// Path to configuration file (TOML); flags override its values
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print a commented configuration template and exit
    #[arg(long)]
    print_config: bool,

    /// Spot price (S)
    #[arg(long, allow_hyphen_values = true)]
    spot: Option<String>,

    /// Strike price (K)
    #[arg(long, allow_hyphen_values = true)]
    strike: Option<String>,

    /// Time to maturity in years (T)
    #[arg(long, allow_hyphen_values = true)]
    time: Option<String>,

    /// Continuously compounded risk-free rate (r)
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Volatility as a fraction (σ)
    #[arg(long, allow_hyphen_values = true)]
    vol: Option<String>,

    /// Lower end of the spot axis
    #[arg(long)]
    spot_min: Option<f64>,

    /// Upper end of the spot axis
    #[arg(long)]
    spot_max: Option<f64>,

    /// Lower end of the volatility axis, in percent
    #[arg(long)]
    vol_min: Option<f64>,

    /// Upper end of the volatility axis, in percent
    #[arg(long)]
    vol_max: Option<f64>,

    /// SVG output path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// CSV output path for the grid
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Leave heatmap cells unlabelled
    #[arg(long)]
    no_annotate: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Config file (or defaults) with the range and output flags applied on top.
fn load_config(args: &Args) -> Result<HeatmapConfig> {
    let mut config = match &args.config {
        Some(path) => HeatmapConfig::load(path)?,
        None => HeatmapConfig::default(),
    };
    if let Some(v) = args.spot_min {
        config.ranges.spot_min = v;
    }
    if let Some(v) = args.spot_max {
        config.ranges.spot_max = v;
    }
    if let Some(v) = args.vol_min {
        config.ranges.vol_min_pct = v;
    }
    if let Some(v) = args.vol_max {
        config.ranges.vol_max_pct = v;
    }
    if let Some(path) = &args.svg {
        config.output.svg = path.clone();
    }
    if args.csv.is_some() {
        config.output.csv = args.csv.clone();
    }
    if args.no_annotate {
        config.output.style.annotate = false;
    }
    Ok(config)
}

/// Pricing inputs from the config, with any text flags substituted.
///
/// Text fields go through the same parser as form input.
fn raw_inputs(args: &Args, config: &HeatmapConfig) -> RawInputs {
    let mut raw = config.to_raw_inputs();
    let overrides = [
        (&args.spot, &mut raw.spot),
        (&args.strike, &mut raw.strike),
        (&args.time, &mut raw.time_to_maturity),
        (&args.rate, &mut raw.risk_free_rate),
        (&args.vol, &mut raw.volatility),
    ];
    for (flag, field) in overrides {
        if let Some(text) = flag {
            *field = text.clone();
        }
    }
    raw
}

/// 2 for rejected input, 1 for any other failure.
fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<HeatmapError>().is_some() {
        2
    } else {
        1
    }
}

fn error_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<HeatmapError>() {
        Some(input_err) => format!("{}: {}", input_err.title(), input_err.user_message()),
        None => format!("Error: {err:#}"),
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let raw = raw_inputs(args, &config);

    let heatmap = generate(&raw)?;
    println!("{}", heatmap.current);

    render_svg(&heatmap, &config.output.style, &config.output.svg)?;
    info!("heatmap saved to {}", config.output.svg.display());
    println!("Heatmap saved to {}", config.output.svg.display());

    if let Some(csv_path) = &config.output.csv {
        write_csv_file(&heatmap.grid, csv_path)?;
        println!("Grid saved to {}", csv_path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.print_config {
        print!("{}", default_config_template());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::from(exit_status(&err))
        }
    }
}
