use std::path::PathBuf;

use breakeven::data::settings::Settings;
use breakeven::report::Report;
use breakeven::{App, init_logging};
use breakeven_core::analysis::BreakEvenConfig;
use breakeven_core::{CurrencyCode, ParameterStore, PopulationPreset, ScenarioPreset};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "breakeven")]
#[command(about = "A terminal break-even calculator for a symptom-tracking programme")]
struct Args {
    /// Path to the data directory (default: ~/.breakeven/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Startup config file (default: <data-dir>/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Population preset, e.g. "EU-27", "Germany"
    #[arg(short, long)]
    population: Option<String>,

    /// Scenario preset: Low, Medium or Best
    #[arg(short, long)]
    scenario: Option<String>,

    /// Display currency: EUR, USD or GBP
    #[arg(short, long)]
    currency: Option<String>,

    /// Print the summary and sensitivity table, then exit
    #[arg(long)]
    report: bool,

    /// With --report, print JSON instead of text
    #[arg(long, requires = "report")]
    json: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".breakeven")
}

/// Config file first, then command-line selections on top
fn initial_store(args: &Args, data_dir: &std::path::Path) -> color_eyre::Result<ParameterStore> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| Settings::path(data_dir));
    let settings = Settings::load_or_default(&config_path);
    let mut store = ParameterStore::with_params(settings.to_params_or_default());

    if let Some(name) = &args.scenario {
        store.apply_scenario(name.parse::<ScenarioPreset>()?);
    }
    if let Some(name) = &args.population {
        store.select_population(name.parse::<PopulationPreset>()?);
    }
    if let Some(code) = &args.currency {
        store.select_currency(code.parse::<CurrencyCode>()?);
    }

    Ok(store)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let store = initial_store(&args, &data_dir)?;

    if args.report {
        let report = Report::from_store(&store, &BreakEvenConfig::default());
        if args.json {
            println!("{}", report.to_json()?);
        } else {
            print!("{}", report.to_text());
        }
        return Ok(());
    }

    let mut app = App::new(store);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
