//! Unit Converter - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use unitconv::config::ResolvedConfig;
use unitconv::engine::ConversionResult;
use unitconv::model::{list_categories, list_units, AppError, Category, Preset};
use unitconv::state::{AppState, HistoryEntry, SessionState};

/// Unit Converter - interactive conversion between units of measurement
#[derive(Parser, Debug)]
#[command(name = "unitconv")]
#[command(version)]
#[command(about = "Interactive unit conversion calculator with history")]
pub struct Args {
    /// Initial category (length, weight, temperature, area, speed, volume)
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Initial value (finite number)
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_finite)]
    pub value: Option<f64>,

    /// Source unit
    #[arg(short, long)]
    pub from: Option<String>,

    /// Target unit (repeatable)
    #[arg(short, long)]
    pub to: Vec<String>,

    /// Apply a named preset first (e.g. "Marathon Distance")
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Start with real-time conversion off
    #[arg(long)]
    pub manual: bool,

    /// Convert once, print the result lines and exit
    #[arg(long)]
    pub print: bool,

    /// List every category with its units and exit
    #[arg(long)]
    pub list: bool,

    /// Directory for conversion_history.txt
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.list {
        print!("{}", render_unit_listing());
        return Ok(());
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = unitconv::config::load_config_with_precedence(args.config.clone())?;
        let merged = unitconv::config::merge_config(config_file)?;
        let with_env = unitconv::config::apply_env_overrides(merged)?;

        // Flags only override when explicitly given
        let realtime_override = if args.manual { Some(false) } else { None };
        unitconv::config::apply_cli_overrides(
            with_env,
            args.category,
            realtime_override,
            args.export_dir.clone(),
        )
    };

    unitconv::logging::init(&config.log_file_path, &config.log_level)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut session = build_session(&config, &args)?;

    if args.print {
        for line in print_conversion(&mut session)? {
            println!("{line}");
        }
        return Ok(());
    }

    let mut app_state = AppState::new(session);
    app_state.history_limit = config.history_limit;

    let cli_args = unitconv::view::CliArgs::new(
        config.export_dir,
        unitconv::view::ColorConfig::from_env_and_args(args.no_color),
    );
    unitconv::view::run_with_state(app_state, cli_args)?;

    Ok(())
}

/// Parse `--value`, rejecting NaN and infinities like the value field does.
fn parse_finite(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{text}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{text}' is not a finite number"))
    }
}

/// Build the starting session: config defaults, then the preset, then
/// explicit value and unit flags.
fn build_session(config: &ResolvedConfig, args: &Args) -> Result<SessionState, AppError> {
    let mut session = SessionState::new(
        config.default_category,
        config.default_value,
        config.history_capacity,
    );
    session.set_realtime(config.realtime);

    if let Some(name) = &args.preset {
        session.apply_preset(Preset::by_name(name)?);
    }
    if let Some(value) = args.value {
        session.set_value(value);
    }
    if let Some(from) = &args.from {
        session.set_from_unit(from)?;
    }
    if !args.to.is_empty() {
        session.set_to_units(&args.to)?;
    }

    Ok(session)
}

/// Convert the session selection once and render one history line per target.
fn print_conversion(session: &mut SessionState) -> Result<Vec<String>, AppError> {
    let results = session.convert()?;
    Ok(results
        .iter()
        .map(|ConversionResult { to_unit, value }| {
            HistoryEntry::new(session.value(), session.from_unit(), *value, to_unit.as_str())
                .to_string()
        })
        .collect())
}

/// `Category: unit, unit, ...` for every category.
fn render_unit_listing() -> String {
    list_categories()
        .into_iter()
        .map(|category| format!("{}: {}\n", category, list_units(category).join(", ")))
        .collect()
}
