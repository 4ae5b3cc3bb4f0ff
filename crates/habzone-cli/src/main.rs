use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use habzone_cli::output::{format_report_text, OutputFormat};
use habzone_cli::prompt::prompt_value;
use habzone_lib::{assess_habitability, OrbitalParameters, StellarParameters};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Habitable-zone calculator using the Kopparapu et al. 2014 fits"
)]
struct Cli {
    /// Star's bolometric luminosity in solar units.
    #[arg(long)]
    luminosity: Option<f64>,

    /// Object's orbital semi-major axis in astronomical units.
    #[arg(long)]
    semi_major_axis: Option<f64>,

    /// Star's effective temperature in Kelvin.
    #[arg(long)]
    temperature: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Values not supplied as flags are prompted for on stdin, in order:
    // luminosity, semi-major axis, temperature.
    let luminosity = resolve_input(cli.luminosity, "star's luminosity (Lsun)")?;
    let semi_major_axis = resolve_input(cli.semi_major_axis, "object's semi-major axis (AU)")?;
    let temperature = resolve_input(cli.temperature, "star's temperature (K)")?;

    let star = StellarParameters {
        luminosity_lsun: luminosity,
        effective_temp_k: temperature,
    };
    let orbit = OrbitalParameters {
        semi_major_axis_au: semi_major_axis,
    };

    let report =
        assess_habitability(&star, &orbit).context("failed to assess the object's habitability")?;

    match cli.format {
        OutputFormat::Text => print!("{}", format_report_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn resolve_input(flag: Option<f64>, label: &str) -> Result<f64> {
    match flag {
        Some(value) => Ok(value),
        None => prompt_value(label),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
