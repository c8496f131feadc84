use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use pq_app::{
    AppError, AppResult, DEFAULT_PF_ANNOTATIONS, PlotGeometry, UpdateResponse, apply_preset,
    change_rating, plot_geometry, readout_rows, render_table, update,
};
use pq_config::{LoadedConfig, ProcessEnv, load_config};
use pq_controls::{ControlPositions, Preset, governor_pct_to_p};
use pq_core::Machine;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pq-cli")]
#[command(about = "PQ Teach CLI - generator operating point on the P-Q plane", long_about = None)]
struct Cli {
    /// Machine config file (JSON or YAML); defaults to ./config.json if present
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the apparent power rating (MVA)
    #[arg(long, global = true)]
    s_rated: Option<f64>,
    /// Print responses as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operating point for a pair of slider positions
    Point {
        /// Governor position in percent (0-100)
        #[arg(long, default_value_t = 50.0)]
        governor: f64,
        /// Excitation position in percent (0-100, 50 = zero Q)
        #[arg(long, default_value_t = 50.0)]
        excitation: f64,
    },
    /// Apply a preset scenario
    Preset {
        /// Preset key (see `presets`)
        name: String,
        /// Active power currently on display (MW); defaults to half governor
        #[arg(long)]
        current_p: Option<f64>,
    },
    /// List preset scenarios
    Presets,
    /// Show the effective machine configuration
    Config,
    /// Export plot geometry (rating arc, PF rays, operating ray) as CSV
    Geometry {
        #[arg(long, default_value_t = 50.0)]
        governor: f64,
        #[arg(long, default_value_t = 50.0)]
        excitation: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // stdout carries --json and CSV output; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let loaded = load_config(cli.config.as_deref(), &ProcessEnv);
    let machine = effective_machine(&loaded, cli.s_rated)?;

    match cli.command {
        Commands::Point {
            governor,
            excitation,
        } => cmd_point(&machine, governor, excitation, cli.json),
        Commands::Preset { name, current_p } => cmd_preset(&machine, &name, current_p, cli.json),
        Commands::Presets => cmd_presets(),
        Commands::Config => cmd_config(&loaded, &machine),
        Commands::Geometry {
            governor,
            excitation,
            output,
        } => cmd_geometry(&loaded, &machine, governor, excitation, output.as_deref()),
    }
}

/// Config warnings were already logged by `load_config`.
fn effective_machine(loaded: &LoadedConfig, s_rated: Option<f64>) -> AppResult<Machine> {
    let machine = loaded.machine();
    match s_rated {
        Some(s) => change_rating(&machine, s),
        None => Ok(machine),
    }
}

fn cmd_point(machine: &Machine, governor: f64, excitation: f64, json: bool) -> AppResult<()> {
    let response = update(governor, excitation, machine);
    print_response(&response, json)
}

fn cmd_preset(
    machine: &Machine,
    name: &str,
    current_p: Option<f64>,
    json: bool,
) -> AppResult<()> {
    let preset: Preset = name.parse()?;
    let current_p = current_p
        .unwrap_or_else(|| governor_pct_to_p(ControlPositions::default().governor_pct, machine));
    info!(preset = preset.key(), current_p, "preset requested");

    if !json {
        println!("{}: {}", preset.name(), preset.description());
    }
    let response = apply_preset(preset, current_p, machine);
    print_response(&response, json)?;
    if !json {
        println!(
            "Sliders: governor {:.1} %, excitation {:.1} %",
            response.positions.governor_pct, response.positions.excitation_pct
        );
    }
    Ok(())
}

fn cmd_presets() -> AppResult<()> {
    println!("Presets:");
    for preset in Preset::ALL {
        println!("  {:<20} {} - {}", preset.key(), preset.name(), preset.description());
    }
    Ok(())
}

fn cmd_config(loaded: &LoadedConfig, machine: &Machine) -> AppResult<()> {
    match &loaded.source {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }
    println!("  S_rated = {:.2} MVA", machine.s_rated_mva());
    println!("  P_max   = {:.2} MW", machine.p_max_mw());
    println!("  Q_max   = {:.2} MVAr", machine.q_max_mvar());
    println!("  x axis  = {}", loaded.config.labels.x);
    println!("  y axis  = {}", loaded.config.labels.y);
    if loaded.used_defaults() {
        println!("Some values were replaced by defaults:");
        for warning in &loaded.warnings {
            println!("  ! {warning}");
        }
    }
    Ok(())
}

fn cmd_geometry(
    loaded: &LoadedConfig,
    machine: &Machine,
    governor: f64,
    excitation: f64,
    output: Option<&Path>,
) -> AppResult<()> {
    let response = update(governor, excitation, machine);
    let geometry = plot_geometry(
        machine,
        &loaded.config.labels,
        response.point,
        &DEFAULT_PF_ANNOTATIONS,
    );

    let csv = geometry_csv(&geometry);

    match output {
        Some(path) => {
            std::fs::write(path, csv).map_err(|source| AppError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            println!("✓ Wrote geometry to {}", path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}

fn geometry_csv(geometry: &PlotGeometry) -> String {
    let mut csv = String::from("series,label,x,y\n");
    for pt in &geometry.rating_arc {
        csv.push_str(&format!("rating_arc,,{},{}\n", pt.x, pt.y));
    }
    for ray in &geometry.pf_rays {
        csv.push_str(&format!("pf_ray,{},0,0\n", ray.label));
        csv.push_str(&format!("pf_ray,{},{},{}\n", ray.label, ray.end.x, ray.end.y));
    }
    for pt in &geometry.operating_ray {
        csv.push_str(&format!("operating_ray,,{},{}\n", pt.x, pt.y));
    }
    csv
}

fn print_response(response: &UpdateResponse, json: bool) -> AppResult<()> {
    if json {
        let text = serde_json::to_string_pretty(response)
            .map_err(|e| AppError::InvalidInput(format!("Failed to serialize response: {e}")))?;
        println!("{text}");
        return Ok(());
    }

    print!("{}", render_table(&readout_rows(response.point, &response.readout)));
    for notice in response.notices() {
        println!("! {notice}");
    }
    if let Some(reason) = response.reason() {
        println!("  boundary: {reason}");
    }
    Ok(())
}
