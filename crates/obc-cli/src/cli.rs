use crate::utils::parser::parse_box_size;
use clap::{Args, Parser, Subcommand};
use nalgebra::Vector3;
use obcpp::core::obc::model::ObcType;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "OBC++ CLI - Assemble and validate GBSA-OBC implicit-solvent parameters for force evaluation.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble OBC parameters from a settings file and a per-atom table, and report them.
    Check(CheckArgs),
    /// Print the default model constants and OBC coefficients.
    Defaults(DefaultsArgs),
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    // --- Core Arguments ---
    /// Path to the OBC settings file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub params: PathBuf,

    /// Path to the per-atom CSV table (columns: name,radius,scale_factor).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub atoms: PathBuf,

    // --- Model Overrides ---
    /// Override the OBC variant (obc1 or obc2).
    #[arg(short = 't', long, value_name = "TYPE")]
    pub obc_type: Option<ObcType>,

    /// Override the solvent dielectric constant.
    #[arg(long, value_name = "FLOAT")]
    pub solvent_dielectric: Option<f64>,

    /// Override the solute dielectric constant.
    #[arg(long, value_name = "FLOAT")]
    pub solute_dielectric: Option<f64>,

    /// Override the solvent probe radius (nm).
    #[arg(long, value_name = "FLOAT")]
    pub probe_radius: Option<f64>,

    // --- Boundary Overrides ---
    /// Enable a cutoff at the given distance (nm).
    #[arg(short, long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Enable periodic boundaries with the given box widths (nm), e.g. 2.4,2.4,2.4.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_box_size)]
    pub periodic_box: Option<Vector3<f64>>,
}

/// Arguments for the `defaults` subcommand.
#[derive(Args, Debug)]
pub struct DefaultsArgs {
    /// Only show the given OBC variant.
    #[arg(short = 't', long, value_name = "TYPE")]
    pub obc_type: Option<ObcType>,
}
