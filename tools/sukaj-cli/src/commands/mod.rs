//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod partners;
pub mod preview;
pub mod validate;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Free-text search over product name, partner name and application.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Material to include (repeatable).
    #[arg(short, long = "material")]
    pub materials: Vec<String>,

    /// Application to include (repeatable).
    #[arg(short, long = "application")]
    pub applications: Vec<String>,

    /// Smallest diameter of interest, in mm.
    #[arg(long)]
    pub diameter_min: Option<u32>,

    /// Largest diameter of interest, in mm.
    #[arg(long)]
    pub diameter_max: Option<u32>,

    /// Category (civil, agri, industrial).
    #[arg(long)]
    pub category: Option<String>,

    /// Partner id.
    #[arg(short, long)]
    pub partner: Option<String>,

    /// Sort order: relevance, diameter_asc, diameter_desc, partner.
    #[arg(long, default_value = "relevance")]
    pub sort: String,

    /// Also print material and application facet counts.
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for the partners command.
#[derive(Args)]
pub struct PartnersArgs {
    /// Partner type: all, manufacturer, recycler, packaging, hoses, local-distributor.
    #[arg(short = 't', long = "type", default_value = "all")]
    pub partner_type: String,

    /// Only featured partners, in featured order.
    #[arg(long)]
    pub featured: bool,
}

/// Renderer event to play through the preview lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Simulation {
    /// Renderer signals ready.
    Ready,
    /// GPU context is lost after rendering starts.
    ContextLost,
    /// Renderer never signals ready.
    Timeout,
    /// Frame rate drops after rendering starts.
    PerformanceDrop,
}

/// Arguments for the preview command.
#[derive(Args)]
pub struct PreviewArgs {
    /// Treat the device as mobile.
    #[arg(long)]
    pub mobile: bool,

    /// User prefers reduced motion.
    #[arg(long)]
    pub reduce_motion: bool,

    /// WebGL is unavailable.
    #[arg(long)]
    pub no_webgl: bool,

    /// Data saver is on.
    #[arg(long)]
    pub save_data: bool,

    /// Network class (slow-2g, 2g, 3g, 4g).
    #[arg(long)]
    pub effective_type: Option<String>,

    /// Device memory in GB.
    #[arg(long)]
    pub memory: Option<f64>,

    /// Logical core count.
    #[arg(long)]
    pub cores: Option<u32>,

    /// Drive the mount lifecycle through a renderer event and log each transition.
    #[arg(long, value_enum)]
    pub simulate: Option<Simulation>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
