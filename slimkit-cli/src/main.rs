//! slimkit CLI Tool
//!
//! Command-line interface for auditing the asset import settings, asset sizes
//! and build settings of a Unity project.

mod config;
mod guidance;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{AuditConfig, OutputFormat};
use log::info;
use render::{JsonSink, TableOptions, TableSink};
use slimkit_analyzer::{
    AnalyzerConfig, AudioAnalyzer, ModelAnalyzer, PlatformSettingsAnalyzer, ProjectAudit,
    SizeAggregator, TextureAnalyzer,
};
use slimkit_core::{PlatformGroup, ReportSink, StaticPlatformSettings};
use slimkit_project::{read_platform_settings, UnityProject};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slimkit")]
#[command(about = "Audit asset import settings, asset sizes and build settings of a Unity project")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file (default: <PROJECT>/slimkit.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Omit guidance text under tables
    #[arg(long, global = true)]
    no_guidance: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check texture max sizes and list compression settings
    Textures {
        /// Project root directory
        #[arg(default_value = ".")]
        project: PathBuf,
    },

    /// Check that audio clips are forced to mono
    Audio {
        /// Project root directory
        #[arg(default_value = ".")]
        project: PathBuf,
    },

    /// Check model read/write and mesh optimization flags
    Models {
        /// Project root directory
        #[arg(default_value = ".")]
        project: PathBuf,
    },

    /// Rank tracked assets by their share of the tracked total size
    Sizes {
        /// Project root directory
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Number of rows to show (0 = all)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Check mobile build settings
    Mobile {
        /// Project root directory
        #[arg(default_value = ".")]
        project: PathBuf,
    },

    /// Check WebGL build settings
    Webgl {
        /// Project root directory
        #[arg(default_value = ".")]
        project: PathBuf,
    },

    /// Run every check
    All {
        /// Project root directory
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Number of size rows to show (0 = all)
        #[arg(long)]
        top: Option<usize>,
    },
}

impl Commands {
    fn project(&self) -> &Path {
        match self {
            Commands::Textures { project }
            | Commands::Audio { project }
            | Commands::Models { project }
            | Commands::Sizes { project, .. }
            | Commands::Mobile { project }
            | Commands::Webgl { project }
            | Commands::All { project, .. } => project,
        }
    }

    fn top(&self) -> Option<usize> {
        match self {
            Commands::Sizes { top, .. } | Commands::All { top, .. } => *top,
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();
    }

    let project = cli.command.project();
    let config = AuditConfig::load(cli.config.as_deref(), project)?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.report.format
    };

    match format {
        OutputFormat::Json => {
            let mut sink = JsonSink::new();
            run(&cli.command, &config.analyzer_config(), &mut sink)?;
            sink.write(io::stdout().lock())
                .context("Failed to write JSON report")?;
            println!();
        }
        OutputFormat::Table => {
            let options = TableOptions {
                top: cli.command.top().unwrap_or(config.report.top),
                guidance: config.report.guidance && !cli.no_guidance,
            };
            let mut sink = TableSink::new(io::stdout().lock(), options);
            run(&cli.command, &config.analyzer_config(), &mut sink)?;
        }
    }

    Ok(())
}

fn open_project(root: &Path) -> Result<UnityProject> {
    UnityProject::open(root)
        .with_context(|| format!("Failed to open project '{}'", root.display()))
}

fn platform_settings(root: &Path) -> Result<StaticPlatformSettings> {
    read_platform_settings(root)
        .with_context(|| format!("Failed to read build settings of '{}'", root.display()))
}

/// Runs the selected analysis and hands the result to `sink`
fn run<K>(command: &Commands, config: &AnalyzerConfig, sink: &mut K) -> Result<()>
where
    K: ReportSink<Error = anyhow::Error>,
{
    let root = command.project();
    info!("Auditing {}", root.display());

    match command {
        Commands::Textures { .. } => {
            let project = open_project(root)?;
            sink.texture_report(&TextureAnalyzer::new(config.clone()).analyze(&project))
        }
        Commands::Audio { .. } => {
            let project = open_project(root)?;
            sink.audio_report(&AudioAnalyzer::new(config.clone()).analyze(&project))
        }
        Commands::Models { .. } => {
            let project = open_project(root)?;
            sink.model_report(&ModelAnalyzer::new(config.clone()).analyze(&project))
        }
        Commands::Sizes { .. } => {
            let project = open_project(root)?;
            sink.size_report(&SizeAggregator::new(config.clone()).aggregate(&project))
        }
        Commands::Mobile { .. } => {
            let settings = platform_settings(root)?;
            let report = PlatformSettingsAnalyzer::new().analyze(&settings, PlatformGroup::Mobile);
            sink.platform_report(PlatformGroup::Mobile, &report)
        }
        Commands::Webgl { .. } => {
            let settings = platform_settings(root)?;
            let report = PlatformSettingsAnalyzer::new().analyze(&settings, PlatformGroup::WebGl);
            sink.platform_report(PlatformGroup::WebGl, &report)
        }
        Commands::All { .. } => {
            let project = open_project(root)?;
            let settings = platform_settings(root)?;
            let report = ProjectAudit::new(config.clone()).run(&project, &settings);
            info!("{} assets with non-ideal settings", report.issue_count());
            report.deliver(sink)
        }
    }
}
