use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use zr_project::ProjectError;
use zr_registry::{
    ChannelKind, InstanceRegistry, RegistryError, SequentialFactory, derive_channel_names,
};

#[derive(Parser)]
#[command(name = "zr-cli")]
#[command(about = "zonereg CLI - Building instance and thermal zone registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate manifest syntax and structure
    Validate {
        /// Path to the manifest (YAML, or JSON by extension)
        manifest_path: PathBuf,
    },
    /// Register every zone of a manifest without starting any instance
    Register {
        /// Path to the manifest (YAML, or JSON by extension)
        manifest_path: PathBuf,
        /// Also list the qualified channel names of each zone
        #[arg(long)]
        channels: bool,
    },
    /// Print the channel names derived for a zone
    Channels {
        /// Zone name
        zone: String,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Zone #{index} ({zone}): {source}")]
    Registry {
        index: usize,
        zone: String,
        #[source]
        source: RegistryError,
    },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // The registry gates its own output by the declared verbosity.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { manifest_path } => cmd_validate(&manifest_path),
        Commands::Register {
            manifest_path,
            channels,
        } => cmd_register(&manifest_path, channels),
        Commands::Channels { zone } => {
            cmd_channels(&zone);
            Ok(())
        }
    }
}

fn cmd_validate(manifest_path: &Path) -> CliResult<()> {
    println!("Validating manifest: {}", manifest_path.display());
    let manifest = zr_project::load(manifest_path)?;
    println!(
        "✓ Manifest '{}' is valid ({} zones)",
        manifest.name,
        manifest.zones.len()
    );
    Ok(())
}

fn cmd_register(manifest_path: &Path, show_channels: bool) -> CliResult<()> {
    let manifest = zr_project::load(manifest_path)?;
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();

    for (index, def) in manifest.zones.iter().enumerate() {
        registry
            .register_zone(&mut factory, &def.declaration())
            .map_err(|source| CliError::Registry {
                index,
                zone: def.zone.clone(),
                source,
            })?;
    }

    println!("Buildings in '{}':", manifest.name);
    for building in registry.buildings() {
        println!(
            "  {} - {} ({} zones, archive: {})",
            building.instance(),
            building.source_name(),
            building.zone_count(),
            building.archive_path().unwrap_or("none")
        );
        for zone in building.zones() {
            println!("    {}", zone.name());
            if show_channels {
                for name in zone.qualified_names() {
                    println!("      {}", name);
                }
            }
        }
    }

    if !registry.warnings().is_empty() {
        println!("Warnings:");
        for warning in registry.warnings() {
            println!("  {}", warning);
        }
    }
    if let Some(verbosity) = registry.global_verbosity() {
        println!("Verbosity: {}", verbosity);
    }
    Ok(())
}

fn cmd_channels(zone: &str) {
    for kind in ChannelKind::ALL {
        let (short, qualified) = derive_channel_names(zone, kind.suffixes());
        println!("{:?}:", kind);
        for (s, q) in short.iter().zip(&qualified) {
            println!("  {:<14} {}", s, q);
        }
    }
}
