use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockmosaic::assets::{AssetLoader, ConfigSource, CONFIG_FILE_ENV};
use stockmosaic::models::AppConfig;
use stockmosaic::rendering::render_palette_text;
use stockmosaic::services::MosaicService;

#[derive(Parser)]
#[command(name = "stockmosaic")]
#[command(about = "Turn images into mosaics built from a limited inventory of colored pieces")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mosaic PNG and print the bill of materials
    Generate {
        /// Input image (PNG or JPEG)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path (default: <input>_mosaic.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Palette config file (overrides CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cells per side of the mosaic
        #[arg(short, long)]
        resolution: Option<usize>,

        /// Output pixels per cell
        #[arg(short, long)]
        scale: Option<u32>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configured palette in declared order
    Palette {
        /// Palette config file (overrides CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Generate a mosaic and report the color of one cell
    Inspect {
        /// Input image (PNG or JPEG)
        #[arg(short, long)]
        input: PathBuf,

        /// Column (0 = left)
        #[arg(short, long)]
        x: usize,

        /// Row (0 = top)
        #[arg(short, long)]
        y: usize,

        /// Treat x/y as pixel coordinates in the scaled output PNG
        #[arg(long)]
        pixel: bool,

        /// Palette config file (overrides CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cells per side of the mosaic
        #[arg(short, long)]
        resolution: Option<usize>,
    },
    /// Write the embedded default palette to disk for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            input,
            output,
            config,
            resolution,
            scale,
            json,
        }) => {
            init_tracing();
            run_generate_command(&input, output, config, resolution, scale, json)
        }
        Some(Commands::Palette { config }) => {
            init_tracing();
            run_palette_command(config)
        }
        Some(Commands::Inspect {
            input,
            x,
            y,
            pixel,
            config,
            resolution,
        }) => {
            init_tracing();
            run_inspect_command(&input, x, y, pixel, config, resolution)
        }
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockmosaic=info,mosaic_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Load config, apply overrides, and build the service
fn build_service(
    config: Option<PathBuf>,
    resolution: Option<usize>,
    scale: Option<u32>,
) -> anyhow::Result<MosaicService> {
    let loader = AssetLoader::from_env(config);
    let config = AppConfig::load_from_assets(&loader)
        .with_context(|| format!("loading palette from {}", loader.config_source()))?
        .with_overrides(resolution, scale);

    let spec = config.spec()?;
    let palette = config
        .to_palette()
        .with_context(|| format!("invalid palette in {}", loader.config_source()))?;

    Ok(MosaicService::new(palette, spec))
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mosaic".to_string());
    input.with_file_name(format!("{stem}_mosaic.png"))
}

/// Generate a mosaic PNG and print the summary
fn run_generate_command(
    input: &Path,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    resolution: Option<usize>,
    scale: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let service = build_service(config, resolution, scale)?;
    let result = service
        .run_file(input)
        .with_context(|| format!("generating mosaic from {}", input.display()))?;

    let output = output.unwrap_or_else(|| default_output_path(input));
    let written = service
        .write_png(&result, &output)
        .with_context(|| format!("writing {}", output.display()))?;

    let report = service.report(&result);
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("Rendered {} ({written} bytes)\n", output.display());
        print!("{}", report.render_text());
    }

    Ok(())
}

/// Print the palette with stock counts
fn run_palette_command(config: Option<PathBuf>) -> anyhow::Result<()> {
    let service = build_service(config, None, None)?;
    print!(
        "{}",
        render_palette_text(service.palette(), service.spec().cell_count())
    );

    Ok(())
}

/// Generate a mosaic and print the color name of one cell
fn run_inspect_command(
    input: &Path,
    x: usize,
    y: usize,
    pixel: bool,
    config: Option<PathBuf>,
    resolution: Option<usize>,
) -> anyhow::Result<()> {
    let service = build_service(config, resolution, None)?;
    let spec = service.spec();

    let (cx, cy) = if pixel {
        let px = u32::try_from(x).unwrap_or(u32::MAX);
        let py = u32::try_from(y).unwrap_or(u32::MAX);
        spec.cell_at_output(px, py).with_context(|| {
            format!(
                "pixel ({x}, {y}) is outside the {side}x{side} output",
                side = spec.output_side()
            )
        })?
    } else {
        (x, y)
    };

    service
        .run_file(input)
        .with_context(|| format!("generating mosaic from {}", input.display()))?;

    let name = service.color_name_at(cx, cy).with_context(|| {
        format!(
            "cell ({cx}, {cy}) is outside the {n}x{n} mosaic",
            n = spec.resolution
        )
    })?;
    println!("({cx}, {cy}) Colour: {name}");

    Ok(())
}

/// Extract the embedded palette to the filesystem
fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::from_env(None);
    let report = loader.init(force)?;

    for f in &report.written {
        println!("Extracted:\n  + {f}");
    }
    for f in &report.skipped {
        println!("Skipped existing file (use --force to overwrite):\n  - {f}");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Stockmosaic v{VERSION}");
    println!("Mosaics from a limited inventory of colored pieces\n");

    let config_file = std::env::var(CONFIG_FILE_ENV).ok();
    println!("Environment Variables:");
    println!(
        "  {CONFIG_FILE_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::from_env(None);
    println!("\nPalette:");
    match loader.config_source() {
        ConfigSource::File(path) if !path.exists() => {
            println!("  Source:  {} (file not found)", path.display());
        }
        source => println!("  Source:  {source}"),
    }
    match AppConfig::load_from_assets(&loader).map(|c| (c.to_palette(), c)) {
        Ok((Ok(palette), config)) => {
            println!(
                "  Colors:  {} ({} pieces)",
                palette.len(),
                palette.total_stock()
            );
            println!(
                "  Grid:    {0}x{0} at scale {1}",
                config.resolution, config.scale
            );
        }
        Ok((Err(e), _)) => println!("  Invalid: {e}"),
        Err(e) => println!("  Error:   {e}"),
    }

    println!("\nCommands:");
    println!("  stockmosaic generate   Generate a mosaic PNG and summary");
    println!("  stockmosaic palette    List palette colors and stock");
    println!("  stockmosaic inspect    Report the color of one mosaic cell");
    println!("  stockmosaic init       Write the default palette to disk");
    println!("\nRun 'stockmosaic --help' for more details.");
}
