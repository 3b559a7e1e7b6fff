//! CLI entry point for posts-html2md

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use posts_html2md::{ImportConfig, Importer};

#[derive(Parser)]
#[command(name = "posts-html2md")]
#[command(author = "Yukang Chen")]
#[command(version)]
#[command(about = "Convert HTML blog posts with front-matter into Markdown posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Config file (defaults to _import.yml in the base directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every HTML post to Markdown (default)
    #[command(alias = "c")]
    Convert(ConvertArgs),

    /// List posts and their destination paths
    List(DirArgs),

    /// Display version information
    Version,
}

#[derive(Args, Default)]
struct ConvertArgs {
    #[command(flatten)]
    dirs: DirArgs,

    /// HTML-to-Markdown converter program
    #[arg(long)]
    converter: Option<String>,

    /// Stop at the first post that fails to convert
    #[arg(long)]
    fail_fast: bool,
}

#[derive(Args, Default)]
struct DirArgs {
    /// Directory holding the HTML posts
    #[arg(short, long)]
    source: Option<String>,

    /// Directory receiving the Markdown posts
    #[arg(long)]
    dest: Option<String>,
}

impl DirArgs {
    fn apply(self, config: &mut ImportConfig) {
        if let Some(source) = self.source {
            config.source_dir = source;
        }
        if let Some(dest) = self.dest {
            config.dest_dir = dest;
        }
    }
}

impl ConvertArgs {
    /// Override config values with the ones given on the command line
    fn apply(self, config: &mut ImportConfig) {
        self.dirs.apply(config);
        if let Some(converter) = self.converter {
            config.converter = converter;
        }
        if self.fail_fast {
            config.fail_fast = true;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "posts_html2md=debug,info"
    } else {
        "posts_html2md=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let load_config = || -> Result<ImportConfig> {
        match &cli.config {
            Some(path) => ImportConfig::load(path),
            None => ImportConfig::load_or_default(&base_dir),
        }
    };

    match cli.command.unwrap_or_else(|| Commands::Convert(ConvertArgs::default())) {
        Commands::Convert(args) => {
            let mut config = load_config()?;
            args.apply(&mut config);
            let importer = Importer::with_config(&base_dir, config)?;
            tracing::info!(
                "Converting {:?} -> {:?} with {}",
                importer.source_dir,
                importer.dest_dir,
                importer.config.converter
            );

            let report = importer.convert()?;
            if !report.is_success() {
                for (source, error) in &report.failed {
                    eprintln!("  {}: {}", source.display(), error);
                }
                anyhow::bail!("{} post(s) failed to convert", report.failed.len());
            }
            println!("Converted {} post(s)", report.converted.len());
        }

        Commands::List(args) => {
            let mut config = load_config()?;
            args.apply(&mut config);
            let importer = Importer::with_config(&base_dir, config)?;
            importer.list()?;
        }

        Commands::Version => {
            println!("posts-html2md version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
