use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lig_build_rs::{
    assemble_site, build_all, default_site, generate_branding, publish_static, BrandingConfig,
    MatchPolicy, DEFAULT_OUTPUT_DIR, DEFAULT_STATIC_ENTRIES,
};
use std::path::{Path, PathBuf};

/// lig-build: Build steps for the Leverage in the Game static site
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate assets/branding/icon.jpg and logo.jpg
    Branding {
        #[command(flatten)]
        root: RootArg,

        /// JSON file overriding branding constants
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Assemble index.html, checkout.html and thank-you.html from the design templates
    Pages {
        #[command(flatten)]
        root: RootArg,

        /// Skip replacements whose search text is absent instead of failing
        #[arg(long)]
        allow_missing: bool,
    },

    /// Copy the deployable files into a clean output directory
    Publish {
        #[command(flatten)]
        root: RootArg,

        /// Output directory, relative to the site root
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },

    /// Run branding, pages and publish in order
    All {
        #[command(flatten)]
        root: RootArg,

        /// JSON file overriding branding constants
        #[arg(long)]
        config: Option<PathBuf>,

        /// Skip replacements whose search text is absent instead of failing
        #[arg(long)]
        allow_missing: bool,

        /// Output directory, relative to the site root
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct RootArg {
    /// Site root directory
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Branding { root, config } => branding(&root.root, config.as_deref()),
        Commands::Pages {
            root,
            allow_missing,
        } => pages(&root.root, allow_missing),
        Commands::Publish { root, output } => publish(&root.root, &output),
        Commands::All {
            root,
            config,
            allow_missing,
            output,
        } => {
            let config = load_config(config.as_deref())?;
            let summary = build_all(&root.root, &config, match_policy(allow_missing), &output)
                .context("Site build failed")?;
            println!("Successfully generated icon.jpg and logo.jpg");
            println!("Pages generated successfully.");
            println!("Generated static output in {}", summary.published.display());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<BrandingConfig> {
    Ok(match path {
        Some(path) => BrandingConfig::from_json_file(path)?,
        None => BrandingConfig::default(),
    })
}

fn match_policy(allow_missing: bool) -> MatchPolicy {
    if allow_missing {
        MatchPolicy::Lenient
    } else {
        MatchPolicy::Strict
    }
}

fn branding(root: &Path, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    generate_branding(root, &config).context("Branding generation failed")?;
    println!("Successfully generated icon.jpg and logo.jpg");
    Ok(())
}

fn pages(root: &Path, allow_missing: bool) -> Result<()> {
    assemble_site(root, &default_site(), match_policy(allow_missing))
        .context("Page assembly failed")?;
    println!("Pages generated successfully.");
    Ok(())
}

fn publish(root: &Path, output: &Path) -> Result<()> {
    let output = publish_static(root, output, DEFAULT_STATIC_ENTRIES)
        .context("Static publish failed")?;
    println!("Generated static output in {}", output.display());
    Ok(())
}
