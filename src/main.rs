use anyhow::{Context, Result};
use catalog_synth::{generate, GeneratorConfig};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Number of browse categories to generate.
    #[clap(long)]
    pub categories: Option<usize>,

    /// Number of artists to generate.
    #[clap(long)]
    pub artists: Option<usize>,

    /// Number of albums to generate.
    #[clap(long)]
    pub albums: Option<usize>,

    /// Number of users to generate.
    #[clap(long)]
    pub users: Option<usize>,

    /// Number of playlists to generate.
    #[clap(long)]
    pub playlists: Option<usize>,

    /// Seed for the random generator. Omit to seed from OS entropy.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Pretty-print the JSON output.
    #[clap(long)]
    pub pretty: bool,

    /// Write the dataset to this file instead of stdout.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    fn to_config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            categories: self.categories.unwrap_or(defaults.categories),
            artists: self.artists.unwrap_or(defaults.artists),
            albums: self.albums.unwrap_or(defaults.albums),
            users: self.users.unwrap_or(defaults.users),
            playlists: self.playlists.unwrap_or(defaults.playlists),
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to init logging: {err}"))?;

    let config = cli_args.to_config();
    let mut rng = match cli_args.seed {
        Some(seed) => {
            info!("Seeding generator with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let dataset = generate(&config, &mut rng);
    info!(
        "Generated {} categories, {} artists, {} albums, {} tracks, {} users, {} playlists",
        dataset.categories.len(),
        dataset.artists.len(),
        dataset.albums.len(),
        dataset.tracks.len(),
        dataset.users.len(),
        dataset.playlists.len(),
    );

    let json = if cli_args.pretty {
        serde_json::to_string_pretty(&dataset)?
    } else {
        serde_json::to_string(&dataset)?
    };

    match &cli_args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Error writing dataset to {}", path.display()))?;
            info!("Wrote dataset to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
