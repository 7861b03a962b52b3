mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lzw_pack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compress {
            input,
            output,
            format,
        } => {
            cli::compress_file(&input, &output, &format)?;
        }
        Commands::Decompress {
            input,
            output,
            format,
        } => {
            cli::decompress_file(&input, &output, &format)?;
        }
    }

    Ok(())
}
