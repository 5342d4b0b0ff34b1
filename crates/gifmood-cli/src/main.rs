use clap::{Parser, Subcommand};
use gifmood_giphy::{FetchPipeline, ProbeReport, DEFAULT_TRENDING_LIMIT};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gifmood-cli")]
#[command(about = "Query the GIF reaction pipeline from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Pick one GIF for an emotion keyword.
    Random {
        /// Emotion or keyword, e.g. "happy".
        emotion: String,
    },
    /// List trending GIFs.
    Trending {
        /// Number of GIFs; clamped to 1..=25.
        #[arg(long, default_value_t = DEFAULT_TRENDING_LIMIT, allow_negative_numbers = true)]
        limit: i64,
    },
    /// Print the suggested emotion keywords.
    Emotions,
    /// Report demo/production mode and check that Giphy is reachable.
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = gifmood_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pipeline = FetchPipeline::from_config(&config)?;

    match cli.command {
        Commands::Random { emotion } => {
            let fetched = pipeline.fetch_random(&emotion).await?;
            tracing::info!(source = fetched.source.as_str(), "random GIF");
            print_json(&fetched.value)?;
        }
        Commands::Trending { limit } => {
            let fetched = pipeline.fetch_trending(limit).await;
            tracing::info!(
                source = fetched.source.as_str(),
                count = fetched.value.len(),
                "trending GIFs"
            );
            print_json(&fetched.value)?;
        }
        Commands::Emotions => print_json(&gifmood_core::emotion_catalog())?,
        Commands::Check => {
            let report = pipeline.probe().await;
            println!("mode: {}", pipeline.mode().as_str());
            match report {
                ProbeReport::Demo => println!("giphy: not contacted (no API key)"),
                ProbeReport::Reachable { result_count } => {
                    println!("giphy: reachable ({result_count} result(s))");
                }
                ProbeReport::Unreachable { error } => {
                    anyhow::bail!("giphy: unreachable: {error}");
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests;
