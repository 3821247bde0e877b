use std::fmt::Write as _;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use catalog::{DEFAULT_REGION, MovieId, MovieView, Provider};
use catalog_client::{BASE_URL_VAR, CatalogConfig, CatalogTransport, TOKEN_VAR};
use server::MovieAggregator;

/// movie-view - Movie details from the catalog API
#[derive(Parser)]
#[command(name = "movie-view")]
#[command(about = "Fetch details, credits and watch providers for a movie", long_about = None)]
struct Cli {
    /// Catalog API base URL, e.g. https://api.themoviedb.org/3
    #[arg(long, env = BASE_URL_VAR)]
    base_url: String,

    /// Bearer token for the catalog API
    #[arg(long, env = TOKEN_VAR, hide_env_values = true)]
    token: String,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the merged view for one movie
    Show {
        /// Catalog movie identifier
        id: MovieId,

        /// Region whose watch providers are preferred
        #[arg(long, default_value = DEFAULT_REGION)]
        region: String,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real env vars still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config =
        CatalogConfig::new(cli.base_url, cli.token).context("Invalid catalog configuration")?;
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    debug!("Using {:?}", config);

    match cli.command {
        Commands::Show { id, region, json } => {
            let aggregator = MovieAggregator::from_config(config)?.with_preferred_region(region);
            print!("{}", handle_show(&aggregator, &id, json).await?);
        }
    }

    Ok(())
}

/// Handle the 'show' command, returning the text to print
async fn handle_show<T: CatalogTransport>(
    aggregator: &MovieAggregator<T>,
    id: &MovieId,
    json: bool,
) -> Result<String> {
    let start = Instant::now();
    let view = aggregator
        .aggregate(id)
        .await
        .with_context(|| format!("Failed to load movie details for {}", id))?;
    debug!("Loaded movie {} in {:?}", id, start.elapsed());

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
    } else {
        Ok(render_view(&view)?)
    }
}

/// Format a view the way the details page lays it out
fn render_view(view: &MovieView) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", view.title().bold().blue())?;
    let mut facts = vec![format!("★ {}", view.rating_label())];
    if let Some(runtime) = view.runtime() {
        facts.push(format!("{} min", runtime));
    }
    if let Some(year) = view.release_year() {
        facts.push(year.to_string());
    }
    if !view.original_language().is_empty() {
        facts.push(view.language_label());
    }
    writeln!(out, "{}", facts.join("  •  "))?;

    if !view.overview().is_empty() {
        writeln!(out, "\n{}", view.overview())?;
    }

    if let Some(availability) = view.watch_providers() {
        let region = view.watch_region().unwrap_or("?");
        writeln!(out, "\n{}", format!("Where to Watch ({})", region).bold())?;
        let categories = [
            ("Stream", &availability.flatrate),
            ("Rent", &availability.rent),
            ("Buy", &availability.buy),
        ];
        for (label, providers) in categories {
            if let Some(providers) = providers {
                writeln!(out, "{}{}: {}", "• ".green(), label, provider_names(providers))?;
            }
        }
    }

    if !view.genres().is_empty() {
        let genres: Vec<&str> = view.genres().iter().map(|g| g.name.as_str()).collect();
        writeln!(out, "\n{} {}", "Genres:".bold(), genres.join(", "))?;
    }

    if !view.cast().is_empty() {
        writeln!(out, "\n{}", "Cast".bold())?;
        for actor in view.cast() {
            writeln!(out, "{}{} as {}", "• ".cyan(), actor.name, actor.character)?;
        }
    }

    if let Some(director) = view.director() {
        writeln!(out, "\n{} {}", "Director:".bold(), director.name)?;
    }

    Ok(out)
}

fn provider_names(providers: &[Provider]) -> String {
    providers
        .iter()
        .map(|p| p.provider_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog::{RawCredits, RawDetails, RawWatchProviders, Resource};
    use catalog_client::{TransportError, TransportResponse};

    const DETAILS: &str = r#"{
        "id": 603, "title": "The Matrix", "overview": "A hacker learns the truth.",
        "runtime": 136, "vote_average": 8.2, "release_date": "1999-03-30",
        "original_language": "en",
        "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
    }"#;

    const CREDITS: &str = r#"{
        "cast": [{"id": 6384, "name": "Keanu Reeves", "character": "Neo"}],
        "crew": [
            {"name": "Lana Wachowski", "job": "Director"},
            {"name": "Lilly Wachowski", "job": "Director"}
        ]
    }"#;

    const PROVIDERS: &str = r#"{"results": {"CA": {"rent": [
        {"provider_id": 2, "provider_name": "Apple TV"},
        {"provider_id": 3, "provider_name": "Google Play Movies"}
    ]}}}"#;

    fn sample_view() -> MovieView {
        let details: RawDetails = serde_json::from_str(DETAILS).unwrap();
        let credits: RawCredits = serde_json::from_str(CREDITS).unwrap();
        let providers: RawWatchProviders = serde_json::from_str(PROVIDERS).unwrap();
        MovieView::assemble(details, credits, providers, DEFAULT_REGION)
    }

    /// Catalog that serves the sample movie, or a fixed status for everything
    struct FixedCatalog {
        id: MovieId,
        status: Option<u16>,
    }

    #[async_trait]
    impl CatalogTransport for FixedCatalog {
        async fn get(&self, path: &str) -> Result<TransportResponse, TransportError> {
            if let Some(status) = self.status {
                return Ok(TransportResponse::new(status, "catalog unavailable"));
            }
            let body = if path == Resource::Details.path(&self.id) {
                DETAILS
            } else if path == Resource::Credits.path(&self.id) {
                CREDITS
            } else {
                PROVIDERS
            };
            Ok(TransportResponse::ok(body))
        }
    }

    #[tokio::test]
    async fn test_show_failure_adds_context() {
        let id = MovieId::from(603);
        let aggregator = MovieAggregator::new(FixedCatalog { id: id.clone(), status: Some(500) });

        let error = handle_show(&aggregator, &id, false).await.unwrap_err();

        let chain = format!("{:#}", error);
        assert!(chain.starts_with("Failed to load movie details for 603"));
        assert!(chain.contains("500"));
    }

    #[tokio::test]
    async fn test_show_json_output() {
        let id = MovieId::from(603);
        let aggregator = MovieAggregator::new(FixedCatalog { id: id.clone(), status: None });

        let output = handle_show(&aggregator, &id, true).await.unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "The Matrix");
        assert_eq!(value["watch_region"], "CA");
        assert_eq!(value["director"]["name"], "Lana Wachowski");
    }

    #[test]
    fn test_render_view_sections() {
        colored::control::set_override(false);
        let rendered = render_view(&sample_view()).unwrap();

        assert!(rendered.starts_with("The Matrix\n"));
        assert!(rendered.contains("★ 8.2/10  •  136 min  •  1999  •  EN"));
        assert!(rendered.contains("Where to Watch (CA)"));
        assert!(rendered.contains("Rent: Apple TV, Google Play Movies"));
        assert!(!rendered.contains("Stream:"));
        assert!(rendered.contains("Genres: Action, Science Fiction"));
        assert!(rendered.contains("Keanu Reeves as Neo"));
        assert!(rendered.contains("Director: Lana Wachowski"));
        assert!(!rendered.contains("Lilly"));
    }

    #[test]
    fn test_cli_requires_id() {
        let parsed = Cli::try_parse_from([
            "movie-view",
            "--base-url",
            "https://api.themoviedb.org/3",
            "--token",
            "t",
            "show",
            "",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_cli_parses_show() {
        let cli = Cli::try_parse_from([
            "movie-view",
            "--base-url",
            "https://api.themoviedb.org/3",
            "--token",
            "t",
            "show",
            "550",
            "--json",
        ])
        .unwrap();

        let Commands::Show { id, region, json } = cli.command;
        assert_eq!(id, MovieId::from(550));
        assert_eq!(region, "US");
        assert!(json);
    }
}
