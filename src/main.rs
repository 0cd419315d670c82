use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use tika_remote_reader::application::ports::{DocumentReader, ResourceLoader};
use tika_remote_reader::infrastructure::observability::{TracingConfig, init_tracing};
use tika_remote_reader::infrastructure::resources::DefaultResourceLoader;
use tika_remote_reader::infrastructure::text_processing::ExtractedTextFormatter;
use tika_remote_reader::infrastructure::tika::ReaderFactory;
use tika_remote_reader::presentation::config::{
    Environment, ServiceConfig, Settings, load_settings,
};

#[derive(Debug, Parser)]
#[command(
    name = "tika-read",
    version,
    about = "Extract plain text from documents through a remote Apache Tika server"
)]
struct Cli {
    /// File paths, `classpath:` references or http(s) URLs.
    #[arg(required = true)]
    locations: Vec<String>,

    /// Tika server base URL; overrides the configured endpoint.
    #[arg(long, env = "TIKA_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds, 0 disables it.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Strip leading and repeated spaces from the extracted text.
    #[arg(long)]
    left_align: bool,

    /// Emit logs as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = load_settings(environment).context("failed to load settings")?;

    let tracing_config = TracingConfig::from_settings(&settings.logging, environment)
        .with_json_format(cli.json || settings.logging.enable_json);
    init_tracing(&tracing_config);

    let config = service_config(&cli, &settings)?;
    let mut formatter_settings = settings.formatter.clone();
    formatter_settings.left_align |= cli.left_align;
    let formatter = Arc::new(ExtractedTextFormatter::from(&formatter_settings));
    let loader = DefaultResourceLoader::new(settings.resources.classpath_root());

    tracing::info!(
        endpoint = %config.endpoint(),
        documents = cli.locations.len(),
        "Reading documents"
    );

    for location in &cli.locations {
        let resource = loader
            .get_resource(location)
            .with_context(|| format!("cannot resolve {location}"))?;
        let reader = ReaderFactory::with_formatter(resource, formatter.clone(), &config)?;

        let documents = reader
            .get()
            .await
            .with_context(|| format!("failed to read {location}"))?;

        for document in documents {
            let line = serde_json::json!({
                "id": document.id.to_string(),
                "content": document.content,
                "metadata": document.metadata,
            });
            println!("{line}");
        }
    }

    Ok(())
}

fn service_config(cli: &Cli, settings: &Settings) -> anyhow::Result<ServiceConfig> {
    let mut tika = settings.tika.clone();
    if let Some(endpoint) = &cli.endpoint {
        tika.endpoint = endpoint.clone();
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        tika.timeout_secs = Some(timeout_secs);
    }

    let config = tika.service_config()?;
    tracing::debug!(timeout = ?config.timeout(), "Tika client configured");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_json_flag_when_parsed_then_json_logging_is_requested() {
        let cli = Cli::try_parse_from(["tika-read", "--json", "report.pdf"])
            .expect("cli should parse");

        assert!(cli.json);
        assert_eq!(cli.locations, vec!["report.pdf".to_string()]);
    }

    #[test]
    fn given_no_json_flag_when_parsed_then_text_logging_is_kept() {
        let cli = Cli::try_parse_from(["tika-read", "report.pdf"]).expect("cli should parse");

        assert!(!cli.json);
    }

    #[test]
    fn given_legacy_json_logs_flag_when_parsed_then_it_is_rejected() {
        let result = Cli::try_parse_from(["tika-read", "--json-logs", "report.pdf"]);

        assert!(result.is_err());
    }
}
