use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use leafmd_cli::error::CliError;
use leafmd_cli::terminal::{render_view, view_json};
use leafmd_cli::{ReqwestClassifier, Upload, export_report, run_analysis};
use shared::classify::{DEFAULT_ENDPOINT_URL, DEFAULT_FIELD_NAME};
use shared::{ClassifierConfig, PropertyCatalog, REPORT_FILENAME, result_view};

#[derive(Debug, Parser)]
#[command(name = "leafmd")]
#[command(about = "Identify a medicinal leaf from a photo and export a PDF report")]
struct Cli {
    /// Leaf photo to analyze
    image: PathBuf,
    #[arg(long, env = "LEAFMD_ENDPOINT_URL", default_value = DEFAULT_ENDPOINT_URL)]
    endpoint: String,
    #[arg(long, env = "LEAFMD_FIELD_NAME", default_value = DEFAULT_FIELD_NAME)]
    field_name: String,
    /// YAML catalog to use instead of the bundled one
    #[arg(long, env = "LEAFMD_CATALOG")]
    catalog: Option<PathBuf>,
    /// Write the PDF report (defaults to leaf_report.pdf)
    #[arg(long, num_args = 0..=1, default_missing_value = REPORT_FILENAME)]
    report: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => PropertyCatalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => PropertyCatalog::bundled().context("bundled catalog is invalid")?,
    };

    let upload = Upload::from_path(&cli.image).await?;
    let classifier = ReqwestClassifier::new(
        ClassifierConfig::new(cli.endpoint).with_field_name(cli.field_name),
    );
    log::info!(
        "Sending {} to {}",
        upload.name,
        classifier.config().endpoint_url
    );

    let session = run_analysis(&classifier, &catalog, upload).await;
    let view = result_view(&session, &catalog);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view_json(&view))?);
    } else {
        print!("{}", render_view(&view));
    }

    if let Some(path) = cli.report {
        if !view.can_export() {
            bail!("no report available: the result is {}", view.stage());
        }
        let bytes = export_report(&session, &catalog).map_err(CliError::from)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| CliError::WriteReport {
                path: path.clone(),
                source,
            })?;
        log::info!("Report written to {}", path.display());
    }

    Ok(())
}
