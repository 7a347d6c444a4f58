// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// xtask - Developer commands for the ERP end-to-end suite
//
// Usage:
//   cargo xtask lint-data [dir]      Report fixture records the runner would skip
//   cargo xtask summaries [dir]      List exported batch summaries
//   cargo xtask mock-erp [--port N]  Serve the mock ERP used by the integration tests

use anyhow::{Context, Result};
use axum::{
    Router,
    body::Body,
    http::{Response, StatusCode},
    routing::get,
};
use clap::{Parser, Subcommand};
use erp_e2e::validation::{self, MissingData};
use erp_e2e::{CrudSummary, DuplicateField, Entity, EntityData, RecordDefinition, ValidationSummary};
use std::path::{Path, PathBuf};

const MOCK_ERP: &str = include_str!("../../erp-e2e/tests/assets/mock_erp.html");
const DOCUMENT_PAGE: &str = include_str!("../../erp-e2e/tests/assets/document.html");

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Developer commands for the ERP end-to-end suite")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every fixture and report records that would be skipped
    LintData {
        /// Fixture root
        #[arg(default_value = "test-data")]
        dir: PathBuf,
    },

    /// List exported summaries with their totals
    Summaries {
        /// Summary directory
        #[arg(default_value = "target/erp-summaries")]
        dir: PathBuf,
    },

    /// Serve the mock ERP for manual runs
    MockErp {
        #[arg(short, long, default_value_t = 8085)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::LintData { dir } => lint_data(&dir),
        Commands::Summaries { dir } => summaries(&dir),
        Commands::MockErp { port } => mock_erp(port).await,
    }
}

fn lint_data(dir: &Path) -> Result<()> {
    let mut files = Vec::new();
    collect_json(dir, &mut files)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;
    files.sort();

    let mut broken = 0;
    for path in &files {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let Some(entity) = Entity::all().into_iter().find(|e| e.slug() == stem) else {
            tracing::warn!("{}: no entity uses this fixture name", path.display());
            continue;
        };
        let data = match EntityData::load(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("{}", e);
                broken += 1;
                continue;
            }
        };

        println!("{} ({})", entity, path.display());
        report(
            "create",
            &data.create,
            |r| validation::check_create(r, data.feature),
        );
        report(
            "update",
            &data.update,
            |r| validation::check_update(r, data.feature),
        );
        report("delete", &data.delete, validation::check_delete);
        for field in [DuplicateField::Code, DuplicateField::Name] {
            let missing =
                validation::check_duplicate(field, data.validate.as_ref(), data.feature);
            if let Some(missing) = missing {
                println!(
                    "  duplicate {} check skipped: missing {}",
                    field.as_str().to_ascii_lowercase(),
                    missing.field()
                );
            }
        }
    }

    if broken > 0 {
        anyhow::bail!("{} of {} fixture files could not be loaded", broken, files.len());
    }
    println!("{} fixture files checked", files.len());
    Ok(())
}

fn report(
    batch: &str,
    records: &[RecordDefinition],
    check: impl Fn(&RecordDefinition) -> Option<MissingData>,
) {
    let skipped: Vec<String> = records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            check(record).map(|missing| {
                format!(
                    "#{} {} (missing {})",
                    i + 1,
                    record.key().unwrap_or(erp_e2e::UNKNOWN_RECORD),
                    missing.field()
                )
            })
        })
        .collect();
    println!(
        "  {}: {} records, {} would be skipped",
        batch,
        records.len(),
        skipped.len()
    );
    for line in skipped {
        println!("    {}", line);
    }
}

fn collect_json(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_json(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(())
}

fn summaries(dir: &Path) -> Result<()> {
    let mut files = Vec::new();
    collect_json(dir, &mut files)
        .with_context(|| format!("No summaries in {}", dir.display()))?;
    files.sort();

    for path in &files {
        let json = std::fs::read_to_string(path)?;
        if let Ok(summary) = serde_json::from_str::<CrudSummary>(&json) {
            println!(
                "{:<28} {:<7} total {:>3}  ok {:>3}  skipped {:>3}  failed {:>3}  {}",
                summary.entity_name,
                summary.action,
                summary.total_count,
                summary.success_records.len(),
                summary.skipped_records.len(),
                summary.failed_records.len(),
                summary.generated_at.format("%Y-%m-%d %H:%M:%S")
            );
            if summary.has_failures() {
                println!("    failed: {}", summary.failed_records.join(", "));
            }
        } else if let Ok(summary) = serde_json::from_str::<ValidationSummary>(&json) {
            println!(
                "{:<28} duplicate {} '{}' rejected  {}",
                summary.entity_name,
                summary.field.as_str().to_ascii_lowercase(),
                summary.value,
                summary.generated_at.format("%Y-%m-%d %H:%M:%S")
            );
        } else {
            tracing::warn!("{}: not a summary file", path.display());
        }
    }
    Ok(())
}

async fn mock_erp(port: u16) -> Result<()> {
    let app = Router::new()
        .route("/document.html", get(|| async { html(DOCUMENT_PAGE) }))
        .fallback(get(|| async { html(MOCK_ERP) }));

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    tracing::info!("Mock ERP listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn html(body: &'static str) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        axum::http::header::CONTENT_TYPE,
        axum::http::HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}
