// Shared helpers for integration tests
//
// Note: each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use erp_e2e::{
    App, BatchRunner, Config, CrudAction, DuplicateField, Entity, EntityData, MasterForm, MasterScreen,
    Session, SummaryReporter,
};
use std::path::Path;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a fmt subscriber honouring `RUST_LOG` (default `info`), once per binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Headless Chromium configuration pointed at `base_url`.
pub fn mock_config(base_url: &str) -> Config {
    Config::new().base_url(base_url).headless(true)
}

/// Launches a session against `base_url`.
pub async fn launch(base_url: &str) -> Session {
    Session::launch(&mock_config(base_url))
        .await
        .expect("Failed to launch browser session")
}

/// Reporter writing into a fresh temporary directory.
pub fn temp_reporter() -> (tempfile::TempDir, SummaryReporter) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let reporter = SummaryReporter::new(dir.path());
    (dir, reporter)
}

/// Live-ERP configuration, or `None` (logged) when `ERP_BASE_URL` is unset.
///
/// Relative directories resolve against the workspace root, since cargo runs
/// integration tests from the crate directory.
pub fn live_config() -> Option<Config> {
    let mut config = Config::from_env().expect("Invalid ERP_* environment");
    if config.base_url.is_none() {
        tracing::warn!("ERP_BASE_URL is not set, skipping live suite");
        return None;
    }
    let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    if config.test_data_dir.is_relative() {
        config.test_data_dir = workspace.join(&config.test_data_dir);
    }
    if config.summary_dir.is_relative() {
        config.summary_dir = workspace.join(&config.summary_dir);
    }
    Some(config)
}

/// Runs the duplicate checks and the create, update and delete batches of
/// `entity` against the live ERP, reopening the listing before each step.
///
/// Every step runs even when an earlier one failed; all failures are
/// reported together at the end.
pub async fn run_live_suite<F, M>(config: &Config, entity: Entity, make_form: M) -> anyhow::Result<()>
where
    F: MasterForm,
    M: Fn(&App) -> F,
{
    let data = EntityData::load_for(&config.test_data_dir, entity)?;
    let reporter = SummaryReporter::new(&config.summary_dir);
    let session = Session::launch(config).await?;
    let app = session.app();
    let screen = MasterScreen::new(&app, make_form(&app));
    let runner = BatchRunner::new(&screen, data.feature, &reporter)
        .delete_retries(config.delete_retries);

    let mut failures = Vec::new();
    for field in [DuplicateField::Code, DuplicateField::Name] {
        let step = async {
            screen.open().await?;
            runner.validate_duplicate(field, data.validate.as_ref()).await
        };
        if let Err(e) = step.await {
            failures.push(format!("{} | duplicate {}: {}", entity, field.as_str(), e));
        }
    }

    for action in [CrudAction::Create, CrudAction::Update, CrudAction::Delete] {
        let step = async {
            screen.open().await?;
            match action {
                CrudAction::Create => runner.create_all(&data.create).await,
                CrudAction::Update => runner.update_all(&data.update).await,
                CrudAction::Delete => runner.delete_all(&data.delete).await,
            }
        };
        if let Err(e) = step.await {
            failures.push(format!("{} | {}: {}", entity, action, e));
        }
    }

    session.close().await?;
    if !failures.is_empty() {
        anyhow::bail!(failures.join("\n"));
    }
    Ok(())
}
