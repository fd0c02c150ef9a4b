//! Binary entry-point: loads settings, prepares the store, runs the shell.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use deptdesk::config::AppSettings;
use deptdesk::inbound::terminal::{DialoguerPrompter, Shell};
use deptdesk::outbound::persistence::{
    DieselCredentialRepository, DieselDepartmentRepository, DieselLoginService, SqliteStore,
    StoreError,
};

/// Failures that stop the application before or outside the shell loop.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("failed to load settings: {message}")]
    Config { message: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn run() -> Result<(), StartupError> {
    let settings =
        AppSettings::load_from_iter(std::env::args_os()).map_err(|err| StartupError::Config {
            message: err.to_string(),
        })?;
    init_tracing(settings.log_json);

    let store = SqliteStore::open(settings.database_path())?;
    info!(path = store.database_url(), "store ready");

    let departments = Arc::new(DieselDepartmentRepository::new(store.clone()));
    let login_service = Arc::new(DieselLoginService::new(DieselCredentialRepository::new(
        store,
    )));

    let stdout = io::stdout();
    let mut shell = Shell::new(
        DialoguerPrompter::new(),
        stdout.lock(),
        login_service,
        departments,
    );
    shell.run()?;
    Ok(())
}

/// Application bootstrap.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "deptdesk stopped");
            writeln!(io::stderr(), "deptdesk: {err}").ok();
            ExitCode::FAILURE
        }
    }
}
