use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Load configuration; on rejection fall back to defaults and hand back the
/// reason so it can be logged once tracing is up.
fn load_config() -> (AppConfig, Option<anyhow::Error>) {
    match AppConfig::load_and_validate() {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            let mut cfg = AppConfig::default();
            cfg.apply_env_overrides();
            if cfg.normalize_and_validate().is_err() {
                cfg = AppConfig::default();
            }
            (cfg, Some(e))
        }
    }
}

fn main() -> std::process::ExitCode {
    // Load .env first so RUST_LOG and the config overrides take effect.
    dotenv().ok();
    let (cfg, config_error) = load_config();

    let format = cfg.logging.format.parse::<LogFormat>().unwrap_or_default();
    init_logging(format);
    info!(
        service = "employee_api",
        event = "logger_init",
        ?format,
        "tracing subscriber initialized"
    );
    if let Some(e) = config_error {
        warn!(
            service = "employee_api",
            event = "config_rejected",
            error = %e,
            "invalid configuration, using defaults"
        );
    }

    // Process context for every lifecycle event (nothing sensitive)
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panics go through tracing so they land in the same log stream
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "employee_api",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // Runtime sized from [server] worker_threads (TOKIO_WORKER_THREADS overrides)
    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "employee_api",
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "employee_api",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "employee api starting"
    );

    // server::run returns once Ctrl+C has drained in-flight requests
    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(
                service = "employee_api",
                event = "stop",
                %service_id,
                pid,
                "server stopped normally"
            );
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            // Bind and config failures end up here
            error!(
                service = "employee_api",
                event = "run_failed",
                error = %e,
                "server::run returned error"
            );
            std::process::ExitCode::FAILURE
        }
    }
}
