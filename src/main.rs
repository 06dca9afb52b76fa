// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{self, Flags};
use gallery_lens::config::{self, paths, DEFAULT_BACKEND_URL};
use gallery_lens::generation::HttpBackend;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
GalleryLens

USAGE:
  gallery_lens [OPTIONS]

OPTIONS:
  --lang <id>           Interface language (e.g. en-US, fr)
  --config-dir <path>   Directory holding settings.toml
  --backend-url <url>   Base URL of the generation backend
  --log-level <level>   Log filter (e.g. info, gallery_lens=debug)
  -h, --help            Print this help
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    backend_url: Option<String>,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        backend_url: args.opt_value_from_str("--backend-url")?,
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments {rest:?}");
    }
    Ok(Some(parsed))
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_logging(args.log_level.as_deref());
    paths::init_cli_override(args.config_dir);

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let base_url = args
        .backend_url
        .unwrap_or_else(|| config.backend.base_url());
    let timeout = config.backend.request_timeout();
    let backend = match HttpBackend::new(&base_url, timeout) {
        Ok(backend) => backend,
        Err(err) => {
            tracing::warn!(%base_url, error = %err, "falling back to the default backend URL");
            match HttpBackend::new(DEFAULT_BACKEND_URL, timeout) {
                Ok(backend) => backend,
                Err(err) => {
                    tracing::error!(error = %err, "could not create the HTTP client");
                    return ExitCode::FAILURE;
                }
            }
        }
    };
    tracing::info!(base_url = %backend.base_url(), "using generation backend");

    let flags = Flags {
        lang: args.lang,
        config,
        backend,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application error");
            ExitCode::FAILURE
        }
    }
}
