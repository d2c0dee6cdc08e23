use crate::widgets::Terminal;
use std::io::{IsTerminal, Write};
use std::sync::Arc;

#[macro_use]
mod macros;

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod helper;
pub mod logger;
pub mod render;
pub mod screen;
pub mod ui;
pub mod widgets;

mod views;

#[macro_use]
extern crate rust_i18n;
i18n!("locales");

#[tokio::main]
async fn main() {
    let bin_name = std::env::args()
        .next()
        .unwrap_or_else(|| "shariawatch".to_string());

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err.message);
            std::process::exit(err.code);
        }
    };

    let args = match command {
        cli::Command::Help => {
            println!("{}", cli::help_text(&bin_name));
            return;
        }
        cli::Command::Version => {
            println!("{}", cli::version_text());
            return;
        }
        cli::Command::Run(args) => args,
    };

    dotenvy::dotenv().ok();

    if !std::io::stdout().is_terminal() {
        eprintln!("shariawatch needs an interactive terminal (TTY).");
        std::process::exit(1);
    }

    let locale = config::locale();
    rust_i18n::set_locale(&locale);

    let _guard = match logger::init() {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("{err}; continuing without a log file");
            None
        }
    };
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id(),
        locale = %locale,
        log_dir = %logger::active_log_dir().display(),
        "starting"
    );

    let missing_env = config::missing_required_env(&args);
    if !missing_env.is_empty() {
        config::print_config_guide();
        eprintln!("\nMissing required environment variables: {}", missing_env.join(", "));
        std::process::exit(2);
    }

    let config = match config::Config::from_env(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            tracing::error!(error = %err, "invalid configuration");
            std::process::exit(2);
        }
    };
    let api = match api::HttpWatchlistApi::new(&config) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("Could not set up the HTTP client: {err}");
            tracing::error!(error = %err, "http client init failed");
            std::process::exit(2);
        }
    };
    tracing::info!(
        api = %config.api_url,
        plan = ?config.plan,
        prices = config.details_url.is_some(),
        "configuration loaded"
    );

    // Set up panic hook to restore terminal
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        Terminal::exit_full_screen();
        hook(info);
    }));

    let _ = std::io::stdout().write_all(b"\n");
    let _ = std::io::stdout().flush();

    Terminal::enter_full_screen();
    let result = tokio::select! {
        result = app::run(config, Arc::new(api)) => {
            tracing::info!("main loop exited");
            result
        }
        () = wait_for_shutdown_signal() => {
            tracing::warn!("shutdown signal received");
            Ok(())
        }
    };
    Terminal::exit_full_screen();

    if let Err(err) = result {
        tracing::error!(error = %err, "terminated with error");
        eprintln!("shariawatch stopped: {err}");
        if let Some(log_file) = logger::latest_log_file() {
            eprintln!("See {} for details", log_file.display());
        }
        std::process::exit(1);
    }
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use std::future::pending;
    use tokio::signal::unix::{signal, Signal, SignalKind};

    async fn recv_or_pending(signal: Option<Signal>) {
        let mut signal = signal;
        if let Some(sig) = signal.as_mut() {
            let _ = sig.recv().await;
            return;
        }
        pending::<()>().await;
    }

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        () = recv_or_pending(signal(SignalKind::terminate()).ok()) => {}
        () = recv_or_pending(signal(SignalKind::hangup()).ok()) => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
