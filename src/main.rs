use std::{process, time::Duration};

use hostopt::{
    config::{self, CharAtArgs, Command, ServeArgs, Settings},
    error::AppError,
    infra::{error::InfraError, telemetry},
    server::Server,
    text,
};
use tokio::signal;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;
    let command = cli_args.command.unwrap_or_default();

    telemetry::init(&settings.logging)?;

    match command {
        Command::Serve(args) => run_serve(settings, args).await,
        Command::CharAt(args) => run_char_at(args),
    }
}

async fn run_serve(settings: Settings, args: ServeArgs) -> Result<(), AppError> {
    let server = Server::new(settings.server.options())?;

    server.run();
    let result = wait_for_shutdown(args.run_for_seconds).await;
    server.stop();

    result
}

async fn wait_for_shutdown(run_for_seconds: Option<u64>) -> Result<(), AppError> {
    let Some(seconds) = run_for_seconds else {
        signal::ctrl_c().await.map_err(InfraError::from)?;
        info!(target = "hostopt::serve", "received Ctrl+C, shutting down");
        return Ok(());
    };

    tokio::select! {
        _ = tokio::time::sleep(Duration::from_secs(seconds)) => {
            info!(target = "hostopt::serve", seconds, "run duration elapsed, shutting down");
            Ok(())
        }
        res = signal::ctrl_c() => {
            res.map_err(InfraError::from)?;
            info!(target = "hostopt::serve", "received Ctrl+C, shutting down");
            Ok(())
        }
    }
}

fn run_char_at(args: CharAtArgs) -> Result<(), AppError> {
    let character = text::char_at(&args.text, args.index)?;
    println!("{character}");
    Ok(())
}
