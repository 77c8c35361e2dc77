use lldpd_cli::{daemon, Cli};
use lldpd_core::AnnouncementConfig;
use lldpd_packet::DatalinkProvider;
use lldpd_protocol::lldp::{shutdown_channel, Announcer, RunOutcome};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration, exiting");
            return ExitCode::FAILURE;
        }
    };

    if cli.detach() {
        if let Err(e) = daemon::detach() {
            error!(error = %e, "Failed to detach");
            return ExitCode::FAILURE;
        }
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(announce(&config)) {
        Ok(outcome) => {
            info!(?outcome, "lldpd finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Fatal error, exiting");
            ExitCode::FAILURE
        }
    }
}

async fn announce(config: &AnnouncementConfig) -> lldpd_core::Result<RunOutcome> {
    let (tx, rx) = shutdown_channel();

    tokio::spawn(async move {
        wait_for_signal().await;
        info!("Received termination signal");
        let _ = tx.send(true);
    });

    Announcer::new(config, DatalinkProvider::new()).run(rx).await
}

/// Resolve on SIGINT or SIGTERM; never resolves if neither can be watched
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
