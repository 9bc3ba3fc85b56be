use peer_review::directory::Directory;
use peer_review::submitter::SimulatedSubmitter;
use peer_review::{logging, AppConfig, AppError, AppFlags, ReviewApp};
use std::sync::Arc;

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let logging = logging::init(&config.log_dir)?;
    tracing::info!(
        submit_delay_ms = config.submit_delay.as_millis() as u64,
        fps = config.fps,
        "starting peer review form"
    );

    let flags = AppFlags {
        directory: Directory::builtin(),
        submitter: Arc::new(SimulatedSubmitter::new(config.submit_delay)),
    };
    review_runtime::run_with::<ReviewApp>(flags, config.program_options()).await?;

    tracing::info!(log_dir = %logging.log_dir().display(), "peer review form closed");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run().await?;
    Ok(())
}
