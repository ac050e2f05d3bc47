use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use audiograb::application::ports::CredentialProvider;
use audiograb::application::services::{AudioService, ScratchSweeper, ScratchWorkspace};
use audiograb::infrastructure::credentials::CookieFileProvider;
use audiograb::infrastructure::extraction::YtDlpExtractor;
use audiograb::infrastructure::observability::init_tracing;
use audiograb::infrastructure::transcoding::FfmpegTranscoder;
use audiograb::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    init_tracing(&settings.tracing_config(environment), addr);

    let workspace = Arc::new(
        ScratchWorkspace::new(settings.workspace_root())
            .context("Failed to create scratch workspace")?,
    );
    tracing::info!(root = %workspace.root().display(), "Scratch workspace ready");

    let cookie_provider = CookieFileProvider::from_env(
        &settings.credentials.env_var,
        workspace.root().join(&settings.credentials.scratch_file_name),
        settings.credentials.local_file.as_ref().map(PathBuf::from),
    );
    tracing::info!(
        inline_cookies = cookie_provider.has_inline_content(),
        "Credential provisioning configured"
    );
    let credentials: Arc<dyn CredentialProvider> = Arc::new(cookie_provider);

    let audio_service = Arc::new(AudioService::new(
        Arc::new(YtDlpExtractor::new(settings.yt_dlp_config())),
        Arc::new(FfmpegTranscoder::new(settings.ffmpeg_config())),
        credentials,
        Arc::clone(&workspace),
        settings.audio_service_config(),
    ));

    let sweeper = ScratchSweeper::new(
        Arc::clone(&workspace),
        Duration::from_secs(settings.workspace.retention_secs),
        Duration::from_secs(settings.workspace.sweep_interval_secs.max(1)),
    );
    tokio::spawn(sweeper.run());

    let state = AppState { audio_service };
    let router = create_router(state, &PathBuf::from(&settings.server.index_file));

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
