use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use duoscribe::application::ports::StagingStore;
use duoscribe::application::services::TranscriptionService;
use duoscribe::domain::TranscriptionProvider;
use duoscribe::infrastructure::audio::{PollPolicy, TranscriptionEngineFactory};
use duoscribe::infrastructure::observability::{TracingConfig, init_tracing};
use duoscribe::infrastructure::storage::LocalStagingStore;
use duoscribe::presentation::config::ProviderSettings;
use duoscribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let defaults = TracingConfig::default();
    let tracing_config = TracingConfig {
        environment: environment.to_string(),
        json_format: defaults.json_format || settings.logging.enable_json,
        default_directives: format!(
            "{},duoscribe=debug,tower_http=debug",
            settings.logging.level
        ),
    };
    init_tracing(&tracing_config);

    let staging_store: Arc<dyn StagingStore> = Arc::new(
        LocalStagingStore::new(PathBuf::from(&settings.storage.upload_dir))
            .context("Failed to prepare upload directory")?,
    );

    let mut service = TranscriptionService::new(Arc::clone(&staging_store));
    for (provider, provider_settings) in [
        (TranscriptionProvider::RevAi, &settings.rev_ai),
        (TranscriptionProvider::AssemblyAi, &settings.assembly_ai),
    ] {
        service = register_engine(service, provider, provider_settings);
    }

    let state = AppState {
        transcription_service: Arc::new(service),
        staging_store,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let ip = settings
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server host: {}", settings.server.host))?;
    let addr = SocketAddr::new(ip, settings.server.port);
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn register_engine(
    service: TranscriptionService,
    provider: TranscriptionProvider,
    settings: &ProviderSettings,
) -> TranscriptionService {
    let poll_policy = PollPolicy::from_settings(settings.poll_interval_ms, settings.max_poll_attempts);

    match TranscriptionEngineFactory::create(
        provider,
        settings.api_key.clone(),
        settings.base_url.clone(),
        poll_policy,
    ) {
        Ok(engine) => {
            tracing::info!(provider = %provider, ?poll_policy, "Transcription engine ready");
            service.with_engine(provider, engine)
        }
        Err(e) => {
            tracing::warn!(provider = %provider, error = %e, "Transcription engine disabled");
            service
        }
    }
}
