use std::sync::Arc;

use studybuddy::AnswerResolver;

mod adapters;
mod config;
mod models;
mod routes;

use adapters::OpenAiCompletionProvider;
use config::ServerConfig;

/// Resolver with the concrete completion adapter
pub type AppResolver = AnswerResolver<OpenAiCompletionProvider>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<AppResolver>,
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📚 AI Study Buddy initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key))?;

    if config.openai_api_key.is_some() {
        tracing::info!("🤖 Completion service enabled (model: {})", config.openai_model);
    } else {
        tracing::warn!("⚠️  No OPENAI_API_KEY set - unmatched questions will answer with an API error");
    }

    let provider = OpenAiCompletionProvider::new(config.openai_api_key)
        .with_base_url(config.openai_base_url)
        .with_model(config.openai_model);
    let resolver = Arc::new(AnswerResolver::new(Arc::new(provider), config.completion));

    let state = AppState { resolver };
    let router = routes::router(state);

    tracing::info!("📖 Swagger UI: /swagger-ui");
    tracing::info!("✅ AI Study Buddy ready");

    Ok(router.into())
}
