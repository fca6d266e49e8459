mod bot;
mod config;
mod models;
mod providers;
mod speech;

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Form, Router,
};
use bot::TravelBot;
use config::Config;
use models::{AskForm, AskResponse};
use speech::{CommandSynthesizer, SpeechSynthesizer};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info, instrument};

#[derive(Clone)]
struct AppState {
    bot: Arc<TravelBot>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("travelbot=debug,tower_http=info")
        .init();

    let config = Arc::new(Config::from_env()?);
    tokio::fs::create_dir_all(&config.audio_dir).await?;

    let synthesizer: Arc<dyn SpeechSynthesizer> =
        Arc::new(CommandSynthesizer::new(config.tts_command.clone()));
    let bot = Arc::new(TravelBot::new(config.clone(), synthesizer));
    let state = AppState { bot };

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ask", post(ask))
        .nest_service("/audio", ServeDir::new(&config.audio_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("travelbot listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn health() -> &'static str {
    "OK"
}

#[instrument(skip(state))]
async fn ask(
    State(state): State<AppState>,
    Form(form): Form<AskForm>,
) -> Result<Json<AskResponse>, (StatusCode, Json<AskResponse>)> {
    match state.bot.respond(&form.user_input).await {
        Ok(reply) => Ok(Json(AskResponse {
            response: reply.text,
            audio_url: reply.audio_url,
        })),
        Err(e) => {
            error!("failed to process query: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AskResponse {
                    response: "There was an error processing your request.".to_string(),
                    audio_url: String::new(),
                }),
            ))
        }
    }
}
