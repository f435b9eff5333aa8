//! Servidor web Axum com WebSocket para visualização da geração de features
//! em tempo real: o navegador envia uma sentença (e opcionalmente um
//! descritor de pipeline) e recebe, token a token, as features que o
//! rotulador veria.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use featgen_core::{FeatureEvent, FeatureGenPipeline, GeneratorDescriptor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use unicode_segmentation::UnicodeSegmentation;

/// Estado compartilhado da aplicação
struct AppState {
    /// Pipeline com a configuração de fábrica, usado quando a requisição
    /// não traz descritor próprio
    pipeline: FeatureGenPipeline,
}

#[derive(Deserialize)]
struct FeaturizeRequest {
    text: String,
    /// Descritor declarativo opcional; ausente usa a configuração padrão
    #[serde(default)]
    descriptor: Option<GeneratorDescriptor>,
}

/// Mensagem WebSocket recebida do cliente
#[derive(Deserialize)]
struct WsRequest {
    text: String,
    #[serde(default)]
    descriptor: Option<GeneratorDescriptor>,
}

#[derive(Serialize)]
struct FeaturizeResponse {
    tokens: Vec<String>,
    features: Vec<Vec<String>>,
    total_features: usize,
}

/// Tokenização simples por fronteiras de palavra Unicode.
///
/// O subsistema de features recebe sentenças já tokenizadas; aqui no
/// servidor de demonstração nós somos o chamador, então a quebra fica
/// deste lado.
fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|w| !w.trim().is_empty())
        .map(|w| w.to_string())
        .collect()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let state = Arc::new(AppState {
        pipeline: FeatureGenPipeline::default(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/featurize", post(featurize_handler))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("🔎 Visualizador de features iniciado em http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Featurização via HTTP POST (sem streaming)
async fn featurize_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FeaturizeRequest>,
) -> impl IntoResponse {
    if req.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Texto vazio"})),
        )
            .into_response();
    }

    // Descritor customizado é validado aqui, antes de qualquer geração
    let custom = match &req.descriptor {
        Some(descriptor) => match FeatureGenPipeline::from_descriptor(descriptor) {
            Ok(pipeline) => Some(pipeline),
            Err(e) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(serde_json::json!({"error": e.to_string()})),
                )
                    .into_response();
            }
        },
        None => None,
    };

    let tokens = tokenize(&req.text);
    let pipeline = custom.as_ref().unwrap_or(&state.pipeline);
    let features = pipeline.featurize(&tokens);
    let total_features = features.iter().map(Vec::len).sum();

    Json(FeaturizeResponse {
        tokens,
        features,
        total_features,
    })
    .into_response()
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe a sentença, featuriza e envia os eventos
/// em tempo real para o cliente
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                // Tenta parsear como JSON {text, descriptor}; senão usa como texto puro
                let (text_str, descriptor) =
                    if let Ok(req) = serde_json::from_str::<WsRequest>(&text) {
                        (req.text.trim().to_string(), req.descriptor)
                    } else {
                        (text.trim().to_string(), None)
                    };

                if text_str.is_empty() {
                    continue;
                }

                // Montagem do pipeline falha cedo; o cliente recebe o motivo
                let custom = match &descriptor {
                    Some(d) => match FeatureGenPipeline::from_descriptor(d) {
                        Ok(pipeline) => Some(pipeline),
                        Err(e) => {
                            let payload = serde_json::json!({
                                "type": "Error",
                                "data": { "message": e.to_string() }
                            });
                            if socket.send(Message::Text(payload.to_string().into())).await.is_err() {
                                return;
                            }
                            continue;
                        }
                    },
                    None => None,
                };

                let tokens = tokenize(&text_str);
                info!("Featurizando via WebSocket: {} tokens", tokens.len());

                // Executa em spawn_blocking para não bloquear o runtime
                let (tx_std, rx_std) = std::sync::mpsc::channel::<FeatureEvent>();
                let state_for_thread = Arc::clone(&state);

                let handle = tokio::task::spawn_blocking(move || {
                    let pipeline = custom.as_ref().unwrap_or(&state_for_thread.pipeline);
                    pipeline.featurize_streaming(&tokens, tx_std);
                });
                handle.await.ok();

                // Coleta os eventos e reenvia com pequena pausa para animação
                let events: Vec<FeatureEvent> = rx_std.try_iter().collect();
                for event in &events {
                    if let Ok(json) = serde_json::to_string(event) {
                        if socket.send(Message::Text(json.into())).await.is_err() {
                            return; // cliente desconectou
                        }
                        tokio::time::sleep(tokio::time::Duration::from_millis(35)).await;
                    }
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}
