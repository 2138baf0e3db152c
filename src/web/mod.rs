//! # Módulo Web — API HTTP do Avaliador
//!
//! Este módulo organiza toda a camada web da aplicação, construída
//! com **Axum** + **Maud** (+ HTMX no formulário).
//!
//! ## Arquitetura Web
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ Browser / cliente HTTP                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo) + CORS                            │
//! │  ├── GET  /                         → página (regras+tabela)│
//! │  ├── GET  /status                   → JSON: método, amostras│
//! │  ├── POST /evaluate                 → JSON: rastreamento    │
//! │  ├── POST /evaluate/batch           → JSON: avaliações      │
//! │  ├── POST /evaluate/form            → HTMX fragment         │
//! │  ├── GET  /variables/{name}/curve   → JSON: curvas          │
//! │  ├── GET  /rules                    → JSON: regras          │
//! │  └── POST /dataset/reload           → JSON: relê o CSV      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use anyhow::{Context, Result};
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// O estado `AppState` é compartilhado entre todos os handlers via
/// extrator `State<AppState>` do Axum.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── API JSON ──────────────────────────────────────────
        .route("/status", get(handlers::status))
        .route("/evaluate", post(handlers::evaluate))
        .route("/evaluate/batch", post(handlers::evaluate_batch))
        .route("/variables/{name}/curve", get(handlers::variable_curve))
        .route("/rules", get(handlers::rules))
        .route("/dataset/reload", post(handlers::reload_dataset))
        // ── HTMX fragment ────────────────────────────────────
        .route("/evaluate/form", post(handlers::evaluate_form))
        .fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

/// Sobe o servidor em `addr` até Ctrl+C.
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Falha ao fazer bind em {addr}"))?;
    tracing::info!(%addr, "🚀 Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Servidor axum falhou")?;

    tracing::info!("Servidor encerrado");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Falha ao instalar handler de Ctrl+C");
        std::future::pending::<()>().await;
    }
}
