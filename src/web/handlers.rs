//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`]. A API é JSON, exceto a página
//! principal e o fragmento HTMX do formulário de avaliação.
//!
//! ## Padrão de Resposta
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Regras + tabela do dataset (Maud) |
//! | `status` | GET | JSON | Método e tamanho do dataset |
//! | `evaluate` | POST | JSON | Avaliação com explicação |
//! | `evaluate_batch` | POST | JSON | Lista de avaliações (rayon) |
//! | `evaluate_form` | POST | HTMX fragment | Resultado do formulário |
//! | `variable_curve` | GET | JSON | Curvas de pertinência |
//! | `rules` | GET | JSON | Regras em texto legível |
//! | `reload_dataset` | POST | JSON | Relê o CSV |
//!
//! ## Validação na Fronteira
//!
//! Toda amostra recebida passa por [`SoilSample::validate`]: `NaN` e `±∞`
//! viram `400 Bad Request` antes de chegar ao motor. Valores finitos fora
//! do universo nominal são aceitos.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use maud::html;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::AppState;
use super::templates;
use crate::core::{CurvePoint, SoilSample, Universe, MAX_CURVE_POINTS};
use crate::inference::{describe_rule, Assessment, EvaluationTrace};
use crate::report;

/// Erro de API — vira `{ "error": "..." }` com o status correspondente.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Resposta do endpoint `/status`.
#[derive(Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    /// Nome do método de defuzzificação do servidor.
    pub method: &'static str,
    /// Linhas do dataset em memória.
    pub samples: usize,
}

/// Curvas de uma variável para plotagem no cliente.
#[derive(Serialize)]
pub struct CurveResponse {
    pub variable: &'static str,
    pub universe: Universe,
    /// Rótulos na ordem de `points[i].degrees`.
    pub labels: [&'static str; 3],
    pub points: Vec<CurvePoint>,
}

#[derive(Deserialize)]
pub struct CurveQuery {
    pub points: Option<usize>,
}

/// Regra em formato legível.
#[derive(Serialize)]
pub struct RuleView {
    pub id: usize,
    pub text: String,
}

#[derive(Serialize)]
pub struct ReloadResponse {
    pub samples: usize,
}

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

fn validate(sample: &SoilSample) -> Result<(), ApiError> {
    sample
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// GET `/` — Página principal.
///
/// Avalia o dataset atual e renderiza a página com regras, tabela e formulário.
/// A avaliação do dataset roda em `spawn_blocking`, como em [`evaluate_batch`].
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let rows = state.dataset.read().clone();
    let system = state.system.clone();
    let page = tokio::task::spawn_blocking(move || {
        let report = report::build_report(&system, &rows);
        templates::full_page(&system, &report)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Renderização da página falhou");
        ApiError::Internal("renderização da página falhou".to_string())
    })?;
    Ok(markup_to_html(page))
}

/// GET `/status` — Método em uso e tamanho do dataset.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ready: true,
        method: state.system.method().name(),
        samples: state.dataset.read().len(),
    })
}

/// POST `/evaluate` — Avalia uma amostra e devolve o rastreamento completo.
pub async fn evaluate(
    State(state): State<AppState>,
    Json(sample): Json<SoilSample>,
) -> Result<Json<EvaluationTrace>, ApiError> {
    validate(&sample)?;
    Ok(Json(state.system.trace(&sample)))
}

/// POST `/evaluate/batch` — Avalia uma lista de amostras.
///
/// A avaliação em lote roda em `spawn_blocking` porque é CPU-bound
/// (rayon) e não deve bloquear o executor async do Tokio.
pub async fn evaluate_batch(
    State(state): State<AppState>,
    Json(samples): Json<Vec<SoilSample>>,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    for (i, sample) in samples.iter().enumerate() {
        sample
            .validate()
            .map_err(|e| ApiError::BadRequest(format!("amostra {i}: {e}")))?;
    }

    let system = state.system.clone();
    let assessments = tokio::task::spawn_blocking(move || system.evaluate_batch(&samples))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Avaliação em lote falhou");
            ApiError::Internal("avaliação em lote falhou".to_string())
        })?;

    Ok(Json(assessments))
}

/// POST `/evaluate/form` — Formulário da página principal (HTMX fragment).
pub async fn evaluate_form(
    State(state): State<AppState>,
    axum::Form(sample): axum::Form<SoilSample>,
) -> Result<Html<String>, ApiError> {
    validate(&sample)?;
    let trace = state.system.trace(&sample);
    Ok(markup_to_html(templates::trace_fragment(&trace)))
}

/// GET `/variables/{name}/curve?points=N` — Curvas de pertinência.
pub async fn variable_curve(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<CurveQuery>,
) -> Result<Json<CurveResponse>, ApiError> {
    let variable = state
        .system
        .variable(&name)
        .ok_or_else(|| ApiError::NotFound(format!("variável desconhecida: {name}")))?;
    let points = query.points.unwrap_or(51).clamp(2, MAX_CURVE_POINTS);

    Ok(Json(CurveResponse {
        variable: variable.name,
        universe: variable.universe,
        labels: variable.sets.map(|s| s.label),
        points: variable.curve(points),
    }))
}

/// GET `/rules` — Regras do sistema em texto.
pub async fn rules(State(state): State<AppState>) -> Json<Vec<RuleView>> {
    let rules = state
        .system
        .rules()
        .iter()
        .map(|rule| RuleView {
            id: rule.id,
            text: describe_rule(&state.system, rule),
        })
        .collect();
    Json(rules)
}

/// POST `/dataset/reload` — Relê o CSV do disco.
pub async fn reload_dataset(State(state): State<AppState>) -> Result<Json<ReloadResponse>, ApiError> {
    let samples = state.reload_dataset().map_err(|e| {
        tracing::warn!(error = %e, "Falha ao recarregar dataset");
        ApiError::Internal(e.to_string())
    })?;
    tracing::info!(samples, "Dataset recarregado");
    Ok(Json(ReloadResponse { samples }))
}

/// Fallback para rotas desconhecidas.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        markup_to_html(html! { p { "Página não encontrada." } }),
    )
}
