//! # Módulo Inference — Motor de Inferência Fuzzy Mamdani
//!
//! Este módulo contém o **motor de inferência** do avaliador: transforma
//! quatro medições crisp em um score de qualidade e uma categoria.
//!
//! ## Pipeline
//!
//! ```text
//! SoilSample ──▶ fuzzify ──▶ regras (min/max) ──▶ agregação (max)
//!                                                    │
//!          Category ◀── classify ◀── score ◀── defuzzify
//! ```
//!
//! | Etapa | Módulo | Operador |
//! |-------|--------|----------|
//! | Fuzzificação | [`fuzzifier`] | triangular / trapezoidal |
//! | Disparo das regras | [`rules`] | AND = `min`, OR = `max` |
//! | Agregação | [`aggregation`] | `max` por categoria |
//! | Defuzzificação | [`defuzzify`] | centróide (discretizado ou forma fechada) |
//! | Classificação | [`classify`](mod@classify) | limites 40 / 70 |
//!
//! Cada avaliação é pura e síncrona: mesma entrada, mesma saída, sem
//! estado compartilhado mutável. Veja [`InferenceEngine`] para detalhes.

/// Sub-módulo de fuzzificação das entradas.
pub mod fuzzifier;

/// Sub-módulo com a avaliação das regras e as explicações.
pub mod rules;

/// Sub-módulo de agregação por categoria.
pub mod aggregation;

/// Sub-módulo de defuzzificação.
pub mod defuzzify;

/// Sub-módulo de classificação do score.
pub mod classify;

use rayon::prelude::*;
use serde::Serialize;

use crate::core::{Category, FuzzySystem, InputError, SoilSample};

pub use aggregation::{aggregate, Aggregated};
pub use classify::classify;
pub use defuzzify::{defuzzify, DefuzzMethod, DEFAULT_STEP, NEUTRAL_SCORE};
pub use fuzzifier::{fuzzify, Fuzzified};
pub use rules::{describe_rule, firing_strength, RuleFiring};

/// Resultado de uma avaliação: score em `[0, 100]` e categoria.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Assessment {
    pub score: f64,
    pub category: Category,
}

/// Avaliação completa com todos os passos intermediários.
///
/// É a superfície de "explicação": mostra por que a amostra recebeu
/// aquele score, regra por regra.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluationTrace {
    pub sample: SoilSample,
    pub fuzzified: Fuzzified,
    pub firings: Vec<RuleFiring>,
    pub aggregated: Aggregated,
    pub method: DefuzzMethod,
    pub score: f64,
    pub category: Category,
}

impl EvaluationTrace {
    pub fn assessment(&self) -> Assessment {
        Assessment {
            score: self.score,
            category: self.category,
        }
    }

    /// Só as regras com força maior que zero.
    pub fn fired(&self) -> impl Iterator<Item = &RuleFiring> {
        self.firings.iter().filter(|f| !f.strength.is_zero())
    }
}

/// Motor de inferência Mamdani — struct sem estado, totalmente funcional.
///
/// O motor não armazena estado: recebe o [`FuzzySystem`] por referência e
/// devolve o resultado. Isso permite uso simples e thread-safe.
///
/// ## Uso
///
/// ```rust
/// use soil_quality::core::{FuzzySystem, SoilSample};
/// use soil_quality::inference::InferenceEngine;
///
/// let system = FuzzySystem::builtin();
/// let trace = InferenceEngine::trace(system, &SoilSample::new(5.5, 50.0, 25.0, 1.0));
/// for firing in trace.fired() {
///     println!("{}", firing.explanation);
/// }
/// ```
pub struct InferenceEngine;

impl InferenceEngine {
    /// Avalia uma amostra sem montar as explicações.
    pub fn evaluate(system: &FuzzySystem, sample: &SoilSample) -> Assessment {
        let fuzzified = fuzzify(system, sample);
        let aggregated = aggregate(rules::strengths(system.rules(), &fuzzified));
        let score = defuzzify(system.method(), system.output(), &aggregated);
        let category = classify(score);

        tracing::trace!(?sample, score, %category, "Amostra avaliada");

        Assessment { score, category }
    }

    /// Avalia uma amostra guardando fuzzificação, disparos e agregação.
    pub fn trace(system: &FuzzySystem, sample: &SoilSample) -> EvaluationTrace {
        let fuzzified = fuzzify(system, sample);
        let firings = rules::fire_all(system, &fuzzified);
        let aggregated = aggregate(firings.iter().map(|f| (f.consequent, f.strength)));
        let score = defuzzify(system.method(), system.output(), &aggregated);
        let category = classify(score);

        tracing::debug!(
            fired = firings.iter().filter(|f| !f.strength.is_zero()).count(),
            score,
            %category,
            "Avaliação com rastreamento"
        );

        EvaluationTrace {
            sample: *sample,
            fuzzified,
            firings,
            aggregated,
            method: system.method(),
            score,
            category,
        }
    }

    /// Avalia várias amostras em paralelo (rayon), preservando a ordem.
    pub fn evaluate_batch(system: &FuzzySystem, samples: &[SoilSample]) -> Vec<Assessment> {
        let _span = tracing::info_span!("evaluate_batch", samples = samples.len()).entered();
        samples
            .par_iter()
            .map(|sample| InferenceEngine::evaluate(system, sample))
            .collect()
    }
}

/// Valida as quatro medições na fronteira, rejeitando `NaN` e `±∞`.
pub fn checked_sample(
    acidity: f64,
    nutrition: f64,
    heavy_metal: f64,
    organic_matter: f64,
) -> Result<SoilSample, InputError> {
    SoilSample::checked(acidity, nutrition, heavy_metal, organic_matter)
}

/// Avalia com o sistema padrão do processo.
///
/// ```rust
/// use soil_quality::core::Category;
/// use soil_quality::inference::evaluate;
///
/// let (score, category) = evaluate(5.0, 100.0, 10.0, 3.5);
/// assert_eq!((score, category), (50.0, Category::Medium));
/// ```
pub fn evaluate(
    acidity: f64,
    nutrition: f64,
    heavy_metal: f64,
    organic_matter: f64,
) -> (f64, Category) {
    let sample = SoilSample::new(acidity, nutrition, heavy_metal, organic_matter);
    let Assessment { score, category } = FuzzySystem::builtin().evaluate(&sample);
    (score, category)
}
