//! # Defuzzificação — Do Conjunto Agregado ao Score
//!
//! Dois métodos, escolhidos uma única vez na montagem do sistema:
//!
//! | Método | Cálculo | Padrão |
//! |--------|---------|--------|
//! | [`Discretized`](DefuzzMethod::Discretized) | centróide amostrado no universo de saída | ✓ (passo 0.1) |
//! | [`ClosedForm`](DefuzzMethod::ClosedForm) | média ponderada dos centróides fixos 25/50/75 | |
//!
//! ## Centróide Discretizado
//!
//! ```text
//! μ(x) = max_c min(agregado(c), forma_c(x))
//! score = Σ x·μ(x) / Σ μ(x)     n = round(largura/passo), x = min + i·largura/n, i = 0..=n
//! ```
//!
//! Os `n + 1` pontos são igualmente espaçados e gerados por índice inteiro:
//! as duas pontas do universo sempre entram e não há acúmulo de erro de ponto
//! flutuante. Um passo que não divide a largura é arredondado para o
//! espaçamento uniforme mais próximo. O número de intervalos é limitado por
//! [`MAX_SAMPLES`].
//!
//! Se nada disparou (`Σ μ = 0`), o score é o neutro [`NEUTRAL_SCORE`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Category, ConfigError, LinguisticVariable, Universe};

use super::Aggregated;

/// Score devolvido quando nenhuma regra dispara.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Passo padrão do centróide discretizado.
pub const DEFAULT_STEP: f64 = 0.1;

/// Número máximo de intervalos do centróide discretizado.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Método de defuzzificação de um sistema.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum DefuzzMethod {
    /// Centróide sobre o universo amostrado com `step`.
    Discretized { step: f64 },
    /// Média ponderada dos centróides fixos de cada categoria.
    ClosedForm,
}

impl Default for DefuzzMethod {
    fn default() -> Self {
        DefuzzMethod::Discretized { step: DEFAULT_STEP }
    }
}

impl DefuzzMethod {
    /// Valida o passo contra o universo de saída.
    ///
    /// O passo precisa caber no universo e gerar no máximo [`MAX_SAMPLES`]
    /// intervalos.
    pub fn validate(&self, universe: &Universe) -> Result<(), ConfigError> {
        match *self {
            DefuzzMethod::Discretized { step } => {
                if !step.is_finite() || step <= 0.0 || step > universe.width() {
                    return Err(ConfigError::InvalidStep(step));
                }
                if universe.width() / step > MAX_SAMPLES as f64 {
                    return Err(ConfigError::InvalidStep(step));
                }
                Ok(())
            }
            DefuzzMethod::ClosedForm => Ok(()),
        }
    }

    /// Nome curto (`"discretized"` / `"closed_form"`).
    pub fn name(&self) -> &'static str {
        match self {
            DefuzzMethod::Discretized { .. } => "discretized",
            DefuzzMethod::ClosedForm => "closed_form",
        }
    }
}

impl fmt::Display for DefuzzMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefuzzMethod::Discretized { step } => write!(f, "discretized (step {step})"),
            DefuzzMethod::ClosedForm => f.write_str("closed_form"),
        }
    }
}

/// Converte as forças agregadas em um score dentro do universo de saída.
///
/// `output.sets` segue a ordem de [`Category::ALL`].
pub fn defuzzify(method: DefuzzMethod, output: &LinguisticVariable, aggregated: &Aggregated) -> f64 {
    let score = match method {
        DefuzzMethod::Discretized { step } => discretized_centroid(step, output, aggregated),
        DefuzzMethod::ClosedForm => closed_form(aggregated),
    };
    score.clamp(output.universe.min, output.universe.max)
}

fn discretized_centroid(step: f64, output: &LinguisticVariable, aggregated: &Aggregated) -> f64 {
    let universe = output.universe;
    let intervals = ((universe.width() / step).round() as usize).clamp(1, MAX_SAMPLES);
    let spacing = universe.width() / intervals as f64;

    let mut weighted = 0.0;
    let mut total = 0.0;
    for i in 0..=intervals {
        let x = if i == intervals {
            universe.max
        } else {
            universe.min + i as f64 * spacing
        };
        let mu = Category::ALL
            .iter()
            .map(|c| {
                aggregated
                    .get(*c)
                    .and(output.set(c.index()).shape.degree(x))
                    .value()
            })
            .fold(0.0, f64::max);
        weighted += x * mu;
        total += mu;
    }

    if total == 0.0 {
        return NEUTRAL_SCORE;
    }
    weighted / total
}

fn closed_form(aggregated: &Aggregated) -> f64 {
    let (weighted, total) = Category::ALL.iter().fold((0.0, 0.0), |(w, t), c| {
        let s = aggregated.get(*c).value();
        (w + s * c.centroid(), t + s)
    });

    if total == 0.0 {
        return NEUTRAL_SCORE;
    }
    weighted / total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Degree, FuzzySystem};

    fn output() -> &'static LinguisticVariable {
        FuzzySystem::builtin().output()
    }

    fn agg(bad: f64, medium: f64, good: f64) -> Aggregated {
        Aggregated {
            bad: Degree::new(bad),
            medium: Degree::new(medium),
            good: Degree::new(good),
        }
    }

    #[test]
    fn nothing_fired_is_neutral() {
        let empty = Aggregated::default();
        assert_eq!(defuzzify(DefuzzMethod::default(), output(), &empty), 50.0);
        assert_eq!(defuzzify(DefuzzMethod::ClosedForm, output(), &empty), 50.0);
    }

    #[test]
    fn symmetric_medium_centroid_is_fifty() {
        let score = defuzzify(DefuzzMethod::default(), output(), &agg(0.0, 0.7, 0.0));
        assert!((score - 50.0).abs() < 1e-6, "score = {score}");
    }

    #[test]
    fn single_category_centroids() {
        // bad [0,0,50] cheio: centróide do triângulo = 50/3
        let bad = defuzzify(DefuzzMethod::default(), output(), &agg(1.0, 0.0, 0.0));
        assert!((bad - 50.0 / 3.0).abs() < 0.1, "bad = {bad}");

        // good [50,100,100] cheio: centróide = 250/3
        let good = defuzzify(DefuzzMethod::default(), output(), &agg(0.0, 0.0, 1.0));
        assert!((good - 250.0 / 3.0).abs() < 0.1, "good = {good}");
    }

    #[test]
    fn closed_form_is_weighted_average_of_fixed_centroids() {
        assert_eq!(defuzzify(DefuzzMethod::ClosedForm, output(), &agg(1.0, 0.0, 0.0)), 25.0);
        let good = defuzzify(DefuzzMethod::ClosedForm, output(), &agg(0.0, 0.0, 0.4));
        assert!((good - 75.0).abs() < 1e-9);
        let mixed = defuzzify(DefuzzMethod::ClosedForm, output(), &agg(0.5, 0.0, 0.5));
        assert!((mixed - 50.0).abs() < 1e-12);
    }

    #[test]
    fn coarse_step_is_spread_evenly() {
        // passo 40 → 3 intervalos: 0, 33.3, 66.7, 100
        let coarse = defuzzify(DefuzzMethod::Discretized { step: 40.0 }, output(), &agg(0.0, 0.0, 1.0));
        let even = defuzzify(
            DefuzzMethod::Discretized { step: 100.0 / 3.0 },
            output(),
            &agg(0.0, 0.0, 1.0),
        );
        assert!((coarse - even).abs() < 1e-9, "coarse = {coarse}, even = {even}");

        // μ(66.7) = 1/3, μ(100) = 1
        let expected = (200.0 / 3.0 / 3.0 + 100.0) / (1.0 / 3.0 + 1.0);
        assert!((coarse - expected).abs() < 1e-9, "coarse = {coarse}");
    }

    #[test]
    fn exact_step_matches_triangle_samples() {
        // passo 25: 0, 25, 50, 75, 100 → μ = 0, 0, 0, 0.5, 1
        let score = defuzzify(DefuzzMethod::Discretized { step: 25.0 }, output(), &agg(0.0, 0.0, 1.0));
        assert!((score - 137.5 / 1.5).abs() < 1e-9, "score = {score}");
    }

    #[test]
    fn invalid_steps_are_rejected() {
        let universe = output().universe;
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY, 150.0, 1e-300, 1e-9, 1e-5] {
            assert!(
                DefuzzMethod::Discretized { step }.validate(&universe).is_err(),
                "passo {step} aceito"
            );
        }
        // metade do limite de intervalos ainda é aceita
        let fine = 2.0 * universe.width() / MAX_SAMPLES as f64;
        assert!(DefuzzMethod::Discretized { step: fine }.validate(&universe).is_ok());
        assert!(DefuzzMethod::default().validate(&universe).is_ok());
        assert!(DefuzzMethod::ClosedForm.validate(&universe).is_ok());
    }
}
