//! # Comparação — Centróide Discretizado vs. Forma Fechada
//!
//! Monta **dois sistemas independentes** com as mesmas tabelas e métodos
//! de defuzzificação diferentes, avalia as mesmas amostras em cada um e
//! compara scores, categorias e tempo de execução.
//!
//! Os dois sistemas nunca se misturam: cada avaliação usa um único método.
//!
//! ## Veredito de Precisão
//!
//! | Diferença média | Veredito |
//! |-----------------|----------|
//! | `< 5` | very good |
//! | `< 10` | good |
//! | `≥ 10` | needs work |

use std::fmt::{self, Write as _};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::core::{Category, ConfigError, FuzzySystem, SoilSample};
use crate::dataset::DatasetRow;
use crate::inference::DefuzzMethod;

/// Veredito sobre a diferença média entre os métodos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    VeryGood,
    Good,
    NeedsWork,
}

impl Verdict {
    pub fn from_average_difference(avg: f64) -> Self {
        if avg < 5.0 {
            Verdict::VeryGood
        } else if avg < 10.0 {
            Verdict::Good
        } else {
            Verdict::NeedsWork
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::VeryGood => "very good (diferença < 5)",
            Verdict::Good => "good (diferença < 10)",
            Verdict::NeedsWork => "needs work (diferença ≥ 10)",
        })
    }
}

/// Resultado de uma amostra nos dois métodos.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseComparison {
    pub no: u32,
    pub discretized: f64,
    pub discretized_category: Category,
    pub closed_form: f64,
    pub closed_form_category: Category,
    pub difference: f64,
}

/// Tempo gasto por um método em todas as iterações.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timing {
    pub method: DefuzzMethod,
    pub evaluations: usize,
    pub total_ms: f64,
    pub per_evaluation_us: f64,
}

impl Timing {
    fn new(method: DefuzzMethod, evaluations: usize, elapsed: Duration) -> Self {
        let per_evaluation_us = if evaluations == 0 {
            0.0
        } else {
            elapsed.as_secs_f64() * 1e6 / evaluations as f64
        };
        Self {
            method,
            evaluations,
            total_ms: elapsed.as_secs_f64() * 1e3,
            per_evaluation_us,
        }
    }
}

/// Comparação completa entre os dois métodos.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub cases: Vec<CaseComparison>,
    pub average_difference: f64,
    pub verdict: Verdict,
    pub discretized_timing: Timing,
    pub closed_form_timing: Timing,
}

/// Compara os dois métodos sobre `rows`, repetindo a avaliação `iterations` vezes
/// para medir tempo.
pub fn compare_methods(
    rows: &[DatasetRow],
    iterations: usize,
    step: f64,
) -> Result<Comparison, ConfigError> {
    let discretized = FuzzySystem::soil_quality(DefuzzMethod::Discretized { step })?;
    let closed_form = FuzzySystem::soil_quality(DefuzzMethod::ClosedForm)?;

    let cases: Vec<CaseComparison> = rows
        .iter()
        .map(|row| {
            let d = discretized.evaluate(&row.sample);
            let c = closed_form.evaluate(&row.sample);
            CaseComparison {
                no: row.no,
                discretized: d.score,
                discretized_category: d.category,
                closed_form: c.score,
                closed_form_category: c.category,
                difference: (d.score - c.score).abs(),
            }
        })
        .collect();

    let average_difference = if cases.is_empty() {
        0.0
    } else {
        cases.iter().map(|c| c.difference).sum::<f64>() / cases.len() as f64
    };

    let samples: Vec<SoilSample> = rows.iter().map(|r| r.sample).collect();
    let discretized_timing = time(&discretized, &samples, iterations);
    let closed_form_timing = time(&closed_form, &samples, iterations);

    let verdict = Verdict::from_average_difference(average_difference);
    tracing::info!(
        cases = cases.len(),
        iterations,
        average_difference,
        ?verdict,
        "Comparação concluída"
    );

    Ok(Comparison {
        cases,
        average_difference,
        verdict,
        discretized_timing,
        closed_form_timing,
    })
}

fn time(system: &FuzzySystem, samples: &[SoilSample], iterations: usize) -> Timing {
    let start = Instant::now();
    for _ in 0..iterations {
        for sample in samples {
            std::hint::black_box(system.evaluate(std::hint::black_box(sample)));
        }
    }
    Timing::new(system.method(), iterations * samples.len(), start.elapsed())
}

/// Renderiza a comparação como texto para o terminal.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== DESEMPENHO ===");
    for timing in [&comparison.discretized_timing, &comparison.closed_form_timing] {
        let _ = writeln!(
            out,
            "{:<12} {:>8} avaliações  {:>10.3} ms  {:>8.3} µs/avaliação",
            timing.method.name(),
            timing.evaluations,
            timing.total_ms,
            timing.per_evaluation_us
        );
    }
    if comparison.closed_form_timing.total_ms > 0.0 {
        let ratio = comparison.discretized_timing.total_ms / comparison.closed_form_timing.total_ms;
        let _ = writeln!(out, "Razão discretized / closed_form: {ratio:.2}x");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "=== PRECISÃO ===");
    let _ = writeln!(
        out,
        "Case | Discretized | Closed form | Difference | Discretized cat | Closed form cat"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));
    for case in &comparison.cases {
        let _ = writeln!(
            out,
            "{:4} | {:11.2} | {:11.2} | {:10.2} | {:15} | {}",
            case.no,
            case.discretized,
            case.closed_form,
            case.difference,
            case.discretized_category.label(),
            case.closed_form_category
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(80));
    let _ = writeln!(out, "Diferença média: {:.2}", comparison.average_difference);
    let _ = writeln!(out, "Precisão: {}", comparison.verdict);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::default_samples;
    use crate::inference::DEFAULT_STEP;

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_average_difference(0.0), Verdict::VeryGood);
        assert_eq!(Verdict::from_average_difference(4.99), Verdict::VeryGood);
        assert_eq!(Verdict::from_average_difference(5.0), Verdict::Good);
        assert_eq!(Verdict::from_average_difference(9.99), Verdict::Good);
        assert_eq!(Verdict::from_average_difference(10.0), Verdict::NeedsWork);
    }

    #[test]
    fn default_cases_agree_on_categories() {
        let comparison = compare_methods(&default_samples(), 2, DEFAULT_STEP).unwrap();
        assert_eq!(comparison.cases.len(), 5);
        for case in &comparison.cases {
            assert_eq!(case.discretized_category, case.closed_form_category, "caso {}", case.no);
            assert!((case.difference - (case.discretized - case.closed_form).abs()).abs() < 1e-12);
        }
        // R3 isolado: os dois métodos dão 50
        assert!(comparison.cases[0].difference < 1e-6);
        assert_eq!(comparison.verdict, Verdict::VeryGood);
        assert_eq!(comparison.discretized_timing.evaluations, 10);
    }

    #[test]
    fn invalid_step_is_a_config_error() {
        assert!(compare_methods(&default_samples(), 1, -1.0).is_err());
        assert!(compare_methods(&default_samples(), 1, 1e-300).is_err());
    }

    #[test]
    fn empty_input_compares_cleanly() {
        let comparison = compare_methods(&[], 3, DEFAULT_STEP).unwrap();
        assert_eq!(comparison.average_difference, 0.0);
        assert_eq!(comparison.closed_form_timing.per_evaluation_us, 0.0);
        assert!(render_comparison(&comparison).contains("Diferença média: 0.00"));
    }
}
