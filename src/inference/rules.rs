//! # Avaliação das Regras Mamdani
//!
//! Aplica cada [`Rule`] da [`RuleBase`] aos graus fuzzificados e devolve
//! a força de disparo de cada uma:
//!
//! - `Is(entrada, nível)` → grau da entrada naquele nível
//! - `All([...])` → `min` dos termos (conjunção)
//! - `Any([...])` → `max` dos termos (disjunção)
//!
//! ## Exemplo de Explicação
//!
//! ```text
//! R3: acidity=normal ∧ nutrition=medium ∧ heavy_metal=medium → medium ⟨0.70⟩
//! ```
//!
//! Não existe encadeamento: cada regra é avaliada uma única vez, de forma
//! independente, e a ordem das regras não afeta o resultado.

use serde::Serialize;

use crate::core::{Antecedent, Category, Degree, FuzzySystem, Rule, RuleBase};

use super::Fuzzified;

/// Resultado do disparo de uma regra — força e explicação legível.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleFiring {
    pub rule_id: usize,
    pub strength: Degree,
    pub consequent: Category,
    /// Texto da regra com a força, ex: `R4: organic_matter=high → good ⟨0.00⟩`.
    pub explanation: String,
}

/// Força de disparo de um antecedente.
pub fn firing_strength(antecedent: &Antecedent, fuzzified: &Fuzzified) -> Degree {
    match antecedent {
        Antecedent::Is(input, level) => fuzzified.degree(*input, *level),
        Antecedent::All(terms) => terms
            .iter()
            .fold(Degree::ONE, |acc, t| acc.and(firing_strength(t, fuzzified))),
        Antecedent::Any(terms) => terms
            .iter()
            .fold(Degree::ZERO, |acc, t| acc.or(firing_strength(t, fuzzified))),
    }
}

/// Dispara todas as regras da base, na ordem declarada.
pub fn fire_all(system: &FuzzySystem, fuzzified: &Fuzzified) -> Vec<RuleFiring> {
    system
        .rules()
        .iter()
        .map(|rule| {
            let strength = firing_strength(&rule.antecedent, fuzzified);
            RuleFiring {
                rule_id: rule.id,
                strength,
                consequent: rule.consequent,
                explanation: format!("{} {}", describe_rule(system, rule), strength),
            }
        })
        .collect()
}

/// Pares `(consequente, força)` sem montar explicações — caminho rápido de `evaluate`.
pub fn strengths<'a>(
    rules: &'a RuleBase,
    fuzzified: &'a Fuzzified,
) -> impl Iterator<Item = (Category, Degree)> + 'a {
    rules
        .iter()
        .map(move |rule| (rule.consequent, firing_strength(&rule.antecedent, fuzzified)))
}

/// Texto de uma regra com os rótulos das variáveis do sistema.
pub fn describe_rule(system: &FuzzySystem, rule: &Rule) -> String {
    format!(
        "R{}: {} → {}",
        rule.id,
        describe_antecedent(system, &rule.antecedent, true),
        rule.consequent
    )
}

fn describe_antecedent(system: &FuzzySystem, antecedent: &Antecedent, top: bool) -> String {
    let group = |terms: &[Antecedent], op: &str| {
        let body = terms
            .iter()
            .map(|t| describe_antecedent(system, t, false))
            .collect::<Vec<_>>()
            .join(op);
        if top || terms.len() == 1 {
            body
        } else {
            format!("({body})")
        }
    };

    match antecedent {
        Antecedent::Is(input, level) => {
            let variable = system.input(*input);
            format!("{}={}", variable.name, variable.set(level.index()).label)
        }
        Antecedent::All(terms) => group(terms, " ∧ "),
        Antecedent::Any(terms) => group(terms, " ∨ "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Input, Level, SoilSample};
    use crate::inference::fuzzify;

    fn firings(sample: SoilSample) -> Vec<RuleFiring> {
        let system = FuzzySystem::builtin();
        fire_all(system, &fuzzify(system, &sample))
    }

    #[test]
    fn conjunction_is_min_and_disjunction_is_max() {
        let system = FuzzySystem::builtin();
        let f = fuzzify(system, &SoilSample::new(5.75, 100.0, 12.0, 3.0));
        // acidic 0.5, normal 0.25, alkaline 0.0
        let any = Antecedent::any([
            Antecedent::is(Input::Acidity, Level::Low),
            Antecedent::is(Input::Acidity, Level::High),
        ]);
        assert!((firing_strength(&any, &f).value() - 0.5).abs() < 1e-9);

        // heavy_metal medium 0.7, nutrition medium 0.5
        let all = Antecedent::all([
            Antecedent::is(Input::HeavyMetal, Level::Medium),
            Antecedent::is(Input::Nutrition, Level::Medium),
            Antecedent::is(Input::Acidity, Level::Medium),
        ]);
        assert!((firing_strength(&all, &f).value() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn medium_scenario_fires_rule_three() {
        let firings = firings(SoilSample::new(6.5, 150.0, 12.0, 3.0));
        assert_eq!(firings.len(), 6);
        let strengths: Vec<f64> = firings.iter().map(|f| f.strength.value()).collect();
        let expected = [0.0, 0.0, 0.7, 0.0, 0.0, 0.0];
        for (got, want) in strengths.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{strengths:?}");
        }
    }

    #[test]
    fn explanations_use_variable_labels() {
        let firings = firings(SoilSample::new(6.5, 150.0, 12.0, 3.0));
        assert_eq!(
            firings[2].explanation,
            "R3: acidity=normal ∧ nutrition=medium ∧ heavy_metal=medium → medium ⟨0.70⟩"
        );
        assert!(firings[1]
            .explanation
            .starts_with("R2: (acidity=acidic ∨ acidity=alkaline) ∧ nutrition=low"));
        assert!(firings[3].explanation.starts_with("R4: organic_matter=high → good"));
    }

    #[test]
    fn fast_path_matches_traced_firings() {
        let system = FuzzySystem::builtin();
        let f = fuzzify(system, &SoilSample::new(7.5, 250.0, 5.0, 6.0));
        let fast: Vec<(Category, Degree)> = strengths(system.rules(), &f).collect();
        let traced: Vec<(Category, Degree)> = fire_all(system, &f)
            .into_iter()
            .map(|r| (r.consequent, r.strength))
            .collect();
        assert_eq!(fast, traced);
    }
}
