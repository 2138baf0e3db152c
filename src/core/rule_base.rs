//! # Base de Regras Mamdani
//!
//! As regras são **dados declarativos**: cada [`Rule`] é um par
//! (antecedente, consequente). O antecedente é uma pequena árvore de
//! expressão sobre os graus fuzzificados:
//!
//! | Nó | Semântica | Operador |
//! |----|-----------|----------|
//! | [`Is`](Antecedent::Is) | `entrada = nível` | grau de pertinência |
//! | [`All`](Antecedent::All) | conjunção | `min` |
//! | [`Any`](Antecedent::Any) | disjunção | `max` |
//!
//! ## As Seis Regras do Solo
//!
//! ```text
//! R1: acidity=normal ∧ nutrition=high ∧ heavy_metal=low              → good
//! R2: (acidity=acidic ∨ acidity=alkaline) ∧ nutrition=low ∧ heavy_metal=high → bad
//! R3: acidity=normal ∧ nutrition=medium ∧ heavy_metal=medium         → medium
//! R4: organic_matter=high                                            → good
//! R5: organic_matter=low ∧ heavy_metal=high                          → bad
//! R6: acidity=normal ∧ nutrition=high ∧ heavy_metal=medium           → medium
//! ```
//!
//! A avaliação das expressões fica em [`crate::inference::rules`].

use std::collections::HashSet;

use serde::Serialize;

use super::error::ConfigError;
use super::{Category, Input, Level};

/// Expressão antecedente de uma regra.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Antecedent {
    /// `entrada = nível`.
    Is(Input, Level),
    /// Conjunção (min) de todas as sub-expressões.
    All(Vec<Antecedent>),
    /// Disjunção (max) de todas as sub-expressões.
    Any(Vec<Antecedent>),
}

impl Antecedent {
    pub fn is(input: Input, level: Level) -> Self {
        Antecedent::Is(input, level)
    }

    pub fn all(terms: impl IntoIterator<Item = Antecedent>) -> Self {
        Antecedent::All(terms.into_iter().collect())
    }

    pub fn any(terms: impl IntoIterator<Item = Antecedent>) -> Self {
        Antecedent::Any(terms.into_iter().collect())
    }

    /// `true` se existe algum `All`/`Any` sem filhos na árvore.
    fn has_empty_group(&self) -> bool {
        match self {
            Antecedent::Is(..) => false,
            Antecedent::All(terms) | Antecedent::Any(terms) => {
                terms.is_empty() || terms.iter().any(Antecedent::has_empty_group)
            }
        }
    }
}

/// Regra fuzzy imutável.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rule {
    /// Identificador exibido nas explicações (`R1`, `R2`...).
    pub id: usize,
    pub antecedent: Antecedent,
    pub consequent: Category,
}

impl Rule {
    pub fn new(id: usize, antecedent: Antecedent, consequent: Category) -> Self {
        Self {
            id,
            antecedent,
            consequent,
        }
    }
}

/// Conjunto fixo de regras, somente leitura.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Monta uma base validando identificadores e antecedentes.
    pub fn new(rules: Vec<Rule>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id) {
                return Err(ConfigError::DuplicateRule(rule.id));
            }
            if rule.antecedent.has_empty_group() {
                return Err(ConfigError::EmptyAntecedent { rule: rule.id });
            }
        }
        Ok(Self { rules })
    }

    /// As seis regras de qualidade do solo.
    pub fn soil_quality() -> Result<Self, ConfigError> {
        use Input::{Acidity, HeavyMetal, Nutrition, OrganicMatter};
        use Level::{High, Low, Medium};

        RuleBase::new(vec![
            Rule::new(
                1,
                Antecedent::all([
                    Antecedent::is(Acidity, Medium),
                    Antecedent::is(Nutrition, High),
                    Antecedent::is(HeavyMetal, Low),
                ]),
                Category::Good,
            ),
            Rule::new(
                2,
                Antecedent::all([
                    Antecedent::any([Antecedent::is(Acidity, Low), Antecedent::is(Acidity, High)]),
                    Antecedent::is(Nutrition, Low),
                    Antecedent::is(HeavyMetal, High),
                ]),
                Category::Bad,
            ),
            Rule::new(
                3,
                Antecedent::all([
                    Antecedent::is(Acidity, Medium),
                    Antecedent::is(Nutrition, Medium),
                    Antecedent::is(HeavyMetal, Medium),
                ]),
                Category::Medium,
            ),
            Rule::new(4, Antecedent::is(OrganicMatter, High), Category::Good),
            Rule::new(
                5,
                Antecedent::all([
                    Antecedent::is(OrganicMatter, Low),
                    Antecedent::is(HeavyMetal, High),
                ]),
                Category::Bad,
            ),
            Rule::new(
                6,
                Antecedent::all([
                    Antecedent::is(Acidity, Medium),
                    Antecedent::is(Nutrition, High),
                    Antecedent::is(HeavyMetal, Medium),
                ]),
                Category::Medium,
            ),
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleBase {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_rules_have_expected_consequents() {
        let rules = RuleBase::soil_quality().unwrap();
        let consequents: Vec<(usize, Category)> =
            rules.iter().map(|r| (r.id, r.consequent)).collect();
        assert_eq!(
            consequents,
            vec![
                (1, Category::Good),
                (2, Category::Bad),
                (3, Category::Medium),
                (4, Category::Good),
                (5, Category::Bad),
                (6, Category::Medium),
            ]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let rule = Rule::new(1, Antecedent::is(Input::Acidity, Level::Low), Category::Bad);
        let err = RuleBase::new(vec![rule.clone(), rule]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateRule(1));
    }

    #[test]
    fn empty_groups_are_rejected() {
        let rule = Rule::new(
            7,
            Antecedent::all([Antecedent::is(Input::Acidity, Level::Low), Antecedent::Any(Vec::new())]),
            Category::Bad,
        );
        assert_eq!(
            RuleBase::new(vec![rule]).unwrap_err(),
            ConfigError::EmptyAntecedent { rule: 7 }
        );
    }
}
