//! # FuzzySystem — Configuração Imutável do Sistema Mamdani
//!
//! O [`FuzzySystem`] reúne tudo que a inferência precisa:
//!
//! - as **quatro variáveis de entrada** (acidity, nutrition, heavy_metal, organic_matter)
//! - a **variável de saída** `quality` (bad, medium, good)
//! - a **base de regras** ([`RuleBase`])
//! - o **método de defuzzificação** ([`DefuzzMethod`])
//!
//! É montado uma única vez, validado em [`FuzzySystem::new`], e depois
//! compartilhado por referência (ou `Arc`) entre quantas threads forem
//! necessárias. Nada nele muda durante a avaliação.
//!
//! ## Tabela de Categorias
//!
//! | Variável | Categoria | Forma | Parâmetros |
//! |----------|-----------|-------|------------|
//! | acidity | acidic | trapézio | [4, 4, 5.5, 6.0] |
//! | acidity | normal | triângulo | [5.5, 6.5, 7.5] |
//! | acidity | alkaline | trapézio | [6.5, 7.0, 9, 9] |
//! | nutrition | low / medium / high | triângulo | [0,0,150] / [50,150,250] / [150,350,350] |
//! | heavy_metal | low / medium / high | triângulo | [0,0,15] / [5,15,25] / [15,30,30] |
//! | organic_matter | low / medium / high | triângulo | [0,0,3] / [1,3.5,6] / [4,10,10] |
//! | quality | bad / medium / good | triângulo | [0,0,50] / [20,50,80] / [50,100,100] |
//!
//! ## Exemplo
//!
//! ```rust
//! use soil_quality::core::{Category, FuzzySystem, SoilSample};
//!
//! let system = FuzzySystem::builtin();
//! let assessment = system.evaluate(&SoilSample::new(6.5, 150.0, 12.0, 3.0));
//! assert_eq!(assessment.category, Category::Medium);
//! ```

use std::sync::OnceLock;

use serde::Serialize;

use super::error::ConfigError;
use super::{
    Category, FuzzySet, Input, LinguisticVariable, MembershipShape, RuleBase, SoilSample, Universe,
};
use crate::inference::{Assessment, DefuzzMethod, EvaluationTrace, InferenceEngine};

/// Sistema padrão do processo (centróide discretizado, passo 0.1).
static BUILTIN: OnceLock<FuzzySystem> = OnceLock::new();

/// Configuração imutável de um sistema fuzzy Mamdani de qualidade do solo.
#[derive(Clone, Debug, Serialize)]
pub struct FuzzySystem {
    inputs: [LinguisticVariable; 4],
    output: LinguisticVariable,
    rules: RuleBase,
    method: DefuzzMethod,
}

impl FuzzySystem {
    /// Monta e valida um sistema.
    ///
    /// `inputs` deve seguir a ordem de [`Input::ALL`] e `output.sets` a ordem
    /// de [`Category::ALL`].
    ///
    /// # Erros
    ///
    /// [`ConfigError`] se alguma forma, universo, regra ou o passo de
    /// discretização for inválido.
    pub fn new(
        inputs: [LinguisticVariable; 4],
        output: LinguisticVariable,
        rules: RuleBase,
        method: DefuzzMethod,
    ) -> Result<Self, ConfigError> {
        for variable in &inputs {
            variable.validate()?;
        }
        output.validate()?;
        method.validate(&output.universe)?;

        tracing::debug!(
            rules = rules.len(),
            method = method.name(),
            "Sistema fuzzy validado"
        );

        Ok(Self {
            inputs,
            output,
            rules,
            method,
        })
    }

    /// O sistema de qualidade do solo com as tabelas fixas de categorias e regras.
    pub fn soil_quality(method: DefuzzMethod) -> Result<Self, ConfigError> {
        FuzzySystem::new(
            soil_inputs(),
            quality_output(),
            RuleBase::soil_quality()?,
            method,
        )
    }

    /// Instância compartilhada do processo, com o método padrão.
    ///
    /// Montada na primeira chamada e reutilizada depois.
    pub fn builtin() -> &'static FuzzySystem {
        BUILTIN.get_or_init(|| {
            FuzzySystem::soil_quality(DefuzzMethod::default())
                .expect("tabelas fixas do sistema de solo são válidas")
        })
    }

    /// Variável linguística de uma entrada.
    pub fn input(&self, input: Input) -> &LinguisticVariable {
        &self.inputs[input.index()]
    }

    /// As quatro variáveis de entrada, na ordem de [`Input::ALL`].
    pub fn inputs(&self) -> &[LinguisticVariable; 4] {
        &self.inputs
    }

    /// Variável de saída `quality`.
    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    pub fn method(&self) -> DefuzzMethod {
        self.method
    }

    /// Busca qualquer variável (entrada ou saída) pelo nome.
    pub fn variable(&self, name: &str) -> Option<&LinguisticVariable> {
        if let Some(input) = Input::from_name(name) {
            return Some(self.input(input));
        }
        if self.output.name.eq_ignore_ascii_case(name.trim()) {
            return Some(&self.output);
        }
        None
    }

    /// Avalia uma amostra: `(score, categoria)`.
    pub fn evaluate(&self, sample: &SoilSample) -> Assessment {
        InferenceEngine::evaluate(self, sample)
    }

    /// Avalia uma amostra guardando todos os passos intermediários.
    pub fn trace(&self, sample: &SoilSample) -> EvaluationTrace {
        InferenceEngine::trace(self, sample)
    }

    /// Avalia várias amostras em paralelo.
    pub fn evaluate_batch(&self, samples: &[SoilSample]) -> Vec<Assessment> {
        InferenceEngine::evaluate_batch(self, samples)
    }
}

/// Variáveis de entrada na ordem de [`Input::ALL`].
fn soil_inputs() -> [LinguisticVariable; 4] {
    [
        LinguisticVariable::new(
            "acidity",
            Universe::new(4.0, 9.0),
            [
                FuzzySet::new("acidic", MembershipShape::trapezoidal(4.0, 4.0, 5.5, 6.0)),
                FuzzySet::new("normal", MembershipShape::triangular(5.5, 6.5, 7.5)),
                FuzzySet::new("alkaline", MembershipShape::trapezoidal(6.5, 7.0, 9.0, 9.0)),
            ],
        ),
        LinguisticVariable::new(
            "nutrition",
            Universe::new(0.0, 350.0),
            [
                FuzzySet::new("low", MembershipShape::triangular(0.0, 0.0, 150.0)),
                FuzzySet::new("medium", MembershipShape::triangular(50.0, 150.0, 250.0)),
                FuzzySet::new("high", MembershipShape::triangular(150.0, 350.0, 350.0)),
            ],
        ),
        LinguisticVariable::new(
            "heavy_metal",
            Universe::new(0.0, 30.0),
            [
                FuzzySet::new("low", MembershipShape::triangular(0.0, 0.0, 15.0)),
                FuzzySet::new("medium", MembershipShape::triangular(5.0, 15.0, 25.0)),
                FuzzySet::new("high", MembershipShape::triangular(15.0, 30.0, 30.0)),
            ],
        ),
        LinguisticVariable::new(
            "organic_matter",
            Universe::new(0.0, 10.0),
            [
                FuzzySet::new("low", MembershipShape::triangular(0.0, 0.0, 3.0)),
                FuzzySet::new("medium", MembershipShape::triangular(1.0, 3.5, 6.0)),
                FuzzySet::new("high", MembershipShape::triangular(4.0, 10.0, 10.0)),
            ],
        ),
    ]
}

/// Variável de saída, conjuntos na ordem de [`Category::ALL`].
fn quality_output() -> LinguisticVariable {
    LinguisticVariable::new(
        "quality",
        Universe::new(0.0, 100.0),
        [
            FuzzySet::new(Category::Bad.label(), MembershipShape::triangular(0.0, 0.0, 50.0)),
            FuzzySet::new(Category::Medium.label(), MembershipShape::triangular(20.0, 50.0, 80.0)),
            FuzzySet::new(Category::Good.label(), MembershipShape::triangular(50.0, 100.0, 100.0)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    #[test]
    fn builtin_tables_validate() {
        assert!(FuzzySystem::soil_quality(DefuzzMethod::default()).is_ok());
        assert!(FuzzySystem::soil_quality(DefuzzMethod::ClosedForm).is_ok());
        assert_eq!(FuzzySystem::builtin().rules().len(), 6);
    }

    #[test]
    fn malformed_shape_fails_at_setup() {
        let mut inputs = soil_inputs();
        inputs[0].sets[1] = FuzzySet::new("normal", MembershipShape::triangular(7.5, 6.5, 5.5));
        let err = FuzzySystem::new(
            inputs,
            quality_output(),
            RuleBase::soil_quality().unwrap(),
            DefuzzMethod::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedParameters { .. }));
    }

    #[test]
    fn invalid_step_fails_at_setup() {
        let err = FuzzySystem::soil_quality(DefuzzMethod::Discretized { step: 0.0 }).unwrap_err();
        assert_eq!(err, ConfigError::InvalidStep(0.0));

        // passos minúsculos gerariam amostragem sem fim na avaliação
        for step in [1e-300, 1e-9] {
            let err = FuzzySystem::soil_quality(DefuzzMethod::Discretized { step }).unwrap_err();
            assert_eq!(err, ConfigError::InvalidStep(step));
        }
    }

    #[test]
    fn variables_are_indexed_by_input_and_category() {
        let system = FuzzySystem::builtin();
        assert_eq!(system.input(Input::Acidity).set(Level::Low.index()).label, "acidic");
        assert_eq!(system.input(Input::Acidity).set(Level::High.index()).label, "alkaline");
        assert_eq!(system.output().set(Category::Good.index()).label, "good");
        assert_eq!(system.variable("pH").map(|v| v.name), Some("acidity"));
        assert_eq!(system.variable("quality").map(|v| v.name), Some("quality"));
        assert!(system.variable("salinity").is_none());
    }

    #[test]
    fn system_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FuzzySystem>();
    }
}
