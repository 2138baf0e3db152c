//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** do avaliador de qualidade
//! do solo. Tudo na inferência gira em torno destes tipos:
//!
//! - [`Degree`] — Grau de pertinência em `[0, 1]`
//! - [`MembershipShape`] — Forma triangular ou trapezoidal de um conjunto fuzzy
//! - [`LinguisticVariable`] — Variável nomeada com três conjuntos (ex: `acidity`)
//! - [`SoilSample`] — As quatro medições crisp de uma amostra
//! - [`Category`] — Rótulo de saída (bad, medium, good)
//! - [`RuleBase`] — As regras Mamdani, como dados
//! - [`FuzzySystem`] — Tudo acima, validado e imutável
//!
//! ## Analogia com o Mundo Real
//!
//! Pense no [`FuzzySystem`] como o **laudo de referência** de um agrônomo:
//! - Cada [`LinguisticVariable`] é uma **régua** com três faixas sobrepostas
//! - Cada regra é uma **frase do laudo** ("pH normal e pouco metal → solo bom")
//! - O [`Degree`] diz **quanto** a medição pertence a cada faixa
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use soil_quality::core::{FuzzySystem, Input, SoilSample};
//!
//! let system = FuzzySystem::builtin();
//! let graus = system.input(Input::Acidity).fuzzify(6.5);
//! assert_eq!(graus.get("normal").map(|d| d.value()), Some(1.0));
//!
//! let sample = SoilSample::checked(6.5, 150.0, 12.0, 3.0).unwrap();
//! let assessment = system.evaluate(&sample);
//! assert!(assessment.score > 40.0 && assessment.score < 70.0);
//! ```

/// Sub-módulo com [`Degree`] — grau de pertinência.
pub mod degree;

/// Sub-módulo com [`ConfigError`] e [`InputError`].
pub mod error;

/// Sub-módulo com as funções triangular e trapezoidal.
pub mod membership;

/// Sub-módulo com [`SoilSample`] e [`Input`].
pub mod sample;

/// Sub-módulo com [`Category`] e [`Level`].
pub mod category;

/// Sub-módulo com [`LinguisticVariable`] e [`Memberships`].
pub mod variable;

/// Sub-módulo com [`Rule`], [`Antecedent`] e [`RuleBase`].
pub mod rule_base;

/// Sub-módulo com [`FuzzySystem`] — a configuração completa.
pub mod system;

// Re-exports para conveniência: permite usar `crate::core::Degree` diretamente.
pub use category::{Category, Level};
pub use degree::Degree;
pub use error::{ConfigError, InputError};
pub use membership::MembershipShape;
pub use rule_base::{Antecedent, Rule, RuleBase};
pub use sample::{Input, SoilSample};
pub use system::FuzzySystem;
pub use variable::{
    CurvePoint, FuzzySet, LinguisticVariable, Memberships, Universe, MAX_CURVE_POINTS,
};
