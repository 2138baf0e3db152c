//! # Fuzzificação
//!
//! Converte as quatro medições crisp de uma [`SoilSample`] em graus de
//! pertinência, usando as variáveis do [`FuzzySystem`].
//!
//! ```text
//! pH 6.0 ──▶ { acidic: 0.0, normal: 0.5, alkaline: 0.0 }
//! ```
//!
//! É total: qualquer valor finito produz três graus em `[0, 1]`.

use serde::Serialize;

use crate::core::{FuzzySystem, Degree, Input, Level, Memberships, SoilSample};

/// Graus de pertinência das quatro entradas de uma amostra.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Fuzzified {
    pub acidity: Memberships,
    pub nutrition: Memberships,
    pub heavy_metal: Memberships,
    pub organic_matter: Memberships,
}

impl Fuzzified {
    /// Graus de uma entrada.
    pub fn get(&self, input: Input) -> &Memberships {
        match input {
            Input::Acidity => &self.acidity,
            Input::Nutrition => &self.nutrition,
            Input::HeavyMetal => &self.heavy_metal,
            Input::OrganicMatter => &self.organic_matter,
        }
    }

    /// Grau de `input` no nível `level`.
    pub fn degree(&self, input: Input, level: Level) -> Degree {
        self.get(input).at(level.index())
    }
}

/// Fuzzifica uma amostra com as variáveis do sistema.
pub fn fuzzify(system: &FuzzySystem, sample: &SoilSample) -> Fuzzified {
    let of = |input: Input| system.input(input).fuzzify(sample.get(input));
    Fuzzified {
        acidity: of(Input::Acidity),
        nutrition: of(Input::Nutrition),
        heavy_metal: of(Input::HeavyMetal),
        organic_matter: of(Input::OrganicMatter),
    }
}
