//! # SoilSample — As Quatro Medições de Entrada
//!
//! Uma amostra de solo é descrita por quatro medições escalares:
//!
//! | Campo | Variável | Universo nominal | Unidade |
//! |-------|----------|------------------|---------|
//! | `acidity` | pH | 4 – 9 | pH |
//! | `nutrition` | Nutrição | 0 – 350 | mg/kg |
//! | `heavy_metal` | Metais pesados | 0 – 30 | mg/kg |
//! | `organic_matter` | Matéria orgânica | 0 – 10 | % |
//!
//! Os universos são **nominais**: valores fora deles continuam sendo
//! fuzzificados (os graus saturam nos ombros). Só `NaN` e `±∞` são
//! rejeitados, e apenas na fronteira via [`SoilSample::checked`].

use serde::{Deserialize, Serialize};

use super::error::InputError;

/// Identifica uma das quatro variáveis de entrada.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Input {
    /// pH do solo.
    Acidity,
    /// Conteúdo de nutrientes.
    Nutrition,
    /// Concentração de metais pesados.
    HeavyMetal,
    /// Percentual de matéria orgânica.
    OrganicMatter,
}

impl Input {
    /// Todas as entradas, na ordem canônica.
    pub const ALL: [Input; 4] = [
        Input::Acidity,
        Input::Nutrition,
        Input::HeavyMetal,
        Input::OrganicMatter,
    ];

    /// Nome canônico (`"acidity"`, `"heavy_metal"`...).
    pub fn name(self) -> &'static str {
        match self {
            Input::Acidity => "acidity",
            Input::Nutrition => "nutrition",
            Input::HeavyMetal => "heavy_metal",
            Input::OrganicMatter => "organic_matter",
        }
    }

    /// Posição da entrada em arrays indexados por [`Input`].
    pub fn index(self) -> usize {
        match self {
            Input::Acidity => 0,
            Input::Nutrition => 1,
            Input::HeavyMetal => 2,
            Input::OrganicMatter => 3,
        }
    }

    /// Busca por nome canônico (case-insensitive). Aceita `"ph"` como apelido de acidez.
    pub fn from_name(name: &str) -> Option<Input> {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "acidity" | "ph" => Some(Input::Acidity),
            "nutrition" => Some(Input::Nutrition),
            "heavy_metal" => Some(Input::HeavyMetal),
            "organic_matter" => Some(Input::OrganicMatter),
            _ => None,
        }
    }
}

/// Uma amostra de solo com as quatro medições crisp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    /// pH.
    pub acidity: f64,
    /// Nutrição (mg/kg).
    pub nutrition: f64,
    /// Metais pesados (mg/kg).
    pub heavy_metal: f64,
    /// Matéria orgânica (%).
    pub organic_matter: f64,
}

impl SoilSample {
    /// Cria uma amostra sem validação.
    pub const fn new(acidity: f64, nutrition: f64, heavy_metal: f64, organic_matter: f64) -> Self {
        Self {
            acidity,
            nutrition,
            heavy_metal,
            organic_matter,
        }
    }

    /// Cria uma amostra rejeitando valores não finitos.
    ///
    /// # Erros
    ///
    /// [`InputError::NonFinite`] no primeiro campo `NaN` ou infinito.
    pub fn checked(
        acidity: f64,
        nutrition: f64,
        heavy_metal: f64,
        organic_matter: f64,
    ) -> Result<Self, InputError> {
        let sample = Self::new(acidity, nutrition, heavy_metal, organic_matter);
        sample.validate()?;
        Ok(sample)
    }

    /// Verifica que todas as medições são finitas.
    pub fn validate(&self) -> Result<(), InputError> {
        for input in Input::ALL {
            let value = self.get(input);
            if !value.is_finite() {
                return Err(InputError::NonFinite {
                    field: input.name(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Valor da medição correspondente a `input`.
    pub fn get(&self, input: Input) -> f64 {
        match input {
            Input::Acidity => self.acidity,
            Input::Nutrition => self.nutrition,
            Input::HeavyMetal => self.heavy_metal,
            Input::OrganicMatter => self.organic_matter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_out_of_range_values() {
        // fora do universo nominal, mas finito → aceito
        assert!(SoilSample::checked(2.0, 900.0, -3.0, 15.0).is_ok());
    }

    #[test]
    fn checked_rejects_non_finite() {
        let err = SoilSample::checked(6.5, f64::NAN, 12.0, 3.0).unwrap_err();
        assert!(matches!(err, InputError::NonFinite { field: "nutrition", .. }));

        let err = SoilSample::checked(6.5, 150.0, 12.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, InputError::NonFinite { field: "organic_matter", .. }));
    }

    #[test]
    fn input_lookup_by_name() {
        assert_eq!(Input::from_name("pH"), Some(Input::Acidity));
        assert_eq!(Input::from_name("Heavy_Metal"), Some(Input::HeavyMetal));
        assert_eq!(Input::from_name("quality"), None);
        for input in Input::ALL {
            assert_eq!(Input::from_name(input.name()), Some(input));
            assert_eq!(Input::ALL[input.index()], input);
        }
    }
}
