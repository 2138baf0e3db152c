//! # Degree — Grau de Pertinência Fuzzy
//!
//! Um [`Degree`] é o **grau de verdade** de uma proposição fuzzy, sempre
//! dentro do intervalo fechado `[0.0, 1.0]`:
//!
//! - `0.0` — o valor não pertence à categoria
//! - `1.0` — o valor pertence totalmente à categoria
//! - valores intermediários — pertinência parcial
//!
//! O mesmo tipo representa graus de pertinência (fuzzificação), forças de
//! disparo de regras e forças agregadas por categoria de saída.
//!
//! ## Operadores (lógica de Gödel / Zadeh)
//!
//! | Operador | Método | Fórmula |
//! |----------|--------|---------|
//! | E (AND) | [`Degree::and`] | `min(a, b)` |
//! | OU (OR) | [`Degree::or`] | `max(a, b)` |
//!
//! ## Exemplo
//!
//! ```rust
//! use soil_quality::core::Degree;
//!
//! let normal = Degree::new(0.7);
//! let alto = Degree::new(0.4);
//! assert_eq!(normal.and(alto).value(), 0.4);
//! assert_eq!(normal.or(alto).value(), 0.7);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grau fuzzy no intervalo `[0.0, 1.0]`.
///
/// A construção via [`Degree::new`] faz clamp do valor, então qualquer
/// instância respeita o invariante. `NaN` vira `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degree(f64);

impl Degree {
    /// Pertinência nula.
    pub const ZERO: Degree = Degree(0.0);

    /// Pertinência total.
    pub const ONE: Degree = Degree(1.0);

    /// Cria um grau a partir de um escalar, limitado a `[0.0, 1.0]`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Valor numérico do grau.
    pub fn value(self) -> f64 {
        self.0
    }

    /// E fuzzy (t-norma mínimo).
    pub fn and(self, other: Degree) -> Degree {
        Degree(self.0.min(other.0))
    }

    /// OU fuzzy (t-conorma máximo).
    pub fn or(self, other: Degree) -> Degree {
        Degree(self.0.max(other.0))
    }

    /// `true` quando o grau é exatamente zero (nada disparou).
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl From<f64> for Degree {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Formatação no estilo `⟨0.70⟩`.
impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "⟨{:.2}⟩", self.0)
    }
}
