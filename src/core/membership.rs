//! # Funções de Pertinência — Triangular e Trapezoidal
//!
//! Biblioteca de formas que mapeiam um escalar `x` para um grau em `[0, 1]`.
//! São funções puras, contínuas e lineares por partes.
//!
//! ## Triangular `(a, b, c)` com `a ≤ b ≤ c`
//!
//! ```text
//!  1 ┤      /\
//!    │     /  \
//!  0 ┼────/    \────
//!         a  b  c
//! ```
//!
//! ## Trapezoidal `(a, b, c, d)` com `a ≤ b ≤ c ≤ d`
//!
//! ```text
//!  1 ┤      ┌──┐
//!    │     /    \
//!  0 ┼────/      \────
//!         a  b  c  d
//! ```
//!
//! ## Ombros (shoulders)
//!
//! Quando um lado é degenerado, a forma **satura** em vez de dividir por zero:
//!
//! - `a == b` → ombro esquerdo: grau 1.0 para todo `x ≤ b`
//! - `b == c` (triângulo) ou `c == d` (trapézio) → ombro direito: grau 1.0
//!   para todo `x` à direita do topo
//!
//! É assim que `nutrition.low = [0, 0, 150]` continua valendo 1.0 para
//! entradas negativas e `nutrition.high = [150, 350, 350]` vale 1.0 acima de 350.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::Degree;

/// Forma de pertinência triangular avaliada em `x`.
///
/// ```rust
/// use soil_quality::core::membership::triangular;
///
/// assert_eq!(triangular(6.5, 5.5, 6.5, 7.5), 1.0);
/// assert_eq!(triangular(0.0, 0.0, 0.0, 150.0), 1.0); // ombro esquerdo
/// assert_eq!(triangular(400.0, 150.0, 350.0, 350.0), 1.0); // ombro direito
/// ```
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if a == b && x <= b {
        return 1.0;
    }
    if b == c && x >= b {
        return 1.0;
    }
    if x <= a || x >= c {
        return 0.0;
    }
    if x < b {
        (x - a) / (b - a)
    } else {
        (c - x) / (c - b)
    }
}

/// Forma de pertinência trapezoidal avaliada em `x`.
///
/// ```rust
/// use soil_quality::core::membership::trapezoidal;
///
/// assert_eq!(trapezoidal(5.0, 4.0, 4.0, 5.5, 6.0), 1.0);
/// assert!((trapezoidal(5.75, 4.0, 4.0, 5.5, 6.0) - 0.5).abs() < 1e-12);
/// ```
pub fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if a == b && x <= b {
        return 1.0;
    }
    if c == d && x >= c {
        return 1.0;
    }
    if x <= a || x >= d {
        return 0.0;
    }
    if x < b {
        (x - a) / (b - a)
    } else if x <= c {
        1.0
    } else {
        (d - x) / (d - c)
    }
}

/// Forma de uma categoria linguística com seus parâmetros.
///
/// Serializa como `{ "shape": "triangular", "a": 0.0, "b": 0.0, "c": 150.0 }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MembershipShape {
    /// Triângulo `(a, b, c)`.
    Triangular { a: f64, b: f64, c: f64 },
    /// Trapézio `(a, b, c, d)`.
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipShape {
    /// Atalho para [`MembershipShape::Triangular`].
    pub const fn triangular(a: f64, b: f64, c: f64) -> Self {
        MembershipShape::Triangular { a, b, c }
    }

    /// Atalho para [`MembershipShape::Trapezoidal`].
    pub const fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Self {
        MembershipShape::Trapezoidal { a, b, c, d }
    }

    /// Grau de pertinência de `x` nesta forma.
    pub fn degree(&self, x: f64) -> Degree {
        let value = match *self {
            MembershipShape::Triangular { a, b, c } => triangular(x, a, b, c),
            MembershipShape::Trapezoidal { a, b, c, d } => trapezoidal(x, a, b, c, d),
        };
        Degree::new(value)
    }

    /// Parâmetros na ordem declarada.
    pub fn params(&self) -> Vec<f64> {
        match *self {
            MembershipShape::Triangular { a, b, c } => vec![a, b, c],
            MembershipShape::Trapezoidal { a, b, c, d } => vec![a, b, c, d],
        }
    }

    /// Nome curto da forma (`"triangular"` / `"trapezoidal"`).
    pub fn kind(&self) -> &'static str {
        match self {
            MembershipShape::Triangular { .. } => "triangular",
            MembershipShape::Trapezoidal { .. } => "trapezoidal",
        }
    }

    /// Valida os parâmetros: finitos, monotônicos e com suporte não vazio.
    ///
    /// `variable` e `set` só entram na mensagem de erro.
    pub fn validate(&self, variable: &str, set: &str) -> Result<(), ConfigError> {
        let params = self.params();

        if params.iter().any(|p| !p.is_finite()) {
            return Err(ConfigError::NonFiniteParameter {
                variable: variable.to_string(),
                set: set.to_string(),
                params,
            });
        }

        if params.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::UnorderedParameters {
                variable: variable.to_string(),
                set: set.to_string(),
                params,
            });
        }

        let (first, last) = (params[0], params[params.len() - 1]);
        if first == last {
            return Err(ConfigError::EmptySupport {
                variable: variable.to_string(),
                set: set.to_string(),
                at: first,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_rises_and_falls_linearly() {
        assert_eq!(triangular(5.5, 5.5, 6.5, 7.5), 0.0);
        assert!((triangular(6.0, 5.5, 6.5, 7.5) - 0.5).abs() < 1e-12);
        assert_eq!(triangular(6.5, 5.5, 6.5, 7.5), 1.0);
        assert!((triangular(7.0, 5.5, 6.5, 7.5) - 0.5).abs() < 1e-12);
        assert_eq!(triangular(7.5, 5.5, 6.5, 7.5), 0.0);
        assert_eq!(triangular(9.0, 5.5, 6.5, 7.5), 0.0);
    }

    #[test]
    fn triangle_shoulders_saturate() {
        // Triangular(a, a, c)(a) == 1 e Triangular(a, b, b)(b) == 1
        assert_eq!(triangular(0.0, 0.0, 0.0, 150.0), 1.0);
        assert_eq!(triangular(350.0, 150.0, 350.0, 350.0), 1.0);
        // além das bordas, continua saturado
        assert_eq!(triangular(-20.0, 0.0, 0.0, 150.0), 1.0);
        assert_eq!(triangular(1000.0, 150.0, 350.0, 350.0), 1.0);
        // e decai normalmente do lado oposto
        assert!((triangular(75.0, 0.0, 0.0, 150.0) - 0.5).abs() < 1e-12);
        assert!((triangular(250.0, 150.0, 350.0, 350.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn trapezoid_plateau_and_shoulders() {
        // acidic = [4, 4, 5.5, 6.0]
        assert_eq!(trapezoidal(3.0, 4.0, 4.0, 5.5, 6.0), 1.0);
        assert_eq!(trapezoidal(4.0, 4.0, 4.0, 5.5, 6.0), 1.0);
        assert_eq!(trapezoidal(5.5, 4.0, 4.0, 5.5, 6.0), 1.0);
        assert_eq!(trapezoidal(6.0, 4.0, 4.0, 5.5, 6.0), 0.0);
        // alkaline = [6.5, 7.0, 9, 9]
        assert_eq!(trapezoidal(6.5, 6.5, 7.0, 9.0, 9.0), 0.0);
        assert!((trapezoidal(6.75, 6.5, 7.0, 9.0, 9.0) - 0.5).abs() < 1e-12);
        assert_eq!(trapezoidal(9.0, 6.5, 7.0, 9.0, 9.0), 1.0);
        assert_eq!(trapezoidal(12.0, 6.5, 7.0, 9.0, 9.0), 1.0);
    }

    #[test]
    fn trapezoid_without_shoulders_is_zero_outside_support() {
        assert_eq!(trapezoidal(0.0, 1.0, 2.0, 3.0, 4.0), 0.0);
        assert_eq!(trapezoidal(2.5, 1.0, 2.0, 3.0, 4.0), 1.0);
        assert_eq!(trapezoidal(5.0, 1.0, 2.0, 3.0, 4.0), 0.0);
    }

    #[test]
    fn degree_stays_in_unit_interval_everywhere() {
        let shapes = [
            MembershipShape::triangular(0.0, 0.0, 50.0),
            MembershipShape::triangular(20.0, 50.0, 80.0),
            MembershipShape::triangular(50.0, 100.0, 100.0),
            MembershipShape::trapezoidal(4.0, 4.0, 5.5, 6.0),
            MembershipShape::trapezoidal(6.5, 7.0, 9.0, 9.0),
        ];
        for shape in shapes {
            let mut x = -50.0;
            while x <= 150.0 {
                let d = shape.degree(x).value();
                assert!((0.0..=1.0).contains(&d), "{:?} em {} deu {}", shape, x, d);
                x += 0.25;
            }
        }
    }

    #[test]
    fn degree_is_continuous() {
        // cada forma com seus pontos de quebra, incluindo ombros
        let cases = [
            (MembershipShape::triangular(20.0, 50.0, 80.0), vec![20.0, 50.0, 80.0]),
            (MembershipShape::triangular(0.0, 0.0, 50.0), vec![0.0, 50.0]),
            (MembershipShape::triangular(50.0, 100.0, 100.0), vec![50.0, 100.0]),
            (MembershipShape::triangular(0.0, 0.0, 150.0), vec![0.0, 150.0]),
            (MembershipShape::trapezoidal(4.0, 4.0, 5.5, 6.0), vec![4.0, 5.5, 6.0]),
            (MembershipShape::trapezoidal(6.5, 7.0, 9.0, 9.0), vec![6.5, 7.0, 9.0]),
        ];
        let eps = 1e-9;
        for (shape, breaks) in cases {
            for x in breaks {
                let left = shape.degree(x - eps).value();
                let at = shape.degree(x).value();
                let right = shape.degree(x + eps).value();
                assert!((left - at).abs() < 1e-6, "{:?}: salto à esquerda de {}", shape, x);
                assert!((right - at).abs() < 1e-6, "{:?}: salto à direita de {}", shape, x);
            }
        }
    }

    #[test]
    fn validate_rejects_unordered_parameters() {
        let err = MembershipShape::triangular(5.0, 3.0, 8.0)
            .validate("acidity", "normal")
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedParameters { .. }));

        let err = MembershipShape::trapezoidal(1.0, 2.0, 4.0, 3.0)
            .validate("acidity", "alkaline")
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedParameters { .. }));
    }

    #[test]
    fn validate_rejects_non_finite_and_empty_support() {
        let err = MembershipShape::triangular(0.0, f64::NAN, 1.0)
            .validate("x", "y")
            .unwrap_err();
        assert!(matches!(err, ConfigError::NonFiniteParameter { .. }));

        let err = MembershipShape::triangular(2.0, 2.0, 2.0)
            .validate("x", "y")
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptySupport {
                variable: "x".into(),
                set: "y".into(),
                at: 2.0
            }
        );
    }

    #[test]
    fn validate_accepts_shoulders() {
        assert!(MembershipShape::triangular(0.0, 0.0, 150.0)
            .validate("nutrition", "low")
            .is_ok());
        assert!(MembershipShape::trapezoidal(6.5, 7.0, 9.0, 9.0)
            .validate("acidity", "alkaline")
            .is_ok());
    }

    #[test]
    fn shape_serializes_with_tag() {
        let json = serde_json::to_value(MembershipShape::triangular(0.0, 0.0, 150.0)).unwrap();
        assert_eq!(json["shape"], "triangular");
        assert_eq!(json["c"], 150.0);
    }
}
