//! # Variável Linguística
//!
//! Uma [`LinguisticVariable`] é uma dimensão nomeada (ex: `"acidity"`) com
//! **exatamente três** conjuntos fuzzy, cada um com um rótulo e uma forma:
//!
//! ```text
//! acidity ∈ [4, 9]
//!   ├── acidic   → trapézio [4, 4, 5.5, 6.0]
//!   ├── normal   → triângulo [5.5, 6.5, 7.5]
//!   └── alkaline → trapézio [6.5, 7.0, 9, 9]
//! ```
//!
//! As variáveis são imutáveis depois de montadas. A fuzzificação de um
//! valor devolve um [`Memberships`] — os três graus, na ordem dos conjuntos.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::error::ConfigError;
use super::{Degree, MembershipShape};

/// Número máximo de pontos em [`LinguisticVariable::curve`].
pub const MAX_CURVE_POINTS: usize = 1001;

/// Universo de discurso nominal `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Universe {
    pub min: f64,
    pub max: f64,
}

impl Universe {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Largura do universo.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Conjunto fuzzy nomeado: rótulo + forma.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FuzzySet {
    pub label: &'static str,
    pub shape: MembershipShape,
}

impl FuzzySet {
    pub const fn new(label: &'static str, shape: MembershipShape) -> Self {
        Self { label, shape }
    }
}

/// Variável linguística com três conjuntos fuzzy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinguisticVariable {
    pub name: &'static str,
    pub universe: Universe,
    pub sets: [FuzzySet; 3],
}

impl LinguisticVariable {
    pub fn new(name: &'static str, universe: Universe, sets: [FuzzySet; 3]) -> Self {
        Self {
            name,
            universe,
            sets,
        }
    }

    /// Valida o universo e a forma de cada conjunto.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Universe { min, max } = self.universe;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::InvalidUniverse {
                variable: self.name.to_string(),
                min,
                max,
            });
        }
        for set in &self.sets {
            set.shape.validate(self.name, set.label)?;
        }
        Ok(())
    }

    /// Conjunto na posição `index` (0, 1 ou 2).
    ///
    /// # Panics
    ///
    /// Se `index > 2`. Use [`Level::index`](super::Level::index) ou
    /// [`Category::index`](super::Category::index).
    pub fn set(&self, index: usize) -> &FuzzySet {
        &self.sets[index]
    }

    /// Busca um conjunto pelo rótulo (case-insensitive).
    pub fn set_by_label(&self, label: &str) -> Option<&FuzzySet> {
        self.sets
            .iter()
            .find(|s| s.label.eq_ignore_ascii_case(label.trim()))
    }

    /// Fuzzifica `x`: grau de pertinência em cada um dos três conjuntos.
    pub fn fuzzify(&self, x: f64) -> Memberships {
        Memberships {
            labels: self.sets.map(|s| s.label),
            degrees: self.sets.map(|s| s.shape.degree(x)),
        }
    }

    /// Amostra as três curvas em `points` pontos igualmente espaçados do universo.
    ///
    /// `points` é limitado a `2..=`[`MAX_CURVE_POINTS`]: com menos de 2 devolve
    /// só as bordas do universo.
    pub fn curve(&self, points: usize) -> Vec<CurvePoint> {
        let points = points.clamp(2, MAX_CURVE_POINTS);
        let step = self.universe.width() / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = if i == points - 1 {
                    self.universe.max
                } else {
                    self.universe.min + i as f64 * step
                };
                CurvePoint {
                    x,
                    degrees: self.sets.map(|s| s.shape.degree(x).value()),
                }
            })
            .collect()
    }
}

/// Um ponto amostrado das curvas de pertinência de uma variável.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    /// Graus na ordem de [`LinguisticVariable::sets`].
    pub degrees: [f64; 3],
}

/// Os três graus de pertinência de um valor crisp.
///
/// Serializa como mapa `rótulo → grau`, ex: `{ "acidic": 0.0, "normal": 1.0, "alkaline": 0.0 }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Memberships {
    labels: [&'static str; 3],
    degrees: [Degree; 3],
}

impl Memberships {
    /// Grau na posição `index`.
    pub fn at(&self, index: usize) -> Degree {
        self.degrees[index]
    }

    /// Grau pelo rótulo da categoria (`None` se o rótulo não existe).
    pub fn get(&self, label: &str) -> Option<Degree> {
        self.labels
            .iter()
            .position(|l| l.eq_ignore_ascii_case(label))
            .map(|i| self.degrees[i])
    }

    /// Pares `(rótulo, grau)` na ordem dos conjuntos.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Degree)> + '_ {
        self.labels.iter().copied().zip(self.degrees.iter().copied())
    }
}

impl Serialize for Memberships {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        for (label, degree) in self.iter() {
            map.serialize_entry(label, &degree)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrition() -> LinguisticVariable {
        LinguisticVariable::new(
            "nutrition",
            Universe::new(0.0, 350.0),
            [
                FuzzySet::new("low", MembershipShape::triangular(0.0, 0.0, 150.0)),
                FuzzySet::new("medium", MembershipShape::triangular(50.0, 150.0, 250.0)),
                FuzzySet::new("high", MembershipShape::triangular(150.0, 350.0, 350.0)),
            ],
        )
    }

    #[test]
    fn fuzzify_returns_three_named_degrees() {
        let m = nutrition().fuzzify(100.0);
        assert_eq!(m.iter().count(), 3);
        assert!((m.get("low").unwrap().value() - 1.0 / 3.0).abs() < 1e-12);
        assert!((m.get("medium").unwrap().value() - 0.5).abs() < 1e-12);
        assert_eq!(m.get("high"), Some(Degree::ZERO));
        assert_eq!(m.get("extreme"), None);
    }

    #[test]
    fn memberships_serialize_as_map() {
        let json = serde_json::to_value(nutrition().fuzzify(150.0)).unwrap();
        assert_eq!(json["medium"], 1.0);
        assert_eq!(json["low"], 0.0);
        assert_eq!(json["high"], 0.0);
    }

    #[test]
    fn validate_rejects_inverted_universe() {
        let mut var = nutrition();
        var.universe = Universe::new(350.0, 0.0);
        assert!(matches!(
            var.validate(),
            Err(ConfigError::InvalidUniverse { .. })
        ));
    }

    #[test]
    fn curve_covers_universe_edges() {
        let curve = nutrition().curve(8);
        assert_eq!(curve.len(), 8);
        assert_eq!(curve[0].x, 0.0);
        assert_eq!(curve[7].x, 350.0);
        assert_eq!(curve[0].degrees, [1.0, 0.0, 0.0]);
        assert_eq!(curve[7].degrees, [0.0, 0.0, 1.0]);
        assert_eq!(nutrition().curve(0).len(), 2);
    }

    #[test]
    fn curve_point_count_is_bounded() {
        let curve = nutrition().curve(usize::MAX);
        assert_eq!(curve.len(), MAX_CURVE_POINTS);
        assert_eq!(curve[MAX_CURVE_POINTS - 1].x, 350.0);
    }

    #[test]
    fn set_lookup_is_case_insensitive() {
        assert_eq!(nutrition().set_by_label("HIGH").map(|s| s.label), Some("high"));
        assert!(nutrition().set_by_label("alkaline").is_none());
    }
}
