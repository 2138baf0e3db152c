//! # Category — Rótulos da Qualidade do Solo
//!
//! A variável de saída `quality` tem exatamente três categorias:
//!
//! | Categoria | Faixa do score | Centróide fixo |
//! |-----------|----------------|----------------|
//! | [`Bad`](Category::Bad) | `score < 40` | 25 |
//! | [`Medium`](Category::Medium) | `40 ≤ score < 70` | 50 |
//! | [`Good`](Category::Good) | `score ≥ 70` | 75 |
//!
//! O centróide fixo só é usado pela defuzzificação em forma fechada.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categoria de qualidade do solo (consequente das regras e rótulo final).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bad,
    Medium,
    Good,
}

impl Category {
    /// Todas as categorias, da pior para a melhor.
    pub const ALL: [Category; 3] = [Category::Bad, Category::Medium, Category::Good];

    /// Rótulo textual (`"bad"`, `"medium"`, `"good"`).
    pub fn label(self) -> &'static str {
        match self {
            Category::Bad => "bad",
            Category::Medium => "medium",
            Category::Good => "good",
        }
    }

    /// Posição da categoria no conjunto de saída.
    pub fn index(self) -> usize {
        match self {
            Category::Bad => 0,
            Category::Medium => 1,
            Category::Good => 2,
        }
    }

    /// Ponto representativo usado pelo centróide em forma fechada.
    pub fn centroid(self) -> f64 {
        match self {
            Category::Bad => 25.0,
            Category::Medium => 50.0,
            Category::Good => 75.0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nível linguístico de uma variável de entrada.
///
/// Toda entrada tem três níveis. Os rótulos mudam por variável
/// (`acidity` usa acidic/normal/alkaline, as demais low/medium/high),
/// mas a posição é a mesma.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    pub fn index(self) -> usize {
        match self {
            Level::Low => 0,
            Level::Medium => 1,
            Level::High => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_serde_agree() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn indexes_follow_declaration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }
}
