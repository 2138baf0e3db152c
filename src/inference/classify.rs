//! Classificação do score em categoria (intervalos fechados à esquerda).

use crate::core::Category;

/// Limite inferior de `medium`.
pub const MEDIUM_THRESHOLD: f64 = 40.0;

/// Limite inferior de `good`.
pub const GOOD_THRESHOLD: f64 = 70.0;

/// `score < 40` → bad, `40 ≤ score < 70` → medium, senão good.
pub fn classify(score: f64) -> Category {
    if score < MEDIUM_THRESHOLD {
        Category::Bad
    } else if score < GOOD_THRESHOLD {
        Category::Medium
    } else {
        Category::Good
    }
}
