//! Agregação das forças de disparo por categoria de saída (`max`).

use serde::Serialize;

use crate::core::{Category, Degree};

/// Força agregada de cada categoria de saída.
///
/// `bad` vem de R2/R5, `medium` de R3/R6 e `good` de R1/R4.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Aggregated {
    pub bad: Degree,
    pub medium: Degree,
    pub good: Degree,
}

impl Aggregated {
    pub fn get(&self, category: Category) -> Degree {
        match category {
            Category::Bad => self.bad,
            Category::Medium => self.medium,
            Category::Good => self.good,
        }
    }

    /// `true` quando nenhuma regra disparou.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_zero())
    }

    fn slot(&mut self, category: Category) -> &mut Degree {
        match category {
            Category::Bad => &mut self.bad,
            Category::Medium => &mut self.medium,
            Category::Good => &mut self.good,
        }
    }
}

/// Combina as forças por categoria usando `max`.
///
/// Categorias sem nenhuma regra ficam em zero.
pub fn aggregate(firings: impl IntoIterator<Item = (Category, Degree)>) -> Aggregated {
    let mut aggregated = Aggregated::default();
    for (category, strength) in firings {
        let slot = aggregated.slot(category);
        *slot = slot.or(strength);
    }
    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_per_category() {
        let agg = aggregate([
            (Category::Good, Degree::new(0.2)),
            (Category::Bad, Degree::new(0.4)),
            (Category::Good, Degree::new(0.6)),
            (Category::Bad, Degree::new(0.1)),
        ]);
        assert_eq!(agg.good, Degree::new(0.6));
        assert_eq!(agg.bad, Degree::new(0.4));
        assert_eq!(agg.medium, Degree::ZERO);
        assert!(!agg.is_empty());
    }

    #[test]
    fn order_does_not_matter() {
        let firings = [
            (Category::Medium, Degree::new(0.3)),
            (Category::Medium, Degree::new(0.9)),
            (Category::Good, Degree::new(0.5)),
        ];
        let mut reversed = firings;
        reversed.reverse();
        assert_eq!(aggregate(firings), aggregate(reversed));
    }

    #[test]
    fn nothing_fired_is_empty() {
        assert!(aggregate([(Category::Good, Degree::ZERO)]).is_empty());
        assert!(aggregate(std::iter::empty()).is_empty());
    }
}
