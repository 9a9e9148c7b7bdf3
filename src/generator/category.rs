//! Stage 1: browse categories. No dependencies on other entities.

use super::text;
use crate::catalog::Category;
use rand::seq::IndexedRandom;
use rand::Rng;

pub fn generate_categories(count: usize, rng: &mut impl Rng) -> Vec<Category> {
    (0..count)
        .map(|_| Category {
            id: text::entity_id(rng),
            name: text::GENRES.choose(rng).copied().unwrap_or("Rock").to_string(),
            image: text::random_image(rng, 300),
            description: text::random_description(rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn zero_count_yields_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_categories(0, &mut rng).is_empty());
    }

    #[test]
    fn generates_requested_count_with_unique_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let categories = generate_categories(10, &mut rng);
        assert_eq!(categories.len(), 10);
        let ids: HashSet<_> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
        for category in &categories {
            assert!(!category.name.is_empty());
            assert!(!category.description.is_empty());
        }
    }
}
