use rand::Rng;

/// In-place Fisher-Yates shuffle driven by `rng`.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Random permutation of `0..len`.
pub fn permutation<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    shuffle_in_place(rng, &mut order);
    order
}

/// Shuffled copy of `items`; the input is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(rng, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn permutation_contains_every_index_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut order = permutation(&mut rng, 100);
        order.sort_unstable();
        assert_eq!(order, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn permutation_is_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            permutation(&mut rng, 20)
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn shuffled_leaves_input_intact() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = vec!["a", "b", "c", "d"];
        let mut out = shuffled(&mut rng, &items);
        assert_eq!(items, vec!["a", "b", "c", "d"]);
        out.sort_unstable();
        assert_eq!(out, items);
    }

    #[test]
    fn empty_and_single_element_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(permutation(&mut rng, 0).is_empty());
        assert_eq!(permutation(&mut rng, 1), vec![0]);
    }
}
