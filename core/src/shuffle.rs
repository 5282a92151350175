use crate::engine::Random;

/// In-place Fisher–Yates shuffle.
///
/// Walks from the last index down to 1, swapping each slot with one drawn
/// from `[0, i]` via [`Random::next_int`]. Draws `len - 1` values (none for
/// an empty slice). Inherits `next_int`'s modulo bias.
pub fn random_shuffle<T>(items: &mut [T], rng: &mut Random) {
    debug_assert!(
        items.len() <= u32::MAX as usize,
        "random_shuffle slice longer than u32::MAX"
    );
    for i in (1..items.len()).rev() {
        let j = rng.next_int((i + 1) as u32) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_42_fixture() {
        let mut items = [1, 2, 3, 4, 5];
        random_shuffle(&mut items, &mut Random::new(42));
        assert_eq!(items, [4, 3, 5, 1, 2]);
    }

    #[test]
    fn reproducible_from_same_seed() {
        let mut a = [1, 2, 3, 4, 5];
        let mut b = [1, 2, 3, 4, 5];
        random_shuffle(&mut a, &mut Random::new(42));
        random_shuffle(&mut b, &mut Random::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut rng = Random::new(9);
        let before = rng.state();

        let mut empty: [u8; 0] = [];
        random_shuffle(&mut empty, &mut rng);
        let mut single = ["only"];
        random_shuffle(&mut single, &mut rng);

        assert_eq!(single, ["only"]);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn draws_len_minus_one() {
        let mut rng = Random::new(11);
        let mut reference = Random::new(11);
        let mut items: Vec<u32> = (0..10).collect();
        random_shuffle(&mut items, &mut rng);
        for _ in 0..9 {
            reference.next_raw();
        }
        assert_eq!(rng, reference);
    }

    #[test]
    fn keeps_multiset() {
        let mut rng = Random::new(2024);
        let mut items = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let mut expected = items.clone();
        random_shuffle(&mut items, &mut rng);
        items.sort_unstable();
        expected.sort_unstable();
        assert_eq!(items, expected);
    }

    #[test]
    fn non_copy_elements() {
        let mut items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        random_shuffle(&mut items, &mut Random::new(1));
        items.sort();
        assert_eq!(items, ["a", "b", "c"]);
    }

    #[test]
    fn every_position_reachable() {
        // Over many shuffles of [0, 1, 2], each value lands in each slot.
        let mut rng = Random::new(77);
        let mut seen = [[false; 3]; 3];
        for _ in 0..300 {
            let mut items = [0usize, 1, 2];
            random_shuffle(&mut items, &mut rng);
            for (slot, &value) in items.iter().enumerate() {
                seen[value][slot] = true;
            }
        }
        assert!(seen.iter().flatten().all(|&s| s));
    }
}
