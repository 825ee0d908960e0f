//! Set algebra laws over randomly generated sets.

use corral_core::Set;
use corral_table::HashSet;
use proptest::prelude::*;

fn set_of(values: &[u8]) -> HashSet<u8> {
    values.iter().copied().collect()
}

proptest! {
    #[test]
    fn union_membership(
        a in prop::collection::vec(0u8..40, 0..30),
        b in prop::collection::vec(0u8..40, 0..30),
        x in 0u8..40,
    ) {
        let (a, b) = (set_of(&a), set_of(&b));
        prop_assert_eq!(a.union(&b).has(&x), a.has(&x) || b.has(&x));
    }

    #[test]
    fn intersection_membership(
        a in prop::collection::vec(0u8..40, 0..30),
        b in prop::collection::vec(0u8..40, 0..30),
        x in 0u8..40,
    ) {
        let (a, b) = (set_of(&a), set_of(&b));
        prop_assert_eq!(a.intersection(&b).has(&x), a.has(&x) && b.has(&x));
    }

    #[test]
    fn difference_is_disjoint_from_other(
        a in prop::collection::vec(0u8..40, 0..30),
        b in prop::collection::vec(0u8..40, 0..30),
    ) {
        let (a, b) = (set_of(&a), set_of(&b));
        prop_assert!(a.difference(&b).intersection(&b).is_empty());
    }

    #[test]
    fn exclusive_is_union_minus_intersection(
        a in prop::collection::vec(0u8..40, 0..30),
        b in prop::collection::vec(0u8..40, 0..30),
    ) {
        let (a, b) = (set_of(&a), set_of(&b));
        let expected = a.union(&b).difference(&a.intersection(&b));
        prop_assert_eq!(a.exclusive(&b), expected);
    }

    #[test]
    fn operands_are_unchanged(
        a in prop::collection::vec(0u8..40, 0..30),
        b in prop::collection::vec(0u8..40, 0..30),
    ) {
        let (a, b) = (set_of(&a), set_of(&b));
        let (a_before, b_before) = (a.to_vec(), b.to_vec());
        let _ = a.union(&b);
        let _ = a.intersection(&b);
        let _ = a.difference(&b);
        let _ = a.exclusive(&b);
        prop_assert_eq!(a.to_vec(), a_before);
        prop_assert_eq!(b.to_vec(), b_before);
    }
}
