//! Map and set scenarios through the capability traits.

use corral_core::{Arrayable, Collection, CollectionError, Map, Set};
use corral_table::{HashMap, HashSet};

#[test]
fn put_keys_intersection_union() {
    let mut map = HashMap::new();
    map.put("a", 1);
    map.put("b", 2);
    let keys: HashSet<&str> = Map::keys(&map);
    assert_eq!(keys, ["a", "b"].into_iter().collect());

    let mut map2 = HashMap::new();
    map2.put("b", 3);
    map2.put("c", 4);

    assert_eq!(map.intersection(&map2).to_vec(), vec![("b", 2)]);
    assert_eq!(
        map.union(&map2).to_vec(),
        vec![("a", 1), ("b", 3), ("c", 4)]
    );
}

#[test]
fn get_after_remove_is_not_found() {
    let mut map = HashMap::new();
    map.put(10u32, "ten");
    assert_eq!(Map::get(&map, &10), Ok(&"ten"));
    assert!(Map::remove(&mut map, &10));
    assert!(!Map::has(&map, &10));
    assert_eq!(Map::get(&map, &10), Err(CollectionError::NotFound));
    assert_eq!(Map::try_get(&map, &10), None);
    assert!(!Map::remove(&mut map, &10));
}

#[test]
fn values_preserve_insertion_order() {
    let map: HashMap<char, u8> = [('z', 1), ('a', 2), ('m', 3)].into_iter().collect();
    assert_eq!(Map::values(&map).to_vec(), vec![1, 2, 3]);
    let pairs: Vec<_> = Map::pairs(&map).map(|(k, _)| *k).collect();
    assert_eq!(pairs, vec!['z', 'a', 'm']);
}

#[test]
fn clear_returns_to_empty() {
    let mut set: HashSet<u16> = (0..50).collect();
    assert_eq!(set.count(), 50);
    Collection::clear(&mut set);
    assert!(set.is_empty());
    assert!(Set::add(&mut set, 7));
    assert_eq!(Arrayable::to_vec(&set), vec![7]);
}

#[test]
fn algebra_results_are_independent() {
    let a: HashSet<u8> = [1, 2].into_iter().collect();
    let b: HashSet<u8> = [2, 3].into_iter().collect();
    let mut union = a.union(&b);
    union.add(9);
    assert!(!a.has(&9));
    assert!(!b.has(&9));
}
