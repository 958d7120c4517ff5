use std::collections::{btree_map, hash_map, BTreeMap, HashMap as StdHashMap};
use std::hash::{BuildHasher, Hash};

use hashbrown::HashMap;

/// A mutable associative container with unique keys, seen through the one
/// operation get-or-insert needs: a single membership probe that either
/// finds the value or hands out the empty slot.
pub trait Mapping {
  /// Type of the keys
  type Key;
  /// Type of the values
  type Value;
  /// Handle to the slot of a missing key
  type Vacancy<'a>: Vacancy<'a, Key = Self::Key, Value = Self::Value>
  where Self: 'a;

  /// Look the key up exactly once
  fn probe(&mut self, key: Self::Key) -> Probe<'_, Self::Value, Self::Vacancy<'_>>;
}

/// The empty slot of a key that was not in the map. Filling it is the only
/// way to insert, and it consumes the handle.
pub trait Vacancy<'a> {
  /// Type of the key waiting to be inserted
  type Key;
  /// Type of the value the slot accepts
  type Value: 'a;
  /// The key that was probed
  fn key(&self) -> &Self::Key;
  /// Insert the value and return a reference to it inside the map
  fn fill(self, value: Self::Value) -> &'a mut Self::Value;
}

/// Outcome of [Mapping::probe]
pub enum Probe<'a, V, S> {
  /// The key is present
  Hit(&'a mut V),
  /// The key is absent, the slot can be filled
  Miss(S),
}
impl<'a, V: 'a, S: Vacancy<'a, Value = V>> Probe<'a, V, S> {
  /// Whether the key was found
  pub fn is_hit(&self) -> bool { matches!(self, Self::Hit(_)) }

  /// Return the stored value, or call `make` once with the key and insert its
  /// output. If `make` fails nothing is inserted.
  pub fn or_try_insert_with<E>(
    self,
    make: impl FnOnce(&S::Key) -> Result<V, E>,
  ) -> Result<&'a mut V, E> {
    match self {
      Self::Hit(v) => Ok(v),
      Self::Miss(slot) => {
        let value = make(slot.key())?;
        Ok(slot.fill(value))
      },
    }
  }
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
  type Key = K;
  type Value = V;
  type Vacancy<'a> = hashbrown::hash_map::VacantEntry<'a, K, V, S>
  where Self: 'a;

  fn probe(&mut self, key: K) -> Probe<'_, V, Self::Vacancy<'_>> {
    match self.entry(key) {
      hashbrown::hash_map::Entry::Occupied(ent) => Probe::Hit(ent.into_mut()),
      hashbrown::hash_map::Entry::Vacant(ent) => Probe::Miss(ent),
    }
  }
}
impl<'a, K: Hash, V: 'a, S: BuildHasher> Vacancy<'a>
  for hashbrown::hash_map::VacantEntry<'a, K, V, S>
{
  type Key = K;
  type Value = V;
  fn key(&self) -> &K { self.key() }
  fn fill(self, value: V) -> &'a mut V { self.insert(value) }
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for StdHashMap<K, V, S> {
  type Key = K;
  type Value = V;
  type Vacancy<'a> = hash_map::VacantEntry<'a, K, V>
  where Self: 'a;

  fn probe(&mut self, key: K) -> Probe<'_, V, Self::Vacancy<'_>> {
    match self.entry(key) {
      hash_map::Entry::Occupied(ent) => Probe::Hit(ent.into_mut()),
      hash_map::Entry::Vacant(ent) => Probe::Miss(ent),
    }
  }
}
impl<'a, K, V: 'a> Vacancy<'a> for hash_map::VacantEntry<'a, K, V> {
  type Key = K;
  type Value = V;
  fn key(&self) -> &K { self.key() }
  fn fill(self, value: V) -> &'a mut V { self.insert(value) }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
  type Key = K;
  type Value = V;
  type Vacancy<'a> = btree_map::VacantEntry<'a, K, V>
  where Self: 'a;

  fn probe(&mut self, key: K) -> Probe<'_, V, Self::Vacancy<'_>> {
    match self.entry(key) {
      btree_map::Entry::Occupied(ent) => Probe::Hit(ent.into_mut()),
      btree_map::Entry::Vacant(ent) => Probe::Miss(ent),
    }
  }
}
impl<'a, K: Ord, V: 'a> Vacancy<'a> for btree_map::VacantEntry<'a, K, V> {
  type Key = K;
  type Value = V;
  fn key(&self) -> &K { self.key() }
  fn fill(self, value: V) -> &'a mut V { self.insert(value) }
}

#[cfg(test)]
pub(crate) mod test {
  use std::cell::Cell;

  use super::{Mapping, Probe, Vacancy};

  /// Association list that counts how it is used
  #[derive(Default)]
  pub struct CountingMap {
    pub entries: Vec<(&'static str, i32)>,
    pub probes: Cell<usize>,
    pub fills: Cell<usize>,
  }
  impl CountingMap {
    pub fn new(entries: &[(&'static str, i32)]) -> Self {
      Self { entries: entries.to_vec(), ..Self::default() }
    }
  }

  pub struct Slot<'a> {
    key: &'static str,
    entries: &'a mut Vec<(&'static str, i32)>,
    fills: &'a Cell<usize>,
  }
  impl<'a> Vacancy<'a> for Slot<'a> {
    type Key = &'static str;
    type Value = i32;
    fn key(&self) -> &&'static str { &self.key }
    fn fill(self, value: i32) -> &'a mut i32 {
      let Slot { key, entries, fills } = self;
      fills.set(fills.get() + 1);
      entries.push((key, value));
      &mut entries.last_mut().expect("just pushed").1
    }
  }

  impl Mapping for CountingMap {
    type Key = &'static str;
    type Value = i32;
    type Vacancy<'a> = Slot<'a>
    where Self: 'a;

    fn probe(&mut self, key: &'static str) -> Probe<'_, i32, Slot<'_>> {
      self.probes.set(self.probes.get() + 1);
      match self.entries.iter().position(|(k, _)| *k == key) {
        Some(i) => Probe::Hit(&mut self.entries[i].1),
        None => Probe::Miss(Slot { key, entries: &mut self.entries, fills: &self.fills }),
      }
    }
  }

  #[test]
  fn probe_outcomes() {
    let mut map = CountingMap::new(&[("a", 1)]);
    assert!(map.probe("a").is_hit());
    assert!(!map.probe("b").is_hit());
    assert_eq!(map.probes.get(), 2);
    assert_eq!(map.fills.get(), 0);
    assert_eq!(map.entries, vec![("a", 1)]);
  }

  #[test]
  fn failed_make_inserts_nothing() {
    let mut map = CountingMap::new(&[]);
    let res = map.probe("x").or_try_insert_with(|_| Err::<i32, _>("nope"));
    assert_eq!(res, Err("nope"));
    assert!(map.entries.is_empty());
    assert_eq!(map.fills.get(), 0);
  }

  #[test]
  fn make_sees_the_key() {
    let mut map = std::collections::BTreeMap::<u8, u32>::new();
    let v = map.probe(5u8).or_try_insert_with(|k| Ok::<_, ()>(*k as u32 * 2));
    assert_eq!(v.copied(), Ok(10));
    assert_eq!(map.get(&5), Some(&10));
  }
}
