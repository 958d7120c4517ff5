//! Get-or-insert on [HashMap] with a borrowed key. The key is only turned
//! into an owned value when a new entry has to be created.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use hashbrown::HashMap;

/// Get the given value from the map or initialize it with the callback if it
/// doesn't exist, then return a mutable reference.
pub fn get_or_make<'a, K, V, S, Q>(
  map: &'a mut HashMap<K, V, S>,
  k: &Q,
  make: impl FnOnce() -> V,
) -> &'a mut V
where
  K: Eq + Hash + Borrow<Q>,
  Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
  S: BuildHasher,
{
  map.raw_entry_mut().from_key(k).or_insert_with(|| (k.to_owned(), make())).1
}

/// Return the given value from the map or default-initialize it if it doesn't
/// exist, then return a mutable reference.
pub fn get_or_default<'a, K, V, S, Q>(map: &'a mut HashMap<K, V, S>, k: &Q) -> &'a mut V
where
  K: Eq + Hash + Borrow<Q>,
  Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
  S: BuildHasher,
  V: Default,
{
  get_or_make(map, k, V::default)
}

#[cfg(test)]
mod test {
  use std::cell::Cell;
  use std::hash::{Hash, Hasher};
  use std::rc::Rc;

  use hashbrown::HashMap;

  use super::{get_or_default, get_or_make};

  #[test]
  fn str_keys() {
    let mut map: HashMap<String, usize> = HashMap::new();
    *get_or_default(&mut map, "a") += 1;
    *get_or_default(&mut map, "a") += 1;
    assert_eq!(*get_or_make(&mut map, "b", || 10), 10);
    assert_eq!(map["a"], 2);
    assert_eq!(map.len(), 2);
  }

  /// Key that counts how often it was cloned
  struct Counted(u8, Rc<Cell<usize>>);
  impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
  }
  impl Eq for Counted {}
  impl Hash for Counted {
    fn hash<H: Hasher>(&self, state: &mut H) { self.0.hash(state) }
  }
  impl Clone for Counted {
    fn clone(&self) -> Self {
      self.1.set(self.1.get() + 1);
      Self(self.0, self.1.clone())
    }
  }

  #[test]
  fn clones_only_on_miss() {
    let clones = Rc::new(Cell::new(0));
    let key = Counted(1, clones.clone());
    let mut map = HashMap::new();
    assert_eq!(*get_or_make(&mut map, &key, || 'x'), 'x');
    assert_eq!(clones.get(), 1);
    assert_eq!(*get_or_make(&mut map, &key, || 'y'), 'x');
    assert_eq!(clones.get(), 1);
  }
}
