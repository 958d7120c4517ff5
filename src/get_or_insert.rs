use never::Never;

use crate::mapping::Mapping;

/// Get-or-insert methods for every [Mapping]. Each call probes the map once
/// and inserts at most once; factories run only when the key is missing.
/// The returned reference points at the value now stored under the key.
pub trait GetOrInsert: Mapping {
  /// Return the value under `key`, inserting `value` first if the key is
  /// missing. A present value is never overwritten; `value` is then dropped.
  fn get_or_insert(&mut self, key: Self::Key, value: Self::Value) -> &mut Self::Value {
    self.get_or_insert_with(key, || value)
  }

  /// Like [GetOrInsert::get_or_insert] but the value is only built if it's
  /// needed
  fn get_or_insert_with(
    &mut self,
    key: Self::Key,
    make: impl FnOnce() -> Self::Value,
  ) -> &mut Self::Value {
    self.get_or_insert_with_key(key, |_| make())
  }

  /// Like [GetOrInsert::get_or_insert_with] but `make` receives the key
  fn get_or_insert_with_key(
    &mut self,
    key: Self::Key,
    make: impl FnOnce(&Self::Key) -> Self::Value,
  ) -> &mut Self::Value {
    (self.probe(key).or_try_insert_with(|k| Ok::<_, Never>(make(k))))
      .unwrap_or_else(|e| match e {})
  }

  /// Like [GetOrInsert::get_or_insert_with_key] but `make` also receives
  /// `arg`, so it doesn't have to capture its context. `arg` is dropped
  /// unused if the key is present.
  fn get_or_insert_with_arg<A>(
    &mut self,
    key: Self::Key,
    make: impl FnOnce(&Self::Key, A) -> Self::Value,
    arg: A,
  ) -> &mut Self::Value {
    self.get_or_insert_with_key(key, |k| make(k, arg))
  }

  /// Return the value under `key`, default-initializing it if missing
  fn get_or_default(&mut self, key: Self::Key) -> &mut Self::Value
  where Self::Value: Default {
    self.get_or_insert_with(key, Default::default)
  }

  /// Return the value under `key`, or try to build one. If `make` fails the
  /// error is returned and the map is left as it was.
  fn get_or_try_insert_with<E>(
    &mut self,
    key: Self::Key,
    make: impl FnOnce(&Self::Key) -> Result<Self::Value, E>,
  ) -> Result<&mut Self::Value, E> {
    self.probe(key).or_try_insert_with(make)
  }
}

impl<M: Mapping + ?Sized> GetOrInsert for M {}
