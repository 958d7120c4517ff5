//! Get-or-insert for callers whose arguments may be absent. Every argument
//! is validated in the order map, key, factory before the map is probed, so
//! a rejected call never mutates the map and never runs the factory.

use crate::error::{Argument, InvalidArgument};
use crate::get_or_insert::GetOrInsert;
use crate::mapping::Mapping;

/// Result of the functions in this module
pub type CheckedResult<'a, V> = Result<&'a mut V, InvalidArgument>;

fn present<T>(arg: Option<T>, which: Argument) -> Result<T, InvalidArgument> {
  arg.ok_or(InvalidArgument(which))
}

/// Nullable form of [GetOrInsert::get_or_insert]
pub fn get_or_insert<'a, M: Mapping + ?Sized>(
  map: Option<&'a mut M>,
  key: Option<M::Key>,
  value: M::Value,
) -> CheckedResult<'a, M::Value> {
  let map = present(map, Argument::Map)?;
  let key = present(key, Argument::Key)?;
  Ok(map.get_or_insert(key, value))
}

/// Nullable form of [GetOrInsert::get_or_insert_with]
pub fn get_or_insert_with<'a, M: Mapping + ?Sized>(
  map: Option<&'a mut M>,
  key: Option<M::Key>,
  make: Option<impl FnOnce() -> M::Value>,
) -> CheckedResult<'a, M::Value> {
  let map = present(map, Argument::Map)?;
  let key = present(key, Argument::Key)?;
  let make = present(make, Argument::Factory)?;
  Ok(map.get_or_insert_with(key, make))
}

/// Nullable form of [GetOrInsert::get_or_insert_with_arg]
pub fn get_or_insert_with_arg<'a, M: Mapping + ?Sized, A>(
  map: Option<&'a mut M>,
  key: Option<M::Key>,
  make: Option<impl FnOnce(&M::Key, A) -> M::Value>,
  arg: A,
) -> CheckedResult<'a, M::Value> {
  let map = present(map, Argument::Map)?;
  let key = present(key, Argument::Key)?;
  let make = present(make, Argument::Factory)?;
  Ok(map.get_or_insert_with_arg(key, make, arg))
}
