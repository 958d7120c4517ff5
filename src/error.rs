//! The one way a get-or-insert call can be rejected

use std::error::Error;
use std::fmt;

/// A parameter of the nullable get-or-insert functions in
/// [crate::checked]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Argument {
  /// The mapping to read and possibly extend
  Map,
  /// The key to look up
  Key,
  /// The function producing the value for a missing key
  Factory,
}
impl Argument {
  /// Parameter name as it appears in messages
  pub fn name(self) -> &'static str {
    match self {
      Self::Map => "map",
      Self::Key => "key",
      Self::Factory => "factory",
    }
  }
}
impl fmt::Display for Argument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// A required argument was absent. Always raised before the map is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InvalidArgument(pub Argument);
impl InvalidArgument {
  /// The offending parameter
  pub fn argument(&self) -> Argument { self.0 }
}
impl fmt::Display for InvalidArgument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "argument `{}` must not be absent", self.0)
  }
}
impl Error for InvalidArgument {}
