//! Optional tracing of get-or-insert decisions. Nothing in the crate logs
//! unless a map is wrapped in [Logged].

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::mapping::{Mapping, Probe, Vacancy};

/// Where log lines go
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogStrategy {
  /// Print to standard error
  StdErr,
  /// Append to a file, creating it if needed
  File(PathBuf),
}

/// Line-oriented logger
#[derive(Clone, Debug)]
pub struct Logger(LogStrategy);
impl Logger {
  /// Create a logger
  pub fn new(strat: LogStrategy) -> Self { Self(strat) }
  /// Write one line
  pub fn log(&self, msg: impl fmt::Display) -> io::Result<()> {
    match &self.0 {
      LogStrategy::StdErr => writeln!(io::stderr(), "{msg}"),
      LogStrategy::File(f) => {
        let mut file = OpenOptions::new().create(true).append(true).open(f)?;
        writeln!(file, "{msg}")
      },
    }
  }
  /// The strategy this logger was created with
  pub fn strat(&self) -> LogStrategy { self.0.clone() }
}

/// A [Mapping] that reports every probe and insertion to a [Logger]. Failure
/// to write a line never affects the map operation.
pub struct Logged<'m, M: ?Sized> {
  map: &'m mut M,
  logger: &'m Logger,
}
impl<'m, M: ?Sized> Logged<'m, M> {
  /// Wrap a map for the duration of the borrow
  pub fn new(map: &'m mut M, logger: &'m Logger) -> Self { Self { map, logger } }
}

impl<'m, M: Mapping + ?Sized> Mapping for Logged<'m, M>
where M::Key: fmt::Debug
{
  type Key = M::Key;
  type Value = M::Value;
  type Vacancy<'a> = LoggedVacancy<'a, M::Vacancy<'a>>
  where Self: 'a;

  fn probe(&mut self, key: M::Key) -> Probe<'_, M::Value, Self::Vacancy<'_>> {
    let logger = self.logger;
    let shown = format!("{key:?}");
    match self.map.probe(key) {
      Probe::Hit(v) => {
        let _ = logger.log(format_args!("hit {shown}"));
        Probe::Hit(v)
      },
      Probe::Miss(inner) => {
        let _ = logger.log(format_args!("miss {shown}"));
        Probe::Miss(LoggedVacancy { inner, logger })
      },
    }
  }
}

/// Vacancy of a [Logged] map
pub struct LoggedVacancy<'a, S> {
  inner: S,
  logger: &'a Logger,
}
impl<'a, S: Vacancy<'a>> Vacancy<'a> for LoggedVacancy<'a, S>
where S::Key: fmt::Debug
{
  type Key = S::Key;
  type Value = S::Value;
  fn key(&self) -> &S::Key { self.inner.key() }
  fn fill(self, value: S::Value) -> &'a mut S::Value {
    let _ = self.logger.log(format_args!("insert {:?}", self.inner.key()));
    self.inner.fill(value)
  }
}
