use crate::{deque::DequeError, mem::MemStrategyError};
use core::fmt::{Debug, Display, Formatter};

const _: () = {
  assert!(size_of::<Error>() == 1);
};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // Internal
  //
  DequeError(DequeError),
  MemStrategyError(MemStrategyError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<Error> for () {
  #[inline]
  fn from(_: Error) -> Self {}
}

impl From<DequeError> for Error {
  #[inline]
  fn from(from: DequeError) -> Self {
    Self::DequeError(from)
  }
}

impl From<MemStrategyError> for Error {
  #[inline]
  fn from(from: MemStrategyError) -> Self {
    Self::MemStrategyError(from)
  }
}
