//! Collection of things that are not used in the library but may be useful for the user.

#[cfg(feature = "extra")]
pub mod storage;

#[cfg(feature = "builtin")]
pub mod builtin;
