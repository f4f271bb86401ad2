//! integrated tests

mod conversion;
mod nav;

#[cfg(feature = "serde")]
mod serialization;
