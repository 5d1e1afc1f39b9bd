#![no_std]

pub mod error;
pub use error::ValueAccessError;

pub mod optional;
pub use optional::Optional;

pub mod outcome;
pub use outcome::Outcome;
