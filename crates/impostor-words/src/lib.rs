//! Word service adapter backed by JSON word banks.

#![deny(unsafe_code)]

mod bank;
mod error;

pub use bank::JsonWordBank;
pub use error::WordBankError;
