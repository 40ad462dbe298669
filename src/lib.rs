pub mod arithmetic;
pub mod check;
pub mod config;
pub mod error;
pub mod operation;
pub mod output;

pub use arithmetic::{Number, add, subtract};
