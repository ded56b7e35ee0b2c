//! Load lists of integers, summarise and normalize them, and classify
//! number triples.

pub mod classify;
pub mod data;
pub mod error;
pub mod report;
pub mod stats;

pub use error::{Error, Result};
