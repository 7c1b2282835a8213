//! Built-in column types.

mod timestamp;

pub use timestamp::Timestamp;
