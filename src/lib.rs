mod blocks;
mod cache;
mod client;
mod errors;
mod merge;
mod query;
mod types;

pub use blocks::*;
pub use client::*;
pub use errors::*;
pub use merge::*;
pub use query::Query;
pub use types::*;
