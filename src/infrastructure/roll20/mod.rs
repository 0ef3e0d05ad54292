mod client;
mod listing;

pub use client::*;
pub use listing::*;
