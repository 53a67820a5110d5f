mod common;
mod export;
mod search;

pub use common::*;
pub use export::*;
pub use search::*;
