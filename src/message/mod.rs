//! The message payload carried through the dispatch engine, and the dynamic
//! argument types it holds.

pub mod payload;
pub mod value;

pub use payload::MessagePayload;
pub use value::{Args, Kwargs};
