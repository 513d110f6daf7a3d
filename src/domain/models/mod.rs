mod chat;
mod completion;

pub use chat::*;
pub use completion::*;
