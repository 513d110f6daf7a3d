mod openai_client;
mod scripted_transport;

pub use openai_client::*;
pub use scripted_transport::*;
