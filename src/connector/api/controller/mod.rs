pub mod chat_controller;
pub mod send_controller;

pub use chat_controller::ChatController;
pub use send_controller::SendController;
