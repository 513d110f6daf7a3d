mod completion_transport;

pub use completion_transport::*;
