pub mod errors;
pub mod events;

pub use errors::ControlError;
pub use events::{EventSink, LoadDecision};

pub type Result<T> = std::result::Result<T, ControlError>;
