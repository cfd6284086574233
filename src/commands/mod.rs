pub mod handle_batch_command;
pub mod validate_command;

pub use self::{handle_batch_command::*, validate_command::*};
