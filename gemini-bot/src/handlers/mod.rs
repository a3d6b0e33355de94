//! Handlers making up the command router: logging, fixed commands, and the catch-all
//! conversation handler.

mod command_handler;
mod conversation_handler;
mod logging_handler;

pub use command_handler::CommandHandler;
pub use conversation_handler::ConversationHandler;
pub use logging_handler::LoggingHandler;
