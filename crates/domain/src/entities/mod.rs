//! Domain entities - conversation turns, prompt messages and caller input

mod chat_message;
mod conversation_turn;
mod user_input;

pub use chat_message::{ChatMessage, MessageRole};
pub use conversation_turn::{ConversationTurn, TurnRole};
pub use user_input::{AudioClip, UserInput};
