//! Application services - Use case implementations

mod reply_generator;
mod stage_timer;
mod system_prompt;
mod transcript_resolver;
mod voice_reply_service;

pub use reply_generator::ReplyGenerator;
pub use stage_timer::{Stage, StageTimer};
pub use system_prompt::{DEFAULT_SYSTEM_PROMPT, SystemPrompt};
pub use transcript_resolver::TranscriptResolver;
pub use voice_reply_service::{VoiceReply, VoiceReplyRequest, VoiceReplyService};
