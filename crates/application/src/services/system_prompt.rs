//! System instruction sent ahead of the conversation

use chrono::{DateTime, Utc};
use domain::CallerContext;

/// Persona used when no template is configured
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
- You are a friendly, helpful voice assistant.
- Keep your responses short. Answer in one or two sentences unless asked for more.
- If a request is unclear, ask the user to clarify.
- You do not have access to up-to-date information, so say so when asked about current events.
- You cannot perform actions. You can only talk.
- Do not use markdown, emojis, or other formatting. Your words are read aloud.
- User location is {location}.
- The time is {time}.
- Your brain is Llama 3 running on Groq. Your voice is Sonic, from Cartesia.
";

/// System prompt template with `{location}` and `{time}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt {
    template: String,
}

impl Default for SystemPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}

impl SystemPrompt {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Fill in the caller's location and local time
    pub fn render(&self, caller: &CallerContext, now: DateTime<Utc>) -> String {
        let location = caller.location_label();
        let time = caller.local_time(now);
        fill_placeholders(&self.template, &location, &time)
    }
}

/// Single pass substitution, so placeholder text inside a value stays literal
fn fill_placeholders(template: &str, location: &str, time: &str) -> String {
    let mut out = String::with_capacity(template.len() + location.len() + time.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        if let Some(after) = tail.strip_prefix("{location}") {
            out.push_str(location);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{time}") {
            out.push_str(time);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
