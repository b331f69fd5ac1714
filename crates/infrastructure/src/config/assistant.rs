//! Assistant persona configuration.

use application::{DEFAULT_SYSTEM_PROMPT, SystemPrompt};
use serde::{Deserialize, Serialize};

/// Settings for what the assistant is told before each conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// System prompt template; `{location}` and `{time}` are filled per request
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
        }
    }
}

impl AssistantConfig {
    pub fn system_prompt(&self) -> SystemPrompt {
        SystemPrompt::new(self.system_prompt.clone())
    }
}
