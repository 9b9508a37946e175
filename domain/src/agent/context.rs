//! Agent working context

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Everything an agent sees on one invocation (Value Object)
///
/// Contexts are values: extending one produces a new context and leaves the
/// original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentContext {
    system_prompt: String,
    messages: Vec<Message>,
}

impl AgentContext {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            messages: Vec::new(),
        }
    }

    /// Single-shot context: system prompt plus one user message.
    pub fn single(system_prompt: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(system_prompt).with_message(Message::user(prompt))
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Context extended with a user prompt, for one invocation.
    pub fn with_user(&self, content: impl Into<String>) -> Self {
        self.clone().with_message(Message::user(content))
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// System prompt first, followed by the conversation.
    pub fn to_messages(&self) -> Vec<Message> {
        let mut all = Vec::with_capacity(self.messages.len() + 1);
        if !self.system_prompt.is_empty() {
            all.push(Message::system(self.system_prompt.clone()));
        }
        all.extend(self.messages.iter().cloned());
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_user_leaves_original_untouched() {
        let base = AgentContext::new("sys");
        let extended = base.with_user("hello");
        assert!(base.messages().is_empty());
        assert_eq!(extended.messages(), &[Message::user("hello")]);
    }

    #[test]
    fn test_to_messages_prepends_system() {
        let ctx = AgentContext::single("sys", "q").with_message(Message::assistant("a"));
        let all = ctx.to_messages();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], Message::system("sys"));
        assert_eq!(all[2].role, Role::Assistant);
    }

    #[test]
    fn test_empty_system_prompt_is_omitted() {
        let ctx = AgentContext::single("", "q");
        assert_eq!(ctx.to_messages(), vec![Message::user("q")]);
    }
}
