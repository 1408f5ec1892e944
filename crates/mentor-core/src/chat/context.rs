//! Conversation context builder.
//!
//! Every request gets a fresh three-turn context: the persona prompt, a fixed
//! acknowledgment that the persona was adopted, then the user's message.
//! Priming with an explicit acknowledgment keeps the model in character
//! without relying on a provider-side system role.

use mentor_types::chat::{ConversationContext, Turn, TurnRole};
use mentor_types::config::{ChatConfig, DEFAULT_ACKNOWLEDGMENT};

/// Builds [`ConversationContext`]s. Holds only the acknowledgment literal.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    acknowledgment: String,
}

impl ContextBuilder {
    pub fn new(acknowledgment: impl Into<String>) -> Self {
        Self {
            acknowledgment: acknowledgment.into(),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.acknowledgment.clone())
    }

    pub fn acknowledgment(&self) -> &str {
        &self.acknowledgment
    }

    /// Assemble `system_persona, assistant_ack, user`, inputs copied verbatim.
    ///
    /// Callers validate that both strings are non-empty first.
    pub fn build(&self, persona_prompt: &str, user_message: &str) -> ConversationContext {
        ConversationContext::new(vec![
            Turn {
                role: TurnRole::SystemPersona,
                text: persona_prompt.to_string(),
            },
            Turn {
                role: TurnRole::AssistantAck,
                text: self.acknowledgment.clone(),
            },
            Turn {
                role: TurnRole::User,
                text: user_message.to_string(),
            },
        ])
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ACKNOWLEDGMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_types::llm::MessageRole;

    #[test]
    fn test_build_produces_three_turns_in_order() {
        let ctx = ContextBuilder::default().build("You are a mentor.", "How do I start?");

        let roles: Vec<TurnRole> = ctx.turns().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![TurnRole::SystemPersona, TurnRole::AssistantAck, TurnRole::User]
        );
        assert_eq!(ctx.turns()[0].text, "You are a mentor.");
        assert_eq!(ctx.turns()[1].text, DEFAULT_ACKNOWLEDGMENT);
        assert_eq!(ctx.turns()[2].text, "How do I start?");
    }

    #[test]
    fn test_inputs_are_verbatim() {
        let prompt = "  Persona with\nnewlines and  spaces  ";
        let message = "émoji 🚀 and \"quotes\"";
        let ctx = ContextBuilder::default().build(prompt, message);
        assert_eq!(ctx.turns()[0].text, prompt);
        assert_eq!(ctx.turns()[2].text, message);
    }

    #[test]
    fn test_acknowledgment_is_not_derived_from_input() {
        let builder = ContextBuilder::new("Understood.");
        let a = builder.build("persona a", "message a");
        let b = builder.build("persona b", "message b");
        assert_eq!(a.turns()[1].text, "Understood.");
        assert_eq!(a.turns()[1], b.turns()[1]);
    }

    #[test]
    fn test_from_config_uses_configured_acknowledgment() {
        let config = ChatConfig {
            acknowledgment: "Pronto.".to_string(),
        };
        assert_eq!(ContextBuilder::from_config(&config).acknowledgment(), "Pronto.");
    }

    #[test]
    fn test_to_messages_alternates_for_provider() {
        let messages = ContextBuilder::default().build("p", "m").to_messages();
        let roles: Vec<MessageRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::User, MessageRole::Assistant, MessageRole::User]
        );
        assert_eq!(messages[0].content, "p");
        assert_eq!(messages[2].content, "m");
    }
}
