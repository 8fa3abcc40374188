use crate::domain::chat::entities::{ChatMessage, ConversationTurn, FALLBACK_REPLY};

const ASSISTANT_INSTRUCTIONS: &str = "You are CulinaryAI, a friendly kitchen assistant. \
Answer cooking questions briefly and practically.";

/// Describes which recipes the user currently has in front of them.
pub fn context_line(context_recipes: &[String]) -> String {
    if context_recipes.is_empty() {
        "The user hasn't scanned their fridge yet.".to_string()
    } else {
        format!("The user is looking at: {}.", context_recipes.join(", "))
    }
}

/// System preamble, then the prior history in order, then the new message.
pub fn build_conversation(
    history: &[ChatMessage],
    message: &str,
    context_recipes: &[String],
) -> Vec<ConversationTurn> {
    let mut turns = Vec::with_capacity(history.len() + 3);
    turns.push(ConversationTurn::user(format!(
        "{} {}",
        ASSISTANT_INSTRUCTIONS,
        context_line(context_recipes)
    )));
    turns.push(ConversationTurn::model("Understood. What are we cooking?"));

    turns.extend(history.iter().map(|m| ConversationTurn {
        role: m.role,
        text: m.text.clone(),
    }));
    turns.push(ConversationTurn::user(message));

    turns
}

pub fn reply_or_fallback(reply: String) -> String {
    if reply.trim().is_empty() {
        FALLBACK_REPLY.to_string()
    } else {
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::entities::ChatRole;

    #[test]
    fn context_names_the_recipes_on_screen() {
        let titles = vec!["Shakshuka".to_string(), "Dal Tadka".to_string()];
        assert_eq!(
            context_line(&titles),
            "The user is looking at: Shakshuka, Dal Tadka."
        );
        assert_eq!(context_line(&[]), "The user hasn't scanned their fridge yet.");
    }

    #[test]
    fn history_is_resent_between_preamble_and_new_message() {
        let history = vec![
            ChatMessage {
                id: "1".to_string(),
                role: ChatRole::User,
                text: "Can I swap paneer?".to_string(),
            },
            ChatMessage {
                id: "2".to_string(),
                role: ChatRole::Model,
                text: "Tofu works well.".to_string(),
            },
        ];

        let turns = build_conversation(&history, "How long to press it?", &[]);

        assert_eq!(turns.len(), 5);
        assert!(turns[0].text.contains("hasn't scanned"));
        assert_eq!(turns[2], ConversationTurn::user("Can I swap paneer?"));
        assert_eq!(turns[3], ConversationTurn::model("Tofu works well."));
        assert_eq!(turns[4], ConversationTurn::user("How long to press it?"));
    }

    #[test]
    fn blank_reply_falls_back() {
        assert_eq!(reply_or_fallback("  ".to_string()), FALLBACK_REPLY);
        assert_eq!(reply_or_fallback("Sear it.".to_string()), "Sear it.");
    }
}
