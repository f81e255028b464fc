//! Conversation assembly: system prompt selection, history trimming,
//! and message ordering.

use answerbot_core::types::ChatMessage;

/// History entries kept per call; older entries are silently dropped.
pub const DEFAULT_MAX_HISTORY: usize = 6;

/// The assembled message sequence plus whether grounding context was
/// available for this question.
#[derive(Debug)]
pub struct BuiltConversation {
    pub messages: Vec<ChatMessage>,
    pub has_context: bool,
}

/// System prompt for questions with no relevant documentation: refuse
/// with a fixed sentence, never fabricate.
fn refusal_prompt(organization: &str) -> String {
    format!(
        "You are a customer support assistant for {organization}. \
         No relevant documentation was found for the visitor's question. \
         Reply with exactly this sentence and nothing else: \
         \"I'm sorry, I don't have information about that. Please contact \
         the {organization} team directly and they'll be happy to help.\" \
         Never invent or guess an answer."
    )
}

/// System prompt for questions with documentation: answer only from the
/// embedded context, disclose gaps, synthesize rather than quote.
fn grounded_prompt(organization: &str, context: &str) -> String {
    format!(
        "You are a customer support assistant for {organization}. \
         Answer the visitor using ONLY the documentation between the \
         markers below. If the documentation covers the question only \
         partially, answer what you can and say plainly what it does not \
         cover; do not fill gaps with invented facts. Synthesize the \
         information in your own words instead of quoting it verbatim.\n\n\
         --- CONTEXT START ---\n\
         {context}\n\
         --- CONTEXT END ---"
    )
}

/// Build the ordered message sequence: one system message, the most
/// recent `max_history` history entries, then the user message verbatim.
pub fn build_conversation(
    user_message: &str,
    context: &str,
    history: &[ChatMessage],
    max_history: usize,
    organization: &str,
) -> BuiltConversation {
    let has_context = !context.trim().is_empty();

    let system = if has_context {
        grounded_prompt(organization, context)
    } else {
        refusal_prompt(organization)
    };

    let recent = &history[history.len().saturating_sub(max_history)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(ChatMessage::system(system));
    messages.extend_from_slice(recent);
    messages.push(ChatMessage::user(user_message));

    BuiltConversation { messages, has_context }
}
