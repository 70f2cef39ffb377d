use crate::models::{ChatMessage, Dataset};

/// Instruction block placed ahead of the data
pub const SYSTEM_PROMPT: &str = r#"You are a helpful assistant answering questions about a sales team.

Guidelines:
- Answer using only the sales data provided below
- Refer to sales representatives and clients by name
- If the data doesn't contain the answer, say so honestly
- Be concise"#;

/// Render a conversation as `User:` / `Assistant:` lines, oldest first
pub fn render_history(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role.label(), m.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the complete prompt sent to the LLM.
///
/// `history` must already contain the latest user question as its last entry.
pub fn build_prompt(
    dataset: &Dataset,
    history: &[ChatMessage],
) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string(dataset)?;

    Ok(format!(
        "{system}\n\n---\n\nHere is some sales data:\n{data}\n\n---\n\nConversation so far:\n{conversation}\n\n---\n\nBased on this data, please answer the latest user question.",
        system = SYSTEM_PROMPT,
        data = data,
        conversation = render_history(history),
    ))
}
