//! Normalizing backend JSON responses into plain text

use serde_json::Value;

/// Extract generated text from a completion response.
///
/// Tries, in order, `choices[0].message.content` (chat completion),
/// `choices[0].text` (legacy completion) and a flat `response` field
/// (Ollama). Empty strings count as missing.
pub fn extract_generated_text(body: &Value) -> Option<String> {
    let first_choice = body
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first());

    if let Some(choice) = first_choice {
        let chat = choice
            .get("message")
            .and_then(|message| message.get("content"));
        if let Some(text) = non_empty_str(chat) {
            return Some(text);
        }
        if let Some(text) = non_empty_str(choice.get("text")) {
            return Some(text);
        }
    }

    extract_response_field(body)
}

/// Extract the flat `response` field used by Ollama's `/generate`
pub fn extract_response_field(body: &Value) -> Option<String> {
    non_empty_str(body.get("response"))
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
