//! Status interpretation for the guided endpoints.
//!
//! Phone and database lookups translate HTTP status codes into user-facing
//! guidance; every other endpoint passes the raw body straight through. The
//! two tables share most codes, with 405/406/415 meaningful only for phone
//! lookups. The mapping is deliberately endpoint-specific and is not
//! generalized beyond these two groups.

use serde_json::Value;

/// Guided endpoints with a status-to-message table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Phone,
    Database,
}

impl Lookup {
    /// Feature name at the start of a sentence
    fn feature(&self) -> &'static str {
        match self {
            Lookup::Phone => "Phone lookup",
            Lookup::Database => "Database lookup",
        }
    }

    /// Feature name mid-sentence
    fn feature_lower(&self) -> &'static str {
        match self {
            Lookup::Phone => "phone lookup",
            Lookup::Database => "database lookup",
        }
    }

    /// What the query was about, for no-result messages
    fn subject(&self) -> &'static str {
        match self {
            Lookup::Phone => "phone number",
            Lookup::Database => "query",
        }
    }
}

/// Map a guided endpoint's HTTP status to the message shown to the user.
///
/// Pure: the same inputs always produce the same message, and nothing here
/// inspects any state beyond its arguments.
pub fn interpret(lookup: Lookup, status: u16, body: &[u8], has_api_key: bool) -> String {
    match status {
        200 => render_data(lookup, body),
        401 if !has_api_key => "Error: Unauthorized - Please set your API key using:\n  larc config set-api-key YOUR_API_KEY"
            .to_string(),
        401 | 402 => format!(
            "Error: {} is only available through the web interface or you exceeded rate limit for today/this month.\nPlease visit https://lolarchiver.com to use this feature.",
            lookup.feature()
        ),
        403 => format!(
            "Error: Your current plan does not support {} or you exceeded rate limit for today/this month.\nPlease upgrade your plan or use the web interface at https://lolarchiver.com",
            lookup.feature_lower()
        ),
        404 => format!("Error: No results found for this {}", lookup.subject()),
        405 if lookup == Lookup::Phone => "Error: Phone number is too long".to_string(),
        406 if lookup == Lookup::Phone => "Error: Phone number format is incorrect".to_string(),
        415 if lookup == Lookup::Phone => {
            "Error: Owner requested these results to be hidden".to_string()
        }
        416 => "Error: You have exhausted all credits. Credits refresh in 24 hours".to_string(),
        500 => "Error: Internal server error".to_string(),
        other => {
            let mut message = format!("Error: Unexpected response (Status {other})");
            if !body.is_empty() {
                message.push('\n');
                message.push_str(&String::from_utf8_lossy(body));
            }
            message
        }
    }
}

/// A 200 body: pretty-printed JSON when possible, raw text otherwise.
/// An empty body or a literal `[]` means the server had nothing for us.
fn render_data(lookup: Lookup, body: &[u8]) -> String {
    if body.is_empty() || body == b"[]" {
        return format!("No data found for this {}", lookup.subject());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned()),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

/// Render a passthrough body exactly as the server returned it
pub fn passthrough(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}
