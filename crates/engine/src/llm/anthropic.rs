use serde::{Deserialize, Serialize};

use super::LlmError;

const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

// ---------------------------------------------------------------------------
// Request wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// ---------------------------------------------------------------------------
// Response wire types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicResponseBlock>,
    usage: AnthropicUsage,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AnthropicResponseBlock {
    Text { text: String },
}

#[derive(Deserialize)]
struct AnthropicUsage {
    input_tokens: u64,
    output_tokens: u64,
}

#[derive(Deserialize)]
struct AnthropicError {
    error: AnthropicErrorDetail,
}

#[derive(Deserialize)]
struct AnthropicErrorDetail {
    message: String,
}

fn collect_text(resp: &AnthropicResponse) -> String {
    resp.content
        .iter()
        .map(|block| match block {
            AnthropicResponseBlock::Text { text } => text.as_str(),
        })
        .collect::<Vec<_>>()
        .join("")
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Send a single-turn messages request to the Anthropic API.
pub async fn send_messages(
    http: &reqwest::Client,
    api_key: &str,
    model: &str,
    max_tokens: u32,
    temperature: Option<f64>,
    system: &str,
    user: &str,
) -> Result<String, LlmError> {
    let start = std::time::Instant::now();

    let request = AnthropicRequest {
        model,
        max_tokens,
        system,
        messages: vec![AnthropicMessage {
            role: "user",
            content: user,
        }],
        temperature,
    };

    let response = http
        .post(ANTHROPIC_MESSAGES_URL)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .header("content-type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| LlmError::Http(e.to_string()))?;

    let status = response.status();
    let latency = start.elapsed().as_secs_f64();
    metrics::histogram!("oracle.api.latency", "provider" => "anthropic", "model" => model.to_string())
        .record(latency);

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        let body = response.text().await.unwrap_or_default();
        return Err(LlmError::Auth(format!("{}: {}", status, body)));
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok());
        return Err(LlmError::RateLimited { retry_after });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let msg = match serde_json::from_str::<AnthropicError>(&body) {
            Ok(e) => e.error.message,
            Err(_) => body,
        };
        return Err(LlmError::Api(format!("{}: {}", status, msg)));
    }

    let body: AnthropicResponse = response
        .json()
        .await
        .map_err(|e| LlmError::Parse(format!("Failed to parse Anthropic response: {}", e)))?;

    metrics::counter!("oracle.api.input_tokens", "provider" => "anthropic")
        .increment(body.usage.input_tokens);
    metrics::counter!("oracle.api.output_tokens", "provider" => "anthropic")
        .increment(body.usage.output_tokens);

    Ok(collect_text(&body))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_anthropic_text_response() {
        let json = r#"{
            "content": [{"type": "text", "text": "Hello world"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }"#;

        let resp: AnthropicResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.usage.input_tokens, 10);
        assert_eq!(resp.usage.output_tokens, 5);
        assert_eq!(collect_text(&resp), "Hello world");
    }

    #[test]
    fn test_concatenates_multiple_text_blocks() {
        let json = r#"{
            "content": [
                {"type": "text", "text": "{\"claims\": "},
                {"type": "text", "text": "[]}"}
            ],
            "usage": {"input_tokens": 1, "output_tokens": 1}
        }"#;

        let resp: AnthropicResponse = serde_json::from_str(json).unwrap();
        assert_eq!(collect_text(&resp), r#"{"claims": []}"#);
    }

    #[test]
    fn test_request_serializes_system_and_temperature() {
        let request = AnthropicRequest {
            model: "claude-sonnet-4-20250514",
            max_tokens: 4000,
            system: "You are ARGUS.",
            messages: vec![AnthropicMessage {
                role: "user",
                content: "Decompose this.",
            }],
            temperature: Some(0.3),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["system"], "You are ARGUS.");
        assert_eq!(value["temperature"], 0.3);
        assert_eq!(value["messages"][0]["role"], "user");
    }
}
