use serde::Deserialize;
use serde_json::Value;

use crate::constants::JD_NOT_SPECIFIED;

use super::{JdError, JdSummary};

const JOIN: &str = ", ";

/// Instruction sent to the completion model for `jd_text`.
pub fn build_prompt(jd_text: &str) -> String {
    format!(
        "Read the job description below and list what a candidate needs.\n\
         Reply with JSON only, in exactly this shape:\n\
         {{\"skills\": [\"...\"], \"experience\": [\"...\"]}}\n\
         \"skills\" holds technical skills, tools, languages and frameworks. \
         \"experience\" holds years of experience, seniority and domain background. \
         Use an empty array when the description says nothing about a field.\n\n\
         Job description:\n{}",
        jd_text.trim()
    )
}

#[derive(Deserialize)]
struct RawExtraction {
    #[serde(default)]
    skills: Value,
    #[serde(default)]
    experience: Value,
}

/// Parses a model reply, tolerating a Markdown code fence around the JSON.
///
/// Missing, non-array or empty fields become `"Not specified"`.
pub fn parse_summary(reply: &str) -> Result<JdSummary, JdError> {
    let body = strip_code_fence(reply);
    let raw: RawExtraction =
        serde_json::from_str(body).map_err(|e| JdError::malformed(e.to_string()))?;

    Ok(JdSummary {
        skills: join_entries(&raw.skills),
        experience: join_entries(&raw.experience),
    })
}

fn strip_code_fence(reply: &str) -> &str {
    let mut body = reply.trim();
    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    } else if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

fn join_entries(field: &Value) -> String {
    let entries: Vec<String> = field
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if entries.is_empty() {
        JD_NOT_SPECIFIED.to_string()
    } else {
        entries.join(JOIN)
    }
}
