use crate::error::{ClassificationError, ClassificationResult};
use async_trait::async_trait;
use devterm_types::TermEntry;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const SYSTEM_INSTRUCTION: &str = "\
You are an expert software engineer and terminology dictionary. \
Analyze the words the user provides.

RULES:
1. FILTERING: only accept terms directly related to computer science, \
software engineering, hardware, or technology. Reject everyday words \
(reject \"apple\" the fruit; accept \"table\" only as the database concept).
2. FORMAT: normalize each accepted 'term' to compound-word capitalization \
(e.g. \"api gateway\" -> \"ApiGateway\").
3. REJECTION: words unrelated to software go in 'rejectedTerms' and in no \
category.
4. CONTENT: fullForm is the expansion when one exists (SaaS -> Software as \
a Service); category is one of Frontend, Backend, DevOps, Security, AI, \
Network, or similar; definition is one precise technical line.";

/// One classification batch as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    /// Entries judged in-domain, already normalized to the entry shape.
    #[serde(rename = "validTerms", default)]
    pub accepted: Vec<TermEntry>,
    /// Raw tokens judged unrelated to the software/technology domain.
    #[serde(rename = "rejectedTerms", default)]
    pub rejected: Vec<String>,
}

/// Classification capability consumed by the engine.
///
/// The production implementation is [`TermClassifier`]; tests substitute
/// their own.
#[async_trait]
pub trait Classify: Send + Sync {
    /// Classifies one raw text blob of comma/newline-separated terms.
    async fn classify(&self, raw_text: &str) -> ClassificationResult<ClassificationOutcome>;
}

/// Configuration for the generative-language classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// API key for the service.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Base URL of the service (overridable for tests).
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-3-flash-preview".to_string(),
            api_base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Gateway to the generative-language `generateContent` endpoint.
pub struct TermClassifier {
    config: ClassifierConfig,
    client: Client,
}

impl TermClassifier {
    /// Creates a classifier with a timeout-bounded HTTP client.
    pub fn new(config: ClassifierConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    fn request_body(raw_text: &str) -> serde_json::Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "contents": [{
                "parts": [{ "text": format!("Words to analyze:\n{raw_text}") }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "validTerms": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "term": { "type": "STRING" },
                                    "fullForm": { "type": "STRING" },
                                    "category": { "type": "STRING" },
                                    "definition": { "type": "STRING" }
                                },
                                "required": ["term", "fullForm", "category", "definition"]
                            }
                        },
                        "rejectedTerms": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["validTerms", "rejectedTerms"]
                }
            }
        })
    }
}

#[async_trait]
impl Classify for TermClassifier {
    async fn classify(&self, raw_text: &str) -> ClassificationResult<ClassificationOutcome> {
        // Empty input short-circuits without a network call.
        if raw_text.trim().is_empty() {
            return Ok(ClassificationOutcome::default());
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        );

        debug!(model = %self.config.model, "sending classification request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&Self::request_body(raw_text))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassificationError::Timeout
                } else {
                    ClassificationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassificationError::Service(status.as_u16()));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ClassificationError::MalformedResponse(e.to_string()))?;

        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(ClassificationError::EmptyResponse)?;

        serde_json::from_str(&text)
            .map_err(|e| ClassificationError::MalformedResponse(e.to_string()))
    }
}

/// Response envelope structures for `generateContent`.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
