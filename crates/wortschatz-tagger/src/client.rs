use serde::Deserialize;
use serde_json::json;

use crate::tags::Tag;

const PUNCTUATION: &str = ".,/#!?$%^&*;:{}=-_`~()";

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Tagging service returned {0}")]
    ServiceError(reqwest::StatusCode),
}

/// Part-of-speech tagging backend.
#[async_trait::async_trait]
pub trait Tagger: Send + Sync {
    /// Tag one sentence and return its tokens in order.
    async fn tag(&self, sentence: &str) -> Result<Vec<SentenceToken>, TagError>;
}

/// One token of a tagged sentence, with the surface text already cut out of
/// the sentence and cleared of punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceToken {
    pub id: u32,
    pub start: usize,
    pub end: usize,
    pub tag: Tag,
    pub token: String,
}

#[derive(Debug, Deserialize)]
struct TaggedSentence {
    text: String,
    #[serde(default)]
    tokens: Vec<RawToken>,
}

#[derive(Debug, Deserialize)]
struct RawToken {
    id: u32,
    start: usize,
    end: usize,
    tag: Tag,
}

/// HTTP client for a spaCy-style tagging service.
///
/// The service exposes one endpoint: `GET ?s=<sentence>` tags a single
/// sentence, `POST {"s": [..]}` tags a batch.
#[derive(Debug, Clone)]
pub struct TaggerClient {
    base_url: String,
    batch_size: usize,
    client: reqwest::Client,
}

impl TaggerClient {
    pub fn new(base_url: impl Into<String>, batch_size: usize) -> Self {
        Self {
            base_url: base_url.into(),
            batch_size: batch_size.max(1),
            client: reqwest::Client::new(),
        }
    }

    /// Tag many sentences, one POST request per batch. Results come back in
    /// input order.
    pub async fn tag_batch(
        &self,
        sentences: &[String],
    ) -> Result<Vec<Vec<SentenceToken>>, TagError> {
        let mut tagged = Vec::with_capacity(sentences.len());

        for chunk in sentences.chunks(self.batch_size) {
            let response = self
                .client
                .post(&self.base_url)
                .json(&json!({ "s": chunk }))
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(TagError::ServiceError(response.status()));
            }

            let batch: Vec<TaggedSentence> = response.json().await?;
            tagged.extend(batch.into_iter().map(into_tokens));
            tracing::debug!("tagged {} of {} sentences", tagged.len(), sentences.len());
        }

        Ok(tagged)
    }
}

#[async_trait::async_trait]
impl Tagger for TaggerClient {
    async fn tag(&self, sentence: &str) -> Result<Vec<SentenceToken>, TagError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("s", sentence)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(TagError::ServiceError(response.status()));
        }

        let sentence: TaggedSentence = response.json().await?;
        Ok(into_tokens(sentence))
    }
}

/// Spans reference character offsets of the sentence text, not bytes, so the
/// surface is cut out of a char vector. Out-of-range spans are clamped.
fn into_tokens(sentence: TaggedSentence) -> Vec<SentenceToken> {
    let chars: Vec<char> = sentence.text.chars().collect();

    sentence
        .tokens
        .into_iter()
        .map(|raw| {
            let end = raw.end.min(chars.len());
            let start = raw.start.min(end);
            let surface: String = chars[start..end].iter().collect();

            SentenceToken {
                id: raw.id,
                start: raw.start,
                end: raw.end,
                tag: raw.tag,
                token: strip_punctuation(&surface),
            }
        })
        .collect()
}

fn strip_punctuation(text: &str) -> String {
    let kept: String = text.chars().filter(|c| !PUNCTUATION.contains(*c)).collect();
    kept.trim().to_string()
}
