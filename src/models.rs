//! Core data models used throughout Repo Digest.
//!
//! [`RawRepository`] mirrors the loosely-shaped payload handed over by the
//! upstream fetch stage. Everything downstream of it works on the defaulted
//! [`Repository`] view, so optional fields are resolved exactly once.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Description used when a repository has none.
pub const NO_DESCRIPTION: &str = "No description provided";
/// Language used when a repository reports none.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";
/// URL used when a repository has no `html_url`.
pub const NO_URL: &str = "No URL";
/// Timestamp used when a repository has no `updated_at`.
pub const UNKNOWN_UPDATED_AT: &str = "Unknown";
/// Username used when the owner login cannot be found.
pub const UNKNOWN_USERNAME: &str = "Unknown";

/// Repository payload as produced by the hosting API, optionally augmented
/// with a `files` map by the file-fetch stage.
///
/// Every field is lenient: a value of the wrong type degrades to the
/// field's default instead of rejecting the repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRepository {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "topic_list")]
    pub topics: Option<Vec<String>>,
    #[serde(default, deserialize_with = "owner_object")]
    pub owner: Option<Owner>,
    /// Filename to file object. Key order is the source's order and decides
    /// which README wins when several names case-fold to `readme.md`.
    #[serde(default, deserialize_with = "file_map")]
    pub files: Option<IndexMap<String, Option<RepoFile>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    #[serde(default, deserialize_with = "string_only")]
    pub login: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoFile {
    #[serde(default, deserialize_with = "string_only")]
    pub content: Option<String>,
}

/// Strings pass through, numbers and booleans are stringified, anything
/// else is absent.
fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_to_text(&Value::deserialize(deserializer)?))
}

fn string_only<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Null topics render as empty entries, the way a joined list shows them.
fn topic_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| scalar_to_text(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

fn owner_object<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Owner>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(obj) => Some(Owner {
            login: match obj.get("login") {
                Some(Value::String(s)) => Some(s.clone()),
                _ => None,
            },
        }),
        _ => None,
    })
}

/// Entries that are not objects carry no `content`. Object key order is
/// kept because `serde_json` is built with `preserve_order`.
fn file_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<IndexMap<String, Option<RepoFile>>>, D::Error> {
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        entries
            .into_iter()
            .map(|(name, entry)| {
                let file = entry.as_object().map(|obj| RepoFile {
                    content: obj.get("content").and_then(Value::as_str).map(str::to_string),
                });
                (name, file)
            })
            .collect(),
    ))
}

/// Defaulted view of a [`RawRepository`].
///
/// An empty string counts as absent for every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub description: String,
    /// Raw language, kept optional because the tally needs to tell
    /// "absent" apart from a literal `"Unknown"`.
    pub language: Option<String>,
    pub html_url: String,
    pub updated_at: String,
    pub topics: Vec<String>,
}

impl Repository {
    /// Language as displayed in reviews and text blocks.
    pub fn display_language(&self) -> &str {
        self.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE)
    }
}

impl From<&RawRepository> for Repository {
    fn from(raw: &RawRepository) -> Self {
        Self {
            name: raw.name.clone().unwrap_or_default(),
            description: non_empty(&raw.description).unwrap_or(NO_DESCRIPTION).to_string(),
            language: non_empty(&raw.language).map(str::to_string),
            html_url: non_empty(&raw.html_url).unwrap_or(NO_URL).to_string(),
            updated_at: non_empty(&raw.updated_at)
                .unwrap_or(UNKNOWN_UPDATED_AT)
                .to_string(),
            topics: raw.topics.clone().unwrap_or_default(),
        }
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// README text and the short extractive summary derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeExtraction {
    pub readme: String,
    pub main_idea: String,
}

/// Per-repository review emitted in `deterministicReview`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRecord {
    pub name: String,
    pub description: String,
    pub language: String,
    #[serde(rename = "mainIdea")]
    pub main_idea: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub html_url: String,
    pub updated_at: String,
    pub topics: Vec<String>,
}

/// Per-repository record feeding the flattened retrieval text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDetail {
    pub name: String,
    pub description: String,
    pub language: String,
    pub html_url: String,
    pub updated_at: String,
    pub topics: Vec<String>,
    pub readme: String,
    pub main_idea: String,
}

/// Coarse portfolio classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileStrength {
    Weak,
    Good,
    Strong,
}

impl ProfileStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStrength::Weak => "Weak",
            ProfileStrength::Good => "Good",
            ProfileStrength::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for ProfileStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`analyze`](crate::analyze::analyze).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    pub github_username: String,
    #[serde(rename = "totalRepos")]
    pub total_repos: usize,
    #[serde(rename = "recentRepos")]
    pub recent_repos: usize,
    /// Language to occurrence count, in first-seen order.
    pub languages: IndexMap<String, usize>,
    #[serde(rename = "profileStrength")]
    pub profile_strength: ProfileStrength,
    #[serde(rename = "deterministicReview")]
    pub deterministic_review: Vec<ReviewRecord>,
    #[serde(rename = "repoDetailsText")]
    pub repo_details_text: String,
}
