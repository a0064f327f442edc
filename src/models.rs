use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which text variants the API should return. Selector values outside the
/// known set are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    Hebrew,
    English,
    Bilingual,
    All,
    Other(String),
}

impl Language {
    pub fn as_str(&self) -> &str {
        match self {
            Language::Hebrew => "hebrew",
            Language::English => "english",
            Language::Bilingual => "bilingual",
            Language::All => "all",
            Language::Other(value) => value,
        }
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        match value {
            "hebrew" => Language::Hebrew,
            "english" => Language::English,
            "bilingual" => Language::Bilingual,
            "all" => Language::All,
            other => Language::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Language::from(value.as_str()))
    }
}

/// Body of the single POST issued per submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub reference: String,
    pub language: Language,
    pub remove_nikud: bool,
    pub standardize_terms: bool,
    pub split_sentences: bool,
    pub include_adjacent: bool,
    pub adjacent_pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Page>>,
}

impl SearchResponse {
    pub fn failure(message: impl Into<String>) -> SearchResponse {
        SearchResponse {
            success: false,
            message: Some(message.into()),
            content: None,
        }
    }

    /// The server message, treating an empty string as absent.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Absent or `null` numbers decode as `None`, the section still renders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<SectionNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hebrew: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionNumber {
    Integer(i64),
    Decimal(serde_json::Number),
    Text(String),
    /// Anything else the server sends, displayed as its JSON form.
    Other(serde_json::Value),
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionNumber::Integer(n) => write!(f, "{n}"),
            SectionNumber::Decimal(n) => write!(f, "{n}"),
            SectionNumber::Text(s) => f.write_str(s),
            SectionNumber::Other(v) => write!(f, "{v}"),
        }
    }
}
