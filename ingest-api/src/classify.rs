use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w\.-]+@[\w\.-]+").expect("email pattern compiles"));
static SSN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("ssn pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PiiTag {
    #[serde(rename = "PII:EMAIL")]
    Email,
    #[serde(rename = "PII:SSN")]
    Ssn,
}

impl PiiTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PiiTag::Email => "PII:EMAIL",
            PiiTag::Ssn => "PII:SSN",
        }
    }
}

impl fmt::Display for PiiTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags in a fixed order: email before SSN.
pub fn classify_text(text: &str) -> Vec<PiiTag> {
    let mut tags = Vec::new();
    if EMAIL.is_match(text) {
        tags.push(PiiTag::Email);
    }
    if SSN.is_match(text) {
        tags.push(PiiTag::Ssn);
    }
    tags
}

pub fn classify_documents(documents: &BTreeMap<String, String>) -> BTreeMap<String, Vec<PiiTag>> {
    documents
        .iter()
        .map(|(name, text)| (name.clone(), classify_text(text)))
        .collect()
}
