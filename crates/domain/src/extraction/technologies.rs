use std::{collections::BTreeSet, sync::OnceLock};

use lab_catalog_shared_kernel::{DomainError, DomainResult, or_sentinel};
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Built-in label -> phrase table. Patterns are matched case-insensitively.
const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("Azure OpenAI", r"\bAzure\s+OpenAI\b"),
    ("GPT-4", r"\bGPT-4o?\b"),
    ("Foundry", r"\bFoundry\b"),
    ("prompt flow", r"\bprompt\s+flow\b"),
    ("RAG", r"\bRAG\b"),
    ("Retrieval Augmented Generation", r"\bRetrieval\s+Augmented\s+Generation\b"),
    ("Azure AI platform", r"\bAzure\s+AI\s+(?:Services|Studio|Foundry)\b"),
    ("AI hub", r"\bAI\s+hub\b"),
    ("Python SDK", r"\bPython\s+SDK\b"),
    ("TypeScript", r"\bTypeScript\b"),
    (".NET", r"\b\.NET\b"),
    ("fine-tuning", r"\bfine-tun(?:e|ing)\b"),
    ("content filtering", r"\bcontent\s+filter(?:s|ing)?\b"),
    ("evaluation", r"\bevaluation\b"),
    ("embedding", r"\bembedding\b"),
    ("model catalog", r"\bmodel\s+catalog\b"),
    ("chat app", r"\bchat\s+(?:app|playground)\b"),
    ("NER", r"\bNER\b"),
    ("Named Entity Recognition", r"\bNamed\s+Entity\s+Recognition\b"),
];

/// One recognized technology and its matcher.
#[derive(Debug, Clone)]
pub struct TechnologyPattern {
    pub label: &'static str,
    regex: Regex,
}

impl TechnologyPattern {
    /// First matched substring, in the document's own casing.
    pub fn first_match<'a>(&self, content: &'a str) -> Option<&'a str> {
        let found = self.regex.find(content)?.as_str().trim();
        debug!(label = self.label, matched = found, "technology matched");
        Some(found)
    }
}

/// Closed set of technology labels the parser recognizes.
#[derive(Debug, Clone)]
pub struct TechnologyCatalog {
    patterns: Vec<TechnologyPattern>,
}

impl TechnologyCatalog {
    pub fn from_patterns(patterns: &[(&'static str, &str)]) -> DomainResult<Self> {
        let patterns = patterns
            .iter()
            .map(|&(label, pattern)| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| TechnologyPattern { label, regex })
                    .map_err(|err| DomainError::InvalidPattern {
                        pattern: pattern.to_string(),
                        details: err.to_string(),
                        source: Some(Box::new(err)),
                    })
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Process-wide catalog, compiled on first use.
    pub fn builtin() -> &'static Self {
        static CATALOG: OnceLock<TechnologyCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self::from_patterns(BUILTIN_PATTERNS).expect("built-in technology patterns compile"))
    }

    pub fn patterns(&self) -> &[TechnologyPattern] {
        &self.patterns
    }

    /// Distinct matched labels, sorted case-insensitively.
    pub fn detect(&self, content: &str) -> Vec<String> {
        let found: BTreeSet<&str> =
            self.patterns.iter().filter_map(|p| p.first_match(content)).filter(|m| !m.is_empty()).collect();
        let mut labels: Vec<String> = found.into_iter().map(str::to_string).collect();
        labels.sort_by_cached_key(|label| (label.to_lowercase(), label.clone()));
        labels
    }

    /// `", "`-joined labels or the sentinel when nothing matched.
    pub fn render(&self, content: &str) -> String {
        or_sentinel(self.detect(content).join(", "))
    }
}
