//! Reference content: daily quotes/facts and the piggy bank image tiers.

#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    /// "quote", "fact", ...
    pub kind: String,
    pub text: String,
}

/// Image shown once the total saved reaches `threshold`
#[derive(Debug, Clone, PartialEq)]
pub struct PigImageTier {
    pub threshold: f64,
    pub image: String,
}

impl From<&ContentEntry> for shared::DailyContent {
    fn from(entry: &ContentEntry) -> Self {
        shared::DailyContent {
            kind: entry.kind.clone(),
            text: entry.text.clone(),
        }
    }
}
