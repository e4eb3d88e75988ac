//! Ideas and fusion records.

/// Where an idea came from. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdeaKind {
    #[default]
    Normal,
    Fused,
}

/// One generated or fused advertising phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idea {
    pub text: String,
    pub kind: IdeaKind,
}

impl Idea {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: IdeaKind::Normal,
        }
    }

    pub fn fused(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: IdeaKind::Fused,
        }
    }

    pub fn is_fused(&self) -> bool {
        self.kind == IdeaKind::Fused
    }
}

/// Parsed reply of a fusion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionOutcome {
    pub result: String,
    pub score: String,
}

/// One completed fusion. `source_texts` always holds at least two entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionRecord {
    pub source_texts: Vec<String>,
    pub result_text: String,
    pub score_text: String,
}

impl FusionRecord {
    pub fn new(source_texts: Vec<String>, outcome: FusionOutcome) -> Self {
        debug_assert!(source_texts.len() >= 2);
        Self {
            source_texts,
            result_text: outcome.result,
            score_text: outcome.score,
        }
    }

    /// "a + b + c", as shown in the history list.
    pub fn combination_label(&self) -> String {
        self.source_texts.join(" + ")
    }
}
