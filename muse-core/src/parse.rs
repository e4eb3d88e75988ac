//! Text parsing of model replies.

use std::sync::LazyLock;

use regex::Regex;

use crate::idea::FusionOutcome;

/// Score used when the reply carries no recognizable `评分` line.
pub const UNSCORED: &str = "未评分";

/// Captures stop at any line terminator, `\r` and U+2028/U+2029 included.
static FUSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"结果[：:]([^\n\r\x{2028}\x{2029}]*)[\n\r]+评分[：:]([^\n\r\x{2028}\x{2029}]*)")
        .expect("fusion pattern is valid")
});

/// Split a generation reply into phrases: one per line, trimmed, blanks dropped.
pub fn split_ideas(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract `结果：<text>` and a later `评分：<score>`.
///
/// Without a match (or with a blank result) the first line of the reply is
/// the result; without a score the score is [`UNSCORED`].
pub fn parse_fusion(raw: &str) -> FusionOutcome {
    let content = raw.trim();
    let captures = FUSION_PATTERN.captures(content);

    let group = |i: usize| {
        captures
            .as_ref()
            .and_then(|c| c.get(i))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
    };

    let result = group(1)
        .unwrap_or_else(|| content.split('\n').next().unwrap_or("").trim())
        .to_string();
    let score = group(2).unwrap_or(UNSCORED).to_string();

    FusionOutcome { result, score }
}
