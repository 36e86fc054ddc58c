//! Parse-or-fail adapters for reasoner output.
//!
//! These functions turn free-form reasoner text into structured debate
//! statements and votes. They are pure domain logic: no I/O, just text
//! pattern matching. Anything they cannot classify with certainty is a
//! [`ParseError`], which callers treat exactly like a transport failure.
//!
//! # Functions
//!
//! | Function | Use Case | Accepted shapes |
//! |----------|----------|-----------------|
//! | [`parse_debate_response`] | Debate statement | Any non-empty text |
//! | [`parse_vote_response`] | Structured vote | JSON object or `VOTE:` / `CONFIDENCE:` lines |
//! | [`infer_position`] | Stance of a statement | Keyword classes, agent-specific order |

use super::vote::VoteChoice;
use crate::agent::{AgentType, Position};
use crate::core::string::truncate;
use thiserror::Error;

/// Longest statement or reasoning kept from a reasoner reply (bytes)
pub const MAX_STATEMENT_LEN: usize = 1200;
/// Pros and cons kept per vote
pub const MAX_PROS_CONS: usize = 2;

const SUPPORT_KEYWORDS: &[&str] = &["support", "approve", "in favor", "in favour", "endorse"];
const OPPOSE_KEYWORDS: &[&str] = &["reject", "oppose", "against", "disapprove"];
const CAUTION_KEYWORDS: &[&str] = &["concern", "risk", "caution"];
const ABSTAIN_KEYWORDS: &[&str] = &["abstain"];

/// Tokens that flip the keyword directly after them
const NEGATORS: &[&str] = &[
    "not", "no", "never", "cannot", "can't", "cant", "don't", "dont", "doesn't", "doesnt",
    "won't", "wont", "didn't", "shouldn't", "wouldn't",
];

/// Suffixes under which a keyword still counts as the same word
const INFLECTIONS: &[&str] = &["", "s", "d", "ed", "es", "ing", "y"];

/// Why a reasoner reply could not be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty response")]
    Empty,

    #[error("Ambiguous response: conflicting vote keywords")]
    Ambiguous,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Field out of range: {0}")]
    OutOfRange(&'static str),
}

/// A debate statement recovered from reasoner output
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStatement {
    pub position: Position,
    pub statement: String,
}

/// A vote recovered from reasoner output
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedVote {
    pub choice: VoteChoice,
    pub confidence: f64,
    pub reasoning: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Parse a debate reply into a statement and inferred position.
pub fn parse_debate_response(
    agent_type: AgentType,
    response: &str,
) -> Result<ParsedStatement, ParseError> {
    let statement = response.trim();
    if statement.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(ParsedStatement {
        position: infer_position(agent_type, statement),
        statement: truncate(statement, MAX_STATEMENT_LEN),
    })
}

/// Infer a stance from keyword classes.
///
/// Generic agents check support keywords before opposition keywords. Risk
/// agents check caution keywords ("concern", "risk", "caution") first, so
/// a cautious Risk statement reads as opposition even when it also
/// mentions support. A support keyword right after a negator ("won't
/// approve") is opposition; negated and plain support together is a
/// clarification.
///
/// ```
/// use parliament_domain::agent::{AgentType, Position};
/// use parliament_domain::quorum::parsing::infer_position;
///
/// let text = "I support this, but the liquidation risk is real.";
/// assert_eq!(infer_position(AgentType::Scout, text), Position::For);
/// assert_eq!(infer_position(AgentType::Risk, text), Position::Against);
/// ```
pub fn infer_position(agent_type: AgentType, text: &str) -> Position {
    let scan = KeywordScan::new(text);
    let support = scan.hits(SUPPORT_KEYWORDS);
    let oppose = scan.hits(OPPOSE_KEYWORDS);

    if agent_type == AgentType::Risk && scan.hits(CAUTION_KEYWORDS).plain {
        return Position::Against;
    }
    if support.plain && support.negated {
        return Position::Clarification;
    }
    if support.plain {
        return Position::For;
    }
    if support.negated || oppose.plain {
        return Position::Against;
    }
    Position::Clarification
}

/// Parse a vote reply.
///
/// Supports two shapes:
///
/// 1. **JSON** (preferred): `{"vote": "approve", "confidence": 82, "reasoning": "..."}`
/// 2. **Labelled lines**: `VOTE: reject` / `CONFIDENCE: 75` / `REASONING: ...`
///    with optional `PROS:` / `CONS:` lines (items separated by `;`)
///
/// When no explicit vote field is present the whole text is scanned for
/// vote keywords: no keywords means abstain, conflicting keywords is
/// [`ParseError::Ambiguous`]. A missing or out-of-range confidence is
/// always an error.
///
/// # Examples
///
/// ```
/// use parliament_domain::quorum::parsing::parse_vote_response;
/// use parliament_domain::quorum::VoteChoice;
///
/// let vote = parse_vote_response("VOTE: reject\nCONFIDENCE: 75\nREASONING: Too volatile").unwrap();
/// assert_eq!(vote.choice, VoteChoice::Reject);
/// assert_eq!(vote.confidence, 75.0);
///
/// assert!(parse_vote_response("I approve, but I also reject it").is_err());
/// ```
pub fn parse_vote_response(response: &str) -> Result<ParsedVote, ParseError> {
    let response = response.trim();
    if response.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(parsed) = parse_json_vote(response) {
        return parsed;
    }
    parse_labelled_vote(response)
}

fn parse_json_vote(response: &str) -> Option<Result<ParsedVote, ParseError>> {
    let start = response.find('{')?;
    let end = response[start..].rfind('}')?;
    let value: serde_json::Value =
        serde_json::from_str(&response[start..start + end + 1]).ok()?;
    let object = value.as_object()?;

    // Only treat the object as a vote if it looks like one
    if !object.contains_key("vote") && !object.contains_key("confidence") {
        return None;
    }

    Some(vote_from_json(object))
}

fn vote_from_json(
    object: &serde_json::Map<String, serde_json::Value>,
) -> Result<ParsedVote, ParseError> {
    let choice = match object.get("vote").and_then(|v| v.as_str()) {
        Some(raw) => classify_choice(raw)?,
        None => return Err(ParseError::MissingField("vote")),
    };
    let confidence = object
        .get("confidence")
        .and_then(|v| v.as_f64())
        .ok_or(ParseError::MissingField("confidence"))?;
    let reasoning = object
        .get("reasoning")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::MissingField("reasoning"))?;

    let list = |key: &str| -> Vec<String> {
        object
            .get(key)
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i.as_str())
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .take(MAX_PROS_CONS)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    };

    Ok(ParsedVote {
        choice,
        confidence: check_confidence(confidence)?,
        reasoning: truncate(reasoning, MAX_STATEMENT_LEN),
        pros: list("pros"),
        cons: list("cons"),
    })
}

fn parse_labelled_vote(response: &str) -> Result<ParsedVote, ParseError> {
    let mut vote_field = None;
    let mut confidence_field = None;
    let mut reasoning_field = None;
    let mut pros = Vec::new();
    let mut cons = Vec::new();
    let mut free_text = Vec::new();

    for line in response.lines() {
        let trimmed = line.trim().trim_start_matches(['*', '-', '#', ' ']);
        match split_label(trimmed) {
            Some(("vote", value)) => vote_field = Some(value),
            Some(("confidence", value)) => confidence_field = Some(value),
            Some(("reasoning", value)) => reasoning_field = Some(value),
            Some(("pros", value)) => pros = split_items(value),
            Some(("cons", value)) => cons = split_items(value),
            _ => free_text.push(line.trim()),
        }
    }

    let choice = match vote_field {
        Some(value) => classify_choice(value)?,
        None => scan_choice(response)?,
    };

    let confidence = confidence_field
        .ok_or(ParseError::MissingField("confidence"))?
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::MissingField("confidence"))?;

    let reasoning = match reasoning_field {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => free_text
            .into_iter()
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    };
    if reasoning.trim().is_empty() {
        return Err(ParseError::MissingField("reasoning"));
    }

    Ok(ParsedVote {
        choice,
        confidence: check_confidence(confidence)?,
        reasoning: truncate(reasoning.trim(), MAX_STATEMENT_LEN),
        pros,
        cons,
    })
}

/// Split "LABEL: value" into (lowercase label, trimmed value); markdown
/// bold markers on either side of the colon are dropped
fn split_label(line: &str) -> Option<(&'static str, &str)> {
    let (label, value) = line.split_once(':')?;
    let label = match label.trim_matches(['*', ' ']).to_lowercase().as_str() {
        "vote" | "decision" => "vote",
        "confidence" => "confidence",
        "reasoning" | "reason" => "reasoning",
        "pros" => "pros",
        "cons" => "cons",
        _ => return None,
    };
    Some((label, value.trim_matches(|c: char| c == '*' || c.is_whitespace())))
}

fn split_items(value: &str) -> Vec<String> {
    value
        .split([';', '|'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_PROS_CONS)
        .map(String::from)
        .collect()
}

/// Classify an explicit vote value; anything unrecognised is ambiguous
fn classify_choice(raw: &str) -> Result<VoteChoice, ParseError> {
    let scan = KeywordScan::new(raw);
    let support = scan.hits(SUPPORT_KEYWORDS);
    let approve = support.plain;
    let reject = support.negated || scan.hits(OPPOSE_KEYWORDS).plain;
    let abstain = scan.hits(ABSTAIN_KEYWORDS).plain;

    match (approve, reject, abstain) {
        (true, false, false) => Ok(VoteChoice::Approve),
        (false, true, false) => Ok(VoteChoice::Reject),
        (false, false, true) => Ok(VoteChoice::Abstain),
        _ => Err(ParseError::Ambiguous),
    }
}

/// Keyword scan of free text; no keywords means abstain
fn scan_choice(text: &str) -> Result<VoteChoice, ParseError> {
    let scan = KeywordScan::new(text);
    let support = scan.hits(SUPPORT_KEYWORDS);
    let approve = support.plain;
    let reject = support.negated || scan.hits(OPPOSE_KEYWORDS).plain;

    match (approve, reject) {
        (true, true) => Err(ParseError::Ambiguous),
        (true, false) => Ok(VoteChoice::Approve),
        (false, true) => Ok(VoteChoice::Reject),
        (false, false) => Ok(VoteChoice::Abstain),
    }
}

fn check_confidence(confidence: f64) -> Result<f64, ParseError> {
    if confidence.is_finite() && (0.0..=100.0).contains(&confidence) {
        Ok(confidence)
    } else {
        Err(ParseError::OutOfRange("confidence"))
    }
}

/// Occurrences of a keyword class, split by whether a negator precedes them
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct KeywordHits {
    plain: bool,
    negated: bool,
}

/// Lowercased word tokens of a text; apostrophes stay inside words
struct KeywordScan {
    tokens: Vec<String>,
}

impl KeywordScan {
    fn new(text: &str) -> Self {
        let lower = text.to_lowercase().replace('\u{2019}', "'");
        let tokens = lower
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .map(|t| t.trim_matches('\''))
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        Self { tokens }
    }

    fn hits(&self, phrases: &[&str]) -> KeywordHits {
        let mut hits = KeywordHits::default();
        for start in 0..self.tokens.len() {
            if !phrases.iter().any(|p| self.phrase_at(start, p)) {
                continue;
            }
            let negated = start
                .checked_sub(1)
                .is_some_and(|prev| NEGATORS.contains(&self.tokens[prev].as_str()));
            if negated {
                hits.negated = true;
            } else {
                hits.plain = true;
            }
        }
        hits
    }

    /// Whole-word match; only the last word of a phrase may be inflected
    fn phrase_at(&self, start: usize, phrase: &str) -> bool {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.is_empty() || start + words.len() > self.tokens.len() {
            return false;
        }
        words.iter().enumerate().all(|(i, word)| {
            let token = self.tokens[start + i].as_str();
            if i + 1 == words.len() {
                is_inflection_of(token, word)
            } else {
                token == *word
            }
        })
    }
}

fn is_inflection_of(token: &str, word: &str) -> bool {
    if token
        .strip_prefix(word)
        .is_some_and(|suffix| INFLECTIONS.contains(&suffix))
    {
        return true;
    }
    // approve -> approving
    word.strip_suffix('e')
        .and_then(|stem| token.strip_prefix(stem))
        .is_some_and(|suffix| suffix == "ing")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== infer_position Tests ====================

    #[test]
    fn test_generic_support_before_oppose() {
        let text = "I support the swap even though some would oppose it.";
        assert_eq!(infer_position(AgentType::Execution, text), Position::For);
    }

    #[test]
    fn test_risk_checks_caution_first() {
        let text = "I approve in principle but have a concern about depth.";
        assert_eq!(infer_position(AgentType::Meta, text), Position::For);
        assert_eq!(infer_position(AgentType::Risk, text), Position::Against);
    }

    #[test]
    fn test_negated_support_is_opposition() {
        assert_eq!(
            infer_position(AgentType::Scout, "I cannot approve this allocation."),
            Position::Against
        );
        assert_eq!(
            infer_position(AgentType::Scout, "I disapprove."),
            Position::Against
        );
    }

    #[test]
    fn test_contracted_negation_is_opposition() {
        assert_eq!(
            infer_position(AgentType::Scout, "I won't approve this swap."),
            Position::Against
        );
        assert_eq!(
            infer_position(AgentType::Execution, "We don\u{2019}t endorse the route."),
            Position::Against
        );
        assert_eq!(
            infer_position(AgentType::Meta, "We are not in favor of it."),
            Position::Against
        );
    }

    #[test]
    fn test_mixed_negated_and_plain_support_is_clarification() {
        let text = "I don't support the size, but I support the idea.";
        assert_eq!(infer_position(AgentType::Scout, text), Position::Clarification);
    }

    #[test]
    fn test_keywords_match_whole_words() {
        // "brisk" is not "risk"
        assert_eq!(
            infer_position(AgentType::Risk, "Volume is brisk and I support it."),
            Position::For
        );
        assert_eq!(
            infer_position(AgentType::Risk, "This looks risky."),
            Position::Against
        );
        assert_eq!(
            infer_position(AgentType::Scout, "We approved similar pools before."),
            Position::For
        );
        assert_eq!(
            infer_position(AgentType::Scout, "Unsupportable claims aside, fees dropped."),
            Position::Clarification
        );
    }

    #[test]
    fn test_negated_caution_does_not_block_support() {
        assert_eq!(
            infer_position(AgentType::Risk, "No concerns here, I support it."),
            Position::For
        );
    }

    #[test]
    fn test_no_keywords_is_clarification() {
        assert_eq!(
            infer_position(AgentType::Meta, "What is the expected gas cost?"),
            Position::Clarification
        );
    }

    // ==================== parse_debate_response Tests ====================

    #[test]
    fn test_debate_empty_fails() {
        assert_eq!(
            parse_debate_response(AgentType::Scout, "   \n "),
            Err(ParseError::Empty)
        );
    }

    #[test]
    fn test_debate_statement_trimmed_and_truncated() {
        let parsed = parse_debate_response(AgentType::Scout, "  We should endorse it.  ").unwrap();
        assert_eq!(parsed.statement, "We should endorse it.");
        assert_eq!(parsed.position, Position::For);

        let long = "a".repeat(MAX_STATEMENT_LEN * 2);
        let parsed = parse_debate_response(AgentType::Meta, &long).unwrap();
        assert!(parsed.statement.len() <= MAX_STATEMENT_LEN);
    }

    // ==================== parse_vote_response Tests ====================

    #[test]
    fn test_vote_json() {
        let response = r#"
Here is my vote:
```json
{"vote": "approve", "confidence": 82, "reasoning": "Fees are low", "pros": ["cheap", "fast", "extra"], "cons": ["thin book"]}
```
"#;
        let vote = parse_vote_response(response).unwrap();
        assert_eq!(vote.choice, VoteChoice::Approve);
        assert_eq!(vote.confidence, 82.0);
        assert_eq!(vote.reasoning, "Fees are low");
        assert_eq!(vote.pros, vec!["cheap", "fast"]);
        assert_eq!(vote.cons, vec!["thin book"]);
    }

    #[test]
    fn test_vote_json_missing_confidence() {
        let response = r#"{"vote": "reject", "reasoning": "Too risky"}"#;
        assert_eq!(
            parse_vote_response(response),
            Err(ParseError::MissingField("confidence"))
        );
    }

    #[test]
    fn test_vote_labelled_lines() {
        let response = "VOTE: Reject\nCONFIDENCE: 75%\nREASONING: Liquidity is too thin\nPROS: decent APY\nCONS: slippage; exit risk";
        let vote = parse_vote_response(response).unwrap();
        assert_eq!(vote.choice, VoteChoice::Reject);
        assert_eq!(vote.confidence, 75.0);
        assert_eq!(vote.reasoning, "Liquidity is too thin");
        assert_eq!(vote.pros, vec!["decent APY"]);
        assert_eq!(vote.cons, vec!["slippage", "exit risk"]);
    }

    #[test]
    fn test_vote_markdown_labels() {
        let response = "**Vote**: abstain\n**Confidence**: 55\nNeed more data on fees.";
        let vote = parse_vote_response(response).unwrap();
        assert_eq!(vote.choice, VoteChoice::Abstain);
        assert_eq!(vote.confidence, 55.0);

        let response = "**Vote:** approve\n**Confidence:** 80%\nDepth is fine.";
        let vote = parse_vote_response(response).unwrap();
        assert_eq!(vote.choice, VoteChoice::Approve);
        assert_eq!(vote.confidence, 80.0);
        assert_eq!(vote.reasoning, "Depth is fine.");

        let response = "- VOTE: abstain\n- CONFIDENCE: 55\nNeed more data on fees.";
        let vote = parse_vote_response(response).unwrap();
        assert_eq!(vote.choice, VoteChoice::Abstain);
        assert_eq!(vote.reasoning, "Need more data on fees.");
    }

    #[test]
    fn test_vote_keyword_scan_without_label() {
        let vote = parse_vote_response("I approve this plan.\nCONFIDENCE: 70").unwrap();
        assert_eq!(vote.choice, VoteChoice::Approve);
        assert_eq!(vote.reasoning, "I approve this plan.");

        let vote = parse_vote_response("The numbers look unclear.\nCONFIDENCE: 50").unwrap();
        assert_eq!(vote.choice, VoteChoice::Abstain);
    }

    #[test]
    fn test_vote_conflicting_keywords_is_ambiguous() {
        let response = "I approve the idea but reject the sizing.\nCONFIDENCE: 60";
        assert_eq!(parse_vote_response(response), Err(ParseError::Ambiguous));
    }

    #[test]
    fn test_vote_unrecognised_label_value_is_ambiguous() {
        let response = "VOTE: maybe\nCONFIDENCE: 60\nREASONING: unsure";
        assert_eq!(parse_vote_response(response), Err(ParseError::Ambiguous));
    }

    #[test]
    fn test_vote_confidence_out_of_range() {
        let response = "VOTE: approve\nCONFIDENCE: 140\nREASONING: great";
        assert_eq!(
            parse_vote_response(response),
            Err(ParseError::OutOfRange("confidence"))
        );
    }

    #[test]
    fn test_vote_missing_confidence() {
        assert_eq!(
            parse_vote_response("VOTE: approve\nREASONING: great"),
            Err(ParseError::MissingField("confidence"))
        );
    }

    #[test]
    fn test_vote_missing_reasoning() {
        assert_eq!(
            parse_vote_response("VOTE: approve\nCONFIDENCE: 80"),
            Err(ParseError::MissingField("reasoning"))
        );
    }

    #[test]
    fn test_vote_negated_approval_is_reject() {
        let vote = parse_vote_response("VOTE: do not approve\nCONFIDENCE: 66\nREASONING: no").unwrap();
        assert_eq!(vote.choice, VoteChoice::Reject);
    }

    #[test]
    fn test_vote_contracted_negation_is_reject() {
        let vote = parse_vote_response("I don't support this proposal.\nCONFIDENCE: 80").unwrap();
        assert_eq!(vote.choice, VoteChoice::Reject);

        let vote = parse_vote_response("We should never endorse this.\nCONFIDENCE: 72").unwrap();
        assert_eq!(vote.choice, VoteChoice::Reject);

        let vote =
            parse_vote_response("VOTE: do not endorse\nCONFIDENCE: 60\nREASONING: thin book")
                .unwrap();
        assert_eq!(vote.choice, VoteChoice::Reject);
    }

    #[test]
    fn test_vote_negated_and_plain_support_is_ambiguous() {
        let response = "I don't support the size, but I approve the idea.\nCONFIDENCE: 70";
        assert_eq!(parse_vote_response(response), Err(ParseError::Ambiguous));
    }

    #[test]
    fn test_vote_scan_ignores_word_fragments() {
        let vote = parse_vote_response("The data is unsupported so far.\nCONFIDENCE: 40").unwrap();
        assert_eq!(vote.choice, VoteChoice::Abstain);
    }

    #[test]
    fn test_vote_empty() {
        assert_eq!(parse_vote_response(""), Err(ParseError::Empty));
    }
}
