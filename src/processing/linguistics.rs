//! Linguistic analysis: sentences, tokens, noun chunks and named entities
//!
//! Extractors only see the [`Analysis`] value, so any toolkit can sit behind
//! the [`LinguisticAnalyzer`] trait. [`RuleBasedAnalyzer`] is the built-in
//! backend: Unicode sentence segmentation, a regex tokenizer, a function-word
//! chunker and capitalization/gazetteer entity rules tuned for resumes. Its
//! output is heuristic and passed through without confidence filtering.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// A byte range of the analyzed text together with its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Span {
    fn from_range(source: &str, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            text: source[start..end].to_string(),
        }
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Word,
    Number,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub span: Span,
    pub kind: TokenKind,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.span.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Location,
    Organization,
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityLabel::Person => write!(f, "PERSON"),
            EntityLabel::Location => write!(f, "LOCATION"),
            EntityLabel::Organization => write!(f, "ORGANIZATION"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub span: Span,
    pub label: EntityLabel,
}

impl Entity {
    pub fn text(&self) -> &str {
        &self.span.text
    }
}

/// Output of one analysis pass. Every sequence is in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub sentences: Vec<Span>,
    pub tokens: Vec<Token>,
    pub noun_chunks: Vec<Span>,
    pub entities: Vec<Entity>,
}

impl Analysis {
    /// First entity with `label` in scan order.
    pub fn first_entity(&self, label: EntityLabel) -> Option<&Entity> {
        self.entities.iter().find(|e| e.label == label)
    }
}

/// Pluggable natural-language backend.
pub trait LinguisticAnalyzer: Send + Sync {
    /// Human-readable backend identifier (e.g. "rule-based").
    fn analyzer_id(&self) -> &str;

    /// Run a single analysis pass over `text`.
    fn analyze(&self, text: &str) -> Analysis;
}

/// Built-in analyzer with no external models.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedAnalyzer;

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl LinguisticAnalyzer for RuleBasedAnalyzer {
    fn analyzer_id(&self) -> &str {
        "rule-based"
    }

    fn analyze(&self, text: &str) -> Analysis {
        let sentences = split_sentences(text);
        let tokens = tokenize(text);
        let noun_chunks = noun_chunks(text, &sentences, &tokens);
        let entities = recognize_entities(text);

        Analysis {
            sentences,
            tokens,
            noun_chunks,
            entities,
        }
    }
}

/// Sentence spans by Unicode sentence boundaries. Line breaks end a
/// sentence; surrounding whitespace is excluded from each span.
pub fn split_sentences(text: &str) -> Vec<Span> {
    text.split_sentence_bound_indices()
        .filter_map(|(offset, raw)| {
            let trimmed_start = raw.trim_start();
            let start = offset + (raw.len() - trimmed_start.len());
            let end = start + trimmed_start.trim_end().len();
            (end > start).then(|| Span::from_range(text, start, end))
        })
        .collect()
}

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:[.\-'@_][\p{L}\p{N}]+)*[+#]*|[^\s\p{L}\p{N}]")
        .expect("token pattern should compile")
});

/// Word, number and single-character punctuation tokens. Inner `.`, `-`,
/// `'`, `@` and `_` and trailing `+`/`#` stay inside a token, so `c++`,
/// `node.js` and email addresses are single tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN
        .find_iter(text)
        .map(|m| {
            let s = m.as_str();
            let kind = if s.chars().any(char::is_alphabetic) {
                TokenKind::Word
            } else if s.chars().any(char::is_numeric) {
                TokenKind::Number
            } else {
                TokenKind::Punct
            };
            Token {
                span: Span::from_range(text, m.start(), m.end()),
                kind,
            }
        })
        .collect()
}

static FUNCTION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // determiners and pronouns
        "a", "an", "the", "this", "that", "these", "those", "my", "our", "your", "his", "her",
        "their", "its", "i", "we", "you", "he", "she", "they", "it", "me", "us", "them", "who",
        "which", "what", "each", "every", "some", "any", "all", "both", "other", "such",
        // prepositions and conjunctions
        "of", "in", "on", "at", "to", "for", "from", "with", "by", "as", "into", "onto", "over",
        "under", "about", "across", "through", "during", "within", "without", "between",
        "among", "and", "or", "but", "nor", "so", "yet", "while", "since", "until", "than",
        "via", "per", "including", "like",
        // auxiliaries and common verbs
        "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must", "worked", "work", "working", "led", "lead", "managed", "developed", "built",
        "designed", "used", "using", "created", "implemented", "improved", "delivered",
        "collaborated", "graduated", "studied", "completed", "earned", "received", "served",
        "responsible", "also", "not", "very", "more", "most",
    ]
    .into_iter()
    .collect()
});

/// Maximal runs of content tokens inside one sentence. Punctuation and
/// function words break a run; the chunk text is the source slice covering
/// the run.
pub fn noun_chunks(text: &str, sentences: &[Span], tokens: &[Token]) -> Vec<Span> {
    let mut chunks = Vec::new();
    let mut token_idx = 0;

    for sentence in sentences {
        let mut run: Option<(usize, usize)> = None;

        while token_idx < tokens.len() && tokens[token_idx].span.start < sentence.end {
            let token = &tokens[token_idx];
            token_idx += 1;

            if token.span.start < sentence.start {
                continue;
            }

            let is_content = token.kind != TokenKind::Punct
                && !FUNCTION_WORDS.contains(token.text().to_lowercase().as_str());

            if is_content {
                run = match run {
                    Some((start, _)) => Some((start, token.span.end)),
                    None => Some((token.span.start, token.span.end)),
                };
            } else if let Some((start, end)) = run.take() {
                chunks.push(Span::from_range(text, start, end));
            }
        }

        if let Some((start, end)) = run {
            chunks.push(Span::from_range(text, start, end));
        }
    }

    chunks
}

static US_STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire",
    "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington", "West Virginia",
    "Wisconsin", "Wyoming",
];

static STATE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
        "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
        "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
        "VA", "WA", "WV", "WI", "WY", "DC",
    ]
    .into_iter()
    .collect()
});

static COUNTRIES_AND_CITIES: &[&str] = &[
    "United States", "USA", "Canada", "Mexico", "United Kingdom", "UK", "Ireland", "France",
    "Germany", "Spain", "Italy", "Netherlands", "Portugal", "Sweden", "Norway", "Poland",
    "India", "China", "Japan", "Singapore", "Australia", "New Zealand", "Brazil", "Argentina",
    "Nigeria", "Kenya", "Ghana", "South Africa", "Egypt", "Pakistan", "Bangladesh",
    "New York City", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "San Francisco", "San Jose", "Austin", "Seattle",
    "Boston", "Denver", "Atlanta", "Miami", "Portland", "London", "Manchester", "Paris",
    "Berlin", "Munich", "Madrid", "Barcelona", "Rome", "Milan", "Amsterdam", "Dublin",
    "Toronto", "Vancouver", "Montreal", "Sydney", "Melbourne", "Tokyo", "Seoul", "Beijing",
    "Shanghai", "Hong Kong", "Mumbai", "Bangalore", "Delhi", "Dubai", "Lagos", "Nairobi",
    "Accra", "Johannesburg", "Cape Town", "Cairo",
];

static GAZETTEER: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = US_STATES
        .iter()
        .chain(COUNTRIES_AND_CITIES.iter())
        .copied()
        .collect();
    // Longest first so "New York City" wins over "New York".
    names.sort_by(|a, b| b.len().cmp(&a.len()));
    let alternation = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("gazetteer pattern should compile")
});

static CITY_STATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:[ \t][A-Z][a-z]+)?),[ \t]*([A-Z]{2})\b")
        .expect("city/state pattern should compile")
});

static ORGANIZATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\b(?:[A-Z][A-Za-z&\-]+[ \t]+){0,4}",
        r"(?:University|College|Institute|Academy|School|Inc|Ltd|LLC|Corp|Corporation",
        r"|Company|Technologies|Labs|Group|Bank)\b",
        r"(?:[ \t]+of(?:[ \t]+[A-Z][a-z]+)+)?",
    ))
    .expect("organization pattern should compile")
});

static CAPITALIZED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:-[A-Z][a-z]+)?(?:[ \t]+(?:[A-Z]\.|[A-Z][a-z]+(?:-[A-Z][a-z]+)?))+")
        .expect("capitalized run pattern should compile")
});

static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)^[ \t]*([A-Z][a-z]+(?:-[A-Z][a-z]+)?",
        r"(?:[ \t]+(?:[A-Z]\.|[A-Z][a-z]+(?:-[A-Z][a-z]+)?)){1,2})[ \t]*$",
    ))
    .expect("name line pattern should compile")
});

static UPPERCASE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z]{2,}(?:[ \t]+[A-Z]{2,}){1,2})[ \t]*$")
        .expect("uppercase line pattern should compile")
});

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("word pattern should compile"));

// Capitalized words that head resume sections or describe roles rather than
// name a person.
static NAME_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "curriculum", "vitae", "resume", "profile", "summary", "objective", "about", "contact",
        "information", "details", "personal", "experience", "work", "professional", "employment",
        "history", "education", "academic", "qualifications", "skills", "technical", "soft",
        "core", "competencies", "projects", "certifications", "certificate", "languages",
        "interests", "hobbies", "references", "awards", "achievements", "publications",
        "email", "phone", "mobile", "address", "age", "gender", "sex", "date", "birth", "born",
        "nationality", "university", "college", "school", "institute", "bachelor", "master",
        "science", "arts", "engineering", "engineer", "developer", "manager", "senior", "junior",
        "lead", "intern", "software", "data", "analyst", "consultant", "designer", "director",
        "machine", "learning", "street", "avenue", "road", "lane", "drive", "january",
        "february", "march", "april", "may", "june", "july", "august", "september", "october",
        "november", "december", "present", "current", "the", "and", "with", "for", "in", "at",
        "of", "worked", "led", "managed", "developed", "built", "team",
    ]
    .into_iter()
    .collect()
});

/// Named entities in document order. Organizations take precedence over
/// locations inside them. A line consisting only of a name is taken as a
/// person before places are looked up; other person candidates overlapping
/// an organization or location are dropped.
pub fn recognize_entities(text: &str) -> Vec<Entity> {
    let mut entities: Vec<Entity> = Vec::new();

    for m in ORGANIZATION.find_iter(text) {
        push_entity(&mut entities, text, m.start(), m.end(), EntityLabel::Organization);
    }

    // A line holding nothing but a name is a person even when its first
    // word is also a place ("Austin Miller").
    for caps in NAME_LINE.captures_iter(text) {
        let Some(line) = caps.get(1) else {
            continue;
        };
        let whole_line = name_runs(line.as_str()) == [(0, line.len())];
        let ends_in_place = GAZETTEER
            .find_iter(line.as_str())
            .any(|place| place.end() == line.len());
        if whole_line && !ends_in_place {
            push_entity(&mut entities, text, line.start(), line.end(), EntityLabel::Person);
        }
    }

    for m in GAZETTEER.find_iter(text) {
        push_entity(&mut entities, text, m.start(), m.end(), EntityLabel::Location);
    }

    for caps in CITY_STATE.captures_iter(text) {
        let (Some(whole), Some(code)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        if STATE_CODES.contains(code.as_str()) {
            push_entity(&mut entities, text, whole.start(), whole.end(), EntityLabel::Location);
        }
    }

    for m in CAPITALIZED_RUN.find_iter(text) {
        for (start, end) in name_runs(m.as_str()) {
            let (start, end) = (m.start() + start, m.start() + end);
            push_entity(&mut entities, text, start, end, EntityLabel::Person);
        }
    }

    for caps in UPPERCASE_LINE.captures_iter(text) {
        if let Some(line) = caps.get(1) {
            for (start, end) in name_runs(line.as_str()) {
                let (start, end) = (line.start() + start, line.start() + end);
                push_entity(&mut entities, text, start, end, EntityLabel::Person);
            }
        }
    }

    entities.sort_by_key(|e| (e.span.start, e.span.end));
    entities
}

fn push_entity(
    entities: &mut Vec<Entity>,
    text: &str,
    start: usize,
    end: usize,
    label: EntityLabel,
) {
    let span = Span::from_range(text, start, end);
    if entities.iter().any(|e| e.span.overlaps(&span)) {
        return;
    }
    entities.push(Entity { span, label });
}

/// Sub-runs of two or three consecutive words in `candidate` that contain no
/// stopword, as byte ranges relative to `candidate`.
fn name_runs(candidate: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut current: Vec<(usize, usize)> = Vec::new();

    let mut flush = |current: &mut Vec<(usize, usize)>| {
        if current.len() >= 2 {
            let last = current.len().min(3) - 1;
            runs.push((current[0].0, current[last].1));
        }
        current.clear();
    };

    for word in WORD.find_iter(candidate) {
        let lowered = word.as_str().trim_end_matches('.').to_lowercase();
        if NAME_STOPWORDS.contains(lowered.as_str()) {
            flush(&mut current);
        } else {
            current.push((word.start(), word.end()));
        }
    }
    flush(&mut current);

    runs
}
