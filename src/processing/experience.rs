//! Experience span from the years mentioned in a resume

use crate::processing::patterns::PatternRegistry;
use regex::Regex;

const MIN_YEAR: u32 = 1900;
const MAX_YEAR: u32 = 2099;

/// Every year token in `text` matched by `pattern` and within 1900..=2099.
pub fn find_years(pattern: &Regex, text: &str) -> Vec<u32> {
    pattern
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
        .collect()
}

/// Spread between the earliest and latest year, or 0 with fewer than two.
pub fn calculate_experience_years(text: &str, patterns: &PatternRegistry) -> u32 {
    let years = find_years(patterns.year(), text);
    if years.len() < 2 {
        return 0;
    }

    let (min, max) = years
        .iter()
        .fold((u32::MAX, u32::MIN), |(lo, hi), &y| (lo.min(y), hi.max(y)));
    max - min
}
