// ABOUTME: String tool catalog - counting, searching and transforming text.
// ABOUTME: Vowels and consonants are the ASCII letters; lengths count chars.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::tool::{Param, ParamDefault, ParamKind, ToolSpec, Value};

const VOWELS: &str = "aeiou";
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*").expect("number pattern is valid"));
static DIGIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is valid"));
static PUNCTUATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"));

const TEXT: &[Param] = &[Param::required("text", ParamKind::Text)];
const TEXT_CASE: &[Param] = &[
    Param::required("text", ParamKind::Text),
    Param::optional("case_sensitive", ParamKind::Flag, ParamDefault::Flag(false)),
];

/// The `string` catalog, in display order.
pub static STRING_TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "count_vowels",
        description: "Count the number of vowels in a string.",
        params: TEXT_CASE,
        run: |args| Ok(count_vowels(args.text(0)?, args.flag(1)?).into()),
    },
    ToolSpec {
        name: "count_consonants",
        description: "Count the number of consonants in a string.",
        params: TEXT_CASE,
        run: |args| Ok(count_consonants(args.text(0)?, args.flag(1)?).into()),
    },
    ToolSpec {
        name: "count_letters",
        description: "Count the number of letters (alphabetic characters) in a string.",
        params: TEXT,
        run: |args| Ok(count_letters(args.text(0)?).into()),
    },
    ToolSpec {
        name: "count_words",
        description: "Count the number of words in a string.",
        params: TEXT,
        run: |args| Ok(count_words(args.text(0)?).into()),
    },
    ToolSpec {
        name: "count_characters",
        description: "Count the total number of characters in a string.",
        params: &[
            Param::required("text", ParamKind::Text),
            Param::optional("include_spaces", ParamKind::Flag, ParamDefault::Flag(true)),
        ],
        run: |args| Ok(count_characters(args.text(0)?, args.flag(1)?).into()),
    },
    ToolSpec {
        name: "count_digits",
        description: "Count the number of digits in a string.",
        params: TEXT,
        run: |args| Ok(count_digits(args.text(0)?).into()),
    },
    ToolSpec {
        name: "count_uppercase",
        description: "Count the number of uppercase letters in a string.",
        params: TEXT,
        run: |args| Ok(count_uppercase(args.text(0)?).into()),
    },
    ToolSpec {
        name: "count_lowercase",
        description: "Count the number of lowercase letters in a string.",
        params: TEXT,
        run: |args| Ok(count_lowercase(args.text(0)?).into()),
    },
    ToolSpec {
        name: "count_special_characters",
        description: "Count the number of special characters (non-alphanumeric) in a string.",
        params: TEXT,
        run: |args| Ok(count_special_characters(args.text(0)?).into()),
    },
    ToolSpec {
        name: "count_spaces",
        description: "Count the number of spaces in a string.",
        params: TEXT,
        run: |args| Ok(count_spaces(args.text(0)?).into()),
    },
    ToolSpec {
        name: "find_longest_word",
        description: "Find the longest word in a string.",
        params: TEXT,
        run: |args| Ok(find_longest_word(args.text(0)?).into()),
    },
    ToolSpec {
        name: "find_shortest_word",
        description: "Find the shortest word in a string.",
        params: TEXT,
        run: |args| Ok(find_shortest_word(args.text(0)?).into()),
    },
    ToolSpec {
        name: "get_word_lengths",
        description: "Get a list of lengths for each word in the string.",
        params: TEXT,
        run: |args| {
            Ok(Value::List(
                get_word_lengths(args.text(0)?)
                    .into_iter()
                    .map(Value::from)
                    .collect(),
            ))
        },
    },
    ToolSpec {
        name: "count_specific_character",
        description: "Count occurrences of a specific character in a string.",
        params: &[
            Param::required("text", ParamKind::Text),
            Param::required("character", ParamKind::Text),
            Param::optional("case_sensitive", ParamKind::Flag, ParamDefault::Flag(false)),
        ],
        run: |args| Ok(count_occurrences(args.text(0)?, args.text(1)?, args.flag(2)?).into()),
    },
    ToolSpec {
        name: "count_substring",
        description: "Count occurrences of a substring in a string.",
        params: &[
            Param::required("text", ParamKind::Text),
            Param::required("substring", ParamKind::Text),
            Param::optional("case_sensitive", ParamKind::Flag, ParamDefault::Flag(false)),
        ],
        run: |args| Ok(count_occurrences(args.text(0)?, args.text(1)?, args.flag(2)?).into()),
    },
    ToolSpec {
        name: "reverse_string",
        description: "Reverse a string.",
        params: TEXT,
        run: |args| Ok(reverse_string(args.text(0)?).into()),
    },
    ToolSpec {
        name: "is_palindrome",
        description: "Check if a string is a palindrome.",
        params: &[
            Param::required("text", ParamKind::Text),
            Param::optional("ignore_case", ParamKind::Flag, ParamDefault::Flag(true)),
            Param::optional("ignore_spaces", ParamKind::Flag, ParamDefault::Flag(true)),
        ],
        run: |args| Ok(is_palindrome(args.text(0)?, args.flag(1)?, args.flag(2)?).into()),
    },
    ToolSpec {
        name: "get_character_frequency",
        description: "Get frequency count of each character in the string.",
        params: TEXT_CASE,
        run: |args| {
            let frequency = get_character_frequency(args.text(0)?, args.flag(1)?)
                .into_iter()
                .map(|(c, n)| (c.to_string(), Value::from(n)))
                .collect();
            Ok(Value::Map(frequency))
        },
    },
    ToolSpec {
        name: "get_vowel_consonant_ratio",
        description: "Calculate the ratio of vowels to consonants in a string.",
        params: TEXT,
        run: |args| Ok(get_vowel_consonant_ratio(args.text(0)?).into()),
    },
    ToolSpec {
        name: "extract_numbers",
        description: "Extract all numbers from a string.",
        params: TEXT,
        run: |args| {
            Ok(Value::List(
                extract_numbers(args.text(0)?)
                    .into_iter()
                    .map(Value::from)
                    .collect(),
            ))
        },
    },
    ToolSpec {
        name: "remove_punctuation",
        description: "Remove all punctuation from a string.",
        params: TEXT,
        run: |args| Ok(remove_punctuation(args.text(0)?).into()),
    },
];

fn fold_case(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

/// Without `case_sensitive` uppercase vowels count too; with it only `aeiou` match.
pub fn count_vowels(text: &str, case_sensitive: bool) -> usize {
    fold_case(text, case_sensitive)
        .chars()
        .filter(|c| VOWELS.contains(*c))
        .count()
}

pub fn count_consonants(text: &str, case_sensitive: bool) -> usize {
    fold_case(text, case_sensitive)
        .chars()
        .filter(|c| CONSONANTS.contains(*c))
        .count()
}

pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_characters(text: &str, include_spaces: bool) -> usize {
    if include_spaces {
        text.chars().count()
    } else {
        text.chars().filter(|&c| c != ' ').count()
    }
}

/// Decimal digits (Unicode `Nd`). Fractions like `½` and numerals like `Ⅻ` do not count.
pub fn count_digits(text: &str) -> usize {
    DIGIT_PATTERN.find_iter(text).count()
}

pub fn count_uppercase(text: &str) -> usize {
    text.chars().filter(|c| c.is_uppercase()).count()
}

pub fn count_lowercase(text: &str) -> usize {
    text.chars().filter(|c| c.is_lowercase()).count()
}

pub fn count_special_characters(text: &str) -> usize {
    text.chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count()
}

pub fn count_spaces(text: &str) -> usize {
    text.chars().filter(|&c| c == ' ').count()
}

/// Returns the first of the longest words, or `""` when there are none.
pub fn find_longest_word(text: &str) -> &str {
    text.split_whitespace()
        .fold(None, |best: Option<&str>, word| match best {
            Some(b) if b.chars().count() >= word.chars().count() => Some(b),
            _ => Some(word),
        })
        .unwrap_or("")
}

/// Returns the first of the shortest words, or `""` when there are none.
pub fn find_shortest_word(text: &str) -> &str {
    text.split_whitespace()
        .fold(None, |best: Option<&str>, word| match best {
            Some(b) if b.chars().count() <= word.chars().count() => Some(b),
            _ => Some(word),
        })
        .unwrap_or("")
}

pub fn get_word_lengths(text: &str) -> Vec<usize> {
    text.split_whitespace().map(|w| w.chars().count()).collect()
}

/// Non-overlapping occurrences of `needle` in `text`.
pub fn count_occurrences(text: &str, needle: &str, case_sensitive: bool) -> usize {
    let text = fold_case(text, case_sensitive);
    let needle = fold_case(needle, case_sensitive);
    text.matches(needle.as_str()).count()
}

pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn is_palindrome(text: &str, ignore_case: bool, ignore_spaces: bool) -> bool {
    let mut processed = fold_case(text, !ignore_case);
    if ignore_spaces {
        processed.retain(|c| c != ' ');
    }
    processed.chars().eq(processed.chars().rev())
}

/// Character counts in first-seen order.
pub fn get_character_frequency(text: &str, case_sensitive: bool) -> Vec<(char, usize)> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    let mut slots: HashMap<char, usize> = HashMap::new();

    for c in fold_case(text, case_sensitive).chars() {
        match slots.get(&c) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(c, counts.len());
                counts.push((c, 1));
            }
        }
    }
    counts
}

/// `inf` when there are vowels but no consonants, `0.0` when there are neither.
pub fn get_vowel_consonant_ratio(text: &str) -> f64 {
    let vowels = count_vowels(text, false);
    let consonants = count_consonants(text, false);
    if consonants == 0 {
        return if vowels > 0 { f64::INFINITY } else { 0.0 };
    }
    vowels as f64 / consonants as f64
}

pub fn extract_numbers(text: &str) -> Vec<&str> {
    NUMBER_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn remove_punctuation(text: &str) -> String {
    PUNCTUATION_PATTERN.replace_all(text, "").into_owned()
}

#[cfg(test)]
pub(crate) fn call(name: &str, args: Vec<Value>) -> Result<Value, crate::error::ToolError> {
    STRING_TOOLS
        .iter()
        .find(|s| s.name == name)
        .expect("string tool exists")
        .call(&args)
}
