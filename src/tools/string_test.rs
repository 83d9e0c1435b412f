// ABOUTME: Tests for the string catalog - counters, word search, palindromes,
// ABOUTME: frequency maps and number extraction.

use super::string::{self, call};
use crate::tool::Value;

fn text(s: &str) -> Vec<Value> {
    vec![Value::from(s)]
}

#[test]
fn test_count_vowels() {
    assert_eq!(call("count_vowels", text("Multimodality")), Ok(Value::Int(5)));
    assert_eq!(call("count_vowels", text("hello")), Ok(Value::Int(2)));
    assert_eq!(string::count_vowels("AEIOU", false), 5);
    assert_eq!(string::count_vowels("AEIOU", true), 0);
}

#[test]
fn test_letter_counters() {
    assert_eq!(string::count_consonants("Hello World", false), 7);
    assert_eq!(string::count_letters("abc 123 é"), 4);
    assert_eq!(string::count_uppercase("Hello World"), 2);
    assert_eq!(string::count_lowercase("Hello World"), 8);
    assert_eq!(string::count_digits("a1b22c333"), 6);
    assert_eq!(string::count_digits("½ cup at Ⅻ o'clock"), 0);
    assert_eq!(string::count_digits("٣ and 7"), 2);
}

#[test]
fn test_words_and_characters() {
    assert_eq!(call("count_words", text("  the quick\tbrown fox  ")), Ok(Value::Int(4)));
    assert_eq!(call("count_words", text("")), Ok(Value::Int(0)));
    assert_eq!(call("count_characters", text("a b c")), Ok(Value::Int(5)));
    assert_eq!(
        call("count_characters", vec![Value::from("a b c"), Value::Bool(false)]),
        Ok(Value::Int(3))
    );
    assert_eq!(string::count_spaces("a b  c"), 3);
    assert_eq!(string::count_special_characters("Hi! How?"), 2);
}

#[test]
fn test_longest_and_shortest_word() {
    assert_eq!(
        call("find_longest_word", text("Reasoning models are fascinating")),
        Ok(Value::from("fascinating"))
    );
    assert_eq!(
        call("find_longest_word", text("machine learning is fascinating")),
        Ok(Value::from("fascinating"))
    );
    assert_eq!(string::find_longest_word("abc xyz"), "abc");
    assert_eq!(string::find_shortest_word("one to be"), "to");
    assert_eq!(string::find_longest_word(""), "");
    assert_eq!(string::find_shortest_word("   "), "");
}

#[test]
fn test_word_lengths() {
    assert_eq!(
        call("get_word_lengths", text("a bb ccc")),
        Ok(Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]))
    );
}

#[test]
fn test_occurrences() {
    assert_eq!(
        call("count_specific_character", vec![Value::from("Hello"), Value::from("L")]),
        Ok(Value::Int(2))
    );
    assert_eq!(
        call(
            "count_specific_character",
            vec![Value::from("Hello"), Value::from("L"), Value::Bool(true)]
        ),
        Ok(Value::Int(0))
    );
    assert_eq!(string::count_occurrences("banana", "ana", false), 1);
}

#[test]
fn test_reverse_string() {
    assert_eq!(call("reverse_string", text("hello")), Ok(Value::from("olleh")));
    assert_eq!(string::reverse_string("héllo"), "olléh");
}

#[test]
fn test_is_palindrome() {
    assert_eq!(call("is_palindrome", text("racecar")), Ok(Value::Bool(true)));
    assert_eq!(
        call("is_palindrome", text("A man a plan a canal Panama")),
        Ok(Value::Bool(true))
    );
    assert_eq!(call("is_palindrome", text("hello")), Ok(Value::Bool(false)));
    assert!(!string::is_palindrome("Racecar", false, true));
    assert!(!string::is_palindrome("nurses run", true, false));
    assert!(string::is_palindrome("", true, true));
}

#[test]
fn test_character_frequency_keeps_first_seen_order() {
    let result = call("get_character_frequency", text("Hello")).unwrap();
    assert_eq!(result.to_string(), "{'h': 1, 'e': 1, 'l': 2, 'o': 1}");

    assert_eq!(
        string::get_character_frequency("Aa", true),
        vec![('A', 1), ('a', 1)]
    );
}

#[test]
fn test_vowel_consonant_ratio() {
    assert_eq!(string::get_vowel_consonant_ratio("aei"), f64::INFINITY);
    assert_eq!(string::get_vowel_consonant_ratio(""), 0.0);
    assert_eq!(string::get_vowel_consonant_ratio("abab"), 1.0);
    assert_eq!(
        call("get_vowel_consonant_ratio", text("aei")).unwrap().to_string(),
        "inf"
    );
}

#[test]
fn test_extract_numbers() {
    assert_eq!(
        string::extract_numbers("I have 3 apples, 4.5 pears and 10."),
        vec!["3", "4.5", "10."]
    );
    assert_eq!(
        call("extract_numbers", text("no digits")),
        Ok(Value::List(vec![]))
    );
}

#[test]
fn test_remove_punctuation() {
    assert_eq!(
        call("remove_punctuation", text("Hello, world! It's fine_ok.")),
        Ok(Value::from("Hello world Its fine_ok"))
    );
}

#[test]
fn test_text_argument_required() {
    let err = call("count_vowels", vec![Value::Int(3)]).unwrap_err();
    assert!(err.to_string().contains("argument 'text' must be a string"));
}
