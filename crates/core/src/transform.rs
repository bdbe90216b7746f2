//! Text case transformations
//!
//! Every transformation is a total `&str -> String` function: it accepts any
//! unicode input, the empty string included, and never fails. Casing uses the
//! Unicode default case mappings, with no locale tailoring, so results are the
//! same on every machine.
//!
//! The registry is the static [`TRANSFORMATIONS`] table. Its order is the
//! natural display order used when the user has not chosen one.

use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// A named, pure text transformation.
#[derive(Clone, Copy)]
pub struct Transformation {
    /// Display name. Doubles as the registry key and the settings key.
    pub name: &'static str,
    /// Segoe MDL2 code point used by launchers that render an icon.
    pub glyph: Option<&'static str>,
    func: fn(&str) -> String,
}

impl Transformation {
    pub fn apply(&self, input: &str) -> String {
        (self.func)(input)
    }
}

impl fmt::Debug for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformation")
            .field("name", &self.name)
            .field("glyph", &self.glyph)
            .finish_non_exhaustive()
    }
}

/// All registered transformations, in their default order.
pub static TRANSFORMATIONS: &[Transformation] = &[
    Transformation {
        name: "Sentence case",
        glyph: Some("\u{E8E9}"),
        func: to_sentence_case,
    },
    Transformation {
        name: "lowercase",
        glyph: Some("\u{E84A}"),
        func: to_lowercase,
    },
    Transformation {
        name: "UPPERCASE",
        glyph: Some("\u{E84B}"),
        func: to_uppercase,
    },
    Transformation {
        name: "iNVERSE cASE",
        glyph: Some("\u{E8E7}"),
        func: to_inverse_case,
    },
    Transformation {
        name: "AlTeRnAte Case",
        glyph: Some("\u{E8E8}"),
        func: to_alternate_case,
    },
    Transformation {
        name: "Title Case",
        glyph: Some("\u{E8D2}"),
        func: to_title_case,
    },
    Transformation {
        name: "camelCase",
        glyph: Some("\u{E8AC}"),
        func: to_camel_case,
    },
    Transformation {
        name: "PascalCase",
        glyph: Some("\u{F093}"),
        func: to_pascal_case,
    },
    Transformation {
        name: "snake_case",
        glyph: Some("\u{E8DC}"),
        func: to_snake_case,
    },
    Transformation {
        name: "CONSTANT_CASE",
        glyph: Some("\u{E97F}"),
        func: to_constant_case,
    },
    Transformation {
        name: "kebab-case",
        glyph: Some("\u{E94D}"),
        func: to_kebab_case,
    },
    Transformation {
        name: "COBOL-CASE",
        glyph: Some("\u{E8D3}"),
        func: to_cobol_case,
    },
    Transformation {
        name: "Train-Case",
        glyph: Some("\u{EDE0}"),
        func: to_train_case,
    },
    Transformation {
        name: "dot.case",
        glyph: Some("\u{E843}"),
        func: to_dot_case,
    },
    Transformation {
        name: "path/case",
        glyph: Some("\u{E8B7}"),
        func: to_path_case,
    },
    Transformation {
        name: "path\\case\\backslash",
        glyph: Some("\u{ED41}"),
        func: to_path_backslash_case,
    },
    Transformation {
        name: "Remove accents",
        glyph: Some("\u{F2B7}"),
        func: remove_accents,
    },
    Transformation {
        name: "Remove special characters",
        glyph: Some("\u{ED60}"),
        func: remove_special_characters,
    },
    Transformation {
        name: "Remove duplicate whitespace",
        glyph: Some("\u{EF17}"),
        func: remove_duplicate_whitespace,
    },
];

/// Registered transformation names, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    TRANSFORMATIONS.iter().map(|t| t.name)
}

/// Look up a transformation by its exact display name.
pub fn find(name: &str) -> Option<&'static Transformation> {
    TRANSFORMATIONS.iter().find(|t| t.name == name)
}

/// Run the transformation registered under `name` on `input`.
pub fn transform(name: &str, input: &str) -> Result<String> {
    find(name)
        .map(|t| t.apply(input))
        .ok_or_else(|| Error::UnknownTransformation(name.to_string()))
}

/// Split on space, hyphen and underscore, dropping empty tokens.
///
/// Empty and whitespace-only input yields no words at all, so the multi-word
/// transforms below all turn it into an empty string.
pub fn split_words(input: &str) -> Vec<&str> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    input
        .split(|c: char| matches!(c, ' ' | '-' | '_'))
        .filter(|word| !word.is_empty())
        .collect()
}

fn is_blank(word: &str) -> bool {
    word.trim().is_empty()
}

/// First char uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().collect();
    out.push_str(&chars.as_str().to_lowercase());
    out
}

fn join_words(input: &str, separator: &str, case: fn(&str) -> String) -> String {
    split_words(input)
        .into_iter()
        .map(case)
        .collect::<Vec<_>>()
        .join(separator)
}

fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}

/// Lu, Ll, Lt, Lm or Lo. Letter numbers such as `ⅰ` are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// A letter or a decimal digit (Nd). Other numerics and combining marks are not.
fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || get_general_category(c) == GeneralCategory::DecimalNumber
}

pub fn to_sentence_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for c in input.chars() {
        if capitalize_next && is_letter(c) {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }

        if matches!(c, '.' | '!' | '?') {
            capitalize_next = true;
        }
    }

    out
}

pub fn to_lowercase(input: &str) -> String {
    input.to_lowercase()
}

pub fn to_uppercase(input: &str) -> String {
    input.to_uppercase()
}

pub fn to_inverse_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Even char positions lowercased, odd ones uppercased.
pub fn to_alternate_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (i, c) in input.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }

    out
}

/// Lowercase everything, then uppercase the first letter of each word.
///
/// A word is a run of alphanumerics and non-spacing marks; an apostrophe
/// inside a word does not end it ("it's" -> "It's"). A word opened by a digit
/// keeps its letters lowercase ("1st" -> "1st").
pub fn to_title_case(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_word = false;

    for c in lowered.chars() {
        let word_char = c.is_alphanumeric()
            || is_nonspacing_mark(c)
            || (in_word && matches!(c, '\'' | '\u{2019}'));

        if word_char && !in_word && is_letter(c) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }

        in_word = word_char;
    }

    out
}

pub fn to_camel_case(input: &str) -> String {
    let words = split_words(input);
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };

    let mut out = first.to_lowercase();
    for word in rest.iter().filter(|word| !is_blank(word)) {
        out.push_str(&capitalize(word));
    }

    out
}

pub fn to_pascal_case(input: &str) -> String {
    split_words(input)
        .into_iter()
        .filter(|word| !is_blank(word))
        .map(capitalize)
        .collect()
}

pub fn to_snake_case(input: &str) -> String {
    join_words(input, "_", str::to_lowercase)
}

pub fn to_constant_case(input: &str) -> String {
    join_words(input, "_", str::to_uppercase)
}

pub fn to_kebab_case(input: &str) -> String {
    join_words(input, "-", str::to_lowercase)
}

pub fn to_cobol_case(input: &str) -> String {
    join_words(input, "-", str::to_uppercase)
}

pub fn to_train_case(input: &str) -> String {
    split_words(input)
        .into_iter()
        .filter(|word| !is_blank(word))
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn to_dot_case(input: &str) -> String {
    join_words(input, ".", str::to_lowercase)
}

pub fn to_path_case(input: &str) -> String {
    join_words(input, "/", str::to_lowercase)
}

pub fn to_path_backslash_case(input: &str) -> String {
    join_words(input, "\\", str::to_lowercase)
}

/// Decompose, drop non-spacing marks, recompose.
pub fn remove_accents(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_nonspacing_mark(*c))
        .nfc()
        .collect()
}

pub fn remove_special_characters(input: &str) -> String {
    input
        .chars()
        .filter(|c| is_letter_or_digit(*c) || c.is_whitespace())
        .collect()
}

/// Collapse every run of spaces, tabs, CR and LF into a single space.
pub fn remove_duplicate_whitespace(input: &str) -> String {
    input
        .split(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // registry tests
    // ============================================================================

    #[test]
    fn test_registry_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for name in names() {
            assert!(seen.insert(name), "duplicate transformation: {name}");
        }
        assert_eq!(seen.len(), TRANSFORMATIONS.len());
    }

    #[test]
    fn test_registry_order_starts_with_sentence_case() {
        let first_three: Vec<_> = names().take(3).collect();
        assert_eq!(first_three, vec!["Sentence case", "lowercase", "UPPERCASE"]);
    }

    #[test]
    fn test_every_transformation_has_a_glyph() {
        assert!(TRANSFORMATIONS.iter().all(|t| t.glyph.is_some()));
    }

    #[test]
    fn test_find_is_exact_match() {
        assert!(find("snake_case").is_some());
        assert!(find("Snake_Case").is_none());
        assert!(find(" snake_case").is_none());
    }

    #[test]
    fn test_transform_dispatches_by_name() {
        assert_eq!(transform("kebab-case", "Hello World").unwrap(), "hello-world");
        assert_eq!(
            transform("path\\case\\backslash", "a b c").unwrap(),
            "a\\b\\c"
        );
    }

    #[test]
    fn test_transform_unknown_name() {
        let err = transform("sPoNgEbOb", "text").unwrap_err();
        assert!(matches!(err, Error::UnknownTransformation(ref name) if name == "sPoNgEbOb"));
        assert_eq!(err.to_string(), "Unknown transformation: sPoNgEbOb");
    }

    #[test]
    fn test_every_transformation_maps_empty_to_empty() {
        for t in TRANSFORMATIONS {
            assert_eq!(t.apply(""), "", "{} on empty input", t.name);
        }
    }

    #[test]
    fn test_multi_word_transformations_on_whitespace_only_input() {
        for name in [
            "camelCase",
            "PascalCase",
            "snake_case",
            "CONSTANT_CASE",
            "kebab-case",
            "COBOL-CASE",
            "Train-Case",
            "dot.case",
            "path/case",
            "path\\case\\backslash",
        ] {
            assert_eq!(transform(name, "  \t \n").unwrap(), "", "{name}");
        }
    }

    #[test]
    fn test_debug_omits_function_pointer() {
        let debug = format!("{:?}", find("lowercase").unwrap());
        assert!(debug.contains("lowercase"));
        assert!(debug.contains(".."));
    }

    // ============================================================================
    // split_words tests
    // ============================================================================

    #[test]
    fn test_split_words_on_all_separators() {
        assert_eq!(split_words("a b-c_d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_words_drops_empty_tokens() {
        assert_eq!(split_words("--a__b  c-"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_words_empty_and_blank() {
        assert!(split_words("").is_empty());
        assert!(split_words("   ").is_empty());
        assert!(split_words("\t\n").is_empty());
    }

    #[test]
    fn test_split_words_separators_only() {
        assert!(split_words("-_-").is_empty());
    }

    // ============================================================================
    // single-pass casing tests
    // ============================================================================

    #[test]
    fn test_sentence_case_terminators() {
        assert_eq!(
            to_sentence_case("hello. world! how? are you"),
            "Hello. World! How? Are you"
        );
    }

    #[test]
    fn test_sentence_case_does_not_lowercase() {
        assert_eq!(to_sentence_case("hello WORLD"), "Hello WORLD");
    }

    #[test]
    fn test_sentence_case_skips_leading_non_letters() {
        assert_eq!(to_sentence_case("  42 apples. pears"), "  42 Apples. Pears");
    }

    #[test]
    fn test_sentence_case_whitespace_does_not_reset() {
        assert_eq!(to_sentence_case("one\ntwo"), "One\ntwo");
    }

    #[test]
    fn test_sentence_case_skips_letter_numbers() {
        assert_eq!(to_sentence_case("\u{2170} item"), "\u{2170} Item");
    }

    #[test]
    fn test_lowercase_and_uppercase() {
        assert_eq!(to_lowercase("HeLLo ÉCOLE"), "hello école");
        assert_eq!(to_uppercase("HeLLo école"), "HELLO ÉCOLE");
    }

    #[test]
    fn test_lowercase_is_idempotent() {
        for s in ["", "Hello World", "ÀÉÎÕÜ", "ΣΊΣΥΦΟΣ", "straße", "İstanbul"] {
            let once = to_lowercase(s);
            assert_eq!(to_lowercase(&once), once, "{s}");
        }
    }

    #[test]
    fn test_uppercase_is_idempotent() {
        for s in ["", "Hello World", "àéîõü", "straße", "ﬁne"] {
            let once = to_uppercase(s);
            assert_eq!(to_uppercase(&once), once, "{s}");
        }
    }

    #[test]
    fn test_uppercase_is_locale_invariant() {
        assert_eq!(to_uppercase("i"), "I");
        assert_eq!(to_lowercase("I"), "i");
    }

    #[test]
    fn test_inverse_case() {
        assert_eq!(to_inverse_case("Hello World 123"), "hELLO wORLD 123");
    }

    #[test]
    fn test_inverse_case_twice_is_identity() {
        for s in ["Hello World", "MiXeD cAsE 42!", "Ça Va", "ΑβΓ"] {
            assert_eq!(to_inverse_case(&to_inverse_case(s)), s);
        }
    }

    #[test]
    fn test_alternate_case_ignores_original_case() {
        assert_eq!(to_alternate_case("alternate case"), "aLtErNaTe cAsE");
        assert_eq!(to_alternate_case("ALTERNATE"), "aLtErNaTe");
    }

    #[test]
    fn test_alternate_case_counts_every_char() {
        assert_eq!(to_alternate_case("a b"), "a b");
        assert_eq!(to_alternate_case("ab cd"), "aB Cd");
    }

    #[test]
    fn test_title_case_lowercases_first() {
        assert_eq!(to_title_case("hELLO wORLD"), "Hello World");
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(to_title_case("hello-world_again"), "Hello-World_Again");
        assert_eq!(to_title_case("it's a test"), "It's A Test");
        assert_eq!(to_title_case("1st place"), "1st Place");
    }

    #[test]
    fn test_title_case_accented_letters() {
        assert_eq!(to_title_case("école ÉTÉ"), "École Été");
    }

    #[test]
    fn test_title_case_does_not_capitalize_letter_numbers() {
        assert_eq!(to_title_case("\u{2170} item"), "\u{2170} Item");
    }

    // ============================================================================
    // multi-word tests
    // ============================================================================

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("Hello World"), "helloWorld");
        assert_eq!(to_camel_case("HELLO big_WIDE-world"), "helloBigWideWorld");
    }

    #[test]
    fn test_camel_case_single_word() {
        assert_eq!(to_camel_case("HELLO"), "hello");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("xml_HTTP-request"), "XmlHttpRequest");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("Hello World"), "hello_world");
    }

    #[test]
    fn test_constant_case() {
        assert_eq!(to_constant_case("hello world"), "HELLO_WORLD");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("Hello_World Test"), "hello-world-test");
    }

    #[test]
    fn test_cobol_case() {
        assert_eq!(to_cobol_case("hello_world test"), "HELLO-WORLD-TEST");
    }

    #[test]
    fn test_train_case() {
        assert_eq!(to_train_case("hello WORLD_again"), "Hello-World-Again");
    }

    #[test]
    fn test_train_case_skips_blank_words() {
        assert_eq!(to_train_case("hello \t world"), "Hello-World");
    }

    #[test]
    fn test_dot_and_path_cases() {
        assert_eq!(to_dot_case("Hello World"), "hello.world");
        assert_eq!(to_path_case("Hello World"), "hello/world");
        assert_eq!(to_path_backslash_case("Hello World"), "hello\\world");
    }

    #[test]
    fn test_multi_word_leading_and_trailing_separators() {
        assert_eq!(to_snake_case("  hello world  "), "hello_world");
        assert_eq!(to_camel_case("-hello-world-"), "helloWorld");
    }

    // ============================================================================
    // cleanup tests
    // ============================================================================

    #[test]
    fn test_remove_accents() {
        assert_eq!(remove_accents("Rèmòvè àccènts"), "Remove accents");
        assert_eq!(remove_accents("Crème Brûlée"), "Creme Brulee");
    }

    #[test]
    fn test_remove_accents_decomposed_input() {
        assert_eq!(remove_accents("cafe\u{0301}"), "cafe");
    }

    #[test]
    fn test_remove_accents_keeps_unaccented_text() {
        assert_eq!(remove_accents("plain ascii 123"), "plain ascii 123");
        assert_eq!(remove_accents("日本語"), "日本語");
    }

    #[test]
    fn test_remove_special_characters() {
        assert_eq!(
            remove_special_characters("Hello, World!! 123"),
            "Hello World 123"
        );
        assert_eq!(remove_special_characters("a\tb\n#c"), "a\tb\nc");
    }

    #[test]
    fn test_remove_special_characters_keeps_only_letters_and_decimal_digits() {
        // superscript two, one half, roman eight, devanagari vowel sign aa
        assert_eq!(
            remove_special_characters("x\u{B2} \u{BD} \u{2167} \u{915}\u{93E} 42"),
            "x   \u{915} 42"
        );
    }

    #[test]
    fn test_remove_duplicate_whitespace() {
        assert_eq!(remove_duplicate_whitespace("a   b\tc\n\nd"), "a b c d");
        assert_eq!(remove_duplicate_whitespace("  padded \r\n"), "padded");
    }
}
