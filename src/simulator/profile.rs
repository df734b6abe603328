//! Per-language configuration records for the step generator
//!
//! The five simulated languages differ only in vocabulary: how the entry
//! point is spelled, which keywords declare a variable, which call prints and
//! which call reads input. Each [`LanguageProfile`] captures that vocabulary
//! together with the compiled line patterns, so a single generator can drive
//! every language.
//!
//! Profiles are built once and cached for the lifetime of the process.

use crate::language::Language;
use regex::Regex;
use std::sync::OnceLock;

/// How the scanned region of a source file is located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Scan the brace-delimited block opened on the first line containing `marker`
    Block {
        marker: &'static str,
        start_message: &'static str,
    },
    /// Scan every line of the source
    WholeSource,
}

/// Where the text of the simulated input prompt comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptText {
    /// Always the same prompt
    Fixed(&'static str),
    /// The quoted prompt argument of the input call, or `fallback`
    Argument { fallback: &'static str },
}

/// The line shapes a profile recognises, in classification order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Input,
    Function,
    Declaration,
    Output,
}

/// Vocabulary and compiled patterns for one simulated language
#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    pub entry: EntryPoint,
    pub finish_message: &'static str,
    pub comment_prefix: &'static str,
    /// Characters that may delimit a string literal
    pub quotes: &'static [char],
    /// Name of the one user function with special output handling
    pub helper: &'static str,
    /// Declared types whose zero value is an empty string
    pub string_types: &'static [&'static str],
    /// Value recorded for a declaration of any other type without initializer
    pub zero_value: &'static str,
    pub input_prompt: PromptText,
    /// `(shape, pattern)` pairs tried in order; the first match wins
    pub(crate) patterns: Vec<(Shape, Regex)>,
    pub(crate) helper_literal: Regex,
    pub(crate) helper_variable: Regex,
}

impl LanguageProfile {
    /// The cached profile for `language`
    pub fn for_language(language: Language) -> &'static LanguageProfile {
        static PROFILES: OnceLock<Vec<LanguageProfile>> = OnceLock::new();
        let profiles = PROFILES.get_or_init(|| Language::ALL.iter().map(|&l| build(l)).collect());
        profiles
            .iter()
            .find(|p| p.language == language)
            .unwrap_or(&profiles[0])
    }

    /// Strip the delimiters from a quoted literal, if `text` is one
    pub fn unquote<'a>(&self, text: &'a str) -> Option<&'a str> {
        let first = text.chars().next()?;
        if text.len() < 2 || !self.quotes.contains(&first) || !text.ends_with(first) {
            return None;
        }
        Some(&text[1..text.len() - 1])
    }

    /// Zero value for a declaration of type `kind` without initializer
    pub fn zero_value_for(&self, kind: &str) -> &'static str {
        if self.string_types.contains(&kind) {
            "\"\""
        } else {
            self.zero_value
        }
    }
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("built-in line pattern must compile")
}

fn helper_patterns(helper: &str, quotes: &[char]) -> (Regex, Regex) {
    let class: String = quotes.iter().collect();
    let literal = pattern(&format!(
        r#"{helper}\(\s*[{class}](?P<arg>[^{class}]+)[{class}]\s*\)"#
    ));
    let variable = pattern(&format!(r"{helper}\(\s*(?P<name>\w+)\s*\)"));
    (literal, variable)
}

fn build(language: Language) -> LanguageProfile {
    match language {
        Language::Cpp => {
            let (helper_literal, helper_variable) = helper_patterns("greet", &['"']);
            LanguageProfile {
                language,
                entry: EntryPoint::Block {
                    marker: "int main(",
                    start_message: "Starting main function...\n",
                },
                finish_message: "Program finished with return code 0\n",
                comment_prefix: "//",
                quotes: &['"'],
                helper: "greet",
                string_types: &["std::string", "string"],
                zero_value: "0",
                input_prompt: PromptText::Fixed("Enter your name: "),
                patterns: vec![
                    (
                        Shape::Input,
                        pattern(r"std::getline\(\s*std::cin\s*,\s*(?P<name>\w+)\s*\)"),
                    ),
                    (
                        Shape::Declaration,
                        pattern(
                            r"^(?:const\s+)?(?P<kind>std::string|string|int|long|float|double|bool|char|auto)\s+(?P<name>\w+)\s*(?:=\s*(?P<value>[^;]*?))?\s*;",
                        ),
                    ),
                    (
                        Shape::Output,
                        pattern(r"std::cout\s*<<\s*(?P<arg>.+?)(?:\s*<<\s*std::endl|;)"),
                    ),
                ],
                helper_literal,
                helper_variable,
            }
        }
        Language::Java => {
            let (helper_literal, helper_variable) = helper_patterns("greet", &['"']);
            LanguageProfile {
                language,
                entry: EntryPoint::Block {
                    marker: "public static void main",
                    start_message: "Starting main method...\n",
                },
                finish_message: "Program finished execution\n",
                comment_prefix: "//",
                quotes: &['"'],
                helper: "greet",
                string_types: &["String"],
                zero_value: "0",
                input_prompt: PromptText::Fixed("Enter your name: "),
                patterns: vec![
                    (
                        Shape::Input,
                        pattern(r"String\s+(?P<name>\w+)\s*=\s*scanner\.nextLine\(\)\s*;"),
                    ),
                    (
                        Shape::Declaration,
                        pattern(
                            r"^(?:final\s+)?(?P<kind>String|int|long|float|double|boolean|char|var)\s+(?P<name>\w+)\s*(?:=\s*(?P<value>[^;]*?))?\s*;",
                        ),
                    ),
                    (
                        Shape::Output,
                        pattern(r"System\.out\.println\((?P<arg>.+?)\);"),
                    ),
                ],
                helper_literal,
                helper_variable,
            }
        }
        Language::CSharp => {
            let (helper_literal, helper_variable) = helper_patterns("Greet", &['"']);
            LanguageProfile {
                language,
                entry: EntryPoint::Block {
                    marker: "static void Main",
                    start_message: "Starting Main method...\n",
                },
                finish_message: "Program finished execution\n",
                comment_prefix: "//",
                quotes: &['"'],
                helper: "Greet",
                string_types: &["string"],
                zero_value: "0",
                input_prompt: PromptText::Fixed("Enter your name: "),
                patterns: vec![
                    (
                        Shape::Input,
                        pattern(r"string\s+(?P<name>\w+)\s*=\s*Console\.ReadLine\(\)\s*;"),
                    ),
                    (
                        Shape::Declaration,
                        pattern(
                            r"^(?:const\s+)?(?P<kind>string|int|long|float|double|bool|char|var)\s+(?P<name>\w+)\s*(?:=\s*(?P<value>[^;]*?))?\s*;",
                        ),
                    ),
                    (
                        Shape::Output,
                        pattern(r"Console\.WriteLine\((?P<arg>.+?)\);"),
                    ),
                ],
                helper_literal,
                helper_variable,
            }
        }
        Language::JavaScript => {
            let (helper_literal, helper_variable) = helper_patterns("greet", &['"', '\'']);
            LanguageProfile {
                language,
                entry: EntryPoint::WholeSource,
                finish_message: "Program execution completed\n",
                comment_prefix: "//",
                quotes: &['"', '\''],
                helper: "greet",
                string_types: &[],
                zero_value: "undefined",
                input_prompt: PromptText::Argument {
                    fallback: "Enter input:",
                },
                patterns: vec![
                    (
                        Shape::Input,
                        pattern(
                            r"^(?:const|let|var)\s+(?P<name>\w+)\s*=\s*prompt\((?P<prompt>.*?)\)\s*;",
                        ),
                    ),
                    (
                        Shape::Function,
                        pattern(r"^function\s+(?P<name>\w+)\s*\((?P<params>[^)]*)\)"),
                    ),
                    (
                        Shape::Declaration,
                        pattern(
                            r"^(?P<kind>const|let|var)\s+(?P<name>\w+)\s*(?:=\s*(?P<value>.+?))?\s*;",
                        ),
                    ),
                    (Shape::Output, pattern(r"console\.log\((?P<arg>.+?)\);")),
                ],
                helper_literal,
                helper_variable,
            }
        }
        Language::Python => {
            let (helper_literal, helper_variable) = helper_patterns("greet", &['"', '\'']);
            LanguageProfile {
                language,
                entry: EntryPoint::WholeSource,
                finish_message: "Program execution completed\n",
                comment_prefix: "#",
                quotes: &['"', '\''],
                helper: "greet",
                string_types: &[],
                zero_value: "None",
                input_prompt: PromptText::Argument { fallback: "" },
                patterns: vec![
                    (
                        Shape::Input,
                        pattern(r"^(?P<name>\w+)\s*=\s*input\((?P<prompt>.*?)\)\s*$"),
                    ),
                    (
                        Shape::Function,
                        pattern(r"^def\s+(?P<name>\w+)\s*\((?P<params>[^)]*)\)"),
                    ),
                    (
                        Shape::Declaration,
                        pattern(r"^(?P<name>\w+)\s*=(?P<value>[^=].*)$"),
                    ),
                    (Shape::Output, pattern(r"^print\((?P<arg>.+)\)\s*(?:#.*)?$")),
                ],
                helper_literal,
                helper_variable,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_profile() {
        for language in Language::ALL {
            assert_eq!(LanguageProfile::for_language(language).language, language);
        }
    }

    #[test]
    fn test_unquote() {
        let js = LanguageProfile::for_language(Language::JavaScript);
        assert_eq!(js.unquote("\"hi\""), Some("hi"));
        assert_eq!(js.unquote("'hi'"), Some("hi"));
        assert_eq!(js.unquote("\"\""), Some(""));
        assert_eq!(js.unquote("\"hi'"), None);
        assert_eq!(js.unquote("\""), None);
        assert_eq!(js.unquote("name"), None);

        let cpp = LanguageProfile::for_language(Language::Cpp);
        assert_eq!(cpp.unquote("'c'"), None);
    }

    #[test]
    fn test_zero_values() {
        let cpp = LanguageProfile::for_language(Language::Cpp);
        assert_eq!(cpp.zero_value_for("std::string"), "\"\"");
        assert_eq!(cpp.zero_value_for("int"), "0");

        let js = LanguageProfile::for_language(Language::JavaScript);
        assert_eq!(js.zero_value_for("let"), "undefined");
    }

    #[test]
    fn test_helper_patterns() {
        let cs = LanguageProfile::for_language(Language::CSharp);
        let caps = cs.helper_literal.captures("Greet(\"World\")").unwrap();
        assert_eq!(&caps["arg"], "World");
        assert!(cs.helper_literal.captures("greet(\"World\")").is_none());

        let py = LanguageProfile::for_language(Language::Python);
        let caps = py.helper_literal.captures("greet('Ada')").unwrap();
        assert_eq!(&caps["arg"], "Ada");
        let caps = py.helper_variable.captures("greet( who )").unwrap();
        assert_eq!(&caps["name"], "who");
    }
}
