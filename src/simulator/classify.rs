//! Line classification
//!
//! Every scanned line is matched against the profile's pattern table and
//! turned into a [`LineKind`]. The table is ordered; the first pattern that
//! matches decides the kind, and a line that matches nothing is
//! [`LineKind::Unrecognized`].

use super::profile::{LanguageProfile, Shape};
use regex::Captures;

/// The recognised shape of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Reads a line of input into `name`
    Input {
        name: &'a str,
        prompt: Option<&'a str>,
    },
    /// Declares a function (JavaScript and Python only)
    Function { name: &'a str, params: &'a str },
    /// Declares or assigns a variable. `kind` is `None` for untyped assignment.
    Declaration {
        kind: Option<&'a str>,
        name: &'a str,
        value: Option<&'a str>,
    },
    /// Prints a single argument expression
    Output { argument: &'a str },
    Unrecognized,
}

/// Whether a trimmed line carries nothing worth classifying
pub fn is_blank(profile: &LanguageProfile, line: &str) -> bool {
    line.is_empty() || line == "{" || line == "}" || line.starts_with(profile.comment_prefix)
}

/// Classify a trimmed line against the profile's pattern table
pub fn classify<'a>(profile: &LanguageProfile, line: &'a str) -> LineKind<'a> {
    for (shape, regex) in &profile.patterns {
        if let Some(caps) = regex.captures(line) {
            return build_kind(*shape, &caps);
        }
    }
    LineKind::Unrecognized
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> Option<&'a str> {
    caps.name(name).map(|m| m.as_str().trim())
}

fn build_kind<'a>(shape: Shape, caps: &Captures<'a>) -> LineKind<'a> {
    match shape {
        Shape::Input => LineKind::Input {
            name: group(caps, "name").unwrap_or_default(),
            prompt: group(caps, "prompt").filter(|p| !p.is_empty()),
        },
        Shape::Function => LineKind::Function {
            name: group(caps, "name").unwrap_or_default(),
            params: group(caps, "params").unwrap_or_default(),
        },
        Shape::Declaration => LineKind::Declaration {
            kind: group(caps, "kind"),
            name: group(caps, "name").unwrap_or_default(),
            value: group(caps, "value").filter(|v| !v.is_empty()),
        },
        Shape::Output => LineKind::Output {
            argument: group(caps, "arg").unwrap_or_default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn kind_of(language: Language, line: &str) -> LineKind<'_> {
        classify(LanguageProfile::for_language(language), line)
    }

    #[test]
    fn test_cpp_shapes() {
        assert_eq!(
            kind_of(Language::Cpp, "std::string name;"),
            LineKind::Declaration {
                kind: Some("std::string"),
                name: "name",
                value: None
            }
        );
        assert_eq!(
            kind_of(Language::Cpp, "int count = 3;"),
            LineKind::Declaration {
                kind: Some("int"),
                name: "count",
                value: Some("3")
            }
        );
        assert_eq!(
            kind_of(Language::Cpp, "std::getline(std::cin, name);"),
            LineKind::Input {
                name: "name",
                prompt: None
            }
        );
        assert_eq!(
            kind_of(Language::Cpp, "std::cout << greet(\"World\") << std::endl;"),
            LineKind::Output {
                argument: "greet(\"World\")"
            }
        );
        assert_eq!(kind_of(Language::Cpp, "return 0;"), LineKind::Unrecognized);
    }

    #[test]
    fn test_input_wins_over_declaration() {
        assert!(matches!(
            kind_of(Language::Java, "String name = scanner.nextLine();"),
            LineKind::Input { name: "name", .. }
        ));
        assert!(matches!(
            kind_of(Language::CSharp, "string name = Console.ReadLine();"),
            LineKind::Input { name: "name", .. }
        ));
        assert_eq!(
            kind_of(Language::JavaScript, "const who = prompt(\"Who?\");"),
            LineKind::Input {
                name: "who",
                prompt: Some("\"Who?\"")
            }
        );
        assert_eq!(
            kind_of(Language::Python, "who = input('Who? ')"),
            LineKind::Input {
                name: "who",
                prompt: Some("'Who? '")
            }
        );
    }

    #[test]
    fn test_function_shapes() {
        assert_eq!(
            kind_of(Language::JavaScript, "function greet(name) {"),
            LineKind::Function {
                name: "greet",
                params: "name"
            }
        );
        assert_eq!(
            kind_of(Language::Python, "def add(a, b):"),
            LineKind::Function {
                name: "add",
                params: "a, b"
            }
        );
    }

    #[test]
    fn test_python_assignment_excludes_comparison() {
        assert_eq!(
            kind_of(Language::Python, "total = 40 + 2"),
            LineKind::Declaration {
                kind: None,
                name: "total",
                value: Some("40 + 2")
            }
        );
        assert_eq!(kind_of(Language::Python, "x == 1"), LineKind::Unrecognized);
    }

    #[test]
    fn test_python_print_keeps_nested_call() {
        assert_eq!(
            kind_of(Language::Python, "print(greet(\"World\"))"),
            LineKind::Output {
                argument: "greet(\"World\")"
            }
        );
    }

    #[test]
    fn test_python_print_with_trailing_comment() {
        assert_eq!(
            kind_of(Language::Python, "print(\"hi\")  # greet"),
            LineKind::Output { argument: "\"hi\"" }
        );
        assert_eq!(
            kind_of(Language::Python, "print(greet(name)) # nested"),
            LineKind::Output {
                argument: "greet(name)"
            }
        );
    }

    #[test]
    fn test_blank_lines() {
        let py = LanguageProfile::for_language(Language::Python);
        assert!(is_blank(py, ""));
        assert!(is_blank(py, "# comment"));
        assert!(!is_blank(py, "x = 1"));

        let java = LanguageProfile::for_language(Language::Java);
        assert!(is_blank(java, "}"));
        assert!(is_blank(java, "// note"));
    }
}
