//! Step generation
//!
//! [`generate`] scans a source file with the language's profile and produces
//! the ordered list of [`ExecutionStep`]s that the session player replays.
//! Generation is a pure function of the text: it performs no I/O and never
//! fails. Lines that do not match a known shape are skipped, and a source
//! without a recognised entry point yields an empty list.

use super::classify::{classify, is_blank, LineKind};
use super::profile::{EntryPoint, LanguageProfile, PromptText};
use crate::language::Language;
use crate::snapshot::{ExecutionStep, MemorySnapshot};
use tracing::debug;

/// Value substituted for every simulated input call
pub const SIMULATED_INPUT: &str = "User Input";

/// The lines a profile scans and where the synthetic steps land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScanRange {
    /// Line of the entry construct, for languages that have one
    entry_line: Option<usize>,
    /// First scanned line (inclusive)
    body_start: usize,
    /// Last scanned line (exclusive)
    body_end: usize,
    /// Line that receives the closing step
    close_line: usize,
}

/// Generate the execution steps for `source`
pub fn generate(language: Language, source: &str) -> Vec<ExecutionStep> {
    let profile = LanguageProfile::for_language(language);
    let lines: Vec<&str> = source.split('\n').collect();

    let Some(range) = locate_entry(profile, &lines) else {
        debug!(language = language.id(), "no entry point found, nothing to simulate");
        return Vec::new();
    };

    let mut builder = StepBuilder::default();

    if let (Some(line), EntryPoint::Block { start_message, .. }) = (range.entry_line, profile.entry)
    {
        builder.push(line, start_message);
    }

    for (index, raw) in lines
        .iter()
        .enumerate()
        .take(range.body_end)
        .skip(range.body_start)
    {
        let line = raw.trim();
        if is_blank(profile, line) {
            continue;
        }

        match classify(profile, line) {
            LineKind::Declaration { kind, name, value } => {
                let stored = value.unwrap_or_else(|| profile.zero_value_for(kind.unwrap_or("")));
                builder.memory.set(name, stored);
                let message = match (kind, value) {
                    (Some(kind), Some(value)) => format!("Declared {kind} {name} = {value}\n"),
                    (Some(kind), None) => format!("Declared {kind} {name}\n"),
                    (None, _) => format!("Assigned {name} = {stored}\n"),
                };
                builder.push(index, message);
            }
            LineKind::Output { argument } => {
                let message = resolve_output(profile, argument, &builder.memory)
                    .map(|text| format!("{text}\n"))
                    .unwrap_or_default();
                builder.push(index, message);
            }
            LineKind::Input { name, prompt } => {
                builder.push(index, prompt_text(profile, prompt));
                builder.memory.set(name, format!("\"{SIMULATED_INPUT}\""));
                builder.push(index, format!("{SIMULATED_INPUT}\n"));
            }
            LineKind::Function { name, params } => {
                builder.push(index, format!("Defined function {name}({params})\n"));
            }
            LineKind::Unrecognized => {}
        }
    }

    builder.push(range.close_line, profile.finish_message);

    debug!(
        language = language.id(),
        steps = builder.steps.len(),
        "generated execution steps"
    );
    builder.steps
}

/// Accumulates steps while tracking the running memory state
#[derive(Default)]
struct StepBuilder {
    steps: Vec<ExecutionStep>,
    memory: MemorySnapshot,
}

impl StepBuilder {
    /// Freeze the current memory into a new step
    fn push(&mut self, line: usize, output: impl Into<String>) {
        self.steps
            .push(ExecutionStep::new(line, output, self.memory.clone()));
    }
}

fn locate_entry(profile: &LanguageProfile, lines: &[&str]) -> Option<ScanRange> {
    let last_line = lines.len().saturating_sub(1);

    let marker = match profile.entry {
        EntryPoint::WholeSource => {
            return Some(ScanRange {
                entry_line: None,
                body_start: 0,
                body_end: lines.len(),
                close_line: last_line,
            });
        }
        EntryPoint::Block { marker, .. } => marker,
    };

    let start = lines.iter().position(|line| line.contains(marker))?;

    // Same-line brace counting; braces inside literals are counted too
    let mut depth: i64 = 0;
    let mut opened = false;
    for (index, line) in lines.iter().enumerate().skip(start) {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        depth += opens - closes;
        opened |= opens > 0;

        if opened && depth <= 0 {
            return Some(ScanRange {
                entry_line: Some(start),
                body_start: start + 1,
                body_end: index,
                close_line: index,
            });
        }
    }

    // Unterminated block: scan to the end of the source
    Some(ScanRange {
        entry_line: Some(start),
        body_start: start + 1,
        body_end: lines.len(),
        close_line: last_line,
    })
}

/// Resolve the argument of an output call to the text it prints.
///
/// `None` means the argument could not be resolved and the step prints nothing;
/// an empty literal still resolves to `Some("")`.
fn resolve_output(
    profile: &LanguageProfile,
    argument: &str,
    memory: &MemorySnapshot,
) -> Option<String> {
    if let Some(literal) = profile.unquote(argument) {
        return Some(unescape(literal));
    }

    // Stored values are echoed verbatim, quotes included
    if let Some(value) = memory.get(argument).filter(|v| !v.is_empty()) {
        return Some(value.to_string());
    }

    if argument.contains(profile.helper) {
        if let Some(caps) = profile.helper_literal.captures(argument) {
            return Some(format!("Hello, {}!", &caps["arg"]));
        }
        if let Some(caps) = profile.helper_variable.captures(argument) {
            if let Some(value) = memory.get(&caps["name"]).filter(|v| !v.is_empty()) {
                let bare = profile.unquote(value).unwrap_or(value);
                return Some(format!("Hello, {bare}!"));
            }
        }
    }

    None
}

fn prompt_text(profile: &LanguageProfile, prompt: Option<&str>) -> String {
    match profile.input_prompt {
        PromptText::Fixed(text) => text.to_string(),
        PromptText::Argument { fallback } => {
            let message = prompt
                .and_then(|p| profile.unquote(p))
                .unwrap_or(fallback);
            format!("{message} ")
        }
    }
}

/// Expand the common backslash escapes of a string literal
fn unescape(literal: &str) -> String {
    let mut result = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(steps: &[ExecutionStep]) -> Vec<&str> {
        steps.iter().map(|s| s.output.as_str()).collect()
    }

    fn lines(steps: &[ExecutionStep]) -> Vec<usize> {
        steps.iter().map(|s| s.line).collect()
    }

    #[test]
    fn test_cpp_default_sample() {
        let steps = generate(Language::Cpp, Language::Cpp.default_sample());
        assert_eq!(
            outputs(&steps),
            vec![
                "Starting main function...\n",
                "Hello, World!\n",
                "Welcome to Code Pilot!\n",
                "Program finished with return code 0\n",
            ]
        );
        assert_eq!(lines(&steps), vec![8, 9, 10, 12]);
        assert!(steps.iter().all(|s| s.memory.is_empty()));
    }

    #[test]
    fn test_java_default_sample() {
        let steps = generate(Language::Java, Language::Java.default_sample());
        assert_eq!(
            outputs(&steps),
            vec![
                "Starting main method...\n",
                "Hello, World!\n",
                "Welcome to Code Pilot!\n",
                "Program finished execution\n",
            ]
        );
        assert_eq!(lines(&steps), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_csharp_default_sample() {
        let steps = generate(Language::CSharp, Language::CSharp.default_sample());
        assert_eq!(
            outputs(&steps),
            vec![
                "Starting Main method...\n",
                "Hello, World!\n",
                "Welcome to Code Pilot!\n",
                "Program finished execution\n",
            ]
        );
        assert_eq!(lines(&steps), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_javascript_default_sample() {
        let steps = generate(Language::JavaScript, Language::JavaScript.default_sample());
        assert_eq!(
            outputs(&steps),
            vec![
                "Defined function greet(name)\n",
                "Hello, World!\n",
                "Welcome to Code Pilot!\n",
                "Program execution completed\n",
            ]
        );
        assert_eq!(lines(&steps), vec![1, 6, 7, 7]);
    }

    #[test]
    fn test_python_default_sample() {
        let steps = generate(Language::Python, Language::Python.default_sample());
        assert_eq!(
            outputs(&steps),
            vec![
                "Defined function greet(name)\n",
                "Hello, World!\n",
                "Welcome to Code Pilot!\n",
                "Program execution completed\n",
            ]
        );
        assert_eq!(lines(&steps), vec![1, 5, 6, 6]);
    }

    #[test]
    fn test_missing_entry_point_yields_nothing() {
        assert!(generate(Language::Cpp, "void helper() {}\n").is_empty());
        assert!(generate(Language::Java, "").is_empty());
        assert!(generate(Language::CSharp, "class Program {}").is_empty());
    }

    #[test]
    fn test_cpp_input_then_greet_strips_quotes() {
        let source = "int main() {\n    std::string name;\n    std::getline(std::cin, name);\n    std::cout << greet(name) << std::endl;\n    std::cout << name << std::endl;\n    return 0;\n}";
        let steps = generate(Language::Cpp, source);
        assert_eq!(
            outputs(&steps),
            vec![
                "Starting main function...\n",
                "Declared std::string name\n",
                "Enter your name: ",
                "User Input\n",
                "Hello, User Input!\n",
                "\"User Input\"\n",
                "Program finished with return code 0\n",
            ]
        );
        assert_eq!(steps[1].memory.get("name"), Some("\"\""));
        assert_eq!(steps[2].memory.get("name"), Some("\"\""));
        assert_eq!(steps[3].memory.get("name"), Some("\"User Input\""));
        assert_eq!(steps[2].line, steps[3].line);
    }

    #[test]
    fn test_zero_value_declarations() {
        let source = "public static void main(String[] args) {\n  int count;\n  String label;\n  double ratio = 0.5;\n}";
        let steps = generate(Language::Java, source);
        let last = &steps.last().unwrap().memory;
        let pairs: Vec<(&str, &str)> = last.iter().collect();
        assert_eq!(
            pairs,
            vec![("count", "0"), ("label", "\"\""), ("ratio", "0.5")]
        );
        assert_eq!(steps[3].output, "Declared double ratio = 0.5\n");
    }

    #[test]
    fn test_unknown_output_argument_is_empty() {
        let source = "let a = 1;\nconsole.log(a + b);\nconsole.log(missing);";
        let steps = generate(Language::JavaScript, source);
        assert_eq!(steps[1].output, "");
        assert_eq!(steps[2].output, "");
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn test_empty_literal_prints_blank_line() {
        let steps = generate(Language::JavaScript, "console.log(\"\");\nconsole.log('');");
        assert_eq!(&outputs(&steps)[..2], ["\n", "\n"]);

        let source = "int main() {\n    std::cout << \"\" << std::endl;\n}";
        let steps = generate(Language::Cpp, source);
        assert_eq!(steps[1].output, "\n");
    }

    #[test]
    fn test_python_print_with_trailing_comment() {
        let steps = generate(Language::Python, "print(\"hi\")  # greet\nprint(greet(\"Ada\")) # nested");
        assert_eq!(
            outputs(&steps),
            vec!["hi\n", "Hello, Ada!\n", "Program execution completed\n"]
        );
    }

    #[test]
    fn test_javascript_prompt_fallback() {
        let steps = generate(Language::JavaScript, "let who = prompt();");
        assert_eq!(steps[0].output, "Enter input: ");
        assert_eq!(steps[1].memory.get("who"), Some("\"User Input\""));
    }

    #[test]
    fn test_python_prompt_and_assignment() {
        let source = "name = input(\"Name? \")\ncount = 3\nprint(count)\nprint(greet(name))";
        let steps = generate(Language::Python, source);
        assert_eq!(
            outputs(&steps),
            vec![
                "Name?  ",
                "User Input\n",
                "Assigned count = 3\n",
                "3\n",
                "Hello, User Input!\n",
                "Program execution completed\n",
            ]
        );
    }

    #[test]
    fn test_unterminated_block_scans_to_end() {
        let source = "int main() {\n    std::cout << \"hi\" << std::endl;";
        let steps = generate(Language::Cpp, source);
        assert_eq!(outputs(&steps)[1], "hi\n");
        assert_eq!(steps.last().unwrap().line, 1);
    }

    #[test]
    fn test_single_line_entry_block() {
        let steps = generate(Language::Cpp, "int main() { return 0; }");
        assert_eq!(lines(&steps), vec![0, 0]);
    }

    #[test]
    fn test_literal_escapes() {
        let steps = generate(Language::JavaScript, r#"console.log("a\tb\"c");"#);
        assert_eq!(steps[0].output, "a\tb\"c\n");
    }

    #[test]
    fn test_unescape_keeps_unknown_sequences() {
        assert_eq!(unescape(r"\d\"), "\\d\\");
        assert_eq!(unescape(r"line\n"), "line\n");
    }
}
