//! String-templated run simulation for C++, Java and C#
//!
//! There is no compiler behind these languages. A run either recognises the
//! default greet sample and prints its known output, or scans the source for
//! output calls and prints what their literal arguments would produce. When
//! the program reads input the collector is asked for an answer.

use super::input::{request_or_empty, InputCollector};
use super::RunOutcome;
use crate::language::Language;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Recognition rules for one templated language
#[derive(Debug)]
struct Template {
    label: &'static str,
    /// Both substrings present means the default greet function is intact
    signature: &'static str,
    greeting_body: &'static str,
    /// Input marker checked when the default sample is recognised
    sample_input: &'static str,
    /// Input marker checked for arbitrary programs
    input_marker: &'static str,
    helper: &'static str,
    /// The helper may also be called as `helper(var.c_str())`
    c_str_calls: bool,
    output_call: Regex,
    input_call: Regex,
    helper_literal: Regex,
}

fn templates() -> &'static [Template] {
    static TEMPLATES: OnceLock<Vec<Template>> = OnceLock::new();
    TEMPLATES.get_or_init(|| {
        let re = |s: &str| Regex::new(s).expect("built-in template pattern must compile");
        vec![
            Template {
                label: "C++",
                signature: "std::string greet",
                greeting_body: r#"return "Hello, " + name + "!""#,
                sample_input: "std::getline(std::cin, name)",
                input_marker: "std::getline(std::cin, ",
                helper: "greet",
                c_str_calls: true,
                output_call: re(r"std::cout\s*<<\s*(.+?)(?:\s*<<\s*std::endl|;)"),
                input_call: re(r"std::getline\(std::cin,\s*([a-zA-Z0-9_]+)\)"),
                helper_literal: re(r#"greet\(\s*"([^"]+)"\s*\)"#),
            },
            Template {
                label: "Java",
                signature: "public static String greet",
                greeting_body: r#"return "Hello, " + name + "!""#,
                sample_input: "Scanner scanner = new Scanner(System.in)",
                input_marker: "scanner.nextLine()",
                helper: "greet",
                c_str_calls: false,
                output_call: re(r"System\.out\.println\((.+?)\);"),
                input_call: re(r"String\s+([a-zA-Z0-9_]+)\s*=\s*scanner\.nextLine\(\);"),
                helper_literal: re(r#"greet\(\s*"([^"]+)"\s*\)"#),
            },
            Template {
                label: "C#",
                signature: "static string Greet",
                greeting_body: r#"return $"Hello, {name}!""#,
                sample_input: "Console.ReadLine()",
                input_marker: "Console.ReadLine()",
                helper: "Greet",
                c_str_calls: false,
                output_call: re(r"Console\.WriteLine\((.+?)\);"),
                input_call: re(r"string\s+([a-zA-Z0-9_]+)\s*=\s*Console\.ReadLine\(\);"),
                helper_literal: re(r#"Greet\(\s*"([^"]+)"\s*\)"#),
            },
        ]
    })
}

fn template_for(language: Language) -> Option<&'static Template> {
    let label = match language {
        Language::Cpp => "C++",
        Language::Java => "Java",
        Language::CSharp => "C#",
        Language::JavaScript | Language::Python => return None,
    };
    templates().iter().find(|t| t.label == label)
}

/// Whether `language` is run through a template rather than a real engine
pub fn is_templated(language: Language) -> bool {
    template_for(language).is_some()
}

/// Simulate a run of `source`; `None` for languages without a template
pub fn simulate_run(
    language: Language,
    source: &str,
    collector: &mut dyn InputCollector,
) -> Option<RunOutcome> {
    let template = template_for(language)?;
    let mut output = String::new();

    if source.contains(template.signature) && source.contains(template.greeting_body) {
        debug!(language = language.id(), "recognised default sample");
        output.push_str("Hello, World!\n");

        if source.contains(template.sample_input) {
            let answer = request_or_empty(collector, "Enter your name:");
            if !answer.is_empty() {
                output.push_str(&format!("Enter your name: {answer}\nHello, {answer}!\n"));
            }
        }
        return Some(RunOutcome::success(output));
    }

    output.push_str(&format!("{} Simulation:\n", template.label));
    output.push_str("Code analyzed and executed in simulated environment.\n");

    for caps in template.output_call.captures_iter(source) {
        let content = caps[1].trim();
        if content.len() >= 2 && content.starts_with('"') && content.ends_with('"') {
            output.push_str(&content[1..content.len() - 1]);
            output.push('\n');
        } else if content.contains(&format!("{}(", template.helper)) {
            if let Some(arg) = template.helper_literal.captures(content) {
                output.push_str(&format!("Hello, {}!\n", &arg[1]));
            }
        }
    }

    if source.contains(template.input_marker) {
        if let Some(caps) = template.input_call.captures(source) {
            let var = &caps[1];
            let answer = request_or_empty(collector, &format!("Enter value for {var}:"));
            if !answer.is_empty() {
                output.push_str(&format!("Enter value for {var}: {answer}\n"));

                let direct = format!("{}({var})", template.helper);
                let c_str = format!("{}({var}.c_str())", template.helper);
                if source.contains(&direct) || (template.c_str_calls && source.contains(&c_str)) {
                    output.push_str(&format!("Hello, {answer}!\n"));
                }
            }
        }
    }

    Some(RunOutcome::success(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::input::ScriptedInput;

    #[test]
    fn test_default_samples() {
        for language in [Language::Cpp, Language::Java, Language::CSharp] {
            let mut input = ScriptedInput::default();
            let outcome = simulate_run(language, language.default_sample(), &mut input).unwrap();
            assert_eq!(outcome.output, "Hello, World!\n", "{language}");
            assert!(outcome.error.is_none());
            assert!(input.prompts().is_empty());
        }
    }

    #[test]
    fn test_not_templated() {
        let mut input = ScriptedInput::default();
        assert!(simulate_run(Language::Python, "print(1)", &mut input).is_none());
        assert!(!is_templated(Language::JavaScript));
        assert!(is_templated(Language::CSharp));
    }

    #[test]
    fn test_default_sample_with_input() {
        let source = format!(
            "{}\n// reads: std::getline(std::cin, name)",
            Language::Cpp.default_sample()
        );
        let mut input = ScriptedInput::new(["Ada"]);
        let outcome = simulate_run(Language::Cpp, &source, &mut input).unwrap();
        assert_eq!(
            outcome.output,
            "Hello, World!\nEnter your name: Ada\nHello, Ada!\n"
        );
        assert_eq!(input.prompts(), ["Enter your name:"]);
    }

    #[test]
    fn test_custom_program_extracts_output() {
        let source = r#"public class Main {
    public static void main(String[] args) {
        System.out.println("Line one");
        System.out.println(greet("Bob"));
        System.out.println(count);
    }
}"#;
        let mut input = ScriptedInput::default();
        let outcome = simulate_run(Language::Java, source, &mut input).unwrap();
        assert_eq!(
            outcome.output,
            "Java Simulation:\nCode analyzed and executed in simulated environment.\nLine one\nHello, Bob!\n"
        );
    }

    #[test]
    fn test_custom_program_with_input() {
        let source = r#"static void Main() {
    string who = Console.ReadLine();
    Console.WriteLine(Greet(who));
}"#;
        let mut input = ScriptedInput::new(["Linus"]);
        let outcome = simulate_run(Language::CSharp, source, &mut input).unwrap();
        assert!(outcome
            .output
            .ends_with("Enter value for who: Linus\nHello, Linus!\n"));
        assert_eq!(input.prompts(), ["Enter value for who:"]);
    }

    #[test]
    fn test_cancelled_input_prints_nothing_extra() {
        let source = "int main() {\n    std::string n;\n    std::getline(std::cin, n);\n    std::cout << greet(n.c_str()) << std::endl;\n}";
        let mut input = ScriptedInput::default();
        let outcome = simulate_run(Language::Cpp, source, &mut input).unwrap();
        assert_eq!(
            outcome.output,
            "C++ Simulation:\nCode analyzed and executed in simulated environment.\n"
        );
        assert_eq!(input.prompts(), ["Enter value for n:"]);
    }

    #[test]
    fn test_c_str_helper_call() {
        let source = "int main() {\n    std::getline(std::cin, n);\n    std::cout << greet(n.c_str()) << std::endl;\n}";
        let mut input = ScriptedInput::new(["Ken"]);
        let outcome = simulate_run(Language::Cpp, source, &mut input).unwrap();
        assert!(outcome.output.ends_with("Enter value for n: Ken\nHello, Ken!\n"));
    }
}
