//! Supported playground languages and their sample programs

use crate::error::{PlaygroundError, Result as PlaygroundResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A language the playground can simulate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[value(name = "cpp", alias = "c++")]
    Cpp,
    Java,
    #[value(name = "csharp", alias = "c#")]
    CSharp,
    #[default]
    #[value(name = "javascript", alias = "js")]
    JavaScript,
    #[value(name = "python", alias = "py")]
    Python,
}

impl Language {
    /// Every language, in selector order
    pub const ALL: [Language; 5] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::CSharp,
        Language::Cpp,
    ];

    /// Human-readable name shown in the UI
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
        }
    }

    /// Identifier used on the command line and in config files
    pub fn id(self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::JavaScript => "javascript",
            Language::Python => "python",
        }
    }

    /// The next language in selector order (wraps around)
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&l| l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Guess the language from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "cpp" | "cc" | "cxx" | "hpp" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            "cs" => Some(Language::CSharp),
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "py" => Some(Language::Python),
            _ => None,
        }
    }

    /// The "hello world" program loaded when the language is selected
    pub fn default_sample(self) -> &'static str {
        match self {
            Language::JavaScript => JAVASCRIPT_SAMPLE,
            Language::Python => PYTHON_SAMPLE,
            Language::Java => JAVA_SAMPLE,
            Language::CSharp => CSHARP_SAMPLE,
            Language::Cpp => CPP_SAMPLE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = PlaygroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpp" | "c++" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "javascript" | "js" => Ok(Language::JavaScript),
            "python" | "py" => Ok(Language::Python),
            _ => Err(PlaygroundError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Read a program from disk
pub fn read_source(path: &Path) -> PlaygroundResult<String> {
    fs::read_to_string(path).map_err(|source| PlaygroundError::Io {
        path: path.to_path_buf(),
        source,
    })
}

const JAVASCRIPT_SAMPLE: &str = r#"// JavaScript Hello World Example
function greet(name) {
  return "Hello, " + name + "!";
}

// Display greeting
console.log(greet("World"));
console.log("Welcome to Code Pilot!");"#;

const PYTHON_SAMPLE: &str = r#"# Python Hello World Example
def greet(name):
    return f"Hello, {name}!"

# Display greeting
print(greet("World"))
print("Welcome to Code Pilot!")"#;

const JAVA_SAMPLE: &str = r#"// Java Hello World Example
public class Main {
    public static void main(String[] args) {
        System.out.println(greet("World"));
        System.out.println("Welcome to Code Pilot!");
    }

    public static String greet(String name) {
        return "Hello, " + name + "!";
    }
}"#;

const CSHARP_SAMPLE: &str = r#"// C# Hello World Example
using System;

class Program {
    static void Main() {
        Console.WriteLine(Greet("World"));
        Console.WriteLine("Welcome to Code Pilot!");
    }

    static string Greet(string name) {
        return $"Hello, {name}!";
    }
}"#;

const CPP_SAMPLE: &str = r#"// C++ Hello World Example
#include <iostream>
#include <string>

std::string greet(const std::string& name) {
    return "Hello, " + name + "!";
}

int main() {
    std::cout << greet("World") << std::endl;
    std::cout << "Welcome to Code Pilot!" << std::endl;
    return 0;
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all() {
        let mut lang = Language::JavaScript;
        for _ in 0..Language::ALL.len() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::JavaScript);
        assert_eq!(Language::Cpp.next(), Language::JavaScript);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path(Path::new("main.cpp")), Some(Language::Cpp));
        assert_eq!(Language::from_path(Path::new("Main.JAVA")), Some(Language::Java));
        assert_eq!(Language::from_path(Path::new("app.py")), Some(Language::Python));
        assert_eq!(Language::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("C#".parse::<Language>().unwrap(), Language::CSharp);
        assert_eq!("js".parse::<Language>().unwrap(), Language::JavaScript);
        assert!(matches!(
            "cobol".parse::<Language>(),
            Err(PlaygroundError::UnknownLanguage(name)) if name == "cobol"
        ));
    }

    #[test]
    fn test_read_source_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.py");
        std::fs::write(&path, "print('hi')\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "print('hi')\n");

        let missing = dir.path().join("missing.py");
        match read_source(&missing) {
            Err(PlaygroundError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
