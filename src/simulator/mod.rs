//! Step-mode execution simulator
//!
//! The simulator does not parse or interpret programs. It pattern-matches the
//! small "hello world" shapes that the sample programs use and turns them into
//! a list of [`ExecutionStep`](crate::snapshot::ExecutionStep)s:
//!
//! - [`profile`]: per-language vocabulary and compiled line patterns
//! - [`classify`]: turns one trimmed line into a [`classify::LineKind`]
//! - [`generator`]: locates the entry block and emits the steps
//!
//! # Supported shapes
//!
//! | Shape       | C++                      | Java                   | C#                    | JavaScript           | Python            |
//! |-------------|--------------------------|------------------------|-----------------------|----------------------|-------------------|
//! | entry       | `int main(`              | `public static void main` | `static void Main` | whole file           | whole file        |
//! | declaration | `int x = 1;`             | `String s;`            | `string s = "a";`     | `let x = 1;`         | `x = 1`           |
//! | output      | `std::cout << x;`        | `System.out.println(x);` | `Console.WriteLine(x);` | `console.log(x);` | `print(x)`        |
//! | input       | `std::getline(std::cin, x);` | `String x = scanner.nextLine();` | `string x = Console.ReadLine();` | `let x = prompt("?");` | `x = input("?")` |
//! | function    | -                        | -                      | -                     | `function f(a)`      | `def f(a):`       |
//!
//! Anything else is skipped.

pub mod classify;
pub mod generator;
pub mod profile;

pub use generator::{generate, SIMULATED_INPUT};
pub use profile::LanguageProfile;
