//! Example programs loaded into the terminal editor, and the canned output for each.

use crate::domain::LanguageExample;

pub const PYTHON_SOURCE: &str = r#"print("Hello, TechiBug!")

# Basic variables
name = "Developer"
age = 25
print(f"Hello {name}, you are {age} years old!")

# Simple function
def greet(name):
    return f"Welcome to TechiBug, {name}!"

print(greet("Coder"))"#;

pub const JAVASCRIPT_SOURCE: &str = r#"console.log("Hello, TechiBug!");

// Basic variables
const name = "Developer";
const age = 25;
console.log(`Hello ${name}, you are ${age} years old!`);

// Simple function
function greet(name) {
    return `Welcome to TechiBug, ${name}!`;
}

console.log(greet("Coder"));"#;

pub const JAVA_SOURCE: &str = r#"public class HelloTechiBug {
    public static void main(String[] args) {
        System.out.println("Hello, TechiBug!");

        // Basic variables
        String name = "Developer";
        int age = 25;
        System.out.println("Hello " + name + ", you are " + age + " years old!");

        // Method call
        System.out.println(greet("Coder"));
    }

    public static String greet(String name) {
        return "Welcome to TechiBug, " + name + "!";
    }
}"#;

pub const CPP_SOURCE: &str = r#"#include <iostream>
#include <string>
using namespace std;

string greet(string name) {
    return "Welcome to TechiBug, " + name + "!";
}

int main() {
    cout << "Hello, TechiBug!" << endl;

    // Basic variables
    string name = "Developer";
    int age = 25;
    cout << "Hello " << name << ", you are " << age << " years old!" << endl;

    // Function call
    cout << greet("Coder") << endl;

    return 0;
}"#;

pub const INTERPRETED_OUTPUT: &str = "Hello, TechiBug!\nHello Developer, you are 25 years old!\nWelcome to TechiBug, Coder!\n\n✅ Code executed successfully!";

pub const COMPILED_OUTPUT: &str = "Hello, TechiBug!\nHello Developer, you are 25 years old!\nWelcome to TechiBug, Coder!\n\n✅ Compiled and executed successfully!";

/// Output for languages without an example.
pub const FALLBACK_OUTPUT: &str = "Hello, TechiBug!\n\n✅ Code executed successfully!";

/// The lesson sandbox prints this for every submission.
pub const LESSON_OUTPUT: &str = "Hello, World!\n\n✅ Code executed successfully!";

/// Shown while a simulated run is pending.
pub const RUNNING_PLACEHOLDER: &str = "Running code...\n";

pub const DEFAULT_LANGUAGE_ID: &str = "python";

pub const LANGUAGE_EXAMPLES: &[LanguageExample] = &[
    LanguageExample {
        language_id: "python",
        source: PYTHON_SOURCE,
        output: INTERPRETED_OUTPUT,
    },
    LanguageExample {
        language_id: "javascript",
        source: JAVASCRIPT_SOURCE,
        output: INTERPRETED_OUTPUT,
    },
    LanguageExample {
        language_id: "java",
        source: JAVA_SOURCE,
        output: COMPILED_OUTPUT,
    },
    LanguageExample {
        language_id: "cpp",
        source: CPP_SOURCE,
        output: COMPILED_OUTPUT,
    },
];

pub fn example_for(language_id: &str) -> Option<&'static LanguageExample> {
    LANGUAGE_EXAMPLES
        .iter()
        .find(|e| e.language_id == language_id)
}
