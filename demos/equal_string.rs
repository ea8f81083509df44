//! Equal-String Constraint Example
//!
//! Walks through each kind of actual value the constraint understands and
//! prints the report it produces.
//!
//! Run with: cargo run --example equal_string

use equal_string::prelude::*;

#[derive(Debug)]
struct Email {
    user: String,
    domain: String,
}

impl ConvertibleToString for Email {
    fn convert_to_string(&self) -> Option<String> {
        Some(format!("{}@{}", self.user, self.domain))
    }
}

#[derive(Debug)]
struct CountryCode([u8; 2]);

impl StringEquatable for CountryCode {
    fn equals_str(&self, other: Option<&str>) -> bool {
        other.map(str::as_bytes) == Some(&self.0[..])
    }
}

fn main() {
    println!("=== Equal-String Constraint Example ===\n");

    strings();
    convertible_values();
    equatable_values();
    opaque_values();
    clipping();
}

/// Demonstrates plain string comparison and modifiers
fn strings() {
    println!("--- Strings ---\n");

    let strict = equal_string("Hello World");
    let relaxed = equal_string("Hello World").ignore_case().ignore_whitespace();

    for actual in ["Hello World", "hello world", "HelloWorld", "Goodbye"] {
        println!(
            "{:<14} strict: {:<5} relaxed: {}",
            format!("{:?}", actual),
            strict.matches(actual).unwrap_or(false),
            relaxed.matches(actual).unwrap_or(false)
        );
    }

    report(&strict, "Hello Wor1d");
    println!();
}

/// Demonstrates values converted to a string before comparison
fn convertible_values() {
    println!("--- Convertible values ---\n");

    let email = Email {
        user: "Alice".to_string(),
        domain: "Example.com".to_string(),
    };
    let constraint = equal_string("alice@example.com").ignore_case();
    report(&constraint, ActualValue::convertible(&email));

    let port = Displayed(8080);
    report(&equal_string("8080"), ActualValue::convertible(&port));
    println!();
}

/// Demonstrates direct equality and the modifier restriction
fn equatable_values() {
    println!("--- String-equatable values ---\n");

    let code = CountryCode(*b"NZ");
    report(&equal_string("NZ"), ActualValue::equatable(&code));

    match equal_string("nz").ignore_case().evaluate(ActualValue::equatable(&code)) {
        Ok(result) => println!("unexpected result:\n{}", result),
        Err(e) => println!("rejected: {}", e),
    }
    println!();
}

/// Demonstrates values that cannot be related to a string
fn opaque_values() {
    println!("--- Opaque values ---\n");

    report(&equal_string("[1, 2, 3]"), ActualValue::opaque(&vec![1, 2, 3]));
    report(&EqualStringConstraint::null(), ActualValue::Absent);
    println!();
}

/// Demonstrates clipping of long values in reports
fn clipping() {
    println!("--- Clipping ---\n");

    let expected = "lorem ipsum ".repeat(12);
    let actual = format!("{}!", expected.trim_end());

    report(&equal_string(expected.as_str()), actual.as_str());
    report(&equal_string(expected.as_str()).no_clip(), actual.as_str());
}

fn report<'a>(constraint: &EqualStringConstraint, actual: impl Into<ActualValue<'a>>) {
    match constraint.evaluate(actual) {
        Ok(result) => println!("{}", result),
        Err(e) => println!("error: {}", e),
    }
}
