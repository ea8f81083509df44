//! Demonstrates tracing integration with the equal-string constraint
//!
//! Run with: cargo run --example tracing_demo --features tracing

use equal_string::prelude::*;

#[derive(Debug)]
struct Token(&'static str);

impl StringEquatable for Token {
    fn equals_str(&self, other: Option<&str>) -> bool {
        other == Some(self.0)
    }
}

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let constraint = equal_string("Ready").ignore_case();
    match constraint.evaluate("READY") {
        Ok(result) => tracing::info!("string comparison: {}", result.succeeded()),
        Err(e) => tracing::error!("string comparison failed: {}", e),
    }

    // The case modifier cannot be honored by a direct equality check
    let token = Token("Ready");
    match constraint.evaluate(ActualValue::equatable(&token)) {
        Ok(result) => tracing::info!("token comparison: {}", result.succeeded()),
        Err(e) => tracing::error!("token comparison rejected: {}", e),
    }
}
