// ============================================================================
// Basic Usage Example
// ============================================================================

use number_validator::prelude::*;
use number_validator::utils::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(tracing::Level::TRACE)?;

    println!("=== Number Validator Example ===\n");

    // Amounts in N(17,2), negatives refused
    let amount = NumberValidator::new(17, 2, true)?;
    println!("Created validator for {}\n", amount.config());

    for text in ["0.0", "0,0", "1234.56", "-1.0", "0.000", "1.0.0", ""] {
        match amount.check(text) {
            Ok(number) => println!("  {:>10?} -> accepted as {}", text, number),
            Err(rejection) => println!("  {:>10?} -> rejected: {}", text, rejection),
        }
    }

    // Formats can also come from their notation
    println!("\n=== From notation ===");
    let counter: NumberValidator = "N(3)".parse()?;
    println!("Created validator for {}", counter.config());
    println!("  \"-12\"  -> {}", counter.is_valid_number("-12"));
    println!("  \"-123\" -> {}", counter.is_valid_number("-123"));

    // Bad configurations fail up front
    println!("\n=== Invalid configurations ===");
    for (precision, scale) in [(-1, 2), (1, -1), (1, 2)] {
        match NumberValidator::new(precision, scale, true) {
            Ok(_) => println!("  ({}, {}) -> ok", precision, scale),
            Err(err) => println!("  ({}, {}) -> {}", precision, scale, err),
        }
    }

    Ok(())
}
