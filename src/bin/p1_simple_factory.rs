// Pattern 1: Simple Factory
// Builds products A and B from their codes, then asks for a product that
// does not exist and uses the result anyway.

use colored::Colorize;
use creational_patterns::simple_factory::SimpleFactory;
use creational_patterns::{setup, PatternError};
use std::process::ExitCode;

fn run() -> Result<(), PatternError> {
    setup()?;

    println!("{}", "Pattern 1: Simple Factory".bold());
    println!("=========================\n");

    for code in ['A', 'B'] {
        if let Some(product) = SimpleFactory::create(code) {
            println!("'{}' -> {}", code, product.information());
        }
    }

    // Checked form: the caller decides what an unknown code means.
    match SimpleFactory::try_create('C') {
        Ok(product) => println!("'C' -> {}", product.information()),
        Err(err) => println!("{}", err.to_string().yellow()),
    }

    // Unchecked form: product C does not exist, and using the absent
    // result ends the program with an error.
    println!("\n{}", "Using product 'C' without checking...".red());
    let product = SimpleFactory::create('C').ok_or(PatternError::AbsentProduct { code: 'C' })?;
    println!("'C' -> {}", product.information());

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
