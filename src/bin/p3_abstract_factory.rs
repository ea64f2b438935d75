// Pattern 3: Abstract Factory

use colored::Colorize;
use creational_patterns::abstract_factory::{assemble, factory_for, Factory, Family};
use creational_patterns::{setup, PatternError};

fn show(factory: &dyn Factory) {
    let kit = assemble(factory);
    println!("{}:", factory.family().to_string().green());
    println!("  A: {}", kit.a.name());
    println!("  B: {}", kit.b.name());
    println!("  {}", kit.describe());
    println!("  matched family: {}", kit.is_matched());
}

fn main() -> Result<(), PatternError> {
    setup()?;

    println!("{}", "Pattern 3: Abstract Factory".bold());
    println!("===========================\n");

    for family in [Family::One, Family::Two] {
        let factory = factory_for(family);
        show(&*factory);
    }

    Ok(())
}
