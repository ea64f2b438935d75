// Pattern 2: Factory Method

use colored::Colorize;
use creational_patterns::factory_method::{Factory, FactoryA, FactoryB};
use creational_patterns::{setup, PatternError};

fn produce(name: &str, factory: &dyn Factory) {
    let product = factory.create_product();
    println!(
        "{} -> {} (variant {:?}, serial #{})",
        name,
        product.information(),
        product.variant(),
        product.serial()
    );
}

fn main() -> Result<(), PatternError> {
    setup()?;

    println!("{}", "Pattern 2: Factory Method".bold());
    println!("=========================\n");

    produce("FactoryA", &FactoryA);
    produce("FactoryB", &FactoryB);

    println!("\n{}", "Every call builds a new product:".green());
    produce("FactoryA", &FactoryA);

    Ok(())
}
