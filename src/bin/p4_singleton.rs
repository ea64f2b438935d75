// Pattern 4: Singleton

use colored::Colorize;
use creational_patterns::singleton::{
    race_accessor, Consumer, EagerInstance, HolderInstance, InstanceHandle, LazyInstance,
    RaceReport, Singleton,
};
use creational_patterns::{setup, PatternError};

fn same_twice<T: Singleton>() {
    let first = T::instance();
    let second = T::instance();
    println!(
        "  {:<22} same instance: {}",
        first.label(),
        std::ptr::eq(first, second)
    );
}

fn print_race(report: &RaceReport) {
    let verdict = if report.all_same() {
        "one instance".green()
    } else {
        "MISMATCH".red()
    };
    println!(
        "  {:<22} {} threads -> {}",
        report.label, report.threads, verdict
    );
}

fn main() -> Result<(), PatternError> {
    let config = setup()?;

    println!("{}", "Pattern 4: Singleton".bold());
    println!("====================\n");

    println!("=== Before first access ===");
    println!("  lazy constructions:   {}", LazyInstance::constructions());
    println!("  holder constructions: {}", HolderInstance::constructions());
    println!();

    println!("=== Concurrent first access ===");
    print_race(&race_accessor::<EagerInstance>(config.race_threads));
    print_race(&race_accessor::<LazyInstance>(config.race_threads));
    print_race(&race_accessor::<HolderInstance>(config.race_threads));
    println!("  lazy constructions:   {}", LazyInstance::constructions());
    println!("  holder constructions: {}", HolderInstance::constructions());
    println!();

    println!("=== Sequential access ===");
    same_twice::<EagerInstance>();
    same_twice::<LazyInstance>();
    same_twice::<HolderInstance>();
    println!();

    println!("=== Dependency Injection ===");
    let handle = InstanceHandle::new("app-config");
    let reports = Consumer::new("reports", handle.clone());
    let billing = Consumer::new("billing", handle.clone());
    println!("  {}", reports.describe());
    println!("  {}", billing.describe());
    println!(
        "  same instance: {}",
        reports.handle().same_instance(billing.handle())
    );
    println!("  holders: {}", handle.holders());

    Ok(())
}
