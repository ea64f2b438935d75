//! # Creational Patterns in Rust
//!
//! This crate contains runnable examples of the classic object-creation
//! patterns.
//!
//! ## Pattern 1: Simple Factory
//! - One function maps a product code to a concrete product
//! - Unknown codes yield `None` (or an error with `try_create`)
//!
//! ## Pattern 2: Factory Method
//! - A creator trait with one concrete creator per product
//! - Every call builds a fresh product
//!
//! ## Pattern 3: Abstract Factory
//! - One factory per product *family*
//! - A factory never mixes members of different families
//!
//! ## Pattern 4: Singleton
//! - Eager `static` built by a `const fn`
//! - Lazy, guarded by `OnceLock`
//! - Lazy, held by a `lazy_static!` holder
//! - Injected `Arc` handle (preferred over global state)
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_simple_factory
//! cargo run --bin p2_factory_method
//! cargo run --bin p3_abstract_factory
//! cargo run --bin p4_singleton
//! ```

pub mod abstract_factory;
pub mod config;
pub mod error;
pub mod factory_method;
pub mod logging;
pub mod simple_factory;
pub mod singleton;

pub use config::DemoConfig;
pub use error::{PatternError, Result};

/// Shared startup for the example binaries: load config, then set up
/// colors and logging from it.
pub fn setup() -> Result<DemoConfig> {
    let config = DemoConfig::from_env()?;
    config.apply_color();
    logging::init(&config.log_level);
    Ok(config)
}
