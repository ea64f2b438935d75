//! Pattern 4: Singleton
//!
//! Three ways to hand out exactly one shared instance, plus the injected
//! handle that usually replaces them:
//!
//! - [`EagerInstance`]: a `static` built by a `const fn`; exists before `main`
//! - [`LazyInstance`]: built on first access behind a `OnceLock`
//! - [`HolderInstance`]: built on first access of a `lazy_static!` holder
//! - [`InstanceHandle`]: one `Arc` created at startup and passed around
//!
//! [`race_accessor`] hammers any of the global accessors from many threads
//! at once and reports what each thread saw.

mod eager;
mod handle;
mod holder;
mod once;
mod race;

pub use eager::EagerInstance;
pub use handle::{Consumer, InstanceHandle};
pub use holder::HolderInstance;
pub use once::LazyInstance;
pub use race::{race_accessor, RaceReport};

/// A type with exactly one instance per process.
pub trait Singleton: Sync + 'static {
    fn instance() -> &'static Self;

    fn label(&self) -> &'static str;
}

/// Address of the shared instance, for identity checks.
pub fn address_of<T: Singleton>() -> usize {
    T::instance() as *const T as usize
}
