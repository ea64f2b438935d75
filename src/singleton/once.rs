use super::Singleton;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// Built on first access. `OnceLock` does the check, lock and re-check, so
/// racing first callers still run the constructor once.
#[derive(Debug)]
pub struct LazyInstance {
    label: &'static str,
}

impl LazyInstance {
    fn new() -> Self {
        let count = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(count, "constructing lazy instance");
        Self { label: "lazy (OnceLock)" }
    }

    /// How many times the constructor has run: 0 before first access, 1 after.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

impl Singleton for LazyInstance {
    fn instance() -> &'static Self {
        static INSTANCE: OnceLock<LazyInstance> = OnceLock::new();
        INSTANCE.get_or_init(LazyInstance::new)
    }

    fn label(&self) -> &'static str {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructed_once() {
        let first = LazyInstance::instance();
        let second = LazyInstance::instance();
        assert!(std::ptr::eq(first, second));
        assert_eq!(LazyInstance::constructions(), 1);
    }
}
