use super::Singleton;
use std::sync::atomic::{AtomicUsize, Ordering};

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct HolderInstance {
    label: &'static str,
}

// The holder is only touched by `instance()`, so nothing is built until then.
mod lazy_holder {
    use super::HolderInstance;

    lazy_static::lazy_static! {
        pub(super) static ref INSTANCE: HolderInstance = HolderInstance::new();
    }
}

impl HolderInstance {
    fn new() -> Self {
        let count = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(count, "constructing holder instance");
        Self {
            label: "lazy (static holder)",
        }
    }

    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

impl Singleton for HolderInstance {
    fn instance() -> &'static Self {
        &lazy_holder::INSTANCE
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
        let first = HolderInstance::instance();
        let second = HolderInstance::instance();
        assert!(std::ptr::eq(first, second));
        assert_eq!(HolderInstance::constructions(), 1);
        assert_eq!(first.label(), "lazy (static holder)");
    }
}
