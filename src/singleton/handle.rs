// Dependency injection instead of a global: build one handle at startup and
// hand clones to whoever needs it. Still one instance, but no hidden state.

use std::sync::Arc;

#[derive(Debug)]
struct Shared {
    label: String,
}

#[derive(Debug, Clone)]
pub struct InstanceHandle {
    inner: Arc<Shared>,
}

impl InstanceHandle {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Shared {
                label: label.into(),
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    pub fn same_instance(&self, other: &InstanceHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live clones of this handle.
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

pub struct Consumer {
    name: String,
    handle: InstanceHandle,
}

impl Consumer {
    pub fn new(name: impl Into<String>, handle: InstanceHandle) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }

    pub fn handle(&self) -> &InstanceHandle {
        &self.handle
    }

    pub fn describe(&self) -> String {
        format!("{} uses '{}'", self.name, self.handle.label())
    }
}
