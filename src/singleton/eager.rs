use super::Singleton;

#[derive(Debug)]
pub struct EagerInstance {
    label: &'static str,
}

// Built at compile time; no first-access work and no locking.
static INSTANCE: EagerInstance = EagerInstance::new();

impl EagerInstance {
    const fn new() -> Self {
        Self { label: "eager" }
    }
}

impl Singleton for EagerInstance {
    fn instance() -> &'static Self {
        &INSTANCE
    }

    fn label(&self) -> &'static str {
        self.label
    }
}
