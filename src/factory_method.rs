// Pattern 2: Factory Method
// Each concrete creator is bound to one product type.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

fn next_serial() -> u64 {
    NEXT_SERIAL.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    A,
    B,
}

pub trait Product {
    fn information(&self) -> &'static str;
    fn variant(&self) -> Variant;
    /// Unique per constructed instance.
    fn serial(&self) -> u64;
}

#[derive(Debug)]
pub struct ProductA {
    serial: u64,
}

impl Product for ProductA {
    fn information(&self) -> &'static str {
        "This is product A"
    }

    fn variant(&self) -> Variant {
        Variant::A
    }

    fn serial(&self) -> u64 {
        self.serial
    }
}

#[derive(Debug)]
pub struct ProductB {
    serial: u64,
}

impl Product for ProductB {
    fn information(&self) -> &'static str {
        "This is product B"
    }

    fn variant(&self) -> Variant {
        Variant::B
    }

    fn serial(&self) -> u64 {
        self.serial
    }
}

pub trait Factory {
    fn create_product(&self) -> Box<dyn Product>;
    fn variant(&self) -> Variant;
}

pub struct FactoryA;

impl Factory for FactoryA {
    fn create_product(&self) -> Box<dyn Product> {
        Box::new(ProductA {
            serial: next_serial(),
        })
    }

    fn variant(&self) -> Variant {
        Variant::A
    }
}

pub struct FactoryB;

impl Factory for FactoryB {
    fn create_product(&self) -> Box<dyn Product> {
        Box::new(ProductB {
            serial: next_serial(),
        })
    }

    fn variant(&self) -> Variant {
        Variant::B
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_a_builds_a() {
        let factory: Box<dyn Factory> = Box::new(FactoryA);
        for _ in 0..3 {
            assert_eq!(factory.create_product().variant(), Variant::A);
        }
        assert_eq!(factory.variant(), Variant::A);
    }

    #[test]
    fn test_factory_b_builds_b() {
        let factory: Box<dyn Factory> = Box::new(FactoryB);
        let product = factory.create_product();
        assert_eq!(product.variant(), Variant::B);
        assert!(product.information().contains("product B"));
    }

    #[test]
    fn test_repeated_calls_are_distinct() {
        let first = FactoryA.create_product();
        let second = FactoryA.create_product();
        assert_ne!(first.serial(), second.serial());
        assert!(second.serial() > first.serial());
    }

    #[test]
    fn test_factories_are_interchangeable() {
        let factories: Vec<Box<dyn Factory>> = vec![Box::new(FactoryA), Box::new(FactoryB)];
        let variants: Vec<Variant> = factories
            .iter()
            .map(|factory| factory.create_product().variant())
            .collect();
        assert_eq!(variants, vec![Variant::A, Variant::B]);
    }
}
