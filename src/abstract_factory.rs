// Pattern 3: Abstract Factory
// A factory builds a whole family of related products. Picking the factory
// picks the family; each concrete factory only knows its own members.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    One,
    Two,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::One => write!(f, "family 1"),
            Family::Two => write!(f, "family 2"),
        }
    }
}

// ============================================================================
// Products
// ============================================================================

pub trait ProductA {
    fn name(&self) -> &'static str;
    fn family(&self) -> Family;
}

pub trait ProductB {
    fn name(&self) -> &'static str;
    fn family(&self) -> Family;

    fn collaborate(&self, a: &dyn ProductA) -> String {
        format!("{} works with {}", self.name(), a.name())
    }
}

pub struct ProductA1;

impl ProductA for ProductA1 {
    fn name(&self) -> &'static str {
        "ProductA1"
    }

    fn family(&self) -> Family {
        Family::One
    }
}

pub struct ProductA2;

impl ProductA for ProductA2 {
    fn name(&self) -> &'static str {
        "ProductA2"
    }

    fn family(&self) -> Family {
        Family::Two
    }
}

pub struct ProductB1;

impl ProductB for ProductB1 {
    fn name(&self) -> &'static str {
        "ProductB1"
    }

    fn family(&self) -> Family {
        Family::One
    }
}

pub struct ProductB2;

impl ProductB for ProductB2 {
    fn name(&self) -> &'static str {
        "ProductB2"
    }

    fn family(&self) -> Family {
        Family::Two
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait Factory {
    fn create_product_a(&self) -> Box<dyn ProductA>;
    fn create_product_b(&self) -> Box<dyn ProductB>;
    fn family(&self) -> Family;
}

/// Builds A1 and B1.
pub struct Factory1;

impl Factory for Factory1 {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        Box::new(ProductA1)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        Box::new(ProductB1)
    }

    fn family(&self) -> Family {
        Family::One
    }
}

/// Builds A2 and B2.
pub struct Factory2;

impl Factory for Factory2 {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        Box::new(ProductA2)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        Box::new(ProductB2)
    }

    fn family(&self) -> Family {
        Family::Two
    }
}

pub fn factory_for(family: Family) -> Box<dyn Factory> {
    match family {
        Family::One => Box::new(Factory1),
        Family::Two => Box::new(Factory2),
    }
}

// ============================================================================
// Client
// ============================================================================

/// One A and one B from the same factory.
pub struct Kit {
    pub a: Box<dyn ProductA>,
    pub b: Box<dyn ProductB>,
}

impl Kit {
    pub fn is_matched(&self) -> bool {
        self.a.family() == self.b.family()
    }

    pub fn describe(&self) -> String {
        self.b.collaborate(&*self.a)
    }
}

pub fn assemble(factory: &dyn Factory) -> Kit {
    Kit {
        a: factory.create_product_a(),
        b: factory.create_product_b(),
    }
}
