// Pattern 1: Simple Factory
// One function decides which concrete product to build from a code.

use crate::error::{PatternError, Result};

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCode {
    A,
    B,
}

impl ProductCode {
    /// Codes are case-sensitive: `'a'` is not a product.
    pub fn from_char(code: char) -> Option<Self> {
        match code {
            'A' => Some(ProductCode::A),
            'B' => Some(ProductCode::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ProductCode::A => 'A',
            ProductCode::B => 'B',
        }
    }
}

pub trait Product {
    fn information(&self) -> &'static str;
    fn code(&self) -> ProductCode;
}

#[derive(Debug)]
pub struct ProductA;

impl Product for ProductA {
    fn information(&self) -> &'static str {
        "This is product A"
    }

    fn code(&self) -> ProductCode {
        ProductCode::A
    }
}

#[derive(Debug)]
pub struct ProductB;

impl Product for ProductB {
    fn information(&self) -> &'static str {
        "This is product B"
    }

    fn code(&self) -> ProductCode {
        ProductCode::B
    }
}

// ============================================================================
// Factory
// ============================================================================

pub struct SimpleFactory;

impl SimpleFactory {
    /// Builds the product for `code`, or logs and returns `None` for an
    /// unknown code.
    pub fn create(code: char) -> Option<Box<dyn Product>> {
        match ProductCode::from_char(code) {
            Some(ProductCode::A) => Some(Box::new(ProductA)),
            Some(ProductCode::B) => Some(Box::new(ProductB)),
            None => {
                tracing::warn!(%code, "no such product");
                None
            }
        }
    }

    pub fn try_create(code: char) -> Result<Box<dyn Product>> {
        Self::create(code).ok_or(PatternError::UnknownProduct { code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_create_a() {
        let product = SimpleFactory::create('A').expect("A is a known code");
        assert_eq!(product.code(), ProductCode::A);
        assert!(product.information().contains("product A"));
    }

    #[test]
    fn test_create_b() {
        let product = SimpleFactory::create('B').expect("B is a known code");
        assert_eq!(product.code(), ProductCode::B);
        assert!(product.information().contains("product B"));
    }

    #[test]
    fn test_unknown_code_is_absent() {
        assert!(SimpleFactory::create('C').is_none());
        assert!(SimpleFactory::create('a').is_none());
    }

    #[test]
    fn test_try_create_unknown() {
        let err = SimpleFactory::try_create('C').err().unwrap();
        assert!(matches!(err, PatternError::UnknownProduct { code: 'C' }));
    }

    #[test]
    fn test_code_round_trip() {
        for code in [ProductCode::A, ProductCode::B] {
            assert_eq!(ProductCode::from_char(code.as_char()), Some(code));
        }
    }

    proptest! {
        #[test]
        fn prop_other_codes_never_build(code in any::<char>()) {
            prop_assume!(code != 'A' && code != 'B');
            prop_assert!(SimpleFactory::create(code).is_none());
        }
    }
}
