use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("No such product: '{code}'")]
    UnknownProduct { code: char },

    #[error("Called an operation on the absent product for code '{code}'")]
    AbsentProduct { code: char },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Value {value} for field '{field}' is out of range (min: {min}, max: {max})")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

impl PatternError {
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_product_message() {
        let err = PatternError::UnknownProduct { code: 'C' };
        assert_eq!(err.to_string(), "No such product: 'C'");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = PatternError::OutOfRange {
            field: "race_threads",
            value: 0,
            min: 1,
            max: 256,
        };
        assert_eq!(
            err.to_string(),
            "Value 0 for field 'race_threads' is out of range (min: 1, max: 256)"
        );
    }

    #[test]
    fn test_config_read_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PatternError::config_read("demo.toml", io);
        assert!(err.to_string().contains("demo.toml"));
        assert!(err.source().is_some());
    }
}
