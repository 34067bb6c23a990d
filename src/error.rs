#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Empty range: min {min} equals max {max}")]
    EmptyRange { min: f64, max: f64 },
    #[error("Non-finite range bound: [{min}, {max}]")]
    NonFiniteBound { min: f64, max: f64 },
    #[error("Logarithmic range bounds must be positive: [{min}, {max}]")]
    NonPositiveLogBound { min: f64, max: f64 },
    #[error("Invalid tuning reference frequency: {0}")]
    InvalidReferenceFreq(f64),
    #[error("Invalid tuning reference note: {0}")]
    InvalidReferenceNote(f64),
    #[cfg(feature = "plot")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "plot")]
    #[error("Plot error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    // without the plot feature nothing in the crate can fail on I/O
    #[cfg(not(feature = "plot"))]
    #[test]
    fn default_build_has_no_io_errors() {
        let errors = [
            Error::EmptyRange { min: 1.0, max: 1.0 },
            Error::NonFiniteBound { min: f64::NAN, max: 1.0 },
            Error::NonPositiveLogBound { min: 0.0, max: 1.0 },
            Error::InvalidReferenceFreq(0.0),
            Error::InvalidReferenceNote(f64::NAN),
        ];
        for error in errors {
            match error {
                Error::EmptyRange { .. }
                | Error::NonFiniteBound { .. }
                | Error::NonPositiveLogBound { .. }
                | Error::InvalidReferenceFreq(_)
                | Error::InvalidReferenceNote(_) => {}
            }
        }
    }

    #[test]
    fn messages_name_the_bounds() {
        let error = Error::EmptyRange { min: 200.0, max: 200.0 };
        assert_eq!(error.to_string(), "Empty range: min 200 equals max 200");
        let error = Error::NonPositiveLogBound { min: -20.0, max: 20000.0 };
        assert_eq!(error.to_string(), "Logarithmic range bounds must be positive: [-20, 20000]");
    }
}
