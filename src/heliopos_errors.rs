use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum HelioposError {
    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error(
        "Kepler solver did not converge after {iterations} iterations (last step: {last_step:e} rad)"
    )]
    NonConvergence { iterations: usize, last_step: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid ephemeris parameter: {0}")]
    InvalidParameter(String),

    #[error("Unable to parse calendar date: {0}")]
    InvalidDate(String),

    #[error("System clock unavailable: {0}")]
    Clock(String),
}

impl PartialEq for HelioposError {
    fn eq(&self, other: &Self) -> bool {
        use HelioposError::*;
        match (self, other) {
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (InvalidInput(a), InvalidInput(b)) => a == b,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,

            // NaN steps must still compare equal when the variant matches
            (
                NonConvergence {
                    iterations: ia,
                    last_step: sa,
                },
                NonConvergence {
                    iterations: ib,
                    last_step: sb,
                },
            ) => ia == ib && (sa == sb || (sa.is_nan() && sb.is_nan())),

            (Clock(_), Clock(_)) => true,

            _ => false,
        }
    }
}
