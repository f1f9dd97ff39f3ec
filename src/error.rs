use thiserror::Error;

/// Errors raised by curve construction and evaluation.
///
/// Construction faults (`TooFewWayPoints`, `UnorderedWayPoints`,
/// `ZeroExponentiation`) are raised synchronously by the constructors and
/// never later; `NonFiniteInput` is raised on each query with a NaN or
/// infinite x. The library performs no retries and no logging, recovery is
/// left to the caller.
#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("the number of way points must be at least {min}, got {got}")]
    TooFewWayPoints { min: usize, got: usize },

    #[error("the x of the way points must be in ascending order and must not be duplicated")]
    UnorderedWayPoints,

    #[error("the exponentiation amount must not be 0")]
    ZeroExponentiation,

    #[error("the number must not be NaN or infinite: {0}")]
    NonFiniteInput(f64),
}
