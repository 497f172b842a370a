/// Errors raised when grouped statistics cannot be computed for the given input.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DomainError {
    /// The dataset has no observations, so its range is undefined.
    #[display("dataset is empty")]
    EmptyDataset,
    /// The class width is zero, negative, or not a finite number.
    #[display("class width must be a positive finite number, got {width}")]
    InvalidWidth { width: f64 },
    /// An observation is NaN or infinite.
    #[display("observation #{index} is not a finite number ({value})")]
    NonFiniteValue { index: usize, value: f64 },
    /// The range divided by the width yields more classes than can be tabulated.
    #[display("{num_classes} classes requested, at most {max} are supported")]
    TooManyClasses { num_classes: f64, max: usize },
    /// The grouped mean is zero, so the coefficient of variation is undefined.
    #[display("coefficient of variation is undefined for a grouped mean of {mean}")]
    ZeroMean { mean: f64 },
}
