//! Error macros for algokit

/// Macro for returning an empty input error
#[macro_export]
macro_rules! bail_empty {
    ($operation:expr) => {
        return Err($crate::error::AlgoError::empty_input($operation))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::AlgoError::invalid_value($context, $value))
    };
}
