//! Error macros for routefind

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RouteError::invalid_value($context, $value))
    };
}

/// Macro for creating parse errors
#[macro_export]
macro_rules! bail_parse {
    ($path:expr, $line:expr, $reason:expr) => {
        return Err($crate::error::RouteError::parse($path, $line, $reason))
    };
}
