pub mod batch_ops;
pub mod table_ops;
pub mod transcribe_ops;

/// Unwrap a result or print the error with the given format and exit(1).
#[macro_export]
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
