/// Log through a format string.
///
/// ```
/// let log = taglog::Logger::with_config("db", taglog::DebugConfig::default());
/// taglog::logf!(log, "rows = {:#?}", vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $($arg:tt)+) => {
        ($logger).printf(::std::format_args!($($arg)+))
    };
}

/// Pretty-print each value separately.
///
/// ```
/// let log = taglog::Logger::with_config("db", taglog::DebugConfig::default());
/// taglog::logln!(log, "query", (1, 2));
/// ```
#[macro_export]
macro_rules! logln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        ($logger).println(&[$(&$value as &dyn ::std::fmt::Debug),*])
    };
}
