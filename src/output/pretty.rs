//! Pretty-printing of logged values.
//!
//! The default printer uses the alternate `Debug` form (`{:#?}`), which
//! renders nested structures across several indented lines.

use std::fmt::{self, Write};

/// Renders values to possibly multi-line text.
pub trait PrettyPrinter: Send + Sync + fmt::Debug {
    /// Render a single value.
    fn pretty(&self, value: &dyn fmt::Debug) -> Result<String, fmt::Error>;

    /// Render a pre-built format string with its arguments.
    fn pretty_args(&self, args: fmt::Arguments<'_>) -> Result<String, fmt::Error>;
}

/// `{:#?}` for values, the caller's own format string for arguments.
///
/// Writes through `fmt::Write` so a failing `Debug` impl comes back as an
/// error instead of a panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugPretty;

impl PrettyPrinter for DebugPretty {
    fn pretty(&self, value: &dyn fmt::Debug) -> Result<String, fmt::Error> {
        let mut out = String::new();
        write!(out, "{value:#?}")?;
        Ok(out)
    }

    fn pretty_args(&self, args: fmt::Arguments<'_>) -> Result<String, fmt::Error> {
        let mut out = String::new();
        out.write_fmt(args)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Query {
        table: &'static str,
        limit: u32,
    }

    struct Broken;

    impl fmt::Debug for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_struct_is_multi_line() {
        let text = DebugPretty.pretty(&Query { table: "users", limit: 10 }).unwrap();
        assert_eq!(text, "Query {\n    table: \"users\",\n    limit: 10,\n}");
    }

    #[test]
    fn test_scalar_is_single_line() {
        assert_eq!(DebugPretty.pretty(&42).unwrap(), "42");
        assert_eq!(DebugPretty.pretty(&"x").unwrap(), "\"x\"");
    }

    #[test]
    fn test_args() {
        let text = DebugPretty.pretty_args(format_args!("rows={} {:?}", 3, [1, 2])).unwrap();
        assert_eq!(text, "rows=3 [1, 2]");
    }

    #[test]
    fn test_failing_debug_is_an_error() {
        assert!(DebugPretty.pretty(&Broken).is_err());
        assert!(DebugPretty.pretty_args(format_args!("{:?}", Broken)).is_err());
    }
}
