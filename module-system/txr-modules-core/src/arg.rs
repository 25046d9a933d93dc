//! Textual argument adapters for RPC and command-line front ends.

use core::str::FromStr;

use crate::address::RollupId;

/// Conversion to and from the textual argument format used by RPC routes and
/// command-line front ends.
///
/// Parse failures are plain strings: argument plumbing renders them verbatim
/// and drops the structured reason carried by the underlying decode error.
pub trait RpcArg: Sized {
    /// Name under which the argument is registered.
    const NAME: &'static str;

    /// Parses the textual form.
    fn parse_arg(s: &str) -> Result<Self, String>;

    /// Renders the textual form.
    fn print_arg(&self) -> String;
}

impl RpcArg for RollupId {
    const NAME: &'static str = "rollup_id";

    fn parse_arg(s: &str) -> Result<Self, String> {
        Self::from_str(s).map_err(|_| "Cannot parse rollup id".to_string())
    }

    fn print_arg(&self) -> String {
        self.to_string()
    }
}
