// Public modules
pub mod types;
mod validators;

// Re-export everything from the submodules
pub use types::*;
pub use validators::*;

use clap::Parser;

/// Parse command line arguments
///
/// Value-level checks (readable build root, concurrency >= 1, host syntax)
/// run inside clap's value parsers, so a bad argument exits with clap's usage error.
#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
