//! CLI command implementations.

pub mod combine;
pub mod debug;
pub mod eval;
pub mod show;
pub mod stmt;

use crate::output;

/// Run every demonstration in order.
pub fn run_all(verbose: bool) -> Result<(), String> {
    eval::run(verbose)?;
    show::run(verbose)?;
    combine::run(verbose)?;
    debug::run(verbose)?;
    stmt::run(verbose)?;

    if verbose {
        for class in objalg_algebra::classes::registered() {
            output::info(&format!("witness class {class}"));
        }
    }
    Ok(())
}
