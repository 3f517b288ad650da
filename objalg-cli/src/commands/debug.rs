//! The `objalg debug` command.

use objalg_diagnostic::Debug;
use objalg_eval::{Eval, IntBoolEval};
use objalg_fmt::{IntBoolShow, Show};

use crate::{output, programs};

pub fn run(_verbose: bool) -> Result<(), String> {
    output::header("debug");
    let alg = Debug::new(IntBoolEval::new(), IntBoolShow::new());

    let pair = programs::chain(&alg);
    let value = pair.a.eval().map_err(|e| e.to_string())?;
    for diagnostic in alg.take_diagnostics() {
        output::info(&diagnostic.to_string());
    }
    output::success(&format!("{} => {}", pair.b.show(), value));

    Ok(())
}
