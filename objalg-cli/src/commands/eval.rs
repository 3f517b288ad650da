//! The `objalg eval` command.

use objalg_eval::{Eval, IntBoolEval};

use crate::{output, programs};

pub fn run(verbose: bool) -> Result<(), String> {
    output::header("eval");
    let alg = IntBoolEval::new();

    let sum = programs::sum(&alg);
    if verbose {
        output::info(&format!("built {sum:?}"));
    }
    let value = sum.eval().map_err(|e| e.to_string())?;
    output::success(&value.to_string());

    let choice = programs::choice(&alg).map_err(|e| e.to_string())?;
    let value = choice.eval().map_err(|e| e.to_string())?;
    output::success(&value.to_string());

    Ok(())
}
