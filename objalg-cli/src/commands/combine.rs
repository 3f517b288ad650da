//! The `objalg combine` command.

use objalg_algebra::Combine;
use objalg_eval::{Eval, IntBoolEval};
use objalg_fmt::{IntBoolShow, Show};

use crate::{output, programs};

pub fn run(verbose: bool) -> Result<(), String> {
    output::header("combine");
    let alg = Combine::new(IntBoolEval::new(), IntBoolShow::new());

    let results = [
        programs::sum(&alg),
        programs::chain(&alg),
        programs::choice(&alg).map_err(|e| e.to_string())?,
    ];
    for pair in &results {
        if verbose {
            output::info(&format!("built {:?} / {:?}", pair.a, pair.b));
        }
        let value = pair.a.eval().map_err(|e| e.to_string())?;
        output::success(&format!("{} => {}", pair.b.show(), value));
    }

    Ok(())
}
