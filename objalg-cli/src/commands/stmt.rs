//! The `objalg stmt` command.

use objalg_algebra::{Combine, Union};
use objalg_eval::{Eval, IntBoolEval, StmtEval};
use objalg_fmt::{IntBoolShow, Show, StmtShow};

use crate::{output, programs};

pub fn run(verbose: bool) -> Result<(), String> {
    output::header("stmt");
    let evaluator = StmtEval::new();
    let store = evaluator.store().clone();

    let eval = Union::new(IntBoolEval::new(), evaluator).map_err(|e| e.to_string())?;
    let show = Union::new(IntBoolShow::new(), StmtShow::new()).map_err(|e| e.to_string())?;
    let alg = Combine::new(eval, show);

    let pair = programs::program(&alg).map_err(|e| e.to_string())?;
    let value = pair.a.eval().map_err(|e| e.to_string())?;
    output::success(&format!("{} => {}", pair.b.show(), value));

    if verbose {
        for name in store.names() {
            if let Some(value) = store.get(&name) {
                output::info(&format!("{name} = {value}"));
            }
        }
    }

    // Expression and statement algebras over different capabilities
    // cannot be united.
    if let Err(e) = Union::new(IntBoolEval::new(), StmtShow::new()) {
        output::info(&format!("rejected: {e}"));
    }

    Ok(())
}
