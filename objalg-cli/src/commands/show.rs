//! The `objalg show` command.

use objalg_fmt::{IntBoolShow, Show};

use crate::{output, programs};

pub fn run(_verbose: bool) -> Result<(), String> {
    output::header("show");
    let alg = IntBoolShow::new();

    output::success(&programs::sum(&alg).show());

    let choice = programs::choice(&alg).map_err(|e| e.to_string())?;
    output::success(&choice.show());

    Ok(())
}
