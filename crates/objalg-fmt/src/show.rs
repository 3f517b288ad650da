//! The `Show` capability.

use objalg_algebra::{Capability, Witness};

/// Marker for the `Show` capability.
#[derive(Debug, Clone, Copy)]
pub struct Print;

impl Capability for Print {
    const NAME: &'static str = "Show";
    const METHOD: &'static str = "show";
    type Output = String;
}

/// A node that can be shown.
pub type ShowNode = Witness<Print>;

/// Render to text.
pub trait Show {
    fn show(&self) -> String;
}

impl Show for Witness<Print> {
    fn show(&self) -> String {
        self.invoke()
    }
}
