//! Interpretation interfaces.

/// A single-method interpretation interface, such as `Eval` or `Show`.
///
/// Having exactly one operation is a property of this trait's shape: a
/// capability names its operation and the operation's output, nothing
/// more. Implementors are zero-sized markers; the user-facing trait
/// (e.g. `Eval`) is then implemented for [`Witness`](crate::Witness) of
/// the marker.
pub trait Capability: 'static {
    /// Interface name, used in witness class names.
    const NAME: &'static str;

    /// Name of the single operation.
    const METHOD: &'static str;

    type Output;
}
