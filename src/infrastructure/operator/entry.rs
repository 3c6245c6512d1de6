//! Concrete operator entrypoint type for inbound adapters.

/// Operator implementation backed by configuration and the Sapphire adapters.
///
/// Stateless: every use case receives the raw configuration and wires what
/// it needs from it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
