//! Port and parameter descriptors
//!
//! Immutable value records produced by the parser and consumed by the
//! content model and by downstream instantiation logic. A fresh set is built
//! on every parse; nothing here points back at the model that owns it.

mod parameter;
mod port;

pub use parameter::{ParameterDescriptor, ParameterStyle};
pub use port::{Direction, NetKind, PortDescriptor};

use crate::base::{Name, TextRange};

/// Everything the parser extracts from one module declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInterface {
    pub name: Name,
    /// Where the module name appears in the parsed text
    pub name_range: TextRange,
    /// Ports in declaration order
    pub ports: Vec<PortDescriptor>,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterDescriptor>,
}

impl ModuleInterface {
    /// Ports with the given direction, in declaration order
    pub fn ports_with(&self, direction: Direction) -> impl Iterator<Item = &PortDescriptor> {
        self.ports.iter().filter(move |p| p.direction() == direction)
    }
}
