use std::fmt;
use std::num::NonZeroU32;

use crate::base::Name;

/// Signal direction of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
    Inout,
}

impl Direction {
    /// The declaring keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Inout => "inout",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Net or variable kind declared on a port; `wire` when omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetKind {
    #[default]
    Wire,
    Reg,
    Logic,
}

impl NetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wire => "wire",
            Self::Reg => "reg",
            Self::Logic => "logic",
        }
    }
}

/// One port of a module interface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortDescriptor {
    name: Name,
    direction: Direction,
    net: NetKind,
    width: NonZeroU32,
}

impl PortDescriptor {
    pub fn new(
        name: impl Into<Name>,
        direction: Direction,
        net: NetKind,
        width: NonZeroU32,
    ) -> Self {
        Self {
            name: name.into(),
            direction,
            net,
            width,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn net(&self) -> NetKind {
        self.net
    }

    /// Bit width; always at least one
    pub fn width(&self) -> u32 {
        self.width.get()
    }
}

/// Renders the ANSI declaration, e.g. `input wire [7:0] data`
impl fmt::Display for PortDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.net.as_str())?;
        if self.width() > 1 {
            write!(f, " [{}:0]", self.width() - 1)?;
        }
        write!(f, " {}", self.name)
    }
}
