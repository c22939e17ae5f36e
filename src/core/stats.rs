//! Emission statistics.

use std::fmt;

/// Counters gathered while writing a unit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmitStats {
    /// Records in the emission order.
    pub records: usize,

    /// Declarations written to either stream.
    pub declarations_written: usize,

    /// Definitions written to either stream.
    pub definitions_written: usize,

    /// Initializers written.
    pub initializers_written: usize,

    /// Bytes written to the header stream, qualifiers included.
    pub header_bytes: usize,

    /// Bytes written to the implementation stream, qualifiers included.
    pub implementation_bytes: usize,

    /// Function records marked inline.
    pub inline_functions: usize,
}

impl fmt::Display for EmitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Emission Statistics:")?;
        writeln!(f, "  Records ordered: {}", self.records)?;
        writeln!(f, "  Declarations written: {}", self.declarations_written)?;
        writeln!(f, "  Definitions written: {}", self.definitions_written)?;
        writeln!(f, "  Initializers written: {}", self.initializers_written)?;
        writeln!(f, "  Inline functions: {}", self.inline_functions)?;
        writeln!(f, "  Header size: {} bytes", self.header_bytes)?;
        writeln!(f, "  Implementation size: {} bytes", self.implementation_bytes)?;
        Ok(())
    }
}
