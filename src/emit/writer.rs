// This module performs the writes of the emission phase. UnitEmitter owns the header and
// implementation streams for the duration of the pass and walks the emission order twice:
// first every declaration, then every definition, so that each definition can rely on all
// forward declarations having been written wherever C requires declare-before-use. For each
// fragment it asks the placement policy for a stream and qualifier, skips empty buffers and
// "emit nothing" placements, and writes qualifier then text. The first I/O error aborts the
// remaining writes and is returned as EmitError::Io. A separate pass writes initializer
// fragments, in the same order, to a stream of the caller's choosing. Byte and fragment
// counters are accumulated into EmitStats.

//! Writing the header and implementation streams.

use super::placement::{declaration_placement, definition_placement, Placement, Stream};
use crate::core::error::EmitResult;
use crate::core::stats::EmitStats;
use crate::decl::{Declaration, SealedSet};
use std::io::Write;

/// Writes ordered records to a header and an implementation stream.
pub struct UnitEmitter<H: Write, S: Write> {
    header: H,
    source: S,
    stats: EmitStats,
}

impl<H: Write, S: Write> UnitEmitter<H, S> {
    pub fn new(header: H, source: S) -> Self {
        Self {
            header,
            source,
            stats: EmitStats::default(),
        }
    }

    /// Write both passes: all declarations, then all definitions.
    pub fn emit(&mut self, order: &[&Declaration]) -> EmitResult<()> {
        self.stats.records = order.len();
        self.stats.inline_functions = order.iter().filter(|d| d.is_inline()).count();
        self.write_declarations(order)?;
        self.write_definitions(order)?;
        self.flush()
    }

    /// Declaration pass.
    pub fn write_declarations(&mut self, order: &[&Declaration]) -> EmitResult<()> {
        for decl in order {
            if decl.decl_text().is_empty() {
                continue;
            }
            if let Some(placement) = declaration_placement(decl) {
                log::trace!("declare {} -> {:?}", decl.origin(), placement);
                self.write_fragment(placement, decl.decl_text())?;
                self.stats.declarations_written += 1;
            }
        }
        Ok(())
    }

    /// Definition pass.
    pub fn write_definitions(&mut self, order: &[&Declaration]) -> EmitResult<()> {
        for decl in order {
            if decl.def_text().is_empty() {
                continue;
            }
            if let Some(placement) = definition_placement(decl) {
                log::trace!("define {} -> {:?}", decl.origin(), placement);
                self.write_fragment(placement, decl.def_text())?;
                self.stats.definitions_written += 1;
            }
        }
        Ok(())
    }

    /// Write every non-empty initializer, in order, to `out`.
    pub fn write_inits<W: Write>(&mut self, order: &[&Declaration], out: &mut W) -> EmitResult<()> {
        for decl in order {
            if decl.init_text().is_empty() {
                continue;
            }
            out.write_all(decl.init_text())?;
            self.stats.initializers_written += 1;
        }
        out.flush()?;
        Ok(())
    }

    fn write_fragment(&mut self, placement: Placement, text: &[u8]) -> EmitResult<()> {
        let qualifier = placement.qualifier.as_str().as_bytes();
        let (out, written): (&mut dyn Write, &mut usize) = match placement.stream {
            Stream::Header => (&mut self.header as &mut dyn Write, &mut self.stats.header_bytes),
            Stream::Implementation => (
                &mut self.source as &mut dyn Write,
                &mut self.stats.implementation_bytes,
            ),
        };
        out.write_all(qualifier)?;
        out.write_all(text)?;
        *written += qualifier.len() + text.len();
        Ok(())
    }

    pub fn flush(&mut self) -> EmitResult<()> {
        self.header.flush()?;
        self.source.flush()?;
        Ok(())
    }

    pub fn stats(&self) -> &EmitStats {
        &self.stats
    }

    /// Give back the two streams.
    pub fn into_inner(self) -> (H, S) {
        (self.header, self.source)
    }
}

/// Order a sealed set and write both passes to `header` and `source`.
pub fn emit_unit<H: Write, S: Write>(set: &SealedSet, header: H, source: S) -> EmitResult<EmitStats> {
    let order = set.emission_order()?;
    let mut emitter = UnitEmitter::new(header, source);
    emitter.emit(&order)?;
    log::debug!(
        "unit written: {} header bytes, {} implementation bytes",
        emitter.stats().header_bytes,
        emitter.stats().implementation_bytes
    );
    Ok(emitter.stats().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EmitConfig;
    use crate::core::error::EmitError;
    use crate::core::symbol::SymbolId;
    use crate::decl::{DeclKind, DeclarationSet};
    use std::io;

    /// Writer that fails after accepting `budget` bytes.
    struct FailingWriter {
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn emit(set: DeclarationSet) -> (String, String) {
        let sealed = set.seal();
        let order = sealed.emission_order().unwrap();
        let mut emitter = UnitEmitter::new(Vec::new(), Vec::new());
        emitter.emit(&order).unwrap();
        let (h, c) = emitter.into_inner();
        (String::from_utf8(h).unwrap(), String::from_utf8(c).unwrap())
    }

    #[test]
    fn test_declarations_precede_definitions() {
        let config = EmitConfig::default();
        let mut set = DeclarationSet::new();
        for (n, name) in [(0, "a"), (1, "b")] {
            let f = set.declare(SymbolId::new(n), DeclKind::Function, false);
            f.write_decl(format!("void {}(void);\n", name).as_bytes());
            f.write_def(format!("void {}(void) {{ }}\n", name).as_bytes());
            f.finish(20, &config);
        }

        let (header, source) = emit(set);
        assert_eq!(header, "");
        assert_eq!(
            source,
            "static void a(void);\nstatic void b(void);\nstatic void a(void) { }\nstatic void b(void) { }\n"
        );
    }

    #[test]
    fn test_private_variable_never_reaches_header() {
        let mut set = DeclarationSet::new();
        let v = set.declare(SymbolId::new(0), DeclKind::Variable, false);
        v.write_decl(b"int counter;\n");
        v.write_def(b"int counter;\n");

        let (header, source) = emit(set);
        assert!(header.is_empty());
        assert_eq!(source, "static int counter;\n");
    }

    #[test]
    fn test_exported_variable() {
        let mut set = DeclarationSet::new();
        let v = set.declare(SymbolId::new(0), DeclKind::Variable, true);
        v.write_decl(b"int ticks;\n");
        v.write_def(b"int ticks;\n");

        let (header, source) = emit(set);
        assert_eq!(header, "extern int ticks;\n");
        assert_eq!(source, "int ticks;\n");
    }

    #[test]
    fn test_empty_buffers_write_nothing() {
        let mut set = DeclarationSet::new();
        set.declare(SymbolId::new(0), DeclKind::Function, true);
        set.declare(SymbolId::new(1), DeclKind::Type, true);

        let (header, source) = emit(set);
        assert!(header.is_empty());
        assert!(source.is_empty());
    }

    #[test]
    fn test_write_failure_aborts() {
        let mut set = DeclarationSet::new();
        for n in 0..3 {
            let t = set.declare(SymbolId::new(n), DeclKind::Type, true);
            t.write_decl(b"typedef int T;\n");
        }
        let sealed = set.seal();
        let order = sealed.emission_order().unwrap();

        let mut emitter = UnitEmitter::new(FailingWriter { budget: 20 }, Vec::new());
        let err = emitter.emit(&order).unwrap_err();
        assert!(matches!(err, EmitError::Io(_)));
        assert_eq!(emitter.stats().declarations_written, 1);
    }

    #[test]
    fn test_inits_follow_emission_order() {
        let mut set = DeclarationSet::new();
        {
            let a = set.declare(SymbolId::new(0), DeclKind::Variable, true);
            a.observe(SymbolId::new(1), true);
            a.write_init(b"a = b + 1;\n");
        }
        set.declare(SymbolId::new(1), DeclKind::Variable, true)
            .write_init(b"b = 1;\n");
        set.declare(SymbolId::new(2), DeclKind::Constant, true);

        let sealed = set.seal();
        let order = sealed.emission_order().unwrap();
        let mut emitter = UnitEmitter::new(Vec::new(), Vec::new());
        let mut inits = Vec::new();
        emitter.write_inits(&order, &mut inits).unwrap();

        assert_eq!(inits, b"b = 1;\na = b + 1;\n");
        assert_eq!(emitter.stats().initializers_written, 2);
    }

    #[test]
    fn test_emit_unit_reports_cycle() {
        let mut set = DeclarationSet::new();
        set.declare(SymbolId::new(0), DeclKind::Type, true)
            .observe(SymbolId::new(1), true);
        set.declare(SymbolId::new(1), DeclKind::Type, true)
            .observe(SymbolId::new(0), true);

        let err = emit_unit(&set.seal(), Vec::new(), Vec::new()).unwrap_err();
        assert!(err.cycle_symbol().is_some());
    }

    #[test]
    fn test_stats_count_bytes() {
        let mut set = DeclarationSet::new();
        let f = set.declare(SymbolId::new(0), DeclKind::Function, true);
        f.write_decl(b"int f(void);\n");
        f.write_def(b"int f(void) { return 0; }\n");
        f.finish(1, &EmitConfig::default());

        let stats = emit_unit(&set.seal(), Vec::new(), Vec::new()).unwrap();
        assert_eq!(stats.records, 1);
        assert_eq!(stats.inline_functions, 1);
        assert_eq!(stats.declarations_written, 1);
        assert_eq!(stats.definitions_written, 1);
        assert_eq!(
            stats.header_bytes,
            2 * "static inline ".len() + "int f(void);\n".len() + "int f(void) { return 0; }\n".len()
        );
        assert_eq!(stats.implementation_bytes, 0);
    }
}
