//! Integration tests for ordering and placement through the public API.

use bumpalo::Bump;
use decl_emit::{
    emit_unit, DeclKind, DeclarationSet, EmitConfig, EmitError, SymbolId, SymbolTable,
    UnitEmitter,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn emit_to_strings(set: DeclarationSet) -> (String, String) {
    let mut header = Vec::new();
    let mut source = Vec::new();
    emit_unit(&set.seal(), &mut header, &mut source).expect("emission failed");
    (
        String::from_utf8(header).unwrap(),
        String::from_utf8(source).unwrap(),
    )
}

#[test]
fn test_type_then_inline_function_scenario() {
    init_logger();
    let arena = Bump::new();
    let symbols = SymbolTable::new(&arena);
    let config = EmitConfig::default();
    let t = symbols.intern("T");
    let f = symbols.intern("F");

    let mut set = DeclarationSet::new();
    // F is discovered first so the order has to come from the edge.
    {
        let func = set.declare(f, DeclKind::Function, true);
        func.observe(t, true);
        func.write_decl(b"int F(T t);\n");
        func.write_def(b"int F(T t) { return t.x; }\n");
        func.finish(3, &config);
    }
    {
        let ty = set.declare(t, DeclKind::Type, true);
        ty.write_decl(b"typedef struct { int x; } T;\n");
        ty.finish(0, &config);
    }

    let sealed = set.seal();
    let order: Vec<_> = sealed
        .emission_order()
        .unwrap()
        .iter()
        .map(|d| d.origin())
        .collect();
    assert_eq!(order, vec![t, f]);

    let mut header = Vec::new();
    let mut source = Vec::new();
    let stats = emit_unit(&sealed, &mut header, &mut source).unwrap();

    assert_eq!(
        String::from_utf8(header).unwrap(),
        "typedef struct { int x; } T;\n\
         static inline int F(T t);\n\
         static inline int F(T t) { return t.x; }\n"
    );
    assert!(source.is_empty());
    assert_eq!(stats.records, 2);
    assert_eq!(stats.inline_functions, 1);
    assert_eq!(stats.implementation_bytes, 0);
}

#[test]
fn test_function_definition_linkage() {
    init_logger();
    let arena = Bump::new();
    let symbols = SymbolTable::new(&arena);
    let config = EmitConfig::default();

    let mut set = DeclarationSet::new();
    for (name, exported) in [("public_fn", true), ("private_fn", false)] {
        let func = set.declare(symbols.intern(name), DeclKind::Function, exported);
        func.write_decl(format!("void {}(void);\n", name).as_bytes());
        func.write_def(format!("void {}(void) {{ }}\n", name).as_bytes());
        func.finish(40, &config);
    }

    let (header, source) = emit_to_strings(set);
    assert_eq!(header, "void public_fn(void);\n");
    assert_eq!(
        source,
        "static void private_fn(void);\n\
         void public_fn(void) { }\n\
         static void private_fn(void) { }\n"
    );
}

#[test]
fn test_private_variable_stays_out_of_header() {
    let arena = Bump::new();
    let symbols = SymbolTable::new(&arena);
    let mut set = DeclarationSet::new();

    let var = set.declare(symbols.intern("counter"), DeclKind::Variable, false);
    var.write_decl(b"int counter;\n");
    var.write_def(b"int counter = 0;\n");
    var.finish(0, &EmitConfig::default());

    let (header, source) = emit_to_strings(set);
    assert!(header.is_empty());
    assert_eq!(source, "static int counter = 0;\n");
}

#[test]
fn test_constant_has_no_definition_output() {
    let arena = Bump::new();
    let symbols = SymbolTable::new(&arena);
    let mut set = DeclarationSet::new();

    for (name, exported) in [("LIMIT", true), ("SCALE", false)] {
        let c = set.declare(symbols.intern(name), DeclKind::Constant, exported);
        c.write_decl(format!("#define {} 4\n", name).as_bytes());
        c.write_def(b"unused\n");
        c.finish(0, &EmitConfig::default());
    }

    let (header, source) = emit_to_strings(set);
    assert_eq!(header, "#define LIMIT 4\n");
    assert!(source.is_empty());
}

#[test]
fn test_order_respects_transitive_direct_edges() {
    let arena = Bump::new();
    let symbols = SymbolTable::new(&arena);
    let names = ["e", "d", "c", "b", "a"];
    let ids: Vec<_> = names.iter().map(|n| symbols.intern(n)).collect();

    // e -> d -> c -> b -> a, plus a shortcut e -> a and indirect a -> e.
    let mut set = DeclarationSet::new();
    for (i, id) in ids.iter().enumerate() {
        let rec = set.declare(*id, DeclKind::Type, true);
        if let Some(next) = ids.get(i + 1) {
            rec.observe(*next, true);
        }
    }
    if let Some(e) = set.get_mut(ids[0]) {
        e.observe(ids[4], true);
    }
    if let Some(a) = set.get_mut(ids[4]) {
        a.observe(ids[0], false);
    }

    let sealed = set.seal();
    let order = sealed.emission_order().unwrap();
    let position = |id: SymbolId| order.iter().position(|d| d.origin() == id).unwrap();

    for rec in sealed.records() {
        for target in rec.direct_uses().direct() {
            assert!(position(target) < position(rec.origin()));
        }
    }
    assert_eq!(order.len(), names.len());
}

#[test]
fn test_cycle_is_reported_not_emitted() {
    init_logger();
    let arena = Bump::new();
    let symbols = SymbolTable::new(&arena);
    let a = symbols.intern("A");
    let b = symbols.intern("B");

    let mut set = DeclarationSet::new();
    set.declare(a, DeclKind::Type, true).observe(b, true);
    set.declare(b, DeclKind::Type, true).observe(a, true);

    let mut header = Vec::new();
    let mut source = Vec::new();
    let err = emit_unit(&set.seal(), &mut header, &mut source).unwrap_err();
    match err {
        EmitError::CycleDetected { symbol } => assert!(symbol == a || symbol == b),
        other => panic!("expected a cycle, got {other}"),
    }
    assert!(header.is_empty());
    assert!(source.is_empty());
}

#[test]
fn test_self_reference_never_recorded() {
    let arena = Bump::new();
    let symbols = SymbolTable::new(&arena);
    let node = symbols.intern("Node");

    let mut set = DeclarationSet::new();
    let rec = set.declare(node, DeclKind::Type, true);
    rec.observe(node, true);
    rec.enter_body();
    rec.observe(node, true);
    assert!(!rec.direct_uses().contains(node));
    assert!(!rec.body_uses().contains(node));

    assert_eq!(set.seal().emission_order().unwrap().len(), 1);
}

#[test]
fn test_inits_follow_emission_order() {
    let arena = Bump::new();
    let symbols = SymbolTable::new(&arena);
    let config = EmitConfig::default();
    let table = symbols.intern("table");
    let size = symbols.intern("size");

    let mut set = DeclarationSet::new();
    {
        let rec = set.declare(table, DeclKind::Variable, true);
        rec.observe(size, true);
        rec.write_init(b"table = alloc(size);\n");
        rec.finish(0, &config);
    }
    {
        let rec = set.declare(size, DeclKind::Variable, true);
        rec.write_init(b"size = 16;\n");
        rec.finish(0, &config);
    }

    let sealed = set.seal();
    let order = sealed.emission_order().unwrap();
    let mut emitter = UnitEmitter::new(Vec::new(), Vec::new());
    emitter.emit(&order).unwrap();

    let mut init = Vec::new();
    emitter.write_inits(&order, &mut init).unwrap();
    assert_eq!(
        String::from_utf8(init).unwrap(),
        "size = 16;\ntable = alloc(size);\n"
    );
    assert_eq!(emitter.stats().initializers_written, 2);
}
