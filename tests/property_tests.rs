//! Property-based tests for surface rendering
//!
//! These tests use proptest to check ordering, determinism, and visibility rules across many randomly generated
//! packages, catching edge cases that hand-written tests might miss.

use apisurface::format_package;
use apisurface::model::{
    ChanDir, ConstKind, DeclKind, Declaration, Field, Method, Param, ResolvedPackage, ResolvedType, Signature,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn basic_strategy() -> impl Strategy<Value = ResolvedType> {
    prop_oneof![
        Just("int"),
        Just("string"),
        Just("bool"),
        Just("uint8"),
        Just("float64"),
    ]
    .prop_map(ResolvedType::basic)
}

fn leaf_strategy() -> impl Strategy<Value = ResolvedType> {
    prop_oneof![
        3 => basic_strategy(),
        1 => "[A-Z][a-z]{0,5}".prop_map(|n| ResolvedType::named(Some("p"), n)),
        1 => ("[a-z]{1,4}(/[a-z]{1,4})?", "[A-Z][a-z]{0,5}")
            .prop_map(|(pkg, n)| ResolvedType::named(Some(pkg.as_str()), n)),
    ]
}

/// Composite types built from leaves, up to three levels deep.
fn type_strategy() -> impl Strategy<Value = ResolvedType> {
    leaf_strategy().prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(ResolvedType::pointer),
            inner.clone().prop_map(ResolvedType::slice),
            (0u64..64, inner.clone()).prop_map(|(len, elem)| ResolvedType::array(len, elem)),
            (basic_strategy(), inner.clone()).prop_map(|(k, v)| ResolvedType::map(k, v)),
            (
                prop_oneof![Just(ChanDir::SendRecv), Just(ChanDir::SendOnly), Just(ChanDir::RecvOnly)],
                inner.clone()
            )
                .prop_map(|(dir, elem)| ResolvedType::chan(dir, elem)),
            (prop::collection::vec(inner.clone(), 0..3), prop::collection::vec(inner, 0..3))
                .prop_map(|(params, results)| ResolvedType::Signature(Signature::new(params, results))),
        ]
    })
}

fn const_kind_strategy() -> impl Strategy<Value = ConstKind> {
    prop_oneof![
        Just(ConstKind::Bool),
        Just(ConstKind::String),
        Just(ConstKind::Int),
        Just(ConstKind::Float),
        Just(ConstKind::Complex),
    ]
}

/// One declaration per index so names never collide; `exported` picks the capitalization.
fn decl_strategy(index: usize) -> impl Strategy<Value = Declaration> {
    let kinds = prop_oneof![
        const_kind_strategy().prop_map(|k| DeclKind::Const { kind: k }),
        basic_strategy().prop_map(|ty| DeclKind::Var { ty, field: false }),
        type_strategy().prop_map(|underlying| DeclKind::Type { underlying }),
        (prop::collection::vec(type_strategy(), 0..3), prop::collection::vec(type_strategy(), 0..3))
            .prop_map(|(params, results)| DeclKind::Func {
                signature: Signature::new(params, results),
                receiver: None,
            }),
    ];
    (any::<bool>(), kinds).prop_map(move |(exported, kind)| {
        let name = if exported { format!("D{index}") } else { format!("d{index}") };
        Declaration::new(name, kind)
    })
}

fn declarations_strategy() -> impl Strategy<Value = Vec<Declaration>> {
    (0usize..12).prop_flat_map(|n| (0..n).map(decl_strategy).collect::<Vec<_>>())
}

fn package_with(declarations: Vec<Declaration>) -> ResolvedPackage {
    let mut pkg = ResolvedPackage::new("p", "p");
    pkg.declarations = declarations;
    pkg
}

fn exported_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,6}"
}

fn member_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][a-z]{0,6}"
}

// =============================================================================
// Ordering and determinism
// =============================================================================

proptest! {
    /// Property: every line carries the package prefix and lines come out sorted bytewise
    #[test]
    fn lines_are_prefixed_and_sorted(decls in declarations_strategy()) {
        let doc = format_package(&package_with(decls)).expect("render failed");
        let lines: Vec<&str> = doc.lines().collect();
        for line in &lines {
            prop_assert!(line.starts_with("pkg p, "), "unexpected line {:?}", line);
        }
        for pair in lines.windows(2) {
            prop_assert!(pair[0].as_bytes() <= pair[1].as_bytes(), "{:?} sorts after {:?}", pair[0], pair[1]);
        }
        prop_assert!(doc.is_empty() || doc.ends_with('\n'));
    }

    /// Property: declaration order in the input never changes the output
    #[test]
    fn output_is_independent_of_declaration_order(
        (decls, shuffled) in declarations_strategy().prop_flat_map(|d| (Just(d.clone()), Just(d).prop_shuffle()))
    ) {
        let first = format_package(&package_with(decls)).expect("render failed");
        let second = format_package(&package_with(shuffled)).expect("render failed");
        prop_assert_eq!(first, second);
    }

    /// Property: rendering the same package twice yields identical text
    #[test]
    fn rendering_is_deterministic(decls in declarations_strategy()) {
        let pkg = package_with(decls);
        prop_assert_eq!(format_package(&pkg).expect("render failed"), format_package(&pkg).expect("render failed"));
    }

    /// Property: unexported top-level declarations never reach the document
    #[test]
    fn unexported_declarations_are_invisible(decls in declarations_strategy()) {
        let expected = decls.iter().filter(|d| d.is_exported()).count();
        let doc = format_package(&package_with(decls)).expect("render failed");
        // No struct or interface underlyings are generated here, so each surviving declaration is one line.
        prop_assert_eq!(doc.lines().count(), expected);
        prop_assert!(!doc.contains(", const d") && !doc.contains(", func d") && !doc.contains(", var d"));
    }
}

// =============================================================================
// Members and receivers
// =============================================================================

proptest! {
    /// Property: a struct emits one summary line plus one line per exported field
    #[test]
    fn struct_lines_match_exported_fields(
        name in exported_name_strategy(),
        fields in prop::collection::btree_map(member_name_strategy(), basic_strategy(), 0..8),
    ) {
        let fields: Vec<Field> = fields.into_iter().map(|(n, ty)| Field::new(n, ty)).collect();
        let exported = fields.iter().filter(|f| f.is_exported()).count();
        let pkg = ResolvedPackage::new("p", "p").with_declaration(Declaration::type_decl(
            name.clone(),
            ResolvedType::Struct { fields },
        ));
        let doc = format_package(&pkg).expect("render failed");
        prop_assert_eq!(doc.lines().count(), 1 + exported);
        let summary = format!("pkg p, type {} struct\n", name);
        prop_assert!(doc.starts_with(&summary));
    }

    /// Property: an interface emits one summary line plus one line per exported method, and the summary lists
    /// the exported method names in sorted order
    #[test]
    fn interface_lines_match_exported_methods(
        name in exported_name_strategy(),
        methods in prop::collection::btree_set(member_name_strategy(), 0..8),
    ) {
        let mut exported: Vec<String> = methods
            .iter()
            .filter(|m| m.chars().next().is_some_and(char::is_uppercase))
            .cloned()
            .collect();
        exported.sort();
        // Reverse the input order to show the summary does its own sorting.
        let methods: Vec<Method> = methods.into_iter().rev().map(|m| Method::new(m, Signature::default())).collect();
        let pkg = ResolvedPackage::new("p", "p").with_declaration(Declaration::type_decl(
            name.clone(),
            ResolvedType::Interface { methods },
        ));
        let doc = format_package(&pkg).expect("render failed");
        prop_assert_eq!(doc.lines().count(), 1 + exported.len());

        let summary = if exported.is_empty() {
            format!("pkg p, type {} interface {{}}", name)
        } else {
            format!("pkg p, type {} interface {{ {} }}", name, exported.join(", "))
        };
        prop_assert!(doc.lines().any(|l| l == summary), "missing {:?} in {:?}", summary, doc);
    }

    /// Property: methods on unexported receivers, through any number of pointers, are never rendered
    #[test]
    fn methods_on_unexported_receivers_are_hidden(
        recv in "[a-z][a-z]{0,5}",
        method in exported_name_strategy(),
        depth in 0usize..3,
    ) {
        let mut receiver = ResolvedType::named(Some("p"), recv.clone());
        for _ in 0..depth {
            receiver = ResolvedType::pointer(receiver);
        }
        let pkg = ResolvedPackage::new("p", "p")
            .with_declaration(Declaration::type_decl(recv, ResolvedType::Struct { fields: vec![] }))
            .with_declaration(Declaration::method(method, receiver, Signature::default()));
        prop_assert_eq!(format_package(&pkg).expect("render failed"), "");
    }

    /// Property: methods on interface receivers are never rendered as method lines
    #[test]
    fn methods_on_interface_receivers_are_hidden(
        iface in exported_name_strategy(),
        method in exported_name_strategy(),
    ) {
        let pkg = ResolvedPackage::new("p", "p")
            .with_declaration(Declaration::type_decl(
                iface.clone(),
                ResolvedType::Interface { methods: vec![Method::new(method.clone(), Signature::default())] },
            ))
            .with_declaration(Declaration::method(
                method,
                ResolvedType::named(Some("p"), iface),
                Signature::default(),
            ));
        let doc = format_package(&pkg).expect("render failed");
        prop_assert!(!doc.contains(", method "), "interface method leaked: {:?}", doc);
        prop_assert_eq!(doc.lines().count(), 2);
    }
}

// =============================================================================
// Signatures
// =============================================================================

proptest! {
    /// Property: a variadic final parameter renders as `...T`, never as a slice
    #[test]
    fn variadic_renders_element_type(
        leading in prop::collection::vec(basic_strategy(), 0..3),
        elem in basic_strategy(),
    ) {
        let elem_text = match &elem {
            ResolvedType::Basic { name } => name.clone(),
            _ => unreachable!(),
        };
        let mut params: Vec<Param> = leading.into_iter().map(Param::unnamed).collect();
        params.push(Param::named("rest", ResolvedType::slice(elem)));
        let sig = Signature { params, variadic: true, results: vec![] };
        let pkg = ResolvedPackage::new("p", "p").with_declaration(Declaration::func("F", sig));

        let doc = format_package(&pkg).expect("render failed");
        let tail = format!("...{})\n", elem_text);
        prop_assert!(doc.ends_with(&tail), "{:?} should end with {:?}", doc, tail);
        prop_assert!(!doc.contains("[]"));
        prop_assert!(!doc.contains("rest"));
    }

    /// Property: a single result is bare, more than one is parenthesized
    #[test]
    fn result_parenthesization_follows_arity(results in prop::collection::vec(basic_strategy(), 0..4)) {
        let count = results.len();
        let pkg = ResolvedPackage::new("p", "p")
            .with_declaration(Declaration::func("F", Signature::new(vec![], results)));
        let doc = format_package(&pkg).expect("render failed");
        match count {
            0 => prop_assert_eq!(doc, "pkg p, func F()\n"),
            1 => prop_assert!(!doc.trim_end().ends_with(')')),
            _ => prop_assert!(doc.starts_with("pkg p, func F() (") && doc.ends_with(")\n")),
        }
    }
}
