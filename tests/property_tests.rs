//! Property-based tests for the generator
//!
//! These tests use proptest to verify scanner and emitter invariants across
//! many randomly generated inputs, catching edge cases that hand-written
//! tests might miss.

use proptest::prelude::*;
use stressgen::{ClassDeclaration, ROOT_CLASS, generate, scan};

// Strategy for generating valid C++ class identifiers that are not the root
fn ident_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,15}".prop_filter("Not the root class", |s| s != ROOT_CLASS)
}

// Strategy for a well-formed declaration line in either supported layout
fn declaration_line_strategy() -> impl Strategy<Value = (String, String)> {
    (ident_strategy(), any::<bool>()).prop_map(|(name, attached_colon)| {
        let line = if attached_colon {
            format!("class {name}: public {ROOT_CLASS} {{")
        } else {
            format!("class {name} : public {ROOT_CLASS} {{")
        };
        (name, line)
    })
}

proptest! {
    /// Property: every well-formed declaration line yields exactly one
    /// declaration carrying that name.
    #[test]
    fn well_formed_lines_yield_one_declaration(
        (name, line) in declaration_line_strategy()
    ) {
        let decls: Vec<ClassDeclaration> = scan(&line).collect();
        prop_assert_eq!(decls.len(), 1);
        prop_assert_eq!(&decls[0].name, &name);
        prop_assert_eq!(&decls[0].base, ROOT_CLASS);
    }

    /// Property: scanner output preserves first-appearance order.
    #[test]
    fn scan_preserves_input_order(
        lines in prop::collection::vec(declaration_line_strategy(), 0..8)
    ) {
        let header: String = lines
            .iter()
            .map(|(_, line)| format!("{line}\n"))
            .collect();
        let expected: Vec<String> = lines.iter().map(|(name, _)| name.clone()).collect();

        let scanned: Vec<String> = scan(&header).map(|d| d.name).collect();
        prop_assert_eq!(scanned, expected);
    }

    /// Property: a non-root base never yields a declaration, whatever the
    /// derived name.
    #[test]
    fn non_root_bases_are_excluded(
        name in ident_strategy(),
        base in ident_strategy()
    ) {
        let line = format!("class {name} : public {base} {{");
        prop_assert_eq!(scan(&line).count(), 0);
    }

    /// Property: scan + emit is deterministic: identical input text produces
    /// byte-for-byte identical output.
    #[test]
    fn generation_is_deterministic(
        lines in prop::collection::vec(declaration_line_strategy(), 0..8)
    ) {
        let header: String = lines
            .iter()
            .map(|(_, line)| format!("{line}\n"))
            .collect();

        let first = generate(&scan(&header).collect::<Vec<_>>());
        let second = generate(&scan(&header).collect::<Vec<_>>());
        prop_assert_eq!(first, second);
    }

    /// Property: the fragment has exactly three case labels per discovered
    /// class, each with one if/else invocation pair.
    #[test]
    fn case_counts_match_declaration_counts(
        lines in prop::collection::vec(declaration_line_strategy(), 0..8)
    ) {
        let header: String = lines
            .iter()
            .map(|(_, line)| format!("{line}\n"))
            .collect();
        let decls: Vec<ClassDeclaration> = scan(&header).collect();
        let n = decls.len();

        let fragment = generate(&decls);
        prop_assert_eq!(fragment.matches("case(PairPotential::").count(), 3 * n);
        prop_assert_eq!(fragment.matches("if(test_LESB)").count(), 3 * n);
        prop_assert_eq!(fragment.matches("mol_stress_tensor<").count(), 6 * n);
    }
}
