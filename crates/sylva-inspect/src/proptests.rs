//! Property-based tests for the introspection core.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sylva_expr::{Expr, ScopeRef};

    use crate::attrs::{has_name_at, names, set_names};
    use crate::calls::{is_call_to, matches_call, matches_namespaced_call, QUALIFIERS};
    use crate::classify::symbol_equals;
    use crate::formula::{is_one_sided, lhs, make_one_sided, rhs, scope_of, FormulaError};

    // Strategy for generating symbol names
    fn ident() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,7}"
    }

    // Strategy for generating scope handles
    fn scope() -> impl Strategy<Value = ScopeRef> {
        any::<u32>().prop_map(ScopeRef::new)
    }

    // Strategy for generating leaf-ish expressions of every variant
    fn leaf() -> impl Strategy<Value = Expr> {
        prop_oneof![
            Just(Expr::Null),
            ident().prop_map(Expr::symbol),
            prop::collection::vec(prop::option::of(any::<bool>()), 0..4)
                .prop_map(|v| Expr::logical(v)),
            prop::collection::vec(any::<i64>(), 0..4)
                .prop_map(|v| Expr::integer(v.into_iter().map(Some))),
            prop::collection::vec(any::<f64>(), 0..4).prop_map(|v| Expr::real(v)),
            prop::collection::vec(ident(), 0..4).prop_map(|v| Expr::strings(v)),
        ]
    }

    // Strategy for picking one of the four qualification prefixes
    fn qualifier() -> impl Strategy<Value = &'static str> {
        prop::sample::select(&QUALIFIERS[..])
    }

    proptest! {
        // Formula engine

        #[test]
        fn one_sided_formula_round_trips(e in leaf(), sc in scope()) {
            let f = make_one_sided(e.clone(), sc);
            prop_assert!(is_one_sided(&f));
            prop_assert_eq!(rhs(&f), Ok(&e));
            prop_assert_eq!(lhs(&f), Ok(None));
            prop_assert_eq!(scope_of(&f), Ok(Some(sc)));
        }

        #[test]
        fn two_sided_formula_deconstructs(l in leaf(), r in leaf()) {
            let f = Expr::call(Expr::symbol("~"), [l.clone(), r.clone()]);
            prop_assert_eq!(lhs(&f), Ok(Some(&l)));
            prop_assert_eq!(rhs(&f), Ok(&r));
            prop_assert!(!is_one_sided(&f));
        }

        #[test]
        fn bad_arity_is_malformed(operands in prop::collection::vec(leaf(), 3..6)) {
            let found = operands.len();
            let f = Expr::call(Expr::symbol("~"), operands);
            prop_assert_eq!(rhs(&f), Err(FormulaError::Malformed { found }));
            prop_assert_eq!(lhs(&f), Err(FormulaError::Malformed { found }));
        }

        // Attribute helper

        #[test]
        fn names_round_trip_exactly(
            attached in prop::collection::vec(
                prop_oneof![Just(String::new()), ident()],
                0..6,
            ),
        ) {
            let mut list = Expr::list(attached.iter().map(|_| Expr::Null));
            set_names(&mut list, attached.clone());
            prop_assert_eq!(names(&list), Some(&attached[..]));

            for (i, name) in attached.iter().enumerate() {
                prop_assert_eq!(has_name_at(&list, i), !name.is_empty());
            }
            prop_assert!(!has_name_at(&list, attached.len()));
        }

        // Call matcher

        #[test]
        fn call_head_matching_is_exact(name in ident()) {
            let call = Expr::call(Expr::symbol(name.clone()), []);
            let other = format!("{name}_");
            prop_assert!(is_call_to(&call, &name));
            prop_assert!(!is_call_to(&call, &other));
        }

        #[test]
        fn non_calls_never_match(e in leaf()) {
            prop_assert!(!matches_call(&e, |_| true));
            prop_assert!(!matches_namespaced_call(&e, |_| true, "pkg"));
        }

        #[test]
        fn qualified_match_keys_off_right_hand_name(
            q in qualifier(),
            left in ident(),
            name in ident(),
        ) {
            let wanted = format!("{name}_q");
            let hit = Expr::call(
                Expr::call(Expr::symbol(q), [Expr::symbol(&left), Expr::symbol(&wanted)]),
                [],
            );
            let miss = Expr::call(
                Expr::call(Expr::symbol(q), [Expr::symbol(&wanted), Expr::symbol(&name)]),
                [],
            );

            let recognizer = |x: &Expr| symbol_equals(x, &wanted);
            prop_assert!(matches_call(&hit, recognizer));
            prop_assert!(!matches_call(&miss, recognizer));
        }

        #[test]
        fn namespaced_match_pins_the_namespace(name in ident(), ns in ident()) {
            let other_ns = format!("{ns}_q");
            let make = |namespace: &str| {
                Expr::call(
                    Expr::call(
                        Expr::symbol("::"),
                        [Expr::symbol(namespace), Expr::symbol(&name)],
                    ),
                    [],
                )
            };

            let recognizer = |x: &Expr| symbol_equals(x, &name);
            prop_assert!(matches_namespaced_call(&make(&ns), recognizer, &ns));
            prop_assert!(!matches_namespaced_call(&make(&other_ns), recognizer, &ns));
        }
    }
}
