use std::collections::HashMap;

use cellgen_core::lang::operators::{self, Fixity, OperatorId};
use cellgen_core::qualified_id;

#[test]
fn operator_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert!(!info.spellings.is_empty(), "operator {:?} has no spelling", info.id);
        assert_eq!(
            operators::as_str(info.id),
            info.spellings[0],
            "operator as_str mismatch for {:?}",
            info.id
        );

        for &spelling in info.spellings {
            assert_eq!(
                operators::from_str(spelling),
                Some(info.id),
                "operator spelling not resolvable: {}",
                spelling
            );
            if let Some(prev) = seen.insert(spelling, info.id) {
                panic!("duplicate operator spelling {:?}: {:?} and {:?}", spelling, prev, info.id);
            }
        }
    }
}

#[test]
fn operator_ids_have_exactly_one_registry_entry() {
    let mut counts: HashMap<OperatorId, usize> = HashMap::new();
    for info in operators::OPERATORS {
        *counts.entry(info.id).or_default() += 1;
    }
    for (id, count) in counts {
        assert_eq!(count, 1, "operator {:?} registered {} times", id, count);
    }
}

#[test]
fn java_spellings_are_injective_over_operator_ids() {
    let mut seen: HashMap<&'static str, OperatorId> = HashMap::new();
    for info in operators::OPERATORS {
        if let Some(prev) = seen.insert(info.java, info.id) {
            panic!("java spelling {:?} shared by {:?} and {:?}", info.java, prev, info.id);
        }
    }
}

#[test]
fn every_dsl_spelling_maps_to_the_documented_java_spelling() {
    let expected = [
        ("and", "&&"),
        ("&", "&&"),
        ("or", "||"),
        ("|", "||"),
        ("eq", "=="),
        ("==", "=="),
        ("neq", "!="),
        ("!=", "!="),
        ("gt", ">"),
        (">", ">"),
        ("gte", ">="),
        (">=", ">="),
        ("lt", "<"),
        ("<", "<"),
        ("lte", "<="),
        ("<=", "<="),
        ("not", "!"),
        ("!", "!"),
        ("-", "-"),
    ];
    let total: usize = operators::OPERATORS.iter().map(|o| o.spellings.len()).sum();
    assert_eq!(total, expected.len(), "registry and expectation table drifted apart");

    for (dsl, java) in expected {
        let id = operators::from_str(dsl).unwrap_or_else(|| panic!("missing DSL spelling {dsl}"));
        assert_eq!(operators::java_spelling(id), java, "java spelling for {dsl}");
    }
}

#[test]
fn prefix_operators_are_exactly_not_and_negate() {
    let prefix: Vec<OperatorId> = operators::OPERATORS
        .iter()
        .filter(|o| o.fixity == Fixity::Prefix)
        .map(|o| o.id)
        .collect();
    assert_eq!(prefix, vec![OperatorId::Not, OperatorId::Negate]);
}

#[test]
fn qualified_id_parts_recompose() {
    for id in ["Robot1.moveTo", "lib.robot.Robot1.moveTo", "a=sqmain.Sq__1"] {
        let q = qualified_id::qualifier(id).unwrap_or_default();
        let rest = qualified_id::unqualified(id);
        assert_eq!(
            format!("{q}.{rest}"),
            qualified_id::unwrap_alias(id),
            "qualifier/unqualified split does not recompose for {id}"
        );
        assert!(rest.ends_with(qualified_id::simple_name(id)));
    }
}
