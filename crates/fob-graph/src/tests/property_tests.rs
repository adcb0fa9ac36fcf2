//! Property-based tests for fob-graph using proptest.
//!
//! These verify invariants of explanation sets, module ids and the block
//! traversal across randomly generated inputs.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::{
    ConstDependency, DependenciesBlock, Dependency, DependencyId, DependencyKind,
    ModuleGraphConnection, ModuleId, SourceRange,
};

fn explanation_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c]{1,2}", 0..=20)
}

/// Nested blocks with unique, increasing dependency ids assigned afterwards.
fn block_strategy() -> impl Strategy<Value = DependenciesBlock> {
    let leaf = (0usize..4).prop_map(|count| {
        let mut block = DependenciesBlock::new();
        for _ in 0..count {
            block.add_dependency(placeholder());
        }
        block
    });

    leaf.prop_recursive(3, 24, 4, |inner| {
        ((0usize..3), prop::collection::vec(inner, 0..4)).prop_map(|(count, children)| {
            let mut block = DependenciesBlock::new();
            for _ in 0..count {
                block.add_dependency(placeholder());
            }
            for child in children {
                block.add_block(child);
            }
            block
        })
    })
}

fn placeholder() -> Dependency {
    Dependency::new(
        DependencyId::new(0),
        DependencyKind::Const(ConstDependency::new("", SourceRange::new(0, 0))),
    )
}

/// Reference pre-order walk used to check the iterator.
fn walk(block: &DependenciesBlock, out: &mut Vec<u32>) {
    out.extend(block.dependencies.iter().map(|d| d.id.as_u32()));
    for child in &block.blocks {
        walk(child, out);
    }
}

fn number(block: &mut DependenciesBlock, next: &mut u32) {
    for dependency in &mut block.dependencies {
        dependency.id = DependencyId::new(*next);
        *next += 1;
    }
    for child in &mut block.blocks {
        number(child, next);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the explanation is the first occurrence of every distinct
    /// reason, in insertion order, joined by single spaces.
    #[test]
    fn prop_explanations_deduplicate_in_insertion_order(reasons in explanation_strategy()) {
        let mut connection = ModuleGraphConnection::new(
            None,
            None,
            ModuleId::new_virtual("target.js"),
            None,
        );
        for reason in &reasons {
            connection.add_explanation(reason.clone());
        }

        let mut seen = HashSet::new();
        let expected: Vec<&str> = reasons
            .iter()
            .filter(|reason| seen.insert(reason.as_str()))
            .map(String::as_str)
            .collect();

        prop_assert_eq!(connection.explanations().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(connection.explanation(), expected.join(" "));
    }

    /// Property: adding an explanation twice is the same as adding it once.
    #[test]
    fn prop_explanations_idempotent(reasons in explanation_strategy()) {
        let target = ModuleId::new_virtual("target.js");
        let mut once = ModuleGraphConnection::new(None, None, target.clone(), None);
        let mut twice = ModuleGraphConnection::new(None, None, target, None);

        for reason in &reasons {
            once.add_explanation(reason.clone());
            twice.add_explanation(reason.clone());
            twice.add_explanation(reason.clone());
        }

        prop_assert_eq!(once.explanation(), twice.explanation());
    }

    /// Property: ModuleId canonicalization idempotency
    /// canon(canon(x)) == canon(x)
    #[test]
    fn prop_module_id_canonicalization_idempotent(path in "[a-z0-9_./-]{1,50}") {
        if let Ok(id1) = ModuleId::new(&path) {
            let id2 = ModuleId::new(id1.as_str()).unwrap();
            prop_assert_eq!(id1, id2);
        }
    }

    /// Property: block iteration is a pre-order walk
    #[test]
    fn prop_block_iteration_is_pre_order(mut block in block_strategy()) {
        let mut next = 0;
        number(&mut block, &mut next);

        let mut expected = Vec::new();
        walk(&block, &mut expected);

        let actual: Vec<u32> = block.iter_dependencies().map(|d| d.id.as_u32()).collect();
        prop_assert_eq!(actual, expected);
    }
}
