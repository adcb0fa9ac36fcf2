use serde::{Deserialize, Serialize};

use crate::dependency::Dependency;

/// A node of a module's dependency tree.
///
/// A module's root block holds its top-level dependencies; nested blocks
/// group dependencies behind a boundary such as a dynamic import.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DependenciesBlock {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub blocks: Vec<DependenciesBlock>,
}

impl DependenciesBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    pub fn add_block(&mut self, block: DependenciesBlock) {
        self.blocks.push(block);
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.add_dependency(dependency);
        self
    }

    pub fn with_block(mut self, block: DependenciesBlock) -> Self {
        self.add_block(block);
        self
    }

    /// True when neither this block nor any nested block holds a dependency.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.blocks.iter().all(DependenciesBlock::is_empty)
    }

    /// Iterate dependencies pre-order: this block's dependencies in
    /// declaration order, then each child block recursively.
    pub fn iter_dependencies(&self) -> DependencyIter<'_> {
        DependencyIter {
            stack: vec![Frame::new(self)],
        }
    }
}

struct Frame<'a> {
    block: &'a DependenciesBlock,
    next_dependency: usize,
    next_block: usize,
}

impl<'a> Frame<'a> {
    fn new(block: &'a DependenciesBlock) -> Self {
        Self {
            block,
            next_dependency: 0,
            next_block: 0,
        }
    }
}

/// Pre-order iterator over a block tree, see [`DependenciesBlock::iter_dependencies`].
pub struct DependencyIter<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Iterator for DependencyIter<'a> {
    type Item = &'a Dependency;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let block = frame.block;

            if let Some(dependency) = block.dependencies.get(frame.next_dependency) {
                frame.next_dependency += 1;
                return Some(dependency);
            }

            if let Some(child) = block.blocks.get(frame.next_block) {
                frame.next_block += 1;
                self.stack.push(Frame::new(child));
                continue;
            }

            self.stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::{ConstDependency, DependencyId, DependencyKind};
    use crate::span::SourceRange;

    fn constant(id: u32) -> Dependency {
        Dependency::new(
            DependencyId::new(id),
            DependencyKind::Const(ConstDependency::new("", SourceRange::new(id, id))),
        )
    }

    #[test]
    fn iterates_dependencies_before_children() {
        let tree = DependenciesBlock::new()
            .with_dependency(constant(1))
            .with_block(
                DependenciesBlock::new()
                    .with_dependency(constant(3))
                    .with_block(DependenciesBlock::new().with_dependency(constant(4))),
            )
            .with_dependency(constant(2))
            .with_block(DependenciesBlock::new().with_dependency(constant(5)));

        let order: Vec<u32> = tree.iter_dependencies().map(|d| d.id.as_u32()).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn nested_empty_blocks_are_empty() {
        let tree = DependenciesBlock::new().with_block(DependenciesBlock::new());
        assert!(tree.is_empty());
        assert_eq!(tree.iter_dependencies().count(), 0);
    }
}
