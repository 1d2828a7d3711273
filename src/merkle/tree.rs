use std::fmt;

use super::{MerkleError, MerkleNode};

/// Binary hash tree over an ordered list of string values. Built once at
/// construction and immutable afterwards; the root value commits to every
/// leaf beneath it.
#[derive(Debug)]
pub struct MerkleTree {
    root: MerkleNode,
}

impl MerkleTree {
    /// Build a tree from leaf values, in input order. An odd leaf count is
    /// padded by duplicating the last leaf before pairing, so that trees
    /// over lists differing in trailing content never collide at the
    /// padding step.
    pub fn build<S: AsRef<str>>(values: &[S]) -> Result<Self, MerkleError> {
        if values.is_empty() {
            return Err(MerkleError::EmptyValues);
        }

        let mut leaves: Vec<MerkleNode> = values
            .iter()
            .map(|v| MerkleNode::leaf(v.as_ref()))
            .collect();
        if leaves.len() % 2 == 1 {
            let last = leaves
                .last()
                .cloned()
                .expect("non-empty list has a last leaf");
            leaves.push(last);
        }

        Ok(Self {
            root: pair_up(leaves),
        })
    }

    /// The digest at the top of the tree, committing to all leaves.
    pub fn root_hash(&self) -> &str {
        &self.root.value
    }

    pub fn root(&self) -> &MerkleNode {
        &self.root
    }
}

/// Reduce a run of nodes to a single subtree: a pair combines directly,
/// longer runs split at the midpoint and each half recurses. A run of one
/// passes through unchanged, so any leaf count terminates.
fn pair_up(mut nodes: Vec<MerkleNode>) -> MerkleNode {
    match nodes.len() {
        1 => nodes.remove(0),
        2 => {
            let right = nodes.pop().expect("two nodes in run");
            let left = nodes.pop().expect("two nodes in run");
            MerkleNode::parent(left, right)
        }
        len => {
            let right = nodes.split_off(len / 2);
            MerkleNode::parent(pair_up(nodes), pair_up(right))
        }
    }
}

/// Pre-order rendering, parent before children, one extra indent level per
/// depth. Debugging aid only.
impl fmt::Display for MerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn render(f: &mut fmt::Formatter<'_>, node: &MerkleNode, offset: &str) -> fmt::Result {
            writeln!(f, "{offset}{}", node.value)?;
            let child_offset = format!("{offset}    |");
            if let Some(left) = &node.left {
                render(f, left, &child_offset)?;
            }
            if let Some(right) = &node.right {
                render(f, right, &child_offset)?;
            }
            Ok(())
        }
        render(f, &self.root, "|")
    }
}
