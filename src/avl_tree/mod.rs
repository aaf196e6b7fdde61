//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! Nodes are stored in a `TypedArena` and linked by handles instead of boxes, so every structural
//! edit is a handle reassignment and a removed node's slot is released explicitly.

mod map;
mod node;
mod tree;

pub use self::map::{AvlMap, AvlMapIntoIter, AvlMapIter};
