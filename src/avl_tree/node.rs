use crate::arena::{Handle, TypedArena};
use crate::avl_tree::tree;
use crate::entry::Entry;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub height: usize,
    pub left: tree::Tree,
    pub right: tree::Tree,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            height: 1,
            left: None,
            right: None,
        }
    }
}

/// Recomputes the height of the node at `handle` from the heights of its children.
pub fn update<T, U>(arena: &mut TypedArena<Node<T, U>>, handle: Handle) {
    let height = {
        let node = &arena[handle];
        cmp::max(tree::height(arena, node.left), tree::height(arena, node.right)) + 1
    };
    arena[handle].height = height;
}

/// Returns the height of the left subtree minus the height of the right subtree.
pub fn balance_factor<T, U>(arena: &TypedArena<Node<T, U>>, handle: Handle) -> i32 {
    let node = &arena[handle];
    (tree::height(arena, node.left) as i32) - (tree::height(arena, node.right) as i32)
}
