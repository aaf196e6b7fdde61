use crate::arena::{Handle, TypedArena};
use crate::avl_tree::node::{self, Node};
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// A possibly empty subtree, referred to by the handle of its root.
pub type Tree = Option<Handle>;

pub type Arena<T, U> = TypedArena<Node<T, U>>;

pub fn height<T, U>(arena: &Arena<T, U>, tree: Tree) -> usize {
    match tree {
        None => 0,
        Some(handle) => arena[handle].height,
    }
}

fn rotate_left<T, U>(arena: &mut Arena<T, U>, handle: Handle) -> Handle {
    let child = match arena[handle].right {
        Some(child) => child,
        None => unreachable!(),
    };
    let inner = arena[child].left.take();
    arena[handle].right = inner;
    node::update(arena, handle);
    arena[child].left = Some(handle);
    node::update(arena, child);
    child
}

fn rotate_right<T, U>(arena: &mut Arena<T, U>, handle: Handle) -> Handle {
    let child = match arena[handle].left {
        Some(child) => child,
        None => unreachable!(),
    };
    let inner = arena[child].right.take();
    arena[handle].left = inner;
    node::update(arena, handle);
    arena[child].right = Some(handle);
    node::update(arena, child);
    child
}

// Returns the handle of the subtree root after rebalancing, which may differ from `handle`.
fn balance<T, U>(arena: &mut Arena<T, U>, handle: Handle) -> Handle {
    node::update(arena, handle);

    let factor = node::balance_factor(arena, handle);
    if factor > 1 {
        if let Some(child) = arena[handle].left {
            if node::balance_factor(arena, child) < 0 {
                let rotated = rotate_left(arena, child);
                arena[handle].left = Some(rotated);
            }
        }
        rotate_right(arena, handle)
    } else if factor < -1 {
        if let Some(child) = arena[handle].right {
            if node::balance_factor(arena, child) > 0 {
                let rotated = rotate_right(arena, child);
                arena[handle].right = Some(rotated);
            }
        }
        rotate_left(arena, handle)
    } else {
        handle
    }
}

// Detaches the minimum node of the subtree rooted at `handle` without freeing it. Returns the new
// subtree root and the detached node.
fn remove_min<T, U>(arena: &mut Arena<T, U>, handle: Handle) -> (Tree, Handle) {
    match arena[handle].left {
        Some(left) => {
            let (new_left, min) = remove_min(arena, left);
            arena[handle].left = new_left;
            (Some(balance(arena, handle)), min)
        },
        None => {
            let right = arena[handle].right.take();
            (right, handle)
        },
    }
}

/// Inserts a key-value pair into `tree` and returns the new root together with the value that was
/// replaced, if any. Replacing a value leaves the shape of the tree untouched.
pub fn insert<T, U>(arena: &mut Arena<T, U>, tree: Tree, key: T, value: U) -> (Handle, Option<U>)
where
    T: Ord,
{
    let handle = match tree {
        Some(handle) => handle,
        None => return (arena.allocate(Node::new(key, value)), None),
    };

    let ret = match key.cmp(&arena[handle].entry.key) {
        Ordering::Less => {
            let left = arena[handle].left;
            let (child, ret) = insert(arena, left, key, value);
            arena[handle].left = Some(child);
            ret
        },
        Ordering::Greater => {
            let right = arena[handle].right;
            let (child, ret) = insert(arena, right, key, value);
            arena[handle].right = Some(child);
            ret
        },
        Ordering::Equal => {
            let old_value = mem::replace(&mut arena[handle].entry.value, value);
            return (handle, Some(old_value));
        },
    };

    match ret {
        None => (balance(arena, handle), None),
        ret => (handle, ret),
    }
}

/// Removes `key` from `tree` and returns the new root together with the removed entry, if any.
/// The tree is left untouched if `key` is absent.
pub fn remove<T, U, V>(arena: &mut Arena<T, U>, tree: Tree, key: &V) -> (Tree, Option<Entry<T, U>>)
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let handle = match tree {
        Some(handle) => handle,
        None => return (None, None),
    };

    let ret = match key.cmp(arena[handle].entry.key.borrow()) {
        Ordering::Less => {
            let left = arena[handle].left;
            let (child, ret) = remove(arena, left, key);
            arena[handle].left = child;
            ret
        },
        Ordering::Greater => {
            let right = arena[handle].right;
            let (child, ret) = remove(arena, right, key);
            arena[handle].right = child;
            ret
        },
        Ordering::Equal => match (arena[handle].left, arena[handle].right) {
            (None, child) | (child, None) => {
                let Node { entry, .. } = arena.free(&handle);
                return (child, Some(entry));
            },
            (Some(_), Some(right)) => {
                // The successor is unlinked first, then its entry replaces the target's entry and
                // its slot is released.
                let (new_right, successor) = remove_min(arena, right);
                arena[handle].right = new_right;
                let Node { entry, .. } = arena.free(&successor);
                Some(mem::replace(&mut arena[handle].entry, entry))
            },
        },
    };

    match ret {
        None => (Some(handle), None),
        ret => (Some(balance(arena, handle)), ret),
    }
}

fn find<T, U, V>(arena: &Arena<T, U>, tree: Tree, key: &V) -> Option<Handle>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.and_then(|handle| {
        let node = &arena[handle];
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => find(arena, node.left, key),
            Ordering::Greater => find(arena, node.right, key),
            Ordering::Equal => Some(handle),
        }
    })
}

pub fn get<'a, T, U, V>(arena: &'a Arena<T, U>, tree: Tree, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match find(arena, tree, key) {
        Some(handle) => Some(&arena[handle].entry),
        None => None,
    }
}

pub fn get_mut<'a, T, U, V>(
    arena: &'a mut Arena<T, U>,
    tree: Tree,
    key: &V,
) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match find(arena, tree, key) {
        Some(handle) => arena.get_mut(&handle).map(|node| &mut node.entry),
        None => None,
    }
}

/// Panics unless `tree` is ordered, balanced, has correct stored heights, and accounts for every
/// live node in `arena`. Returns the height of `tree`.
#[cfg(test)]
pub fn check<T, U>(arena: &Arena<T, U>, tree: Tree) -> usize
where
    T: Ord,
{
    fn check_subtree<'a, T, U>(
        arena: &'a Arena<T, U>,
        tree: Tree,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
        count: &mut usize,
    ) -> usize
    where
        T: Ord,
    {
        let handle = match tree {
            Some(handle) => handle,
            None => return 0,
        };
        let node = &arena[handle];
        *count += 1;

        if let Some(lower) = lower {
            assert!(*lower < node.entry.key, "Error: left subtree key out of order.");
        }
        if let Some(upper) = upper {
            assert!(node.entry.key < *upper, "Error: right subtree key out of order.");
        }

        let left_height = check_subtree(arena, node.left, lower, Some(&node.entry.key), count);
        let right_height = check_subtree(arena, node.right, Some(&node.entry.key), upper, count);

        assert!(
            (left_height as i32 - right_height as i32).abs() <= 1,
            "Error: node is unbalanced.",
        );
        assert_eq!(node.height, left_height.max(right_height) + 1);
        node.height
    }

    let mut count = 0;
    let height = check_subtree(arena, tree, None, None, &mut count);
    assert_eq!(count, arena.len());
    height
}
