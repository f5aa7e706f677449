//! Tree node definition

/// A single BST node owning at most two children
///
/// Every key under `left` is strictly less than `key`, every key under
/// `right` strictly greater.
#[derive(Debug)]
pub struct TreeNode<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Option<Box<TreeNode<K, V>>>,
    pub(super) right: Option<Box<TreeNode<K, V>>>,
}

impl<K, V> TreeNode<K, V> {
    pub(super) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Left child (smaller keys)
    pub fn left(&self) -> Option<&TreeNode<K, V>> {
        self.left.as_deref()
    }

    /// Right child (larger keys)
    pub fn right(&self) -> Option<&TreeNode<K, V>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
