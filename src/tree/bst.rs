//! BinaryTree implementation

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::TreeNode;

/// Unbalanced binary search tree
#[derive(Debug)]
pub struct BinaryTree<K, V> {
    root: Option<Box<TreeNode<K, V>>>,

    /// Number of nodes (distinct keys inserted)
    len: usize,
}

impl<K, V> BinaryTree<K, V> {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn root(&self) -> Option<&TreeNode<K, V>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&TreeNode<K, V>, usize)> = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, 1));
        }

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Borrowing iterator over `(key, value)` in ascending key order
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }
}

impl<K: Ord, V> BinaryTree<K, V> {
    /// Insert a key/value pair
    ///
    /// Descends left on smaller keys and right on larger ones until an empty
    /// slot is found. If an equal key is met on the way, nothing is inserted
    /// and the stored value is left untouched; returns `false` in that case.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            match key.cmp(&node.key) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return false,
            }
        }

        *slot = Some(Box::new(TreeNode::new(key, value)));
        self.len += 1;
        true
    }

    /// Find the node holding `key`
    pub fn search<Q>(&self, key: &Q) -> Option<&TreeNode<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root();

        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }

    /// Value stored under `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(TreeNode::value)
    }
}

impl<K: Clone, V: Clone> BinaryTree<K, V> {
    /// All pairs in ascending key order, recomputed on every call
    pub fn inorder_traversal(&self) -> Vec<(K, V)> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }
}

impl<K, V> Default for BinaryTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinaryTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}

impl<K, V> Drop for BinaryTree<K, V> {
    // The derived drop recurses once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<K, V>>> = self.root.take().into_iter().collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<'a, K, V> IntoIterator for &'a BinaryTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inorder iterator over a BinaryTree
pub struct Iter<'a, K, V> {
    /// Nodes whose left subtree is done but which are not yet yielded
    stack: Vec<&'a TreeNode<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some((&node.key, &node.value))
    }
}
