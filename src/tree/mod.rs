//! Binary Search Tree Module
//!
//! An unbalanced BST built independently from the entry store.
//!
//! ## Responsibilities
//! - Keyed insert by descending comparison
//! - Keyed search returning the matching node
//! - Ascending (inorder) traversal
//!
//! ## Properties
//! - No rebalancing: random insertion order gives logarithmic depth on
//!   average, monotonic order degenerates into a list
//! - No delete: nodes live as long as the tree
//! - Inserting a key that is already present changes nothing, the first
//!   value wins
//!
//! All walks are iterative so a degenerate tree cannot exhaust the stack.

mod bst;
mod node;

pub use bst::{BinaryTree, Iter};
pub use node::TreeNode;
