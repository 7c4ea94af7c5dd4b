//! Splay tree keyed by ordered keys
//!
//! Nodes are stored in an arena owned by the tree and addressed by index.
//! `left`/`right` are the structural edges; `parent` is a back-reference used
//! only while rotating. Every hit on `find` and every `insert` splays the
//! touched node to the root, so recently used keys stay near the top.

use std::cmp::Ordering;

struct Node<K, V> {
    key: K,
    value: V,
    left: Option<usize>,
    right: Option<usize>,
    parent: Option<usize>,
}

/// Self-adjusting binary search tree
///
/// Grows without bound; there is no per-key removal.
pub struct SplayTree<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<usize>,
}

impl<K: Ord, V> SplayTree<K, V> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Insert `key`, or overwrite its value if present, then splay it to the root
    pub fn insert(&mut self, key: K, value: V) {
        let Some(mut current) = self.root else {
            let idx = self.alloc(key, value, None);
            self.root = Some(idx);
            return;
        };

        loop {
            match key.cmp(&self.nodes[current].key) {
                Ordering::Less => match self.nodes[current].left {
                    Some(left) => current = left,
                    None => {
                        let idx = self.alloc(key, value, Some(current));
                        self.nodes[current].left = Some(idx);
                        self.splay(idx);
                        return;
                    }
                },
                Ordering::Greater => match self.nodes[current].right {
                    Some(right) => current = right,
                    None => {
                        let idx = self.alloc(key, value, Some(current));
                        self.nodes[current].right = Some(idx);
                        self.splay(idx);
                        return;
                    }
                },
                Ordering::Equal => {
                    self.nodes[current].value = value;
                    self.splay(current);
                    return;
                }
            }
        }
    }

    /// Look up `key`; on a hit the node is splayed to the root
    ///
    /// A miss leaves the tree untouched.
    pub fn find(&mut self, key: &K) -> Option<&V> {
        let idx = self.locate(key)?;
        self.splay(idx);
        Some(&self.nodes[idx].value)
    }

    /// Check for `key` without restructuring the tree
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Key currently at the root
    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|idx| &self.nodes[idx].key)
    }

    /// Number of keys in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|idx| (idx, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[idx];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    /// In-order `(key, value)` pairs; does not splay
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    fn alloc(&mut self, key: K, value: V, parent: Option<usize>) -> usize {
        self.nodes.push(Node {
            key,
            value,
            left: None,
            right: None,
            parent,
        });
        self.nodes.len() - 1
    }

    fn locate(&self, key: &K) -> Option<usize> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(idx),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn is_left_child(&self, idx: usize, parent: usize) -> bool {
        self.nodes[parent].left == Some(idx)
    }

    /// Replace `old` with `new` in the child slot of `old`'s parent, or at the root
    fn replace_child(&mut self, parent: Option<usize>, old: usize, new: usize) {
        match parent {
            None => self.root = Some(new),
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = Some(new),
            Some(p) => self.nodes[p].right = Some(new),
        }
    }

    fn rotate_left(&mut self, x: usize) {
        let Some(y) = self.nodes[x].right else {
            return;
        };

        let inner = self.nodes[y].left;
        self.nodes[x].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, y);

        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn rotate_right(&mut self, x: usize) {
        let Some(y) = self.nodes[x].left else {
            return;
        };

        let inner = self.nodes[y].right;
        self.nodes[x].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, y);

        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn splay(&mut self, x: usize) {
        while let Some(parent) = self.nodes[x].parent {
            let x_is_left = self.is_left_child(x, parent);

            let Some(grandparent) = self.nodes[parent].parent else {
                // Zig
                if x_is_left {
                    self.rotate_right(parent);
                } else {
                    self.rotate_left(parent);
                }
                continue;
            };

            match (x_is_left, self.is_left_child(parent, grandparent)) {
                // Zig-Zig
                (true, true) => {
                    self.rotate_right(grandparent);
                    self.rotate_right(parent);
                }
                (false, false) => {
                    self.rotate_left(grandparent);
                    self.rotate_left(parent);
                }
                // Zig-Zag: after the first rotation x hangs off the grandparent
                (false, true) => {
                    self.rotate_left(parent);
                    self.rotate_right(grandparent);
                }
                (true, false) => {
                    self.rotate_right(parent);
                    self.rotate_left(grandparent);
                }
            }
        }
    }
}

impl<K: Ord, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order iterator over a [`SplayTree`]
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    stack: Vec<usize>,
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.cursor {
            self.stack.push(idx);
            self.cursor = self.nodes[idx].left;
        }

        let idx = self.stack.pop()?;
        let node = &self.nodes[idx];
        self.cursor = node.right;
        Some((&node.key, &node.value))
    }
}
