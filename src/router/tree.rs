//! Segment tree router
//!
//! Patterns are split into typed segments and merged into a prefix-sharing
//! tree: `/users/:id/posts` and `/users/:uid/likes` share the `users` and
//! `([^/]+)` nodes and diverge below them. Every node owns one compiled regex
//! matcher, and a node carries a route when some pattern ends exactly there.
//!
//! ## Storage
//!
//! Nodes live in a flat arena (`Vec<Node>`) and refer to their children by
//! index, so the tree has no ownership cycles and cloning it is a single
//! vector copy. Index 0 is the root, which stands for the leading `/` and is
//! created by the first `add`.
//!
//! ## Sibling order
//!
//! Children are kept sorted by [`compare_siblings`]: the wildcard first, then
//! literals, then named parameters with a custom regex, then the default named
//! parameter. The order depends only on the set of patterns, never on the
//! order they were added in.
//!
//! ## Lookup
//!
//! The path is decoded for routing and split into tokens; a trailing `/` adds a
//! final `/` token matched by the synthetic trailing-separator node. Each token
//! descends into the first accepting child. On the last token, a child that
//! carries a route is preferred over an earlier one that does not. A wildcard
//! leaf ends the walk at once and swallows whatever is left of the path.
//!
//! ```rust
//! use segrouter::{Route, Router, TreeRouter};
//!
//! let mut router = TreeRouter::new();
//! router.add(Route::new("/clients/all")).unwrap();
//! router.add(Route::new("/clients/:id")).unwrap();
//!
//! let hit = router.route("/clients/all").unwrap();
//! assert_eq!(hit.resource_path(), "/clients/all");
//! let hit = router.route("/clients/123").unwrap();
//! assert_eq!(hit.resource_path(), "/clients/:id");
//! assert!(router.route("/clients/123/orders").is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::core::Router;
use super::node::{compile_matcher, Node};
use crate::comparator::compare_siblings;
use crate::decode::decode_for_routing;
use crate::error::RouteError;
use crate::route::helper::{path_elements, PATH_ELEMENT_SEPARATOR};
use crate::route::{PathElement, Route};

const ROOT: usize = 0;

/// Router backed by a segment tree.
#[derive(Debug, Clone, Default)]
pub struct TreeRouter {
    nodes: Vec<Node>,
}

impl TreeRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node, or `None` before the first route is added.
    #[must_use]
    pub fn root(&self) -> Option<TreeNode<'_>> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(TreeNode { tree: self, id: ROOT })
        }
    }

    /// Number of distinct patterns registered.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.route.is_some()).count()
    }

    /// Indented rendering of the tree, one node per line, showing each matcher
    /// and the pattern attached to it.
    #[must_use]
    pub fn dump(&self) -> String {
        self.to_string()
    }

    /// Position of `elem` among the children of `parent`: `Ok` for an existing
    /// structurally equal child, `Err` for the slot a new child goes into.
    fn child_slot(&self, parent: usize, elem: &PathElement) -> Result<usize, usize> {
        self.nodes[parent]
            .children
            .binary_search_by(|&child| compare_siblings(&self.nodes[child].element, elem))
    }

    fn first_splat_child(&self, parent: usize) -> Option<&Node> {
        self.nodes[parent]
            .children
            .iter()
            .map(|&child| &self.nodes[child])
            .find(|node| node.is_splat())
    }

    /// Among the children of `parent` accepting `token`, the one to descend into.
    fn select_child(&self, parent: usize, token: &str, last_token: bool) -> Option<usize> {
        let mut accepting = self.nodes[parent]
            .children
            .iter()
            .copied()
            .filter(|&child| self.nodes[child].accepts(token));
        let first = accepting.next()?;
        if last_token && self.nodes[first].route.is_none() {
            return Some(
                accepting
                    .find(|&child| self.nodes[child].route.is_some())
                    .unwrap_or(first),
            );
        }
        Some(first)
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: usize, depth: usize) -> fmt::Result {
        let node = &self.nodes[id];
        write!(f, "{:indent$}{}", "", node.pattern(), indent = depth * 2)?;
        if let Some(route) = &node.route {
            write!(f, " -> {route}")?;
        }
        writeln!(f)?;
        for &child in &node.children {
            self.write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

/// Tokens of a decoded path: blank segments dropped, plus a final `/` when the
/// path ends with a separator after at least one real segment.
fn search_tokens(decoded: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = path_elements(decoded)
        .into_iter()
        .filter(|token| !token.trim().is_empty())
        .collect();
    if !tokens.is_empty() && decoded.trim().ends_with(PATH_ELEMENT_SEPARATOR) {
        tokens.push(PATH_ELEMENT_SEPARATOR);
    }
    tokens
}

impl Router for TreeRouter {
    fn add(&mut self, route: Route) -> Result<(), RouteError> {
        let mut elements = route.path_elements().to_vec();
        if !elements.is_empty() && route.ends_with_path_separator() {
            let index = elements.len() - 1;
            elements.push(PathElement::literal(PATH_ELEMENT_SEPARATOR, index));
        }

        // Find where the pattern leaves the existing tree before touching it.
        let mut current = ROOT;
        let mut shared = 0;
        if !self.nodes.is_empty() {
            while let Some(elem) = elements.get(shared) {
                match self.child_slot(current, elem) {
                    Ok(pos) => {
                        current = self.nodes[current].children[pos];
                        shared += 1;
                    }
                    Err(_) => break,
                }
            }
        }

        let root = if self.nodes.is_empty() {
            let elem = PathElement::literal(PATH_ELEMENT_SEPARATOR, 0);
            let matcher = compile_matcher(&elem, route.resource_path())?;
            Some(Node::new(elem, matcher))
        } else {
            None
        };
        let fresh = elements[shared..]
            .iter()
            .map(|elem| {
                compile_matcher(elem, route.resource_path()).map(|m| Node::new(elem.clone(), m))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(root) = root {
            self.nodes.push(root);
        }
        let created = fresh.len();
        for node in fresh {
            let slot = match self.child_slot(current, &node.element) {
                Ok(pos) | Err(pos) => pos,
            };
            let id = self.nodes.len();
            self.nodes.push(node);
            self.nodes[current].children.insert(slot, id);
            current = id;
        }

        debug!(
            pattern = %route,
            elements = elements.len(),
            new_nodes = created,
            "Registered route in segment tree"
        );
        self.nodes[current].route = Some(Arc::new(route));
        Ok(())
    }

    fn route(&self, path: &str) -> Option<Arc<Route>> {
        let decoded = decode_for_routing(path);
        let tokens = search_tokens(&decoded);
        trace!(path = %path, tokens = tokens.len(), "Segment tree lookup");

        let Some(root) = self.nodes.first() else {
            debug!(path = %path, "No routes registered");
            return None;
        };
        if tokens.is_empty() && root.route.is_none() {
            if let Some(splat) = self.first_splat_child(ROOT) {
                return splat.route.clone();
            }
        }

        let mut current = ROOT;
        for (i, token) in tokens.iter().enumerate() {
            let last_token = i + 1 == tokens.len();
            let Some(next) = self.select_child(current, token, last_token) else {
                debug!(path = %path, token = %token, "No route matched");
                return None;
            };
            current = next;
            let node = &self.nodes[current];
            if node.is_splat() && node.children.is_empty() {
                debug!(
                    path = %path,
                    pattern = ?node.route.as_deref().map(Route::resource_path),
                    "Wildcard leaf matched"
                );
                return node.route.clone();
            }
        }

        let found = self.nodes[current].route.clone();
        debug!(
            path = %path,
            pattern = ?found.as_deref().map(Route::resource_path),
            "Segment tree lookup finished"
        );
        found
    }
}

impl fmt::Display for TreeRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nodes.is_empty() {
            return Ok(());
        }
        self.write_node(f, ROOT, 0)
    }
}

/// Read-only view of one node of a [`TreeRouter`].
///
/// `Display` shows the node's matcher source, e.g. `^hello$` or `^(.*)$`.
#[derive(Clone, Copy)]
pub struct TreeNode<'a> {
    tree: &'a TreeRouter,
    id: usize,
}

impl<'a> TreeNode<'a> {
    /// Children in sibling (lookup) order.
    #[must_use]
    pub fn children(&self) -> Vec<TreeNode<'a>> {
        self.node()
            .children
            .iter()
            .map(|&id| TreeNode {
                tree: self.tree,
                id,
            })
            .collect()
    }

    #[must_use]
    pub fn route(&self) -> Option<&'a Route> {
        self.node().route.as_deref()
    }

    #[must_use]
    pub fn is_splat(&self) -> bool {
        self.node().is_splat()
    }

    #[must_use]
    pub fn element(&self) -> &'a PathElement {
        &self.node().element
    }

    /// Source of the compiled matcher.
    #[must_use]
    pub fn pattern(&self) -> &'a str {
        self.node().pattern()
    }

    fn node(&self) -> &'a Node {
        &self.tree.nodes[self.id]
    }
}

impl fmt::Display for TreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl fmt::Debug for TreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("pattern", &self.pattern())
            .field("route", &self.route().map(Route::resource_path))
            .field("children", &self.node().children.len())
            .finish()
    }
}
