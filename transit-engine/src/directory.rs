//! Station name directory.
//!
//! A binary search tree mapping station names to ids, used for exact lookup,
//! alphabetical listing, and bounded prefix suggestion (the presentation
//! layer offers suggestions when an exact lookup misses). Comparisons are
//! case-insensitive; display names keep their original casing.
//!
//! The tree is deliberately unbalanced. At ~100 stations the worst-case
//! depth is harmless; anything reusing this at a larger scale should switch
//! to a balanced ordered map.

use crate::domain::StationId;

/// Maximum number of suggestions returned by [`StationDirectory::prefix_matches`].
pub const MAX_SUGGESTIONS: usize = 10;

/// Name → id directory over an unbalanced BST.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    root: Option<Box<Node>>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node {
    /// Case-folded comparison key.
    key: String,
    /// Original-case display name.
    name: String,
    id: StationId,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl StationDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name → id entry.
    ///
    /// Returns `false` without inserting when the name (case-insensitively)
    /// is already present. Callers registering stations treat that collision
    /// as an interchange marker; the directory itself never holds duplicate
    /// keys.
    pub fn add(&mut self, name: &str, id: StationId) -> bool {
        let key = name.to_lowercase();
        let inserted = insert(&mut self.root, key, name, id);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Look up a station id by name, case-insensitively. O(depth).
    pub fn lookup(&self, name: &str) -> Option<StationId> {
        let key = name.to_lowercase();
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                std::cmp::Ordering::Less => n.left.as_deref(),
                std::cmp::Ordering::Greater => n.right.as_deref(),
                std::cmp::Ordering::Equal => return Some(n.id),
            };
        }
        None
    }

    /// All entries in case-insensitive lexical order, original-case names.
    pub fn list(&self) -> Vec<(String, StationId)> {
        let mut entries = Vec::with_capacity(self.len);
        in_order(self.root.as_deref(), &mut |node| {
            entries.push((node.name.clone(), node.id));
            true
        });
        entries
    }

    /// Up to [`MAX_SUGGESTIONS`] entries whose name starts with `prefix`,
    /// case-insensitively, in lexical order.
    ///
    /// The traversal stops as soon as the cap is reached.
    pub fn prefix_matches(&self, prefix: &str) -> Vec<(String, StationId)> {
        let prefix = prefix.to_lowercase();
        let mut matches = Vec::new();
        in_order(self.root.as_deref(), &mut |node| {
            if node.key.starts_with(&prefix) {
                matches.push((node.name.clone(), node.id));
            }
            matches.len() < MAX_SUGGESTIONS
        });
        matches
    }

    /// Number of entries in the directory.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

/// Recursive descent insert. Returns whether a node was created.
fn insert(slot: &mut Option<Box<Node>>, key: String, name: &str, id: StationId) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(Node {
                key,
                name: name.to_owned(),
                id,
                left: None,
                right: None,
            }));
            true
        }
        Some(node) => match key.cmp(&node.key) {
            std::cmp::Ordering::Less => insert(&mut node.left, key, name, id),
            std::cmp::Ordering::Greater => insert(&mut node.right, key, name, id),
            std::cmp::Ordering::Equal => false,
        },
    }
}

/// In-order traversal; the visitor returns `false` to stop early.
fn in_order<'a>(node: Option<&'a Node>, visit: &mut dyn FnMut(&'a Node) -> bool) -> bool {
    let Some(node) = node else {
        return true;
    };
    in_order(node.left.as_deref(), visit)
        && visit(node)
        && in_order(node.right.as_deref(), visit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(names: &[&str]) -> StationDirectory {
        let mut dir = StationDirectory::new();
        for (i, name) in names.iter().enumerate() {
            assert!(dir.add(name, StationId(i)));
        }
        dir
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dir = directory(&["Dadar", "Churchgate", "Thane"]);

        assert_eq!(dir.lookup("Dadar"), Some(StationId(0)));
        assert_eq!(dir.lookup("dadar"), Some(StationId(0)));
        assert_eq!(dir.lookup("CHURCHGATE"), Some(StationId(1)));
        assert_eq!(dir.lookup("Panvel"), None);
    }

    #[test]
    fn duplicate_name_is_rejected_not_duplicated() {
        let mut dir = directory(&["Dadar"]);

        assert!(!dir.add("Dadar", StationId(9)));
        assert!(!dir.add("DADAR", StationId(9)));
        assert_eq!(dir.len(), 1);
        // The original entry wins.
        assert_eq!(dir.lookup("dadar"), Some(StationId(0)));
    }

    #[test]
    fn list_is_lexical_with_original_case() {
        let dir = directory(&["Thane", "andheri", "Dadar"]);

        let listed = dir.list();
        let names: Vec<&str> = listed.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["andheri", "Dadar", "Thane"]);
    }

    #[test]
    fn prefix_matches_case_insensitive() {
        let dir = directory(&["Borivali", "Bandra", "Byculla", "Dadar"]);

        let matches = dir.prefix_matches("ba");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].0, "Bandra");

        let matches = dir.prefix_matches("B");
        let names: Vec<&str> = matches.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Bandra", "Borivali", "Byculla"]);
    }

    #[test]
    fn prefix_matches_caps_at_ten() {
        let names: Vec<String> = (0..25).map(|i| format!("Sector {i:02}")).collect();
        let mut dir = StationDirectory::new();
        for (i, name) in names.iter().enumerate() {
            dir.add(name, StationId(i));
        }

        let matches = dir.prefix_matches("sector");
        assert_eq!(matches.len(), MAX_SUGGESTIONS);
        // Lexically first ten.
        assert_eq!(matches[0].0, "Sector 00");
        assert_eq!(matches[9].0, "Sector 09");
    }

    #[test]
    fn empty_prefix_lists_up_to_cap() {
        let dir = directory(&["A", "B", "C"]);
        assert_eq!(dir.prefix_matches("").len(), 3);
    }

    #[test]
    fn empty_directory() {
        let dir = StationDirectory::new();
        assert!(dir.is_empty());
        assert_eq!(dir.lookup("anything"), None);
        assert!(dir.list().is_empty());
        assert!(dir.prefix_matches("a").is_empty());
    }

    #[test]
    fn adversarial_insertion_order_still_works() {
        // Sorted insertion degenerates the tree to a list; behaviour must
        // stay correct even if depth is O(n).
        let names: Vec<String> = (0..100).map(|i| format!("S{i:03}")).collect();
        let mut dir = StationDirectory::new();
        for (i, name) in names.iter().enumerate() {
            dir.add(name, StationId(i));
        }

        assert_eq!(dir.lookup("s099"), Some(StationId(99)));
        assert_eq!(dir.list().len(), 100);
        assert_eq!(dir.prefix_matches("s0").len(), MAX_SUGGESTIONS);
    }
}
