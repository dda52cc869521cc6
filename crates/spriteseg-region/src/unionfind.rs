//! Label equivalence tracking
//!
//! The raster pass hands out provisional labels and records which of them
//! touch. [`LabelEquivalence`] is a disjoint-set forest (union by size,
//! path compression) whose roots additionally remember the smallest label
//! ever merged into their class, so [`LabelEquivalence::find`] always
//! answers with the class minimum regardless of which node became root.

/// Region label. `0` is reserved for background.
pub type Label = u32;

/// Disjoint-set forest over provisional labels `1..=len`.
#[derive(Debug, Clone)]
pub struct LabelEquivalence {
    /// Parent pointer per label; slot 0 is unused
    parent: Vec<Label>,
    /// Class size, meaningful at roots only
    size: Vec<u32>,
    /// Smallest member label, meaningful at roots only
    min: Vec<Label>,
}

impl Default for LabelEquivalence {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelEquivalence {
    /// Create an empty relation.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty relation with room for `capacity` labels.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut parent = Vec::with_capacity(capacity + 1);
        let mut size = Vec::with_capacity(capacity + 1);
        let mut min = Vec::with_capacity(capacity + 1);
        parent.push(0);
        size.push(0);
        min.push(0);
        Self { parent, size, min }
    }

    /// Number of labels handed out so far.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Check if no label has been handed out.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `label` has been handed out.
    pub fn contains(&self, label: Label) -> bool {
        label != 0 && (label as usize) < self.parent.len()
    }

    /// Allocate the next label as a singleton class.
    ///
    /// Labels are handed out as 1, 2, 3, ...
    pub fn new_class(&mut self) -> Label {
        let label = self.parent.len() as Label;
        self.parent.push(label);
        self.size.push(1);
        self.min.push(label);
        label
    }

    /// Canonical label of the class containing `label`: its minimum member.
    ///
    /// # Panics
    ///
    /// Panics if `label` was never handed out by [`LabelEquivalence::new_class`].
    pub fn find(&mut self, label: Label) -> Label {
        let root = self.root(label);
        self.min[root as usize]
    }

    /// Merge the classes of `a` and `b`.
    ///
    /// Returns `true` if they were in different classes.
    ///
    /// # Panics
    ///
    /// Panics if either label was never handed out.
    pub fn union(&mut self, a: Label, b: Label) -> bool {
        let ra = self.root(a);
        let rb = self.root(b);
        if ra == rb {
            return false;
        }

        let (big, small) = if self.size[ra as usize] >= self.size[rb as usize] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small as usize] = big;
        self.size[big as usize] += self.size[small as usize];
        self.min[big as usize] = self.min[big as usize].min(self.min[small as usize]);
        true
    }

    /// Check if two labels belong to the same class.
    pub fn same_class(&mut self, a: Label, b: Label) -> bool {
        self.root(a) == self.root(b)
    }

    /// Lookup table `table[provisional] = canonical`, with `table[0] = 0`.
    pub fn resolve_all(&mut self) -> Vec<Label> {
        let mut table = Vec::with_capacity(self.parent.len());
        table.push(0);
        for label in 1..self.parent.len() as Label {
            table.push(self.find(label));
        }
        table
    }

    fn root(&mut self, label: Label) -> Label {
        assert!(self.contains(label), "label {label} was never allocated");

        let mut root = label;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // Path compression
        let mut node = label;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_class_sequence() {
        let mut eq = LabelEquivalence::new();
        assert!(eq.is_empty());
        assert_eq!(eq.new_class(), 1);
        assert_eq!(eq.new_class(), 2);
        assert_eq!(eq.new_class(), 3);
        assert_eq!(eq.len(), 3);
        assert_eq!(eq.find(2), 2);
    }

    #[test]
    fn test_union_reports_min() {
        let mut eq = LabelEquivalence::new();
        for _ in 0..5 {
            eq.new_class();
        }
        assert!(eq.union(4, 2));
        assert!(!eq.union(2, 4));
        assert_eq!(eq.find(4), 2);
        assert_eq!(eq.find(2), 2);
        assert_eq!(eq.find(5), 5);
    }

    #[test]
    fn test_min_survives_when_larger_root_wins() {
        // Build a big class rooted away from its minimum, then merge a
        // smaller label into it via the big class
        let mut eq = LabelEquivalence::new();
        for _ in 0..6 {
            eq.new_class();
        }
        eq.union(5, 6);
        eq.union(5, 4);
        eq.union(4, 3);
        // {3,4,5,6}; now merge singleton 1 through a non-root member
        eq.union(6, 1);
        for l in [1, 3, 4, 5, 6] {
            assert_eq!(eq.find(l), 1);
        }
        assert_eq!(eq.find(2), 2);
    }

    #[test]
    fn test_transitive_chain() {
        let mut eq = LabelEquivalence::with_capacity(10);
        for _ in 0..10 {
            eq.new_class();
        }
        for l in (2..=10).rev() {
            eq.union(l, l - 1);
        }
        assert!(eq.same_class(1, 10));
        let table = eq.resolve_all();
        assert_eq!(table.len(), 11);
        assert_eq!(table[0], 0);
        assert!(table[1..].iter().all(|&c| c == 1));
    }

    #[test]
    fn test_resolve_all_multiple_classes() {
        let mut eq = LabelEquivalence::new();
        for _ in 0..4 {
            eq.new_class();
        }
        eq.union(2, 4);
        assert_eq!(eq.resolve_all(), vec![0, 1, 2, 3, 2]);
    }

    #[test]
    #[should_panic(expected = "never allocated")]
    fn test_find_unknown_label_panics() {
        let mut eq = LabelEquivalence::new();
        eq.new_class();
        eq.find(2);
    }
}
