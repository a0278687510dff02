//! Union-find over station identifiers.
//!
//! Built incrementally with `StationPartitionBuilder::connect`, then frozen
//! into a flat partition where every station points directly at its
//! representative, giving O(1) `connected` queries.
//!
//! Unions keep the larger of the two representatives. This is not
//! union-by-rank, so chains can grow long while building; with a few dozen
//! stations that does not matter, and the tie-break makes the resulting
//! representatives deterministic.

use super::station::{Station, StationConnectivity};

/// Frozen, path-compressed station partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationPartition {
    links: Vec<usize>,
}

impl StationPartition {
    /// Number of station identifiers covered.
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.links.len()
    }

    /// Representative of the set containing `id`, if covered.
    #[must_use]
    pub fn representative(&self, id: usize) -> Option<usize> {
        self.links.get(id).copied()
    }

    /// Check if two station ids are in the same set.
    ///
    /// Ids outside the partition are only connected to themselves.
    #[must_use]
    pub fn connected_ids(&self, id1: usize, id2: usize) -> bool {
        match (self.representative(id1), self.representative(id2)) {
            (Some(r1), Some(r2)) => r1 == r2,
            _ => id1 == id2,
        }
    }
}

impl StationConnectivity for StationPartition {
    fn connected(&self, s1: Station, s2: Station) -> bool {
        self.connected_ids(s1.id(), s2.id())
    }
}

/// Mutable accumulator for a `StationPartition`.
#[derive(Clone, Debug)]
pub struct StationPartitionBuilder {
    links: Vec<usize>,
}

impl StationPartitionBuilder {
    /// Create `station_count` singleton sets over ids `0..station_count`.
    #[must_use]
    pub fn new(station_count: usize) -> Self {
        Self {
            links: (0..station_count).collect(),
        }
    }

    /// Join the sets of both stations.
    ///
    /// Panics if either id is outside the builder's range.
    pub fn connect(&mut self, s1: Station, s2: Station) -> &mut Self {
        self.connect_ids(s1.id(), s2.id())
    }

    /// Join the sets of both station ids.
    pub fn connect_ids(&mut self, id1: usize, id2: usize) -> &mut Self {
        assert!(
            id1 < self.links.len() && id2 < self.links.len(),
            "Station ids {} and {} must be below {}",
            id1,
            id2,
            self.links.len()
        );
        let r1 = self.representative(id1);
        let r2 = self.representative(id2);
        let (kept, merged) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        self.links[merged] = kept;
        self
    }

    fn representative(&self, mut id: usize) -> usize {
        while self.links[id] != id {
            id = self.links[id];
        }
        id
    }

    /// Freeze into a path-compressed partition.
    #[must_use]
    pub fn build(self) -> StationPartition {
        let links = (0..self.links.len()).map(|id| self.representative(id)).collect();
        StationPartition { links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let partition = StationPartitionBuilder::new(4).build();
        for a in 0..4 {
            for b in 0..4 {
                assert_eq!(partition.connected_ids(a, b), a == b);
            }
        }
    }

    #[test]
    fn test_union_keeps_larger_representative() {
        let mut builder = StationPartitionBuilder::new(6);
        builder.connect_ids(0, 3).connect_ids(3, 1).connect_ids(4, 5);
        let partition = builder.build();

        assert_eq!(partition.representative(0), Some(3));
        assert_eq!(partition.representative(1), Some(3));
        assert_eq!(partition.representative(4), Some(5));
        assert_eq!(partition.representative(2), Some(2));
    }

    #[test]
    fn test_transitive_connectivity() {
        let mut builder = StationPartitionBuilder::new(6);
        builder.connect_ids(0, 1).connect_ids(2, 3).connect_ids(1, 2);
        let partition = builder.build();

        assert!(partition.connected_ids(0, 3));
        assert!(partition.connected_ids(3, 0));
        assert!(!partition.connected_ids(0, 4));
    }

    #[test]
    fn test_representatives_idempotent() {
        let mut builder = StationPartitionBuilder::new(8);
        builder.connect_ids(7, 0).connect_ids(2, 5).connect_ids(5, 0).connect_ids(1, 6);
        let partition = builder.build();

        for id in 0..8 {
            let r = partition.representative(id).unwrap();
            assert_eq!(partition.representative(r), Some(r));
        }
    }

    #[test]
    fn test_ids_outside_range() {
        let mut builder = StationPartitionBuilder::new(3);
        builder.connect_ids(0, 2);
        let partition = builder.build();

        assert!(partition.connected_ids(10, 10));
        assert!(!partition.connected_ids(10, 11));
        assert!(!partition.connected_ids(0, 10));
    }

    #[test]
    #[should_panic(expected = "must be below")]
    fn test_connect_out_of_range() {
        StationPartitionBuilder::new(2).connect_ids(0, 2);
    }
}
