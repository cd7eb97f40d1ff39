//! Pairwise cost lookups keyed by location label.
//!
//! [`CostLookup`] is the seam between persisted cost tables and the
//! [`CostMatrixBuilder`](crate::CostMatrixBuilder). [`CostTable`] is the
//! in-memory implementation used by the data loaders and tests.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Cost, Location};

/// Look up the cost of travelling between two labelled locations.
///
/// Implementations return `None` when no entry exists. They must not
/// substitute zero for a missing entry.
pub trait CostLookup {
    /// Cost from `from` to `to`, if recorded.
    fn cost(&self, from: &Location, to: &Location) -> Option<Cost>;
}

impl<T: CostLookup + ?Sized> CostLookup for &T {
    fn cost(&self, from: &Location, to: &Location) -> Option<Cost> {
        (**self).cost(from, to)
    }
}

/// Nested `from -> to -> cost` table.
///
/// Rows and columns are kept in label order so serialised tables are stable.
///
/// # Examples
/// ```
/// use tourplan_core::{CostLookup, CostTable, Location};
///
/// let mut table = CostTable::new();
/// table.insert_symmetric(Location::from("A"), Location::from("B"), 10);
/// assert_eq!(table.cost(&"B".into(), &"A".into()), Some(10));
/// assert_eq!(table.cost(&"A".into(), &"C".into()), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CostTable {
    rows: BTreeMap<Location, BTreeMap<Location, Cost>>,
}

impl CostTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Record the cost from `from` to `to`, returning any previous value.
    pub fn insert(&mut self, from: Location, to: Location, cost: Cost) -> Option<Cost> {
        self.rows.entry(from).or_default().insert(to, cost)
    }

    /// Record the same cost in both directions and the zero self-costs.
    pub fn insert_symmetric(&mut self, a: Location, b: Location, cost: Cost) {
        self.insert(a.clone(), a.clone(), 0);
        self.insert(b.clone(), b.clone(), 0);
        self.insert(a.clone(), b.clone(), cost);
        self.insert(b, a, cost);
    }

    /// Labels that have at least one outgoing entry.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.rows.keys()
    }

    /// Whether `location` has an outgoing row.
    #[must_use]
    pub fn contains(&self, location: &Location) -> bool {
        self.rows.contains_key(location)
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl CostLookup for CostTable {
    fn cost(&self, from: &Location, to: &Location) -> Option<Cost> {
        self.rows.get(from)?.get(to).copied()
    }
}

impl FromIterator<(Location, Location, Cost)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (Location, Location, Cost)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (from, to, cost) in iter {
            table.insert(from, to, cost);
        }
        table
    }
}
