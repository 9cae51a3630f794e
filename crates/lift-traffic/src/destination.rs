//! Destination-floor probability tables and their inverse-CDF lookup.
//!
//! Passengers pick a destination from one of four empirical tables, chosen by
//! the bucket their source floor falls into.  Each table lists weights for
//! floors 1..=21; buildings with a different floor count truncate or
//! zero-pad the table and renormalise.

use lift_core::Floor;

/// Number of floors the empirical tables were fitted on.
pub const SURVEYED_FLOORS: usize = 21;

/// Destination weights for passengers starting on floor 1.
const FROM_GROUND: [f64; SURVEYED_FLOORS] = [
    0.0, 0.0, 0.0484, 0.0161, 0.0323, 0.0484, 0.0323, 0.0484, 0.1452, 0.1774, 0.0968, 0.3548, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

/// Destination weights for passengers starting on floor 2.
const FROM_SECOND: [f64; SURVEYED_FLOORS] = [
    0.1061, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1970, 0.0455, 0.3030, 0.0455,
    0.1515, 0.0152, 0.1061, 0.0152, 0.0152,
];

/// Destination weights for passengers starting on floors 3..=12.
const FROM_MIDDLE: [f64; SURVEYED_FLOORS] = [
    0.3700, 0.1200, 0.0100, 0.0100, 0.0100, 0.0100, 0.0100, 0.0100, 0.0900, 0.0800, 0.0100, 0.0100,
    0.0100, 0.0400, 0.1500, 0.0100, 0.0100, 0.0100, 0.0100, 0.0100, 0.0100,
];

/// Destination weights for passengers starting on floor 13 and above.
const FROM_HIGH: [f64; SURVEYED_FLOORS] = [
    0.0, 0.4900, 0.0100, 0.0100, 0.0100, 0.0100, 0.0100, 0.0100, 0.0900, 0.0800, 0.0100, 0.0100,
    0.0100, 0.0400, 0.1500, 0.0100, 0.0100, 0.0100, 0.0100, 0.0100, 0.0100,
];

// ── SourceBucket ──────────────────────────────────────────────────────────────

/// Source-floor bucket that selects a destination table.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SourceBucket {
    Ground,
    Second,
    Middle,
    High,
}

impl SourceBucket {
    pub const ALL: [SourceBucket; 4] = [
        SourceBucket::Ground,
        SourceBucket::Second,
        SourceBucket::Middle,
        SourceBucket::High,
    ];

    pub fn of(source: Floor) -> SourceBucket {
        match source {
            0 | 1 => SourceBucket::Ground,
            2 => SourceBucket::Second,
            3..=12 => SourceBucket::Middle,
            _ => SourceBucket::High,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn weights(self) -> &'static [f64; SURVEYED_FLOORS] {
        match self {
            SourceBucket::Ground => &FROM_GROUND,
            SourceBucket::Second => &FROM_SECOND,
            SourceBucket::Middle => &FROM_MIDDLE,
            SourceBucket::High => &FROM_HIGH,
        }
    }

    /// Source floors of a `floors`-storey building that land in this bucket.
    fn sources(self, floors: Floor) -> impl Iterator<Item = Floor> {
        (1..=floors).filter(move |&f| SourceBucket::of(f) == self)
    }
}

// ── DestinationTable ──────────────────────────────────────────────────────────

/// Normalised cumulative distribution over floors `1..=len`.
#[derive(Clone, Debug, PartialEq)]
pub struct DestinationTable {
    /// `cumulative[i]` = P(destination <= i + 1).  Last entry is 1.0.
    cumulative: Vec<f64>,
}

impl DestinationTable {
    /// Build from raw weights, one per floor starting at floor 1.
    ///
    /// Returns `None` if the weights carry no probability mass.
    pub fn from_weights(weights: &[f64]) -> Option<Self> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if weights.is_empty() || total <= 0.0 {
            return None;
        }
        let mut running = 0.0;
        let mut cumulative: Vec<f64> = weights
            .iter()
            .map(|&w| {
                running += w.max(0.0) / total;
                running
            })
            .collect();
        // Absorb rounding so every draw in [0, 1) lands inside the table.
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }
        Some(Self { cumulative })
    }

    /// Equal weight on every one of `floors` floors.
    pub fn uniform(floors: Floor) -> Self {
        let weights = vec![1.0; floors.max(1) as usize];
        Self::from_weights(&weights).unwrap_or(Self { cumulative: vec![1.0] })
    }

    /// Inverse CDF: the floor whose cumulative band contains `u ∈ [0, 1)`.
    ///
    /// Zero-probability floors own an empty band and are never returned.
    pub fn floor_for(&self, u: f64) -> Floor {
        let i = self.cumulative.partition_point(|&c| c <= u);
        (i.min(self.cumulative.len() - 1) + 1) as Floor
    }

    /// Probability of drawing `floor` (0 outside the table).
    pub fn probability(&self, floor: Floor) -> f64 {
        let Some(i) = (floor as usize).checked_sub(1) else {
            return 0.0;
        };
        match self.cumulative.get(i) {
            None => 0.0,
            Some(&c) => c - if i == 0 { 0.0 } else { self.cumulative[i - 1] },
        }
    }

    /// Number of floors the table spans.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}

// ── DestinationTables ─────────────────────────────────────────────────────────

/// The four bucketed tables, fitted to a building of `floors` floors.
#[derive(Clone, Debug, PartialEq)]
pub struct DestinationTables {
    floors: Floor,
    tables: [DestinationTable; 4],
}

impl DestinationTables {
    /// Fit the empirical tables to a `floors`-storey building.
    ///
    /// A bucket whose fitted table leaves one of its own source floors with
    /// nowhere else to go falls back to the uniform table, so the
    /// "resample while destination == source" loop always terminates.
    pub fn for_building(floors: Floor) -> Self {
        let tables = SourceBucket::ALL.map(|bucket| {
            let mut weights = bucket.weights().to_vec();
            weights.resize(floors as usize, 0.0);
            let fitted = DestinationTable::from_weights(&weights);
            match fitted {
                Some(table)
                    if bucket
                        .sources(floors)
                        .all(|s| table.probability(s) < 1.0 - f64::EPSILON) =>
                {
                    table
                }
                _ => DestinationTable::uniform(floors),
            }
        });
        Self { floors, tables }
    }

    pub fn floors(&self) -> Floor {
        self.floors
    }

    pub fn table_for(&self, source: Floor) -> &DestinationTable {
        &self.tables[SourceBucket::of(source).index()]
    }

    /// One inverse-CDF draw for a passenger starting on `source`.  May return
    /// `source` itself; callers resample.
    #[inline]
    pub fn floor_for(&self, source: Floor, u: f64) -> Floor {
        self.table_for(source).floor_for(u)
    }

    /// `true` if a passenger on `source` can ever ask for `destination`.
    pub fn is_reachable(&self, source: Floor, destination: Floor) -> bool {
        source != destination && self.table_for(source).probability(destination) > 0.0
    }

    /// Every (source, destination) pair with positive probability.
    pub fn reachable_pairs(&self) -> impl Iterator<Item = (Floor, Floor)> + '_ {
        (1..=self.floors).flat_map(move |s| {
            (1..=self.floors)
                .filter(move |&d| self.is_reachable(s, d))
                .map(move |d| (s, d))
        })
    }
}
