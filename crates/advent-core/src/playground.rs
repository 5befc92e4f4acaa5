//! Junction box circuits strung across the playground.
//!
//! Boxes are wired together pair by pair, closest pairs first. Wiring two
//! boxes joins their circuits; wiring boxes that already share a circuit
//! uses up a connection without changing anything.

use std::fmt;

use log::{debug, trace};
use petgraph::unionfind::UnionFind;
use serde::Deserialize;

use crate::SolveError;

/// A junction box position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JunctionBox {
    x: u64,
    y: u64,
    z: u64,
}

impl JunctionBox {
    pub fn new(x: u64, y: u64, z: u64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> u64 {
        self.x
    }

    pub fn y(&self) -> u64 {
        self.y
    }

    pub fn z(&self) -> u64 {
        self.z
    }

    /// Squared straight-line distance; ordering by it matches true distance.
    pub fn distance_squared(&self, other: &Self) -> u128 {
        let dx = u128::from(self.x.abs_diff(other.x));
        let dy = u128::from(self.y.abs_diff(other.y));
        let dz = u128::from(self.z.abs_diff(other.z));
        dx * dx + dy * dy + dz * dz
    }
}

impl fmt::Display for JunctionBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// How many connections to make and how many circuits to multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WiringPlan {
    #[serde(default = "WiringPlan::default_connections")]
    connections: usize,

    #[serde(default = "WiringPlan::default_largest")]
    largest: usize,
}

impl WiringPlan {
    pub fn new(connections: usize, largest: usize) -> Self {
        Self {
            connections,
            largest,
        }
    }

    pub fn connections(&self) -> usize {
        self.connections
    }

    pub fn largest(&self) -> usize {
        self.largest
    }

    pub fn with_connections(mut self, connections: usize) -> Self {
        self.connections = connections;
        self
    }

    pub fn with_largest(mut self, largest: usize) -> Self {
        self.largest = largest;
        self
    }

    fn default_connections() -> usize {
        1000
    }

    fn default_largest() -> usize {
        3
    }
}

impl Default for WiringPlan {
    fn default() -> Self {
        Self::new(Self::default_connections(), Self::default_largest())
    }
}

/// All junction boxes and every candidate pair, closest first.
#[derive(Debug, Clone)]
pub struct Playground {
    boxes: Vec<JunctionBox>,
    /// `(distance², a, b)` with `a < b`, ascending.
    pairs: Vec<(u128, usize, usize)>,
}

impl Playground {
    pub fn new(boxes: Vec<JunctionBox>) -> Self {
        let mut pairs = Vec::with_capacity(boxes.len() * boxes.len().saturating_sub(1) / 2);
        for (a, first) in boxes.iter().enumerate() {
            for (b, second) in boxes.iter().enumerate().skip(a + 1) {
                pairs.push((first.distance_squared(second), a, b));
            }
        }
        pairs.sort_unstable();
        debug!(boxes = boxes.len(), pairs = pairs.len(); "Ranked junction box pairs");
        Self { boxes, pairs }
    }

    pub fn boxes(&self) -> &[JunctionBox] {
        &self.boxes
    }

    fn require_pair(&self) -> Result<(), SolveError> {
        if self.boxes.len() < 2 {
            return Err(SolveError::NotEnoughJunctionBoxes {
                required: 2,
                available: self.boxes.len(),
            });
        }
        Ok(())
    }

    /// Circuit sizes, largest first, after the `connections` closest pairs
    /// have been wired. Unwired boxes form circuits of one.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotEnoughJunctionBoxes`] for fewer than two boxes.
    pub fn circuit_sizes(&self, connections: usize) -> Result<Vec<usize>, SolveError> {
        self.require_pair()?;

        let mut circuits = UnionFind::<usize>::new(self.boxes.len());
        for &(_, a, b) in self.pairs.iter().take(connections) {
            let joined = circuits.union(a, b);
            trace!(a:% = self.boxes[a], b:% = self.boxes[b], joined; "Wired junction boxes");
        }

        let mut sizes = vec![0usize; self.boxes.len()];
        for root in circuits.into_labeling() {
            sizes[root] += 1;
        }
        sizes.retain(|size| *size > 0);
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(sizes)
    }

    /// Product of the sizes of the largest circuits after wiring.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotEnoughCircuits`] when fewer circuits exist
    /// than the plan asks to multiply, or [`SolveError::Overflow`].
    pub fn largest_circuits_product(&self, plan: WiringPlan) -> Result<u64, SolveError> {
        let sizes = self.circuit_sizes(plan.connections)?;
        if sizes.len() < plan.largest {
            return Err(SolveError::NotEnoughCircuits {
                requested: plan.largest,
                available: sizes.len(),
            });
        }
        sizes[..plan.largest].iter().try_fold(1u64, |product, size| {
            u64::try_from(*size)
                .ok()
                .and_then(|size| product.checked_mul(size))
                .ok_or(SolveError::Overflow)
        })
    }

    /// The pair whose wiring finally joins every box into one circuit.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotEnoughJunctionBoxes`] for fewer than two boxes.
    pub fn final_connection(&self) -> Result<(JunctionBox, JunctionBox), SolveError> {
        self.require_pair()?;

        let mut circuits = UnionFind::<usize>::new(self.boxes.len());
        let mut remaining = self.boxes.len();
        for &(_, a, b) in &self.pairs {
            if circuits.union(a, b) {
                remaining -= 1;
                if remaining == 1 {
                    debug!(a:% = self.boxes[a], b:% = self.boxes[b]; "All boxes share one circuit");
                    return Ok((self.boxes[a], self.boxes[b]));
                }
            }
        }
        unreachable!("every pair is ranked, so wiring them all leaves one circuit")
    }

    /// Product of the X coordinates of the final connection.
    ///
    /// # Errors
    ///
    /// See [`Playground::final_connection`]; also [`SolveError::Overflow`].
    pub fn final_connection_product(&self) -> Result<u64, SolveError> {
        let (a, b) = self.final_connection()?;
        a.x.checked_mul(b.x).ok_or(SolveError::Overflow)
    }
}
