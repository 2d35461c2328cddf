//! Mapping continuous state into dense table indices.

/// Bucket index of `value` in `[lower, upper)` split into `bins` buckets,
/// `bins >= 3`.
///
/// Bin `0` and bin `bins - 1` are reserved for out-of-range values; the
/// interior `[lower, upper)` is split into `bins - 2` equal-width buckets, so
/// `digitize(lower, upper, bins, lower) == 1`.
pub fn digitize(lower: f64, upper: f64, bins: usize, value: f64) -> usize {
    debug_assert!(bins >= 3);
    if value < lower {
        return 0;
    }
    if value >= upper {
        return bins - 1;
    }
    let width = (upper - lower) / (bins - 2) as f64;
    ((value - lower) / width).floor() as usize + 1
}

/// One continuous dimension of a discretized state space.
#[derive(Debug, Clone, Copy)]
pub struct Dimension {
    pub lower: f64,
    pub upper: f64,
    pub bins: usize,
}

impl Dimension {
    pub fn new(lower: f64, upper: f64, bins: usize) -> Self {
        Dimension { lower, upper, bins }
    }

    pub fn index_of(&self, value: f64) -> usize {
        digitize(self.lower, self.upper, self.bins, value)
    }
}

/// A row-major composite index over several discretized dimensions.
///
/// Dimension `i` is weighted by the product of the bin counts of dimensions
/// `< i`, so the composite space size is the product of all bin counts and
/// distinct per-dimension indices never collide.
#[derive(Debug, Clone)]
pub struct StateSpace {
    dimensions: Vec<Dimension>,
}

impl StateSpace {
    pub fn new(dimensions: Vec<Dimension>) -> Self {
        StateSpace { dimensions }
    }

    /// Total number of composite indices.
    pub fn len(&self) -> usize {
        self.dimensions.iter().map(|d| d.bins).product()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Composite index of a state vector; `state` must have one component per
    /// dimension.
    pub fn index_of(&self, state: &[f64]) -> usize {
        debug_assert_eq!(state.len(), self.dimensions.len());
        let mut index = 0;
        let mut weight = 1;
        for (dim, &value) in self.dimensions.iter().zip(state) {
            index += weight * dim.index_of(value);
            weight *= dim.bins;
        }
        index
    }
}
