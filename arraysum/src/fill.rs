use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Error;

/// Number of slots in the array.
///
/// Both the fill and the sum loops cover the indices `0..=10000`, so the array
/// holds one element more than its round name suggests.
pub const ARRAY_LEN: usize = 10_001;

/// Smallest value a slot can receive (inclusive).
pub const MIN_VALUE: u32 = 1;
/// Largest value a slot can receive (inclusive).
pub const MAX_VALUE: u32 = 1000;

/// Shape of the array and the source of its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOptions {
    /// Number of elements, shared by the fill and the sum step.
    pub len: usize,
    pub min: u32,
    pub max: u32,
    /// Seeds the generator deterministically. Without a seed, the generator
    /// is seeded from the operating system.
    pub seed: Option<u64>,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            len: ARRAY_LEN,
            min: MIN_VALUE,
            max: MAX_VALUE,
            seed: None,
        }
    }
}

impl FillOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if self.min > self.max {
            return Err(Error::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Creates the generator all values are drawn from.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// The range the correct sum of a filled array falls into, or `None` if
    /// the upper bound does not fit into a `u64`.
    pub fn sum_bounds(&self) -> Option<RangeInclusive<u64>> {
        let len = u64::try_from(self.len).ok()?;
        let lower = len.checked_mul(u64::from(self.min))?;
        let upper = len.checked_mul(u64::from(self.max))?;
        Some(lower..=upper)
    }
}

/// Allocates `options.len` slots and fills them in index order with values
/// drawn uniformly from `[options.min, options.max]`.
pub fn fill_array<R: Rng>(options: &FillOptions, rng: &mut R) -> Result<Vec<u32>, Error> {
    options.validate()?;

    let mut values = Vec::new();
    values.try_reserve_exact(options.len)?;
    values.extend((0..options.len).map(|_| rng.gen_range(options.min..=options.max)));

    log::debug!(
        "Filled {} slots with values in [{}, {}]",
        values.len(),
        options.min,
        options.max
    );
    Ok(values)
}
