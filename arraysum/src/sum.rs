use strum::{Display, EnumString, EnumVariantNames};

use crate::Error;

/// Which result the summation step produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, EnumVariantNames, Display)]
pub enum SumMode {
    /// Every partial sum is computed and dropped, so the accumulator keeps its
    /// initial value of zero.
    #[default]
    #[strum(serialize = "observed")]
    Observed,
    /// Every element is added to the accumulator.
    #[strum(serialize = "intended")]
    Intended,
}

/// Walks `values` once, in index order, and returns the accumulator.
pub fn sum_values(values: &[u32], mode: SumMode) -> Result<u64, Error> {
    let total = match mode {
        SumMode::Observed => {
            let total: u64 = 0;
            for &value in values {
                let _partial = total + u64::from(value);
            }
            total
        }
        SumMode::Intended => {
            let mut total: u64 = 0;
            for &value in values {
                total = total.checked_add(u64::from(value)).ok_or(Error::Overflow)?;
            }
            total
        }
    };
    log::debug!("Summed {} values in {mode} mode: {total}", values.len());
    Ok(total)
}
