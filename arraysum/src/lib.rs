//! Fills a fixed-size integer array with uniformly distributed random values,
//! runs the summation step over it and reports the accumulator.
//!
//! The summation step has two modes, see [`SumMode`]. The default one
//! reproduces the historical output, which is always zero.

mod fill;
mod report;
mod sum;

use std::{collections::TryReserveError, io};

use rand::Rng;

pub use fill::{fill_array, FillOptions, ARRAY_LEN, MAX_VALUE, MIN_VALUE};
pub use report::report;
pub use sum::{sum_values, SumMode};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("empty value range: minimum {min} is larger than maximum {max}")]
    EmptyRange { min: u32, max: u32 },
    #[error("could not allocate the array: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("sum does not fit into 64 bits")]
    Overflow,
    #[error("could not write the result: {0}")]
    Io(#[from] io::Error),
}

/// Runs fill, sum and report with the generator described by `options`.
/// Returns the reported value.
///
/// The options are checked before the generator is built, so a bad range never
/// pulls entropy from the operating system.
pub fn run<W: io::Write + ?Sized>(
    options: &FillOptions,
    mode: SumMode,
    out: &mut W,
) -> Result<u64, Error> {
    options.validate()?;
    let mut rng = options.rng();
    run_with_rng(options, mode, &mut rng, out)
}

pub fn run_with_rng<R: Rng, W: io::Write + ?Sized>(
    options: &FillOptions,
    mode: SumMode,
    rng: &mut R,
    out: &mut W,
) -> Result<u64, Error> {
    let values = fill_array(options, rng)?;
    let total = sum_values(&values, mode)?;
    log::info!("Accumulated {} elements into {total}", values.len());
    report(out, total)?;
    Ok(total)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::mock::StepRng;
    use test_log::test;

    fn run_to_string(options: &FillOptions, mode: SumMode) -> (u64, String) {
        let mut out = Vec::new();
        let total = run(options, mode, &mut out).unwrap();
        (total, String::from_utf8(out).unwrap())
    }

    #[test]
    fn observed_prints_zero() {
        let (total, printed) = run_to_string(&FillOptions::default(), SumMode::Observed);
        assert_eq!(total, 0);
        assert_eq!(printed, "0\n");
    }

    #[test]
    fn intended_sum_within_bounds() {
        let options = FillOptions {
            seed: Some(2024),
            ..Default::default()
        };
        let (total, printed) = run_to_string(&options, SumMode::Intended);
        assert!(options.sum_bounds().unwrap().contains(&total));
        assert_eq!(printed, format!("{total}\n"));
    }

    #[test]
    fn intended_is_deterministic_for_a_seed() {
        let options = FillOptions {
            seed: Some(99),
            ..Default::default()
        };
        let (first, _) = run_to_string(&options, SumMode::Intended);
        let (second, _) = run_to_string(&options, SumMode::Intended);
        assert_eq!(first, second);

        let values = fill_array(&options, &mut options.rng()).unwrap();
        let expected: u64 = values.iter().map(|&v| u64::from(v)).sum();
        assert_eq!(first, expected);
    }

    #[test]
    fn all_ones_and_all_thousands() {
        for (value, expected) in [(1, "10001\n"), (1000, "10001000\n")] {
            let options = FillOptions {
                min: value,
                max: value,
                ..Default::default()
            };
            let (_, printed) = run_to_string(&options, SumMode::Intended);
            assert_eq!(printed, expected);
        }
    }

    #[test]
    fn caller_supplied_generator() {
        let options = FillOptions {
            len: 4,
            min: 5,
            max: 5,
            seed: None,
        };
        let mut rng = StepRng::new(0, 1);
        let mut out = Vec::new();
        let total = run_with_rng(&options, SumMode::Intended, &mut rng, &mut out).unwrap();
        assert_eq!(total, 20);
        assert_eq!(out, b"20\n");
    }

    #[test]
    fn invalid_range_writes_nothing() {
        let options = FillOptions {
            min: 2,
            max: 1,
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = run(&options, SumMode::Observed, &mut out).unwrap_err();
        assert_eq!(
            err.to_string(),
            "empty value range: minimum 2 is larger than maximum 1"
        );
        assert!(out.is_empty());
    }
}
