// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles rows with a seeded RNG and cuts them into two sets:
//   - Test set:  the first ceil(test_size * n) shuffled rows
//   - Train set: everything after the cut
//
// The shuffle is seeded with SPLIT_SEED, so re-running the job
// on unchanged input writes byte-identical train/test files.
// ChaCha8Rng is used instead of StdRng because its output stream
// is fixed across platforms and rand versions.
//
// Both partitions must be non-empty. With 2 rows and test_size
// 0.5 the result is one train row and one test row; with 1 row
// no split is possible and InsufficientData is returned.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: Rust Book §8 (Vectors)
//            rand / rand_chacha crate documentation

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::error::IngestError;
use crate::domain::table::LabeledTable;

/// Fixed seed for every train/test split.
pub const SPLIT_SEED: u64 = 42;

/// Compute `(train_len, test_len)` for `total` rows without touching any data.
///
/// The test side is rounded up, the train side gets the rest.
pub fn split_sizes(total: usize, test_fraction: f64) -> Result<(usize, usize), IngestError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(IngestError::config(format!(
            "test_size must be in the open interval (0, 1), got {test_fraction}"
        )));
    }

    let n_test  = ((total as f64) * test_fraction).ceil() as usize;
    let n_train = total.saturating_sub(n_test);

    if total < 2 || n_test == 0 || n_train == 0 {
        return Err(IngestError::InsufficientData { rows: total, test_size: test_fraction });
    }
    Ok((n_train, n_test))
}

/// Shuffle `samples` with `seed` and split into (train, test).
///
/// # Arguments
/// * `samples`       - All rows (consumed by this function)
/// * `test_fraction` - Proportion for testing, e.g. 0.2 = 20%
/// * `seed`          - RNG seed; same seed, same assignment
pub fn split_train_test<T>(
    mut samples:   Vec<T>,
    test_fraction: f64,
    seed:          u64,
) -> Result<(Vec<T>, Vec<T>), IngestError> {
    let total          = samples.len();
    let (_, n_test)    = split_sizes(total, test_fraction)?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    // After this: samples = test [0..n_test], train = [n_test..total]
    let train = samples.split_off(n_test);
    let test  = samples;

    tracing::debug!(
        "Dataset split: {} train, {} test (test_size={}, seed={})",
        train.len(),
        test.len(),
        test_fraction,
        seed,
    );

    Ok((train, test))
}

/// Split a preprocessed table into (train, test) tables with the same columns.
pub fn split_dataset(
    dataset:       LabeledTable,
    test_fraction: f64,
    seed:          u64,
) -> Result<(LabeledTable, LabeledTable), IngestError> {
    let template = dataset.with_rows(Vec::new());
    match split_train_test(dataset.into_rows(), test_fraction, seed) {
        Ok((train, test)) => Ok((template.with_rows(train), template.with_rows(test))),
        Err(e) => {
            tracing::error!(kind = %e.kind(), "Failed to split the dataset: {}", e);
            Err(e)
        }
    }
}
