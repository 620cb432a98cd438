//! Seeded train/test partitioning.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rulestab_core::errors::TrainingError;

use super::Dataset;

/// Shuffle row indices with `seed` and hold out `ceil(test_fraction * len)`
/// of them for testing. The same seed always yields the same partition.
///
/// Fails when either side would be empty.
pub fn train_test_split(
    dataset: &Dataset,
    test_fraction: f64,
    seed: u64,
) -> Result<(Dataset, Dataset), TrainingError> {
    let len = dataset.len();
    let n_test = ((test_fraction * len as f64).ceil() as usize).min(len);
    let n_train = len - n_test;
    if n_test == 0 || n_train == 0 {
        return Err(TrainingError::DegenerateSplit {
            train: n_train,
            test: n_test,
        });
    }

    let mut indices: Vec<usize> = (0..len).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_ix, train_ix) = indices.split_at(n_test);
    Ok((dataset.subset(train_ix), dataset.subset(test_ix)))
}
