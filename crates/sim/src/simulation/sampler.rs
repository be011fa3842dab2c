//! Sampling with replacement and sample means.

use crate::errors::SimulationError;
use rand::Rng;

/// Draw `sample_size` values uniformly with replacement from `population`
/// and return their arithmetic mean.
///
/// Returns an error for an empty population or a zero sample size.
pub fn sample_mean<R: Rng + ?Sized>(
    population: &[f64],
    sample_size: usize,
    rng: &mut R,
) -> Result<f64, SimulationError> {
    if population.is_empty() {
        return Err(SimulationError::EmptyPopulation);
    }
    if sample_size == 0 {
        return Err(SimulationError::InvalidSampleSize(sample_size));
    }

    let len = population.len();
    let sum: f64 = (0..sample_size)
        .map(|_| population[rng.random_range(0..len)])
        .sum();
    Ok(sum / sample_size as f64)
}

/// Compute `num_simulations` independent sample means.
///
/// Each mean is produced by [`sample_mean`], so the output is identical to
/// calling it `num_simulations` times on the same RNG.
pub fn sample_means<R: Rng + ?Sized>(
    population: &[f64],
    sample_size: usize,
    num_simulations: usize,
    rng: &mut R,
) -> Result<Vec<f64>, SimulationError> {
    let mut means = Vec::with_capacity(num_simulations);
    for _ in 0..num_simulations {
        means.push(sample_mean(population, sample_size, rng)?);
    }
    log::debug!(
        "Drew {} sample means of size {} from {} values",
        means.len(),
        sample_size,
        population.len()
    );
    Ok(means)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_output_length_matches_simulations() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let population: Vec<f64> = (0..100).map(f64::from).collect();
        let means = sample_means(&population, 5, 250, &mut rng).unwrap();
        assert_eq!(means.len(), 250);
    }

    #[test]
    fn test_constant_population_has_constant_means() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let population = vec![3.5; 10];
        let means = sample_means(&population, 7, 100, &mut rng).unwrap();
        assert!(means.iter().all(|&m| m == 3.5));
    }

    #[test]
    fn test_single_draw_returns_population_element() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let population = vec![1.0, 4.0, 9.0, 16.0];
        for _ in 0..50 {
            let m = sample_mean(&population, 1, &mut rng).unwrap();
            assert!(population.contains(&m));
        }
    }

    #[test]
    fn test_means_stay_within_population_bounds() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let population = vec![-2.0, 0.0, 5.0];
        let means = sample_means(&population, 10, 200, &mut rng).unwrap();
        assert!(means.iter().all(|&m| (-2.0..=5.0).contains(&m)));
    }

    #[test]
    fn test_sampling_is_with_replacement() {
        // Two elements, ten draws: without replacement this would be impossible.
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let population = vec![0.0, 1.0];
        let mean = sample_mean(&population, 10, &mut rng).unwrap();
        assert!((0.0..=1.0).contains(&mean));
    }

    #[test]
    fn test_empty_population_is_an_error() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        assert_eq!(
            sample_mean(&[], 3, &mut rng),
            Err(SimulationError::EmptyPopulation)
        );
        assert_eq!(
            sample_means(&[], 3, 100, &mut rng),
            Err(SimulationError::EmptyPopulation)
        );
    }

    #[test]
    fn test_zero_sample_size_is_an_error() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        assert_eq!(
            sample_mean(&[1.0, 2.0], 0, &mut rng),
            Err(SimulationError::InvalidSampleSize(0))
        );
    }

    #[test]
    fn test_same_seed_same_means() {
        let population: Vec<f64> = (0..1000).map(|i| (i as f64).sqrt()).collect();
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(123);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(123);
        assert_eq!(
            sample_means(&population, 30, 500, &mut rng1).unwrap(),
            sample_means(&population, 30, 500, &mut rng2).unwrap()
        );
    }
}
