use grid_posterior::observations::Observations;
use grid_posterior::{
    estimate, estimate_default, estimate_with_prior, Posterior, PosteriorError,
    Prior, DEFAULT_GRID_SIZE,
};

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-12, "{:?} != {:?}", actual, expected);
    }
}

fn total(posterior: &Posterior) -> f64 {
    posterior.posterior().iter().sum()
}

#[test]
fn test_worked_example() {
    let post = estimate("uniform", "WWW", 5).unwrap();
    assert_close(post.grid(), &[0., 0.25, 0.5, 0.75, 1.]);
    assert_close(post.likelihood(), &[0., 0.015625, 0.125, 0.421875, 1.]);
    assert_close(post.prior(), &[1.; 5]);
    assert!((post.evidence() - 1.5625).abs() < 1e-12);
    assert_close(post.posterior(), &[0., 0.01, 0.08, 0.27, 0.64]);
    assert_eq!(post.map(), Some(1.));
    assert!((post.mean().unwrap() - 0.885).abs() < 1e-12);
}

#[test]
fn test_default_grid() {
    let post = estimate_default("uniform", "WWWL").unwrap();
    assert_eq!(post.grid().len(), DEFAULT_GRID_SIZE);
    assert_eq!(post.prior_name(), "uniform");
    assert_eq!(post.observations().successes(), 3);
    assert_eq!(post.observations().failures(), 1);
    assert!((total(&post) - 1.).abs() < 1e-9);
}

#[test]
fn test_exercises_sum_to_one() {
    for prior in ["uniform", "step"] {
        for data in ["WWW", "WWWL", "LWWLWWW"] {
            let post = estimate(prior, data, DEFAULT_GRID_SIZE).unwrap();
            assert!(!post.is_degenerate());
            assert!((total(&post) - 1.).abs() < 1e-9);
            assert_eq!(post.points().count(), DEFAULT_GRID_SIZE);
        }
    }
}

#[test]
fn test_no_data_is_uniform() {
    for size in [1, 2, 5, 20, 33] {
        let post = estimate("uniform", "", size).unwrap();
        for val in post.posterior() {
            assert!((val - 1. / size as f64).abs() < 1e-12);
        }
    }
}

#[test]
fn test_step_prior_zeroes_low_half() {
    for data in ["", "WWW", "WWWL", "LWWLWWW", "LLLW"] {
        let post = estimate("step", data, 20).unwrap();
        for (p, mass) in post.points() {
            if p < 0.5 {
                assert_eq!(mass, 0.);
            }
        }
        assert!((total(&post) - 1.).abs() < 1e-9);
    }
}

#[test]
fn test_all_successes_is_monotonic() {
    let post = estimate("uniform", "WWW", 20).unwrap();
    for pair in post.posterior().windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    assert_eq!(post.posterior()[0], 0.);
    assert_eq!(post.map(), Some(1.));
}

#[test]
fn test_invalid_prior() {
    let res = estimate("gaussian", "WWW", DEFAULT_GRID_SIZE);
    assert_eq!(
        res.unwrap_err(),
        PosteriorError::InvalidPriorKind(String::from("gaussian"))
    );
}

#[test]
fn test_empty_grid() {
    assert_eq!(
        estimate("uniform", "WWW", 0).unwrap_err(),
        PosteriorError::EmptyGrid
    );
}

#[test]
fn test_unknown_symbols_are_ignored() {
    let noisy = estimate("uniform", "W-W?Wx", 10).unwrap();
    let clean = estimate("uniform", "WWW", 10).unwrap();
    assert_eq!(noisy.posterior(), clean.posterior());
}

#[test]
fn test_step_with_failures() {
    // The likelihood (1-p)^3 is still positive at 0.5 and 0.75.
    let post = estimate("step", "LLL", 5).unwrap();
    assert!(!post.is_degenerate());
    assert!((post.evidence() - 0.140625).abs() < 1e-12);
    assert_close(post.posterior(), &[0., 0., 8. / 9., 1. / 9., 0.]);
    assert_eq!(post.map(), Some(0.5));
}

#[test]
fn test_degenerate_posterior() {
    // The step prior only keeps p=1, where "LLL" is impossible.
    let post = estimate("step", "LLL", 2).unwrap();
    assert!(post.is_degenerate());
    assert_eq!(post.evidence(), 0.);
    assert!(post.posterior().iter().all(|v| v.is_nan()));
    assert_eq!(post.map(), None);
    assert_eq!(post.mean(), None);

    // A single point grid sits at zero, where a success is impossible.
    let post = estimate("uniform", "W", 1).unwrap();
    assert!(post.is_degenerate());
}

#[test]
fn test_random_observations() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let symbols = ['W', 'L', 'x'];
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let len = rng.gen_range(0..30);
        let data: String = (0..len)
            .map(|_| symbols[rng.gen_range(0..symbols.len())])
            .collect();
        // Interior points keep the likelihood positive.
        let size = rng.gen_range(3..50);
        let post = estimate("uniform", &data, size).unwrap();
        assert!((total(&post) - 1.).abs() < 1e-9, "{} {}", data, size);
        assert!(post.posterior().iter().all(|v| *v >= 0.));
    }
}

#[test]
fn test_map_tracks_the_source() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Bernoulli, Distribution};

    let mut rng = StdRng::seed_from_u64(11);
    let coin = Bernoulli::new(0.7).unwrap();
    let data: String = (0..200)
        .map(|_| if coin.sample(&mut rng) { 'W' } else { 'L' })
        .collect();

    let post = estimate("uniform", &data, 101).unwrap();
    let map = post.map().unwrap();
    assert!((map - 0.7).abs() < 0.15, "MAP is {}", map);
    assert!((post.mean().unwrap() - 0.7).abs() < 0.15);
}

/// A prior that favors values close to one.
struct Linear;

impl Prior for Linear {
    fn weight(&self, p: f64) -> f64 {
        p
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[test]
fn test_custom_prior() {
    let obs = Observations::parse("");
    let post = estimate_with_prior(&Linear, &obs, 5).unwrap();
    assert_eq!(post.prior_name(), "linear");
    assert_close(post.posterior(), &[0., 0.1, 0.2, 0.3, 0.4]);
}
