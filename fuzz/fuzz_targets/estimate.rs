#![no_main]
use libfuzzer_sys::fuzz_target;

use grid_posterior::estimate;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let size = 1 + data[0] as usize;
    let observations = String::from_utf8_lossy(&data[1..]);

    for prior in ["uniform", "step"] {
        let post = estimate(prior, &observations, size).unwrap();
        assert_eq!(post.grid().len(), size);
        if post.evidence() > f64::MIN_POSITIVE {
            let sum: f64 = post.posterior().iter().sum();
            assert!((sum - 1.).abs() < 1e-6);
        }
    }
});
