//! The discrete grid of parameter values that the posterior is evaluated on.

/// Returns 'size' points that are evenly spaced over [0, 1]. Both endpoints
/// are included when there are at least two points, and a single point grid
/// is placed at zero.
pub fn linspace(size: usize) -> Vec<f64> {
    if size < 2 {
        return vec![0.; size];
    }

    let last = (size - 1) as f64;
    let mut grid: Vec<f64> = (0..size).map(|i| i as f64 / last).collect();

    // Pin the end point so that rounding never moves it away from one.
    grid[size - 1] = 1.;
    grid
}
