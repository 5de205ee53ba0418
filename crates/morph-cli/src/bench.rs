use std::time::Instant;

/// Number of measured runs in benchmark mode.
pub const RUNS: usize = 3;

/// Timing statistics over repeated runs, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct BenchStats {
    /// Mean wall-clock time per run.
    pub mean_ms: f64,
    /// Standard deviation over the runs.
    pub std_ms: f64,
    /// Number of runs measured.
    pub runs: usize,
}

/// Run `f` a fixed number of times and report the last result together with
/// mean and standard deviation of the wall-clock time.
pub fn time_runs<T, E>(mut f: impl FnMut() -> Result<T, E>) -> Result<(T, BenchStats), E> {
    let mut times_ms = Vec::with_capacity(RUNS);

    let start = Instant::now();
    let mut out = f()?;
    times_ms.push(start.elapsed().as_secs_f64() * 1e3);

    for _ in 1..RUNS {
        let start = Instant::now();
        out = f()?;
        times_ms.push(start.elapsed().as_secs_f64() * 1e3);
    }

    let mean_ms = times_ms.iter().sum::<f64>() / times_ms.len() as f64;
    let std_ms = (times_ms
        .iter()
        .map(|t| (t - mean_ms) * (t - mean_ms))
        .sum::<f64>()
        / times_ms.len() as f64)
        .sqrt();

    Ok((
        out,
        BenchStats {
            mean_ms,
            std_ms,
            runs: times_ms.len(),
        },
    ))
}
