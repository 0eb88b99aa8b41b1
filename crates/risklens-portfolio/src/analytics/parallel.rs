//! Parallel processing utilities for the scoring stages.
//!
//! The three post-aggregation stages only read the shared state, so they can
//! run concurrently. Uses rayon when the `parallel` feature is enabled.

use crate::types::HealthConfig;

/// Runs three independent closures, conditionally on the rayon pool.
///
/// Uses nested `rayon::join` when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
///
/// Otherwise the closures run in order on the calling thread. The result
/// tuple is in argument order either way.
///
/// # Example
///
/// ```ignore
/// let (d, r, b) = maybe_parallel_join3(&config, || diversify(), || risk(), || rebalance());
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_join3<A, B, C, FA, FB, FC>(
    config: &HealthConfig,
    fa: FA,
    fb: FB,
    fc: FC,
) -> (A, B, C)
where
    A: Send,
    B: Send,
    C: Send,
    FA: FnOnce() -> A + Send,
    FB: FnOnce() -> B + Send,
    FC: FnOnce() -> C + Send,
{
    #[cfg(feature = "parallel")]
    {
        if config.should_parallelize() {
            let (a, (b, c)) = rayon::join(fa, || rayon::join(fb, fc));
            return (a, b, c);
        }
    }

    (fa(), fb(), fc())
}
