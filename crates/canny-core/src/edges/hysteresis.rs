use ndarray::{Array2, ArrayView2, Zip};
use tracing::trace;

use crate::consts::MAX;
use crate::filters::convolve::correlate_same;
use crate::kernels::KernelBank;

/// Strong/weak classification of a raw edge map plus the weak pixels linked
/// to strong ones.
#[derive(Clone, Debug)]
pub struct Hysteresis {
    /// 1 where `raw >= max_rate`.
    pub strong: Array2<f32>,
    /// 1 where `min_rate <= raw < max_rate`.
    pub weak: Array2<f32>,
    /// Weak pixels within `rounds` 8-connected steps of a strong pixel.
    pub support: Array2<f32>,
    /// Rounds actually executed before the support stopped growing.
    pub rounds_run: usize,
}

impl Hysteresis {
    /// `clip(strong + support, 0, MAX)`.
    pub fn edges(&self) -> Array2<f32> {
        Zip::from(&self.strong)
            .and(&self.support)
            .map_collect(|&s, &w| (s + w).clamp(0.0, MAX))
    }
}

/// Classify `raw` and link weak pixels to strong ones with at most `rounds`
/// synchronous propagation passes.
///
/// Each pass spreads support from every strong or already-supported pixel
/// to its 8 neighbors and keeps only the weak ones. After `r` passes a weak
/// pixel is supported iff a path through weak pixels of at most `r` steps
/// joins it to a strong pixel; anything farther is dropped even when it sits
/// on a continuous weak ridge.
///
/// Callers must ensure `min_rate <= max_rate`.
pub fn hysteresis(
    raw: ArrayView2<f32>,
    kernels: &KernelBank,
    min_rate: f32,
    max_rate: f32,
    rounds: usize,
) -> Hysteresis {
    let strong = raw.mapv(|v| if v >= max_rate { 1.0 } else { 0.0 });
    let weak = raw.mapv(|v| if v >= min_rate && v < max_rate { 1.0 } else { 0.0 });

    let mut support = Array2::<f32>::zeros(raw.dim());
    let mut rounds_run = 0;
    let weak_count = weak.iter().filter(|&&v| v > 0.0).count();

    if weak_count > 0 {
        for round in 0..rounds {
            let seeds = &strong + &support;
            let reach = correlate_same(seeds.view(), kernels.propagation().view());
            let next = Zip::from(&reach)
                .and(&weak)
                .map_collect(|&n, &w| if n > 0.0 { w } else { 0.0 });

            rounds_run = round + 1;
            let grew = next != support;
            support = next;
            if !grew {
                trace!(round = rounds_run, "Hysteresis support converged");
                break;
            }
        }
    }

    Hysteresis {
        strong,
        weak,
        support,
        rounds_run,
    }
}
