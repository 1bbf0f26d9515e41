use crate::meat::Meat;

/// Flat minimum share every active meat receives up front, as a fraction
/// of the total weight. The floor is per meat, not divided among them.
const MIN_SHARE_FRACTION: f64 = 0.10;

/// Weight poured per refinement step, as a fraction of the total weight.
const STEP_FRACTION: f64 = 0.01;

/// Absolute tolerance, used both for "remaining weight is used up" and for
/// "achieved fat is close enough to the target".
const TOLERANCE: f64 = 0.01;

/// Safety cap on refinement steps. With a 1% step the remaining weight
/// drains in under 100 iterations, so the cap never binds on valid input.
const MAX_ITERATIONS: u32 = 1000;

/// Outcome of one allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationResult {
    /// Grams per meat, same length and order as the input slice. Every
    /// entry is at least the floor share; none is negative.
    pub portions: Vec<f64>,
    /// Weighted average fat of the final portions, in percent. The
    /// divisor is the requested total weight, not the portion sum.
    pub achieved_fat: f64,
    /// Whether the target lies within [min fat, max fat] of the given
    /// meats. Advisory only; a best-effort split is returned either way.
    pub feasible: bool,
}

/// Splits `total_weight` grams across the given meats so that the blend's
/// weighted-average fat content approaches `target_fat` percent.
///
/// Every meat is seeded with a flat floor of 10% of the total weight. The
/// rest is then poured one step (1% of the total) at a time onto whichever
/// meat pulls the average hardest in the needed direction: the fattest
/// candidate while the mix is too lean, the leanest while it is too fat.
/// Ties go to the meat listed first. Refinement stops once the average is
/// within 0.01 percentage points of the target, the pourable weight is
/// used up, or no candidate can move the average any closer.
///
/// Known boundary: with more than ten meats the floors alone exceed the
/// total weight, the loop never runs, and the portion sum overshoots the
/// total. That behavior is kept as-is rather than renormalized. The early
/// convergence exit can likewise leave part of the weight unallocated.
///
/// Pure function over its inputs: no mutation, no retained state, and
/// identical inputs produce identical output.
///
/// # Arguments
/// * `meats`: the active meats, already filtered by the caller.
/// * `total_weight`: target combined mass in grams, expected > 0.
/// * `target_fat`: desired weighted-average fat percentage.
pub fn allocate(meats: &[Meat], total_weight: f64, target_fat: f64) -> AllocationResult {
    let (min_fat, max_fat) = fat_range(meats);
    let feasible = target_fat >= min_fat && target_fat <= max_fat;

    let min_share = MIN_SHARE_FRACTION * total_weight;
    let mut portions = vec![min_share; meats.len()];
    let mut remaining = total_weight - min_share * meats.len() as f64;

    for _ in 0..MAX_ITERATIONS {
        if remaining <= TOLERANCE {
            break;
        }
        let achieved = weighted_fat(meats, &portions, total_weight);
        let diff = target_fat - achieved;
        if diff.abs() < TOLERANCE {
            break;
        }
        let Some(best) = pick_candidate(meats, achieved, diff > 0.0) else {
            // Nothing can move the average any closer; in practice this is
            // how an infeasible target plays out.
            break;
        };
        let step = remaining.min(STEP_FRACTION * total_weight);
        portions[best] += step;
        remaining -= step;
    }

    let achieved_fat = weighted_fat(meats, &portions, total_weight);
    AllocationResult {
        portions,
        achieved_fat,
        feasible,
    }
}

/// Smallest and largest fat percentage across the given meats. This is the
/// range a blend of them can reach, and what the feasibility check and the
/// out-of-reach warning are based on.
pub fn fat_range(meats: &[Meat]) -> (f64, f64) {
    let min = meats.iter().map(|m| m.fat).fold(f64::INFINITY, f64::min);
    let max = meats.iter().map(|m| m.fat).fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn weighted_fat(meats: &[Meat], portions: &[f64], total_weight: f64) -> f64 {
    let fat_mass: f64 = meats
        .iter()
        .zip(portions)
        .map(|(meat, portion)| portion * meat.fat)
        .sum();
    fat_mass / total_weight
}

/// The single meat the next step goes to: among the meats on the needed
/// side of the current average, the fattest when raising and the leanest
/// when lowering. Strict comparisons keep ties on the first-listed meat.
fn pick_candidate(meats: &[Meat], achieved: f64, raise: bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, meat) in meats.iter().enumerate() {
        let qualifies = if raise {
            meat.fat > achieved
        } else {
            meat.fat < achieved
        };
        if !qualifies {
            continue;
        }
        best = match best {
            None => Some(idx),
            Some(current) => {
                let beats_current = if raise {
                    meat.fat > meats[current].fat
                } else {
                    meat.fat < meats[current].fat
                };
                if beats_current {
                    Some(idx)
                } else {
                    Some(current)
                }
            }
        };
    }
    best
}
