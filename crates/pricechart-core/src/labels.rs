// File: crates/pricechart-core/src/labels.rs
// Summary: Greedy, order-dependent vertical de-overlap of series end labels.

/// Minimum vertical distance between two series labels, in pixels.
pub const LABEL_SEPARATION_PX: f32 = 12.0;

/// Resolve label y positions in input order.
///
/// Each candidate starts at its own y. While an already placed label lies closer than
/// `separation`, the candidate moves to `separation` below the first such label (in
/// placement order), then every placement is checked again. Labels only ever move down
/// and there is no lower bound, so dense inputs can run past the plot area.
/// `NaN` candidates never collide and are returned unchanged.
///
/// Positions are tracked in `f64` so a step of `separation` stays representable on very
/// tall surfaces; if a step still cannot move the candidate, it stays where it is.
pub fn place_labels(candidates: &[f32], separation: f32) -> Vec<f32> {
    let sep = separation as f64;
    let mut placed: Vec<f64> = Vec::with_capacity(candidates.len());
    for &candidate in candidates {
        let mut y = candidate as f64;
        while let Some(&blocker) = placed.iter().find(|&&p| (p - y).abs() < sep) {
            let next = blocker + sep;
            if next <= y {
                break;
            }
            y = next;
        }
        placed.push(y);
    }
    placed.into_iter().map(|y| y as f32).collect()
}
