use super::tangent::{lower_tangent, upper_tangent};
use super::types::Point;

/// Stitches two CCW hulls (left `a`, right `b`) into the CCW hull of their union.
///
/// Walks `a` from the upper bridge vertex forward to the lower one, then `b` from the
/// lower bridge vertex forward to the upper one. Either input may be empty.
pub fn merge_hulls(a: &[Point], b: &[Point]) -> Vec<Point> {
    if a.is_empty() {
        return b.to_vec();
    }
    if b.is_empty() {
        return a.to_vec();
    }
    let up = upper_tangent(a, b);
    let lo = lower_tangent(a, b);
    tracing::trace!(
        left = a.len(),
        right = b.len(),
        upper = ?(up.a, up.b),
        lower = ?(lo.a, lo.b),
        "merge"
    );

    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut i = up.a;
    out.push(a[i]);
    while i != lo.a {
        i = (i + 1) % a.len();
        out.push(a[i]);
    }
    let mut j = lo.b;
    out.push(b[j]);
    while j != up.b {
        j = (j + 1) % b.len();
        out.push(b[j]);
    }
    out
}
