//! Upper and lower bridges between two lexicographically separated hulls.
//!
//! Both walks keep the classic two-phase shape: slide the index on one hull until it
//! is locally tangent, then slide the other; repeat while the second index moved.
//!
//! Collinear ties move only when the next vertex lies farther along the candidate
//! line. That keeps the walks finite on 1- and 2-vertex hulls (where `i + 1` and
//! `i − 1` wrap onto each other) and puts the bridge endpoints on the outermost of
//! any collinear vertices.
//!
//! On separated input each index moves monotonically, at most once around its hull.
//! A step budget of twice that stops the walk on overlapping (unsorted) input.

use std::cmp::Ordering;

use super::orient::turn;
use super::types::{lex_cmp, Point, Tangent};

#[inline]
fn next(i: usize, n: usize) -> usize {
    (i + 1) % n
}

/// Backward step with a non-negative result.
#[inline]
fn prev(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

/// Index of the lexicographically greatest (rightmost, then topmost) vertex.
fn rightmost(hull: &[Point]) -> usize {
    let mut best = 0usize;
    for (i, p) in hull.iter().enumerate().skip(1) {
        if lex_cmp(p, &hull[best]) == Ordering::Greater {
            best = i;
        }
    }
    best
}

/// Index of the lexicographically smallest (leftmost, then lowest) vertex.
fn leftmost(hull: &[Point]) -> usize {
    let mut best = 0usize;
    for (i, p) in hull.iter().enumerate().skip(1) {
        if lex_cmp(p, &hull[best]) == Ordering::Less {
            best = i;
        }
    }
    best
}

/// Consume one step; false once the budget is exhausted.
#[inline]
fn spend(budget: &mut usize) -> bool {
    if *budget == 0 {
        tracing::warn!("tangent walk exceeded its step budget; input not separated");
        return false;
    }
    *budget -= 1;
    true
}

/// Should the walk move from `cur` to `cand`, seen from the fixed endpoint `pivot`?
///
/// `wanted` is the sign of the turn `pivot → cur → cand` that means `cand` is further
/// out (−1 for clockwise, +1 for counter-clockwise). On a collinear triple the walk
/// moves only if `cand` is farther from `pivot` than `cur`.
#[inline]
fn should_step(pivot: Point, cur: Point, cand: Point, wanted: f64) -> bool {
    let t = turn(pivot, cur, cand) * wanted;
    if t > 0.0 {
        return true;
    }
    if t < 0.0 {
        return false;
    }
    (cand - cur).dot(&(cur - pivot)) > 0.0
}

/// Upper bridge from left hull `a` to right hull `b` (both CCW, non-empty, every
/// vertex of `a` lexicographically before every vertex of `b`).
///
/// Walks `a` forward (counter-clockwise, up its right side) and `b` backward
/// (clockwise, up its left side).
pub fn upper_tangent(a: &[Point], b: &[Point]) -> Tangent {
    let (n1, n2) = (a.len(), b.len());
    let mut ia = rightmost(a);
    let mut ib = leftmost(b);
    let mut budget = 2 * (n1 + n2) + 4;
    let mut done = false;
    'walk: while !done {
        done = true;
        while should_step(b[ib], a[ia], a[next(ia, n1)], -1.0) {
            if !spend(&mut budget) {
                break 'walk;
            }
            ia = next(ia, n1);
        }
        while should_step(a[ia], b[ib], b[prev(ib, n2)], 1.0) {
            if !spend(&mut budget) {
                break 'walk;
            }
            ib = prev(ib, n2);
            done = false;
        }
    }
    Tangent { a: ia, b: ib }
}

/// Lower bridge from left hull `a` to right hull `b`; mirror of [`upper_tangent`].
///
/// Walks `b` forward (counter-clockwise, down its left side) and `a` backward
/// (clockwise, down its right side).
pub fn lower_tangent(a: &[Point], b: &[Point]) -> Tangent {
    let (n1, n2) = (a.len(), b.len());
    let mut ia = rightmost(a);
    let mut ib = leftmost(b);
    let mut budget = 2 * (n1 + n2) + 4;
    let mut done = false;
    'walk: while !done {
        done = true;
        while should_step(a[ia], b[ib], b[next(ib, n2)], -1.0) {
            if !spend(&mut budget) {
                break 'walk;
            }
            ib = next(ib, n2);
        }
        while should_step(b[ib], a[ia], a[prev(ia, n1)], 1.0) {
            if !spend(&mut budget) {
                break 'walk;
            }
            ia = prev(ia, n1);
            done = false;
        }
    }
    Tangent { a: ia, b: ib }
}
