//! Combining the two per-eye recommendations into one response record.

use crate::catalog;
use crate::types::{EyeShape, Recommendation};

/// Merge the left and right eye recommendations.
///
/// Matching shapes return the shared catalog record verbatim. Differing
/// shapes produce a record where every field holds the left value and the
/// right value joined with " / ", left first, source strings untouched.
/// The merge is not commutative: callers rely on left-then-right order.
pub fn merge(left: EyeShape, right: EyeShape) -> Recommendation {
    let left_rec = catalog::lookup(left);
    if left == right {
        return left_rec.clone();
    }
    let right_rec = catalog::lookup(right);

    Recommendation {
        style: join(&left_rec.style, &right_rec.style),
        mapping: join(&left_rec.mapping, &right_rec.mapping),
        curl: join(&left_rec.curl, &right_rec.curl),
        length: join(&left_rec.length, &right_rec.length),
        notes: join(&left_rec.notes, &right_rec.notes),
    }
}

fn join(left: &str, right: &str) -> String {
    format!("{left} / {right}")
}
