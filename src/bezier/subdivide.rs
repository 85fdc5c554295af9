use crate::bezier::scheme::TriangularScheme;
use crate::core::error::{invalid_argument, CurveResult};
use crate::core::geometry::Affine;
use crate::core::math::lerp;

// One full fixed-parameter pass: fills every remaining column from the
// seeded polygon, leaving the evaluated point in the last column.
fn fill<S, P>(scheme: &mut TriangularScheme<P>, t: S)
where
    S: Copy,
    P: Affine<S>,
{
    let n = scheme.columns();
    for col in 1..n {
        for i in 0..n - col {
            let p = lerp(t, scheme.read(col - 1, i), scheme.read(col - 1, i + 1));
            scheme.append(p);
        }
    }
}

/// Reparameterizes a control polygon so that [0, 1] maps onto the
/// `[t0, t1]` sub-range of the original curve, preserving shape and degree
/// exactly. Output index `k` equals
/// [`subdivide_at(points, k, t0, t1)`](crate::bezier::casteljau::subdivide_at)
/// for every `k`.
///
/// Instead of running one blossom per output, a single triangular scheme
/// is filled at `t0` (its apex is output 0) and then, for each further
/// output `k`, only the tail columns `n-k..n` are rebuilt in place at
/// `t1`. Each tail column is rebuilt forward from the current values of
/// the column to its left, and the untouched prefix still holds the `t0`
/// results the mixed reduction needs, so the partial work of the first
/// pass is shared by every output at the price of quadratic scratch space.
///
/// `t1 < t0` simply reverses orientation and bounds outside [0, 1]
/// extrapolate; neither is rejected. `t0 == t1` collapses every output to
/// the same point.
pub fn subdivide_all<S, P>(points: &[P], t0: S, t1: S) -> CurveResult<Vec<P>>
where
    S: Copy,
    P: Affine<S>,
{
    if points.is_empty() {
        return invalid_argument("subdivide_all: empty control polygon".to_owned());
    }

    let n = points.len();
    let mut scheme = TriangularScheme::new(points);

    // Pass at t0; the apex is now subdivide_at(points, 0, t0, t1).
    fill(&mut scheme, t0);

    let mut out = Vec::with_capacity(n);
    out.push(scheme.last());

    // Output k needs the last k rounds at t1 instead of t0. Rebuild the
    // tail columns in place; columns left of the tail keep their t0
    // values, which is exactly the prefix the k-th mixed reduction needs.
    for k in 1..n {
        for col in n - k..n {
            for i in 0..n - col {
                let p = lerp(t1, scheme.read(col - 1, i), scheme.read(col - 1, i + 1));
                scheme.write(col, i, p);
            }
        }
        out.push(scheme.last());
    }

    Ok(out)
}

/// Splits the polygon at `t` into the control polygons of the `[0, t]` and
/// `[t, 1]` halves.
///
/// Both halves fall out of one fixed-`t` scheme fill: the left polygon
/// walks the column heads, the right one the diagonal back up. Equivalent
/// to `(subdivide_all(points, 0, t), subdivide_all(points, t, 1))` in a
/// single pass.
pub fn split<S, P>(points: &[P], t: S) -> CurveResult<(Vec<P>, Vec<P>)>
where
    S: Copy,
    P: Affine<S>,
{
    if points.is_empty() {
        return invalid_argument("split: empty control polygon".to_owned());
    }

    let n = points.len();
    let mut scheme = TriangularScheme::new(points);
    fill(&mut scheme, t);

    let left = (0..n).map(|j| scheme.read(j, 0)).collect();
    let right = (0..n).map(|j| scheme.read(n - 1 - j, j)).collect();

    Ok((left, right))
}
