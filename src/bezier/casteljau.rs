use num::cast;
use smallvec::SmallVec;

use crate::core::error::{invalid_argument, CurveResult};
use crate::core::geometry::Affine;
use crate::core::math::lerp;

// Control polygons are small in practice (cubics, the occasional quintic),
// so the working copy stays on the stack in the common case.
type Scratch<P> = SmallVec<[P; 8]>;

/// Evaluate the curve at parameter `t` by de Casteljau reduction.
///
/// An n-point polygon is reduced over n-1 rounds, each round interpolating
/// every adjacent pair at `t`. The caller's polygon is never touched; the
/// reduction runs on a scratch copy. A single point evaluates to itself.
pub fn eval<S, P>(points: &[P], t: S) -> CurveResult<P>
where
    S: Copy,
    P: Affine<S>,
{
    if points.is_empty() {
        return invalid_argument("eval: empty control polygon".to_owned());
    }

    let mut work: Scratch<P> = SmallVec::from_slice(points);
    let n = work.len();

    for round in 1..n {
        for i in 0..n - round {
            work[i] = lerp(t, work[i], work[i + 1]);
        }
    }

    Ok(work[0])
}

/// Evaluate position and first derivative at `t` in one reduction.
///
/// The reduction is stopped one round early; the two surviving points span
/// the tangent (scaled by the degree) and one more interpolation of them
/// gives the position. A single-point polygon has the zero displacement as
/// its derivative.
pub fn eval_deriv<S, P>(points: &[P], t: S) -> CurveResult<(P, P::Diff)>
where
    S: num::Float,
    P: Affine<S>,
{
    if points.is_empty() {
        return invalid_argument("eval_deriv: empty control polygon".to_owned());
    }

    let n = points.len();
    if n == 1 {
        return Ok((points[0], points[0] - points[0]));
    }

    let mut work: Scratch<P> = SmallVec::from_slice(points);
    for round in 1..n - 1 {
        for i in 0..n - round {
            work[i] = lerp(t, work[i], work[i + 1]);
        }
    }

    let degree = cast::<usize, S>(n - 1).unwrap();
    let deriv = (work[1] - work[0]) * degree;

    Ok((lerp(t, work[0], work[1]), deriv))
}

/// The blossom (multi-affine polar form) of the polygon: the de Casteljau
/// reduction with round `r` interpolating at `params[r - 1]` instead of a
/// single fixed parameter.
///
/// `params` must hold exactly one parameter per round, i.e.
/// `points.len() - 1` of them. The blossom is symmetric in its parameters;
/// that property is relied on by the subdivision code but nothing here
/// enforces it.
pub fn blossom<S, P>(points: &[P], params: &[S]) -> CurveResult<P>
where
    S: Copy,
    P: Affine<S>,
{
    if points.is_empty() {
        return invalid_argument("blossom: empty control polygon".to_owned());
    }
    if params.len() != points.len() - 1 {
        return invalid_argument(format!(
            "blossom: {} control points require {} parameters, got {}",
            points.len(),
            points.len() - 1,
            params.len()
        ));
    }

    let mut work: Scratch<P> = SmallVec::from_slice(points);
    let n = work.len();

    for round in 1..n {
        let t = params[round - 1];
        for i in 0..n - round {
            work[i] = lerp(t, work[i], work[i + 1]);
        }
    }

    Ok(work[0])
}

/// The `idx`-th control point of the polygon reparameterized onto
/// `[t0, t1]`: equivalent to [`blossom`] with `n - 1 - idx` copies of `t0`
/// followed by `idx` copies of `t1`, run here as a two-phase fixed
/// parameter reduction. `idx` must be in `0..points.len()`.
///
/// [`crate::bezier::subdivide::subdivide_all`] produces all indices at
/// once, sharing the interpolation work between them.
pub fn subdivide_at<S, P>(points: &[P], idx: usize, t0: S, t1: S) -> CurveResult<P>
where
    S: Copy,
    P: Affine<S>,
{
    if points.is_empty() {
        return invalid_argument("subdivide_at: empty control polygon".to_owned());
    }
    let n = points.len();
    if idx >= n {
        return invalid_argument(format!(
            "subdivide_at: index {} out of range for {} control points",
            idx, n
        ));
    }

    let mut work: Scratch<P> = SmallVec::from_slice(points);

    // Rounds 1..n-idx interpolate at t0, the remaining idx rounds at t1.
    for round in 1..n {
        let t = if round < n - idx { t0 } else { t1 };
        for i in 0..n - round {
            work[i] = lerp(t, work[i], work[i + 1]);
        }
    }

    Ok(work[0])
}
