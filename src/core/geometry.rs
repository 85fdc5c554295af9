use std::ops::{Add, Mul, Sub};

/// Capability contract for control points: the expression
/// `p + s * (q - p)` must be well formed.
///
/// Subtracting two points yields a displacement of type [`Affine::Diff`],
/// which scales by `S` and adds back onto a point. The blanket impl picks
/// the contract up for any type with the right operators, so scalars
/// (`f32`, `f64`) and point/vector pairs in the usual
/// `Point - Point -> Vector` style all qualify without any registration.
pub trait Affine<S>:
    Copy + Sub<Self, Output = <Self as Affine<S>>::Diff> + Add<<Self as Affine<S>>::Diff, Output = Self>
{
    type Diff: Mul<S, Output = Self::Diff>;
}

impl<S, P, D> Affine<S> for P
where
    P: Copy + Sub<P, Output = D> + Add<D, Output = P>,
    D: Mul<S, Output = D>,
{
    type Diff = D;
}
