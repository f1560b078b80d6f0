//! Simplified Shallue-van de Woestijne-Ulas method.

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{Field, One, Zero};
use ark_std::vec::Vec;

use super::MapToCurve;
use crate::{
    Error,
    field::{Sgn0, cmov, inv0, is_square, sgn0, sqrt_ratio},
};

/// Rational maps pushing points from an isogenous domain curve onto `P`.
///
/// Coefficient slices are in ascending powers of the domain x-coordinate.
/// Inputs mapping to a denominator root are sent to the identity.
#[derive(Clone, Debug)]
pub struct Isogeny<P: SWCurveConfig> {
    pub x_num: Vec<P::BaseField>,
    pub x_den: Vec<P::BaseField>,
    pub y_num: Vec<P::BaseField>,
    pub y_den: Vec<P::BaseField>,
}

impl<P: SWCurveConfig> Isogeny<P> {
    fn eval(coeffs: &[P::BaseField], x: P::BaseField) -> P::BaseField {
        coeffs
            .iter()
            .rev()
            .fold(P::BaseField::zero(), |acc, c| acc * x + c)
    }

    /// Evaluate the isogeny at a finite domain point `(x, y)`.
    pub fn push(&self, x: P::BaseField, y: P::BaseField) -> Affine<P> {
        let x_den = Self::eval(&self.x_den, x);
        let y_den = Self::eval(&self.y_den, x);
        if x_den.is_zero() || y_den.is_zero() {
            return Affine::identity();
        }
        let px = Self::eval(&self.x_num, x) * inv0(x_den);
        let py = y * Self::eval(&self.y_num, x) * inv0(y_den);
        let point = Affine::new_unchecked(px, py);
        debug_assert!(point.is_on_curve());
        point
    }
}

/// Simplified SWU map for Weierstrass curves `y² = x³ + A·x + B` with
/// `A, B ≠ 0`.
///
/// When the target curve itself has `A = 0` or `B = 0` the map runs on an
/// isogenous domain curve and pushes the result through the isogeny
/// ([`Sswu::new_isogenous`]); domain points only ever exist as coordinate
/// pairs.
#[derive(Clone, Debug)]
pub struct Sswu<P: SWCurveConfig> {
    a: P::BaseField,
    b: P::BaseField,
    z: P::BaseField,
    sgn0: Sgn0,
    iso: Option<Isogeny<P>>,
}

impl<P: SWCurveConfig> Sswu<P> {
    /// Map straight onto the target curve, using its own coefficients.
    pub fn new(z: P::BaseField, sgn0: Sgn0) -> Result<Self, Error> {
        Self::with_domain(P::COEFF_A, P::COEFF_B, z, sgn0, None)
    }

    /// Map onto the isogenous domain curve `y² = x³ + a·x + b`, then push
    /// points through `iso` onto the target curve.
    pub fn new_isogenous(
        a: P::BaseField,
        b: P::BaseField,
        z: P::BaseField,
        sgn0: Sgn0,
        iso: Isogeny<P>,
    ) -> Result<Self, Error> {
        Self::with_domain(a, b, z, sgn0, Some(iso))
    }

    fn with_domain(
        a: P::BaseField,
        b: P::BaseField,
        z: P::BaseField,
        sgn0: Sgn0,
        iso: Option<Isogeny<P>>,
    ) -> Result<Self, Error> {
        let map = Self { a, b, z, sgn0, iso };
        // A ≠ 0, B ≠ 0, Z non-square, Z ≠ -1, g(B / (Z·A)) square
        let valid = !a.is_zero()
            && !b.is_zero()
            && !is_square(&z)
            && z != -P::BaseField::one()
            && is_square(&map.g(b * inv0(z * a)));
        valid.then_some(map).ok_or(Error::MapPreconditionFailure)
    }

    /// `g(x) = x³ + A·x + B` on the domain curve.
    fn g(&self, x: P::BaseField) -> P::BaseField {
        (x.square() + self.a) * x + self.b
    }

    /// Raw map onto the domain curve, as coordinates.
    fn map_to_domain(&self, u: P::BaseField) -> (P::BaseField, P::BaseField) {
        let tv1 = self.z * u.square();
        let mut tv2 = tv1.square() + tv1;
        let tv3 = self.b * (tv2 + P::BaseField::one());
        let tv4 = self.a * cmov(self.z, -tv2, !tv2.is_zero());
        let tv6 = tv4.square() * tv4;
        tv2 = (tv3.square() + self.a * tv4.square()) * tv3 + self.b * tv6;
        let mut x = tv1 * tv3;
        let (gx1_square, y1) = sqrt_ratio(&tv2, &tv6, &self.z);
        let mut y = tv1 * u * y1;
        x = cmov(x, tv3, gx1_square);
        y = cmov(y, y1, gx1_square);
        let e1 = sgn0(self.sgn0, &u) == sgn0(self.sgn0, &y);
        y = cmov(-y, y, e1);
        x *= inv0(tv4);
        (x, y)
    }
}

impl<P: SWCurveConfig> MapToCurve<Affine<P>> for Sswu<P> {
    fn map_to_curve(&self, u: P::BaseField) -> Affine<P> {
        let (x, y) = self.map_to_domain(u);
        match &self.iso {
            Some(iso) => iso.push(x, y),
            None => {
                let point = Affine::new_unchecked(x, y);
                debug_assert!(point.is_on_curve());
                point
            }
        }
    }
}
