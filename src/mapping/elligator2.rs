//! Elligator 2 method for twisted Edwards curves.

use ark_ec::twisted_edwards::{Affine, MontCurveConfig, TECurveConfig};
use ark_ff::{Field, One, Zero};

use super::MapToCurve;
use crate::{
    Error,
    field::{Sgn0, cmov, inv0, is_square, sgn0},
};

/// Elligator 2 map onto a twisted Edwards curve.
///
/// The interior of the map works on the birationally equivalent Montgomery
/// curve `K·t² = s³ + J·s² + s` (coefficients taken from the curve
/// configuration); the resulting point is carried over by the rational map
/// `(s, t) ↦ (s/t, (s-1)/(s+1))`, with the exceptional inputs of that map
/// sent to the neutral point `(0, 1)`.
#[derive(Clone, Debug)]
pub struct Elligator2<P: TECurveConfig + MontCurveConfig> {
    z: P::BaseField,
    sgn0: Sgn0,
    // c1 = J / K, c2 = 1 / K²
    c1: P::BaseField,
    c2: P::BaseField,
}

impl<P: TECurveConfig + MontCurveConfig> Elligator2<P> {
    /// Build the map with non-square `z`.
    pub fn new(z: P::BaseField, sgn0: Sgn0) -> Result<Self, Error> {
        let j = <P as MontCurveConfig>::COEFF_A;
        let k = <P as MontCurveConfig>::COEFF_B;
        // K ≠ 0, J² ≠ 4 (the Montgomery curve must be non-singular), Z non-square
        let four = P::BaseField::from(4_u64);
        if k.is_zero() || j.square() == four || is_square(&z) {
            return Err(Error::MapPreconditionFailure);
        }
        let k_inv = inv0(k);
        Ok(Self {
            z,
            sgn0,
            c1: j * k_inv,
            c2: k_inv.square(),
        })
    }

    /// Map onto the Montgomery form, as coordinates.
    fn map_to_montgomery(&self, u: P::BaseField) -> (P::BaseField, P::BaseField) {
        let one = P::BaseField::one();
        let k = <P as MontCurveConfig>::COEFF_B;

        let mut tv1 = self.z * u.square();
        // the exceptional input Z·u² = -1 proceeds with tv1 = 0
        tv1 = cmov(tv1, P::BaseField::zero(), tv1 == -one);
        let x1 = -self.c1 * inv0(tv1 + one);
        // gx1 = x1³ + (J/K)·x1² + x1/K²
        let gx1 = ((x1 + self.c1) * x1 + self.c2) * x1;
        let x2 = -x1 - self.c1;
        let gx2 = tv1 * gx1;
        let e2 = is_square(&gx1);
        let x = cmov(x2, x1, e2);
        let y2 = cmov(gx2, gx1, e2);
        let mut y = y2.sqrt().expect("one of gx1, gx2 is a square");
        let e3 = sgn0(self.sgn0, &y);
        y = cmov(y, -y, e2 ^ e3);
        (x * k, y * k)
    }
}

impl<P: TECurveConfig + MontCurveConfig> MapToCurve<Affine<P>> for Elligator2<P> {
    fn map_to_curve(&self, u: P::BaseField) -> Affine<P> {
        let one = P::BaseField::one();
        let (s, t) = self.map_to_montgomery(u);
        // (s, t) ↦ (s/t, (s-1)/(s+1)); t = 0 and s = -1 go to the neutral point.
        // The sqrt(-(J+2)) x-rescaling used when converting from the unit-K
        // Montgomery form is already carried by K here: a = (J+2)/K, so for
        // a = -1 curves K = -(J+2) and s/t equals the rescaled coordinate.
        let exceptional = t.is_zero() || s == -one;
        let x = cmov(s * inv0(t), P::BaseField::zero(), exceptional);
        let y = cmov((s - one) * inv0(s + one), one, exceptional);
        let point = Affine::new_unchecked(x, y);
        debug_assert!(point.is_on_curve());
        point
    }
}
