//! Shallue-van de Woestijne method.

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{Field, One, Zero};

use super::MapToCurve;
use crate::{
    Error,
    field::{Sgn0, cmov, inv0, is_square, sgn0},
};

/// Shallue-van de Woestijne map, applicable to any Weierstrass curve.
///
/// The map parameter `Z` and the derived constants are computed from
/// `(A, B)` at construction through the deterministic candidate search, so
/// a given curve always yields the same map.
#[derive(Clone, Debug)]
pub struct Svdw<P: SWCurveConfig> {
    z: P::BaseField,
    sgn0: Sgn0,
    // c1 = g(Z), c2 = -Z/2, c3 = sqrt(-g(Z)·(3Z² + 4A)) with sgn0(c3) = 0,
    // c4 = -4·g(Z)/(3Z² + 4A)
    c1: P::BaseField,
    c2: P::BaseField,
    c3: P::BaseField,
    c4: P::BaseField,
}

impl<P: SWCurveConfig> Svdw<P> {
    /// Derive the map from the curve coefficients.
    pub fn new(conv: Sgn0) -> Result<Self, Error> {
        let z = Self::find_z().ok_or(Error::MapPreconditionFailure)?;
        let c1 = Self::g(z);
        let t = P::BaseField::from(3_u64) * z.square() + P::BaseField::from(4_u64) * P::COEFF_A;
        let two_inv = inv0(P::BaseField::from(2_u64));
        let mut c3 = (-c1 * t).sqrt().ok_or(Error::MapPreconditionFailure)?;
        if sgn0(conv, &c3) {
            c3 = -c3;
        }
        let c4 = -P::BaseField::from(4_u64) * c1 * inv0(t);
        Ok(Self {
            z,
            sgn0: conv,
            c1,
            c2: -z * two_inv,
            c3,
            c4,
        })
    }

    /// `g(x) = x³ + A·x + B`.
    fn g(x: P::BaseField) -> P::BaseField {
        (x.square() + P::COEFF_A) * x + P::COEFF_B
    }

    /// Smallest-candidate Z satisfying the map's curve criteria:
    /// `g(Z) ≠ 0`, `h(Z) = -(3Z² + 4A)/(4g(Z))` non-zero and square, and at
    /// least one of `g(Z)`, `g(-Z/2)` square.
    fn find_z() -> Option<P::BaseField> {
        let two_inv = inv0(P::BaseField::from(2_u64));
        for ctr in 1..=64_u64 {
            let base = P::BaseField::from(ctr);
            for z in [base, -base] {
                let g_z = Self::g(z);
                if g_z.is_zero() {
                    continue;
                }
                let h_num = -(P::BaseField::from(3_u64) * z.square()
                    + P::BaseField::from(4_u64) * P::COEFF_A);
                let h = h_num * inv0(P::BaseField::from(4_u64) * g_z);
                if h.is_zero() || !is_square(&h) {
                    continue;
                }
                if is_square(&g_z) || is_square(&Self::g(-z * two_inv)) {
                    return Some(z);
                }
            }
        }
        None
    }
}

impl<P: SWCurveConfig> MapToCurve<Affine<P>> for Svdw<P> {
    fn map_to_curve(&self, u: P::BaseField) -> Affine<P> {
        let one = P::BaseField::one();
        let tv1 = u.square() * self.c1;
        let tv2 = one + tv1;
        let tv1 = one - tv1;
        let tv3 = inv0(tv1 * tv2);
        let tv4 = u * tv1 * tv3 * self.c3;
        let x1 = self.c2 - tv4;
        let gx1 = Self::g(x1);
        let e1 = is_square(&gx1);
        let x2 = self.c2 + tv4;
        let gx2 = Self::g(x2);
        let e2 = is_square(&gx2) && !e1;
        let x3 = (tv2.square() * tv3).square() * self.c4 + self.z;
        let mut x = cmov(x3, x1, e1);
        x = cmov(x, x2, e2);
        let gx = Self::g(x);
        let mut y = gx.sqrt().expect("one of gx1, gx2, gx3 is a square");
        let e3 = sgn0(self.sgn0, &u) == sgn0(self.sgn0, &y);
        y = cmov(-y, y, e3);
        let point = Affine::new_unchecked(x, y);
        debug_assert!(point.is_on_curve());
        point
    }
}
