//! Boneh-Franklin method for supersingular curves.

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{Field, PrimeField, Zero};
use ark_std::vec::Vec;
use core::marker::PhantomData;

use super::MapToCurve;
use crate::Error;

/// Boneh-Franklin map for supersingular curves `y² = x³ + B` over prime
/// fields with `p ≡ 2 (mod 3)`.
///
/// Cubing is a bijection in such fields, so `x = (u² - B)^((2p-1)/3)`,
/// `y = u` lands on the curve for every `u`. The cube-root exponent is
/// derived from the field characteristic at construction.
#[derive(Clone)]
pub struct BonehFranklin<P: SWCurveConfig> {
    // (2p - 1) / 3 in little-endian limbs
    exponent: Vec<u64>,
    _curve: PhantomData<P>,
}

impl<P: SWCurveConfig> core::fmt::Debug for BonehFranklin<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BonehFranklin")
            .field("exponent", &self.exponent)
            .finish()
    }
}

impl<P: SWCurveConfig> BonehFranklin<P>
where
    P::BaseField: PrimeField,
{
    /// Validate the curve shape and derive the cube-root exponent.
    pub fn new() -> Result<Self, Error> {
        let modulus = <P::BaseField as PrimeField>::MODULUS;
        let limbs: &[u64] = modulus.as_ref();
        // 2^64 ≡ 1 (mod 3), so p mod 3 is the limb sum mod 3
        let p_mod_3 = limbs.iter().fold(0_u64, |acc, l| (acc + l % 3) % 3);
        if !P::COEFF_A.is_zero() || p_mod_3 != 2 {
            return Err(Error::MapPreconditionFailure);
        }

        // 2p
        let mut exponent = Vec::with_capacity(limbs.len() + 1);
        let mut carry = 0_u64;
        for &l in limbs {
            exponent.push((l << 1) | carry);
            carry = l >> 63;
        }
        exponent.push(carry);
        // 2p - 1
        let mut borrow = 1_u64;
        for l in exponent.iter_mut() {
            let (value, underflow) = l.overflowing_sub(borrow);
            *l = value;
            borrow = underflow as u64;
            if borrow == 0 {
                break;
            }
        }
        // (2p - 1) / 3, schoolbook from the most significant limb
        let mut rem: u128 = 0;
        for l in exponent.iter_mut().rev() {
            let cur = (rem << 64) | *l as u128;
            *l = (cur / 3) as u64;
            rem = cur % 3;
        }
        debug_assert_eq!(rem, 0, "2p - 1 is divisible by 3 when p ≡ 2 (mod 3)");
        while exponent.len() > 1 && exponent.last() == Some(&0) {
            exponent.pop();
        }

        Ok(Self {
            exponent,
            _curve: PhantomData,
        })
    }
}

impl<P: SWCurveConfig> MapToCurve<Affine<P>> for BonehFranklin<P>
where
    P::BaseField: PrimeField,
{
    fn map_to_curve(&self, u: P::BaseField) -> Affine<P> {
        let x = (u.square() - P::COEFF_B).pow(&self.exponent);
        let point = Affine::new_unchecked(x, u);
        debug_assert!(point.is_on_curve());
        point
    }
}
