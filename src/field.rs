//! Hash-to-field and the field-level helpers shared by the curve maps.

use ark_ff::{BigInteger, Field, LegendreSymbol, PrimeField};
use ark_std::Zero;
use ark_std::vec::Vec;

use crate::{Error, expander::Expander};

/// Sign-of-zero convention: the traversal order of the base prime field
/// coordinates when computing `sgn0` of an extension element.
///
/// For prime fields (`m = 1`) both conventions coincide with the parity of
/// the canonical integer representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgn0 {
    /// Coordinate-ascending traversal (RFC-9380 section 4.1).
    Le,
    /// Coordinate-descending traversal.
    Be,
}

/// Hash `msg` to `count` elements of `F`.
///
/// The expander output is partitioned into `count * m` chunks of `l` bytes,
/// each interpreted as a big-endian integer and reduced modulo the base
/// prime field characteristic; chunk `l*(j + i*m)` becomes coordinate `j`
/// of element `i`.
pub fn hash_to_field<F: Field, E: Expander + ?Sized>(
    expander: &E,
    msg: &[u8],
    count: usize,
    l: usize,
) -> Result<Vec<F>, Error> {
    let m = F::extension_degree() as usize;
    let uniform = expander.expand(msg, count * m * l)?;
    let mut elements = Vec::with_capacity(count);
    for i in 0..count {
        let coords = (0..m).map(|j| {
            let offset = l * (j + i * m);
            F::BasePrimeField::from_be_bytes_mod_order(&uniform[offset..offset + l])
        });
        let element = F::from_base_prime_field_elems(coords)
            .expect("coordinate count equals the extension degree");
        elements.push(element);
    }
    Ok(elements)
}

/// Sample length for elements of `F` at security level `k`:
/// `ceil((ceil(log2(p)) + k) / 8)` bytes per base field coordinate.
pub const fn len_per_base_elem<F: PrimeField>(k: usize) -> usize {
    (F::MODULUS_BIT_SIZE as usize + k).div_ceil(8)
}

/// Branchless select: `b` when `c` holds, `a` otherwise.
///
/// Selection is routed through field arithmetic (`a + c*(b - a)`) so the
/// choice itself never branches on `c`.
#[inline]
pub fn cmov<F: Field>(a: F, b: F, c: bool) -> F {
    let mask = F::from(c as u64);
    a + mask * (b - a)
}

/// Multiplicative inverse extended with `inv0(0) = 0`.
#[inline]
pub fn inv0<F: Field>(x: F) -> F {
    x.inverse().unwrap_or_else(F::zero)
}

/// Whether `x` is a square in `F`; zero counts as square.
#[inline]
pub fn is_square<F: Field>(x: &F) -> bool {
    !matches!(x.legendre(), LegendreSymbol::QuadraticNonResidue)
}

/// Square root of the ratio `u/v`, with the curve's non-square `z` as
/// fallback twist.
///
/// Returns `(true, sqrt(u/v))` when the ratio is a square and
/// `(false, sqrt(z*u/v))` otherwise.
pub fn sqrt_ratio<F: Field>(u: &F, v: &F, z: &F) -> (bool, F) {
    let r = inv0(*v) * u;
    match r.legendre() {
        LegendreSymbol::Zero => (true, F::zero()),
        LegendreSymbol::QuadraticResidue => (true, r.sqrt().expect("quadratic residue")),
        LegendreSymbol::QuadraticNonResidue => {
            (false, (*z * r).sqrt().expect("twisted into a residue"))
        }
    }
}

/// `sgn0` of a field element under the given convention (RFC-9380
/// section 4.1).
pub fn sgn0<F: Field>(conv: Sgn0, x: &F) -> bool {
    let coords: Vec<_> = x.to_base_prime_field_elements().collect();
    let mut sign = false;
    let mut zero = true;
    let mut fold = |c: &F::BasePrimeField| {
        let sign_i = c.into_bigint().is_odd();
        sign = sign || (zero && sign_i);
        zero = zero && c.is_zero();
    };
    match conv {
        Sgn0::Le => coords.iter().for_each(&mut fold),
        Sgn0::Be => coords.iter().rev().for_each(&mut fold),
    }
    sign
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expander::XmdExpander;
    use ark_secp256r1::Fq;
    use ark_std::{UniformRand, test_rng};

    #[test]
    fn cmov_matches_branching_select() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let a = Fq::rand(&mut rng);
            let b = Fq::rand(&mut rng);
            for c in [false, true] {
                let naive = if c { b } else { a };
                assert_eq!(cmov(a, b, c), naive);
            }
        }
    }

    #[test]
    fn sqrt_ratio_matches_branching_select() {
        // Any non-square works as the twist; -10 is the curve's map parameter.
        let z = -Fq::from(10_u64);
        assert!(!is_square(&z));
        let mut rng = test_rng();
        for _ in 0..100 {
            let u = Fq::rand(&mut rng);
            let v = Fq::rand(&mut rng);
            let ratio = u / v;
            let (square, y) = sqrt_ratio(&u, &v, &z);
            assert_eq!(square, is_square(&ratio));
            if square {
                assert_eq!(y * y, ratio);
            } else {
                assert_eq!(y * y, z * ratio);
            }
        }
    }

    #[test]
    fn sgn0_is_parity_for_prime_fields() {
        assert!(!sgn0(Sgn0::Le, &Fq::from(0_u64)));
        assert!(sgn0(Sgn0::Le, &Fq::from(1_u64)));
        assert!(!sgn0(Sgn0::Le, &Fq::from(2_u64)));
        assert!(sgn0(Sgn0::Le, &Fq::from(5_u64)));
        let mut rng = test_rng();
        for _ in 0..32 {
            let x = Fq::rand(&mut rng);
            assert_eq!(sgn0(Sgn0::Le, &x), sgn0(Sgn0::Be, &x));
        }
    }

    #[test]
    fn hash_to_field_is_deterministic_and_tag_sensitive() {
        let exp_a = XmdExpander::<sha2::Sha256>::new(b"tag-a").unwrap();
        let exp_b = XmdExpander::<sha2::Sha256>::new(b"tag-b").unwrap();
        let u: Vec<Fq> = hash_to_field(&exp_a, b"msg", 2, 48).unwrap();
        let v: Vec<Fq> = hash_to_field(&exp_a, b"msg", 2, 48).unwrap();
        let w: Vec<Fq> = hash_to_field(&exp_b, b"msg", 2, 48).unwrap();
        assert_eq!(u, v);
        assert_ne!(u, w);
        assert_ne!(u[0], u[1]);
    }
}
