//! # BLS12-381 G1 suites
//!
//! Parameters (RFC-9380 section 8.8.1):
//!
//! * the target group is the prime-order subgroup of the BLS12-381 G1
//!   curve; cofactor clearing is the backend's fast method;
//! * `expand_message_xmd` with SHA-256, `k = 128`, `L = 64`;
//! * G1 has `A = 0`, so the simplified SWU suites run on the 11-isogenous
//!   curve with `Z = 11`; the isogenous coefficients and the rational maps
//!   are taken from the curve backend;
//! * `sgn0` is big-endian in the CFRG registry, which coincides with the
//!   little-endian convention over a prime field.

use super::h2c_suite;
use crate::{
    Error,
    field::Sgn0,
    mapping::{Isogeny, Sswu, Svdw},
};
use ark_bls12_381::g1;
use ark_ec::{hashing::curve_maps::wb::WBConfig, short_weierstrass::SWCurveConfig};
use ark_ff::MontFp;

type IsoCurve = <g1::Config as WBConfig>::IsogenousCurve;

fn isogeny() -> Isogeny<g1::Config> {
    let map = <g1::Config as WBConfig>::ISOGENY_MAP;
    Isogeny {
        x_num: map.x_map_numerator.to_vec(),
        x_den: map.x_map_denominator.to_vec(),
        y_num: map.y_map_numerator.to_vec(),
        y_den: map.y_map_denominator.to_vec(),
    }
}

fn sswu() -> Result<Sswu<g1::Config>, Error> {
    Sswu::new_isogenous(
        <IsoCurve as SWCurveConfig>::COEFF_A,
        <IsoCurve as SWCurveConfig>::COEFF_B,
        MontFp!("11"),
        Sgn0::Be,
        isogeny(),
    )
}

h2c_suite!(
    /// `BLS12381G1_XMD:SHA-256_SSWU_RO_`
    Bls12381G1Sha256SswuRo, "BLS12381G1_XMD:SHA-256_SSWU_RO_",
    ro: true, k: 128, l: 64,
    curve: ark_bls12_381::G1Affine, hash: sha2::Sha256,
    map: Sswu<g1::Config> = sswu()
);

h2c_suite!(
    /// `BLS12381G1_XMD:SHA-256_SSWU_NU_`
    Bls12381G1Sha256SswuNu, "BLS12381G1_XMD:SHA-256_SSWU_NU_",
    ro: false, k: 128, l: 64,
    curve: ark_bls12_381::G1Affine, hash: sha2::Sha256,
    map: Sswu<g1::Config> = sswu()
);

h2c_suite!(
    /// `BLS12381G1_XMD:SHA-256_SVDW_RO_`
    Bls12381G1Sha256SvdwRo, "BLS12381G1_XMD:SHA-256_SVDW_RO_",
    ro: true, k: 128, l: 64,
    curve: ark_bls12_381::G1Affine, hash: sha2::Sha256,
    map: Svdw<g1::Config> = Svdw::new(Sgn0::Be)
);

h2c_suite!(
    /// `BLS12381G1_XMD:SHA-256_SVDW_NU_`
    Bls12381G1Sha256SvdwNu, "BLS12381G1_XMD:SHA-256_SVDW_NU_",
    ro: false, k: 128, l: 64,
    curve: ark_bls12_381::G1Affine, hash: sha2::Sha256,
    map: Svdw<g1::Config> = Svdw::new(Sgn0::Be)
);
