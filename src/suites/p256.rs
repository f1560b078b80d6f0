//! # NIST P-256 suites
//!
//! Parameters (RFC-9380 section 8.2):
//!
//! * the target group is secp256r1 with `cofactor = 1`, so cofactor
//!   clearing is the identity;
//! * `expand_message_xmd` with SHA-256, `k = 128`, `L = 48`;
//! * simplified SWU suites use `Z = -10`; the Shallue-van de Woestijne
//!   suites derive their parameter from the curve coefficients;
//! * `sgn0` is the parity of the coordinate's canonical representative.

use super::h2c_suite;
use crate::{
    field::Sgn0,
    mapping::{Sswu, Svdw},
};
use ark_ff::MontFp;
use ark_secp256r1::Config;

h2c_suite!(
    /// `P256_XMD:SHA-256_SSWU_RO_`
    P256Sha256SswuRo, "P256_XMD:SHA-256_SSWU_RO_",
    ro: true, k: 128, l: 48,
    curve: ark_secp256r1::Affine, hash: sha2::Sha256,
    map: Sswu<Config> = Sswu::new(MontFp!("-10"), Sgn0::Le)
);

h2c_suite!(
    /// `P256_XMD:SHA-256_SSWU_NU_`
    P256Sha256SswuNu, "P256_XMD:SHA-256_SSWU_NU_",
    ro: false, k: 128, l: 48,
    curve: ark_secp256r1::Affine, hash: sha2::Sha256,
    map: Sswu<Config> = Sswu::new(MontFp!("-10"), Sgn0::Le)
);

h2c_suite!(
    /// `P256_XMD:SHA-256_SVDW_RO_`
    P256Sha256SvdwRo, "P256_XMD:SHA-256_SVDW_RO_",
    ro: true, k: 128, l: 48,
    curve: ark_secp256r1::Affine, hash: sha2::Sha256,
    map: Svdw<Config> = Svdw::new(Sgn0::Le)
);

h2c_suite!(
    /// `P256_XMD:SHA-256_SVDW_NU_`
    P256Sha256SvdwNu, "P256_XMD:SHA-256_SVDW_NU_",
    ro: false, k: 128, l: 48,
    curve: ark_secp256r1::Affine, hash: sha2::Sha256,
    map: Svdw<Config> = Svdw::new(Sgn0::Le)
);
