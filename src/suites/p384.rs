//! # NIST P-384 suites
//!
//! Parameters:
//!
//! * the target group is secp384r1 with `cofactor = 1`;
//! * `k = 192`, `L = 72`;
//! * simplified SWU suites use `Z = -12`;
//! * two expander bindings are registered: the SHA-512 pair of the original
//!   CFRG drafts and the SHA-384 pair of the final registry (RFC-9380
//!   section 8.3), which the published test vectors cover.

use super::h2c_suite;
use crate::{
    field::Sgn0,
    mapping::{Sswu, Svdw},
};
use ark_ff::MontFp;
use ark_secp384r1::Config;

h2c_suite!(
    /// `P384_XMD:SHA-512_SSWU_RO_`
    P384Sha512SswuRo, "P384_XMD:SHA-512_SSWU_RO_",
    ro: true, k: 192, l: 72,
    curve: ark_secp384r1::Affine, hash: sha2::Sha512,
    map: Sswu<Config> = Sswu::new(MontFp!("-12"), Sgn0::Le)
);

h2c_suite!(
    /// `P384_XMD:SHA-512_SSWU_NU_`
    P384Sha512SswuNu, "P384_XMD:SHA-512_SSWU_NU_",
    ro: false, k: 192, l: 72,
    curve: ark_secp384r1::Affine, hash: sha2::Sha512,
    map: Sswu<Config> = Sswu::new(MontFp!("-12"), Sgn0::Le)
);

h2c_suite!(
    /// `P384_XMD:SHA-512_SVDW_RO_`
    P384Sha512SvdwRo, "P384_XMD:SHA-512_SVDW_RO_",
    ro: true, k: 192, l: 72,
    curve: ark_secp384r1::Affine, hash: sha2::Sha512,
    map: Svdw<Config> = Svdw::new(Sgn0::Le)
);

h2c_suite!(
    /// `P384_XMD:SHA-512_SVDW_NU_`
    P384Sha512SvdwNu, "P384_XMD:SHA-512_SVDW_NU_",
    ro: false, k: 192, l: 72,
    curve: ark_secp384r1::Affine, hash: sha2::Sha512,
    map: Svdw<Config> = Svdw::new(Sgn0::Le)
);

h2c_suite!(
    /// `P384_XMD:SHA-384_SSWU_RO_`
    P384Sha384SswuRo, "P384_XMD:SHA-384_SSWU_RO_",
    ro: true, k: 192, l: 72,
    curve: ark_secp384r1::Affine, hash: sha2::Sha384,
    map: Sswu<Config> = Sswu::new(MontFp!("-12"), Sgn0::Le)
);

h2c_suite!(
    /// `P384_XMD:SHA-384_SSWU_NU_`
    P384Sha384SswuNu, "P384_XMD:SHA-384_SSWU_NU_",
    ro: false, k: 192, l: 72,
    curve: ark_secp384r1::Affine, hash: sha2::Sha384,
    map: Sswu<Config> = Sswu::new(MontFp!("-12"), Sgn0::Le)
);
