//! # edwards25519 suites
//!
//! Parameters (RFC-9380 section 8.5):
//!
//! * the target group is the prime-order subgroup of edwards25519, with
//!   `cofactor = 8`;
//! * `k = 128`, `L = 48`; both SHA-512 (the registry binding) and SHA-256
//!   expander variants are provided;
//! * Elligator 2 with `Z = 2`, running on the birationally equivalent
//!   Montgomery curve and carried over by the rational map.

use super::h2c_suite;
use crate::{field::Sgn0, mapping::Elligator2};
use ark_ed25519::EdwardsConfig;
use ark_ff::MontFp;

h2c_suite!(
    /// `edwards25519_XMD:SHA-512_ELL2_RO_`
    Edwards25519Sha512Ell2Ro, "edwards25519_XMD:SHA-512_ELL2_RO_",
    ro: true, k: 128, l: 48,
    curve: ark_ed25519::EdwardsAffine, hash: sha2::Sha512,
    map: Elligator2<EdwardsConfig> = Elligator2::new(MontFp!("2"), Sgn0::Le)
);

h2c_suite!(
    /// `edwards25519_XMD:SHA-512_ELL2_NU_`
    Edwards25519Sha512Ell2Nu, "edwards25519_XMD:SHA-512_ELL2_NU_",
    ro: false, k: 128, l: 48,
    curve: ark_ed25519::EdwardsAffine, hash: sha2::Sha512,
    map: Elligator2<EdwardsConfig> = Elligator2::new(MontFp!("2"), Sgn0::Le)
);

h2c_suite!(
    /// `edwards25519_XMD:SHA-256_ELL2_RO_`
    Edwards25519Sha256Ell2Ro, "edwards25519_XMD:SHA-256_ELL2_RO_",
    ro: true, k: 128, l: 48,
    curve: ark_ed25519::EdwardsAffine, hash: sha2::Sha256,
    map: Elligator2<EdwardsConfig> = Elligator2::new(MontFp!("2"), Sgn0::Le)
);

h2c_suite!(
    /// `edwards25519_XMD:SHA-256_ELL2_NU_`
    Edwards25519Sha256Ell2Nu, "edwards25519_XMD:SHA-256_ELL2_NU_",
    ro: false, k: 128, l: 48,
    curve: ark_ed25519::EdwardsAffine, hash: sha2::Sha256,
    map: Elligator2<EdwardsConfig> = Elligator2::new(MontFp!("2"), Sgn0::Le)
);
