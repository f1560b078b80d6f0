//! # secp256k1 suites
//!
//! Parameters (RFC-9380 section 8.7):
//!
//! * the target group is secp256k1 with `cofactor = 1`;
//! * `expand_message_xmd` with SHA-256, `k = 128`, `L = 48`;
//! * secp256k1 has `A = 0`, so the simplified SWU suites run on the
//!   3-isogenous curve `E': y² = x³ + A'·x + 1771` with `Z = -11` and push
//!   the result through the isogeny; the rational map coefficients below
//!   are the suite constants from RFC-9380 appendix E.1, ascending powers;
//! * the Shallue-van de Woestijne suites map to the curve directly.

use super::h2c_suite;
use crate::{
    field::Sgn0,
    mapping::{Isogeny, Sswu, Svdw},
};
use ark_ff::{Field, MontFp, PrimeField};
use ark_secp256k1::{Config, Fq};

const ISO_A: [u8; 32] = [
    0x3f, 0x87, 0x31, 0xab, 0xdd, 0x66, 0x1a, 0xdc, 0xa0, 0x8a, 0x55, 0x58, 0xf0, 0xf5, 0xd2,
    0x72, 0xe9, 0x53, 0xd3, 0x63, 0xcb, 0x6f, 0x0e, 0x5d, 0x40, 0x54, 0x47, 0xc0, 0x1a, 0x44,
    0x45, 0x33,
];

const X_NUM: [[u8; 32]; 4] = [
    [
        0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3,
        0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8d, 0xaa, 0xaa,
        0xa8, 0xc7,
    ],
    [
        0x07, 0xd3, 0xd4, 0xc8, 0x0b, 0xc3, 0x21, 0xd5, 0xb9, 0xf3, 0x15, 0xce, 0xa7, 0xfd, 0x44,
        0xc5, 0xd5, 0x95, 0xd2, 0xfc, 0x0b, 0xf6, 0x3b, 0x92, 0xdf, 0xff, 0x10, 0x44, 0xf1, 0x7c,
        0x65, 0x81,
    ],
    [
        0x53, 0x4c, 0x32, 0x8d, 0x23, 0xf2, 0x34, 0xe6, 0xe2, 0xa4, 0x13, 0xde, 0xca, 0x25, 0xca,
        0xec, 0xe4, 0x50, 0x61, 0x44, 0x03, 0x7c, 0x40, 0x31, 0x4e, 0xcb, 0xd0, 0xb5, 0x3d, 0x9d,
        0xd2, 0x62,
    ],
    [
        0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3,
        0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8e, 0x38, 0xe3, 0x8d, 0xaa, 0xaa,
        0xa8, 0x8c,
    ],
];

const X_DEN: [[u8; 32]; 2] = [
    [
        0xd3, 0x57, 0x71, 0x19, 0x3d, 0x94, 0x91, 0x8a, 0x9c, 0xa3, 0x4c, 0xcb, 0xb7, 0xb6, 0x40,
        0xdd, 0x86, 0xcd, 0x40, 0x95, 0x42, 0xf8, 0x48, 0x7d, 0x9f, 0xe6, 0xb7, 0x45, 0x78, 0x1e,
        0xb4, 0x9b,
    ],
    [
        0xed, 0xad, 0xc6, 0xf6, 0x43, 0x83, 0xdc, 0x1d, 0xf7, 0xc4, 0xb2, 0xd5, 0x1b, 0x54, 0x22,
        0x54, 0x06, 0xd3, 0x6b, 0x64, 0x1f, 0x5e, 0x41, 0xbb, 0xc5, 0x2a, 0x56, 0x61, 0x2a, 0x8c,
        0x6d, 0x14,
    ],
];

const Y_NUM: [[u8; 32]; 4] = [
    [
        0x4b, 0xda, 0x12, 0xf6, 0x84, 0xbd, 0xa1, 0x2f, 0x68, 0x4b, 0xda, 0x12, 0xf6, 0x84, 0xbd,
        0xa1, 0x2f, 0x68, 0x4b, 0xda, 0x12, 0xf6, 0x84, 0xbd, 0xa1, 0x2f, 0x68, 0x4b, 0x8e, 0x38,
        0xe2, 0x3c,
    ],
    [
        0xc7, 0x5e, 0x0c, 0x32, 0xd5, 0xcb, 0x7c, 0x0f, 0xa9, 0xd0, 0xa5, 0x4b, 0x12, 0xa0, 0xa6,
        0xd5, 0x64, 0x7a, 0xb0, 0x46, 0xd6, 0x86, 0xda, 0x6f, 0xdf, 0xfc, 0x90, 0xfc, 0x20, 0x1d,
        0x71, 0xa3,
    ],
    [
        0x29, 0xa6, 0x19, 0x46, 0x91, 0xf9, 0x1a, 0x73, 0x71, 0x52, 0x09, 0xef, 0x65, 0x12, 0xe5,
        0x76, 0x72, 0x28, 0x30, 0xa2, 0x01, 0xbe, 0x20, 0x18, 0xa7, 0x65, 0xe8, 0x5a, 0x9e, 0xce,
        0xe9, 0x31,
    ],
    [
        0x2f, 0x68, 0x4b, 0xda, 0x12, 0xf6, 0x84, 0xbd, 0xa1, 0x2f, 0x68, 0x4b, 0xda, 0x12, 0xf6,
        0x84, 0xbd, 0xa1, 0x2f, 0x68, 0x4b, 0xda, 0x12, 0xf6, 0x84, 0xbd, 0xa1, 0x2f, 0x38, 0xe3,
        0x8d, 0x84,
    ],
];

const Y_DEN: [[u8; 32]; 3] = [
    [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff,
        0xf9, 0x3b,
    ],
    [
        0x7a, 0x06, 0x53, 0x4b, 0xb8, 0xbd, 0xb4, 0x9f, 0xd5, 0xe9, 0xe6, 0x63, 0x27, 0x22, 0xc2,
        0x98, 0x94, 0x67, 0xc1, 0xbf, 0xc8, 0xe8, 0xd9, 0x78, 0xdf, 0xb4, 0x25, 0xd2, 0x68, 0x5c,
        0x25, 0x73,
    ],
    [
        0x64, 0x84, 0xaa, 0x71, 0x65, 0x45, 0xca, 0x2c, 0xf3, 0xa7, 0x0c, 0x3f, 0xa8, 0xfe, 0x33,
        0x7e, 0x0a, 0x3d, 0x21, 0x16, 0x2f, 0x0d, 0x62, 0x99, 0xa7, 0xbf, 0x81, 0x92, 0xbf, 0xd2,
        0xa7, 0x6f,
    ],
];

fn fq(bytes: &[u8; 32]) -> Fq {
    Fq::from_be_bytes_mod_order(bytes)
}

fn isogeny() -> Isogeny<Config> {
    let mut x_den: ark_std::vec::Vec<Fq> = X_DEN.iter().map(fq).collect();
    x_den.push(Fq::ONE);
    let mut y_den: ark_std::vec::Vec<Fq> = Y_DEN.iter().map(fq).collect();
    y_den.push(Fq::ONE);
    Isogeny {
        x_num: X_NUM.iter().map(fq).collect(),
        x_den,
        y_num: Y_NUM.iter().map(fq).collect(),
        y_den,
    }
}

fn sswu() -> Result<Sswu<Config>, crate::Error> {
    Sswu::new_isogenous(fq(&ISO_A), MontFp!("1771"), MontFp!("-11"), Sgn0::Le, isogeny())
}

h2c_suite!(
    /// `secp256k1_XMD:SHA-256_SSWU_RO_`
    Secp256k1Sha256SswuRo, "secp256k1_XMD:SHA-256_SSWU_RO_",
    ro: true, k: 128, l: 48,
    curve: ark_secp256k1::Affine, hash: sha2::Sha256,
    map: Sswu<Config> = sswu()
);

h2c_suite!(
    /// `secp256k1_XMD:SHA-256_SSWU_NU_`
    Secp256k1Sha256SswuNu, "secp256k1_XMD:SHA-256_SSWU_NU_",
    ro: false, k: 128, l: 48,
    curve: ark_secp256k1::Affine, hash: sha2::Sha256,
    map: Sswu<Config> = sswu()
);

h2c_suite!(
    /// `secp256k1_XMD:SHA-256_SVDW_RO_`
    Secp256k1Sha256SvdwRo, "secp256k1_XMD:SHA-256_SVDW_RO_",
    ro: true, k: 128, l: 48,
    curve: ark_secp256k1::Affine, hash: sha2::Sha256,
    map: Svdw<Config> = Svdw::new(Sgn0::Le)
);

h2c_suite!(
    /// `secp256k1_XMD:SHA-256_SVDW_NU_`
    Secp256k1Sha256SvdwNu, "secp256k1_XMD:SHA-256_SVDW_NU_",
    ro: false, k: 128, l: 48,
    curve: ark_secp256k1::Affine, hash: sha2::Sha256,
    map: Svdw<Config> = Svdw::new(Sgn0::Le)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    crate::suite_tests!(Secp256k1Sha256SswuRo, sswu_ro);
    crate::suite_tests!(Secp256k1Sha256SswuNu, sswu_nu);
    crate::suite_tests!(Secp256k1Sha256SvdwRo, svdw_ro);
    crate::suite_tests!(Secp256k1Sha256SvdwNu, svdw_nu);

    #[test]
    fn sswu_ro_reference_vectors() {
        testing::run_suite_vectors::<Secp256k1Sha256SswuRo>("secp256k1_XMD_SHA-256_SSWU_RO_");
    }

    #[test]
    fn isogeny_lands_on_the_curve() {
        use crate::mapping::MapToCurve;
        use ark_std::{UniformRand, test_rng};
        let map = sswu().unwrap();
        let mut rng = test_rng();
        for _ in 0..16 {
            assert!(map.map_to_curve(Fq::rand(&mut rng)).is_on_curve());
        }
    }
}
