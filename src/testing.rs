//! Common test utilities: reference-vector loaders and shared fixtures.

use crate::{
    BaseField, Encoder, Suite,
    expander::{Expander, XmdExpander, XofExpander},
    field,
    mapping::MapToCurve,
};
use ark_ec::AffineRepr;
use ark_ff::PrimeField;

pub const TEST_DST: &[u8] = b"QUUX-V01-CS02-with-testing";

pub const TEST_MESSAGES: &[&[u8]] = &[
    b"",
    b"abc",
    b"abcdef0123456789",
    b"a longer message exercising multiple expansion blocks -------------------",
];

/// Decode a `0x`-prefixed big-endian field element.
pub fn fe_from_hex<F: PrimeField>(hex_str: &str) -> F {
    let bytes = hex::decode(hex_str.trim_start_matches("0x")).unwrap();
    F::from_be_bytes_mod_order(&bytes)
}

fn read_data_file(dir: &str, stem: &str) -> String {
    let path = format!("{}/data/{}/{}.json", env!("CARGO_MANIFEST_DIR"), dir, stem);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}

// Vector file shapes follow the CFRG JSON layout.

#[derive(serde::Deserialize)]
pub struct ExpanderVectorFile {
    pub name: String,
    pub hash: String,
    #[serde(rename = "DST")]
    pub dst: String,
    pub k: usize,
    pub tests: Vec<ExpanderVector>,
}

#[derive(serde::Deserialize)]
pub struct ExpanderVector {
    pub len_in_bytes: String,
    pub msg: String,
    pub uniform_bytes: String,
}

#[derive(serde::Deserialize)]
pub struct SuiteVectorFile {
    pub ciphersuite: String,
    pub dst: String,
    #[serde(rename = "randomOracle")]
    pub random_oracle: bool,
    pub vectors: Vec<SuiteVector>,
}

#[derive(serde::Deserialize)]
pub struct SuiteVector {
    pub msg: String,
    #[serde(rename = "P")]
    pub p: PointCoords,
    #[serde(default)]
    pub u: Vec<String>,
    #[serde(rename = "Q0", default)]
    pub q0: Option<PointCoords>,
    #[serde(rename = "Q1", default)]
    pub q1: Option<PointCoords>,
}

#[derive(serde::Deserialize)]
pub struct PointCoords {
    pub x: String,
    pub y: String,
}

fn parse_len(s: &str) -> usize {
    match s.strip_prefix("0x") {
        Some(hex_len) => usize::from_str_radix(hex_len, 16).unwrap(),
        None => s.parse().unwrap(),
    }
}

/// Run one expander vector file against the matching expander.
pub fn run_expander_vectors(stem: &str) {
    let file: ExpanderVectorFile = serde_json::from_str(&read_data_file("expander", stem)).unwrap();
    let dst = file.dst.as_bytes();
    let expander: Box<dyn Expander> = match file.hash.as_str() {
        "SHA256" => Box::new(XmdExpander::<sha2::Sha256>::new(dst).unwrap()),
        "SHA384" => Box::new(XmdExpander::<sha2::Sha384>::new(dst).unwrap()),
        "SHA512" => Box::new(XmdExpander::<sha2::Sha512>::new(dst).unwrap()),
        "SHAKE128" => Box::new(XofExpander::<sha3::Shake128>::new(dst, file.k).unwrap()),
        "SHAKE256" => Box::new(XofExpander::<sha3::Shake256>::new(dst, file.k).unwrap()),
        other => panic!("expander not supported: {other}"),
    };
    for vector in &file.tests {
        let got = expander
            .expand(vector.msg.as_bytes(), parse_len(&vector.len_in_bytes))
            .unwrap();
        assert_eq!(
            hex::encode(&got),
            vector.uniform_bytes,
            "{} / {}: msg {:?}",
            file.name,
            file.hash,
            vector.msg,
        );
    }
}

/// Run one suite vector file: checks the `u` field elements, the mapped
/// `Q0`/`Q1` points and the final output `P` for every message.
pub fn run_suite_vectors<S: Suite>(stem: &str)
where
    BaseField<S>: PrimeField,
{
    let file: SuiteVectorFile = serde_json::from_str(&read_data_file("vectors", stem)).unwrap();
    assert_eq!(file.ciphersuite, S::SUITE_ID);
    assert_eq!(file.random_oracle, S::RANDOM_ORACLE);
    let dst = file.dst.as_bytes();
    let encoder = Encoder::<S>::new(dst).unwrap();
    let expander = S::expander(dst).unwrap();
    let map = S::map().unwrap();
    let count = if S::RANDOM_ORACLE { 2 } else { 1 };

    for vector in &file.vectors {
        let msg = vector.msg.as_bytes();
        let u: Vec<BaseField<S>> = field::hash_to_field(&expander, msg, count, S::L).unwrap();
        for (i, want) in vector.u.iter().enumerate() {
            assert_eq!(u[i], fe_from_hex(want), "u[{i}] for msg {:?}", vector.msg);
        }
        for (q, want) in [(0, &vector.q0), (1, &vector.q1)] {
            if let Some(want) = want {
                let (x, y) = map.map_to_curve(u[q]).xy().unwrap();
                assert_eq!(x, fe_from_hex(&want.x), "Q{q}.x for msg {:?}", vector.msg);
                assert_eq!(y, fe_from_hex(&want.y), "Q{q}.y for msg {:?}", vector.msg);
            }
        }
        let (x, y) = encoder.hash(msg).xy().unwrap();
        assert_eq!(x, fe_from_hex(&vector.p.x), "P.x for msg {:?}", vector.msg);
        assert_eq!(y, fe_from_hex(&vector.p.y), "P.y for msg {:?}", vector.msg);
    }
}

/// Standard property battery for a suite; invoke once per suite type with a
/// distinct module name.
#[macro_export]
macro_rules! suite_tests {
    ($suite:ty, $mod_name:ident) => {
        mod $mod_name {
            use super::*;

            #[test]
            fn outputs_lie_in_the_prime_order_subgroup() {
                let encoder = $crate::Encoder::<$suite>::new($crate::testing::TEST_DST).unwrap();
                for msg in $crate::testing::TEST_MESSAGES {
                    let p = encoder.hash(msg);
                    assert!(p.is_on_curve());
                    assert!(p.is_in_correct_subgroup_assuming_on_curve());
                }
            }

            #[test]
            fn hashing_is_deterministic() {
                let encoder = $crate::Encoder::<$suite>::new($crate::testing::TEST_DST).unwrap();
                assert_eq!(encoder.hash(b"msg"), encoder.hash(b"msg"));
                assert_eq!(
                    $crate::Encoder::<$suite>::hash_once($crate::testing::TEST_DST, b"msg").unwrap(),
                    encoder.hash(b"msg"),
                );
            }

            #[test]
            fn tags_separate_domains() {
                let a = $crate::Encoder::<$suite>::new(b"tag-a").unwrap();
                let b = $crate::Encoder::<$suite>::new(b"tag-b").unwrap();
                assert_ne!(a.hash(b"msg"), b.hash(b"msg"));
                assert_ne!(a.hash_to_scalar(b"msg"), b.hash_to_scalar(b"msg"));
            }

            #[test]
            fn scalar_hashing_is_deterministic() {
                let encoder = $crate::Encoder::<$suite>::new($crate::testing::TEST_DST).unwrap();
                assert_eq!(encoder.hash_to_scalar(b"msg"), encoder.hash_to_scalar(b"msg"));
            }

            #[test]
            fn resolves_from_the_registry() {
                let id = <$suite as $crate::Suite>::SUITE_ID;
                let encoder = $crate::Encoder::<$suite>::new($crate::testing::TEST_DST).unwrap();
                let resolved = $crate::registry::resolve(id, $crate::testing::TEST_DST).unwrap();
                assert_eq!(resolved.suite_id(), id);
                assert_eq!(
                    resolved.is_random_oracle(),
                    <$suite as $crate::Suite>::RANDOM_ORACLE
                );
                assert_eq!(resolved.hash(b"msg"), encoder.hash(b"msg").into());
                assert_eq!(
                    resolved.hash_to_scalar(b"msg"),
                    encoder.hash_to_scalar(b"msg").into()
                );
            }
        }
    };
}

// Small supersingular curve used to exercise maps exhaustively:
// y² = x³ + 4 over F_11, group order 12, prime subgroup order 3.

use ark_ff::fields::{Fp64, MontBackend, MontConfig};

#[derive(MontConfig)]
#[modulus = "11"]
#[generator = "2"]
pub struct F11Config;
pub type F11 = Fp64<MontBackend<F11Config, 1>>;

#[derive(MontConfig)]
#[modulus = "3"]
#[generator = "2"]
pub struct F3Config;
pub type F3 = Fp64<MontBackend<F3Config, 1>>;

#[derive(Clone, Copy)]
pub struct ToyCurveConfig;

impl ark_ec::CurveConfig for ToyCurveConfig {
    type BaseField = F11;
    type ScalarField = F3;
    const COFACTOR: &'static [u64] = &[4];
    const COFACTOR_INV: F3 = ark_ff::MontFp!("1");
}

impl ark_ec::short_weierstrass::SWCurveConfig for ToyCurveConfig {
    const COEFF_A: F11 = ark_ff::MontFp!("0");
    const COEFF_B: F11 = ark_ff::MontFp!("4");
    const GENERATOR: ark_ec::short_weierstrass::Affine<ToyCurveConfig> =
        ark_ec::short_weierstrass::Affine::new_unchecked(
            ark_ff::MontFp!("0"),
            ark_ff::MontFp!("2"),
        );
}

/// Test-only suite driving the XOF expander and the Boneh-Franklin map
/// through the full encoder pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ToyShake128Bf;

impl Suite for ToyShake128Bf {
    const SUITE_ID: &'static str = "toy_XOF:SHAKE-128_BF_RO_";
    const K: usize = 128;
    const L: usize = 17;
    const RANDOM_ORACLE: bool = true;

    type Affine = ark_ec::short_weierstrass::Affine<ToyCurveConfig>;
    type Expander = XofExpander<sha3::Shake128>;
    type Map = crate::mapping::BonehFranklin<ToyCurveConfig>;

    fn expander(dst: &[u8]) -> Result<Self::Expander, crate::Error> {
        XofExpander::new(dst, Self::K)
    }

    fn map() -> Result<Self::Map, crate::Error> {
        crate::mapping::BonehFranklin::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toy_xof_suite_works_end_to_end() {
        let encoder = Encoder::<ToyShake128Bf>::new(TEST_DST).unwrap();
        for msg in TEST_MESSAGES {
            let p = encoder.hash(msg);
            assert!(p.is_on_curve());
            assert!(p.is_in_correct_subgroup_assuming_on_curve());
            assert_eq!(p, encoder.hash(msg));
        }
        let other = Encoder::<ToyShake128Bf>::new(b"another tag").unwrap();
        assert_ne!(encoder.hash(b"msg"), other.hash(b"msg"));
    }

    #[test]
    fn toy_scalar_hashing_stays_in_range() {
        // The scalar field has 3 elements; determinism and tag separation
        // still have to hold.
        let encoder = Encoder::<ToyShake128Bf>::new(TEST_DST).unwrap();
        assert_eq!(encoder.hash_to_scalar(b"msg"), encoder.hash_to_scalar(b"msg"));
    }
}
