//! Runtime suite registry.
//!
//! Maps CFRG suite identifier strings to ready-made encoders. The
//! compile-time surface ([`crate::Suite`] + [`crate::Encoder`]) is the
//! preferred way to use this library; the registry exists for callers that
//! pick the suite at runtime (configuration files, test-vector harnesses,
//! bindings).
//!
//! Since the registered suites target different curves, resolved encoders
//! return points and scalars through the tagged [`Point`] and [`Scalar`]
//! enums, one explicit discriminant per target curve.

use ark_ec::AffineRepr;
use ark_std::boxed::Box;

use crate::{AffinePoint, Encoder, Error, ScalarField, Suite, suites};

/// Discriminants of the registered target curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveId {
    P256,
    P384,
    Secp256k1,
    Bls12381G1,
    Edwards25519,
}

/// Affine point on one of the registered target curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Point {
    P256(ark_secp256r1::Affine),
    P384(ark_secp384r1::Affine),
    Secp256k1(ark_secp256k1::Affine),
    Bls12381G1(ark_bls12_381::G1Affine),
    Edwards25519(ark_ed25519::EdwardsAffine),
}

/// Element of the scalar field of one of the registered target curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    P256(ark_secp256r1::Fr),
    P384(ark_secp384r1::Fr),
    Secp256k1(ark_secp256k1::Fr),
    Bls12381G1(ark_bls12_381::Fr),
    Edwards25519(ark_ed25519::Fr),
}

macro_rules! for_each_curve {
    ($self:ident, $p:ident => $body:expr) => {
        match $self {
            Point::P256($p) => $body,
            Point::P384($p) => $body,
            Point::Secp256k1($p) => $body,
            Point::Bls12381G1($p) => $body,
            Point::Edwards25519($p) => $body,
        }
    };
}

impl Point {
    /// Curve this point belongs to.
    pub fn curve(&self) -> CurveId {
        match self {
            Point::P256(_) => CurveId::P256,
            Point::P384(_) => CurveId::P384,
            Point::Secp256k1(_) => CurveId::Secp256k1,
            Point::Bls12381G1(_) => CurveId::Bls12381G1,
            Point::Edwards25519(_) => CurveId::Edwards25519,
        }
    }

    pub fn is_identity(&self) -> bool {
        for_each_curve!(self, p => p.is_zero())
    }

    pub fn is_on_curve(&self) -> bool {
        for_each_curve!(self, p => p.is_on_curve())
    }

    pub fn is_in_prime_order_subgroup(&self) -> bool {
        for_each_curve!(self, p => p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve())
    }
}

/// Ties a registered target curve to its tagged representations.
pub trait RegistryTarget: AffineRepr {
    const CURVE: CurveId;
}

macro_rules! registry_target {
    ($affine:ty, $scalar:ty, $curve:ident) => {
        impl RegistryTarget for $affine {
            const CURVE: CurveId = CurveId::$curve;
        }

        impl From<$affine> for Point {
            fn from(p: $affine) -> Self {
                Point::$curve(p)
            }
        }

        impl From<$scalar> for Scalar {
            fn from(s: $scalar) -> Self {
                Scalar::$curve(s)
            }
        }
    };
}

registry_target!(ark_secp256r1::Affine, ark_secp256r1::Fr, P256);
registry_target!(ark_secp384r1::Affine, ark_secp384r1::Fr, P384);
registry_target!(ark_secp256k1::Affine, ark_secp256k1::Fr, Secp256k1);
// `ark_bls12_381::G1Affine` is a type alias that resolves through the
// `Bls12Config::G1Config` associated-type projection; coherence checking
// cannot normalize that alias when used directly as an impl's `Self`
// type, so it is spelled out concretely here to avoid a spurious E0119.
registry_target!(
    ark_ec::short_weierstrass::Affine<ark_bls12_381::g1::Config>,
    ark_bls12_381::Fr,
    Bls12381G1
);
registry_target!(ark_ed25519::EdwardsAffine, ark_ed25519::Fr, Edwards25519);

/// A complete, tag-bound function hashing byte strings to curve points.
pub trait HashToPoint: Send + Sync {
    /// Identifier of the suite this encoder was resolved from.
    fn suite_id(&self) -> &'static str;

    /// Destination curve.
    fn curve(&self) -> CurveId;

    /// Whether the output distribution is indifferentiable from a random
    /// oracle.
    fn is_random_oracle(&self) -> bool;

    /// Hash `msg` to a point of the curve's prime-order subgroup.
    fn hash(&self, msg: &[u8]) -> Point;

    /// Hash `msg` to an element of the curve's scalar field.
    fn hash_to_scalar(&self, msg: &[u8]) -> Scalar;
}

impl<S: Suite> HashToPoint for Encoder<S>
where
    S::Affine: RegistryTarget,
    AffinePoint<S>: Into<Point>,
    ScalarField<S>: Into<Scalar>,
{
    fn suite_id(&self) -> &'static str {
        S::SUITE_ID
    }

    fn curve(&self) -> CurveId {
        <S::Affine as RegistryTarget>::CURVE
    }

    fn is_random_oracle(&self) -> bool {
        S::RANDOM_ORACLE
    }

    fn hash(&self, msg: &[u8]) -> Point {
        Encoder::hash(self, msg).into()
    }

    fn hash_to_scalar(&self, msg: &[u8]) -> Scalar {
        Encoder::hash_to_scalar(self, msg).into()
    }
}

type Constructor = fn(&[u8]) -> Result<Box<dyn HashToPoint>, Error>;

fn construct<S>(dst: &[u8]) -> Result<Box<dyn HashToPoint>, Error>
where
    S: Suite,
    S::Affine: RegistryTarget,
    AffinePoint<S>: Into<Point>,
    ScalarField<S>: Into<Scalar>,
{
    Ok(Box::new(Encoder::<S>::new(dst)?))
}

macro_rules! registry_entry {
    ($suite:ty) => {
        (<$suite as Suite>::SUITE_ID, construct::<$suite>)
    };
}

const REGISTRY: &[(&str, Constructor)] = &[
    registry_entry!(suites::p256::P256Sha256SswuNu),
    registry_entry!(suites::p256::P256Sha256SswuRo),
    registry_entry!(suites::p256::P256Sha256SvdwNu),
    registry_entry!(suites::p256::P256Sha256SvdwRo),
    registry_entry!(suites::p384::P384Sha512SswuNu),
    registry_entry!(suites::p384::P384Sha512SswuRo),
    registry_entry!(suites::p384::P384Sha512SvdwNu),
    registry_entry!(suites::p384::P384Sha512SvdwRo),
    registry_entry!(suites::p384::P384Sha384SswuNu),
    registry_entry!(suites::p384::P384Sha384SswuRo),
    registry_entry!(suites::secp256k1::Secp256k1Sha256SswuNu),
    registry_entry!(suites::secp256k1::Secp256k1Sha256SswuRo),
    registry_entry!(suites::secp256k1::Secp256k1Sha256SvdwNu),
    registry_entry!(suites::secp256k1::Secp256k1Sha256SvdwRo),
    registry_entry!(suites::bls12_381::Bls12381G1Sha256SswuNu),
    registry_entry!(suites::bls12_381::Bls12381G1Sha256SswuRo),
    registry_entry!(suites::bls12_381::Bls12381G1Sha256SvdwNu),
    registry_entry!(suites::bls12_381::Bls12381G1Sha256SvdwRo),
    registry_entry!(suites::ed25519::Edwards25519Sha256Ell2Nu),
    registry_entry!(suites::ed25519::Edwards25519Sha256Ell2Ro),
    registry_entry!(suites::ed25519::Edwards25519Sha512Ell2Nu),
    registry_entry!(suites::ed25519::Edwards25519Sha512Ell2Ro),
];

/// Resolve a suite identifier, binding the returned encoder to `dst`.
pub fn resolve(id: &str, dst: &[u8]) -> Result<Box<dyn HashToPoint>, Error> {
    let (_, constructor) = REGISTRY
        .iter()
        .find(|(suite_id, _)| *suite_id == id)
        .ok_or(Error::UnsupportedSuite)?;
    constructor(dst)
}

/// Identifiers of every registered suite.
pub fn suite_ids() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(id, _)| *id)
}
