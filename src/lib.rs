//! # Hash-to-curve suites for arkworks elliptic curves
//!
//! This library provides deterministic, constant-behavior hashing of
//! arbitrary byte strings onto elliptic curve points, suitable as a random
//! oracle in higher level protocols (BLS signatures, VOPRFs, PAKEs, VRFs).
//!
//! It implements the constructions standardized by
//! [RFC-9380](https://datatracker.ietf.org/doc/rfc9380) ("Hashing to
//! Elliptic Curves") on top of the [Arkworks](https://github.com/arkworks-rs)
//! curve and field backends:
//!
//! - **Message expansion**: `expand_message_xmd` and `expand_message_xof`
//!   ([`expander`]).
//! - **Hash-to-field**: partitioning expanded bytes into field elements
//!   ([`field`]).
//! - **Map-to-curve**: Simplified SWU (with an isogenous detour for curves
//!   with `A·B = 0`), Shallue-van de Woestijne, Elligator 2 and
//!   Boneh-Franklin ([`mapping`]).
//!
//! A cipher suite ([`Suite`]) binds a curve, a hash, an expander, a map and
//! the sampling parameters; an [`Encoder`] composes them with cofactor
//! clearing. The [`registry`] resolves CFRG suite identifier strings at
//! runtime.
//!
//! ## Built-in suites
//!
//! NIST P-256 and P-384 (SSWU and SVDW), secp256k1 and BLS12-381 G1 (SSWU
//! through a suite-provided isogeny, and SVDW), and edwards25519
//! (Elligator 2), each in random-oracle (`_RO_`) and non-uniform (`_NU_`)
//! variants. See [`suites`] for the full identifier list.
//!
//! ## Basic usage
//!
//! ```rust,ignore
//! use ark_h2c::{Encoder, suites::p256::P256Sha256SswuRo};
//!
//! // Bind an encoder to a protocol's domain separation tag.
//! let encoder = Encoder::<P256Sha256SswuRo>::new(b"MYPROTO-V01-CS01")?;
//!
//! // Hash messages to points of the prime-order subgroup.
//! let point = encoder.hash(b"message");
//!
//! // Or to scalars of the curve's scalar field.
//! let scalar = encoder.hash_to_scalar(b"message");
//! ```
//!
//! Runtime resolution by suite identifier:
//!
//! ```rust,ignore
//! let encoder = ark_h2c::registry::resolve("P256_XMD:SHA-256_SSWU_RO_", b"MYPROTO-V01-CS01")?;
//! assert!(encoder.is_random_oracle());
//! ```
//!
//! ## Features
//!
//! - `default`: `std`
//! - `asm`: assembly implementations of some low level hash and field
//!   operations.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Field;
use ark_std::vec::Vec;

pub mod expander;
pub mod field;
pub mod mapping;
pub mod registry;
pub mod suites;

#[cfg(test)]
pub(crate) mod testing;

use expander::Expander;
use mapping::MapToCurve;

pub type AffinePoint<S> = <S as Suite>::Affine;
pub type BaseField<S> = <AffinePoint<S> as AffineRepr>::BaseField;
pub type ScalarField<S> = <AffinePoint<S> as AffineRepr>::ScalarField;

/// Overarching errors.
///
/// Everything fallible happens while resolving a suite or constructing an
/// [`Encoder`]; hashing itself is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Suite identifier not present in the registry.
    UnsupportedSuite,
    /// Domain separation tag is empty.
    InvalidDst,
    /// Requested expansion output exceeds the expander bounds.
    ExpandTooLarge,
    /// Suite parameters failed a map's construction-time preconditions.
    MapPreconditionFailure,
}

/// Defines a hash-to-curve cipher suite.
///
/// A suite pins down every choice the construction leaves open: the target
/// curve, the expander and its hash primitive, the map-to-curve method with
/// its parameters, the per-coordinate sample length `L`, and whether the
/// encoding is indifferentiable from a random oracle.
///
/// Implementations are zero-sized tags; all per-instance state lives in the
/// [`Encoder`] built from them.
pub trait Suite: Copy + 'static {
    /// Suite identifier, in CFRG registry notation.
    const SUITE_ID: &'static str;

    /// Target security level in bits.
    const K: usize;

    /// Bytes sampled per base field coordinate, sized so that reduction
    /// modulo the field characteristic stays within `2^-K` of uniform:
    /// `L >= ceil((ceil(log2(p)) + K) / 8)`.
    const L: usize;

    /// Whether hashing uses the two-sample random-oracle composition
    /// (`_RO_`) or the single-sample non-uniform one (`_NU_`).
    const RANDOM_ORACLE: bool;

    /// Target curve point in affine representation.
    type Affine: AffineRepr;

    /// Message expansion bound to the suite's hash primitive.
    type Expander: Expander + Clone + Send + Sync;

    /// Map-to-curve method.
    type Map: MapToCurve<Self::Affine> + Clone + Send + Sync;

    /// Bind the suite's expander to a domain separation tag.
    fn expander(dst: &[u8]) -> Result<Self::Expander, Error>;

    /// Validate the map preconditions and precompute its constants.
    fn map() -> Result<Self::Map, Error>;
}

/// Hash-to-curve encoder for suite `S`, bound to a domain separation tag.
///
/// An encoder is immutable after construction and safe to share across
/// threads; concurrent [`hash`](Self::hash) calls yield identical results
/// for identical inputs.
#[derive(Clone)]
pub struct Encoder<S: Suite> {
    expander: S::Expander,
    map: S::Map,
}

impl<S: Suite> Encoder<S> {
    /// Bytes sampled when hashing to the scalar field, by the same
    /// security-margin rule as [`Suite::L`].
    const SCALAR_L: usize = field::len_per_base_elem::<ScalarField<S>>(S::K);

    /// Construct an encoder for `dst`.
    ///
    /// Validates the tag, the map preconditions and the (suite-fixed)
    /// expansion lengths, so that hashing cannot fail afterwards.
    pub fn new(dst: &[u8]) -> Result<Self, Error> {
        let expander = S::expander(dst)?;
        let m = BaseField::<S>::extension_degree() as usize;
        let count = if S::RANDOM_ORACLE { 2 } else { 1 };
        expander.check_len(count * m * S::L)?;
        expander.check_len(Self::SCALAR_L)?;
        let map = S::map()?;
        Ok(Self { expander, map })
    }

    /// Hash `msg` to a point of the curve's prime-order subgroup.
    pub fn hash(&self, msg: &[u8]) -> AffinePoint<S> {
        let point = if S::RANDOM_ORACLE {
            let u = self.hash_to_field(msg, 2);
            let q0 = self.map.map_to_curve(u[0]);
            let q1 = self.map.map_to_curve(u[1]);
            (q0.into_group() + q1).into_affine()
        } else {
            let u = self.hash_to_field(msg, 1);
            self.map.map_to_curve(u[0])
        };
        point.clear_cofactor()
    }

    /// Hash `msg` to an element of the curve's scalar field.
    pub fn hash_to_scalar(&self, msg: &[u8]) -> ScalarField<S> {
        field::hash_to_field::<ScalarField<S>, _>(&self.expander, msg, 1, Self::SCALAR_L)
            .expect("expansion lengths are validated at construction")[0]
    }

    /// Whether the output distribution is indifferentiable from a random
    /// oracle.
    pub const fn is_random_oracle(&self) -> bool {
        S::RANDOM_ORACLE
    }

    /// One-shot hashing with a per-call tag.
    ///
    /// Thin adapter over [`new`](Self::new) + [`hash`](Self::hash); prefer
    /// reusing an encoder constructed once per `(suite, DST)` pair.
    pub fn hash_once(dst: &[u8], msg: &[u8]) -> Result<AffinePoint<S>, Error> {
        Ok(Self::new(dst)?.hash(msg))
    }

    fn hash_to_field(&self, msg: &[u8], count: usize) -> Vec<BaseField<S>> {
        field::hash_to_field(&self.expander, msg, count, S::L)
            .expect("expansion lengths are validated at construction")
    }
}
