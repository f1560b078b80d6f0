//! Deterministic maps from field elements to curve points.
//!
//! Choosing a map for a target curve:
//!
//! - a supersingular curve: the Boneh-Franklin method ([`BonehFranklin`]);
//! - a twisted Edwards curve: Elligator 2 ([`Elligator2`]);
//! - a Weierstrass curve: the Simplified SWU method ([`Sswu`]), routed
//!   through an isogenous domain curve when either `A` or `B` is zero;
//! - otherwise: the Shallue-van de Woestijne method ([`Svdw`]).
//!
//! Maps are total functions and must not be used standalone: their correct
//! and secure usage is fixed by the hash-to-curve suite composing them with
//! message expansion and cofactor clearing.
//!
//! Every map validates its curve preconditions and derives its per-instance
//! constants at construction; mapping itself is infallible and deterministic.

mod bf;
mod elligator2;
mod sswu;
mod svdw;

pub use bf::BonehFranklin;
pub use elligator2::Elligator2;
pub use sswu::{Isogeny, Sswu};
pub use svdw::Svdw;

use ark_ec::AffineRepr;

/// A deterministic total map from the base field onto the curve.
pub trait MapToCurve<A: AffineRepr> {
    /// Map a field element to an affine point (possibly the identity).
    ///
    /// The output depends only on `u` and the constants fixed at
    /// construction.
    fn map_to_curve(&self, u: A::BaseField) -> A;
}
