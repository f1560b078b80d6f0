//! Registered cipher suites.
//!
//! One module per target curve; each suite is a zero-sized type
//! implementing [`crate::Suite`] with the parameters of its CFRG
//! identifier. All registered suites expand messages with
//! `expand_message_xmd`.

pub mod bls12_381;
pub mod ed25519;
pub mod p256;
pub mod p384;
pub mod secp256k1;

/// Declares a hash-to-curve suite type and its [`crate::Suite`] binding.
macro_rules! h2c_suite {
    (
        $(#[$attr:meta])*
        $name:ident, $id:literal,
        ro: $ro:literal, k: $k:literal, l: $l:literal,
        curve: $affine:ty, hash: $hasher:ty,
        map: $map:ty = $ctor:expr
    ) => {
        $(#[$attr])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name;

        impl $crate::Suite for $name {
            const SUITE_ID: &'static str = $id;
            const K: usize = $k;
            const L: usize = $l;
            const RANDOM_ORACLE: bool = $ro;

            type Affine = $affine;
            type Expander = $crate::expander::XmdExpander<$hasher>;
            type Map = $map;

            fn expander(dst: &[u8]) -> Result<Self::Expander, $crate::Error> {
                $crate::expander::XmdExpander::new(dst)
            }

            fn map() -> Result<Self::Map, $crate::Error> {
                $ctor
            }
        }
    };
}

pub(crate) use h2c_suite;
