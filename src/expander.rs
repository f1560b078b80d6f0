//! Message expansion procedures.
//!
//! Implements the two `expand_message` variants defined by
//! [RFC-9380](https://datatracker.ietf.org/doc/rfc9380) section 5.3:
//!
//! - [`XmdExpander`]: `expand_message_xmd`, built on a Merkle-Damgård hash
//!   (e.g. SHA-256, SHA-512).
//! - [`XofExpander`]: `expand_message_xof`, built on an extendable output
//!   function (e.g. SHAKE-128, SHAKE-256).
//!
//! An expander is bound to a domain separation tag at construction and is
//! stateless across calls: every expansion instantiates a fresh hasher.

use ark_std::{vec, vec::Vec};
use core::marker::PhantomData;
use digest::{
    ExtendableOutput, FixedOutputReset, Update, XofReader,
    crypto_common::BlockSizeUser,
};

use crate::Error;

/// Maximum domain separation tag length before the oversize reduction kicks in.
pub const MAX_DST_LEN: usize = 255;

/// Maximum expansion output length (`len_in_bytes` is encoded on two bytes).
pub const MAX_LEN_IN_BYTES: usize = u16::MAX as usize;

/// Prefix hashed in front of an oversized DST to derive the effective tag.
const OVERSIZE_DST_PREFIX: &[u8] = b"H2C-OVERSIZE-DST-";

/// Deterministic variable-length byte derivation bound to a domain
/// separation tag.
pub trait Expander {
    /// Produce exactly `len_in_bytes` pseudo-random bytes for `msg`.
    ///
    /// The empty message is a valid input. Lengths violating the expander
    /// bounds yield [`Error::ExpandTooLarge`], never a truncated output.
    fn expand(&self, msg: &[u8], len_in_bytes: usize) -> Result<Vec<u8>, Error>;

    /// Validate an output length without running the expansion.
    fn check_len(&self, len_in_bytes: usize) -> Result<(), Error>;
}

/// Domain separation tag after the oversize reduction, if any.
#[derive(Clone, Debug)]
struct Dst(Vec<u8>);

impl Dst {
    fn new_xmd<H: Default + FixedOutputReset>(dst: &[u8]) -> Result<Self, Error> {
        if dst.is_empty() {
            return Err(Error::InvalidDst);
        }
        let dst = if dst.len() > MAX_DST_LEN {
            let mut hasher = H::default();
            Update::update(&mut hasher, OVERSIZE_DST_PREFIX);
            Update::update(&mut hasher, dst);
            hasher.finalize_fixed_reset().to_vec()
        } else {
            dst.to_vec()
        };
        Ok(Self(dst))
    }

    fn new_xof<X: Default + ExtendableOutput>(dst: &[u8], k: usize) -> Result<Self, Error> {
        if dst.is_empty() {
            return Err(Error::InvalidDst);
        }
        let dst = if dst.len() > MAX_DST_LEN {
            let mut xof = X::default();
            xof.update(OVERSIZE_DST_PREFIX);
            xof.update(dst);
            let mut out = vec![0_u8; (2 * k).div_ceil(8)];
            xof.finalize_xof().read(&mut out);
            out
        } else {
            dst.to_vec()
        };
        Ok(Self(dst))
    }

    /// Feed `DST_prime = DST || I2OSP(len(DST), 1)` into the hasher.
    fn update_prime(&self, hasher: &mut impl Update) {
        hasher.update(&self.0);
        hasher.update(&[self.0.len() as u8]);
    }
}

/// `expand_message_xmd` parameterized by a fixed-output hash `H`.
#[derive(Clone, Debug)]
pub struct XmdExpander<H> {
    dst: Dst,
    _hasher: PhantomData<H>,
}

impl<H> XmdExpander<H>
where
    H: Default + Clone + FixedOutputReset + BlockSizeUser,
{
    /// Bind the expander to `dst`.
    ///
    /// A tag longer than 255 bytes is replaced by
    /// `H("H2C-OVERSIZE-DST-" || dst)`.
    pub fn new(dst: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            dst: Dst::new_xmd::<H>(dst)?,
            _hasher: PhantomData,
        })
    }
}

impl<H> Expander for XmdExpander<H>
where
    H: Default + Clone + FixedOutputReset + BlockSizeUser,
{
    fn expand(&self, msg: &[u8], len_in_bytes: usize) -> Result<Vec<u8>, Error> {
        self.check_len(len_in_bytes)?;
        let b_in_bytes = H::output_size();
        let ell = len_in_bytes.div_ceil(b_in_bytes);

        let mut hasher = H::default();
        // b_0 = H(Z_pad || msg || l_i_b_str || 0x00 || DST_prime)
        Update::update(&mut hasher, &vec![0_u8; H::block_size()]);
        Update::update(&mut hasher, msg);
        Update::update(&mut hasher, &(len_in_bytes as u16).to_be_bytes());
        Update::update(&mut hasher, &[0_u8]);
        self.dst.update_prime(&mut hasher);
        let b_0 = hasher.finalize_fixed_reset();

        // b_1 = H(b_0 || 0x01 || DST_prime)
        Update::update(&mut hasher, &b_0);
        Update::update(&mut hasher, &[1_u8]);
        self.dst.update_prime(&mut hasher);
        let mut b_i = hasher.finalize_fixed_reset();

        let mut uniform = Vec::with_capacity(ell * b_in_bytes);
        uniform.extend_from_slice(&b_i);
        // b_i = H((b_0 XOR b_{i-1}) || I2OSP(i, 1) || DST_prime)
        for i in 2..=ell {
            for (b, b0) in b_i.iter_mut().zip(b_0.iter()) {
                *b ^= b0;
            }
            Update::update(&mut hasher, &b_i);
            Update::update(&mut hasher, &[i as u8]);
            self.dst.update_prime(&mut hasher);
            b_i = hasher.finalize_fixed_reset();
            uniform.extend_from_slice(&b_i);
        }
        uniform.truncate(len_in_bytes);
        Ok(uniform)
    }

    fn check_len(&self, len_in_bytes: usize) -> Result<(), Error> {
        let ell = len_in_bytes.div_ceil(H::output_size());
        if ell > 255 || len_in_bytes > MAX_LEN_IN_BYTES {
            return Err(Error::ExpandTooLarge);
        }
        Ok(())
    }
}

/// `expand_message_xof` parameterized by an extendable output function `X`.
#[derive(Clone, Debug)]
pub struct XofExpander<X> {
    dst: Dst,
    _xof: PhantomData<X>,
}

impl<X> XofExpander<X>
where
    X: Default + Clone + ExtendableOutput,
{
    /// Bind the expander to `dst` at security level `k` bits.
    ///
    /// A tag longer than 255 bytes is replaced by `ceil(2k/8)` bytes
    /// squeezed from `X("H2C-OVERSIZE-DST-" || dst)`.
    pub fn new(dst: &[u8], k: usize) -> Result<Self, Error> {
        Ok(Self {
            dst: Dst::new_xof::<X>(dst, k)?,
            _xof: PhantomData,
        })
    }
}

impl<X> Expander for XofExpander<X>
where
    X: Default + Clone + ExtendableOutput,
{
    fn expand(&self, msg: &[u8], len_in_bytes: usize) -> Result<Vec<u8>, Error> {
        self.check_len(len_in_bytes)?;
        let mut xof = X::default();
        // X(msg || l_i_b_str || DST_prime), read len_in_bytes bytes
        xof.update(msg);
        xof.update(&(len_in_bytes as u16).to_be_bytes());
        self.dst.update_prime(&mut xof);
        let mut uniform = vec![0_u8; len_in_bytes];
        xof.finalize_xof().read(&mut uniform);
        Ok(uniform)
    }

    fn check_len(&self, len_in_bytes: usize) -> Result<(), Error> {
        if len_in_bytes > MAX_LEN_IN_BYTES {
            return Err(Error::ExpandTooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn xmd_sha256_vectors() {
        testing::run_expander_vectors("expand_message_xmd_sha256_38");
    }

    #[test]
    fn empty_dst_is_rejected() {
        assert_eq!(
            XmdExpander::<sha2::Sha256>::new(b"").unwrap_err(),
            Error::InvalidDst
        );
        assert_eq!(
            XofExpander::<sha3::Shake128>::new(b"", 128).unwrap_err(),
            Error::InvalidDst
        );
    }

    #[test]
    fn xmd_output_bounds() {
        let exp = XmdExpander::<sha2::Sha256>::new(b"tag").unwrap();
        // ell = ceil(len / 32) must fit a single byte
        assert_eq!(exp.expand(b"msg", 255 * 32 + 1).unwrap_err(), Error::ExpandTooLarge);
        assert_eq!(exp.expand(b"msg", 8160).unwrap().len(), 8160);

        let exp = XmdExpander::<sha2::Sha512>::new(b"tag").unwrap();
        assert_eq!(exp.expand(b"msg", 65536).unwrap_err(), Error::ExpandTooLarge);
    }

    #[test]
    fn xof_output_bounds() {
        let exp = XofExpander::<sha3::Shake128>::new(b"tag", 128).unwrap();
        assert_eq!(exp.expand(b"msg", 65536).unwrap_err(), Error::ExpandTooLarge);
        assert_eq!(exp.expand(b"msg", 2048).unwrap().len(), 2048);
    }

    #[test]
    fn oversize_dst_is_rehashed() {
        use digest::Digest;
        let long = [0x41_u8; 300];

        // XMD: effective DST must be SHA-256("H2C-OVERSIZE-DST-" || dst).
        let reduced = sha2::Sha256::new()
            .chain_update(b"H2C-OVERSIZE-DST-")
            .chain_update(long)
            .finalize();
        let a = XmdExpander::<sha2::Sha256>::new(&long).unwrap();
        let b = XmdExpander::<sha2::Sha256>::new(&reduced).unwrap();
        assert_eq!(a.expand(b"msg", 64).unwrap(), b.expand(b"msg", 64).unwrap());

        // XOF: effective DST is ceil(2k/8) bytes of X("H2C-OVERSIZE-DST-" || dst).
        let mut xof = sha3::Shake128::default();
        xof.update(b"H2C-OVERSIZE-DST-");
        xof.update(&long);
        let mut reduced = [0_u8; 32];
        xof.finalize_xof().read(&mut reduced);
        let a = XofExpander::<sha3::Shake128>::new(&long, 128).unwrap();
        let b = XofExpander::<sha3::Shake128>::new(&reduced, 128).unwrap();
        assert_eq!(a.expand(b"msg", 64).unwrap(), b.expand(b"msg", 64).unwrap());
    }

    #[test]
    fn distinct_tags_decorrelate_output() {
        let a = XofExpander::<sha3::Shake256>::new(b"tag-a", 256).unwrap();
        let b = XofExpander::<sha3::Shake256>::new(b"tag-b", 256).unwrap();
        assert_ne!(a.expand(b"msg", 32).unwrap(), b.expand(b"msg", 32).unwrap());
    }
}
