//! Session state, negotiated key and wire messages.
//!
//! Messages are `#[repr(C)]` byte structs so the field layout *is* the wire
//! layout. Secret types implement `ZeroizeOnDrop`.

use subtle::ConstantTimeEq;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    Error,
    math::NttPolynomial,
    params::{ACCEPTMSG_BYTES, KEY_BYTES, OFFERMSG_BYTES, POLYBYTES, RECBYTES, SYMBYTES},
};

/// Two concatenated 32-byte seeds, e.g. `seed || noise_seed`.
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub(crate) struct Sym2(pub [u8; SYMBYTES], pub [u8; SYMBYTES]);

/// First protocol message, offerer -> accepter: `pk || seed`.
#[derive(Clone, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct OfferMessage {
    pub(crate) public_poly: [u8; POLYBYTES],
    pub(crate) seed: [u8; SYMBYTES],
}

impl OfferMessage {
    #[must_use]
    pub fn from_bytes(bytes: &[u8; OFFERMSG_BYTES]) -> Self {
        zerocopy::transmute!(*bytes)
    }

    #[must_use]
    pub fn into_bytes(self) -> [u8; OFFERMSG_BYTES] {
        zerocopy::transmute!(self)
    }

    /// Seed the public polynomial `a` is expanded from.
    #[must_use]
    pub const fn seed(&self) -> &[u8; SYMBYTES] {
        &self.seed
    }
}

impl TryFrom<&[u8]> for OfferMessage {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        Self::read_from_bytes(bytes).map_err(|_| Error::InvalidLength {
            expected: OFFERMSG_BYTES,
            actual: bytes.len(),
        })
    }
}

impl AsRef<[u8]> for OfferMessage {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Debug for OfferMessage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OfferMessage")
            .field("len", &OFFERMSG_BYTES)
            .finish_non_exhaustive()
    }
}

/// Second protocol message, accepter -> offerer: `bp || rec`.
#[derive(Clone, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct AcceptMessage {
    pub(crate) public_poly: [u8; POLYBYTES],
    pub(crate) reconciliation: [u8; RECBYTES],
}

impl AcceptMessage {
    #[must_use]
    pub fn from_bytes(bytes: &[u8; ACCEPTMSG_BYTES]) -> Self {
        zerocopy::transmute!(*bytes)
    }

    #[must_use]
    pub fn into_bytes(self) -> [u8; ACCEPTMSG_BYTES] {
        zerocopy::transmute!(self)
    }
}

impl TryFrom<&[u8]> for AcceptMessage {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        Self::read_from_bytes(bytes).map_err(|_| Error::InvalidLength {
            expected: ACCEPTMSG_BYTES,
            actual: bytes.len(),
        })
    }
}

impl AsRef<[u8]> for AcceptMessage {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Debug for AcceptMessage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AcceptMessage")
            .field("len", &ACCEPTMSG_BYTES)
            .finish_non_exhaustive()
    }
}

/// Offerer's secret between [`offer`](crate::offer) and
/// [`finish`](crate::finish). Not `Clone`: a session finishes at most once.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Session {
    pub(crate) sk: NttPolynomial,
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

/// Negotiated 32-byte key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey {
    pub(crate) bytes: [u8; KEY_BYTES],
}

impl SharedKey {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.bytes
    }
}

impl From<&[u8; KEY_BYTES]> for SharedKey {
    #[inline]
    fn from(arr: &[u8; KEY_BYTES]) -> Self {
        Self { bytes: *arr }
    }
}

impl AsRef<[u8]> for SharedKey {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl ConstantTimeEq for SharedKey {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.bytes[..].ct_eq(&other.bytes[..])
    }
}

impl PartialEq for SharedKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedKey {}

impl core::fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedKey").finish_non_exhaustive()
    }
}

const _: () = {
    assert!(size_of::<OfferMessage>() == OFFERMSG_BYTES);
    assert!(size_of::<AcceptMessage>() == ACCEPTMSG_BYTES);
    assert!(size_of::<Sym2>() == 2 * SYMBYTES);
};
