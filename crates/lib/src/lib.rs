//! `newhope-rs` -- NewHope post-quantum ephemeral key exchange.
//!
//! Two parties derive a shared 32-byte key from one round trip:
//!
//! 1. the offerer calls [`offer`], keeps the returned [`Session`] and sends
//!    the [`OfferMessage`];
//! 2. the accepter calls [`accept`] on the received bytes, obtains its
//!    [`SharedKey`] immediately and sends back the [`AcceptMessage`];
//! 3. the offerer calls [`finish`] with its session and the reply.
//!
//! The exchange is anonymous: it does not authenticate either party.

#![deny(unsafe_code)]

mod computation;
pub mod exchange;
pub mod hash;
pub mod params;
pub mod types;

pub use exchange::{accept, accept_derand, finish, offer, offer_derand};
pub use newhope_math as math;
pub use types::{AcceptMessage, OfferMessage, Session, SharedKey};

/// Errors returned by the key-exchange operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input message has the wrong length for its type.
    InvalidLength {
        /// Expected byte count.
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },
    /// A packed polynomial coefficient is not below q.
    InvalidPolynomial,
    /// The random-byte source failed.
    RandomSource,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected}, got {actual}")
            }
            Self::InvalidPolynomial => f.write_str("invalid polynomial encoding"),
            Self::RandomSource => f.write_str("random source failure"),
        }
    }
}

impl core::error::Error for Error {}
