//! Maximal-length LFSR pseudo-random sequences with sampling primitives.
//!
//! Generates deterministic pseudo-random integer sequences from a binary
//! linear-feedback shift register and layers two numeric primitives on
//! top: unbiased sampling over an arbitrary range and without-replacement
//! draws from a finite ordered population.
//!
//! # Architecture
//!
//! ```text
//! Lfsr            (register state + step function — one tick per call)
//!     ↑ consumed by
//! sample_uniform  (rejection sampling onto [1, n], no modulo bias)
//!     ↑ consumed by
//! Pool            (shrinking ordered population — permutation draws)
//! ```
//!
//! Two register configurations are validated, both maximal-length: 16 bits
//! with taps {0, 1, 3, 8} (period 65535) and 17 bits with taps {0, 3}
//! (period 131071). Starting from any nonzero seed, the generator visits
//! every nonzero value of the register exactly once per period and never
//! produces zero.
//!
//! The crate is a pure computational core: single-threaded, no I/O, no
//! hidden global state. Each caller owns its generator and populations.
//! Not suitable for cryptography.
//!
//! # Examples
//!
//! Roll a die and shuffle a deck with a reproducible seed:
//!
//! ```
//! use lfsr_sampler::{Lfsr, Pool, RegisterWidth};
//!
//! let mut rng = Lfsr::new(RegisterWidth::W17, 1).unwrap();
//!
//! let roll = rng.sample_uniform(6).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! let deck: Vec<u32> = (1..=52).collect();
//! let shuffled = Pool::new(deck).shuffle(&mut rng).unwrap();
//! assert_eq!(shuffled.len(), 52);
//! ```
//!
//! Persist and restore a generator through its canonical bit-string:
//!
//! ```
//! use lfsr_sampler::{Lfsr, RegisterWidth};
//!
//! let mut rng = Lfsr::new(RegisterWidth::W16, 40961).unwrap();
//! let saved = rng.to_bit_string();
//!
//! let mut restored = Lfsr::from_bit_string(&saved, RegisterWidth::W16).unwrap();
//! assert_eq!(rng.next_value(), restored.next_value());
//! ```

#![deny(clippy::all)]

pub mod error;

mod lfsr;
#[cfg(feature = "rand")]
mod rand_support;
mod sampler;

pub use error::LfsrError;
pub use lfsr::{Lfsr, RegisterWidth};
pub use sampler::Pool;
