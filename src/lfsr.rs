//! Linear-feedback shift register core.
//!
//! Implements a Fibonacci-style LFSR over a `width`-bit register with the
//! MSB-first bit-string convention: tap positions are counted from the
//! most-significant bit, the register shifts toward the MSB (which is
//! discarded), and the feedback parity bit enters at the LSB.
//!
//! Only the two validated maximal-length configurations are supported.
//! For both, starting from any nonzero seed the register visits every
//! nonzero `width`-bit value exactly once per period.

use crate::error::LfsrError;

/// Validated register widths with maximal-length tap configurations.
///
/// Tap indices are counted from the most-significant bit, 0-based. Both
/// configurations correspond to primitive feedback polynomials, so the
/// full-period property holds; arbitrary widths do not get that guarantee
/// and are rejected rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterWidth {
    /// 16-bit register, taps {0, 1, 3, 8}. Period 65535.
    W16,
    /// 17-bit register, taps {0, 3}. Period 131071.
    W17,
}

impl RegisterWidth {
    /// Returns the register width in bits.
    pub fn bits(self) -> u32 {
        match self {
            RegisterWidth::W16 => 16,
            RegisterWidth::W17 => 17,
        }
    }

    /// Returns the tap positions, counted 0-based from the MSB.
    pub fn taps(self) -> &'static [u32] {
        match self {
            RegisterWidth::W16 => &[0, 1, 3, 8],
            RegisterWidth::W17 => &[0, 3],
        }
    }

    /// Returns the largest value the register can hold (`2^width - 1`).
    ///
    /// This is also the generator period: every value in
    /// `[1, max_value()]` appears exactly once per cycle.
    pub fn max_value(self) -> u32 {
        (1u32 << self.bits()) - 1
    }

    /// Resolves a caller-supplied bit count to a validated width.
    ///
    /// # Parameters
    /// - `bits`: Requested register width in bits.
    ///
    /// # Errors
    /// Returns [`LfsrError::UnsupportedWidth`] for anything other than
    /// 16 or 17.
    pub fn from_bits(bits: u32) -> Result<Self, LfsrError> {
        match bits {
            16 => Ok(RegisterWidth::W16),
            17 => Ok(RegisterWidth::W17),
            _ => Err(LfsrError::UnsupportedWidth),
        }
    }
}

/// Maximal-length LFSR sequence generator.
///
/// Holds the register state (low `width` bits of a `u32`, never zero) and
/// the seed it was constructed with. Each [`next_value`](Self::next_value)
/// call advances the register one tick and returns the new state as an
/// integer, so successive calls walk the full `[1, 2^width - 1]` cycle.
///
/// # Examples
///
/// ```
/// use lfsr_sampler::{Lfsr, RegisterWidth};
///
/// let mut rng = Lfsr::new(RegisterWidth::W16, 1).unwrap();
/// assert_eq!(rng.next_value(), 2);
/// assert_eq!(rng.next_value(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
    width: RegisterWidth,
    seed: u32,
    state: u32,
}

impl Lfsr {
    /// Creates a new generator from a nonzero `width`-bit seed.
    ///
    /// The all-zero register is a fixed point of the transition (it maps to
    /// itself), so a zero seed is rejected here instead of being corrected
    /// at run time.
    ///
    /// # Parameters
    /// - `width`: One of the validated register widths.
    /// - `seed`: Initial register value, `1..=width.max_value()`.
    ///
    /// # Errors
    /// Returns [`LfsrError::InvalidSeed`] if `seed` is zero or does not fit
    /// in `width` bits.
    pub fn new(width: RegisterWidth, seed: u32) -> Result<Self, LfsrError> {
        if seed == 0 || seed > width.max_value() {
            return Err(LfsrError::InvalidSeed);
        }
        Ok(Lfsr {
            width,
            seed,
            state: seed,
        })
    }

    /// Creates a new generator by folding an arbitrary integer into range.
    ///
    /// Any raw value, including zero and negatives, is mapped
    /// deterministically into `[1, 2^width - 1]` via
    /// `1 + ((raw - 1) mod (2^width - 1))`, so this constructor always
    /// yields a usable seed. Callers deriving seeds from external sources
    /// (elapsed time, user input) should route them through here.
    ///
    /// # Parameters
    /// - `width`: One of the validated register widths.
    /// - `raw`: Any integer; folded, never taken as literal zero.
    pub fn from_folded_seed(width: RegisterWidth, raw: i64) -> Self {
        let modulus = width.max_value() as i128;
        let folded = 1 + (raw as i128 - 1).rem_euclid(modulus);
        Lfsr {
            width,
            seed: folded as u32,
            state: folded as u32,
        }
    }

    /// Reconstructs a generator from its canonical bit-string form.
    ///
    /// The canonical form is exactly `width` characters, each `'0'` or
    /// `'1'`, most-significant bit first.
    ///
    /// # Parameters
    /// - `text`: The seed bit-string.
    /// - `width`: One of the validated register widths.
    ///
    /// # Errors
    /// Returns [`LfsrError::InvalidSeed`] if the string has the wrong
    /// length, contains characters other than `'0'`/`'1'`, or encodes zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfsr_sampler::{Lfsr, RegisterWidth};
    ///
    /// let mut rng = Lfsr::from_bit_string("0000000000000001", RegisterWidth::W16).unwrap();
    /// assert_eq!(rng.next_value(), 2);
    /// ```
    pub fn from_bit_string(text: &str, width: RegisterWidth) -> Result<Self, LfsrError> {
        if text.len() != width.bits() as usize {
            return Err(LfsrError::InvalidSeed);
        }
        let mut value: u32 = 0;
        for ch in text.chars() {
            let bit = match ch {
                '0' => 0,
                '1' => 1,
                _ => return Err(LfsrError::InvalidSeed),
            };
            value = (value << 1) | bit;
        }
        Self::new(width, value)
    }

    /// Returns the current register state as the canonical bit-string.
    ///
    /// The result round-trips through
    /// [`from_bit_string`](Self::from_bit_string) to a generator with the
    /// same future output sequence.
    pub fn to_bit_string(&self) -> String {
        let bits = self.width.bits();
        let mut text = String::with_capacity(bits as usize);
        for pos in (0..bits).rev() {
            if (self.state >> pos) & 1 == 1 {
                text.push('1');
            } else {
                text.push('0');
            }
        }
        text
    }

    /// Returns the register width configuration.
    pub fn width(&self) -> RegisterWidth {
        self.width
    }

    /// Returns the seed the generator was constructed with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the current register state as an integer.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Restores the register to the construction seed, replaying the
    /// sequence from the start.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }

    /// Advances the register one tick and returns the new state's value.
    ///
    /// The feedback bit is the parity (cumulative XOR) of the tapped bits
    /// of the current state; the register then shifts one position toward
    /// the MSB, discarding it, with the feedback bit appended at the LSB.
    /// The output never equals zero, and over one full period every value
    /// in `[1, 2^width - 1]` appears exactly once.
    pub fn next_value(&mut self) -> u32 {
        let bits = self.width.bits();
        let mut feedback = 0u32;
        for &tap in self.width.taps() {
            feedback ^= (self.state >> (bits - 1 - tap)) & 1;
        }
        self.state = ((self.state << 1) & self.width.max_value()) | feedback;
        self.state
    }
}
