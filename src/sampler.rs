//! Unbiased range sampling and without-replacement draws.
//!
//! Layers two numeric primitives on top of the raw LFSR sequence:
//! [`Lfsr::sample_uniform`] maps the generator onto an arbitrary range
//! `[1, n]` without modulo bias, and [`Pool`] turns repeated range samples
//! into without-replacement draws from a finite ordered population.

use crate::error::LfsrError;
use crate::lfsr::Lfsr;

impl Lfsr {
    /// Returns an unbiased pseudo-random integer in `[1, n]`.
    ///
    /// Uses rejection sampling: raw values above the largest multiple of
    /// `n` not exceeding the generator maximum are discarded, so every
    /// accepted residue class has identical mass and each outcome in
    /// `[1, n]` is equally likely. The rejection loop is unbounded in
    /// theory but consumes fewer than 2 raw values on average for any `n`,
    /// and cannot run past one full generator period since at least one
    /// value per period is always accepted.
    ///
    /// The generator state advances on every raw draw, accepted or
    /// rejected.
    ///
    /// # Parameters
    /// - `n`: Size of the desired range, `1..=width.max_value()`.
    ///
    /// # Errors
    /// Returns [`LfsrError::InvalidRange`] if `n` is zero or exceeds the
    /// generator maximum. No raw values are consumed on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfsr_sampler::{Lfsr, RegisterWidth};
    ///
    /// let mut rng = Lfsr::new(RegisterWidth::W17, 1).unwrap();
    /// let roll = rng.sample_uniform(6).unwrap();
    /// assert!((1..=6).contains(&roll));
    /// ```
    pub fn sample_uniform(&mut self, n: u32) -> Result<u32, LfsrError> {
        let max_value = self.width().max_value();
        if n == 0 || n > max_value {
            return Err(LfsrError::InvalidRange);
        }
        // Largest multiple of n the generator can reach. Raw values are
        // drawn from [1, max_value], so accepting only r <= threshold
        // leaves each residue class with exactly threshold / n members.
        let threshold = max_value - (max_value % n);
        loop {
            let trial = self.next_value();
            if trial <= threshold {
                return Ok(1 + (trial % n));
            }
        }
    }
}

/// Ordered population for without-replacement sampling.
///
/// Items are removed by 1-based sampled index with the relative order of
/// the untouched remainder preserved. Order preservation matters: the next
/// draw indexes into what is left by position, so a swap-with-last removal
/// would change which item each index denotes.
///
/// The pool never refills itself. Exhaustion is reported through
/// [`is_empty`](Self::is_empty) and [`LfsrError::EmptyPopulation`]; when a
/// fresh pool is wanted (a new deck, a new cage of bingo balls), the caller
/// rebuilds one.
///
/// # Examples
///
/// Dealing from a deck until it runs out:
///
/// ```
/// use lfsr_sampler::{Lfsr, Pool, RegisterWidth};
///
/// let mut rng = Lfsr::new(RegisterWidth::W17, 1).unwrap();
/// let mut deck = Pool::new((1..=52).collect());
/// while !deck.is_empty() {
///     let card = deck.draw(&mut rng).unwrap();
///     assert!((1..=52).contains(&card));
/// }
/// assert!(deck.draw(&mut rng).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Pool<T> {
    /// Creates a pool over the given ordered population.
    pub fn new(items: Vec<T>) -> Self {
        Pool { items }
    }

    /// Returns the number of items remaining.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` once the population is exhausted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the remaining items in their current order.
    pub fn remaining(&self) -> &[T] {
        &self.items
    }

    /// Draws one item from the population without replacement.
    ///
    /// Samples a 1-based index uniformly over the remaining items and
    /// removes the item at that position; all other items keep their
    /// relative order. Draining a pool of `k` items this way yields a
    /// uniformly random permutation of the original population.
    ///
    /// The operation is atomic: on any error the pool and the generator
    /// are unchanged.
    ///
    /// # Parameters
    /// - `rng`: The sequence generator supplying the index sample.
    ///
    /// # Errors
    /// Returns [`LfsrError::EmptyPopulation`] if no items remain, or
    /// [`LfsrError::InvalidRange`] if the population is larger than the
    /// generator maximum.
    pub fn draw(&mut self, rng: &mut Lfsr) -> Result<T, LfsrError> {
        if self.items.is_empty() {
            return Err(LfsrError::EmptyPopulation);
        }
        let count = u32::try_from(self.items.len()).map_err(|_| LfsrError::InvalidRange)?;
        let index = rng.sample_uniform(count)?;
        Ok(self.items.remove(index as usize - 1))
    }

    /// Drains the pool into a pseudo-random permutation of its population.
    ///
    /// # Parameters
    /// - `rng`: The sequence generator driving the draws.
    ///
    /// # Errors
    /// Returns [`LfsrError::InvalidRange`] if the population is larger
    /// than the generator maximum. Never fails for a pool that fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfsr_sampler::{Lfsr, Pool, RegisterWidth};
    ///
    /// let mut rng = Lfsr::new(RegisterWidth::W16, 1).unwrap();
    /// let shuffled = Pool::new(vec![1, 2, 3, 4, 5]).shuffle(&mut rng).unwrap();
    /// assert_eq!(shuffled, vec![3, 1, 5, 2, 4]);
    /// ```
    pub fn shuffle(mut self, rng: &mut Lfsr) -> Result<Vec<T>, LfsrError> {
        let mut shuffled = Vec::with_capacity(self.items.len());
        while !self.items.is_empty() {
            shuffled.push(self.draw(rng)?);
        }
        Ok(shuffled)
    }
}
