//! Uniformity and permutation properties of the sampling layer.
//!
//! The exact-equidistribution tests run the rejection mapping over one
//! full raw period, where the full-period property makes the expected
//! counts exact rather than statistical. A coarse frequency check over
//! 100_000 live draws guards the `sample_uniform` loop itself.
//!
//! Coverage:
//! - Exact equidistribution of the rejection mapping for n ∈ {2, 6, 52, 75}
//! - Frequency sanity over live draws
//! - Permutation property of pool drains
//! - Pool exhaustion and rebuild lifecycle

use lfsr_sampler::{Lfsr, LfsrError, Pool, RegisterWidth};

// ═══════════════════════════════════════════════════════════════════════
// Uniformity
// ═══════════════════════════════════════════════════════════════════════

/// Replays the rejection rule over one full raw period and checks that
/// each outcome in `[1, n]` receives exactly `threshold / n` hits and
/// exactly `max - threshold` raw values are rejected.
fn assert_exact_equidistribution(width: RegisterWidth, n: u32) {
    let max_value = width.max_value();
    let threshold = max_value - (max_value % n);
    let mut rng = Lfsr::new(width, 1).unwrap();
    let mut counts = vec![0u32; n as usize + 1];
    let mut rejected = 0u32;

    for _ in 0..max_value {
        let raw = rng.next_value();
        if raw <= threshold {
            counts[(1 + raw % n) as usize] += 1;
        } else {
            rejected += 1;
        }
    }

    assert_eq!(rejected, max_value - threshold, "n={}", n);
    for outcome in 1..=n {
        assert_eq!(
            counts[outcome as usize],
            threshold / n,
            "outcome {} over-/under-represented for n={}",
            outcome,
            n
        );
    }
}

#[test]
fn exact_equidistribution_w16() {
    for n in [2, 6, 52, 75] {
        assert_exact_equidistribution(RegisterWidth::W16, n);
    }
}

#[test]
fn exact_equidistribution_w17() {
    for n in [2, 6, 52, 75] {
        assert_exact_equidistribution(RegisterWidth::W17, n);
    }
}

/// Coarse frequency check over live `sample_uniform` draws. The bound is
/// deliberately loose; exactness is covered by the full-period tests.
#[test]
fn live_draw_frequencies_are_plausible() {
    const TRIALS: u32 = 100_000;
    for n in [2u32, 6, 52, 75] {
        let mut rng = Lfsr::new(RegisterWidth::W17, 1).unwrap();
        let mut counts = vec![0u32; n as usize + 1];
        for _ in 0..TRIALS {
            let value = rng.sample_uniform(n).unwrap();
            counts[value as usize] += 1;
        }
        let expected = TRIALS / n;
        let slack = expected / 4;
        for outcome in 1..=n {
            let count = counts[outcome as usize];
            assert!(
                count >= expected - slack && count <= expected + slack,
                "n={} outcome={} count={} expected≈{}",
                n,
                outcome,
                count,
                expected
            );
        }
    }
}

/// For the largest legal range the rejection rule never fires, so the
/// sampler is the raw sequence mapped through `1 + (r % max)`.
#[test]
fn sample_uniform_full_range_accepts_everything() {
    let max = RegisterWidth::W16.max_value();
    let mut sampler = Lfsr::new(RegisterWidth::W16, 1).unwrap();
    let mut raw = Lfsr::new(RegisterWidth::W16, 1).unwrap();
    for _ in 0..1000 {
        // threshold == max, so every raw value r maps to 1 + (r % max);
        // only r == max wraps to 1.
        let expected = 1 + raw.next_value() % max;
        assert_eq!(sampler.sample_uniform(max), Ok(expected));
    }
}

#[test]
fn invalid_range_consumes_nothing() {
    let mut rng = Lfsr::new(RegisterWidth::W17, 777).unwrap();
    let before = rng.clone();
    assert_eq!(rng.sample_uniform(0), Err(LfsrError::InvalidRange));
    assert_eq!(rng.sample_uniform(131072), Err(LfsrError::InvalidRange));
    assert_eq!(rng, before);
}

// ═══════════════════════════════════════════════════════════════════════
// Permutation property
// ═══════════════════════════════════════════════════════════════════════

/// Draining a pool of k items yields k distinct items covering the
/// population exactly once, and the (k+1)-th draw fails.
#[test]
fn drain_covers_population_exactly_once() {
    for k in [1usize, 2, 5, 52, 75] {
        let mut rng = Lfsr::new(RegisterWidth::W17, 424242).unwrap();
        let mut pool = Pool::new((1..=k as u32).collect::<Vec<u32>>());
        let mut drawn = Vec::with_capacity(k);
        for _ in 0..k {
            drawn.push(pool.draw(&mut rng).unwrap());
        }
        assert!(pool.is_empty());
        assert_eq!(pool.draw(&mut rng), Err(LfsrError::EmptyPopulation));

        drawn.sort_unstable();
        assert_eq!(drawn, (1..=k as u32).collect::<Vec<u32>>(), "k={}", k);
    }
}

/// Different seeds produce different permutations of a 52-card deck; the
/// same seed reproduces the same permutation.
#[test]
fn shuffle_is_seed_deterministic() {
    let deck = || (1..=52).collect::<Vec<u32>>();

    let mut rng_a = Lfsr::new(RegisterWidth::W17, 1).unwrap();
    let mut rng_b = Lfsr::new(RegisterWidth::W17, 1).unwrap();
    let mut rng_c = Lfsr::new(RegisterWidth::W17, 2).unwrap();

    let shuffle_a = Pool::new(deck()).shuffle(&mut rng_a).unwrap();
    let shuffle_b = Pool::new(deck()).shuffle(&mut rng_b).unwrap();
    let shuffle_c = Pool::new(deck()).shuffle(&mut rng_c).unwrap();

    assert_eq!(shuffle_a, shuffle_b);
    assert_ne!(shuffle_a, shuffle_c);
    assert_ne!(shuffle_a, deck(), "seed 1 must actually permute the deck");
}

/// Removal preserves the relative order of the untouched remainder, so
/// position-based draws keep their original-population meaning.
#[test]
fn remainder_keeps_relative_order() {
    let mut rng = Lfsr::new(RegisterWidth::W16, 9999).unwrap();
    let population: Vec<u32> = (1..=20).collect();
    let mut pool = Pool::new(population.clone());

    while pool.len() > 1 {
        pool.draw(&mut rng).unwrap();
        let remaining = pool.remaining();
        for window in remaining.windows(2) {
            assert!(
                window[0] < window[1],
                "relative order broken: {:?}",
                remaining
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Pool lifecycle
// ═══════════════════════════════════════════════════════════════════════

/// Fresh → Drawing → Exhausted → (caller rebuild) → Fresh. Two successive
/// cages of 75 bingo balls both cover the full population, but in
/// different orders because the generator keeps advancing.
#[test]
fn exhaustion_and_rebuild_lifecycle() {
    let cage = || (1..=75).collect::<Vec<u32>>();
    let mut rng = Lfsr::new(RegisterWidth::W17, 1).unwrap();

    let first_round = Pool::new(cage()).shuffle(&mut rng).unwrap();
    let second_round = Pool::new(cage()).shuffle(&mut rng).unwrap();

    let mut sorted_first = first_round.clone();
    sorted_first.sort_unstable();
    let mut sorted_second = second_round.clone();
    sorted_second.sort_unstable();

    assert_eq!(sorted_first, cage());
    assert_eq!(sorted_second, cage());
    assert_ne!(first_round, second_round);
}

/// A failed draw leaves both the pool and the generator untouched.
#[test]
fn failed_draw_is_atomic() {
    let mut rng = Lfsr::new(RegisterWidth::W16, 5).unwrap();
    let rng_before = rng.clone();
    let mut pool: Pool<u32> = Pool::new(Vec::new());
    let pool_before = pool.clone();

    assert_eq!(pool.draw(&mut rng), Err(LfsrError::EmptyPopulation));
    assert_eq!(rng, rng_before);
    assert_eq!(pool, pool_before);
}
