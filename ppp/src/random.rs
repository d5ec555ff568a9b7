/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # Random numbers for exercises
//!
//! [RandomSource] is a seedable pseudo random number generator. The same seed always
//! produces the same sequence of values, which makes exercises reproducible. An unseeded
//! [RandomSource] starts from [DEFAULT_SEED], so it is reproducible as well, until you
//! call [RandomSource::seed_from_entropy].
//!
//! Prefer to create a [RandomSource] and pass it to the code that needs it. For quick
//! programs there is also one process wide instance, created lazily on first use and
//! shared by [seed], [seed_from_entropy], [random_int], [random_int_to] and
//! [with_global_rand]. It sits behind a [Mutex], so it is safe to use from many threads,
//! but the sequence that each thread sees then depends on scheduling.

use std::sync::{LazyLock, Mutex, PoisonError};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{PppError, PppResult};

/// Seed used by [RandomSource::new] and [RandomSource::default].
pub const DEFAULT_SEED: u64 = 5489;

/// Seedable pseudo random number generator.
///
/// ```
/// use r3bl_ppp::RandomSource;
///
/// let mut dice = RandomSource::with_seed(7);
/// let roll = dice.random_int(1, 6).unwrap();
/// assert!((1..=6).contains(&roll));
///
/// let first: Vec<i32> = (0..5).map(|_| dice.random_int_to(100).unwrap()).collect();
/// dice.seed(7);
/// dice.random_int(1, 6).unwrap();
/// let second: Vec<i32> = (0..5).map(|_| dice.random_int_to(100).unwrap()).collect();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl Default for RandomSource {
    fn default() -> Self { Self::new() }
}

impl RandomSource {
    /// Seeded with [DEFAULT_SEED].
    #[must_use]
    pub fn new() -> Self { Self::with_seed(DEFAULT_SEED) }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Deterministic reseed. Everything drawn after this depends only on `seed`.
    pub fn seed(&mut self, seed: u64) {
        tracing::debug!(message = "reseed random source", seed);
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Non-deterministic reseed, from the operating system's random source.
    pub fn seed_from_entropy(&mut self) {
        tracing::debug!(message = "reseed random source from entropy");
        self.rng = StdRng::from_os_rng();
    }

    /// Uniformly distributed integer in `[min, max]`, both ends inclusive.
    ///
    /// # Errors
    ///
    /// [PppError::EmptyRange] if `min > max`.
    pub fn random_int(&mut self, min: i32, max: i32) -> PppResult<i32> {
        if min > max {
            return Err(PppError::EmptyRange { min, max });
        }
        Ok(self.rng.random_range(min..=max))
    }

    /// Uniformly distributed integer in `[0, max]`, both ends inclusive.
    ///
    /// # Errors
    ///
    /// [PppError::EmptyRange] if `max < 0`.
    pub fn random_int_to(&mut self, max: i32) -> PppResult<i32> { self.random_int(0, max) }

    /// Direct access to the generator, eg, to use it with [rand::seq::SliceRandom].
    pub fn rng_mut(&mut self) -> &mut StdRng { &mut self.rng }
}

static GLOBAL_RANDOM_SOURCE: LazyLock<Mutex<RandomSource>> =
    LazyLock::new(|| Mutex::new(RandomSource::new()));

/// Run `f` with exclusive access to the process wide [RandomSource]. A poisoned lock is
/// recovered, since the generator can't be left in an invalid state.
pub fn with_global_rand<R>(f: impl FnOnce(&mut RandomSource) -> R) -> R {
    let mut guard = GLOBAL_RANDOM_SOURCE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// [RandomSource::seed] on the process wide instance.
pub fn seed(seed: u64) { with_global_rand(|it| it.seed(seed)); }

/// [RandomSource::seed_from_entropy] on the process wide instance.
pub fn seed_from_entropy() { with_global_rand(RandomSource::seed_from_entropy); }

/// [RandomSource::random_int] on the process wide instance.
///
/// # Errors
///
/// [PppError::EmptyRange] if `min > max`.
pub fn random_int(min: i32, max: i32) -> PppResult<i32> {
    with_global_rand(|it| it.random_int(min, max))
}

/// [RandomSource::random_int_to] on the process wide instance.
///
/// # Errors
///
/// [PppError::EmptyRange] if `max < 0`.
pub fn random_int_to(max: i32) -> PppResult<i32> {
    with_global_rand(|it| it.random_int_to(max))
}
