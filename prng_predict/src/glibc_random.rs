use crate::Generator;
use rand_core::{impls, Error, RngCore, SeedableRng};
use std::num::Wrapping;

/// Distance to the oldest word read by the recurrence, also the table size.
pub const DEGREE: usize = 31;

/// Distance to the newest word read by the recurrence.
pub const SEPARATION: usize = 3;

/// Outputs discarded after seeding, ten per table word.
const DISCARD: usize = 10 * DEGREE;

/// Implements the additive feedback generator behind glibc's `rand()`;
/// r(n) = r(n-31) + r(n-3) mod 2^32, output r(n) >> 1
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct AdditiveFeedbackGenerator {
    /// The last 31 internal words, `table[position]` is the oldest one.
    table: [Wrapping<u32>; DEGREE],

    /// Index of r(n-31), the slot the next word is written to.
    position: usize,
}

impl AdditiveFeedbackGenerator {
    /// Seed the table the way `srand` does; a seed of 0 is replaced by 1.
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 { 1 } else { seed };

        // r(0..31) spread the seed with the minimal standard generator,
        // 16807 * r mod (2^31 - 1), working on the seed as a signed value.
        let mut words = [Wrapping(0u32); DEGREE + SEPARATION];
        words[0] = Wrapping(seed);
        let mut word = seed as i32 as i64;
        for slot in words.iter_mut().take(DEGREE).skip(1) {
            word = (16807 * word) % 2147483647;
            if word < 0 {
                word += 2147483647;
            }
            *slot = Wrapping(word as u32);
        }
        // r(31..34) repeat r(0..3).
        words.copy_within(0..SEPARATION, DEGREE);

        let mut table = [Wrapping(0u32); DEGREE];
        table.copy_from_slice(&words[SEPARATION..]);
        let mut rng = Self { table, position: 0 };
        for _ in 0..DISCARD {
            rng.random_u32();
        }
        rng
    }

    /// The internal word that produced the most recent output.
    pub fn last_word(&self) -> u32 {
        self.table[(self.position + DEGREE - 1) % DEGREE].0
    }

    /// Advance the RNG and generate a new 31 bit integer
    pub fn random_u32(&mut self) -> u32 {
        let oldest = self.table[self.position];
        let newest = self.table[(self.position + DEGREE - SEPARATION) % DEGREE];
        let word = oldest + newest;
        self.table[self.position] = word;
        self.position = (self.position + 1) % DEGREE;
        word.0 >> 1
    }
}

impl Generator for AdditiveFeedbackGenerator {
    fn next_raw(&mut self) -> u32 {
        self.random_u32()
    }
}

impl RngCore for AdditiveFeedbackGenerator {
    fn next_u32(&mut self) -> u32 {
        self.random_u32()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for AdditiveFeedbackGenerator {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

impl std::fmt::Debug for AdditiveFeedbackGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} 0x{:0>8x}]", self.position, self.last_word())
    }
}
