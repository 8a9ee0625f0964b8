use crate::Generator;
use rand_core::{impls, Error, RngCore, SeedableRng};
use std::num::Wrapping;

/// Modulus of the recurrence, 2^31.
pub const MODULUS: u32 = 1 << 31;

/// Multiplier of the POSIX `rand()` example.
pub const MULTIPLIER: u32 = 1103515245;

/// Increment of the POSIX `rand()` example.
pub const INCREMENT: u32 = 12345;

/// Implements a 31 bit LCG; x(n)=a*x(n-1) + c mod 2^31
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct LcgGenerator {
    /// The multiplication factor used by the algorithm.
    a: u32,

    /// The increment added after multiplication.
    c: u32,

    /// Current state, always below the modulus.
    x: Wrapping<u32>,
}

impl LcgGenerator {
    /// Create a generator with the POSIX example constants.
    pub fn new(seed: u32) -> Self {
        Self::with_parameters(MULTIPLIER, INCREMENT, seed)
    }

    pub fn with_parameters(a: u32, c: u32, seed: u32) -> Self {
        Self {
            a: a % MODULUS,
            c: c % MODULUS,
            x: Wrapping(seed % MODULUS),
        }
    }

    /// Access to the multiplier.
    pub fn multiplier(&self) -> u32 {
        self.a
    }

    /// Access to the increment.
    pub fn increment(&self) -> u32 {
        self.c
    }

    /// Access to the current state, which is also the last output.
    pub fn value(&self) -> u32 {
        self.x.0
    }

    /// Advance the RNG and return the new state.
    pub fn random_u32(&mut self) -> u32 {
        let new_value = self.x * Wrapping(self.a) + Wrapping(self.c);
        self.x = Wrapping(new_value.0 % MODULUS);
        self.x.0
    }
}

impl Generator for LcgGenerator {
    fn next_raw(&mut self) -> u32 {
        self.random_u32()
    }
}

impl RngCore for LcgGenerator {
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

impl SeedableRng for LcgGenerator {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

impl std::fmt::Debug for LcgGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[0x{:0>8x} 0x{:0>8x} 0x{:0>8x}]", self.a, self.c, self.x)
    }
}
