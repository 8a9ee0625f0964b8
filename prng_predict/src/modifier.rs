/// Maps a raw generator output to the value that is actually observed.
///
/// Applied to both the live stream and the predictions before they are compared,
/// so implementations must be pure.
pub trait Modifier {
    fn apply(&self, value: u32) -> u32;
}

impl<F: Fn(u32) -> u32> Modifier for F {
    fn apply(&self, value: u32) -> u32 {
        self(value)
    }
}

/// Observes the full output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

impl Modifier for Identity {
    fn apply(&self, value: u32) -> u32 {
        value
    }
}

/// Observes only the least significant bits of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowerBits {
    mask: u32,
}

impl LowerBits {
    /// Keep the lowest `bits` bits, 32 or more keeps everything.
    pub fn new(bits: u32) -> Self {
        let mask = match bits {
            0 => 0,
            1..=31 => (1 << bits) - 1,
            _ => u32::MAX,
        };
        Self { mask }
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }
}

impl Default for LowerBits {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Modifier for LowerBits {
    fn apply(&self, value: u32) -> u32 {
        value & self.mask
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Identity.apply(0), 0);
        assert_eq!(Identity.apply(0x7fffffff), 0x7fffffff);
    }

    #[test]
    fn test_lower_bits() {
        let modifier = LowerBits::default();
        assert_eq!(modifier.mask(), 0x0F);
        assert_eq!(modifier.apply(0x1234_5678), 0x8);
        assert_eq!(modifier.apply(0x0F), 0x0F);
        assert_eq!(modifier.apply(0x10), 0);
        assert_eq!(LowerBits::new(0).apply(0xffff), 0);
        assert_eq!(LowerBits::new(32).apply(0xdeadbeef), 0xdeadbeef);
        assert_eq!(LowerBits::new(31).mask(), 0x7fffffff);
    }

    #[test]
    fn test_closure_modifier() {
        let shift = |v: u32| v >> 16;
        assert_eq!(shift.apply(0x12345678), 0x1234);
    }
}
