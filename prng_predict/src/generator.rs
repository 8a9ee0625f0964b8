/// Source of raw generator outputs.
///
/// Every call advances the generator's private state and returns the next raw
/// output in `[0, 2^31)`.
pub trait Generator {
    fn next_raw(&mut self) -> u32;
}

impl<F: FnMut() -> u32> Generator for F {
    fn next_raw(&mut self) -> u32 {
        self()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn take<G: Generator>(mut generator: G, n: usize) -> Vec<u32> {
        (0..n).map(|_| generator.next_raw()).collect()
    }

    #[test]
    fn test_closure_generator() {
        let mut counter = 0;
        let values = take(
            || {
                counter += 1;
                counter
            },
            3,
        );
        assert_eq!(values, [1, 2, 3]);
    }
}
