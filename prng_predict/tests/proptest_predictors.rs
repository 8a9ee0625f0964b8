use proptest::prelude::*;
use prng_predict::{
    mod_inverse, AdditiveFeedbackGenerator, AdditiveFeedbackPredictor, Generator, Identity,
    LcgGenerator, LinearCongruentialPredictor, LowerBits, Modifier, PredictError, Predictor,
};

const M31: u64 = 1 << 31;

// Property 1: every odd value has an inverse modulo 2^31
proptest! {
    #[test]
    fn prop_mod_inverse_round_trip(half in 0u64..(1 << 30)) {
        let a = 2 * half + 1;
        let inverse = mod_inverse(a, M31).unwrap();
        prop_assert!(inverse < M31);
        prop_assert_eq!((a * inverse) % M31, 1);
    }
}

// Property 2: even values never have one
proptest! {
    #[test]
    fn prop_mod_inverse_even_fails(half in 0u64..(1 << 30)) {
        prop_assert!(mod_inverse(2 * half, M31).is_err());
    }
}

// Property 3: the lcg is predicted exactly from any three consecutive outputs
proptest! {
    #[test]
    fn prop_lcg_exact(seed in any::<u32>(), skip in 0usize..64) {
        let mut rng = LcgGenerator::new(seed);
        for _ in 0..skip {
            rng.next_raw();
        }
        let history: Vec<u32> = (0..3).map(|_| rng.next_raw()).collect();
        let predicted = LinearCongruentialPredictor.predict(&history).unwrap();
        prop_assert_eq!(predicted.value, rng.next_raw());
    }
}

// Property 4: predictors keep no state between calls
proptest! {
    #[test]
    fn prop_predict_idempotent(history in prop::collection::vec(0u32..(1 << 31), 0..64)) {
        for predictor in [&AdditiveFeedbackPredictor as &dyn Predictor, &LinearCongruentialPredictor] {
            let first = predictor.predict(&history);
            let second = predictor.predict(&history);
            prop_assert_eq!(first, second);
        }
    }
}

// Property 5: one short of the window is always rejected
proptest! {
    #[test]
    fn prop_short_history_rejected(history in prop::collection::vec(any::<u32>(), 0..31)) {
        let expected = PredictError::InsufficientHistory { required: 31, available: history.len() };
        prop_assert_eq!(AdditiveFeedbackPredictor.predict(&history), Err(expected));
        if history.len() < 3 {
            let expected = PredictError::InsufficientHistory { required: 3, available: history.len() };
            prop_assert_eq!(LinearCongruentialPredictor.predict(&history), Err(expected));
        }
    }
}

// Property 6: a correct full prediction stays correct after masking, and the
// off-by-one miss of the additive predictor stays a miss
proptest! {
    #[test]
    fn prop_modifier_invariance(seed in any::<u32>()) {
        let mut rng = AdditiveFeedbackGenerator::new(seed);
        let mut history: Vec<u32> = (0..31).map(|_| rng.next_raw()).collect();
        let lower = LowerBits::default();
        for _ in 0..200 {
            let predicted = AdditiveFeedbackPredictor.predict(&history).unwrap().value;
            let actual = rng.next_raw();
            let full_hit = Identity.apply(predicted) == Identity.apply(actual);
            let low_hit = lower.apply(predicted) == lower.apply(actual);
            prop_assert_eq!(full_hit, low_hit);
            history.push(actual);
        }
    }
}
