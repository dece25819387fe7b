// ============================================================================
// Property Tests
// Arithmetic laws of the digit-code adder and subtractor
// ============================================================================

use decimal_adder::prelude::*;
use proptest::prelude::*;
use quickcheck::quickcheck;

fn any_encoding() -> impl Strategy<Value = Encoding> {
    prop_oneof![Just(Encoding::Bcd), Just(Encoding::Excess3)]
}

proptest! {
    #[test]
    fn round_trip(n in 0i64..=i64::MAX, encoding in any_encoding()) {
        let encoded = encode_number(n, encoding).unwrap();
        prop_assert_eq!(decode_number(&encoded, encoding).unwrap(), n);
    }

    #[test]
    fn addition_matches_native(n in 0i64..=9999, m in 0i64..=9999, encoding in any_encoding()) {
        let outcome = add_numbers(n, m, encoding).unwrap();
        prop_assert_eq!(outcome.value, n + m);
        prop_assert!(outcome.matches_reference);
    }

    #[test]
    fn subtraction_matches_native(n in 0i64..=9999, m in 0i64..=9999, encoding in any_encoding()) {
        let outcome = subtract_numbers(n, m, encoding).unwrap();
        prop_assert_eq!(outcome.value, n - m);
        prop_assert_eq!(outcome.carry_out, n >= m);
        prop_assert!(outcome.matches_reference);
    }

    #[test]
    fn zero_fixpoint(n in 0i64..=1_000_000_000, encoding in any_encoding()) {
        let outcome = subtract_numbers(n, n, encoding).unwrap();
        prop_assert_eq!(outcome.value, 0);
        prop_assert!(outcome.carry_out);
    }

    #[test]
    fn number_complement_involution(n in 0i64..=i64::MAX, encoding in any_encoding()) {
        let encoded = encode_number(n, encoding).unwrap();
        let once = nines_complement(&encoded, encoding).unwrap();
        let twice = nines_complement(&once, encoding).unwrap();
        prop_assert_eq!(twice, encoded);
    }

    #[test]
    fn wide_subtraction(n in 0i64..=999_999_999_999, m in 0i64..=999_999_999_999) {
        for encoding in Encoding::ALL {
            let outcome = subtract_numbers(n, m, encoding).unwrap();
            prop_assert_eq!(outcome.value, n - m);
        }
    }
}

quickcheck! {
    fn digit_complement_involution(digit: u8) -> bool {
        let digit = digit % 10;
        Encoding::ALL.iter().all(|&encoding| {
            let code = encoding.code();
            let group = code.encode_digit(digit).unwrap();
            let twice = code
                .complement_digit(code.complement_digit(group).unwrap())
                .unwrap();
            twice == group
        })
    }

    fn bit_invert_involution(value: u8) -> bool {
        let group = DigitGroup::from_nibble(value);
        group.inverted().inverted() == group
    }

    fn excess3_complement_is_inversion(digit: u8) -> bool {
        let group = Encoding::Excess3.encode_digit(digit % 10).unwrap();
        Excess3.complement_digit(group).unwrap() == group.inverted()
    }
}

#[test]
fn concrete_scenarios() {
    let sum = add_numbers(7, 5, Encoding::Bcd).unwrap();
    assert_eq!(sum.value, 12);

    let diff = subtract_numbers(5, 7, Encoding::Bcd).unwrap();
    assert_eq!(diff.value, -2);

    let zero = add_numbers(0, 0, Encoding::Excess3).unwrap();
    assert_eq!(zero.value, 0);

    let nines = subtract_numbers(9, 9, Encoding::Excess3).unwrap();
    assert_eq!(nines.value, 0);
    assert!(nines.carry_out);
}

#[test]
fn bcd_seven_plus_five_digit_trace() {
    let calculator = CalculatorBuilder::new()
        .bcd()
        .trace(true)
        .build(std::sync::Arc::new(NoOpTraceHandler))
        .unwrap();

    let outcome = calculator.add(7, 5).unwrap();
    let first_digit = outcome
        .trace
        .iter()
        .find_map(|e| match e {
            TraceEvent::Digit { position: 1, step } => Some(*step),
            _ => None,
        })
        .unwrap();

    assert_eq!(first_digit.raw_sum, 12);
    assert_eq!(first_digit.correction, Correction::AddSix);
    assert_eq!(first_digit.digit.value(), 2);
    assert!(first_digit.carry_out);
}
