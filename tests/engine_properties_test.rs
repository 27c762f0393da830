use numerology_service::core::calculators::{
    name_letter_value, vehicle_char_value, NameCalculator, VehicleCalculator,
};
use numerology_service::domain::ports::Calculator;
use numerology_service::{
    interpret, reduce_to_single_digit, Domain, NumerologyEngine, UNKNOWN_INTERPRETATION,
};

/// 以固定種子產生 10 位數字串，避免測試結果不穩定
fn ten_digit_samples(count: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            format!("{:010}", (state >> 11) % 10_000_000_000)
        })
        .collect()
}

#[test]
fn test_mobile_destiny_in_range_for_ten_digit_numbers() {
    let engine = NumerologyEngine::new();

    for number in ten_digit_samples(5_000) {
        if number.bytes().all(|b| b == b'0') {
            continue;
        }
        let reading = engine.compute_mobile(&number);
        let value = reading.destiny_number.value();
        assert!((1..=9).contains(&value), "{} -> {}", number, value);
        assert_ne!(reading.interpretation, UNKNOWN_INTERPRETATION);
    }
}

#[test]
fn test_mobile_known_example() {
    let reading = NumerologyEngine::new().compute_mobile("9876543210");

    // 45 -> 4 + 5 = 9
    assert_eq!(reading.destiny_number.value(), 9);
    assert_eq!(
        reading.interpretation,
        "Humanitarianism and completion. This number brings universal love and wisdom."
    );

    let json = serde_json::to_value(&reading).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "mobileNumber": "9876543210",
            "destinyNumber": 9,
            "interpretation": "Humanitarianism and completion. This number brings universal love and wisdom."
        })
    );
}

#[test]
fn test_name_single_letter() {
    let reading = NumerologyEngine::new().compute_name("A");
    assert_eq!(reading.destiny_number.value(), 1);
    assert_eq!(reading.interpretation, interpret(Domain::Name, 1));
    assert_eq!(
        reading.interpretation,
        "Natural leader with strong willpower and determination."
    );
}

#[test]
fn test_name_ten_letters_reduce() {
    let engine = NumerologyEngine::new();
    assert_eq!(NameCalculator.score("AAAAAAAAAA"), 10);
    assert_eq!(engine.compute_name("AAAAAAAAAA").destiny_number.value(), 1);
    assert_eq!(engine.compute_name("aaaaaaaaaa").destiny_number.value(), 1);
}

#[test]
fn test_name_and_vehicle_scoring_rules_are_independent() {
    // 車牌：字母序號
    for (offset, c) in ('A'..='Z').enumerate() {
        assert_eq!(vehicle_char_value(c), offset as u64 + 1);
    }
    // 姓名：1-9 循環
    for (offset, c) in ('A'..='Z').enumerate() {
        assert_eq!(name_letter_value(c), (offset as u64 % 9) + 1);
    }

    let engine = NumerologyEngine::new();
    let cases = [
        // (input, vehicle sum, name sum, destiny)
        ("Z", 26, 8, 8),
        ("Y", 25, 7, 7),
        ("K", 11, 2, 2),
        ("S", 19, 1, 1),
        ("ZZ", 52, 16, 7),
    ];
    for (input, vehicle_sum, name_sum, destiny) in cases {
        assert_eq!(VehicleCalculator.score(input), vehicle_sum, "vehicle {}", input);
        assert_eq!(NameCalculator.score(input), name_sum, "name {}", input);
        assert_eq!(engine.compute_vehicle(input).destiny_number.value(), destiny);
        assert_eq!(engine.compute_name(input).destiny_number.value(), destiny);
    }

    // 車牌會計入數字，姓名不會
    assert_eq!(VehicleCalculator.score("A1"), 2);
    assert_eq!(NameCalculator.score("A1"), 1);
}

#[test]
fn test_vehicle_plate_example() {
    let reading = NumerologyEngine::new().compute_vehicle("KA01AB1234");
    // K11 + A1 + 0 + 1 + A1 + B2 + 1 + 2 + 3 + 4 = 26 -> 8
    assert_eq!(reading.destiny_number.value(), 8);
    assert_eq!(reading.interpretation, "Vehicle represents success and power.");

    let json = serde_json::to_value(&reading).unwrap();
    assert_eq!(json["vehicleNumber"], "KA01AB1234");
}

#[test]
fn test_calculators_are_idempotent() {
    let engine = NumerologyEngine::new();
    for domain in Domain::ALL {
        for input in ["9876543210", "Ada Lovelace", "KA01AB1234", ""] {
            assert_eq!(engine.compute(domain, input), engine.compute(domain, input));
        }
    }
}

#[test]
fn test_single_digit_sums_are_unchanged() {
    for value in 1..=9u64 {
        assert_eq!(reduce_to_single_digit(value), value as u8);
    }
    assert_eq!(NumerologyEngine::new().compute_mobile("0000000007").destiny_number.value(), 7);
}

#[test]
fn test_unknown_lookup_fallback() {
    for domain in Domain::ALL {
        assert_eq!(interpret(domain, 0), UNKNOWN_INTERPRETATION);
        assert_eq!(interpret(domain, 10), UNKNOWN_INTERPRETATION);
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(NumerologyEngine::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.compute_name("Grace Hopper"))
        })
        .collect();

    let readings: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(readings.windows(2).all(|pair| pair[0] == pair[1]));
}
