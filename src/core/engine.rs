use crate::core::calculators::{MobileCalculator, NameCalculator, VehicleCalculator};
use crate::core::interpretation::interpret;
use crate::core::reduction::reduce_to_single_digit;
use crate::domain::model::{DestinyNumber, Domain, Reading};
use crate::domain::ports::Calculator;

/// 純計算引擎：無狀態、無 I/O，可在多執行緒間直接共用
#[derive(Debug, Clone, Copy, Default)]
pub struct NumerologyEngine {
    mobile: MobileCalculator,
    name: NameCalculator,
    vehicle: VehicleCalculator,
}

impl NumerologyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculator(&self, domain: Domain) -> &dyn Calculator {
        match domain {
            Domain::Mobile => &self.mobile,
            Domain::Name => &self.name,
            Domain::Vehicle => &self.vehicle,
        }
    }

    pub fn compute(&self, domain: Domain, raw: &str) -> Reading {
        let calculator = self.calculator(domain);
        let sum = calculator.score(raw);
        let digit = reduce_to_single_digit(sum);

        tracing::debug!(%domain, sum, digit, "Computed destiny number");
        if digit == 0 {
            tracing::warn!(%domain, "Input has no scoring characters, falling back to unknown interpretation");
        }

        Reading {
            domain,
            input: raw.to_string(),
            destiny_number: DestinyNumber::new(digit),
            interpretation: interpret(domain, digit),
        }
    }

    pub fn compute_mobile(&self, raw_number: &str) -> Reading {
        self.compute(Domain::Mobile, raw_number)
    }

    pub fn compute_name(&self, raw_name: &str) -> Reading {
        self.compute(Domain::Name, raw_name)
    }

    pub fn compute_vehicle(&self, raw_plate: &str) -> Reading {
        self.compute(Domain::Vehicle, raw_plate)
    }
}
