use crate::domain::model::Domain;

pub const UNKNOWN_INTERPRETATION: &str = "Unknown interpretation";

static MOBILE_INTERPRETATIONS: [&str; 9] = [
    "Leadership and independence. This number brings strong individuality and self-confidence.",
    "Cooperation and balance. This number enhances relationships and diplomacy.",
    "Creativity and self-expression. This number brings joy and artistic abilities.",
    "Stability and practicality. This number brings organization and hard work.",
    "Freedom and change. This number brings adventure and versatility.",
    "Responsibility and nurturing. This number brings harmony and service to others.",
    "Spirituality and analysis. This number brings wisdom and introspection.",
    "Power and success. This number brings material abundance and authority.",
    "Humanitarianism and completion. This number brings universal love and wisdom.",
];

static NAME_INTERPRETATIONS: [&str; 9] = [
    "Natural leader with strong willpower and determination.",
    "Peacemaker with excellent diplomatic skills.",
    "Creative and expressive with artistic talents.",
    "Practical and organized with strong work ethic.",
    "Adventurous and freedom-loving with versatile nature.",
    "Nurturing and responsible with strong sense of duty.",
    "Analytical and spiritual with deep wisdom.",
    "Ambitious and successful with strong business sense.",
    "Humanitarian and compassionate with universal love.",
];

static VEHICLE_INTERPRETATIONS: [&str; 9] = [
    "Vehicle brings independence and leadership qualities.",
    "Vehicle promotes harmony and balance in travel.",
    "Vehicle enhances creativity and self-expression.",
    "Vehicle provides stability and reliability.",
    "Vehicle supports freedom and adventure.",
    "Vehicle brings comfort and responsibility.",
    "Vehicle enhances spiritual connection.",
    "Vehicle represents success and power.",
    "Vehicle promotes universal connection.",
];

fn table(domain: Domain) -> &'static [&'static str; 9] {
    match domain {
        Domain::Mobile => &MOBILE_INTERPRETATIONS,
        Domain::Name => &NAME_INTERPRETATIONS,
        Domain::Vehicle => &VEHICLE_INTERPRETATIONS,
    }
}

/// 查詢 1–9 的解讀；範圍外回傳 [`UNKNOWN_INTERPRETATION`]
pub fn interpret(domain: Domain, value: u8) -> &'static str {
    (value as usize)
        .checked_sub(1)
        .and_then(|index| table(domain).get(index))
        .copied()
        .unwrap_or(UNKNOWN_INTERPRETATION)
}
