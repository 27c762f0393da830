use chrono::{DateTime, Utc};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::NumerologyError;

/// 計算的輸入領域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Mobile,
    Name,
    Vehicle,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Mobile, Domain::Name, Domain::Vehicle];

    /// 回應 JSON 中回顯原始輸入的欄位名稱
    pub fn input_field(self) -> &'static str {
        match self {
            Domain::Mobile => "mobileNumber",
            Domain::Name => "name",
            Domain::Vehicle => "vehicleNumber",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Mobile => "mobile",
            Domain::Name => "name",
            Domain::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Domain::Mobile),
            "name" => Ok(Domain::Name),
            "vehicle" => Ok(Domain::Vehicle),
            other => Err(NumerologyError::ValidationError {
                field: "domain".to_string(),
                value: other.to_string(),
                reason: "Expected one of: mobile, name, vehicle".to_string(),
            }),
        }
    }
}

/// 單一位數的命運數字。只有總和為 0 的退化輸入才會得到 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinyNumber(u8);

impl DestinyNumber {
    pub(crate) fn new(value: u8) -> Self {
        debug_assert!(value <= 9);
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_defined(self) -> bool {
        (1..=9).contains(&self.0)
    }
}

impl fmt::Display for DestinyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一次計算的結果，引擎建立後不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub domain: Domain,
    pub input: String,
    pub destiny_number: DestinyNumber,
    pub interpretation: &'static str,
}

// JSON 形式：{ <domainField>, destinyNumber, interpretation }
impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Reading", 3)?;
        state.serialize_field(self.domain.input_field(), &self.input)?;
        state.serialize_field("destinyNumber", &self.destiny_number)?;
        state.serialize_field("interpretation", self.interpretation)?;
        state.end()
    }
}

/// 已驗證的呼叫者
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    pub subject: String,
}

impl Identity {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

/// 歷史紀錄中的一筆計算
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub id: u64,
    pub subject: String,
    pub domain: Domain,
    pub input: String,
    pub destiny_number: DestinyNumber,
    pub interpretation: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_from_str_is_case_insensitive() {
        assert_eq!("Mobile".parse::<Domain>().unwrap(), Domain::Mobile);
        assert_eq!(" VEHICLE ".parse::<Domain>().unwrap(), Domain::Vehicle);
        assert!("plate".parse::<Domain>().is_err());
    }

    #[test]
    fn test_reading_serializes_with_domain_field() {
        let reading = Reading {
            domain: Domain::Vehicle,
            input: "KA01AB1234".to_string(),
            destiny_number: DestinyNumber::new(4),
            interpretation: "Vehicle provides stability and reliability.",
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["vehicleNumber"], "KA01AB1234");
        assert_eq!(json["destinyNumber"], 4);
        assert_eq!(
            json["interpretation"],
            "Vehicle provides stability and reliability."
        );
        assert!(json.get("domain").is_none());
    }
}
