// File: crates/power-chart-core/src/category.rs
// Summary: The closed set of 13 generation source categories and their wire names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryId {
    #[serde(rename = "nuclear")]
    Nuclear,
    #[serde(rename = "coal")]
    Coal,
    #[serde(rename = "cogen")]
    Cogen,
    #[serde(rename = "ippcoal")]
    IppCoal,
    #[serde(rename = "lng")]
    Lng,
    #[serde(rename = "ipplng")]
    IppLng,
    #[serde(rename = "oil")]
    Oil,
    #[serde(rename = "diesel")]
    Diesel,
    #[serde(rename = "hydro")]
    Hydro,
    #[serde(rename = "wind")]
    Wind,
    #[serde(rename = "solar")]
    Solar,
    #[serde(rename = "OtherRenewableEnergy")]
    OtherRenewable,
    #[serde(rename = "EnergyStorageSystem")]
    EnergyStorage,
}

impl CategoryId {
    /// Every category that counts toward a bucket's grand total.
    pub const ALL: [CategoryId; 13] = [
        CategoryId::Nuclear,
        CategoryId::Coal,
        CategoryId::Cogen,
        CategoryId::IppCoal,
        CategoryId::Lng,
        CategoryId::IppLng,
        CategoryId::Oil,
        CategoryId::Diesel,
        CategoryId::Hydro,
        CategoryId::Wind,
        CategoryId::Solar,
        CategoryId::OtherRenewable,
        CategoryId::EnergyStorage,
    ];

    /// Key used by the upstream feed and the store.
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryId::Nuclear => "nuclear",
            CategoryId::Coal => "coal",
            CategoryId::Cogen => "cogen",
            CategoryId::IppCoal => "ippcoal",
            CategoryId::Lng => "lng",
            CategoryId::IppLng => "ipplng",
            CategoryId::Oil => "oil",
            CategoryId::Diesel => "diesel",
            CategoryId::Hydro => "hydro",
            CategoryId::Wind => "wind",
            CategoryId::Solar => "solar",
            CategoryId::OtherRenewable => "OtherRenewableEnergy",
            CategoryId::EnergyStorage => "EnergyStorageSystem",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown generation category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for c in CategoryId::ALL {
            assert_eq!(c.as_str().parse::<CategoryId>(), Ok(c));
        }
    }

    #[test]
    fn storage_load_is_not_a_category() {
        assert!("EnergyStorageSystemLoad".parse::<CategoryId>().is_err());
    }
}
