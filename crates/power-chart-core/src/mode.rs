// File: crates/power-chart-core/src/mode.rs
// Summary: Presentation modes and the static category -> stacked-group table.

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;
use crate::category::CategoryId::*;
use crate::error::ChartError;

/// Index of a gray fill tile (`gray-<id>.png`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatternId(pub u8);

/// One stacked group: its legend label, fill tile, and the categories summed into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupSpec {
    pub label: &'static str,
    pub pattern: PatternId,
    pub categories: &'static [CategoryId],
}

impl GroupSpec {
    const fn new(label: &'static str, pattern: u8, categories: &'static [CategoryId]) -> Self {
        Self { label, pattern: PatternId(pattern), categories }
    }
}

const COAL: &[CategoryId] = &[Coal, IppCoal, Cogen];
const GAS: &[CategoryId] = &[Lng, IppLng];
const OIL: &[CategoryId] = &[Oil, Diesel];
const GAS_AND_OIL: &[CategoryId] = &[Lng, IppLng, Oil, Diesel];
const FOSSIL: &[CategoryId] = &[Coal, IppCoal, Cogen, Lng, IppLng, Oil, Diesel];
const CLEAN: &[CategoryId] = &[Solar, Hydro, Wind, Nuclear, OtherRenewable, EnergyStorage];
const ALL_BUT_SOLAR: &[CategoryId] = &[
    Nuclear, Coal, Cogen, IppCoal, Lng, IppLng, Oil, Diesel, Hydro, Wind, OtherRenewable, EnergyStorage,
];

const SHOW_ALL: &[GroupSpec] = &[
    GroupSpec::new("燃煤", 1, COAL),
    GroupSpec::new("燃氣", 2, GAS),
    GroupSpec::new("燃油", 3, OIL),
    GroupSpec::new("水力", 4, &[Hydro]),
    GroupSpec::new("風力", 5, &[Wind]),
    GroupSpec::new("太陽能", 6, &[Solar]),
    GroupSpec::new("核能、其他再生、儲能", 7, &[Nuclear, OtherRenewable, EnergyStorage]),
];

const SOLAR_AND_OTHER: &[GroupSpec] = &[
    GroupSpec::new("其他", 2, ALL_BUT_SOLAR),
    GroupSpec::new("太陽能", 6, &[Solar]),
];

const RENEWABLE_AND_OTHER: &[GroupSpec] = &[
    GroupSpec::new("化石燃料", 2, FOSSIL),
    GroupSpec::new("再生能源", 6, CLEAN),
];

const LNG_COAL_AND_OTHER: &[GroupSpec] = &[
    GroupSpec::new("燃煤", 1, COAL),
    GroupSpec::new("燃氣、燃油", 4, GAS_AND_OIL),
    GroupSpec::new("其他", 6, CLEAN),
];

/// Selects how source categories collapse into stacked groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PresentationMode {
    #[default]
    ShowAll,
    SolarAndOther,
    RenewableAndOther,
    LngCoalAndOther,
}

impl PresentationMode {
    pub const ALL: [PresentationMode; 4] = [
        PresentationMode::ShowAll,
        PresentationMode::SolarAndOther,
        PresentationMode::RenewableAndOther,
        PresentationMode::LngCoalAndOther,
    ];

    /// Groups in semantic order (bottom of the stack first, before the draw-order reversal).
    pub const fn groups(self) -> &'static [GroupSpec] {
        match self {
            PresentationMode::ShowAll => SHOW_ALL,
            PresentationMode::SolarAndOther => SOLAR_AND_OTHER,
            PresentationMode::RenewableAndOther => RENEWABLE_AND_OTHER,
            PresentationMode::LngCoalAndOther => LNG_COAL_AND_OTHER,
        }
    }

    /// Groups in draw order: index 0 is the outermost (top) layer.
    pub fn draw_order(self) -> impl DoubleEndedIterator<Item = &'static GroupSpec> + ExactSizeIterator {
        self.groups().iter().rev()
    }

    pub const fn group_count(self) -> usize {
        self.groups().len()
    }
}

impl TryFrom<u8> for PresentationMode {
    type Error = ChartError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PresentationMode::ShowAll),
            1 => Ok(PresentationMode::SolarAndOther),
            2 => Ok(PresentationMode::RenewableAndOther),
            3 => Ok(PresentationMode::LngCoalAndOther),
            other => Err(ChartError::InvalidPlotType(other)),
        }
    }
}

impl From<PresentationMode> for u8 {
    fn from(m: PresentationMode) -> u8 {
        match m {
            PresentationMode::ShowAll => 0,
            PresentationMode::SolarAndOther => 1,
            PresentationMode::RenewableAndOther => 2,
            PresentationMode::LngCoalAndOther => 3,
        }
    }
}
