//! 価格帯・評価帯の定義
//!
//! ラベル文字列を都度パースせず、数値の上下限を持つ列挙型として扱う。

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// 価格帯（上限がある場合は両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceBand {
    #[serde(rename = "$0-$50")]
    Under50,
    #[serde(rename = "$50-$100")]
    From50To100,
    #[serde(rename = "$100-$200")]
    From100To200,
    #[serde(rename = "$200+")]
    Over200,
}

impl PriceBand {
    pub const ALL: [PriceBand; 4] = [
        PriceBand::Under50,
        PriceBand::From50To100,
        PriceBand::From100To200,
        PriceBand::Over200,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Under50 => "$0-$50",
            PriceBand::From50To100 => "$50-$100",
            PriceBand::From100To200 => "$100-$200",
            PriceBand::Over200 => "$200+",
        }
    }

    /// 下限（含む）
    pub fn min(&self) -> f64 {
        match self {
            PriceBand::Under50 => 0.0,
            PriceBand::From50To100 => 50.0,
            PriceBand::From100To200 => 100.0,
            PriceBand::Over200 => 200.0,
        }
    }

    /// 上限（含む）。最上位帯は上限なし
    pub fn max(&self) -> Option<f64> {
        match self {
            PriceBand::Under50 => Some(50.0),
            PriceBand::From50To100 => Some(100.0),
            PriceBand::From100To200 => Some(200.0),
            PriceBand::Over200 => None,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min() && self.max().map_or(true, |max| price <= max)
    }
}

impl std::str::FromStr for PriceBand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceBand::ALL
            .into_iter()
            .find(|band| band.label() == s.trim())
            .ok_or_else(|| Error::UnknownOption { group: "price", token: s.to_string() })
    }
}

impl std::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 評価帯（最低評価値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingBand {
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "4+")]
    FourUp,
    #[serde(rename = "3+")]
    ThreeUp,
    #[serde(rename = "2+")]
    TwoUp,
    #[serde(rename = "1+")]
    OneUp,
}

impl RatingBand {
    pub const ALL: [RatingBand; 5] = [
        RatingBand::Five,
        RatingBand::FourUp,
        RatingBand::ThreeUp,
        RatingBand::TwoUp,
        RatingBand::OneUp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RatingBand::Five => "5",
            RatingBand::FourUp => "4+",
            RatingBand::ThreeUp => "3+",
            RatingBand::TwoUp => "2+",
            RatingBand::OneUp => "1+",
        }
    }

    pub fn min(&self) -> f64 {
        match self {
            RatingBand::Five => 5.0,
            RatingBand::FourUp => 4.0,
            RatingBand::ThreeUp => 3.0,
            RatingBand::TwoUp => 2.0,
            RatingBand::OneUp => 1.0,
        }
    }

    pub fn accepts(&self, rate: f64) -> bool {
        rate >= self.min()
    }
}

impl std::str::FromStr for RatingBand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatingBand::ALL
            .into_iter()
            .find(|band| band.label() == s.trim())
            .ok_or_else(|| Error::UnknownOption { group: "rating", token: s.to_string() })
    }
}

impl std::fmt::Display for RatingBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
