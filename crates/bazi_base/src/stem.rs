//! Heaven stems (tian gan), the 10-cycle of the sexagenary calendar.
//!
//! Stems pair up by element (Jia/Yi = Wood, Bing/Ding = Fire, ...), the even
//! member of each pair being Yang.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::error::BaseError;

/// The 10 heaven stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeavenStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [HeavenStem; 10] = [
    HeavenStem::Jia,
    HeavenStem::Yi,
    HeavenStem::Bing,
    HeavenStem::Ding,
    HeavenStem::Wu,
    HeavenStem::Ji,
    HeavenStem::Geng,
    HeavenStem::Xin,
    HeavenStem::Ren,
    HeavenStem::Gui,
];

const STEM_HANZI: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl HeavenStem {
    /// Stem at a cycle position; wraps modulo 10.
    pub const fn from_index(index: usize) -> Self {
        ALL_STEMS[index % 10]
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Hanzi name.
    pub const fn chinese(self) -> &'static str {
        STEM_HANZI[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        ALL_ELEMENTS[(self.index() / 2) as usize]
    }

    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Step `n` positions through the 10-cycle (negative steps go back).
    pub const fn next(self, n: i32) -> Self {
        ALL_STEMS[(self.index() as i32 + n).rem_euclid(10) as usize]
    }

    /// Look up by pinyin (case-insensitive) or Hanzi name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|s| s.chinese() == name || s.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for HeavenStem {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| BaseError::UnknownName(s.to_string()))
    }
}

impl std::fmt::Display for HeavenStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

impl Serialize for HeavenStem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.chinese())
    }
}
