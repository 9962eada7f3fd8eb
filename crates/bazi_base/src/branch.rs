//! Earth branches (di zhi), the 12-cycle of the sexagenary calendar,
//! with their zodiac animals and hidden stems.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::element::{Element, Polarity};
use crate::error::BaseError;
use crate::stem::HeavenStem;

/// The 12 earth branches starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [EarthBranch; 12] = [
    EarthBranch::Zi,
    EarthBranch::Chou,
    EarthBranch::Yin,
    EarthBranch::Mao,
    EarthBranch::Chen,
    EarthBranch::Si,
    EarthBranch::Wu,
    EarthBranch::Wei,
    EarthBranch::Shen,
    EarthBranch::You,
    EarthBranch::Xu,
    EarthBranch::Hai,
];

const BRANCH_HANZI: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Hidden stems per branch: main qi first, then middle and residual qi.
const HIDDEN_STEMS: [&[HeavenStem]; 12] = [
    &[HeavenStem::Gui],
    &[HeavenStem::Ji, HeavenStem::Gui, HeavenStem::Xin],
    &[HeavenStem::Jia, HeavenStem::Bing, HeavenStem::Wu],
    &[HeavenStem::Yi],
    &[HeavenStem::Wu, HeavenStem::Yi, HeavenStem::Gui],
    &[HeavenStem::Bing, HeavenStem::Geng, HeavenStem::Wu],
    &[HeavenStem::Ding, HeavenStem::Ji],
    &[HeavenStem::Ji, HeavenStem::Ding, HeavenStem::Yi],
    &[HeavenStem::Geng, HeavenStem::Ren, HeavenStem::Wu],
    &[HeavenStem::Xin],
    &[HeavenStem::Wu, HeavenStem::Xin, HeavenStem::Ding],
    &[HeavenStem::Ren, HeavenStem::Jia],
];

impl EarthBranch {
    /// Branch at a cycle position; wraps modulo 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_BRANCHES[index % 12]
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Hanzi name.
    pub const fn chinese(self) -> &'static str {
        BRANCH_HANZI[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub const fn zodiac(self) -> Zodiac {
        ALL_ZODIACS[self.index() as usize]
    }

    /// Hidden stems in fixed order, main qi first.
    pub const fn hidden_stems(self) -> &'static [HeavenStem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Step `n` positions through the 12-cycle (negative steps go back).
    pub const fn next(self, n: i32) -> Self {
        ALL_BRANCHES[(self.index() as i32 + n).rem_euclid(12) as usize]
    }

    /// Branch ruling a clock hour: Zi covers 23:00-00:59, Chou 01:00-02:59, ...
    pub const fn from_hour(hour: u32) -> Self {
        ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
    }

    /// Look up by pinyin (case-insensitive) or Hanzi name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.chinese() == name || b.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for EarthBranch {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| BaseError::UnknownName(s.to_string()))
    }
}

impl std::fmt::Display for EarthBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

/// The 12 zodiac animals, one per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 zodiac animals in branch order.
pub const ALL_ZODIACS: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

impl Zodiac {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// Hanzi name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龙",
            Self::Snake => "蛇",
            Self::Horse => "马",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "鸡",
            Self::Dog => "狗",
            Self::Pig => "猪",
        }
    }
}

impl Serialize for EarthBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.chinese())
    }
}

impl Serialize for Zodiac {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.chinese())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(b.zodiac(), ALL_ZODIACS[i]);
        }
    }

    #[test]
    fn hidden_stems_one_to_three() {
        for b in ALL_BRANCHES {
            let n = b.hidden_stems().len();
            assert!((1..=3).contains(&n), "{} has {n}", b.name());
        }
    }

    #[test]
    fn main_qi_shares_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(b.hidden_stems()[0].element(), b.element(), "{}", b.name());
        }
    }

    #[test]
    fn chou_hidden_order() {
        assert_eq!(
            EarthBranch::Chou.hidden_stems(),
            &[HeavenStem::Ji, HeavenStem::Gui, HeavenStem::Xin]
        );
    }

    #[test]
    fn hour_branches() {
        assert_eq!(EarthBranch::from_hour(0), EarthBranch::Zi);
        assert_eq!(EarthBranch::from_hour(1), EarthBranch::Chou);
        assert_eq!(EarthBranch::from_hour(12), EarthBranch::Wu);
        assert_eq!(EarthBranch::from_hour(22), EarthBranch::Hai);
        assert_eq!(EarthBranch::from_hour(23), EarthBranch::Zi);
    }

    #[test]
    fn tiger_is_yin() {
        assert_eq!(EarthBranch::Yin.zodiac(), Zodiac::Tiger);
        assert_eq!(EarthBranch::Yin.index(), 2);
    }
}
