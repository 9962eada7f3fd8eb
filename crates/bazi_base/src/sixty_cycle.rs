//! The sexagenary cycle (liu shi jia zi).
//!
//! Stems and branches advance in lock-step, so only the 60 pairs with equal
//! index parity occur. A [`SixtyCycle`] is always one of those 60; invalid
//! pairs are rejected at construction.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::branch::EarthBranch;
use crate::error::BaseError;
use crate::nayin::NaYin;
use crate::stem::HeavenStem;

/// Number of pillars in the cycle.
pub const CYCLE_LEN: u8 = 60;

/// One of the 60 valid stem/branch pairs, by cycle position (0 = Jia-Zi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SixtyCycle(u8);

impl SixtyCycle {
    /// Pillar at a cycle position; wraps modulo 60.
    pub const fn from_index(index: usize) -> Self {
        Self((index % CYCLE_LEN as usize) as u8)
    }

    /// Pair a stem with a branch. `None` for the 60 pairs of mixed parity.
    pub const fn from_pair(stem: HeavenStem, branch: EarthBranch) -> Option<Self> {
        let s = stem.index() as i32;
        let b = branch.index() as i32;
        if s % 2 != b % 2 {
            return None;
        }
        // Solve i = s (mod 10), i = b (mod 12).
        Some(Self((6 * s - 5 * b).rem_euclid(60) as u8))
    }

    /// Look up by Hanzi ("甲子") or concatenated pinyin ("JiaZi", "jia-zi").
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let folded: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .collect();
        (0..CYCLE_LEN as usize)
            .map(Self::from_index)
            .find(|p| p.name() == name || p.pinyin().eq_ignore_ascii_case(&folded))
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn stem(self) -> HeavenStem {
        HeavenStem::from_index(self.0 as usize)
    }

    pub const fn branch(self) -> EarthBranch {
        EarthBranch::from_index(self.0 as usize)
    }

    /// Step `n` positions through the cycle (negative steps go back).
    pub const fn next(self, n: i32) -> Self {
        Self((self.0 as i32 + n).rem_euclid(CYCLE_LEN as i32) as u8)
    }

    /// Elemental sound; consecutive pairs share one.
    pub const fn sound(self) -> NaYin {
        NaYin::from_index((self.0 / 2) as usize)
    }

    /// First pillar of this pillar's decade ("xun"), always a Jia stem.
    pub const fn xun_head(self) -> Self {
        Self(self.0 - self.0 % 10)
    }

    /// The two branches the decade never reaches (KongWang).
    pub const fn void_branches(self) -> [EarthBranch; 2] {
        let head = self.xun_head().branch().index() as usize;
        [
            EarthBranch::from_index(head + 10),
            EarthBranch::from_index(head + 11),
        ]
    }

    /// Hanzi name, e.g. "甲子".
    pub fn name(self) -> String {
        format!("{}{}", self.stem().chinese(), self.branch().chinese())
    }

    /// Pinyin name, e.g. "JiaZi".
    pub fn pinyin(self) -> String {
        format!("{}{}", self.stem().name(), self.branch().name())
    }
}

impl FromStr for SixtyCycle {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| BaseError::UnknownName(s.to_string()))
    }
}

impl std::fmt::Display for SixtyCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem().chinese(), self.branch().chinese())
    }
}

impl Serialize for SixtyCycle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
