//! Twelve life stages (chang sheng shi er gong) of a stem seated on a branch.
//!
//! Yang stems walk the branches forward from their birth branch, Yin stems
//! walk backward. Earth stems follow Fire.

use serde::{Serialize, Serializer};

use crate::branch::EarthBranch;
use crate::stem::HeavenStem;

/// The 12 life stages from birth to nurture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    ChangSheng,
    MuYu,
    GuanDai,
    LinGuan,
    DiWang,
    Shuai,
    Bing,
    Si,
    Mu,
    Jue,
    Tai,
    Yang,
}

pub const ALL_TERRAINS: [Terrain; 12] = [
    Terrain::ChangSheng,
    Terrain::MuYu,
    Terrain::GuanDai,
    Terrain::LinGuan,
    Terrain::DiWang,
    Terrain::Shuai,
    Terrain::Bing,
    Terrain::Si,
    Terrain::Mu,
    Terrain::Jue,
    Terrain::Tai,
    Terrain::Yang,
];

/// Stage offset per stem: the branch index where the stem is born, or its
/// mirror for Yin stems.
const STEM_OFFSET: [i32; 10] = [1, 6, 10, 9, 10, 9, 7, 0, 4, 3];

impl Terrain {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ChangSheng => "ChangSheng",
            Self::MuYu => "MuYu",
            Self::GuanDai => "GuanDai",
            Self::LinGuan => "LinGuan",
            Self::DiWang => "DiWang",
            Self::Shuai => "Shuai",
            Self::Bing => "Bing",
            Self::Si => "Si",
            Self::Mu => "Mu",
            Self::Jue => "Jue",
            Self::Tai => "Tai",
            Self::Yang => "Yang",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::ChangSheng => "长生",
            Self::MuYu => "沐浴",
            Self::GuanDai => "冠带",
            Self::LinGuan => "临官",
            Self::DiWang => "帝旺",
            Self::Shuai => "衰",
            Self::Bing => "病",
            Self::Si => "死",
            Self::Mu => "墓",
            Self::Jue => "绝",
            Self::Tai => "胎",
            Self::Yang => "养",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

/// Life stage of `stem` when seated on `branch`.
pub const fn terrain(stem: HeavenStem, branch: EarthBranch) -> Terrain {
    let offset = STEM_OFFSET[stem.index() as usize];
    let b = branch.index() as i32;
    let i = if stem.index() % 2 == 0 {
        offset + b
    } else {
        offset - b
    };
    ALL_TERRAINS[i.rem_euclid(12) as usize]
}

impl Serialize for Terrain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.chinese())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn birth_branches() {
        use EarthBranch as B;
        use HeavenStem as S;
        let births = [
            (S::Jia, B::Hai),
            (S::Yi, B::Wu),
            (S::Bing, B::Yin),
            (S::Ding, B::You),
            (S::Wu, B::Yin),
            (S::Ji, B::You),
            (S::Geng, B::Si),
            (S::Xin, B::Zi),
            (S::Ren, B::Shen),
            (S::Gui, B::Mao),
        ];
        for (s, b) in births {
            assert_eq!(terrain(s, b), Terrain::ChangSheng, "{}", s.name());
        }
    }

    #[test]
    fn jia_on_chou_and_yi_on_chou() {
        assert_eq!(terrain(HeavenStem::Jia, EarthBranch::Chou), Terrain::GuanDai);
        assert_eq!(terrain(HeavenStem::Yi, EarthBranch::Chou), Terrain::Shuai);
    }

    #[test]
    fn every_stem_visits_all_stages() {
        for s in ALL_STEMS {
            let mut seen = [false; 12];
            for b in ALL_BRANCHES {
                seen[terrain(s, b).index() as usize] = true;
            }
            assert!(seen.iter().all(|x| *x), "{}", s.name());
        }
    }

    #[test]
    fn peak_of_jia_is_mao() {
        assert_eq!(terrain(HeavenStem::Jia, EarthBranch::Mao), Terrain::DiWang);
        assert_eq!(terrain(HeavenStem::Yi, EarthBranch::Yin), Terrain::DiWang);
    }
}
