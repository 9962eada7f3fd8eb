//! Ten-star (shi shen) relations of a stem to the day master.
//!
//! The relation depends only on the element distance from the day master
//! (same, generated, controlled, controlling, generating) and on whether the
//! two stems share polarity.

use serde::{Serialize, Serializer};

use crate::stem::{ALL_STEMS, HeavenStem};

/// The ten relations, ordered by element distance then polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenStar {
    /// Same element, same polarity.
    BiJian,
    /// Same element, opposite polarity.
    JieCai,
    ShiShen,
    ShangGuan,
    PianCai,
    ZhengCai,
    QiSha,
    ZhengGuan,
    PianYin,
    ZhengYin,
}

pub const ALL_TEN_STARS: [TenStar; 10] = [
    TenStar::BiJian,
    TenStar::JieCai,
    TenStar::ShiShen,
    TenStar::ShangGuan,
    TenStar::PianCai,
    TenStar::ZhengCai,
    TenStar::QiSha,
    TenStar::ZhengGuan,
    TenStar::PianYin,
    TenStar::ZhengYin,
];

impl TenStar {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "BiJian",
            Self::JieCai => "JieCai",
            Self::ShiShen => "ShiShen",
            Self::ShangGuan => "ShangGuan",
            Self::PianCai => "PianCai",
            Self::ZhengCai => "ZhengCai",
            Self::QiSha => "QiSha",
            Self::ZhengGuan => "ZhengGuan",
            Self::PianYin => "PianYin",
            Self::ZhengYin => "ZhengYin",
        }
    }

    /// Hanzi name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }
}

impl std::fmt::Display for TenStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

const fn relation(day_master: HeavenStem, other: HeavenStem) -> TenStar {
    let distance = (other.element().index() + 5 - day_master.element().index()) % 5;
    let offset = if day_master.index() % 2 == other.index() % 2 {
        0
    } else {
        1
    };
    ALL_TEN_STARS[(distance * 2 + offset) as usize]
}

const fn build_table() -> [[TenStar; 10]; 10] {
    let mut table = [[TenStar::BiJian; 10]; 10];
    let mut dm = 0;
    while dm < 10 {
        let mut other = 0;
        while other < 10 {
            table[dm][other] = relation(ALL_STEMS[dm], ALL_STEMS[other]);
            other += 1;
        }
        dm += 1;
    }
    table
}

/// `TEN_STAR_TABLE[day_master][other]`.
pub const TEN_STAR_TABLE: [[TenStar; 10]; 10] = build_table();

/// Relation of `other` to `day_master`.
pub const fn ten_star(day_master: HeavenStem, other: HeavenStem) -> TenStar {
    TEN_STAR_TABLE[day_master.index() as usize][other.index() as usize]
}

/// Ten-star slot of a pillar: the day pillar carries the day master itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenStarLabel {
    DayMaster,
    Star(TenStar),
}

impl TenStarLabel {
    /// English label; the day master renders as "Self".
    pub const fn name(self) -> &'static str {
        match self {
            Self::DayMaster => "Self",
            Self::Star(star) => star.name(),
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::DayMaster => "日主",
            Self::Star(star) => star.chinese(),
        }
    }

    pub const fn star(self) -> Option<TenStar> {
        match self {
            Self::DayMaster => None,
            Self::Star(star) => Some(star),
        }
    }
}

impl std::fmt::Display for TenStarLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

impl Serialize for TenStarLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.chinese())
    }
}

impl Serialize for TenStar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.chinese())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_stem_is_bi_jian() {
        for s in ALL_STEMS {
            assert_eq!(ten_star(s, s), TenStar::BiJian);
        }
    }

    #[test]
    fn jia_row() {
        use HeavenStem::*;
        let row: Vec<TenStar> = ALL_STEMS.iter().map(|&s| ten_star(Jia, s)).collect();
        assert_eq!(row, ALL_TEN_STARS.to_vec());
        assert_eq!(ten_star(Jia, Yi).chinese(), "劫财");
    }

    #[test]
    fn geng_relations() {
        use HeavenStem::*;
        // Metal controls Wood: Jia sees Geng as QiSha, Xin as ZhengGuan.
        assert_eq!(ten_star(Jia, Geng), TenStar::QiSha);
        assert_eq!(ten_star(Jia, Xin), TenStar::ZhengGuan);
        assert_eq!(ten_star(Geng, Ren), TenStar::ShiShen);
        assert_eq!(ten_star(Geng, Ji), TenStar::ZhengYin);
    }

    #[test]
    fn each_row_is_a_permutation() {
        for row in TEN_STAR_TABLE {
            let mut seen = [false; 10];
            for star in row {
                seen[star.index() as usize] = true;
            }
            assert!(seen.iter().all(|s| *s));
        }
    }

    #[test]
    fn day_master_label() {
        assert_eq!(TenStarLabel::DayMaster.name(), "Self");
        assert_eq!(TenStarLabel::DayMaster.star(), None);
        assert_eq!(TenStarLabel::Star(TenStar::PianYin).chinese(), "偏印");
    }
}
