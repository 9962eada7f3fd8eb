//! NaYin ("elemental sound"): one of 30 element classes, shared by each
//! consecutive pair of the 60-cycle (Jia-Zi and Yi-Chou are both Sea Metal).

use serde::{Serialize, Serializer};

use crate::element::Element;

/// The 30 NaYin classes in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaYin {
    SeaMetal,
    FurnaceFire,
    ForestWood,
    RoadsideEarth,
    SwordMetal,
    MountainFire,
    StreamWater,
    RampartEarth,
    WaxMetal,
    WillowWood,
    SpringWater,
    RoofEarth,
    ThunderFire,
    PineWood,
    RiverWater,
    SandMetal,
    FootHillFire,
    PlainWood,
    WallEarth,
    FoilMetal,
    LampFire,
    HeavenWater,
    HighwayEarth,
    JewelMetal,
    MulberryWood,
    BrookWater,
    DuneEarth,
    SkyFire,
    PomegranateWood,
    OceanWater,
}

/// All 30 NaYin classes (index 0 = Sea Metal for Jia-Zi/Yi-Chou).
pub const ALL_NAYIN: [NaYin; 30] = [
    NaYin::SeaMetal,
    NaYin::FurnaceFire,
    NaYin::ForestWood,
    NaYin::RoadsideEarth,
    NaYin::SwordMetal,
    NaYin::MountainFire,
    NaYin::StreamWater,
    NaYin::RampartEarth,
    NaYin::WaxMetal,
    NaYin::WillowWood,
    NaYin::SpringWater,
    NaYin::RoofEarth,
    NaYin::ThunderFire,
    NaYin::PineWood,
    NaYin::RiverWater,
    NaYin::SandMetal,
    NaYin::FootHillFire,
    NaYin::PlainWood,
    NaYin::WallEarth,
    NaYin::FoilMetal,
    NaYin::LampFire,
    NaYin::HeavenWater,
    NaYin::HighwayEarth,
    NaYin::JewelMetal,
    NaYin::MulberryWood,
    NaYin::BrookWater,
    NaYin::DuneEarth,
    NaYin::SkyFire,
    NaYin::PomegranateWood,
    NaYin::OceanWater,
];

const NAYIN_HANZI: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
    "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "沙中金", "山下火", "平地木", "壁上土", "金箔金",
    "覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

const NAYIN_ENGLISH: [&str; 30] = [
    "Sea Metal",
    "Furnace Fire",
    "Forest Wood",
    "Roadside Earth",
    "Sword Metal",
    "Mountain Fire",
    "Stream Water",
    "Rampart Earth",
    "Wax Metal",
    "Willow Wood",
    "Spring Water",
    "Roof Earth",
    "Thunder Fire",
    "Pine Wood",
    "River Water",
    "Sand Metal",
    "Foothill Fire",
    "Plain Wood",
    "Wall Earth",
    "Foil Metal",
    "Lamp Fire",
    "Heaven Water",
    "Highway Earth",
    "Jewel Metal",
    "Mulberry Wood",
    "Brook Water",
    "Dune Earth",
    "Sky Fire",
    "Pomegranate Wood",
    "Ocean Water",
];

/// Element of each NaYin class, by index.
const NAYIN_ELEMENT: [Element; 30] = [
    Element::Metal,
    Element::Fire,
    Element::Wood,
    Element::Earth,
    Element::Metal,
    Element::Fire,
    Element::Water,
    Element::Earth,
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Earth,
    Element::Fire,
    Element::Wood,
    Element::Water,
    Element::Metal,
    Element::Fire,
    Element::Wood,
    Element::Earth,
    Element::Metal,
    Element::Fire,
    Element::Water,
    Element::Earth,
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Earth,
    Element::Fire,
    Element::Wood,
    Element::Water,
];

impl NaYin {
    /// NaYin at index 0..29; wraps modulo 30.
    pub const fn from_index(index: usize) -> Self {
        ALL_NAYIN[index % 30]
    }

    /// 0-based index (SeaMetal=0 .. OceanWater=29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Hanzi name, e.g. "海中金".
    pub fn chinese(self) -> &'static str {
        NAYIN_HANZI[self.index() as usize]
    }

    /// English rendering, e.g. "Sea Metal".
    pub fn english_name(self) -> &'static str {
        NAYIN_ENGLISH[self.index() as usize]
    }

    pub fn element(self) -> Element {
        NAYIN_ELEMENT[self.index() as usize]
    }
}

impl std::fmt::Display for NaYin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

impl Serialize for NaYin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.chinese())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAYIN.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn hanzi_suffix_matches_element() {
        for n in ALL_NAYIN {
            assert!(n.chinese().ends_with(n.element().chinese()), "{}", n.chinese());
        }
    }

    #[test]
    fn english_suffix_matches_element() {
        for n in ALL_NAYIN {
            assert!(n.english_name().ends_with(n.element().name()), "{}", n.english_name());
        }
    }
}
