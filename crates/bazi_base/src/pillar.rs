//! Chart pillar formatting against the day master.

use serde::Serialize;

use crate::branch::{EarthBranch, Zodiac};
use crate::nayin::NaYin;
use crate::sixty_cycle::SixtyCycle;
use crate::stem::HeavenStem;
use crate::ten_star::{TenStarLabel, ten_star};

/// One annotated pillar of the birth chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarInfo {
    /// Hanzi pillar name, e.g. "甲子".
    pub gan_zhi: String,
    pub stem: HeavenStem,
    pub branch: EarthBranch,
    pub zodiac: Zodiac,
    pub element_sound: NaYin,
    pub ten_star: TenStarLabel,
}

/// Annotate `pillar` relative to `day_master`.
///
/// The day pillar always carries [`TenStarLabel::DayMaster`]; every other
/// pillar gets the ten-star relation of its stem.
pub fn format_pillar(pillar: SixtyCycle, day_master: HeavenStem, is_day_pillar: bool) -> PillarInfo {
    let ten_star = if is_day_pillar {
        TenStarLabel::DayMaster
    } else {
        TenStarLabel::Star(ten_star(day_master, pillar.stem()))
    };
    PillarInfo {
        gan_zhi: pillar.name(),
        stem: pillar.stem(),
        branch: pillar.branch(),
        zodiac: pillar.branch().zodiac(),
        element_sound: pillar.sound(),
        ten_star,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ten_star::TenStar;

    #[test]
    fn day_pillar_is_self() {
        let p = SixtyCycle::from_index(54);
        let info = format_pillar(p, p.stem(), true);
        assert_eq!(info.ten_star, TenStarLabel::DayMaster);
        assert_eq!(info.ten_star.name(), "Self");
    }

    #[test]
    fn identical_stem_off_day_is_bi_jian() {
        let p = SixtyCycle::from_index(54);
        let info = format_pillar(p, HeavenStem::Wu, false);
        assert_eq!(info.ten_star, TenStarLabel::Star(TenStar::BiJian));
    }

    #[test]
    fn lookups_filled() {
        // 己卯 year pillar against day master 戊.
        let p = SixtyCycle::from_pair(HeavenStem::Ji, EarthBranch::Mao).unwrap();
        let info = format_pillar(p, HeavenStem::Wu, false);
        assert_eq!(info.gan_zhi, "己卯");
        assert_eq!(info.zodiac, Zodiac::Rabbit);
        assert_eq!(info.element_sound.chinese(), "城头土");
        assert_eq!(info.ten_star, TenStarLabel::Star(TenStar::JieCai));
    }

    #[test]
    fn json_carries_hanzi_names() {
        let p = SixtyCycle::from_pair(HeavenStem::Ji, EarthBranch::Mao).unwrap();
        let v = serde_json::to_value(format_pillar(p, HeavenStem::Wu, false)).unwrap();
        assert_eq!(v["ganZhi"], "己卯");
        assert_eq!(v["stem"], "己");
        assert_eq!(v["branch"], "卯");
        assert_eq!(v["zodiac"], "兔");
        assert_eq!(v["elementSound"], "城头土");
        assert_eq!(v["tenStar"], "劫财");

        let day = serde_json::to_value(format_pillar(p, HeavenStem::Ji, true)).unwrap();
        assert_eq!(day["tenStar"], "日主");
    }
}
