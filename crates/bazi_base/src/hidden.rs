//! Hidden stems, void branches and the shared node annotation.

use serde::Serialize;

use crate::branch::EarthBranch;
use crate::fortune::types::FortuneBaseInfo;
use crate::sixty_cycle::SixtyCycle;
use crate::stem::HeavenStem;
use crate::ten_star::{TenStar, ten_star};
use crate::terrain::terrain;

/// Separator between the two void branch names.
pub const KONG_WANG_SEPARATOR: &str = "、";

/// A stem latent in a branch with its relation to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenStemInfo {
    pub stem: HeavenStem,
    pub ten_star: TenStar,
}

/// Hidden stems of `branch`, main qi first.
pub fn hidden_stems(branch: EarthBranch, day_master: HeavenStem) -> Vec<HiddenStemInfo> {
    branch
        .hidden_stems()
        .iter()
        .map(|&stem| HiddenStemInfo {
            stem,
            ten_star: ten_star(day_master, stem),
        })
        .collect()
}

/// Void branches of `pillar` rendered as "戌、亥"; empty for `None`.
pub fn kong_wang(pillar: Option<SixtyCycle>) -> String {
    match pillar {
        Some(p) => {
            let [a, b] = p.void_branches();
            format!("{}{KONG_WANG_SEPARATOR}{}", a.chinese(), b.chinese())
        }
        None => String::new(),
    }
}

/// Full annotation for a stem/branch pair seen from `day_master`.
///
/// A pair that is not one of the 60 pillars still gets its ten star, life
/// stages and hidden stems; only NaYin and KongWang are left blank.
pub fn annotate(
    stem: HeavenStem,
    branch: EarthBranch,
    day_master: HeavenStem,
    name: String,
) -> FortuneBaseInfo {
    let pillar = SixtyCycle::from_pair(stem, branch);
    FortuneBaseInfo {
        name,
        gan_zhi: format!("{}{}", stem.chinese(), branch.chinese()),
        stem,
        branch,
        ten_star: ten_star(day_master, stem),
        di_shi: terrain(day_master, branch),
        zi_zuo: terrain(stem, branch),
        na_yin: pillar.map(SixtyCycle::sound),
        hidden_stems: hidden_stems(branch, day_master),
        kong_wang: kong_wang(pillar),
    }
}

/// [`annotate`] for a known-valid pillar.
pub fn annotate_pillar(pillar: SixtyCycle, day_master: HeavenStem, name: String) -> FortuneBaseInfo {
    annotate(pillar.stem(), pillar.branch(), day_master, name)
}
