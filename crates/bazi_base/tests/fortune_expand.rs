//! Expansion tests against a scripted cursor provider.
//!
//! The provider is independent of any solar-term math so the expander's
//! shape, ordering and annotations can be checked in isolation.

use bazi_base::{
    DECADE_COUNT, DecadeCursor, FortuneCalendar, Gender, HeavenStem, LuckSource, SixtyCycle,
    TenStar, Terrain, YearCursor, expand_fortunes,
};
use bazi_time::CivilTime;

#[derive(Debug, Clone)]
struct ScriptedYear {
    pillar: SixtyCycle,
    age: i32,
}

impl YearCursor for ScriptedYear {
    fn sixty_cycle(&self) -> SixtyCycle {
        self.pillar
    }

    fn age(&self) -> i32 {
        self.age
    }

    fn next(&self) -> Self {
        Self {
            pillar: self.pillar.next(1),
            age: self.age + 1,
        }
    }
}

#[derive(Debug, Clone)]
struct ScriptedDecade {
    pillar: SixtyCycle,
    index: i32,
    start_age: i32,
    birth_year: i32,
    limit: i32,
}

impl DecadeCursor for ScriptedDecade {
    type Year = ScriptedYear;

    fn sixty_cycle(&self) -> SixtyCycle {
        self.pillar
    }

    fn start_age(&self) -> i32 {
        self.start_age + self.index * 10
    }

    fn end_age(&self) -> i32 {
        self.start_age() + 9
    }

    fn start_year(&self) -> i32 {
        self.birth_year + self.start_age() - 1
    }

    fn end_year(&self) -> i32 {
        self.start_year() + 9
    }

    fn first_year(&self) -> ScriptedYear {
        ScriptedYear {
            pillar: SixtyCycle::from_index((self.start_year() - 4).rem_euclid(60) as usize),
            age: self.start_age() - 1,
        }
    }

    fn next(&self) -> Option<Self> {
        (self.index + 1 < self.limit).then(|| Self {
            pillar: self.pillar.next(1),
            index: self.index + 1,
            ..self.clone()
        })
    }
}

struct ScriptedSource {
    first: SixtyCycle,
    limit: i32,
}

impl LuckSource for ScriptedSource {
    type Decade = ScriptedDecade;

    fn first_decade(&self, birth: &CivilTime, _gender: Gender) -> Option<ScriptedDecade> {
        (self.limit > 0).then(|| ScriptedDecade {
            pillar: self.first,
            index: 0,
            start_age: 3,
            birth_year: birth.year,
            limit: self.limit,
        })
    }
}

fn birth() -> CivilTime {
    CivilTime::new(1990, 5, 20, 8, 30, 0)
}

fn yi_chou_source(limit: i32) -> ScriptedSource {
    ScriptedSource {
        first: "乙丑".parse().unwrap(),
        limit,
    }
}

#[test]
fn shape_is_eight_by_ten_by_twelve() {
    let decades = expand_fortunes(&yi_chou_source(20), &birth(), Gender::Male, HeavenStem::Jia);
    assert_eq!(decades.len(), DECADE_COUNT);
    for d in &decades {
        assert_eq!(d.years.len(), 10);
        for y in &d.years {
            assert_eq!(y.months.len(), 12);
        }
    }
}

#[test]
fn exhausted_cursor_truncates() {
    let decades = expand_fortunes(&yi_chou_source(3), &birth(), Gender::Male, HeavenStem::Jia);
    assert_eq!(decades.len(), 3);
}

#[test]
fn missing_first_decade_yields_empty() {
    let decades = expand_fortunes(&yi_chou_source(0), &birth(), Gender::Female, HeavenStem::Jia);
    assert!(decades.is_empty());
}

#[test]
fn jia_day_master_on_yi_chou_decade() {
    let decades = expand_fortunes(&yi_chou_source(8), &birth(), Gender::Male, HeavenStem::Jia);
    let first = &decades[0].base;
    assert_eq!(first.name, "乙丑");
    assert_eq!(first.ten_star, TenStar::JieCai);
    assert_eq!(first.di_shi, Terrain::GuanDai);
    assert_eq!(first.zi_zuo, Terrain::Shuai);
    assert_eq!(first.na_yin.map(|n| n.chinese()), Some("海中金"));
    assert_eq!(first.kong_wang, "戌、亥");
    let hidden: Vec<(&str, &str)> = first
        .hidden_stems
        .iter()
        .map(|h| (h.stem.chinese(), h.ten_star.chinese()))
        .collect();
    assert_eq!(hidden, vec![("己", "正财"), ("癸", "正印"), ("辛", "正官")]);
}

#[test]
fn decade_bookkeeping_comes_from_cursor() {
    let decades = expand_fortunes(&yi_chou_source(8), &birth(), Gender::Male, HeavenStem::Jia);
    for (i, d) in decades.iter().enumerate() {
        assert_eq!(d.index, i);
        assert_eq!(d.start_age, 3 + 10 * i as i32);
        assert_eq!(d.end_age, d.start_age + 9);
        assert_eq!(d.end_year, d.start_year + 9);
    }
    assert_eq!(decades[1].base.gan_zhi, "丙寅");
}

#[test]
fn flow_year_value_is_birth_year_plus_age() {
    let decades = expand_fortunes(&yi_chou_source(2), &birth(), Gender::Male, HeavenStem::Jia);
    for d in &decades {
        for y in &d.years {
            assert_eq!(y.year, 1990 + y.age);
            assert_eq!(y.base.name, format!("{} {}", y.year, y.base.gan_zhi));
        }
    }
    let ages: Vec<i32> = decades[0].years.iter().map(|y| y.age).collect();
    assert_eq!(ages, (2..12).collect::<Vec<_>>());
}

#[test]
fn months_follow_year_stem() {
    let decades = expand_fortunes(&yi_chou_source(1), &birth(), Gender::Male, HeavenStem::Jia);
    for y in &decades[0].years {
        let first = bazi_base::first_month_stem(y.base.stem);
        assert_eq!(y.months[0].base.stem, first);
        assert_eq!(y.months[0].base.branch.chinese(), "寅");
        assert_eq!(y.months[11].base.branch.chinese(), "丑");
    }
}

#[test]
fn expansion_is_idempotent() {
    let source = yi_chou_source(8);
    let a = expand_fortunes(&source, &birth(), Gender::Male, HeavenStem::Jia);
    let b = expand_fortunes(&source, &birth(), Gender::Male, HeavenStem::Jia);
    assert_eq!(a, b);
    let ja = serde_json::to_string(&a).unwrap();
    let jb = serde_json::to_string(&b).unwrap();
    assert_eq!(ja, jb);
}

#[test]
fn calendar_selection_and_active_lookup() {
    let cal = FortuneCalendar::new(expand_fortunes(
        &yi_chou_source(8),
        &birth(),
        Gender::Male,
        HeavenStem::Jia,
    ));
    assert_eq!(cal.len(), 8);
    let y = cal.year(1, 4).unwrap();
    assert_eq!(cal.active_year(y.year), Some(y));
    assert_eq!(cal.active_decade(y.year).map(|d| d.index), Some(1));
    assert!(cal.year(8, 0).is_none());
    assert!(cal.year(0, 10).is_none());
    assert!(cal.active_year(1800).is_none());
    assert_eq!(cal.years().count(), 80);
}

#[test]
fn json_uses_camel_case_and_flattened_base() {
    let decades = expand_fortunes(&yi_chou_source(1), &birth(), Gender::Male, HeavenStem::Jia);
    let value = serde_json::to_value(&decades[0]).unwrap();
    assert_eq!(value["ganZhi"], "乙丑");
    assert_eq!(value["startAge"], 3);
    assert_eq!(value["kongWang"], "戌、亥");
    assert_eq!(value["tenStar"], "劫财");
    assert_eq!(value["naYin"], "海中金");
    assert_eq!(value["diShi"], "冠带");
    assert_eq!(value["ziZuo"], "衰");
    assert_eq!(value["hiddenStems"][0]["stem"], "己");
    assert_eq!(value["hiddenStems"][0]["tenStar"], "正财");
    assert_eq!(value["years"][0]["months"][0]["monthIndex"], 1);
}
