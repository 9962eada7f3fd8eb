//! Plain-text renderings for the terminal.

use std::fmt::Write;

use bazi_base::{
    DecadeFortuneData, FlowMonthInfo, FlowYearInfo, FortuneBaseInfo, FortuneCalendar,
    HiddenStemInfo, PillarInfo,
};
use bazi_rs::{BaziResult, SolarTermEvent};

pub fn chart(chart: &BaziResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "True solar time: {}", chart.true_solar_time);
    if let Some(place) = &chart.birth_place {
        let _ = writeln!(out, "Birth place:     {place}");
    }
    let _ = writeln!(
        out,
        "Gender:          {}   Day master: {} ({})",
        chart.gender.name(),
        chart.day_master.chinese(),
        chart.day_master.name()
    );
    let _ = writeln!(out, "Eight characters: {}", chart.eight_char);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<6} {:<6} {:<8} {:<10} {}", "Pillar", "GanZhi", "Zodiac", "NaYin", "Ten star");
    for (label, p) in [
        ("Year", &chart.year_pillar),
        ("Month", &chart.month_pillar),
        ("Day", &chart.day_pillar),
        ("Hour", &chart.hour_pillar),
    ] {
        let _ = writeln!(out, "{}", pillar_row(label, p));
    }
    out.trim_end().to_string()
}

fn pillar_row(label: &str, p: &PillarInfo) -> String {
    format!(
        "{:<6} {:<6} {:<8} {:<10} {} ({})",
        label,
        p.gan_zhi,
        p.zodiac.name(),
        p.element_sound.chinese(),
        p.ten_star.chinese(),
        p.ten_star.name()
    )
}

pub fn pillar(info: &PillarInfo, detail: &FortuneBaseInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", pillar_row("Pillar", info));
    let _ = writeln!(out, "{}", base_line(detail));
    let _ = write!(out, "Hidden stems: {}", hidden(&detail.hidden_stems));
    out
}

fn base_line(b: &FortuneBaseInfo) -> String {
    let na_yin = b.na_yin.map_or("-", |n| n.chinese());
    let kong = if b.kong_wang.is_empty() { "-" } else { b.kong_wang.as_str() };
    format!(
        "{:<10} {}  di shi {}  zi zuo {}  {}  void {}",
        b.name,
        b.ten_star.chinese(),
        b.di_shi.chinese(),
        b.zi_zuo.chinese(),
        na_yin,
        kong
    )
}

fn hidden(stems: &[HiddenStemInfo]) -> String {
    stems
        .iter()
        .map(|h| format!("{}{}", h.stem.chinese(), h.ten_star.chinese()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn months(months: &[FlowMonthInfo]) -> String {
    months
        .iter()
        .map(|m| format!("{:>2}  {}", m.month_index, base_line(&m.base)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn calendar(chart: &BaziResult, calendar: &FortuneCalendar) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  ({})", chart.eight_char, chart.true_solar_time);
    if calendar.is_empty() {
        let _ = write!(out, "No luck decades available.");
        return out;
    }
    for d in &calendar.decades {
        let _ = writeln!(out, "{}", decade_header(d));
    }
    out.trim_end().to_string()
}

fn decade_header(d: &DecadeFortuneData) -> String {
    format!(
        "[{}] age {:>3}-{:<3} {}-{}  {}",
        d.index,
        d.start_age,
        d.end_age,
        d.start_year,
        d.end_year,
        base_line(&d.base)
    )
}

pub fn decade(d: &DecadeFortuneData) -> String {
    let mut out = decade_header(d);
    for (j, y) in d.years.iter().enumerate() {
        let _ = write!(out, "\n  [{j}] age {:>3}  {}", y.age, base_line(&y.base));
    }
    out
}

pub fn year(y: &FlowYearInfo) -> String {
    let mut out = format!("{} (age {})  {}", y.year, y.age, base_line(&y.base));
    for m in &y.months {
        let _ = write!(out, "\n  {:>2}  {}", m.month_index, base_line(&m.base));
    }
    out
}

pub fn active(year: i32, decade: &DecadeFortuneData, flow_year: Option<&FlowYearInfo>) -> String {
    let mut out = format!("{year}\n  decade {}", decade_header(decade));
    match flow_year {
        Some(y) => {
            let _ = write!(out, "\n  year   age {:>3}  {}", y.age, base_line(&y.base));
        }
        None => {
            let _ = write!(out, "\n  year   -");
        }
    }
    out
}

pub fn terms(events: &[SolarTermEvent]) -> String {
    events
        .iter()
        .map(|e| {
            format!(
                "{} {:<12} {:>5.1}°  {}",
                e.term.chinese(),
                e.term.name(),
                e.term.longitude_deg(),
                e.time
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::{HeavenStem, SixtyCycle, annotate_pillar, flow_months, format_pillar};

    #[test]
    fn months_render_twelve_lines() {
        let m = flow_months(HeavenStem::Jia, HeavenStem::Jia);
        let text = months(&m);
        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().next().unwrap().contains("丙寅"));
    }

    #[test]
    fn pillar_shows_hidden_stems() {
        let p = SixtyCycle::from_name("乙丑").unwrap();
        let text = pillar(
            &format_pillar(p, HeavenStem::Jia, false),
            &annotate_pillar(p, HeavenStem::Jia, p.name()),
        );
        assert!(text.contains("乙丑"));
        assert!(text.contains("Hidden stems: 己"));
    }
}
