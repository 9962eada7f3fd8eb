//! Birth chart assembly and luck-calendar entry points.

use serde::Serialize;
use tracing::{debug, info};

use bazi_base::{
    EightChar, FortuneCalendar, Gender, HeavenStem, LuckSource, PillarInfo, expand_fortunes,
    format_pillar,
};
use bazi_search::{ChildLimitSource, eight_char_at};
use bazi_time::{CivilTime, true_solar_time};

use crate::error::BaziError;
use crate::input::BirthInput;
use crate::location::{CoordinateResolver, resolve_longitude};

/// Everything derived from a birth before any formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaziContext {
    pub true_solar_time: CivilTime,
    pub longitude: f64,
    pub eight_char: EightChar,
    pub gender: Gender,
}

impl BaziContext {
    pub fn day_master(&self) -> HeavenStem {
        self.eight_char.day_master()
    }
}

/// The annotated Four Pillars chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaziResult {
    pub year_pillar: PillarInfo,
    pub month_pillar: PillarInfo,
    pub day_pillar: PillarInfo,
    pub hour_pillar: PillarInfo,
    /// "Y-M-D HH:MM".
    pub true_solar_time: String,
    pub day_master: HeavenStem,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    /// Simple chart form, "己卯 丙子 戊午 戊午".
    pub eight_char: String,
}

/// Validate, resolve the place, shift to true solar time and decompose.
pub fn bazi_context<R>(input: &BirthInput, resolver: &R) -> Result<BaziContext, BaziError>
where
    R: CoordinateResolver + ?Sized,
{
    let civil = input.validate()?;
    let longitude = resolve_longitude(resolver, input.place());
    let tst = true_solar_time(&civil, Some(longitude));
    let eight_char = eight_char_at(&tst)?;
    debug!(civil = %civil, longitude, true_solar_time = %tst, "birth context");
    Ok(BaziContext {
        true_solar_time: tst,
        longitude,
        eight_char,
        gender: input.gender,
    })
}

/// Format the four pillars of a context against its day master.
pub fn format_chart(ctx: &BaziContext, birth_place: Option<String>) -> BaziResult {
    let dm = ctx.day_master();
    let ec = ctx.eight_char;
    BaziResult {
        year_pillar: format_pillar(ec.year, dm, false),
        month_pillar: format_pillar(ec.month, dm, false),
        day_pillar: format_pillar(ec.day, dm, true),
        hour_pillar: format_pillar(ec.hour, dm, false),
        true_solar_time: ctx.true_solar_time.chart_label(),
        day_master: dm,
        gender: ctx.gender,
        birth_place,
        eight_char: ec.to_string(),
    }
}

/// Four Pillars chart for a birth.
pub fn calculate_bazi<R>(input: &BirthInput, resolver: &R) -> Result<BaziResult, BaziError>
where
    R: CoordinateResolver + ?Sized,
{
    let ctx = bazi_context(input, resolver)?;
    Ok(chart_for(&ctx, input))
}

/// Luck calendar for a true-solar-time birth using the solar-term child limit.
pub fn calculate_fortunes(true_solar_time: &CivilTime, gender: Gender) -> Result<FortuneCalendar, BaziError> {
    calculate_fortunes_with(&ChildLimitSource, true_solar_time, gender)
}

/// Luck calendar from any [`LuckSource`].
///
/// An unavailable first decade yields an empty calendar, not an error.
pub fn calculate_fortunes_with<S: LuckSource>(
    source: &S,
    true_solar_time: &CivilTime,
    gender: Gender,
) -> Result<FortuneCalendar, BaziError> {
    let day_master = eight_char_at(true_solar_time)?.day_master();
    Ok(calendar_for(source, true_solar_time, gender, day_master))
}

/// Chart and luck calendar in one pass.
pub fn calculate_all<R>(
    input: &BirthInput,
    resolver: &R,
) -> Result<(BaziResult, FortuneCalendar), BaziError>
where
    R: CoordinateResolver + ?Sized,
{
    let ctx = bazi_context(input, resolver)?;
    let chart = chart_for(&ctx, input);
    let calendar = calendar_for(
        &ChildLimitSource,
        &ctx.true_solar_time,
        ctx.gender,
        ctx.day_master(),
    );
    Ok((chart, calendar))
}

fn chart_for(ctx: &BaziContext, input: &BirthInput) -> BaziResult {
    let result = format_chart(ctx, input.birth_place.clone());
    info!(chart = %result.eight_char, true_solar_time = %result.true_solar_time, "chart computed");
    result
}

fn calendar_for<S: LuckSource>(
    source: &S,
    true_solar_time: &CivilTime,
    gender: Gender,
    day_master: HeavenStem,
) -> FortuneCalendar {
    let decades = expand_fortunes(source, true_solar_time, gender, day_master);
    info!(decades = decades.len(), "luck calendar expanded");
    FortuneCalendar::new(decades)
}
