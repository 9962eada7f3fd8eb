use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

use bazi_base::{annotate_pillar, flow_months, format_pillar};
use bazi_rs::{BirthInput, CoordinateResolver, calculate_all, calculate_bazi, resolve_longitude};
use bazi_search::terms_for_year;
use bazi_time::{offset_minutes, true_solar_time};

use crate::cli::{BirthArgs, Cli, Command, FortuneArgs};
use crate::config::{BaziConfig, OutputFormat};
use crate::render;

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = BaziConfig::load(cli.config.as_deref())?;
    let json = cli.json || config.defaults.output == OutputFormat::Json;
    let resolver = config.resolver();

    match cli.command {
        Command::Chart(args) => {
            let input = birth_input(&args, &config);
            let chart = calculate_bazi(&input, &resolver).context("chart computation failed")?;
            emit(json, &chart, || render::chart(&chart))
        }
        Command::Fortune(args) => fortune(args, &config, &resolver, json),
        Command::Pillar { pillar, day_master } => {
            let info = format_pillar(pillar, day_master, false);
            let detail = annotate_pillar(pillar, day_master, pillar.name());
            if json {
                print_json(&detail)
            } else {
                println!("{}", render::pillar(&info, &detail));
                Ok(())
            }
        }
        Command::Months {
            year_stem,
            day_master,
        } => {
            let months = flow_months(year_stem, day_master);
            emit(json, &months, || render::months(&months))
        }
        Command::SolarTime {
            date,
            longitude,
            place,
        } => {
            let lon = match longitude {
                Some(lon) => lon,
                None => resolve_longitude(&resolver, place.as_deref()),
            };
            let tst = true_solar_time(&date, Some(lon));
            let out = SolarTimeOutput {
                civil: date.to_string(),
                longitude: lon,
                offset_minutes: offset_minutes(lon),
                true_solar_time: tst.to_string(),
            };
            emit(json, &out, || {
                format!(
                    "{}  @ {:.4}°E  {:+.2} min  →  {}",
                    out.civil, out.longitude, out.offset_minutes, out.true_solar_time
                )
            })
        }
        Command::Terms { year } => {
            let terms = terms_for_year(year)
                .with_context(|| format!("solar term search failed for {year}"))?;
            emit(json, &terms, || render::terms(&terms))
        }
    }
}

fn fortune<R: CoordinateResolver + ?Sized>(
    args: FortuneArgs,
    config: &BaziConfig,
    resolver: &R,
    json: bool,
) -> Result<()> {
    let input = birth_input(&args.birth, config);
    let (chart, calendar) = calculate_all(&input, resolver).context("luck calendar failed")?;
    info!(decades = calendar.len(), "calendar ready");

    if let Some(year) = args.at {
        let Some(decade) = calendar.active_decade(year) else {
            bail!("no decade covers {year}");
        };
        let flow_year = calendar.active_year(year);
        return if json {
            print_json(&ActiveOutput {
                year,
                decade: &decade.base,
                flow_year: flow_year.map(|y| &y.base),
            })
        } else {
            println!("{}", render::active(year, decade, flow_year));
            Ok(())
        };
    }

    match (args.decade, args.year) {
        (None, _) => emit(json, &calendar, || render::calendar(&chart, &calendar)),
        (Some(d), None) => {
            let decade = calendar
                .decade(d)
                .with_context(|| format!("decade {d} out of range (0..{})", calendar.len()))?;
            emit(json, decade, || render::decade(decade))
        }
        (Some(d), Some(y)) => {
            let year = calendar
                .year(d, y)
                .with_context(|| format!("year {y} of decade {d} out of range"))?;
            emit(json, year, || render::year(year))
        }
    }
}

fn birth_input(args: &BirthArgs, config: &BaziConfig) -> BirthInput {
    let input = BirthInput::from_civil(&args.date, config.gender_or_default(args.gender));
    match &args.place {
        Some(place) => input.with_place(place.clone()),
        None => input,
    }
}

fn emit<T, F>(json: bool, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if json {
        print_json(value)
    } else {
        println!("{}", text());
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{s}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SolarTimeOutput {
    civil: String,
    longitude: f64,
    offset_minutes: f64,
    true_solar_time: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActiveOutput<'a> {
    year: i32,
    decade: &'a bazi_base::FortuneBaseInfo,
    flow_year: Option<&'a bazi_base::FortuneBaseInfo>,
}
