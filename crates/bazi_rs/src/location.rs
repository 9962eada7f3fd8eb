//! Place name → coordinates boundary.
//!
//! Resolution is best effort: an empty place never reaches a resolver, and
//! an unresolved one falls back to the 120°E reference meridian so the true
//! solar time equals the civil time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bazi_time::REFERENCE_MERIDIAN_DEG;

/// Geographic coordinates in degrees (east and north positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and within ±90° / ±180°.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Looks up a place name.
pub trait CoordinateResolver {
    fn resolve(&self, place: &str) -> Option<Coordinates>;
}

impl<R: CoordinateResolver + ?Sized> CoordinateResolver for &R {
    fn resolve(&self, place: &str) -> Option<Coordinates> {
        (**self).resolve(place)
    }
}

impl<R: CoordinateResolver + ?Sized> CoordinateResolver for Box<R> {
    fn resolve(&self, place: &str) -> Option<Coordinates> {
        (**self).resolve(place)
    }
}

/// Resolves nothing; every lookup falls back to the reference meridian.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl CoordinateResolver for NoResolver {
    fn resolve(&self, _place: &str) -> Option<Coordinates> {
        None
    }
}

/// Parses "latitude,longitude" text, e.g. "39.9,116.4".
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericResolver;

impl CoordinateResolver for NumericResolver {
    fn resolve(&self, place: &str) -> Option<Coordinates> {
        let (lat, lon) = place.split_once(',')?;
        let coords = Coordinates::new(lat.trim().parse().ok()?, lon.trim().parse().ok()?);
        coords.is_valid().then_some(coords)
    }
}

/// Fixed table of named places, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: BTreeMap<String, Coordinates>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, coords: Coordinates) {
        self.places.insert(name.into().trim().to_lowercase(), coords);
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Coordinates)> for Gazetteer {
    fn from_iter<I: IntoIterator<Item = (S, Coordinates)>>(iter: I) -> Self {
        let mut g = Self::new();
        for (name, coords) in iter {
            g.insert(name, coords);
        }
        g
    }
}

impl CoordinateResolver for Gazetteer {
    fn resolve(&self, place: &str) -> Option<Coordinates> {
        self.places.get(&place.trim().to_lowercase()).copied()
    }
}

/// Tries each resolver in order; the first hit wins.
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn CoordinateResolver + Send + Sync>>,
}

impl ChainResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resolver: impl CoordinateResolver + Send + Sync + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }
}

impl CoordinateResolver for ChainResolver {
    fn resolve(&self, place: &str) -> Option<Coordinates> {
        self.resolvers.iter().find_map(|r| r.resolve(place))
    }
}

/// Longitude for a birth place, or the 120°E reference meridian.
pub fn resolve_longitude<R: CoordinateResolver + ?Sized>(resolver: &R, place: Option<&str>) -> f64 {
    let place = match place.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => return REFERENCE_MERIDIAN_DEG,
    };
    match resolver.resolve(place) {
        Some(coords) if coords.is_valid() => {
            debug!(place, latitude = coords.latitude, longitude = coords.longitude, "place resolved");
            coords.longitude
        }
        _ => {
            warn!(place, fallback = REFERENCE_MERIDIAN_DEG, "place not resolved, using reference meridian");
            REFERENCE_MERIDIAN_DEG
        }
    }
}
