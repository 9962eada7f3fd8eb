//! Cursor boundary to the child-limit provider.
//!
//! The expander only walks cursors; how the first decade is found (solar
//! terms, direction by gender, start age) belongs to the implementor.

use bazi_time::CivilTime;

use crate::element::Gender;
use crate::sixty_cycle::SixtyCycle;

/// Produces the first decade luck period for a birth moment.
pub trait LuckSource {
    type Decade: DecadeCursor;

    /// `None` when the birth moment is outside the provider's range.
    fn first_decade(&self, birth: &CivilTime, gender: Gender) -> Option<Self::Decade>;
}

/// A decade luck period (da yun).
pub trait DecadeCursor: Sized {
    type Year: YearCursor;

    fn sixty_cycle(&self) -> SixtyCycle;
    fn start_age(&self) -> i32;
    fn end_age(&self) -> i32;
    fn start_year(&self) -> i32;
    fn end_year(&self) -> i32;

    /// First flow year of this decade.
    fn first_year(&self) -> Self::Year;

    /// The following decade, `None` once the provider runs out.
    fn next(&self) -> Option<Self>;
}

/// A single flow year inside a decade.
pub trait YearCursor: Sized {
    fn sixty_cycle(&self) -> SixtyCycle;

    /// Nominal age reached in this year.
    fn age(&self) -> i32;

    fn next(&self) -> Self;
}
