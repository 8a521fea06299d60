//! Sectioned, filterable countries list.
//!
//! - [`Segment`] - the four alphabetical quick-navigation ranges
//! - [`CountryFilter`] - the single active criterion (search, segment, letter)
//! - [`group_by_initial`] - partition a list into [`CountrySection`]s
//!
//! [`CountrySection`]: crate::models::CountrySection

mod filter;
mod grouping;
mod segment;

pub use filter::{filter_by_letter, filter_by_segment, search, CountryFilter};
pub use grouping::group_by_initial;
pub use segment::Segment;

use crate::models::{Country, CountrySection};

/// Apply `filter` and section the result.
pub fn filtered_sections(
    countries: &[Country],
    filter: &CountryFilter,
) -> (Vec<Country>, Vec<CountrySection>) {
    let filtered = filter.apply(countries);
    let sections = group_by_initial(&filtered);
    (filtered, sections)
}
