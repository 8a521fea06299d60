use std::collections::BTreeMap;

use crate::models::{Country, CountrySection};

/// Partition countries into sections by the uppercased first character of
/// their name.
///
/// Section titles come out sorted; countries keep their input order within
/// a section. Every country lands in exactly one section.
pub fn group_by_initial(countries: &[Country]) -> Vec<CountrySection> {
    let mut grouped: BTreeMap<String, Vec<Country>> = BTreeMap::new();
    for country in countries {
        grouped
            .entry(country.initial())
            .or_default()
            .push(country.clone());
    }

    grouped
        .into_iter()
        .map(|(title, data)| CountrySection { title, data })
        .collect()
}
