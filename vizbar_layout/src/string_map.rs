// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical string to ordinal mapping.

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::data::{CategoryBand, Datum, Value};
use crate::Axis;

/// A bijection from category strings to the ordinals `1..=len`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringMap {
    names: Vec<Option<String>>,
    ordinals: HashMap<String, usize>,
}

impl StringMap {
    fn from_names(names: Vec<Option<String>>) -> Self {
        let ordinals = names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| name.as_ref().map(|name| (name.clone(), i + 1)))
            .collect();
        Self { names, ordinals }
    }

    /// Returns the 1-based ordinal for `name`.
    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.ordinals.get(name).copied()
    }

    /// Returns the string for a 1-based ordinal.
    pub fn name(&self, ordinal: usize) -> Option<&str> {
        ordinal
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .and_then(|name| name.as_deref())
    }

    /// Number of ordinal slots.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates `(name, ordinal)` in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| name.as_deref().map(|name| (name, i + 1)))
    }
}

/// Builds the string map for `axis`.
///
/// Explicit categories win when at least one of them is non-numeric: their order is kept and
/// range bands keep their slot so ordinals stay aligned with category indices. A category
/// repeated later in the list maps to its first ordinal. Otherwise the
/// distinct strings found on `axis` in `series` are sorted and numbered from 1. Returns `None`
/// when the axis is purely numeric.
pub fn build_string_map(
    axis: Axis,
    categories: &[CategoryBand],
    series: &[&[Datum]],
) -> Option<StringMap> {
    if axis == Axis::X && categories.iter().any(|c| !c.is_numeric()) {
        let mut seen = BTreeSet::new();
        let names = categories
            .iter()
            .map(|band| match band {
                CategoryBand::Value(Value::Text(s)) => Some(s.clone()),
                CategoryBand::Value(Value::Number(n) | Value::Date(n)) => Some(format!("{n}")),
                // Ranges keep their slot so later ordinals match category indices.
                CategoryBand::Range(..) => None,
            })
            // A repeated name keeps its first ordinal; the repeat's slot stays empty.
            .map(|name| name.filter(|name| seen.insert(name.clone())))
            .collect();
        return Some(StringMap::from_names(names));
    }

    let strings: BTreeSet<&str> = series
        .iter()
        .flat_map(|points| points.iter())
        .filter_map(|d| match axis {
            Axis::X => d.x.as_ref(),
            Axis::Y => d.y.as_ref(),
        })
        .filter_map(Value::as_str)
        .collect();
    if strings.is_empty() {
        return None;
    }
    Some(StringMap::from_names(
        strings.into_iter().map(|s| Some(String::from(s))).collect(),
    ))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn data_strings_are_sorted_and_deduplicated() {
        let points = vec![
            Datum::new("rabbits", 1.0),
            Datum::new("cats", 2.0),
            Datum::new("dogs", 3.0),
            Datum::new("cats", 4.0),
        ];
        let map = build_string_map(Axis::X, &[], &[points.as_slice()]).expect("string axis");
        assert_eq!(map.len(), 3);
        assert_eq!(map.ordinal("cats"), Some(1));
        assert_eq!(map.ordinal("dogs"), Some(2));
        assert_eq!(map.ordinal("rabbits"), Some(3));
        assert_eq!(map.name(2), Some("dogs"));
    }

    #[test]
    fn explicit_categories_keep_their_order() {
        let categories: Vec<CategoryBand> = vec!["rabbits".into(), "cats".into(), "dogs".into()];
        let points = vec![Datum::new("cats", 2.0)];
        let map = build_string_map(Axis::X, &categories, &[points.as_slice()]).expect("string axis");
        assert_eq!(map.ordinal("rabbits"), Some(1));
        assert_eq!(map.ordinal("cats"), Some(2));
        assert_eq!(map.ordinal("dogs"), Some(3));
    }

    #[test]
    fn repeated_categories_keep_their_first_ordinal() {
        let categories: Vec<CategoryBand> = vec!["a".into(), "b".into(), "a".into()];
        let map = build_string_map(Axis::X, &categories, &[]).expect("string axis");
        assert_eq!(map.ordinal("a"), Some(1));
        assert_eq!(map.ordinal("b"), Some(2));
        assert_eq!(map.name(1), Some("a"));
        assert_eq!(map.name(3), None);
        let mapped: Vec<_> = map.iter().collect();
        assert_eq!(mapped, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn numeric_axes_have_no_map() {
        let points = vec![Datum::new(1.0, 2.0), Datum::new(3.0, 4.0)];
        assert!(build_string_map(Axis::X, &[], &[points.as_slice()]).is_none());
        assert!(build_string_map(Axis::Y, &[], &[points.as_slice()]).is_none());

        let bands: Vec<CategoryBand> = vec![(1.0, 3.0).into(), (4.0, 7.0).into()];
        assert!(build_string_map(Axis::X, &bands, &[points.as_slice()]).is_none());
    }

    #[test]
    fn categories_never_apply_to_the_y_axis() {
        let categories: Vec<CategoryBand> = vec!["a".into(), "b".into()];
        let points = vec![Datum::new(1.0, "low"), Datum::new(2.0, "high")];
        let map = build_string_map(Axis::Y, &categories, &[points.as_slice()]).expect("string axis");
        assert_eq!(map.ordinal("high"), Some(1));
        assert_eq!(map.ordinal("low"), Some(2));
    }
}
