// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Same-sign stacking across series.
//!
//! Positive and negative values stack independently: at each position there is one running
//! total for non-negative contributions (growing up from 0) and one for negative contributions
//! (growing down from 0).

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::consolidate::ConsolidatedSeries;

/// How points of different series are matched into one stack when no category applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackKey {
    /// The i-th point of every series shares a stack.
    #[default]
    Position,
    /// Points with equal numeric `x` share a stack.
    XValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Slot {
    Category(usize),
    Index(usize),
    X(u64),
}

fn slot(key: StackKey, category: Option<usize>, index: usize, x: f64) -> Slot {
    if let Some(c) = category {
        return Slot::Category(c);
    }
    match key {
        StackKey::Position => Slot::Index(index),
        // `+ 0.0` folds -0.0 into 0.0 so both land in the same stack.
        StackKey::XValue => Slot::X((x + 0.0).to_bits()),
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Totals {
    positive: f64,
    negative: f64,
}

/// Stacking result for a set of series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stack {
    /// Baseline of every point, `offsets[series][index]`.
    pub offsets: Vec<Vec<f64>>,
    /// Largest cumulative non-negative total over all positions (0 when there is none).
    pub max: f64,
    /// Smallest cumulative negative total over all positions (0 when there is none).
    pub min: f64,
}

/// Computes same-sign stack offsets and cumulative extremes.
///
/// Series are stacked in order. A point's baseline is the running total of the prior points
/// in its slot that share its sign, where zero counts as non-negative.
pub fn stack(datasets: &[ConsolidatedSeries], key: StackKey) -> Stack {
    let mut totals: HashMap<Slot, Totals> = HashMap::new();
    let mut offsets = Vec::with_capacity(datasets.len());
    for series in datasets {
        let mut row = Vec::with_capacity(series.data.len());
        for (i, d) in series.data.iter().enumerate() {
            let t = totals.entry(slot(key, d.category, i, d.x)).or_default();
            if d.y >= 0.0 {
                row.push(t.positive);
                t.positive += d.y;
            } else {
                row.push(t.negative);
                t.negative += d.y;
            }
        }
        offsets.push(row);
    }

    let max = totals.values().map(|t| t.positive).fold(0.0, f64::max);
    let min = totals.values().map(|t| t.negative).fold(0.0, f64::min);
    Stack { offsets, max, min }
}
