// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for layout computation.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

use crate::Axis;

/// Errors returned by [`compute_layout`](crate::compute_layout) and its stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No domain could be resolved for an axis.
    #[error("no domain for the {axis} axis: {reason}")]
    Configuration {
        /// The axis without a domain.
        axis: Axis,
        /// What was missing.
        reason: String,
    },

    /// A data point cannot be laid out.
    #[error("series {series}, point {index}: {reason}")]
    DataShape {
        /// Series index.
        series: usize,
        /// Point index within the series.
        index: usize,
        /// What is wrong with the point.
        reason: String,
    },
}

impl LayoutError {
    pub(crate) fn data_shape(series: usize, index: usize, reason: impl Into<String>) -> Self {
        Self::DataShape {
            series,
            index,
            reason: reason.into(),
        }
    }
}
