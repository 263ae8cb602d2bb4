// Copyright 2017 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Alter raw axis values.
//!
//! Every axis read done by [`Mapper`](crate::Mapper) goes through the same steps: the virtual
//! axis is translated to a physical axis with [`source_axis()`], the raw value is passed through
//! [`DeadZone`] and finally inverted if requested.
//!
//! # Example
//!
//! ```
//! use padbind::ev::filter::{source_axis, DeadZone};
//!
//! let dz = DeadZone::new();
//! assert_eq!(dz.apply(5000), 0);
//! assert_eq!(dz.apply(-20000), -20000);
//!
//! // Look X is read from the move X stick when south-paw is enabled.
//! assert_eq!(source_axis(2, true), 0);
//! ```

use crate::constants::DEAD_ZONE;

/// Swaps move and look axis groups.
///
/// Relies on axis order: move X (0), move Y (1), look X (2), look Y (3). Flipping bit 1 maps move
/// axes to look axes and back. Triggers (4 and 5) become 6 and 7, which no device reports, so
/// triggers read as zero while south-paw is enabled.
pub fn southpaw_swap(axis: u8) -> u8 {
    axis ^ 2
}

/// Returns physical axis that is read for virtual `axis`.
pub fn source_axis(axis: u8, southpaw: bool) -> u8 {
    if southpaw {
        southpaw_swap(axis)
    } else {
        axis
    }
}

/// Zero raw axis values close to the rest position.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DeadZone {
    pub threshold: i32,
}

impl DeadZone {
    /// Creates new `DeadZone` filter with threshold set to one third of the axis range.
    pub fn new() -> Self {
        DeadZone {
            threshold: DEAD_ZONE,
        }
    }

    /// Returns 0 if magnitude of `value` is strictly lower than threshold, otherwise `value`.
    pub fn apply(&self, value: i32) -> i32 {
        if value < self.threshold && value > -self.threshold {
            0
        } else {
            value
        }
    }

    /// Returns `true` if `value` is at or above the threshold in the positive direction.
    pub fn reached(&self, value: i32) -> bool {
        value >= self.threshold
    }

    /// Returns `true` if magnitude of `value` is strictly greater than `factor` times the
    /// threshold.
    pub fn exceeded_by(&self, value: i32, factor: i32) -> bool {
        let limit = self.threshold * factor;
        value > limit || value < -limit
    }
}

impl Default for DeadZone {
    fn default() -> Self {
        Self::new()
    }
}

/// Negates `value` if `invert` is set.
pub fn invert(value: i32, invert: bool) -> i32 {
    if invert {
        -value
    } else {
        value
    }
}
