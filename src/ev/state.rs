// Copyright 2017 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::constants::PBTN_COUNT;
use crate::ev::Code;

/// Snapshot of pressed virtual buttons, one bit per code.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct ButtonMask(u32);

impl ButtonMask {
    /// Creates mask with no buttons pressed.
    pub fn new() -> Self {
        ButtonMask(0)
    }

    /// Creates mask from raw bits. Bits above `PBTN_COUNT` are discarded.
    pub fn from_bits(bits: u32) -> Self {
        ButtonMask(bits & Self::ALL_BITS)
    }

    const ALL_BITS: u32 = (1 << PBTN_COUNT) - 1;

    /// Returns raw bits.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Marks `code` as pressed. Codes outside of the virtual button range are ignored.
    pub fn set(&mut self, code: Code) {
        if code < PBTN_COUNT {
            self.0 |= 1 << code;
        }
    }

    /// Returns `true` if `code` is pressed.
    pub fn is_set(&self, code: Code) -> bool {
        code < PBTN_COUNT && (self.0 >> code) & 1 != 0
    }

    /// Returns `true` if no button is pressed.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Buttons pressed in `self` that were not pressed in `previous`.
    pub fn pressed_since(&self, previous: ButtonMask) -> ButtonMask {
        ButtonMask(self.0 & !previous.0)
    }

    /// Buttons pressed in `previous` that are no longer pressed in `self`.
    pub fn released_since(&self, previous: ButtonMask) -> ButtonMask {
        ButtonMask(previous.0 & !self.0)
    }

    /// Iterate over pressed codes in ascending order.
    pub fn iter(&self) -> CodeIter {
        CodeIter {
            bits: self.0,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a ButtonMask {
    type Item = Code;
    type IntoIter = CodeIter;

    fn into_iter(self) -> CodeIter {
        self.iter()
    }
}

/// Iterator over codes set in `ButtonMask`.
pub struct CodeIter {
    bits: u32,
    next: u8,
}

impl Iterator for CodeIter {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        while self.next < PBTN_COUNT {
            let code = self.next;
            self.next += 1;
            if (self.bits >> code) & 1 != 0 {
                return Some(code);
            }
        }

        None
    }
}

/// Press and release transitions between two consecutive polls.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct ButtonEdges {
    pub pressed: ButtonMask,
    pub released: ButtonMask,
}

impl ButtonEdges {
    /// Computes transitions from `previous` to `current`.
    pub fn between(previous: ButtonMask, current: ButtonMask) -> Self {
        ButtonEdges {
            pressed: current.pressed_since(previous),
            released: current.released_since(previous),
        }
    }

    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.released.is_empty()
    }
}
