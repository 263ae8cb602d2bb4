// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Virtual buttons, events and related functionality.

pub mod filter;
pub mod state;

use crate::constants::*;

pub use self::state::{ButtonEdges, ButtonMask};

/// Virtual button code, `0..PBTN_COUNT`.
pub type Code = u8;

/// Event generated by [`Mapper::update()`](crate::Mapper::update).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Virtual button changed state to pressed.
    ButtonPressed(Code),
    /// Virtual button changed state to released.
    ButtonReleased(Code),
    /// At least one of the movement axes is outside of the dead zone.
    Movement(AxisQuad),
}

/// Movement and look axes read during one tick.
///
/// Values have the range of a raw axis, each already passed through the dead zone and inverted
/// if requested.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisQuad {
    /// Look X axis.
    pub turn: i32,
    /// Move Y axis.
    pub forward: i32,
    /// Move X axis.
    pub strafe: i32,
    /// Look Y axis.
    pub look: i32,
}

impl AxisQuad {
    /// Returns `true` if all four values are zero.
    pub fn is_zero(&self) -> bool {
        self.turn == 0 && self.forward == 0 && self.strafe == 0 && self.look == 0
    }
}

/// Result of [`Mapper::detect_pressed_button_or_axis()`](crate::Mapper::detect_pressed_button_or_axis).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Detected {
    /// Lowest virtual button that is currently pressed.
    Button(Code),
    /// No button is pressed, but some axis is pushed well past the dead zone. Which axis is not
    /// reported.
    AxisActivity,
}

/// Where the state of a virtual button comes from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ButtonSource {
    /// Physical controller button with given index.
    Physical(u8),
    /// One side of a movement or look axis. `sign` is `1` or `-1`.
    AxisDirection { axis: u8, sign: i32 },
    /// Trigger axis, which only has positive values.
    Trigger(u8),
}

impl ButtonSource {
    /// Returns source of virtual button `code` or `None` if `code` is not a valid virtual button.
    pub fn of(code: Code) -> Option<Self> {
        match code {
            c if c < BTN_COUNT => Some(ButtonSource::Physical(c)),
            c if c <= PBTN_LOOK_RIGHT => {
                let offset = c - PBTN_MOVE_UP;
                Some(ButtonSource::AxisDirection {
                    axis: offset / 2,
                    sign: 1 - i32::from(offset % 2) * 2,
                })
            }
            c if c < PBTN_COUNT => Some(ButtonSource::Trigger(
                c - PBTN_LEFT_TRIGGER + AXIS_LEFT_TRIGGER,
            )),
            _ => None,
        }
    }
}

/// Returns `true` if `code` is one of the axis direction pseudo-buttons.
pub fn is_axis_button(code: Code) -> bool {
    (PBTN_MOVE_UP..=PBTN_LOOK_RIGHT).contains(&code)
}

/// Returns `true` if `code` is a movement axis direction.
pub fn is_move_axis_button(code: Code) -> bool {
    (PBTN_MOVE_UP..=PBTN_MOVE_RIGHT).contains(&code)
}

/// Returns `true` if `code` is a look axis direction.
pub fn is_look_axis_button(code: Code) -> bool {
    (PBTN_LOOK_UP..=PBTN_LOOK_RIGHT).contains(&code)
}
