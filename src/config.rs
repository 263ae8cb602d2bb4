// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::vars::ConfigVars;

use std::str::FromStr;

pub const MIN_SENSITIVITY: f64 = 0.001;
pub const MIN_THRESHOLD: f64 = 1.0;

/// Controller policy values.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct Settings {
    /// When `false`, controllers are never opened.
    pub use_joystick: bool,
    /// Index of the preferred device, `-1` for "first available".
    pub joystick_index: i32,
    /// Swap move and look sticks.
    pub southpaw: bool,
    pub x_invert: bool,
    pub y_invert: bool,
    pub strafe_invert: bool,
    pub look_invert: bool,
    pub sensitivity: f64,
    pub threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            use_joystick: true,
            joystick_index: -1,
            southpaw: false,
            x_invert: false,
            y_invert: false,
            strafe_invert: false,
            look_invert: false,
            sensitivity: 0.005,
            threshold: 10.0,
        }
    }
}

const USE_JOYSTICK: &str = "use_joystick";
const JOYSTICK_INDEX: &str = "joystick_index";
const SOUTHPAW: &str = "joystick_southpaw";
const LOOK_INVERT: &str = "joystick_invert";
const SENSITIVITY: &str = "joystick_sensitivity";
const THRESHOLD: &str = "joystick_threshold";

impl Settings {
    /// Raises `sensitivity` and `threshold` to their minimal values.
    pub fn clamp(&mut self) {
        if self.sensitivity < MIN_SENSITIVITY {
            self.sensitivity = MIN_SENSITIVITY;
        }
        if self.threshold < MIN_THRESHOLD {
            self.threshold = MIN_THRESHOLD;
        }
    }

    /// Reads settings stored in engine variables. Missing or unparsable variables leave the
    /// current value unchanged.
    pub fn bind_from<V: ConfigVars + ?Sized>(&mut self, vars: &V) {
        read_bool(vars, USE_JOYSTICK, &mut self.use_joystick);
        read(vars, JOYSTICK_INDEX, &mut self.joystick_index);
        read_bool(vars, SOUTHPAW, &mut self.southpaw);
        read_bool(vars, LOOK_INVERT, &mut self.look_invert);
        read(vars, SENSITIVITY, &mut self.sensitivity);
        read(vars, THRESHOLD, &mut self.threshold);
    }

    /// Writes settings to engine variables.
    pub fn store<V: ConfigVars + ?Sized>(&self, vars: &mut V) {
        vars.set_int(USE_JOYSTICK, self.use_joystick as i32);
        vars.set_int(JOYSTICK_INDEX, self.joystick_index);
        vars.set_int(SOUTHPAW, self.southpaw as i32);
        vars.set_int(LOOK_INVERT, self.look_invert as i32);
        vars.set(SENSITIVITY, &self.sensitivity.to_string());
        vars.set(THRESHOLD, &self.threshold.to_string());
    }
}

fn read<V: ConfigVars + ?Sized, T: FromStr>(vars: &V, name: &str, out: &mut T) {
    if let Some(val) = vars.get(name) {
        match val.trim().parse() {
            Ok(v) => *out = v,
            Err(_) => log::warn!("Ignoring invalid value of {}: {:?}", name, val),
        }
    }
}

fn read_bool<V: ConfigVars + ?Sized>(vars: &V, name: &str, out: &mut bool) {
    let mut val = *out as i32;
    read(vars, name, &mut val);
    *out = val != 0;
}
