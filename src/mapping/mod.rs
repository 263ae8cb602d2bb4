// Copyright 2017 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Known controller models, their button and axis labels and binding profiles.

mod catalog;

use crate::constants::{BTN_COUNT, UNBOUND};
use crate::vars::ConfigVars;

use std::borrow::Cow;
use std::ops::{Index, Range};

/// Number of variables set by a profile.
pub const PROFILE_LEN: usize = 44;

/// Engine variables covered by a profile, in profile slot order.
pub static PROFILE_VARS: [&str; PROFILE_LEN] = [
    // axes
    "joystick_y_axis",
    "joystick_x_axis",
    "joystick_strafe_axis",
    "joystick_look_axis",
    // inversion
    "joystick_y_invert",
    "joystick_x_invert",
    "joystick_strafe_invert",
    "joystick_look_invert",
    // automap
    "joybmap_toggle",
    "joybmap_north",
    "joybmap_south",
    "joybmap_east",
    "joybmap_west",
    "joybmap_zoomin",
    "joybmap_zoomout",
    "joybmap_follow",
    "joybmap_mark",
    "joybmap_clearmark",
    // menus
    "joyb_menu_activate",
    "joyb_menu_up",
    "joyb_menu_down",
    "joyb_menu_left",
    "joyb_menu_right",
    "joyb_menu_back",
    "joyb_menu_forward",
    "joyb_menu_confirm",
    "joyb_menu_abort",
    // gameplay
    "joyb_strafeleft",
    "joyb_straferight",
    "joyb_strafe",
    "joyb_fire",
    "joyb_use",
    "joyb_speed",
    "joyb_jump",
    "joyb_centerview",
    "joyb_prevweapon",
    "joyb_nextweapon",
    "joyb_invleft",
    "joyb_invright",
    "joyb_invuse",
    "joyb_invdrop",
    "joyb_invpop",
    "joyb_mission",
    "joyb_invkey",
];

/// Profile slots holding inversion flags. They are reset to `0` instead of `-1`.
pub const INVERT_SLOTS: Range<usize> = 4..8;

/// Complete set of gamepad bindings for one controller model.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Profile(pub [i32; PROFILE_LEN]);

impl Profile {
    pub fn values(&self) -> &[i32; PROFILE_LEN] {
        &self.0
    }

    /// Iterate over `(variable, value)` pairs in slot order.
    pub fn bindings(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        PROFILE_VARS.iter().cloned().zip(self.0.iter().cloned())
    }
}

impl Index<usize> for Profile {
    type Output = i32;

    fn index(&self, idx: usize) -> &i32 {
        &self.0[idx]
    }
}

/// Resets every profile variable and then writes all values of `profile`.
///
/// This is a full overwrite, previous user bindings are lost.
pub fn apply_profile<V: ConfigVars + ?Sized>(profile: &Profile, vars: &mut V) {
    clear_profile_vars(vars);
    for (name, value) in profile.bindings() {
        vars.set_int(name, value);
    }
}

/// Sets inversion flags to `0` and all other profile variables to `-1`.
pub fn clear_profile_vars<V: ConfigVars + ?Sized>(vars: &mut V) {
    for (i, name) in PROFILE_VARS.iter().enumerate() {
        if INVERT_SLOTS.contains(&i) {
            vars.set_int(name, 0);
        } else {
            vars.set_int(name, UNBOUND);
        }
    }
}

/// Known controller model.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PadEntry {
    /// Matched as substring of the device name.
    pub name: &'static str,
    pub buttons: &'static [&'static str],
    pub axes: &'static [&'static str],
    pub profile: Option<&'static Profile>,
}

impl PadEntry {
    pub const fn new(
        name: &'static str,
        buttons: &'static [&'static str],
        axes: &'static [&'static str],
        profile: Option<&'static Profile>,
    ) -> Self {
        PadEntry {
            name,
            buttons,
            axes,
            profile,
        }
    }

    /// Returns `true` if `device_name` contains name of this entry. Comparison is case sensitive.
    pub fn matches(&self, device_name: &str) -> bool {
        device_name.contains(self.name)
    }

    pub fn button_label(&self, code: i32) -> Option<&'static str> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| self.buttons.get(idx).cloned())
    }

    pub fn axis_label(&self, code: i32) -> Option<&'static str> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| self.axes.get(idx).cloned())
    }
}

/// Platform whose controller tables are used.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Platform {
    Windows,
    Linux,
    Other,
}

impl Platform {
    /// Platform this crate was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }
}

/// Ordered list of known controllers.
#[derive(Clone, Debug)]
pub struct Catalog {
    pads: Cow<'static, [PadEntry]>,
}

impl Catalog {
    /// Creates catalog from custom entries.
    pub fn new(pads: Vec<PadEntry>) -> Self {
        Catalog {
            pads: Cow::Owned(pads),
        }
    }

    /// Built-in catalog for `platform`.
    pub fn for_platform(platform: Platform) -> Self {
        let pads = match platform {
            Platform::Windows => catalog::windows::PADS,
            Platform::Linux => catalog::linux::PADS,
            Platform::Other => catalog::other::PADS,
        };

        Catalog {
            pads: Cow::Borrowed(pads),
        }
    }

    pub fn entries(&self) -> &[PadEntry] {
        &self.pads
    }

    /// First entry that matches `device_name`.
    pub fn find(&self, device_name: &str) -> Option<&PadEntry> {
        self.pads.iter().find(|pad| pad.matches(device_name))
    }

    /// Profile of the first entry that matches `device_name`. If that entry has no profile,
    /// later entries are not considered.
    pub fn profile_for(&self, device_name: &str) -> Option<&'static Profile> {
        self.find(device_name).and_then(|pad| pad.profile)
    }

    /// Display name of virtual button or raw binding `code` on device `device_name`.
    pub fn button_name(&self, device_name: Option<&str>, code: i32) -> Cow<'static, str> {
        if code == UNBOUND {
            return Cow::Borrowed("None");
        }

        if let Some(label) = device_name.and_then(|name| {
            self.matching(name)
                .find_map(|pad| pad.button_label(code))
        }) {
            return Cow::Borrowed(label);
        }

        match generic_button_name(code) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(code.to_string()),
        }
    }

    /// Display name of axis `code` on device `device_name`.
    pub fn axis_name(&self, device_name: Option<&str>, code: i32) -> Cow<'static, str> {
        if code == UNBOUND {
            return Cow::Borrowed("None");
        }

        match device_name.and_then(|name| self.matching(name).find_map(|pad| pad.axis_label(code)))
        {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(code.to_string()),
        }
    }

    fn matching<'a>(&'a self, device_name: &'a str) -> impl Iterator<Item = &'a PadEntry> + 'a {
        self.pads.iter().filter(move |pad| pad.matches(device_name))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::for_platform(Platform::current())
    }
}

fn generic_button_name(code: i32) -> Option<&'static str> {
    const AXIS_UP: [&str; 5] = ["A0+", "A1+", "A2+", "A3+", "A4+"];
    const AXIS_DOWN: [&str; 5] = ["A0-", "A1-", "A2-", "A3-", "A4-"];
    const HAT: [&str; 4] = ["HAT UP", "HAT RIGHT", "HAT DOWN", "HAT LEFT"];
    const AXIS6: [&str; 2] = ["A6+", "A6-"];

    let offset = usize::try_from(code.checked_sub(i32::from(BTN_COUNT))?).ok()?;
    match offset {
        0..=4 => Some(AXIS_UP[offset]),
        5..=9 => Some(AXIS_DOWN[offset - 5]),
        10..=13 => Some(HAT[offset - 10]),
        14..=15 => Some(AXIS6[offset - 14]),
        _ => None,
    }
}
