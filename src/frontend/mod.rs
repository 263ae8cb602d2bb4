// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Gamepad menu logic: device selection, profiles and bind sessions.
//!
//! Nothing here draws anything. Hosts render menus from [`menu`] tables and
//! [`GamepadMenus::device_items()`], and play sounds based on returned values.

mod bind;
pub mod menu;

pub use self::bind::{BindKind, BindOutcome, BindSession, IGNORE_LIMIT};

use self::menu::{ItemKind, MenuItem, APPLY_PROFILE_ITEM, GAMEPAD};
use crate::mapper::Mapper;
use crate::mapping::Profile;
use crate::platform::InputSource;
use crate::vars::ConfigVars;

/// Maximal number of devices listed in device menu.
pub const MAX_DEVICE_ITEMS: usize = 15;

/// Entry of the device selection menu.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DeviceItem {
    pub label: String,
    /// `"selgamepad"` for devices, `"back"` for the placeholder item.
    pub verb: &'static str,
    /// Device index, `None` for the placeholder item.
    pub index: Option<usize>,
}

/// State of gamepad menus.
#[derive(Clone, Debug, Default)]
pub struct GamepadMenus {
    devices: Vec<DeviceItem>,
    cursor: usize,
    profile: Option<&'static Profile>,
}

impl GamepadMenus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of the device menu, as of the last rebuild.
    pub fn device_items(&self) -> &[DeviceItem] {
        &self.devices
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves device menu cursor. Positions past the last item are ignored.
    pub fn set_cursor(&mut self, cursor: usize) {
        if cursor < self.devices.len() {
            self.cursor = cursor;
        }
    }

    /// Text shown under the device menu.
    pub fn current_device_label<S: InputSource>(&self, mapper: &Mapper<S>) -> String {
        format!(
            "Current Device: {}",
            mapper.active_device_name().unwrap_or("None")
        )
    }

    /// Lists available devices, at most `MAX_DEVICE_ITEMS`.
    pub fn rebuild_device_menu<S: InputSource>(&mut self, mapper: &Mapper<S>) {
        let count = mapper.device_count();

        self.devices = if count == 0 {
            vec![DeviceItem {
                label: "No gamepads available.".to_owned(),
                verb: "back",
                index: None,
            }]
        } else {
            (0..count.min(MAX_DEVICE_ITEMS))
                .map(|idx| DeviceItem {
                    label: match mapper.device_name(idx) {
                        Some(name) if !name.is_empty() => name.to_owned(),
                        _ => "Unknown Device".to_owned(),
                    },
                    verb: "selgamepad",
                    index: Some(idx),
                })
                .collect()
        };

        if self.cursor >= self.devices.len() {
            self.cursor = 0;
        }
    }

    /// Rebuilds device menu. Returns `false` if gamepads are not allowed and the menu should
    /// not be opened.
    pub fn open_device_menu<S: InputSource>(&mut self, mapper: &Mapper<S>) -> bool {
        if !mapper.is_allowed() {
            return false;
        }

        self.rebuild_device_menu(mapper);
        true
    }

    /// Activates device under the cursor. Returns `false` if gamepads are not allowed or the
    /// cursor is on the placeholder item.
    pub fn select_device<S: InputSource>(&mut self, mapper: &mut Mapper<S>) -> bool {
        if !mapper.is_allowed() {
            return false;
        }

        let index = match self.devices.get(self.cursor).and_then(|item| item.index) {
            Some(index) => index,
            None => return false,
        };

        mapper.activate(index as i32);
        self.refresh_profile(mapper);
        true
    }

    /// Looks up profile of the active device.
    pub fn refresh_profile<S: InputSource>(&mut self, mapper: &Mapper<S>) {
        self.profile = mapper.profile_for_active_device();
    }

    /// Returns `true` if "Apply Profile" is available.
    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    /// Applies profile found by the last `refresh_profile()`. Returns `false` if there is none.
    pub fn apply_profile<S, V>(&self, mapper: &Mapper<S>, vars: &mut V) -> bool
    where
        S: InputSource,
        V: ConfigVars + ?Sized,
    {
        match self.profile {
            Some(profile) => {
                mapper.apply_profile(profile, vars);
                true
            }
            None => false,
        }
    }

    /// Items of the main gamepad menu. "Apply Profile" is a gap when no profile is available.
    pub fn gamepad_items(&self) -> Vec<MenuItem> {
        let mut items = GAMEPAD.items.to_vec();
        if !self.has_profile() {
            items[APPLY_PROFILE_ITEM].kind = ItemKind::Gap;
        }
        items
    }
}
