// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::{DeviceHandle, Error, InputSource};
use crate::constants::*;

use ::gilrs::{Axis, Button, GamepadId, Gilrs};
use uuid::Uuid;

/// Input source that reads connected gamepads through `gilrs`.
///
/// Devices are connected gamepads in the order `gilrs` enumerates them. The list is refreshed by
/// `pump()`, so indices stay stable for the duration of a tick. Handles are built from
/// `GamepadId` and survive renumbering.
#[derive(Debug, Default)]
pub struct NativeSource {
    gilrs: Option<Gilrs>,
    // Snapshot of connected gamepads, indexed by device index.
    devices: Vec<(GamepadId, String)>,
    open: Option<GamepadId>,
}

impl NativeSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn refresh(&mut self) {
        if let Some(gilrs) = self.gilrs.as_ref() {
            self.devices = gilrs
                .gamepads()
                .map(|(id, gamepad)| (id, gamepad.name().to_owned()))
                .collect();
        }
    }

    fn gamepad(&self, handle: DeviceHandle) -> Option<::gilrs::Gamepad<'_>> {
        match (self.gilrs.as_ref(), self.open) {
            (Some(gilrs), Some(id)) if usize::from(id) == handle.raw() => {
                gilrs.connected_gamepad(id)
            }
            _ => None,
        }
    }
}

impl InputSource for NativeSource {
    fn init(&mut self) -> Result<(), Error> {
        match Gilrs::new() {
            Ok(gilrs) => {
                self.gilrs = Some(gilrs);
                self.refresh();
                log::info!("Found {} gamepad(s)", self.devices.len());
                Ok(())
            }
            Err(::gilrs::Error::NotImplemented(_)) => Err(Error::NotSupported),
            Err(e) => Err(Error::Other(e.to_string())),
        }
    }

    fn device_count(&self) -> usize {
        self.devices.len()
    }

    fn device_name(&self, index: usize) -> Option<&str> {
        self.devices.get(index).map(|(_, name)| name.as_str())
    }

    fn device_uuid(&self, index: usize) -> Option<Uuid> {
        let (id, _) = self.devices.get(index)?;
        self.gilrs
            .as_ref()?
            .connected_gamepad(*id)
            .map(|gamepad| Uuid::from_bytes(gamepad.uuid()))
    }

    fn open(&mut self, index: usize) -> Result<DeviceHandle, Error> {
        let gilrs = self.gilrs.as_ref().ok_or(Error::NotSupported)?;
        let (id, _) = *self.devices.get(index).ok_or(Error::InvalidIndex(index))?;

        if gilrs.connected_gamepad(id).is_none() {
            return Err(Error::NotConnected(index));
        }

        self.open = Some(id);
        Ok(DeviceHandle::new(usize::from(id)))
    }

    fn device_index(&self, handle: DeviceHandle) -> Option<usize> {
        self.devices
            .iter()
            .position(|(id, _)| usize::from(*id) == handle.raw())
    }

    fn close(&mut self, handle: DeviceHandle) {
        if matches!(self.open, Some(id) if usize::from(id) == handle.raw()) {
            self.open = None;
        }
    }

    fn enable_events(&mut self, handle: DeviceHandle) {
        // gilrs always updates cached state from events, nothing to enable.
        log::debug!("Events enabled for device {}", handle.raw());
    }

    fn button(&self, handle: DeviceHandle, button: u8) -> bool {
        match (self.gamepad(handle), map_button(button)) {
            (Some(gamepad), Some(btn)) => gamepad.is_pressed(btn),
            _ => false,
        }
    }

    fn axis(&self, handle: DeviceHandle, axis: u8) -> i16 {
        let gamepad = match self.gamepad(handle) {
            Some(gamepad) => gamepad,
            None => return 0,
        };

        match axis {
            AXIS_MOVE_X => to_raw(gamepad.value(Axis::LeftStickX)),
            // gilrs Y axes point up, game controller Y axes point down.
            AXIS_MOVE_Y => to_raw(-gamepad.value(Axis::LeftStickY)),
            AXIS_LOOK_X => to_raw(gamepad.value(Axis::RightStickX)),
            AXIS_LOOK_Y => to_raw(-gamepad.value(Axis::RightStickY)),
            AXIS_LEFT_TRIGGER => trigger_value(&gamepad, Button::LeftTrigger2),
            AXIS_RIGHT_TRIGGER => trigger_value(&gamepad, Button::RightTrigger2),
            _ => 0,
        }
    }

    fn pump(&mut self) {
        let mut hotplug = false;
        if let Some(gilrs) = self.gilrs.as_mut() {
            while let Some(ev) = gilrs.next_event() {
                match ev.event {
                    ::gilrs::EventType::Connected | ::gilrs::EventType::Disconnected => {
                        hotplug = true
                    }
                    _ => (),
                }
            }
        }

        if hotplug {
            self.refresh();
            log::debug!("Gamepad list changed, {} connected", self.devices.len());
        }
    }
}

fn map_button(button: u8) -> Option<Button> {
    let btn = match button {
        BTN_A => Button::South,
        BTN_B => Button::East,
        BTN_X => Button::West,
        BTN_Y => Button::North,
        BTN_BACK => Button::Select,
        BTN_GUIDE => Button::Mode,
        BTN_START => Button::Start,
        BTN_LEFTSTICK => Button::LeftThumb,
        BTN_RIGHTSTICK => Button::RightThumb,
        BTN_LEFTSHOULDER => Button::LeftTrigger,
        BTN_RIGHTSHOULDER => Button::RightTrigger,
        BTN_DPAD_UP => Button::DPadUp,
        BTN_DPAD_DOWN => Button::DPadDown,
        BTN_DPAD_LEFT => Button::DPadLeft,
        BTN_DPAD_RIGHT => Button::DPadRight,
        _ => return None,
    };

    Some(btn)
}

fn trigger_value(gamepad: &::gilrs::Gamepad<'_>, btn: Button) -> i16 {
    gamepad
        .button_data(btn)
        .map(|data| to_raw(data.value()))
        .unwrap_or(0)
}

fn to_raw(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}
