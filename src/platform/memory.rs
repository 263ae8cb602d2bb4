// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::{DeviceHandle, Error, InputSource};
use crate::constants::{AXIS_COUNT, BTN_COUNT};

use uuid::Uuid;
use vec_map::VecMap;

/// Device kept by [`MemorySource`].
#[derive(Clone, Debug, Default)]
pub struct MemoryDevice {
    pub name: Option<String>,
    pub uuid: Option<Uuid>,
    /// When `false`, opening this device fails with `Error::NotConnected`.
    pub connected: bool,
    buttons: u32,
    axes: [i16; AXIS_COUNT as usize],
}

impl MemoryDevice {
    /// Creates connected device with all buttons released and all axes at rest.
    pub fn new(name: &str) -> Self {
        MemoryDevice {
            name: Some(name.to_owned()),
            uuid: None,
            connected: true,
            buttons: 0,
            axes: [0; AXIS_COUNT as usize],
        }
    }

    /// Creates connected device that does not report a name.
    pub fn unnamed() -> Self {
        MemoryDevice {
            name: None,
            ..Self::new("")
        }
    }

    pub fn set_button(&mut self, button: u8, pressed: bool) {
        if button < BTN_COUNT {
            if pressed {
                self.buttons |= 1 << button;
            } else {
                self.buttons &= !(1 << button);
            }
        }
    }

    pub fn set_axis(&mut self, axis: u8, value: i16) {
        if let Some(val) = self.axes.get_mut(axis as usize) {
            *val = value;
        }
    }

    /// Releases all buttons and centers all axes.
    pub fn reset(&mut self) {
        self.buttons = 0;
        self.axes = [0; AXIS_COUNT as usize];
    }

    fn is_pressed(&self, button: u8) -> bool {
        button < BTN_COUNT && (self.buttons >> button) & 1 != 0
    }

    fn value(&self, axis: u8) -> i16 {
        self.axes.get(axis as usize).cloned().unwrap_or(0)
    }
}

/// Input source that stores device state in memory.
///
/// State is changed directly by the owner, which makes it useful for tests, input replays and
/// hosts that receive controller state from somewhere else. It also counts how many times
/// devices were opened and closed.
///
/// ```
/// use padbind::platform::{InputSource, MemorySource};
///
/// let mut source = MemorySource::with_devices(&["XBOX 360 For Windows"]);
/// source.init().unwrap();
/// let handle = source.open(0).unwrap();
///
/// source.device_mut(0).unwrap().set_axis(1, -20000);
/// assert_eq!(source.axis(handle, 1), -20000);
///
/// source.close(handle);
/// assert_eq!(source.open_devices(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    devices: Vec<MemoryDevice>,
    // Indexed by device index, value is `true` when events are enabled.
    open: VecMap<bool>,
    fail_init: bool,
    initialized: bool,
    opens: usize,
    closes: usize,
    pumps: usize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates source with one connected device per name.
    pub fn with_devices(names: &[&str]) -> Self {
        let mut source = Self::new();
        for name in names {
            source.push(MemoryDevice::new(name));
        }
        source
    }

    /// Creates source whose initialization fails.
    pub fn unavailable() -> Self {
        MemorySource {
            fail_init: true,
            ..Self::default()
        }
    }

    /// Adds new device and returns its index.
    pub fn push(&mut self, device: MemoryDevice) -> usize {
        self.devices.push(device);
        self.devices.len() - 1
    }

    pub fn device(&self, index: usize) -> Option<&MemoryDevice> {
        self.devices.get(index)
    }

    pub fn device_mut(&mut self, index: usize) -> Option<&mut MemoryDevice> {
        self.devices.get_mut(index)
    }

    /// Returns `true` if `init()` was called and succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of successful `open()` calls.
    pub fn opens(&self) -> usize {
        self.opens
    }

    /// Number of `close()` calls that released an open device.
    pub fn closes(&self) -> usize {
        self.closes
    }

    /// Number of devices currently open.
    pub fn open_devices(&self) -> usize {
        self.open.len()
    }

    /// Number of `pump()` calls.
    pub fn pumps(&self) -> usize {
        self.pumps
    }

    /// Returns `true` if device at `index` is open and has events enabled.
    pub fn events_enabled(&self, index: usize) -> bool {
        self.open.get(index).cloned().unwrap_or(false)
    }

    fn opened(&self, handle: DeviceHandle) -> Option<&MemoryDevice> {
        if self.open.contains_key(handle.raw()) {
            self.devices.get(handle.raw())
        } else {
            None
        }
    }
}

impl InputSource for MemorySource {
    fn init(&mut self) -> Result<(), Error> {
        if self.fail_init {
            return Err(Error::NotSupported);
        }

        self.initialized = true;
        Ok(())
    }

    fn device_count(&self) -> usize {
        self.devices.len()
    }

    fn device_name(&self, index: usize) -> Option<&str> {
        self.devices.get(index).and_then(|dev| dev.name.as_deref())
    }

    fn device_uuid(&self, index: usize) -> Option<Uuid> {
        self.devices.get(index).and_then(|dev| dev.uuid)
    }

    fn open(&mut self, index: usize) -> Result<DeviceHandle, Error> {
        match self.devices.get(index) {
            None => Err(Error::InvalidIndex(index)),
            Some(dev) if !dev.connected => Err(Error::NotConnected(index)),
            Some(_) => {
                self.open.insert(index, false);
                self.opens += 1;
                Ok(DeviceHandle::new(index))
            }
        }
    }

    fn close(&mut self, handle: DeviceHandle) {
        if self.open.remove(handle.raw()).is_some() {
            self.closes += 1;
        }
    }

    fn enable_events(&mut self, handle: DeviceHandle) {
        if let Some(enabled) = self.open.get_mut(handle.raw()) {
            *enabled = true;
        }
    }

    fn button(&self, handle: DeviceHandle, button: u8) -> bool {
        self.opened(handle)
            .map(|dev| dev.is_pressed(button))
            .unwrap_or(false)
    }

    fn axis(&self, handle: DeviceHandle, axis: u8) -> i16 {
        self.opened(handle).map(|dev| dev.value(axis)).unwrap_or(0)
    }

    fn pump(&mut self) {
        self.pumps += 1;
    }
}
