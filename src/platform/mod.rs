// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Sources of raw controller state.
//!
//! Each backend has to provide:
//!
//! * device enumeration (count and names, in a stable index order),
//! * opening and closing a device by index,
//! * raw button state and raw signed axis values of an opened device, indexed in game
//!   controller order (see [`constants`](crate::constants)).
//!
//! Backends available in this crate:
//!
//! * [`NullSource`] for builds without controller support,
//! * [`MemorySource`] which keeps state set by the caller (tests, replays, injected input),
//! * `NativeSource` (feature `native`) which reads real gamepads through `gilrs`.

mod default;
mod memory;
#[cfg(feature = "native")]
mod native;

pub use self::default::NullSource;
pub use self::memory::{MemoryDevice, MemorySource};
#[cfg(feature = "native")]
pub use self::native::NativeSource;

use std::error;
use std::fmt::{self, Display, Formatter};
use uuid::Uuid;

/// Opaque reference to an opened device.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct DeviceHandle(usize);

impl DeviceHandle {
    /// Creates handle from backend specific value.
    pub fn new(raw: usize) -> Self {
        DeviceHandle(raw)
    }

    /// Returns backend specific value.
    pub fn raw(self) -> usize {
        self.0
    }
}

/// Raw controller API consumed by [`Mapper`](crate::Mapper).
pub trait InputSource {
    /// Initializes the subsystem. Called once, before any other function.
    fn init(&mut self) -> Result<(), Error>;

    /// Number of devices available for opening.
    fn device_count(&self) -> usize;

    /// Name of device at `index`, `None` if index is out of range or device has no name.
    fn device_name(&self, index: usize) -> Option<&str>;

    /// UUID of device at `index`, if backend knows it.
    fn device_uuid(&self, _index: usize) -> Option<Uuid> {
        None
    }

    /// Opens device at `index`.
    fn open(&mut self, index: usize) -> Result<DeviceHandle, Error>;

    /// Current index of opened device, `None` if it is gone. Backends that renumber devices on
    /// hotplug must keep handles valid and report the new index here.
    fn device_index(&self, handle: DeviceHandle) -> Option<usize> {
        Some(handle.raw())
    }

    /// Releases previously opened device.
    fn close(&mut self, handle: DeviceHandle);

    /// Enables event driven state updates for opened device.
    fn enable_events(&mut self, handle: DeviceHandle);

    /// Returns `true` if physical `button` is pressed. Unknown buttons are not pressed.
    fn button(&self, handle: DeviceHandle, button: u8) -> bool;

    /// Returns raw value of `axis`. Unknown axes return 0.
    fn axis(&self, handle: DeviceHandle, axis: u8) -> i16;

    /// Processes pending platform events. Called once per tick.
    fn pump(&mut self) {}
}

impl<S: InputSource + ?Sized> InputSource for Box<S> {
    fn init(&mut self) -> Result<(), Error> {
        (**self).init()
    }

    fn device_count(&self) -> usize {
        (**self).device_count()
    }

    fn device_name(&self, index: usize) -> Option<&str> {
        (**self).device_name(index)
    }

    fn device_uuid(&self, index: usize) -> Option<Uuid> {
        (**self).device_uuid(index)
    }

    fn open(&mut self, index: usize) -> Result<DeviceHandle, Error> {
        (**self).open(index)
    }

    fn device_index(&self, handle: DeviceHandle) -> Option<usize> {
        (**self).device_index(handle)
    }

    fn close(&mut self, handle: DeviceHandle) {
        (**self).close(handle)
    }

    fn enable_events(&mut self, handle: DeviceHandle) {
        (**self).enable_events(handle)
    }

    fn button(&self, handle: DeviceHandle, button: u8) -> bool {
        (**self).button(handle, button)
    }

    fn axis(&self, handle: DeviceHandle, axis: u8) -> i16 {
        (**self).axis(handle, axis)
    }

    fn pump(&mut self) {
        (**self).pump()
    }
}

/// Tells the mapper to ignore controller input for the current tick, for example while a
/// system overlay is open.
pub trait InputSuppressor {
    fn should_suppress(&self) -> bool;
}

/// Never suppresses input.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSuppressor;

impl InputSuppressor for NoSuppressor {
    fn should_suppress(&self) -> bool {
        false
    }
}

impl<F: Fn() -> bool> InputSuppressor for F {
    fn should_suppress(&self) -> bool {
        self()
    }
}

/// Error reported by input source.
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Controller support is not available on this platform or in this build.
    NotSupported,
    /// There is no device with given index.
    InvalidIndex(usize),
    /// Device exists, but can not be opened (disconnected or busy).
    NotConnected(usize),
    /// Platform specific error.
    Other(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::NotSupported => f.write_str("controller support is not available"),
            Error::InvalidIndex(index) => write!(f, "there is no device with index {}", index),
            Error::NotConnected(index) => write!(f, "device {} can not be opened", index),
            Error::Other(msg) => write!(f, "input subsystem error: {}", msg),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::InvalidIndex(3).to_string(),
            "there is no device with index 3"
        );
        assert_eq!(
            Error::Other("boom".to_owned()).to_string(),
            "input subsystem error: boom"
        );
    }

    #[test]
    fn closure_suppressor() {
        let on = || true;
        assert!(on.should_suppress());
        assert!(!NoSuppressor.should_suppress());
    }

    #[test]
    fn boxed_source_forwards() {
        let mut source: Box<dyn InputSource> = Box::new(MemorySource::with_devices(&["Pad"]));
        assert!(source.init().is_ok());
        assert_eq!(source.device_count(), 1);
        assert_eq!(source.device_name(0), Some("Pad"));
        let handle = source.open(0).unwrap();
        assert_eq!(source.device_index(handle), Some(0));
        assert_eq!(source.device_uuid(0), None);
    }
}
