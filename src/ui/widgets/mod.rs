// SPDX-License-Identifier: MPL-2.0
pub mod sensor;

pub use sensor::{sensor, Sensor};
