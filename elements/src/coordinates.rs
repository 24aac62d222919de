// Copyright (c) 2025 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::fmt;

// Where the telescope is set up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverLocation {
    // Degrees, positive north. -90..90.
    pub latitude: f64,

    // Degrees, positive east. -180..180.
    pub longitude: f64,

    // Meters above sea level. Carried along for the device; the geometric
    // transform does not depend on it.
    pub elevation: f64,
}

impl ObserverLocation {
    /// Returns None if latitude or longitude is out of range or not finite.
    pub fn new(latitude: f64, longitude: f64, elevation: f64)
               -> Option<ObserverLocation> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return None;
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        if !elevation.is_finite() {
            return None;
        }
        Some(ObserverLocation { latitude, longitude, elevation })
    }
}

// A catalog object to point at. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    name: String,
    // Hours, 0..24.
    ra: f64,
    // Degrees, -90..90.
    dec: f64,
}

impl Target {
    /// Returns None if `ra` (hours) or `dec` (degrees) is out of range.
    pub fn new(name: &str, ra: f64, dec: f64) -> Option<Target> {
        if !ra.is_finite() || !(0.0..24.0).contains(&ra) {
            return None;
        }
        if !dec.is_finite() || !(-90.0..=90.0).contains(&dec) {
            return None;
        }
        Some(Target { name: name.to_string(), ra, dec })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ra(&self) -> f64 {
        self.ra
    }

    pub fn dec(&self) -> f64 {
        self.dec
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (RA {:.4}h, Dec {:.4}°)", self.name, self.ra, self.dec)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    // Right ascension, hours.
    pub ra: f64,

    // Declination, degrees.
    pub dec: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonPosition {
    // Degrees clockwise from north, 0..360.
    pub azimuth: f64,

    // Degrees above the local horizon, -90..90.
    pub altitude: f64,
}
