// Copyright (c) 2025 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use std::{f64::consts::PI, time::SystemTime};

use astro::{
    angle::limit_to_two_PI,
    coords::{alt_frm_eq, az_frm_eq},
    time::{julian_day, mn_sidr, CalType, Date},
};
use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::coordinates::{HorizonPosition, ObserverLocation};

/// Returns (alt, az) in radians. Returned azimuth is clockwise from north.
/// ra: right ascension in radians.
/// dec: declination in radians.
/// lat: observer latitude in radians.
/// long: observer longitude in radians.
pub fn alt_az_from_equatorial(
    ra: f64,
    dec: f64,
    lat: f64,
    long: f64,
    time: &SystemTime,
) -> (/* alt */ f64, /* az */ f64) {
    let gmst = greenwich_mean_sidereal_time_from_system_time(time);

    // Note that astro::coords::hr_angl_frm_observer_long() has a bug.
    // Fortunately the correct relation is trivial.
    let hour_angle = gmst + long - ra;

    // Meeus measures azimuth from south.
    let meeus_az = az_frm_eq(hour_angle, dec, lat);
    let az = limit_to_two_PI(meeus_az + PI);

    (alt_frm_eq(hour_angle, dec, lat), az)
}

/// Converts a target's equatorial position to where it appears in the
/// observer's sky at `time`.
/// ra_hours: right ascension, hours.
/// dec_degrees: declination, degrees.
/// Returns azimuth in [0, 360) and altitude in [-90, 90], both degrees.
/// Deterministic: the same inputs always give the same outputs.
pub fn equatorial_to_horizon(
    ra_hours: f64,
    dec_degrees: f64,
    location: &ObserverLocation,
    time: &SystemTime,
) -> HorizonPosition {
    let (alt, az) = alt_az_from_equatorial(
        (ra_hours * 15.0).to_radians(),
        dec_degrees.to_radians(),
        location.latitude.to_radians(),
        location.longitude.to_radians(),
        time,
    );
    let mut azimuth = az.to_degrees().rem_euclid(360.0);
    if azimuth >= 360.0 {
        azimuth = 0.0;
    }
    HorizonPosition {
        azimuth,
        altitude: alt.to_degrees().clamp(-90.0, 90.0),
    }
}

/// Returns local mean sidereal time, in hours 0..24, for the given observer
/// longitude (degrees, positive east).
pub fn local_sidereal_time_hours(longitude: f64, time: &SystemTime) -> f64 {
    let gmst = greenwich_mean_sidereal_time_from_system_time(time);
    limit_to_two_PI(gmst + longitude.to_radians()).to_degrees() / 15.0
}

fn greenwich_mean_sidereal_time_from_system_time(time: &SystemTime) -> f64 {
    let dt_utc = DateTime::<Utc>::from(*time);
    let date = Date {
        year: dt_utc.date_naive().year() as i16,
        month: dt_utc.date_naive().month() as u8,
        decimal_day: dt_utc.date_naive().day() as f64,
        cal_type: CalType::Gregorian,
    };
    let jd = julian_day(&date);

    let utc_hours = dt_utc.time().num_seconds_from_midnight() as f64 / 3600.0;
    let gmst_hours =
        mn_sidr(jd).to_degrees() / 15.0 + utc_hours * 1.00273790935;

    limit_to_two_PI((gmst_hours * 15.0).to_radians())
}
