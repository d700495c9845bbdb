//! Low-precision solar ephemeris.
//!
//! Positions and rise/set times follow the usual approximations from
//! Astronomy Answers (accurate to a minute or so, which is plenty for
//! placing a garden bed).  All instants are handled as Julian days; times
//! are reported in local mean solar time, i.e. UTC shifted by `lng / 15` hours.

use std::f64::consts::PI;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::types::{DaylengthRange, SunInfo, SunPosition};

const RAD: f64 = PI / 180.0;
const MS_PER_DAY: f64 = 86_400_000.0;
const J1970: f64 = 2_440_588.0;
const J2000: f64 = 2_451_545.0;
const J0: f64 = 0.0009;

/// Obliquity of the ecliptic.
const OBLIQUITY: f64 = 23.4397 * RAD;
/// Altitude of the sun's centre at apparent sunrise (refraction plus semi-diameter).
const SUNRISE_ALTITUDE: f64 = -0.833 * RAD;

const NO_TIME: &str = "--:--";

// ------------------------------------------------------------------
// Julian day helpers

#[inline]
fn to_julian(t: DateTime<Utc>) -> f64 { t.timestamp_millis() as f64 / MS_PER_DAY - 0.5 + J1970 }

#[inline]
fn from_julian(j: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(((j + 0.5 - J1970) * MS_PER_DAY).round() as i64)
}

// ------------------------------------------------------------------
// Solar coordinates

#[inline]
fn solar_mean_anomaly(d: f64) -> f64 { RAD * (357.5291 + 0.98560028 * d) }

fn ecliptic_longitude(m: f64) -> f64 {
    let center = RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    let perihelion = RAD * 102.9372;
    m + center + perihelion + PI
}

#[inline]
fn declination(l: f64) -> f64 { (l.sin() * OBLIQUITY.sin()).asin() }

#[inline]
fn right_ascension(l: f64) -> f64 { (l.sin() * OBLIQUITY.cos()).atan2(l.cos()) }

#[inline]
fn sidereal_time(d: f64, lw: f64) -> f64 { RAD * (280.16 + 360.9856235 * d) - lw }

// ------------------------------------------------------------------
// Transit and hour angle

#[inline]
fn julian_cycle(d: f64, lw: f64) -> f64 { (d - J0 - lw / (2.0 * PI)).round() }

#[inline]
fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 { J0 + (ht + lw) / (2.0 * PI) + n }

#[inline]
fn solar_transit(ds: f64, m: f64, l: f64) -> f64 { J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin() }

/// Whether the sun crosses `h0` on a given day, and if so its hour angle there.
enum Crossing {
    HourAngle(f64),
    AlwaysAbove,
    AlwaysBelow,
}

fn hour_angle(h0: f64, phi: f64, dec: f64) -> Crossing {
    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h < -1.0 {
        Crossing::AlwaysAbove
    } else if cos_h > 1.0 {
        Crossing::AlwaysBelow
    } else {
        Crossing::HourAngle(cos_h.acos())
    }
}

// ------------------------------------------------------------------

/// Solar-noon altitude, azimuth and day length at `(latitude, longitude)` on `date`.
pub fn sun_at_noon(date: NaiveDate, latitude: f64, longitude: f64) -> Option<SunPosition> {
    let lw = -longitude * RAD;
    let phi = latitude * RAD;

    // Local mean noon as a starting guess for the transit search.
    let guess = date.and_hms_opt(12, 0, 0)?.and_utc() - TimeDelta::milliseconds((longitude * 240_000.0) as i64);
    let d = to_julian(guess) - J2000;

    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);
    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l);
    let j_noon = solar_transit(ds, m, l);

    // Position at the transit itself.
    let dn = j_noon - J2000;
    let l_noon = ecliptic_longitude(solar_mean_anomaly(dn));
    let (dec_noon, ra_noon) = (declination(l_noon), right_ascension(l_noon));
    let h = sidereal_time(dn, lw) - ra_noon;
    let altitude = (phi.sin() * dec_noon.sin() + phi.cos() * dec_noon.cos() * h.cos()).asin();
    let azimuth = h.sin().atan2(h.cos() * phi.sin() - dec_noon.tan() * phi.cos());

    let (sunrise, sunset, daylength) = match hour_angle(SUNRISE_ALTITUDE, phi, dec) {
        Crossing::HourAngle(w) => {
            let j_set = solar_transit(approx_transit(w, lw, n), m, l);
            let j_rise = j_noon - (j_set - j_noon);
            (local_time(j_rise, longitude)?, local_time(j_set, longitude)?, (j_set - j_rise) * 24.0)
        }
        Crossing::AlwaysAbove => (NO_TIME.to_string(), NO_TIME.to_string(), 24.0),
        Crossing::AlwaysBelow => (NO_TIME.to_string(), NO_TIME.to_string(), 0.0),
    };

    Some(SunPosition {
        altitude: altitude.to_degrees(),
        // Measured from south, westward positive; turn it into a compass bearing.
        azimuth: landgeom::sphere::normalize_degrees(azimuth.to_degrees() + 180.0),
        sunrise,
        sunset,
        daylength,
    })
}

/// `HH:MM` in local mean solar time.
fn local_time(j: f64, longitude: f64) -> Option<String> {
    let utc = from_julian(j)?;
    let local = utc + TimeDelta::milliseconds((longitude * 240_000.0) as i64);
    Some(local.format("%H:%M").to_string())
}

/// Sun figures for the two solstices and the March equinox of `year`.
///
/// "Summer" is the June solstice in the northern hemisphere and the December
/// solstice in the southern one.  `None` for coordinates off the globe.
pub fn sun_path(latitude: f64, longitude: f64, year: i32) -> Option<SunInfo> {
    if !latitude.is_finite() || !longitude.is_finite() || latitude.abs() > 90.0 {
        return None;
    }

    let june = NaiveDate::from_ymd_opt(year, 6, 21)?;
    let december = NaiveDate::from_ymd_opt(year, 12, 21)?;
    let march = NaiveDate::from_ymd_opt(year, 3, 20)?;

    let (summer, winter) = if latitude >= 0.0 { (june, december) } else { (december, june) };

    let summer_solstice = sun_at_noon(summer, latitude, longitude)?;
    let winter_solstice = sun_at_noon(winter, latitude, longitude)?;
    let equinox = sun_at_noon(march, latitude, longitude)?;

    let daylength = DaylengthRange { longest: summer_solstice.daylength, shortest: winter_solstice.daylength };
    Some(SunInfo { summer_solstice, winter_solstice, equinox, daylength })
}
