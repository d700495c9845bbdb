use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{ClimateType, Hemisphere};

/// Classify a site from its monthly temperature extremes and annual rainfall.
///
/// Rainfall below 250 mm is always arid.  Below 500 mm a warm annual mean
/// (>= 18 C) is arid too, which catches deserts with cool winters.
pub fn derive_climate_type(coldest: f64, warmest: f64, rainfall: f64, latitude: f64) -> (ClimateType, Hemisphere) {
    let hemisphere = Hemisphere::from_latitude(latitude);

    let kind = if rainfall < 250.0 {
        ClimateType::Arid
    } else if rainfall < 500.0 && (coldest + warmest) / 2.0 >= 18.0 {
        ClimateType::Arid
    } else if coldest >= 18.0 {
        ClimateType::Tropical
    } else if coldest >= 10.0 && warmest >= 22.0 {
        ClimateType::Subtropical
    } else {
        ClimateType::Temperate
    };

    (kind, hemisphere)
}

/// One day of observed weather.  Missing observations are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWeather {
    pub date: NaiveDate,
    /// Celsius.
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    /// Millimetres.
    pub precipitation: Option<f64>,
    /// Daily maximum wind speed at 10 m, km/h.
    pub wind_speed_max: Option<f64>,
    /// Dominant direction the wind blew from, degrees.
    pub wind_direction: Option<f64>,
}

/// Column-oriented daily archive, as served by Open-Meteo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<NaiveDate>,
    #[serde(default, rename = "temperature_2m_max")]
    pub temp_max: Vec<Option<f64>>,
    #[serde(default, rename = "temperature_2m_min")]
    pub temp_min: Vec<Option<f64>>,
    #[serde(default, rename = "precipitation_sum")]
    pub precipitation: Vec<Option<f64>>,
    #[serde(default, rename = "wind_speed_10m_max")]
    pub wind_speed_max: Vec<Option<f64>>,
    #[serde(default, rename = "wind_direction_10m_dominant")]
    pub wind_direction: Vec<Option<f64>>,
}

impl DailySeries {
    /// Pivot the columns into one record per day.  Short columns read as missing.
    pub fn records(&self) -> Vec<DailyWeather> {
        let at = |column: &[Option<f64>], i: usize| column.get(i).copied().flatten();
        self.time.iter().enumerate()
            .map(|(i, &date)| DailyWeather {
                date,
                temp_max: at(&self.temp_max, i),
                temp_min: at(&self.temp_min, i),
                precipitation: at(&self.precipitation, i),
                wind_speed_max: at(&self.wind_speed_max, i),
                wind_direction: at(&self.wind_direction, i),
            })
            .collect()
    }
}

/// A year of daily weather reduced to the figures the analysis needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateSummary {
    /// Mean daily temperature of the coldest month, Celsius.
    pub coldest_month: f64,
    pub warmest_month: f64,
    /// Millimetres over the whole record.
    pub annual_rainfall: f64,
    /// Days whose minimum stayed above freezing.
    pub frost_free_days: u32,
    /// Mean of the daily maximum wind speeds, km/h.
    pub avg_wind_speed: f64,
    /// Most frequent of the eight compass directions, degrees.
    pub dominant_wind_dir: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monsoon_months: Option<(u32, u32)>,
}

impl ClimateSummary {
    /// Aggregate daily records.  `None` when no day has both temperature readings.
    pub fn from_daily(records: &[DailyWeather]) -> Option<Self> {
        let mut month_temps = [(0.0_f64, 0_u32); 12];
        let mut month_precip: [Option<f64>; 12] = [None; 12];
        let mut wind_buckets = [0_u32; 8];

        let mut rainfall = 0.0;
        let mut frost_free_days = 0;
        let (mut wind_sum, mut wind_count) = (0.0, 0_u32);

        for day in records {
            let month = day.date.month0() as usize;

            if let (Some(max), Some(min)) = (day.temp_max, day.temp_min) {
                month_temps[month].0 += (max + min) / 2.0;
                month_temps[month].1 += 1;
            }
            if day.temp_min.is_some_and(|min| min > 0.0) {
                frost_free_days += 1;
            }
            if let Some(p) = day.precipitation {
                rainfall += p;
                *month_precip[month].get_or_insert(0.0) += p;
            }
            if let Some(speed) = day.wind_speed_max {
                wind_sum += speed;
                wind_count += 1;
            }
            if let Some(dir) = day.wind_direction {
                wind_buckets[compass_octant(dir)] += 1;
            }
        }

        let means = month_temps.iter()
            .filter(|(_, n)| *n > 0)
            .map(|(sum, n)| sum / *n as f64);
        let (coldest, warmest) = means.fold(None, |acc: Option<(f64, f64)>, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })?;

        let avg_wind_speed = if wind_count > 0 { wind_sum / wind_count as f64 } else { 0.0 };

        // First bucket with the highest count wins, so ties go to the lower bearing.
        let mut dominant = 0;
        for (i, &count) in wind_buckets.iter().enumerate() {
            if count > wind_buckets[dominant] { dominant = i; }
        }

        Some(Self {
            coldest_month: round1(coldest),
            warmest_month: round1(warmest),
            annual_rainfall: round1(rainfall),
            frost_free_days,
            avg_wind_speed: round1(avg_wind_speed),
            dominant_wind_dir: dominant as f64 * 45.0,
            monsoon_months: monsoon_window(&month_precip, rainfall),
        })
    }

    /// Climate type and hemisphere for a site at `latitude`.
    #[inline]
    pub fn classify(&self, latitude: f64) -> (ClimateType, Hemisphere) {
        derive_climate_type(self.coldest_month, self.warmest_month, self.annual_rainfall, latitude)
    }
}

/// Two consecutive months (December wraps to January) each receiving at least
/// twice the mean monthly rainfall.  The wettest such pair wins.
fn monsoon_window(month_precip: &[Option<f64>; 12], total: f64) -> Option<(u32, u32)> {
    let months_with_data = month_precip.iter().flatten().count();
    if months_with_data < 2 { return None }

    let threshold = 2.0 * total / months_with_data as f64;
    let mut best: Option<((u32, u32), f64)> = None;

    for m in 0..12 {
        let next = (m + 1) % 12;
        let p1 = month_precip[m].unwrap_or(0.0);
        let p2 = month_precip[next].unwrap_or(0.0);
        if p1 >= threshold && p2 >= threshold && best.is_none_or(|(_, t)| p1 + p2 > t) {
            best = Some(((m as u32 + 1, next as u32 + 1), p1 + p2));
        }
    }

    best.map(|(months, _)| months)
}

/// Index (0 = north, 1 = north-east, ...) of the compass octant nearest `degrees`.
#[inline]
pub(crate) fn compass_octant(degrees: f64) -> usize {
    ((degrees / 45.0).round() as i64).rem_euclid(8) as usize
}

#[inline]
fn round1(x: f64) -> f64 { (x * 10.0).round() / 10.0 }

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(coldest: f64, warmest: f64, rainfall: f64, lat: f64) -> (ClimateType, Hemisphere) {
        derive_climate_type(coldest, warmest, rainfall, lat)
    }

    use ClimateType::*;
    use Hemisphere::*;

    #[test]
    fn real_world_locations() {
        assert_eq!(classify(25.0, 29.0, 1800.0, 10.8), (Tropical, Northern)); // Ho Chi Minh City
        assert_eq!(classify(6.0, 17.0, 640.0, -43.5), (Temperate, Southern)); // Christchurch
        assert_eq!(classify(15.0, 25.0, 1150.0, -27.5), (Subtropical, Southern)); // Brisbane
        assert_eq!(classify(12.0, 36.0, 280.0, -23.7), (Arid, Southern)); // Alice Springs
        assert_eq!(classify(11.0, 37.0, 240.0, 31.6), (Arid, Northern)); // Marrakech
        assert_eq!(classify(17.0, 29.0, 1700.0, 21.0), (Subtropical, Northern)); // Hanoi
    }

    #[test]
    fn temperature_thresholds() {
        assert_eq!(classify(18.0, 30.0, 1500.0, 10.0).0, Tropical);
        assert_eq!(classify(17.9, 30.0, 1500.0, 10.0).0, Subtropical);
        assert_eq!(classify(10.0, 25.0, 800.0, -30.0).0, Subtropical);
        assert_eq!(classify(9.9, 25.0, 800.0, -30.0).0, Temperate);
        assert_eq!(classify(12.0, 21.9, 900.0, 45.0).0, Temperate);
        assert_eq!(classify(12.0, 22.0, 900.0, 45.0).0, Subtropical);
    }

    #[test]
    fn rainfall_thresholds() {
        // Mean of 14 C keeps the hot-arid rule out of play.
        assert_eq!(classify(8.0, 20.0, 250.0, 45.0).0, Temperate);
        assert_eq!(classify(20.0, 35.0, 249.0, 10.0).0, Arid);
        assert_eq!(classify(12.0, 36.0, 499.0, 10.0).0, Arid);
        assert_eq!(classify(18.0, 35.0, 500.0, 10.0).0, Tropical);
    }

    #[test]
    fn equator_is_northern() {
        assert_eq!(classify(25.0, 28.0, 2000.0, 0.0).1, Northern);
        assert_eq!(classify(25.0, 28.0, 2000.0, -0.01).1, Southern);
    }

    fn day(y: i32, m: u32, d: u32, max: f64, min: f64, rain: f64, dir: f64) -> DailyWeather {
        DailyWeather {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            temp_max: Some(max),
            temp_min: Some(min),
            precipitation: Some(rain),
            wind_speed_max: Some(12.0),
            wind_direction: Some(dir),
        }
    }

    #[test]
    fn summary_of_two_months() {
        let records = vec![
            day(2025, 1, 1, 10.0, -2.0, 5.0, 350.0),
            day(2025, 1, 2, 12.0, 2.0, 5.0, 10.0),
            day(2025, 7, 1, 30.0, 20.0, 1.0, 180.0),
        ];
        let summary = ClimateSummary::from_daily(&records).unwrap();

        assert_eq!(summary.coldest_month, 5.5);
        assert_eq!(summary.warmest_month, 25.0);
        assert_eq!(summary.annual_rainfall, 11.0);
        assert_eq!(summary.frost_free_days, 2);
        assert_eq!(summary.avg_wind_speed, 12.0);
        // 350 and 10 both round to north.
        assert_eq!(summary.dominant_wind_dir, 0.0);
        assert_eq!(summary.monsoon_months, None);
    }

    #[test]
    fn empty_record_has_no_summary() {
        assert_eq!(ClimateSummary::from_daily(&[]), None);

        let mut missing = day(2025, 3, 1, 0.0, 0.0, 0.0, 0.0);
        missing.temp_max = None;
        assert_eq!(ClimateSummary::from_daily(&[missing]), None);
    }

    #[test]
    fn monsoon_detects_wet_pair() {
        let mut precip = [Some(10.0); 12];
        precip[6] = Some(300.0);
        precip[7] = Some(250.0);
        let total: f64 = precip.iter().flatten().sum();
        assert_eq!(monsoon_window(&precip, total), Some((7, 8)));
    }

    #[test]
    fn monsoon_wraps_december_to_january() {
        let mut precip = [Some(5.0); 12];
        precip[11] = Some(200.0);
        precip[0] = Some(220.0);
        let total: f64 = precip.iter().flatten().sum();
        assert_eq!(monsoon_window(&precip, total), Some((12, 1)));
    }

    #[test]
    fn even_rainfall_has_no_monsoon() {
        let precip = [Some(60.0); 12];
        assert_eq!(monsoon_window(&precip, 720.0), None);
    }

    #[test]
    fn octants_wrap() {
        assert_eq!(compass_octant(0.0), 0);
        assert_eq!(compass_octant(350.0), 0);
        assert_eq!(compass_octant(44.0), 1);
        assert_eq!(compass_octant(270.0), 6);
        assert_eq!(compass_octant(-45.0), 7);
    }

    #[test]
    fn series_pivots_to_records() {
        let json = serde_json::json!({
            "time": ["2025-01-01", "2025-01-02"],
            "temperature_2m_max": [10.0, null],
            "temperature_2m_min": [1.0, 2.0],
            "precipitation_sum": [0.5, 0.0],
            "wind_speed_10m_max": [8.0, 9.0],
            "wind_direction_10m_dominant": [90.0]
        });
        let series: DailySeries = serde_json::from_value(json).unwrap();
        let records = series.records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].temp_max, Some(10.0));
        assert_eq!(records[1].temp_max, None);
        assert_eq!(records[1].wind_direction, None);
    }
}
