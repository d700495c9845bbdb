//! Blocking clients for the Open-Meteo climate archive and elevation APIs.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate, TimeDelta, Utc};
use geo::Point;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::types::SiteAnalysis;
use super::{sample_points, sun_path, ClimateSummary, DailySeries, ElevationSummary};

/// Which remote service a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Climate,
    Elevation,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Service::Climate => "climate",
            Service::Elevation => "elevation",
        })
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("The {service} data request timed out. Please try again.")]
    Timeout { service: Service },

    #[error("Unable to fetch {service} data. Please check your internet connection and try again.")]
    Network { service: Service, #[source] source: reqwest::Error },

    #[error("Failed to fetch {service} data (status {status}). Please try again later.")]
    Status { service: Service, status: u16 },

    #[error("Received invalid {service} data from the server. Please try again.")]
    Invalid { service: Service },

    #[error("No {service} data available for this location. Please try a different location.")]
    NoData { service: Service },
}

impl FetchError {
    fn from_reqwest(service: Service, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { service }
        } else if err.is_decode() {
            FetchError::Invalid { service }
        } else {
            FetchError::Network { service, source: err }
        }
    }

    #[inline]
    pub fn service(&self) -> Service {
        match self {
            FetchError::Timeout { service }
            | FetchError::Network { service, .. }
            | FetchError::Status { service, .. }
            | FetchError::Invalid { service }
            | FetchError::NoData { service } => *service,
        }
    }
}

fn client(config: &FetchConfig, service: Service) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .build()
        .map_err(|e| FetchError::from_reqwest(service, e))
}

fn get_json<T: DeserializeOwned>(
    config: &FetchConfig,
    service: Service,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, FetchError> {
    debug!(%service, url, "[fetch] GET");
    let response = client(config, service)?
        .get(url)
        .query(query)
        .send()
        .map_err(|e| FetchError::from_reqwest(service, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { service, status: status.as_u16() });
    }
    response.json::<T>().map_err(|e| FetchError::from_reqwest(service, e))
}

// ------------------------------------------------------------------

#[derive(Deserialize)]
struct ArchiveResponse {
    daily: Option<DailySeries>,
}

/// The year of daily records ending yesterday.
fn archive_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today - TimeDelta::days(1);
    let start = end
        .checked_sub_months(Months::new(12))
        .map_or(end - TimeDelta::days(364), |d| d + TimeDelta::days(1));
    (start, end)
}

/// Download a year of daily weather for the location and summarise it.
pub fn fetch_climate(lat: f64, lng: f64, config: &FetchConfig) -> Result<ClimateSummary, FetchError> {
    let service = Service::Climate;
    let (start, end) = archive_window(Utc::now().date_naive());

    let query = [
        ("latitude", lat.to_string()),
        ("longitude", lng.to_string()),
        (
            "daily",
            "temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max,wind_direction_10m_dominant".into(),
        ),
        ("timezone", "auto".into()),
        ("start_date", start.to_string()),
        ("end_date", end.to_string()),
    ];

    let body: ArchiveResponse = get_json(config, service, &config.climate_url, &query)?;
    let daily = body.daily.filter(|d| !d.time.is_empty()).ok_or(FetchError::NoData { service })?;

    debug!(days = daily.time.len(), "[fetch_climate] received");
    ClimateSummary::from_daily(&daily.records()).ok_or(FetchError::NoData { service })
}

#[derive(Deserialize)]
struct ElevationResponse {
    #[serde(default)]
    elevation: Vec<f64>,
}

/// Sample terrain at the centre and 50 m to each cardinal direction.
pub fn fetch_elevation(lat: f64, lng: f64, config: &FetchConfig) -> Result<ElevationSummary, FetchError> {
    let service = Service::Elevation;
    let points = sample_points(Point::new(lng, lat));
    let join = |f: fn(&Point<f64>) -> f64| {
        points.iter().map(|p| format!("{:.6}", f(p))).collect::<Vec<_>>().join(",")
    };
    let query = [("latitude", join(|p| p.y())), ("longitude", join(|p| p.x()))];

    let body: ElevationResponse = get_json(config, service, &config.elevation_url, &query)?;
    ElevationSummary::from_slice(&body.elevation).ok_or(FetchError::NoData { service })
}

/// Fetch climate and terrain concurrently and assemble a full analysis.
///
/// Climate is required.  A terrain failure only degrades the result to
/// placeholder elevation.
pub fn analyze_site(lat: f64, lng: f64, config: &FetchConfig) -> Result<SiteAnalysis, FetchError> {
    let year = Utc::now().year();

    let (climate, elevation) = std::thread::scope(|s| {
        let elevation = s.spawn(|| fetch_elevation(lat, lng, config));
        let climate = fetch_climate(lat, lng, config);
        let elevation = elevation.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (climate, elevation)
    });

    let climate = climate?;
    let elevation = elevation
        .inspect_err(|e| warn!(error = %e, "[analyze_site] elevation lookup failed"))
        .ok();

    Ok(SiteAnalysis::assemble(lat, &climate, elevation, sun_path(lat, lng, year)))
}
