//! Forecast payload models
//!
//! Raw Open-Meteo response types and their conversion into the domain's
//! snapshot building blocks. The hourly and daily sections arrive as
//! parallel time-indexed arrays; index i of every array refers to the
//! same instant, so a length mismatch is a parse error, never a silently
//! truncated series.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use domain::entities::{CurrentConditions, DailyEntry, HourlyEntry};
use domain::value_objects::GeoLocation;
use serde::Deserialize;

use crate::client::ForecastError;

/// Raw current block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    pub time: String,
    pub temperature_2m: f32,
    pub apparent_temperature: f32,
    pub wind_speed_10m: f32,
    /// 1 while the sun is up, 0 otherwise
    pub is_day: u8,
}

/// Raw hourly block (parallel arrays)
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f32>,
    pub precipitation_probability: Vec<u8>,
}

/// Raw daily block (parallel arrays)
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f32>,
    pub temperature_2m_min: Vec<f32>,
    pub precipitation_probability_max: Vec<u8>,
    pub uv_index_max: Vec<f32>,
}

/// Raw forecast response
///
/// The proxy contract adds a `confidence_level` field at the top level;
/// unknown fields are ignored so the same model parses both shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenMeteoPayload {
    pub latitude: f64,
    pub longitude: f64,
    pub current: Option<CurrentData>,
    pub hourly: Option<HourlyData>,
    pub daily: Option<DailyData>,
}

/// Parsed forecast ready for classification
#[derive(Debug, Clone)]
pub struct ParsedForecast {
    /// Coordinates the provider resolved the request to
    pub location: GeoLocation,
    /// Current conditions with today's extremes folded in
    pub current: CurrentConditions,
    /// Hour-by-hour series
    pub hourly: Vec<HourlyEntry>,
    /// Day-by-day series
    pub daily: Vec<DailyEntry>,
    /// Local hour at the location (times are requested in local timezone)
    pub local_hour: u32,
}

impl OpenMeteoPayload {
    /// Convert the raw payload into the parsed form
    ///
    /// # Errors
    ///
    /// Returns a parse error when a required section is missing, parallel
    /// arrays disagree on length, the daily series is empty, or a time
    /// string does not parse.
    pub fn into_parsed(self) -> Result<ParsedForecast, ForecastError> {
        let location = GeoLocation::new(self.latitude, self.longitude)
            .map_err(|_| ForecastError::ParseError("response coordinates out of range".into()))?;

        let current = self
            .current
            .ok_or_else(|| ForecastError::ParseError("missing current block".into()))?;
        let hourly = self
            .hourly
            .ok_or_else(|| ForecastError::ParseError("missing hourly block".into()))?;
        let daily = self
            .daily
            .ok_or_else(|| ForecastError::ParseError("missing daily block".into()))?;

        let hourly = parse_hourly(&hourly)?;
        // UV only matters for today's current block; the domain's daily
        // entries do not carry it
        let uv_today = daily.uv_index_max.first().copied().unwrap_or(0.0);
        let daily = parse_daily(&daily)?;
        let today = daily
            .first()
            .ok_or_else(|| ForecastError::ParseError("empty daily series".into()))?;

        let local_time = parse_datetime(&current.time)?;

        Ok(ParsedForecast {
            location,
            current: CurrentConditions {
                temperature: current.temperature_2m,
                apparent_temperature: current.apparent_temperature,
                temperature_min: today.temperature_min,
                temperature_max: today.temperature_max,
                rain_probability: today.rain_probability,
                uv_index: uv_today,
                wind_speed: current.wind_speed_10m,
                is_day: current.is_day == 1,
            },
            hourly,
            daily,
            local_hour: local_time.hour(),
        })
    }
}

fn parse_hourly(data: &HourlyData) -> Result<Vec<HourlyEntry>, ForecastError> {
    let len = data.time.len();
    if data.temperature_2m.len() != len || data.precipitation_probability.len() != len {
        return Err(ForecastError::ParseError(
            "hourly series length mismatch".into(),
        ));
    }

    let mut entries = Vec::with_capacity(len);
    for i in 0..len {
        entries.push(HourlyEntry {
            time: parse_datetime(&data.time[i])?,
            temperature: data.temperature_2m[i],
            rain_probability: data.precipitation_probability[i],
        });
    }
    Ok(entries)
}

fn parse_daily(data: &DailyData) -> Result<Vec<DailyEntry>, ForecastError> {
    let len = data.time.len();
    if data.temperature_2m_max.len() != len
        || data.temperature_2m_min.len() != len
        || data.precipitation_probability_max.len() != len
        || data.uv_index_max.len() != len
    {
        return Err(ForecastError::ParseError(
            "daily series length mismatch".into(),
        ));
    }

    let mut entries = Vec::with_capacity(len);
    for i in 0..len {
        let date = NaiveDate::parse_from_str(&data.time[i], "%Y-%m-%d")
            .map_err(|e| ForecastError::ParseError(format!("invalid date: {e}")))?;
        entries.push(DailyEntry {
            date,
            temperature_max: data.temperature_2m_max[i],
            temperature_min: data.temperature_2m_min[i],
            rain_probability: data.precipitation_probability_max[i],
        });
    }
    Ok(entries)
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, ForecastError> {
    // Open-Meteo uses minute precision (2026-03-10T14:00); tolerate seconds
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| ForecastError::ParseError(format!("invalid datetime {s}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> OpenMeteoPayload {
        OpenMeteoPayload {
            latitude: -33.87,
            longitude: 151.21,
            current: Some(CurrentData {
                time: "2026-03-10T14:30".to_string(),
                temperature_2m: 23.5,
                apparent_temperature: 22.8,
                wind_speed_10m: 18.0,
                is_day: 1,
            }),
            hourly: Some(HourlyData {
                time: vec![
                    "2026-03-10T14:00".to_string(),
                    "2026-03-10T15:00".to_string(),
                ],
                temperature_2m: vec![23.5, 24.0],
                precipitation_probability: vec![20, 35],
            }),
            daily: Some(DailyData {
                time: vec!["2026-03-10".to_string(), "2026-03-11".to_string()],
                temperature_2m_max: vec![26.0, 28.0],
                temperature_2m_min: vec![15.0, 16.0],
                precipitation_probability_max: vec![45, 10],
                uv_index_max: vec![7.5, 9.0],
            }),
        }
    }

    #[test]
    fn parses_complete_payload() {
        let parsed = payload().into_parsed().unwrap();

        assert!((parsed.current.temperature - 23.5).abs() < f32::EPSILON);
        assert!((parsed.current.apparent_temperature - 22.8).abs() < f32::EPSILON);
        assert!(parsed.current.is_day);
        assert_eq!(parsed.local_hour, 14);

        // Today's extremes fold into the current block
        assert!((parsed.current.temperature_max - 26.0).abs() < f32::EPSILON);
        assert!((parsed.current.temperature_min - 15.0).abs() < f32::EPSILON);
        assert_eq!(parsed.current.rain_probability, 45);
        assert!((parsed.current.uv_index - 7.5).abs() < f32::EPSILON);

        assert_eq!(parsed.hourly.len(), 2);
        assert_eq!(parsed.hourly[1].rain_probability, 35);
        assert_eq!(parsed.daily.len(), 2);
        assert_eq!(
            parsed.daily[1].date,
            NaiveDate::from_ymd_opt(2026, 3, 11).unwrap()
        );
    }

    #[test]
    fn hourly_times_keep_the_local_clock_reading() {
        let parsed = payload().into_parsed().unwrap();

        // timezone=auto means the strings are already location-local;
        // they must come through as the same naive clock time
        let expected = NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        assert_eq!(parsed.hourly[0].time, expected);
        assert_eq!(parsed.hourly[0].time.hour(), 14);
    }

    #[test]
    fn hourly_length_mismatch_is_a_parse_error() {
        let mut p = payload();
        if let Some(hourly) = &mut p.hourly {
            hourly.temperature_2m.pop();
        }

        let err = p.into_parsed().unwrap_err();
        assert!(matches!(err, ForecastError::ParseError(_)));
        assert!(err.to_string().contains("hourly series length mismatch"));
    }

    #[test]
    fn daily_length_mismatch_is_a_parse_error() {
        let mut p = payload();
        if let Some(daily) = &mut p.daily {
            daily.uv_index_max.push(1.0);
        }

        assert!(matches!(
            p.into_parsed(),
            Err(ForecastError::ParseError(_))
        ));
    }

    #[test]
    fn missing_sections_are_parse_errors() {
        let mut p = payload();
        p.current = None;
        assert!(p.into_parsed().is_err());

        let mut p = payload();
        p.daily = None;
        assert!(p.into_parsed().is_err());
    }

    #[test]
    fn empty_daily_series_is_a_parse_error() {
        let mut p = payload();
        p.daily = Some(DailyData {
            time: vec![],
            temperature_2m_max: vec![],
            temperature_2m_min: vec![],
            precipitation_probability_max: vec![],
            uv_index_max: vec![],
        });

        assert!(p.into_parsed().is_err());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut p = payload();
        p.latitude = 123.0;
        assert!(p.into_parsed().is_err());
    }

    #[test]
    fn night_flag_maps_to_false() {
        let mut p = payload();
        if let Some(current) = &mut p.current {
            current.is_day = 0;
            current.time = "2026-03-10T22:00".to_string();
        }

        let parsed = p.into_parsed().unwrap();
        assert!(!parsed.current.is_day);
        assert_eq!(parsed.local_hour, 22);
    }

    #[test]
    fn datetime_with_seconds_parses() {
        assert!(parse_datetime("2026-03-10T14:00:00").is_ok());
        assert!(parse_datetime("garbage").is_err());
        assert!(parse_datetime("2026-03-10").is_err());
    }
}
