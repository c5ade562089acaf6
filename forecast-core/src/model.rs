use serde::{Deserialize, Serialize};

/// One weather condition tag as reported by the upstream provider.
///
/// The provider may attach several simultaneous descriptors to a single
/// period (e.g. "Clouds" and "Rain").
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDescriptor {
    pub main: String,
    pub description: String,
}

/// Current conditions block of a one-call payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub dt: i64,
    pub temp: f64,
    pub wind_speed: f64,
    pub wind_deg: f64,
    pub weather: Vec<WeatherDescriptor>,
}

/// Per-day min/max temperatures of a one-call daily entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DayTemperature {
    pub min: f64,
    pub max: f64,
}

/// One daily entry of a one-call payload.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyEntry {
    pub dt: i64,
    pub temp: DayTemperature,
    #[serde(default)]
    pub pop: f64,
    pub weather: Vec<WeatherDescriptor>,
}

/// Upstream one-call forecast payload, deserialized verbatim and treated as
/// immutable once received.
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecast {
    pub current: CurrentConditions,
    #[serde(default)]
    pub daily: Vec<DailyEntry>,
}

/// Wind conditions of the public response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub bearing: f64,
}

/// Low/high temperature span of a daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub low: f64,
    pub high: f64,
}

/// One day of the public forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub temperature: TemperatureRange,
}

/// Public forecast contract returned by `GET /api/v1/weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub temperature: f64,
    pub wind: Wind,
    pub precip_prob: f64,
    pub daily: Vec<DailyForecast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_forecast_deserializes_one_call_payload() {
        let raw: RawForecast = serde_json::from_str(
            r#"{
                "current": {
                    "dt": 1624683380,
                    "temp": 81.5,
                    "wind_speed": 4.61,
                    "wind_deg": 210,
                    "weather": [{"main": "Clouds", "description": "scattered clouds"}]
                },
                "daily": [{
                    "dt": 1624683380,
                    "temp": {"min": 68.2, "max": 84.9},
                    "pop": 0.57,
                    "weather": [{"main": "Rain", "description": "light rain"}]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(raw.current.dt, 1624683380);
        assert_eq!(raw.current.weather[0].main, "Clouds");
        assert_eq!(raw.daily.len(), 1);
        assert_eq!(raw.daily[0].pop, 0.57);
        assert_eq!(raw.daily[0].temp.min, 68.2);
    }

    #[test]
    fn missing_daily_defaults_to_empty() {
        let raw: RawForecast = serde_json::from_str(
            r#"{"current": {"dt": 0, "temp": 1.0, "wind_speed": 2.0, "wind_deg": 3, "weather": []}}"#,
        )
        .unwrap();
        assert!(raw.daily.is_empty());
    }

    #[test]
    fn forecast_response_uses_contract_field_names() {
        let response = ForecastResponse {
            date: "2021-06-26".to_owned(),
            kind: "Clouds".to_owned(),
            description: "Scattered Clouds".to_owned(),
            temperature: 81.5,
            wind: Wind { speed: 4.61, bearing: 210.0 },
            precip_prob: 0.57,
            daily: vec![DailyForecast {
                date: "2021-06-26".to_owned(),
                kind: "Rain".to_owned(),
                description: "Light Rain".to_owned(),
                temperature: TemperatureRange { low: 68.2, high: 84.9 },
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "Clouds");
        assert_eq!(json["daily"][0]["type"], "Rain");
        assert_eq!(json["daily"][0]["temperature"]["low"], 68.2);
        assert_eq!(json["precip_prob"], 0.57);
    }
}
