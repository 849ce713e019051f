//! Presentation: formatted display fields, the gradient policy, and the
//! rendering capability.

use crate::{animate::Step, model::WeatherSnapshot};
use chrono::{DateTime, Local};

/// The formatted fields the widget shows, one per display target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub city: String,
    pub temp: String,
    pub desc: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
    pub update: String,
}

impl Presentation {
    /// Format a snapshot for display, stamping it with the local time.
    pub fn from_snapshot(snapshot: &WeatherSnapshot, updated_at: DateTime<Local>) -> Self {
        let desc = snapshot
            .weather
            .first()
            .map(|c| c.description.clone())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            city: snapshot.name.clone(),
            temp: format!("{}°C", snapshot.main.temp.round() as i64),
            desc,
            humidity: format!("{}%", snapshot.main.humidity),
            wind: format!("{} km/h", snapshot.wind.speed),
            pressure: format!("{} hPa", snapshot.main.pressure),
            update: format!("Last updated: {}", updated_at.format("%H:%M:%S")),
        }
    }
}

/// Background gradient tiers keyed off the current temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    Hot,
    Mild,
    Cool,
}

impl Gradient {
    /// Duration of the animated background transition, in time-units.
    pub const TRANSITION: f64 = 1.0;

    pub fn for_temperature(temp_c: f64) -> Self {
        if temp_c >= 30.0 {
            Gradient::Hot
        } else if temp_c >= 20.0 {
            Gradient::Mild
        } else {
            Gradient::Cool
        }
    }

    /// Color stops of the 135° background gradient.
    pub fn stops(self) -> (&'static str, &'static str) {
        match self {
            Gradient::Hot => ("#FF7E5F", "#FEB47B"),
            Gradient::Mild => ("#74ABE2", "#5563DE"),
            Gradient::Cool => ("#4E54C8", "#8F94FB"),
        }
    }
}

/// Blocking notices shown when a display cycle fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// No positioning capability on this platform.
    LocationUnsupported,
    /// The user must grant location access.
    LocationDenied,
    /// Fetching or decoding weather data failed.
    FetchFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::LocationUnsupported => "Your device does not support location lookup.",
            Notice::LocationDenied => "Please enable location access to get weather details.",
            Notice::FetchFailed => "Error fetching weather data. Try again later.",
        }
    }
}

/// Rendering surface the controller drives.
pub trait View {
    /// Apply a full, successful update: fields, background, entrance
    /// sequence. Called once per display cycle.
    fn display(&mut self, presentation: &Presentation, gradient: Gradient, entrance: &[Step]);

    /// Surface a blocking failure notice; previously displayed fields stay
    /// untouched.
    fn notice(&mut self, notice: Notice);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, MainMetrics, WeatherSnapshot, Wind, sample_snapshot};

    fn local_noon() -> DateTime<Local> {
        use chrono::TimeZone;
        Local.with_ymd_and_hms(2024, 5, 4, 12, 30, 15).unwrap()
    }

    #[test]
    fn temperature_rounds_to_integer_celsius() {
        let up = Presentation::from_snapshot(&sample_snapshot(21.6), local_noon());
        assert_eq!(up.temp, "22°C");

        let down = Presentation::from_snapshot(&sample_snapshot(21.4), local_noon());
        assert_eq!(down.temp, "21°C");
    }

    #[test]
    fn fields_carry_their_unit_suffixes() {
        let p = Presentation::from_snapshot(&sample_snapshot(25.0), local_noon());

        assert_eq!(p.city, "Kyiv");
        assert_eq!(p.desc, "scattered clouds");
        assert_eq!(p.humidity, "64%");
        assert_eq!(p.wind, "4.2 km/h");
        assert_eq!(p.pressure, "1012 hPa");
        assert_eq!(p.update, "Last updated: 12:30:15");
    }

    #[test]
    fn missing_condition_list_falls_back() {
        let snapshot = WeatherSnapshot {
            name: "Kyiv".to_string(),
            main: MainMetrics { temp: 20.0, humidity: 50, pressure: 1000 },
            weather: Vec::new(),
            wind: Wind { speed: 1.0 },
        };

        let p = Presentation::from_snapshot(&snapshot, local_noon());
        assert_eq!(p.desc, "unknown");
    }

    #[test]
    fn only_first_condition_is_shown() {
        let mut snapshot = sample_snapshot(20.0);
        snapshot.weather.push(Condition { description: "mist".to_string() });

        let p = Presentation::from_snapshot(&snapshot, local_noon());
        assert_eq!(p.desc, "scattered clouds");
    }

    #[test]
    fn gradient_tiers() {
        assert_eq!(Gradient::for_temperature(30.0), Gradient::Hot);
        assert_eq!(Gradient::for_temperature(29.9), Gradient::Mild);
        assert_eq!(Gradient::for_temperature(20.0), Gradient::Mild);
        assert_eq!(Gradient::for_temperature(19.9), Gradient::Cool);
    }

    #[test]
    fn gradient_stops_are_distinct() {
        let stops = [Gradient::Hot.stops(), Gradient::Mild.stops(), Gradient::Cool.stops()];
        assert_eq!(stops[0].0, "#FF7E5F");
        assert_eq!(stops[1].0, "#74ABE2");
        assert_eq!(stops[2].0, "#4E54C8");
    }

    #[test]
    fn background_transition_lasts_one_time_unit() {
        assert_eq!(Gradient::TRANSITION, 1.0);
    }
}
