//! Display-cycle orchestration.
//!
//! One cycle runs: read cache; if fresh, display the cached snapshot with no
//! network access. Otherwise locate, fetch, cache, display. Any failure
//! surfaces a notice and halts the cycle with no partial update.

use crate::{
    animate,
    cache::WeatherCache,
    config::WidgetConfig,
    error::LocationError,
    location::LocationSource,
    model::WeatherSnapshot,
    provider::WeatherApi,
    store::KeyValueStore,
    view::{Gradient, Notice, Presentation, View},
};
use chrono::{Local, Utc};

pub struct Controller {
    cache: WeatherCache,
    location: Box<dyn LocationSource>,
    api: Box<dyn WeatherApi>,
    view: Box<dyn View>,
}

impl Controller {
    pub fn new(
        config: WidgetConfig,
        store: Box<dyn KeyValueStore>,
        location: Box<dyn LocationSource>,
        api: Box<dyn WeatherApi>,
        view: Box<dyn View>,
    ) -> Self {
        Self { cache: WeatherCache::new(store, config.cache_ttl_ms), location, api, view }
    }

    /// Run one display cycle.
    pub async fn run(&mut self) {
        if let Some(entry) = self.cache.read() {
            if self.cache.is_fresh(&entry, Utc::now().timestamp_millis()) {
                tracing::debug!("using cached weather data");
                self.show(&entry.data);
                return;
            }
        }

        let coords = match self.location.current_position().await {
            Ok(coords) => coords,
            Err(err) => {
                self.view.notice(location_notice(&err));
                return;
            }
        };

        let snapshot = match self.api.current_weather(coords).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::error!("weather fetch failed: {err:#}");
                self.view.notice(Notice::FetchFailed);
                return;
            }
        };

        self.cache.write(&snapshot, Utc::now().timestamp_millis());
        self.show(&snapshot);
    }

    /// Clear the cache unconditionally, then run a cycle. The cycle is
    /// guaranteed to miss the cache.
    pub async fn refresh(&mut self) {
        self.cache.clear();
        self.run().await;
    }

    fn show(&mut self, snapshot: &WeatherSnapshot) {
        let presentation = Presentation::from_snapshot(snapshot, Local::now());
        let gradient = Gradient::for_temperature(snapshot.main.temp);
        self.view.display(&presentation, gradient, &animate::entrance());
    }
}

fn location_notice(err: &LocationError) -> Notice {
    match err {
        LocationError::Unsupported => Notice::LocationUnsupported,
        LocationError::Denied(_) => Notice::LocationDenied,
    }
}
