//! This module provides the main entry point of the crate, the [`Dashboard`].
//! It loads the forecast of the selected city through a [`ForecastSource`] and
//! derives the display-ready projections from it.

use crate::aggregator::ForecastAggregator;
use crate::config::{ConfigError, DashboardConfig, FetcherConfig};
use crate::error::DashboardError;
use crate::fetcher::error::FetchError;
use crate::fetcher::open_weather::OpenWeatherFetcher;
use crate::fetcher::source::ForecastSource;
use crate::types::clock_frame::ClockFrame;
use crate::types::current_conditions::CurrentConditions;
use crate::types::forecast_record::ForecastSet;
use crate::types::projections::ForecastProjections;
use crate::utils::non_blank;
use bon::bon;
use chrono::NaiveDateTime;
use log::{info, warn};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// What happened to a search once its response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response became the dashboard's current forecast.
    Applied,
    /// A newer request had already been applied; the response was dropped.
    Discarded,
    /// The city was blank, nothing was requested.
    Ignored,
}

/// Tag of one forecast request: a sequence number plus the city it was issued for.
///
/// Obtained from [`Dashboard::begin`] and consumed by [`Dashboard::complete`].
/// The dashboard counts the request as in flight until the ticket is dropped.
#[derive(Debug)]
pub struct RequestTicket<'a> {
    id: u64,
    city: String,
    in_flight: &'a AtomicUsize,
}

impl RequestTicket<'_> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl Drop for RequestTicket<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}

struct Selection {
    city: String,
    forecast: ForecastSet,
}

#[derive(Default)]
struct DashboardState {
    applied_ticket: u64,
    selection: Option<Selection>,
}

/// Forecast dashboard for one selected city.
///
/// Searches may overlap: every search takes a [`RequestTicket`] before it goes to
/// the network, and a response is only applied if no newer ticket has been applied
/// in the meantime. An older in-flight response therefore never replaces the
/// forecast of a city searched later.
///
/// # Examples
///
/// ```rust,no_run
/// # use forecast_dashboard::{Dashboard, DashboardError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), DashboardError> {
/// // Reads OPENWEATHER_API_KEY
/// let dashboard = Dashboard::new()?;
/// dashboard.load_default().await?;
///
/// if let Some(projections) = dashboard.projections().await {
///     println!("{} conditions forecast for {}", projections.distribution.len(), projections.city);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Dashboard<S = OpenWeatherFetcher> {
    source: S,
    config: DashboardConfig,
    last_ticket: AtomicU64,
    in_flight: AtomicUsize,
    state: Mutex<DashboardState>,
}

#[bon]
impl Dashboard<OpenWeatherFetcher> {
    /// Creates a dashboard backed by OpenWeatherMap with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if `OPENWEATHER_API_KEY` is not set or
    /// the HTTP client cannot be built.
    pub fn new() -> Result<Self, DashboardError> {
        let fetcher = OpenWeatherFetcher::from_env()?;
        Ok(Self::with_source(fetcher, DashboardConfig::default()))
    }

    /// Creates a dashboard backed by OpenWeatherMap with explicit settings.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.api_key(impl Into<String>)`: **Required.** OpenWeatherMap API key.
    /// * `.default_city(impl Into<String>)`: Optional. City for [`Dashboard::load_default`]. Defaults to "São Paulo".
    /// * `.language(impl Into<String>)`: Optional. Language of condition labels. Defaults to "pt_br".
    /// * `.clock(ClockFrame)`: Optional. Frame in which "now" is read. Defaults to [`ClockFrame::Utc`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use forecast_dashboard::{ClockFrame, Dashboard, DashboardError};
    /// # fn main() -> Result<(), DashboardError> {
    /// let dashboard = Dashboard::open_weather()
    ///     .api_key("my-key")
    ///     .default_city("Florianópolis")
    ///     .language("en")
    ///     .clock(ClockFrame::Local)
    ///     .call()?;
    /// assert!(!dashboard.is_loading());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn open_weather(
        #[builder(into)] api_key: String,
        #[builder(into)] default_city: Option<String>,
        #[builder(into)] language: Option<String>,
        clock: Option<ClockFrame>,
    ) -> Result<Self, DashboardError> {
        let fetcher_config = FetcherConfig::builder()
            .api_key(api_key)
            .maybe_language(language)
            .build();
        let config = DashboardConfig::builder()
            .maybe_default_city(default_city)
            .maybe_clock(clock)
            .build();
        Ok(Self::with_source(OpenWeatherFetcher::new(fetcher_config)?, config))
    }
}

impl<S: ForecastSource> Dashboard<S> {
    /// Creates a dashboard on top of any [`ForecastSource`].
    pub fn with_source(source: S, config: DashboardConfig) -> Self {
        Self {
            source,
            config,
            last_ticket: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            state: Mutex::new(DashboardState::default()),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// True while at least one forecast request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }

    /// Loads the configured default city, as the dashboard does when first shown.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDefaultCity`] if the configured city is blank,
    /// otherwise the same errors as [`Dashboard::search`].
    pub async fn load_default(&self) -> Result<SearchOutcome, DashboardError> {
        let city = non_blank(&self.config.default_city)
            .ok_or(ConfigError::EmptyDefaultCity)?
            .to_string();
        self.search(&city).await
    }

    /// Fetches the forecast for `city` and makes it current unless a newer search won.
    ///
    /// Leading and trailing whitespace is ignored; a blank city returns
    /// [`SearchOutcome::Ignored`] without any request.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Fetch`] if the source fails, most notably with
    /// [`FetchError::CityNotFound`]. The current forecast is left untouched.
    pub async fn search(&self, city: &str) -> Result<SearchOutcome, DashboardError> {
        let Some(city) = non_blank(city) else {
            return Ok(SearchOutcome::Ignored);
        };
        let ticket = self.begin(city);
        let result = self.source.fetch_forecast(ticket.city()).await;
        self.complete(ticket, result).await
    }

    /// Fetches the selected city again.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NoCitySelected`] before the first successful search.
    pub async fn refresh(&self) -> Result<SearchOutcome, DashboardError> {
        let city = self
            .selected_city()
            .await
            .ok_or(DashboardError::NoCitySelected)?;
        self.search(&city).await
    }

    /// Issues a ticket for a request about to be sent for `city`.
    ///
    /// [`Dashboard::search`] does this itself; call it directly only when the
    /// forecast is fetched outside the dashboard's source.
    pub fn begin(&self, city: &str) -> RequestTicket<'_> {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        let id = self.last_ticket.fetch_add(1, Ordering::AcqRel) + 1;
        RequestTicket {
            id,
            city: city.to_string(),
            in_flight: &self.in_flight,
        }
    }

    /// Applies the response of a request unless a newer one was already applied.
    ///
    /// Staleness is checked before the result is looked at: once a newer search
    /// has been applied, an older response is discarded whether it succeeded or
    /// failed, so a replaced search never surfaces its error.
    ///
    /// # Errors
    ///
    /// Returns the fetch error of a request that is not stale.
    pub async fn complete(
        &self,
        ticket: RequestTicket<'_>,
        result: Result<ForecastSet, FetchError>,
    ) -> Result<SearchOutcome, DashboardError> {
        let mut state = self.state.lock().await;
        if ticket.id <= state.applied_ticket {
            warn!(
                "Discarding stale response for '{}' (request {}, already showing request {})",
                ticket.city, ticket.id, state.applied_ticket
            );
            return Ok(SearchOutcome::Discarded);
        }
        let forecast = result?;

        match forecast.horizon() {
            Some((first, last)) => info!(
                "Showing {} forecast records for '{}' from {} to {} (request {})",
                forecast.len(),
                ticket.city,
                first,
                last,
                ticket.id
            ),
            None => info!(
                "Showing an empty forecast for '{}' (request {})",
                ticket.city, ticket.id
            ),
        }
        state.applied_ticket = ticket.id;
        state.selection = Some(Selection {
            city: ticket.city.clone(),
            forecast,
        });
        Ok(SearchOutcome::Applied)
    }

    pub async fn selected_city(&self) -> Option<String> {
        let state = self.state.lock().await;
        state.selection.as_ref().map(|s| s.city.clone())
    }

    /// Copy of the current forecast set.
    pub async fn forecast(&self) -> Option<ForecastSet> {
        let state = self.state.lock().await;
        state.selection.as_ref().map(|s| s.forecast.clone())
    }

    /// Projections of the current forecast, with the next-day window starting at `now`.
    pub async fn projections_at(&self, now: NaiveDateTime) -> Option<ForecastProjections> {
        let state = self.state.lock().await;
        state
            .selection
            .as_ref()
            .map(|s| ForecastAggregator::new(&s.forecast).project(&s.city, now))
    }

    /// Projections of the current forecast as of the configured clock's "now".
    pub async fn projections(&self) -> Option<ForecastProjections> {
        self.projections_at(self.config.clock.now()).await
    }

    /// Observed weather for `city`, independent of the selected forecast.
    ///
    /// Returns `Ok(None)` for a blank city.
    pub async fn current_conditions(
        &self,
        city: &str,
    ) -> Result<Option<CurrentConditions>, DashboardError> {
        let Some(city) = non_blank(city) else {
            return Ok(None);
        };
        Ok(Some(self.source.fetch_current(city).await?))
    }
}
