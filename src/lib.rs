use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use yew::functional::Reducible;

/// Default configuration and timing parameters
pub mod defaults {
    pub const MAX_TICKETS: i64 = 100;
    pub const PROCESSING_RATE: i64 = 10;
    pub const SIMULATION_DURATION_SECS: i64 = 60;
    /// Period of the simulated processing loop.
    pub const TICK_INTERVAL_MS: u32 = 1000;
}

/// Run mode of the simulated processing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProcessingStatus {
    #[default]
    Stopped,
    Running,
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingStatus::Stopped => write!(f, "Stopped"),
            ProcessingStatus::Running => write!(f, "Running"),
        }
    }
}

/// Counters shown on the status panel.
///
/// Both counters advance by the same amount on every tick, so
/// `available_tickets` mirrors `total_tickets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolStatus {
    pub total_tickets: u64,
    pub available_tickets: u64,
    pub processing_status: ProcessingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigField {
    MaxTickets,
    ProcessingRate,
    SimulationDuration,
}

impl ConfigField {
    /// Fields in form order.
    pub const ALL: [ConfigField; 3] = [
        ConfigField::MaxTickets,
        ConfigField::ProcessingRate,
        ConfigField::SimulationDuration,
    ];

    /// Label shown next to the input field.
    pub fn label(self) -> &'static str {
        match self {
            ConfigField::MaxTickets => "Max Tickets",
            ConfigField::ProcessingRate => "Processing Rate",
            ConfigField::SimulationDuration => "Simulation Duration (s)",
        }
    }

    fn subject(self) -> &'static str {
        match self {
            ConfigField::MaxTickets => "Max tickets",
            ConfigField::ProcessingRate => "Processing rate",
            ConfigField::SimulationDuration => "Simulation duration",
        }
    }
}

/// Why raw field text could not be turned into a whole number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldParseError {
    Empty,
    NotANumber(String),
    NotAWholeNumber(String),
}

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldParseError::Empty => write!(f, "Value cannot be empty"),
            FieldParseError::NotANumber(raw) => write!(f, "'{}' is not a number", raw),
            FieldParseError::NotAWholeNumber(raw) => write!(f, "'{}' is not a whole number", raw),
        }
    }
}

impl std::error::Error for FieldParseError {}

/// Outcome of parsing one configuration field. Invalid input is kept as an
/// error value until validation runs on Start.
pub type FieldValue = Result<i64, FieldParseError>;

/// Parse the raw text of a number input.
///
/// Accepts anything a browser number input produces, including exponent
/// notation (`1e3`), as long as it denotes a finite whole number.
pub fn parse_field_value(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldParseError::Empty);
    }
    let number: f64 = trimmed
        .parse()
        .map_err(|_| FieldParseError::NotANumber(trimmed.to_string()))?;
    whole_number(number, trimmed)
}

/// Apply the same rules as [`parse_field_value`] to a number received from JavaScript.
pub fn field_value_from_number(number: f64) -> FieldValue {
    whole_number(number, &number.to_string())
}

fn whole_number(number: f64, raw: &str) -> FieldValue {
    if !number.is_finite() {
        return Err(FieldParseError::NotANumber(raw.to_string()));
    }
    if number.fract() != 0.0 {
        return Err(FieldParseError::NotAWholeNumber(raw.to_string()));
    }
    // i64::MAX is not representable; as f64 it rounds up to 2^63.
    if number < i64::MIN as f64 || number >= i64::MAX as f64 {
        return Err(FieldParseError::NotANumber(raw.to_string()));
    }
    Ok(number as i64)
}

/// Validation failure reported when Start is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NotANumber(ConfigField),
    NotPositive(ConfigField),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotANumber(field) => {
                write!(f, "{} must be a valid number", field.subject())
            }
            ConfigError::NotPositive(field) => {
                write!(f, "{} must be greater than 0", field.subject())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// User-editable simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub max_tickets: FieldValue,
    pub processing_rate: FieldValue,
    pub simulation_duration: FieldValue,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            max_tickets: Ok(defaults::MAX_TICKETS),
            processing_rate: Ok(defaults::PROCESSING_RATE),
            simulation_duration: Ok(defaults::SIMULATION_DURATION_SECS),
        }
    }
}

impl Configuration {
    pub fn get(&self, field: ConfigField) -> &FieldValue {
        match field {
            ConfigField::MaxTickets => &self.max_tickets,
            ConfigField::ProcessingRate => &self.processing_rate,
            ConfigField::SimulationDuration => &self.simulation_duration,
        }
    }

    pub fn set(&mut self, field: ConfigField, value: FieldValue) {
        match field {
            ConfigField::MaxTickets => self.max_tickets = value,
            ConfigField::ProcessingRate => self.processing_rate = value,
            ConfigField::SimulationDuration => self.simulation_duration = value,
        }
    }

    /// Check the fields required to start processing. The first failing
    /// field wins; the simulation duration is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in [ConfigField::MaxTickets, ConfigField::ProcessingRate] {
            match self.get(field) {
                Err(_) => return Err(ConfigError::NotANumber(field)),
                Ok(value) if *value <= 0 => return Err(ConfigError::NotPositive(field)),
                Ok(_) => {}
            }
        }
        Ok(())
    }

    /// Amount added to the counters per tick. Zero when the configured rate
    /// is not a positive number.
    pub fn tick_rate(&self) -> u64 {
        match self.processing_rate {
            Ok(rate) if rate > 0 => rate as u64,
            _ => 0,
        }
    }
}

/// Messages shown under the configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorState {
    pub configuration_error: String,
    /// Never populated by any code path.
    pub system_error: String,
}

/// Every mutation the dashboard accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolAction {
    Start,
    Stop,
    Reset,
    SetField { field: ConfigField, raw: String },
    /// One firing of the processing timer, carrying the rate it was armed with.
    Tick { rate: u64 },
}

/// The whole dashboard state. Only [`PoolAction`]s mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dashboard {
    pub status: PoolStatus,
    pub configuration: Configuration,
    pub errors: ErrorState,
}

impl Dashboard {
    pub fn is_running(&self) -> bool {
        self.status.processing_status == ProcessingStatus::Running
    }

    /// Validate the configuration, recording the first failure as the
    /// configuration error. A passing check leaves the error untouched.
    pub fn validate_configuration(&mut self) -> bool {
        match self.configuration.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!("Configuration rejected: {}", err);
                self.errors.configuration_error = err.to_string();
                false
            }
        }
    }

    pub fn start(&mut self) {
        if self.is_running() {
            debug!("Start ignored, pool is already running");
            return;
        }
        if self.validate_configuration() {
            self.status.processing_status = ProcessingStatus::Running;
            self.errors.configuration_error.clear();
            info!(
                "Processing started at {} tickets per tick",
                self.configuration.tick_rate()
            );
        }
    }

    pub fn stop(&mut self) {
        if !self.is_running() {
            debug!("Stop ignored, pool is already stopped");
            return;
        }
        self.status.processing_status = ProcessingStatus::Stopped;
        info!(
            "Processing stopped: total={}, available={}",
            self.status.total_tickets, self.status.available_tickets
        );
    }

    /// Restore counters and configuration to their defaults. The error
    /// messages are kept.
    pub fn reset(&mut self) {
        self.status = PoolStatus::default();
        self.configuration = Configuration::default();
        info!("Pool reset to defaults");
    }

    pub fn set_config_field(&mut self, field: ConfigField, raw: &str) {
        let value = parse_field_value(raw);
        if let Err(ref err) = value {
            debug!("{} holds unparsed input: {}", field.label(), err);
        }
        self.configuration.set(field, value);
    }

    /// Advance both counters by `rate`. Ticks that arrive while stopped are dropped.
    pub fn tick(&mut self, rate: u64) {
        if !self.is_running() {
            debug!("Dropped tick while stopped");
            return;
        }
        self.status.total_tickets = self.status.total_tickets.saturating_add(rate);
        self.status.available_tickets = self.status.available_tickets.saturating_add(rate);
        debug!(
            "Tick +{}: total={}, available={}",
            rate, self.status.total_tickets, self.status.available_tickets
        );
    }

    pub fn apply(&mut self, action: PoolAction) {
        match action {
            PoolAction::Start => self.start(),
            PoolAction::Stop => self.stop(),
            PoolAction::Reset => self.reset(),
            PoolAction::SetField { field, raw } => self.set_config_field(field, &raw),
            PoolAction::Tick { rate } => self.tick(rate),
        }
    }
}

impl Reducible for Dashboard {
    type Action = PoolAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            return self;
        }
        if log::log_enabled!(log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(&next) {
                debug!("State: {}", json);
            }
        }
        Rc::new(next)
    }
}

/// Result of a headless simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub status: PoolStatus,
    pub configuration_error: String,
}

impl From<&Dashboard> for SimulationReport {
    fn from(dashboard: &Dashboard) -> Self {
        Self {
            status: dashboard.status,
            configuration_error: dashboard.errors.configuration_error.clone(),
        }
    }
}

/// Press Start on a fresh dashboard with `configuration`, then let `seconds`
/// timer periods elapse.
pub fn run_simulation(configuration: Configuration, seconds: u32) -> Dashboard {
    let mut dashboard = Dashboard {
        configuration,
        ..Dashboard::default()
    };
    dashboard.start();
    let rate = dashboard.configuration.tick_rate();
    if dashboard.is_running() {
        for _ in 0..seconds {
            dashboard.tick(rate);
        }
    }
    dashboard
}

/// JavaScript entry point running the processing loop without a view.
///
/// # Arguments
/// * `max_tickets` - Max tickets setting
/// * `processing_rate` - Tickets added per second
/// * `seconds` - Simulated seconds to run after Start
///
/// # Returns
/// A serialized [`SimulationReport`]
#[wasm_bindgen]
pub fn simulate(max_tickets: f64, processing_rate: f64, seconds: u32) -> JsValue {
    let configuration = Configuration {
        max_tickets: field_value_from_number(max_tickets),
        processing_rate: field_value_from_number(processing_rate),
        ..Configuration::default()
    };
    let dashboard = run_simulation(configuration, seconds);
    serde_wasm_bindgen::to_value(&SimulationReport::from(&dashboard)).unwrap_or(JsValue::NULL)
}

pub mod ticker;
