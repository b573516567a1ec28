//! Simulated instrument: owns the state and accumulates the history

use rand::SeedableRng;
use rand::rngs::StdRng;
use ticksim_clock::{Clock, SystemClock, TickClock, seconds_to_duration};
use ticksim_core::{InstrumentId, LiquidityClass, Price, TickRecord, Timestamp};
use ticksim_ports::{SimulationError, SimulationResult};

use crate::application::generators::{GbmStep, InterTickTimer, LiquidityChain};
use crate::domain::{LiquidityMode, QuoteModel, TickHistory, TickParameters, TransitionMatrix};

/// Construction parameters for an [`Instrument`]
#[derive(Debug, Clone)]
pub struct InstrumentConfig {
    /// Ticker, must not be blank
    pub ticker: String,
    /// Initial last price, must be positive
    pub start_value: Price,
    /// Simulation time of creation; `None` stamps it with the wall clock
    pub start_time: Option<Timestamp>,
    /// Starting (origin) liquidity class
    pub liquidity: LiquidityClass,
    pub mode: LiquidityMode,
    /// Seed for the instrument's random stream; `None` seeds from entropy
    pub seed: Option<u64>,
    pub transition_matrix: TransitionMatrix,
    pub quote_model: QuoteModel,
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            ticker: "ALEX".to_string(),
            start_value: 100.0,
            start_time: None,
            liquidity: LiquidityClass::UltraHigh,
            mode: LiquidityMode::default(),
            seed: None,
            transition_matrix: TransitionMatrix::reference(),
            quote_model: QuoteModel::reference(),
        }
    }
}

/// Parse a liquidity label (`UH`, `H`, `M`, `L`, `UL`)
pub fn parse_liquidity_label(label: &str) -> SimulationResult<LiquidityClass> {
    LiquidityClass::from_label(label).ok_or_else(|| {
        let err = SimulationError::InvalidConstructionParameter(format!(
            "unknown liquidity class {label:?}, expected one of UH, H, M, L, UL"
        ));
        log::error!("{}", err);
        err
    })
}

/// A single simulated instrument
///
/// Single-owner session object: stepping takes `&mut self`, and every
/// random draw comes from the instrument's own stream, so two instruments
/// never share random state.
#[derive(Debug)]
pub struct Instrument {
    id: InstrumentId,
    start_value: Price,
    start_time: Timestamp,
    last: Price,
    origin_class: LiquidityClass,
    current_class: LiquidityClass,
    bid: Option<Price>,
    ask: Option<Price>,
    /// Write-once: set by the first stepping call
    volatility: Option<f64>,
    /// Write-once: set by the first stepping call
    rate: Option<f64>,
    clock: TickClock,
    mode: LiquidityMode,
    chain: LiquidityChain,
    quote_model: QuoteModel,
    rng: StdRng,
    history: TickHistory,
}

impl Instrument {
    /// Create an instrument and its initial history record
    ///
    /// Fails without returning anything partially built when the ticker is
    /// blank or the start price is not a positive finite number.
    pub fn new(config: InstrumentConfig) -> SimulationResult<Self> {
        let id = InstrumentId::new(config.ticker);
        if id.is_blank() {
            return Err(reject(SimulationError::InvalidConstructionParameter(
                "ticker must not be blank".to_string(),
            )));
        }
        if !(config.start_value.is_finite() && config.start_value > 0.0) {
            return Err(reject(SimulationError::InvalidConstructionParameter(
                format!(
                    "start_value for {} must be a positive real, got {}",
                    id, config.start_value
                ),
            )));
        }
        let chain = LiquidityChain::new(config.transition_matrix).map_err(reject)?;

        let start_time = config
            .start_time
            .unwrap_or_else(|| SystemClock::new().now());
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let initial = TickRecord::new(
            id.clone(),
            start_time,
            None,
            None,
            config.start_value,
            config.liquidity,
        );

        log::info!(
            "Created instrument \"{}\" at {} (liquidity {}, {:?} mode)",
            id,
            config.start_value,
            config.liquidity,
            config.mode
        );

        Ok(Self {
            id,
            start_value: config.start_value,
            start_time,
            last: config.start_value,
            origin_class: config.liquidity,
            current_class: config.liquidity,
            bid: None,
            ask: None,
            volatility: None,
            rate: None,
            clock: TickClock::new(start_time),
            mode: config.mode,
            chain,
            quote_model: config.quote_model,
            rng,
            history: TickHistory::new(initial),
        })
    }

    /// Shorthand for the common case: ticker, price, time, liquidity label
    pub fn with_label(
        ticker: impl Into<String>,
        start_value: Price,
        start_time: Timestamp,
        liquidity: &str,
        seed: Option<u64>,
    ) -> SimulationResult<Self> {
        Self::new(InstrumentConfig {
            ticker: ticker.into(),
            start_value,
            start_time: Some(start_time),
            liquidity: parse_liquidity_label(liquidity)?,
            seed,
            ..Default::default()
        })
    }

    pub fn id(&self) -> &InstrumentId {
        &self.id
    }

    pub fn start_value(&self) -> Price {
        self.start_value
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn last(&self) -> Price {
        self.last
    }

    pub fn bid(&self) -> Option<Price> {
        self.bid
    }

    pub fn ask(&self) -> Option<Price> {
        self.ask
    }

    pub fn origin_class(&self) -> LiquidityClass {
        self.origin_class
    }

    pub fn current_class(&self) -> LiquidityClass {
        self.current_class
    }

    pub fn liquidity_score(&self) -> u8 {
        self.current_class.score()
    }

    pub fn volatility(&self) -> Option<f64> {
        self.volatility
    }

    pub fn rate(&self) -> Option<f64> {
        self.rate
    }

    pub fn mode(&self) -> LiquidityMode {
        self.mode
    }

    /// Current simulated time
    pub fn tick_time(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn history(&self) -> &TickHistory {
        &self.history
    }

    pub fn into_history(self) -> TickHistory {
        self.history
    }

    /// Advance exactly one tick
    ///
    /// Only time and price move: the record carries the current liquidity
    /// class and quotes unchanged.
    pub fn one_tick(&mut self, params: &TickParameters) -> SimulationResult<&TickRecord> {
        let timer = InterTickTimer::new(params.alpha, params.theta).map_err(reject)?;
        self.lock_parameters(params)?;
        let price = self.price_model()?;

        let delta = timer.next_delta(&mut self.rng).map_err(reject)?;
        let mut clock = self.clock.clone();
        let timestamp = clock.advance(seconds_to_duration(delta))?;
        let last = price.step(delta, self.last, &mut self.rng)?;

        let record = TickRecord::new(
            self.id.clone(),
            timestamp,
            self.bid,
            self.ask,
            last,
            self.current_class,
        );

        self.clock = clock;
        self.last = last;
        self.history.push(record);
        log::trace!("{}: tick at {} last={}", self.id, timestamp, last);
        Ok(self.history.latest())
    }

    /// Generate ticks from `start` until the running clock passes `end`
    ///
    /// Each iteration draws an inter-tick time, advances the running clock,
    /// steps the price, steps the liquidity chain, requotes and appends a
    /// record stamped with the new time. The clock is checked before each
    /// draw, so the final record usually lands past `end` by part of one
    /// draw. Returns the number of ticks appended.
    pub fn period_ticks(
        &mut self,
        start: Timestamp,
        end: Timestamp,
        params: &TickParameters,
    ) -> SimulationResult<usize> {
        let timer = InterTickTimer::new(params.alpha, params.theta).map_err(reject)?;
        if start < self.clock.now() {
            return Err(reject(SimulationError::InvalidParameter(format!(
                "period start {} precedes {} clock at {}",
                start,
                self.id,
                self.clock.now()
            ))));
        }
        self.lock_parameters(params)?;
        let price = self.price_model()?;

        let mut running = start;
        let mut ticks = 0usize;
        while running <= end {
            let delta = timer.next_delta(&mut self.rng).map_err(reject)?;
            let next_time = running
                .checked_add_signed(seconds_to_duration(delta))
                .ok_or_else(|| {
                    SimulationError::InvalidState(format!("clock overflow after {running}"))
                })?;

            let last = price.step(delta, self.last, &mut self.rng)?;
            let anchor = match self.mode {
                LiquidityMode::NonReverting => self.origin_class,
                LiquidityMode::Drifting => self.current_class,
            };
            let class = self.chain.next_class(anchor, &mut self.rng);
            let quote = self.quote_model.quote(class, last, &mut self.rng);

            self.clock.advance_to(next_time)?;
            self.last = last;
            self.current_class = class;
            self.bid = quote.bid;
            self.ask = quote.ask;
            self.history.push(TickRecord::new(
                self.id.clone(),
                next_time,
                quote.bid,
                quote.ask,
                last,
                class,
            ));

            running = next_time;
            ticks += 1;
        }

        log::info!(
            "Generated {} ticks for \"{}\" ({} records, last {:.4})",
            ticks,
            self.id,
            self.history.len(),
            self.last
        );
        Ok(ticks)
    }

    /// Lock volatility and rate on first use
    ///
    /// Later calls must pass the same values; a different value is rejected
    /// instead of being silently ignored.
    fn lock_parameters(&mut self, params: &TickParameters) -> SimulationResult<()> {
        params.validate().map_err(reject)?;
        check_locked("volatility", self.volatility, params.volatility)?;
        check_locked("rate", self.rate, params.rate)?;

        if self.volatility.is_none() || self.rate.is_none() {
            log::debug!(
                "{}: locking volatility={} rate={}",
                self.id,
                params.volatility,
                params.rate
            );
        }
        self.volatility.get_or_insert(params.volatility);
        self.rate.get_or_insert(params.rate);
        Ok(())
    }

    fn price_model(&self) -> SimulationResult<GbmStep> {
        match (self.rate, self.volatility) {
            (Some(rate), Some(volatility)) => GbmStep::new(rate, volatility),
            _ => Err(SimulationError::InvalidState(format!(
                "{} stepped before its parameters were locked",
                self.id
            ))),
        }
    }
}

fn check_locked(name: &'static str, locked: Option<f64>, requested: f64) -> SimulationResult<()> {
    match locked {
        Some(locked) if locked != requested => {
            let err = SimulationError::ParameterLocked {
                name,
                locked,
                requested,
            };
            log::error!("{}", err);
            Err(err)
        }
        _ => Ok(()),
    }
}

fn reject(err: SimulationError) -> SimulationError {
    log::error!("{}. Aborted.", err);
    err
}
