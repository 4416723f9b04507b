// src/services/long_url.rs - Long URL generation
use chrono::{DateTime, Local};
use log::debug;
use rand::{rng, seq::SliceRandom, Rng};

use crate::errors::GeneratorError;
use crate::models::{render_all, RenderContext};
use crate::utils::hash;
use crate::validations::validate_url;

type Result<T> = std::result::Result<T, GeneratorError>;

/// Domain every generated URL lives under
pub const BASE_URL: &str = "https://reallylongurl.com";

/// Fewest query parameters a generated URL carries
pub const MIN_QUERY_PARAMS: usize = 50;

/// Exclusive upper bound of the query parameter count
pub const MAX_QUERY_PARAMS: usize = 72;

/// Source of the wall-clock time stamped into timestamp parameters
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Builds `<BASE_URL>/<sha256 of input>?<random selection of catalog parameters>`.
///
/// Holds no state besides its clock, so one instance can serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct LongUrlGenerator<C: Clock = SystemClock> {
    clock: C,
}

impl LongUrlGenerator {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> LongUrlGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Generates a long URL using the thread-local random source
    pub fn generate(&self, input_url: &str) -> Result<String> {
        self.generate_with_rng(input_url, &mut rng())
    }

    /// Generates a long URL drawing every random choice from `rng`.
    ///
    /// Only the identifier and the hash-derived parameters are deterministic;
    /// everything else depends on `rng` and the clock.
    pub fn generate_with_rng<R: Rng>(&self, input_url: &str, rng: &mut R) -> Result<String> {
        validate_url(input_url)?;

        // Hash the raw input, not the normalised URL
        let identifier = hash::sha256_hex(input_url);

        let ctx = RenderContext {
            original_url: input_url,
            url_hash: &identifier,
            now: self.clock.now(),
        };
        let catalog = render_all(&ctx, rng);

        let count = rng.random_range(MIN_QUERY_PARAMS..MAX_QUERY_PARAMS);
        let params = take_shuffled(catalog, count, rng);

        debug!(
            "Generated long URL for {} with id {} and {} params",
            input_url,
            identifier,
            params.len()
        );

        Ok(format!("{}/{}?{}", BASE_URL, identifier, params.join("&")))
    }
}

/// Shuffles all of `params` and keeps the first `count` (or all of them if fewer)
fn take_shuffled<R: Rng>(mut params: Vec<String>, count: usize, rng: &mut R) -> Vec<String> {
    params.shuffle(rng);
    params.truncate(count);
    params
}
