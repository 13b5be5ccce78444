//! Configuration for a reading engine.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Delays of the reveal choreography, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// From dealing the card backs to the first flip.
    pub deal_delay_ms: u64,
    /// Gap between consecutive card flips.
    pub flip_stride_ms: u64,
    /// From a card's flip to its caption fading in.
    pub caption_delay_ms: u64,
    /// From the last flip to the interpretation panel.
    pub settle_ms: u64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            deal_delay_ms: 650,
            flip_stride_ms: 200,
            caption_delay_ms: 100,
            settle_ms: 900,
        }
    }
}

impl RevealTiming {
    /// All delays zero; every step fires on the next `advance(0)`.
    pub fn instant() -> Self {
        Self {
            deal_delay_ms: 0,
            flip_stride_ms: 0,
            caption_delay_ms: 0,
            settle_ms: 0,
        }
    }

    /// Time from start until the interpretation renders for `cards` cards.
    pub fn total_ms(&self, cards: usize) -> u64 {
        let flips = (cards.saturating_sub(1)) as u64 * self.flip_stride_ms;
        self.deal_delay_ms + flips + self.settle_ms
    }
}

/// Configuration for a reading engine.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Page path reported with analytics events.
    pub page: String,
    /// Prefix joined to each card's image path.
    pub image_base_url: String,
    /// Reveal choreography delays.
    pub timing: RevealTiming,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            page: "/".to_string(),
            image_base_url: String::new(),
            timing: RevealTiming::default(),
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the page path used in analytics.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = page.into();
        self
    }

    /// Set the card image base URL.
    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }

    /// Set the reveal timing.
    pub fn with_timing(mut self, timing: RevealTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Build the RNG described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
