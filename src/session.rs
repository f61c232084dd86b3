use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::quotes;

/// Where the quote for a render comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteMode {
    /// Text typed by the user.
    Custom(String),
    /// The session's currently selected example quote.
    Random,
}

/// Session-scoped state for one user.
///
/// Holds the one-time intro flag and the selected random quote, so renders
/// never depend on ambient globals.
#[derive(Debug)]
pub struct Session {
    show_intro: bool,
    selected_quote: &'static str,
    rng: StdRng,
}

impl Session {
    pub fn new(mut rng: StdRng) -> Self {
        let selected_quote = quotes::pick(&mut rng);
        Self {
            show_intro: true,
            selected_quote,
            rng,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Returns true the first time only.
    pub fn take_intro(&mut self) -> bool {
        std::mem::replace(&mut self.show_intro, false)
    }

    pub fn selected_quote(&self) -> &'static str {
        self.selected_quote
    }

    /// Draws a new random quote and makes it the selected one.
    pub fn refresh_quote(&mut self) -> &'static str {
        self.selected_quote = quotes::pick(&mut self.rng);
        log::debug!("selected quote: {:?}", self.selected_quote);
        self.selected_quote
    }

    /// Quote text to render for `mode`, or `None` when there is nothing to
    /// draw.
    pub fn quote_for<'a>(&'a self, mode: &'a QuoteMode) -> Option<&'a str> {
        let text = match mode {
            QuoteMode::Custom(text) => text.as_str(),
            QuoteMode::Random => self.selected_quote,
        };
        let text = text.trim();
        (!text.is_empty()).then_some(text)
    }
}
