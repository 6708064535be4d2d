//! Chooses one message per cycle from the catalog, the dynamic generator and
//! the promo list, skipping anything the history remembers.

use crate::catalog::{Catalog, Language};
use crate::config::{Config, LanguageMode};
use crate::generator;
use crate::history::History;
use crate::message::{Message, MessageKind};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

pub struct SelectorSettings {
    pub language: LanguageMode,
    pub dynamic: bool,
    pub promo_min: u32,
    pub promo_max: u32,
}

impl From<&Config> for SelectorSettings {
    fn from(config: &Config) -> Self {
        Self {
            language: config.language,
            dynamic: config.dynamic,
            promo_min: config.promo_min,
            promo_max: config.promo_max,
        }
    }
}

pub struct Selector<R: Rng> {
    settings: SelectorSettings,
    promo_counter: u32,
    rng: R,
}

impl<R: Rng> Selector<R> {
    pub fn new(settings: SelectorSettings, rng: R) -> Self {
        Self {
            settings,
            promo_counter: 0,
            rng,
        }
    }

    /// Cycles since the last promo was shown.
    pub fn promo_counter(&self) -> u32 {
        self.promo_counter
    }

    /// Runs one selection: bumps the promo counter, builds and shuffles the
    /// pool, picks a message and records it in `history`.
    pub fn select(&mut self, history: &mut History) -> Message {
        self.promo_counter += 1;

        let language = self.pick_language();
        let mut pool = self.build_pool(language);
        pool.shuffle(&mut self.rng);

        let chosen = self.choose(pool, history);
        if chosen.is_promo() {
            self.promo_counter = 0;
        }
        chosen
    }

    fn pick_language(&mut self) -> Language {
        match self.settings.language {
            LanguageMode::Fixed(language) => language,
            LanguageMode::Mixed => *Language::ALL
                .choose(&mut self.rng)
                .unwrap_or(&Language::English),
        }
    }

    /// Fixed quotes, one fresh dynamic message, and a promo when the counter
    /// has reached this cycle's randomly drawn threshold.
    pub fn build_pool(&mut self, language: Language) -> Vec<Message> {
        let catalog = Catalog::for_language(language);

        let mut pool: Vec<Message> = catalog
            .quotes
            .iter()
            .map(|quote| Message::new(*quote, MessageKind::Fixed, language))
            .collect();

        if self.settings.dynamic {
            let text = generator::generate(catalog, &mut self.rng);
            pool.push(Message::new(text, MessageKind::Dynamic, language));
        }

        let threshold = self
            .rng
            .gen_range(self.settings.promo_min..=self.settings.promo_max);
        if self.promo_counter >= threshold {
            if let Some(promo) = catalog.promos.choose(&mut self.rng) {
                debug!(
                    counter = self.promo_counter,
                    threshold, "Promo eligible this cycle"
                );
                pool.push(Message::new(*promo, MessageKind::Promo, language));
            }
        }

        pool
    }

    /// Returns the first candidate, in pool order, that the history does not
    /// remember. If every candidate is recent, falls back to a uniformly
    /// random one. Either way the choice is remembered.
    ///
    /// Panics on an empty pool; catalogs always contribute fixed quotes.
    pub fn choose(&mut self, mut pool: Vec<Message>, history: &mut History) -> Message {
        let fresh = pool.iter().position(|m| !history.is_recent(&m.text));
        let index = match fresh {
            Some(index) => index,
            None => {
                debug!("Every candidate is recent, picking one at random");
                self.rng.gen_range(0..pool.len())
            }
        };

        let chosen = pool.swap_remove(index);
        history.remember(&chosen.text);
        chosen
    }
}
