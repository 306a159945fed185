use chrono::NaiveDate;
use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::lorem::raw::{Sentence, Sentences, Word};
use fake::faker::name::raw::Name;
use fake::locales::PT_BR;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Randomness source behind every generated value.
///
/// Wraps a seedable RNG plus the `fake` fakers used for names, companies and
/// filler text. Each factory owns its own `Sampler`, so concurrent factories
/// never share state. Seeding makes a whole generation run reproducible.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: ChaCha8Rng,
}

impl Sampler {
    /// Sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Sampler with a fixed seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[min, max]`.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Fixed-length digit string without a leading zero.
    pub fn digits(&mut self, len: usize) -> String {
        let mut out = String::with_capacity(len);
        for position in 0..len {
            let low = if position == 0 { 1 } else { 0 };
            let digit = self.rng.random_range(low..=9u32);
            out.push(char::from_digit(digit, 10).unwrap_or('0'));
        }
        out
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }

    /// True with the given percent chance.
    pub fn chance(&mut self, percent_true: u32) -> bool {
        self.rng.random_bool(f64::from(percent_true.min(100)) / 100.0)
    }

    /// Uniform date in the closed range `[start, end]`.
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days().max(0);
        start + chrono::Duration::days(self.rng.random_range(0..=span))
    }

    /// One sentence of filler text.
    pub fn sentence(&mut self) -> String {
        Sentence(PT_BR, 4..9).fake_with_rng(&mut self.rng)
    }

    /// Filler text with exactly `sentences` sentences.
    pub fn paragraph(&mut self, sentences: usize) -> String {
        let parts: Vec<String> = Sentences(PT_BR, sentences..sentences + 1).fake_with_rng(&mut self.rng);
        parts.join(" ")
    }

    /// Full person name.
    pub fn full_name(&mut self) -> String {
        Name(PT_BR).fake_with_rng(&mut self.rng)
    }

    /// Company name.
    pub fn company_name(&mut self) -> String {
        CompanyName(PT_BR).fake_with_rng(&mut self.rng)
    }

    /// Plausible-looking document URL.
    pub fn document_url(&mut self) -> String {
        let host: String = Word(PT_BR).fake_with_rng(&mut self.rng);
        let path: String = Word(PT_BR).fake_with_rng(&mut self.rng);
        let page: String = Word(PT_BR).fake_with_rng(&mut self.rng);
        format!("https://www.{host}.com.br/{path}/{page}.html")
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
