//! Tarot deck, content table and the timed reading resolver.
//!
//! The content table is a static, per-language mapping from card id to the
//! text shown on the card. It ships embedded in the binary as JSON and is
//! validated once at startup.
//!
//! A reading is not produced immediately: the resolver holds the request for
//! a fixed delay while the messenger particles fly out, then publishes the
//! complete [`Reading`]. The delay is a stored due time polled by the frame
//! loop, so no thread or timer is involved.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::error::{ContentError, ReadingError};

/// Card used when a requested id has no entry.
pub const FALLBACK_CARD: &str = "fool";

/// Seconds between a trigger and the reading becoming available.
pub const RESOLUTION_DELAY: f32 = 2.0;

/// Highest energy level a card can carry.
pub const MAX_ENERGY: u8 = 5;

const EMBEDDED_CONTENT: &str = include_str!("../assets/stellar_engine.json");

/// UI and content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Cn,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Cn => "cn",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Cn,
            Language::Cn => Language::En,
        }
    }
}

/// One card of the deck with its localized names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TarotCard {
    pub id: String,
    pub en: String,
    pub cn: String,
}

impl TarotCard {
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Cn => &self.cn,
        }
    }
}

/// The localized text attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StellarEntry {
    pub insight: String,
    pub meaning: String,
    pub action: String,
    pub energy: u8,
}

/// A complete reading, as revealed in CARD mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub card_name: String,
    pub insight: String,
    pub meaning: String,
    pub action: String,
    /// Energy level in `0..=5`.
    pub energy: u8,
}

impl Reading {
    fn new(card: &TarotCard, language: Language, entry: &StellarEntry) -> Self {
        Self {
            card_name: card.name(language).to_string(),
            insight: entry.insight.clone(),
            meaning: entry.meaning.clone(),
            action: entry.action.clone(),
            energy: entry.energy,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEntries {
    en: HashMap<String, StellarEntry>,
    cn: HashMap<String, StellarEntry>,
}

#[derive(Debug, Deserialize)]
struct RawContent {
    deck: Vec<TarotCard>,
    entries: RawEntries,
}

/// Read-only deck and per-language entries.
#[derive(Debug, Clone)]
pub struct ContentTable {
    deck: Vec<TarotCard>,
    en: HashMap<String, StellarEntry>,
    cn: HashMap<String, StellarEntry>,
}

impl ContentTable {
    /// Load the table compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: RawContent = serde_json::from_str(json)?;

        if raw.deck.is_empty() {
            return Err(ContentError::EmptyDeck);
        }
        for (language, entries) in [(Language::En, &raw.entries.en), (Language::Cn, &raw.entries.cn)] {
            if entries.is_empty() {
                return Err(ContentError::EmptyLanguage(language.code()));
            }
            if let Some((card, entry)) = entries.iter().find(|(_, e)| e.energy > MAX_ENERGY) {
                return Err(ContentError::EnergyOutOfRange {
                    card: card.clone(),
                    energy: entry.energy,
                });
            }
        }

        Ok(Self {
            deck: raw.deck,
            en: raw.entries.en,
            cn: raw.entries.cn,
        })
    }

    pub fn deck(&self) -> &[TarotCard] {
        &self.deck
    }

    pub fn card(&self, id: &str) -> Option<&TarotCard> {
        self.deck.iter().find(|card| card.id == id)
    }

    /// Pick a card uniformly at random.
    pub fn random_card<R: Rng + ?Sized>(&self, rng: &mut R) -> &TarotCard {
        // from_json rejects empty decks
        self.deck.choose(rng).unwrap_or(&self.deck[0])
    }

    fn entries(&self, language: Language) -> &HashMap<String, StellarEntry> {
        match language {
            Language::En => &self.en,
            Language::Cn => &self.cn,
        }
    }

    /// Entry for `id`, falling back to [`FALLBACK_CARD`] when unknown.
    pub fn lookup(&self, language: Language, id: &str) -> Result<&StellarEntry, ReadingError> {
        let entries = self.entries(language);
        entries
            .get(id)
            .or_else(|| entries.get(FALLBACK_CARD))
            .ok_or_else(|| ReadingError::MissingEntry {
                card: id.to_string(),
                fallback: FALLBACK_CARD,
            })
    }

    /// Build the full reading for a card in the given language.
    pub fn reading(&self, card: &TarotCard, language: Language) -> Result<Reading, ReadingError> {
        let entry = self.lookup(language, &card.id)?;
        Ok(Reading::new(card, language, entry))
    }
}

#[derive(Debug, Clone)]
struct PendingReading {
    card: TarotCard,
    due_at: f32,
}

/// Single-flight resolver for readings.
///
/// At most one request is outstanding; while it is, further requests are
/// ignored. The request completes on the first [`poll`](Self::poll) at or
/// after its due time.
#[derive(Debug, Clone)]
pub struct ReadingResolver {
    delay: f32,
    pending: Option<PendingReading>,
}

impl ReadingResolver {
    pub fn new() -> Self {
        Self::with_delay(RESOLUTION_DELAY)
    }

    pub fn with_delay(delay: f32) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Whether a request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start resolving `card`. Returns `false` if a request is already in flight.
    pub fn request(&mut self, card: TarotCard, now: f32) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingReading {
            card,
            due_at: now + self.delay,
        });
        true
    }

    /// Drop the outstanding request, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Complete the outstanding request once it is due.
    ///
    /// Returns `None` while idle or still waiting. The language is read at
    /// completion time, so a language switch during the wait is honored.
    pub fn poll(
        &mut self,
        now: f32,
        language: Language,
        content: &ContentTable,
    ) -> Option<Result<Reading, ReadingError>> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.due_at);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        Some(content.reading(&pending.card, language))
    }
}

impl Default for ReadingResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SMALL_TABLE: &str = r#"{
        "deck": [
            {"id": "fool", "en": "The Fool", "cn": "愚者"},
            {"id": "star", "en": "The Star", "cn": "星星"},
            {"id": "void", "en": "The Void", "cn": "虚空"}
        ],
        "entries": {
            "en": {
                "fool": {"insight": "Leap", "meaning": "Begin", "action": "Go", "energy": 4},
                "star": {"insight": "Hope", "meaning": "Heal", "action": "Wish", "energy": 5}
            },
            "cn": {
                "fool": {"insight": "跃", "meaning": "始", "action": "行", "energy": 4}
            }
        }
    }"#;

    fn card(table: &ContentTable, id: &str) -> TarotCard {
        table.card(id).cloned().unwrap()
    }

    #[test]
    fn test_embedded_table_loads() {
        let table = ContentTable::embedded().expect("embedded content should be valid");
        assert_eq!(table.deck().len(), 22);
        assert!(table.lookup(Language::En, FALLBACK_CARD).is_ok());
        assert!(table.lookup(Language::Cn, FALLBACK_CARD).is_ok());
        assert_eq!(table.card("fool").unwrap().en, "The Fool");

        // Every card of the deck has its own entry in both languages.
        for card in table.deck() {
            assert!(table.en.contains_key(&card.id), "missing en entry for {}", card.id);
            assert!(table.cn.contains_key(&card.id), "missing cn entry for {}", card.id);
        }
    }

    #[test]
    fn test_unknown_card_falls_back_to_fool() {
        let table = ContentTable::from_json(SMALL_TABLE).unwrap();
        let fool = table.lookup(Language::En, "fool").unwrap().clone();
        assert_eq!(table.lookup(Language::En, "no-such-card").unwrap(), &fool);

        // The card keeps its own name while borrowing the fallback text.
        let reading = table.reading(&card(&table, "void"), Language::En).unwrap();
        assert_eq!(reading.card_name, "The Void");
        assert_eq!(reading.insight, "Leap");
    }

    #[test]
    fn test_reading_uses_language() {
        let table = ContentTable::from_json(SMALL_TABLE).unwrap();
        let reading = table.reading(&card(&table, "fool"), Language::Cn).unwrap();
        assert_eq!(reading.card_name, "愚者");
        assert_eq!(reading.action, "行");
        assert_eq!(reading.energy, 4);
    }

    #[test]
    fn test_missing_fallback_is_an_error() {
        let json = SMALL_TABLE.replace("\"fool\": {\"insight\": \"跃\"", "\"sun\": {\"insight\": \"跃\"");
        let table = ContentTable::from_json(&json).unwrap();
        let err = table.reading(&card(&table, "star"), Language::Cn).unwrap_err();
        assert_eq!(
            err,
            ReadingError::MissingEntry {
                card: "star".into(),
                fallback: FALLBACK_CARD
            }
        );
    }

    #[test]
    fn test_validation_rejects_bad_tables() {
        let hot = SMALL_TABLE.replace("\"energy\": 5", "\"energy\": 9");
        assert!(matches!(
            ContentTable::from_json(&hot),
            Err(ContentError::EnergyOutOfRange { energy: 9, .. })
        ));

        let empty = r#"{"deck": [], "entries": {"en": {}, "cn": {}}}"#;
        assert!(matches!(ContentTable::from_json(empty), Err(ContentError::EmptyDeck)));

        assert!(matches!(
            ContentTable::from_json("{not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_random_card_comes_from_deck() {
        let table = ContentTable::from_json(SMALL_TABLE).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = table.random_card(&mut rng);
            assert!(table.card(&picked.id).is_some());
        }
    }

    #[test]
    fn test_resolver_waits_for_delay() {
        let table = ContentTable::from_json(SMALL_TABLE).unwrap();
        let mut resolver = ReadingResolver::new();

        assert!(resolver.request(card(&table, "star"), 10.0));
        assert!(resolver.poll(11.9, Language::En, &table).is_none());
        assert!(resolver.is_pending());

        let reading = resolver.poll(12.0, Language::En, &table).unwrap().unwrap();
        assert_eq!(reading.card_name, "The Star");
        assert!(!resolver.is_pending());
        assert!(resolver.poll(20.0, Language::En, &table).is_none());
    }

    #[test]
    fn test_resolver_is_single_flight() {
        let table = ContentTable::from_json(SMALL_TABLE).unwrap();
        let mut resolver = ReadingResolver::new();

        assert!(resolver.request(card(&table, "star"), 0.0));
        assert!(!resolver.request(card(&table, "fool"), 0.5));

        let reading = resolver.poll(3.0, Language::En, &table).unwrap().unwrap();
        assert_eq!(reading.card_name, "The Star");
    }

    #[test]
    fn test_cancel_drops_request() {
        let table = ContentTable::from_json(SMALL_TABLE).unwrap();
        let mut resolver = ReadingResolver::new();
        resolver.request(card(&table, "star"), 0.0);
        resolver.cancel();
        assert!(!resolver.is_pending());
        assert!(resolver.poll(5.0, Language::En, &table).is_none());
    }
}
