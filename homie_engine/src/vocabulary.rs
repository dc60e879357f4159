//! Word to thing resolution.
//!
//! Built once from thing names. Early things keep their words: "plate" belongs to the clean
//! plate until an event or rule rebinds it to whichever plate currently stands for it.

use std::collections::HashMap;

use homie_data::ThingId;
use log::{debug, info};

use crate::world::HomieWorld;

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: HashMap<String, ThingId>,
}

impl Vocabulary {
    /// Bind every whitespace-separated word of every thing's name, first writer wins.
    pub fn from_world(world: &HomieWorld) -> Vocabulary {
        let mut words = HashMap::new();
        for thing in world.things() {
            for word in thing.name.to_lowercase().split_whitespace() {
                words.entry(word.to_string()).or_insert(thing.id);
            }
        }
        debug!("vocabulary built with {} words", words.len());
        Vocabulary { words }
    }

    /// Look up a (lowercase) word. Unknown words are simply `None`.
    pub fn resolve(&self, word: &str) -> Option<ThingId> {
        self.words.get(word).copied()
    }

    /// Point a word at a different thing, adding it if it was unbound.
    pub fn rebind(&mut self, word: &str, thing: ThingId) {
        info!("vocabulary: '{word}' now refers to {thing}");
        self.words.insert(word.to_string(), thing);
    }

    /// Resolve each word in order, dropping the ones that mean nothing. Duplicates are kept.
    pub fn resolve_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<ThingId> {
        words.iter().filter_map(|w| self.resolve(w.as_ref())).collect()
    }

    /// All bound words, sorted. Used for tab completion.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.keys().cloned().collect();
        words.sort();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_world;

    #[test]
    fn first_writer_wins() {
        let vocab = Vocabulary::from_world(&test_world());
        assert_eq!(vocab.resolve("plate"), Some(ThingId::CleanPlate));
        assert_eq!(vocab.resolve("dirty"), Some(ThingId::DirtyPlate));
        assert_eq!(vocab.resolve("desk"), Some(ThingId::EmptyDesk));
        assert_eq!(vocab.resolve("your"), Some(ThingId::YourDesk));
        assert_eq!(vocab.resolve("james"), Some(ThingId::James));
        assert_eq!(vocab.resolve("trash"), Some(ThingId::TrashBin));
        assert_eq!(vocab.resolve("bin"), Some(ThingId::TrashBin));
    }

    #[test]
    fn unknown_word_is_none() {
        let vocab = Vocabulary::from_world(&test_world());
        assert_eq!(vocab.resolve("unicorn"), None);
        assert_eq!(vocab.resolve(""), None);
    }

    #[test]
    fn rebind_overrides_existing_binding() {
        let mut vocab = Vocabulary::from_world(&test_world());
        vocab.rebind("plate", ThingId::RinsedPlate);
        assert_eq!(vocab.resolve("plate"), Some(ThingId::RinsedPlate));
        assert_eq!(vocab.resolve("clean"), Some(ThingId::CleanPlate));
    }

    #[test]
    fn resolve_all_keeps_order_and_duplicates() {
        let vocab = Vocabulary::from_world(&test_world());
        let things = vocab.resolve_all(&["mop", "the", "hair", "mop"]);
        assert_eq!(things, vec![ThingId::Mop, ThingId::Hair, ThingId::Mop]);
    }
}
