use rand::Rng;

use crate::dictionary::Dictionary;

/// Uniformly pick a headword from the ordered key list
pub fn pick_random<'a, R: Rng + ?Sized>(dict: &'a Dictionary, rng: &mut R) -> Option<&'a str> {
    if dict.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..dict.len());
    dict.word_at(index)
}

#[cfg(test)]
mod tests {
    use lugat_types::DictionaryEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        words
            .iter()
            .map(|w| (w.to_string(), DictionaryEntry::default()))
            .collect()
    }

    #[test]
    fn always_returns_a_present_key() {
        let d = dict(&["ağaç", "kalem", "tree", "su"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let word = pick_random(&d, &mut rng).unwrap();
            assert!(d.get(word).is_some());
        }
    }

    #[test]
    fn single_entry_is_deterministic() {
        let d = dict(&["tree"]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(pick_random(&d, &mut rng), Some("tree"));
        }
    }

    #[test]
    fn covers_every_key() {
        let d = dict(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..300 {
            seen.insert(pick_random(&d, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn empty_dictionary_has_no_pick() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_random(&Dictionary::new(), &mut rng), None);
    }
}
