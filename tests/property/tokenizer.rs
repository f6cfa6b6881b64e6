//! Tokenizer invariants.

use std::sync::Arc;

use alignqa::{Stopwords, Tokenizer, TokenizerConfig};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

fn splitting(config: TokenizerConfig) -> Tokenizer {
    Tokenizer::new(config.with_split_hyphenated(true), Arc::new(Stopwords::empty()))
}

proptest! {
    /// A hyphenated token yields itself and every part.
    #[test]
    fn prop_hyphen_split_is_union(parts in prop::collection::vec(word(), 2..5)) {
        let joined = parts.join("-");
        for config in [TokenizerConfig::whitespace(), TokenizerConfig::linguistic()] {
            let set = splitting(config).token_set(&joined);
            prop_assert!(set.contains(&joined));
            for part in &parts {
                prop_assert!(set.contains(part));
            }
        }
    }

    /// Whitespace mode never invents or loses characters.
    #[test]
    fn prop_whitespace_tokens_rejoin(words in prop::collection::vec("[^\\s]{1,6}", 0..8)) {
        let text = words.join("  ");
        let tokenizer = Tokenizer::new(TokenizerConfig::whitespace(), Arc::new(Stopwords::empty()));
        let tokens: Vec<String> = tokenizer.tokens(&text).collect();
        prop_assert_eq!(tokens, words);
    }

    /// A token set has no duplicates and every token of the stream.
    #[test]
    fn prop_token_set_is_distinct(words in prop::collection::vec(word(), 0..12)) {
        let tokenizer = Tokenizer::new(TokenizerConfig::whitespace(), Arc::new(Stopwords::empty()));
        let text = words.join(" ");
        let set = tokenizer.token_set(&text);
        let mut seen = std::collections::HashSet::new();
        for term in set.iter() {
            prop_assert!(seen.insert(term));
        }
        for w in &words {
            prop_assert!(set.contains(w));
        }
    }
}
