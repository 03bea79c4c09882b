use std::collections::BTreeMap;

/// Stripped from the end of each title token before matching.
const TRAILING_PUNCTUATION: &[char] = &['.', '_', '!', '?', ';', ','];

/// Case-insensitive keyword counter with a fixed key set.
///
/// Every requested keyword is seeded at zero on construction; titles observed
/// afterwards only ever increment existing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTally {
    counts: BTreeMap<String, u64>,
}

impl KeywordTally {
    /// Seeds the tally with the lowercased keywords. Duplicates collapse into
    /// one key and blank keywords are ignored.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let counts = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .map(|keyword| (keyword, 0))
            .collect();

        Self { counts }
    }

    pub fn observe_title(&mut self, title: &str) {
        for token in title.to_lowercase().split_whitespace() {
            let cleaned = token.trim_end_matches(TRAILING_PUNCTUATION);
            if let Some(count) = self.counts.get_mut(cleaned) {
                *count += 1;
            }
        }
    }

    pub fn count(&self, keyword: &str) -> Option<u64> {
        self.counts.get(&keyword.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Non-zero counts, highest first, ties broken alphabetically.
    pub fn into_ranked(self) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self
            .counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect();

        ranked.sort_by(|(a_word, a_count), (b_word, b_count)| {
            b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
        });

        ranked
    }
}
