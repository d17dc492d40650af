use std::fs::File;
use std::path::{Path, PathBuf};

use fst::{Set, SetBuilder, Streamer};
use memmap2::{Mmap, MmapOptions};

use crate::core::error::{Error, ErrorKind, Result};

/// Backing bytes of a compiled dictionary: either built in memory from
/// word lists or mapped read-only from a prebuilt file.
enum DictData {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl AsRef<[u8]> for DictData {
    fn as_ref(&self) -> &[u8] {
        match self {
            DictData::Owned(bytes) => bytes.as_slice(),
            DictData::Mapped(mmap) => &mmap[..],
        }
    }
}

/// Immutable phrase dictionary supporting longest-match lookups.
///
/// Entries are lowercase phrases whose syllables are joined by a single
/// space. The dictionary is never mutated after construction; share it
/// as `Arc<Dictionary>` and build a new one to pick up changes.
pub struct Dictionary {
    set: Set<DictData>,
    max_syllables: usize,
    term_count: usize,
    source: PathBuf,
}

impl Dictionary {
    /// Build a dictionary from raw terms. Terms are normalized
    /// (lowercased, inner whitespace collapsed), deduplicated and
    /// compiled into an FST.
    pub fn from_terms<I, S>(terms: I, source: impl Into<PathBuf>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = terms
            .into_iter()
            .map(|term| normalize_term(term.as_ref()))
            .filter(|term| !term.is_empty())
            .collect();
        normalized.sort();
        normalized.dedup();

        let max_syllables = normalized
            .iter()
            .map(|term| syllable_count(term))
            .max()
            .unwrap_or(0);
        let term_count = normalized.len();

        // FST construction requires sorted input
        let mut builder = SetBuilder::memory();
        for term in &normalized {
            builder.insert(term.as_bytes())?;
        }
        let bytes = builder
            .into_inner()
            .map_err(|e| Error::new(ErrorKind::Load, format!("FST build failed: {}", e)))?;
        let set = Set::new(DictData::Owned(bytes))?;

        Ok(Dictionary {
            set,
            max_syllables,
            term_count,
            source: source.into(),
        })
    }

    /// Open a prebuilt FST dictionary file without reading it into
    /// memory. The key statistics are recovered by streaming the set
    /// once.
    pub fn open_fst(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::new(
                ErrorKind::Load,
                format!("cannot open dictionary '{}': {}", path.display(), e),
            )
        })?;
        let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|e| {
            Error::new(
                ErrorKind::Load,
                format!("cannot map dictionary '{}': {}", path.display(), e),
            )
        })?;
        let set = Set::new(DictData::Mapped(mmap))?;

        let mut max_syllables = 0;
        let mut term_count = 0;
        let mut stream = set.stream();
        while let Some(key) = stream.next() {
            let syllables = key.iter().filter(|&&b| b == b' ').count() + 1;
            max_syllables = max_syllables.max(syllables);
            term_count += 1;
        }

        Ok(Dictionary {
            set,
            max_syllables,
            term_count,
            source: path.to_path_buf(),
        })
    }

    /// Exact lookup of a normalized phrase.
    pub fn contains(&self, phrase: &str) -> bool {
        self.set.contains(phrase.as_bytes())
    }

    /// Length in syllables of the longest dictionary entry matching a
    /// prefix of `syllables`, probing longest-first. Syllables must
    /// already be lowercased.
    pub fn longest_match(&self, syllables: &[&str]) -> Option<usize> {
        let upper = self.max_syllables.min(syllables.len());
        let mut candidate = String::new();
        for take in (1..=upper).rev() {
            candidate.clear();
            for (i, syllable) in syllables[..take].iter().enumerate() {
                if i > 0 {
                    candidate.push(' ');
                }
                candidate.push_str(syllable);
            }
            if self.set.contains(candidate.as_bytes()) {
                return Some(take);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.term_count
    }

    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Longest entry in the dictionary, in syllables.
    pub fn max_syllables(&self) -> usize {
        self.max_syllables
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("source", &self.source)
            .field("term_count", &self.term_count)
            .field("max_syllables", &self.max_syllables)
            .finish()
    }
}

/// Lowercase and collapse inner whitespace to single spaces.
pub fn normalize_term(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn syllable_count(term: &str) -> usize {
    term.split(' ').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_terms(
            ["việt nam", "cộng hòa", "xã hội", "chủ nghĩa", "hà nội", "xã"],
            "test",
        )
        .unwrap()
    }

    #[test]
    fn normalizes_and_dedups_terms() {
        let dict = Dictionary::from_terms(["Việt  Nam", "việt nam", "  "], "test").unwrap();
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("việt nam"));
        assert!(!dict.contains("Việt Nam"));
    }

    #[test]
    fn longest_match_prefers_longer_entries() {
        let dict = sample();
        assert_eq!(dict.longest_match(&["xã", "hội", "chủ"]), Some(2));
        assert_eq!(dict.longest_match(&["xã", "nam"]), Some(1));
        assert_eq!(dict.longest_match(&["hội", "xã"]), None);
        assert_eq!(dict.max_syllables(), 2);
    }

    #[test]
    fn empty_dictionary_never_matches() {
        let dict = Dictionary::from_terms(Vec::<String>::new(), "test").unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict.longest_match(&["việt", "nam"]), None);
    }
}
