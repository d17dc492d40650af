use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use log::{debug, info, warn};
use parking_lot::RwLock;

use crate::core::error::{Error, ErrorKind, Result};
use crate::dict::dictionary::Dictionary;

/// Load a dictionary from disk.
///
/// Accepted layouts:
/// - a directory: every `*.txt` / `*.dic` file in it is read as a word
///   list (one phrase per line, `#` starts a comment line)
/// - a `*.fst` file: a prebuilt dictionary, memory-mapped
/// - any other file: a single word list
///
/// Fails with `ErrorKind::Load` on a missing path, unreadable file or
/// malformed content. No partially loaded dictionary is ever returned.
pub fn load(path: &Path) -> Result<Dictionary> {
    let started = Instant::now();
    if !path.exists() {
        return Err(Error::new(
            ErrorKind::Load,
            format!("dictionary path '{}' does not exist", path.display()),
        ));
    }

    let dictionary = if path.is_dir() {
        load_dir(path)?
    } else if path.extension().is_some_and(|ext| ext == "fst") {
        debug!("opening prebuilt dictionary {}", path.display());
        Dictionary::open_fst(path)?
    } else {
        let terms = read_word_list(path)?;
        Dictionary::from_terms(terms, path)?
    };

    if dictionary.is_empty() {
        warn!("dictionary '{}' contains no terms", path.display());
    }
    info!(
        "loaded {} terms (max {} syllables) from '{}' in {:?}",
        dictionary.len(),
        dictionary.max_syllables(),
        path.display(),
        started.elapsed()
    );
    Ok(dictionary)
}

fn load_dir(dir: &Path) -> Result<Dictionary> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == "txt" || ext == "dic")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(Error::new(
            ErrorKind::Load,
            format!("no word lists (*.txt, *.dic) in '{}'", dir.display()),
        ));
    }

    let mut terms = Vec::new();
    for file in &files {
        debug!("reading word list {}", file.display());
        terms.extend(read_word_list(file)?);
    }
    Dictionary::from_terms(terms, dir)
}

fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| {
        Error::new(
            ErrorKind::Load,
            format!("cannot read word list '{}': {}", path.display(), e),
        )
    })?;
    let content = String::from_utf8(bytes).map_err(|e| {
        Error::new(
            ErrorKind::Load,
            format!("word list '{}' is not valid UTF-8: {}", path.display(), e),
        )
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

static DICTIONARIES: OnceLock<RwLock<HashMap<PathBuf, Arc<Dictionary>>>> = OnceLock::new();

fn cache() -> &'static RwLock<HashMap<PathBuf, Arc<Dictionary>>> {
    DICTIONARIES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Process-wide dictionary instance for `path`, loaded on first use.
/// Concurrent callers share one immutable `Arc<Dictionary>`.
pub fn dictionary_for(path: &Path) -> Result<Arc<Dictionary>> {
    if let Some(dictionary) = cache().read().get(path) {
        debug!("dictionary cache hit for '{}'", path.display());
        return Ok(Arc::clone(dictionary));
    }

    let loaded = Arc::new(load(path)?);
    let mut map = cache().write();
    // A racing loader may have beaten us; the first insert wins so all
    // callers observe the same instance.
    let entry = map.entry(path.to_path_buf()).or_insert(loaded);
    Ok(Arc::clone(entry))
}

/// Load a fresh dictionary from `path` and atomically replace the
/// cached instance. In-flight segmentations keep the `Arc` they already
/// hold; new callers see the replacement.
pub fn reload_dictionary(path: &Path) -> Result<Arc<Dictionary>> {
    let loaded = Arc::new(load(path)?);
    cache().write().insert(path.to_path_buf(), Arc::clone(&loaded));
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_word_list(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    #[test]
    fn loads_word_lists_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_word_list(dir.path(), "a.txt", &["việt nam", "# comment", "", "hà nội"]);
        write_word_list(dir.path(), "b.dic", &["Cộng Hòa"]);
        write_word_list(dir.path(), "ignored.csv", &["not a term"]);

        let dict = load(dir.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cộng hòa"));
        assert!(!dict.contains("not a term"));
    }

    #[test]
    fn missing_path_is_a_load_error() {
        let err = load(Path::new("/nonexistent/dicts")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Load));
    }

    #[test]
    fn empty_directory_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path()).is_err());
    }

    #[test]
    fn cache_returns_shared_instance_until_reload() {
        let dir = tempfile::tempdir().unwrap();
        write_word_list(dir.path(), "words.txt", &["việt nam"]);

        let first = dictionary_for(dir.path()).unwrap();
        let second = dictionary_for(dir.path()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        write_word_list(dir.path(), "more.txt", &["hà nội"]);
        let reloaded = reload_dictionary(dir.path()).unwrap();
        assert!(!Arc::ptr_eq(&first, &reloaded));
        assert_eq!(reloaded.len(), 2);

        let cached = dictionary_for(dir.path()).unwrap();
        assert!(Arc::ptr_eq(&reloaded, &cached));
    }
}
