//! Bilingual word dictionary built from two independent avl maps.

use crate::avl_tree::AvlMap;
use std::error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::result;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// A dictionary that translates words in both directions.
///
/// Every word pair is stored twice: the forward map is keyed by the source word and the reverse
/// map is keyed by its translation. Lookups try the forward map first.
///
/// # Examples
///
/// ```
/// use avl_dictionary::dictionary::Dictionary;
///
/// let mut dictionary = Dictionary::new();
/// dictionary.insert_pair("кот", "cat");
/// dictionary.insert_pair("пёс", "dog");
///
/// assert_eq!(dictionary.translate("кот"), Some("cat"));
/// assert_eq!(dictionary.translate("dog"), Some("пёс"));
/// assert_eq!(dictionary.translate("ant"), None);
/// ```
#[derive(Debug, Default)]
pub struct Dictionary {
    forward: AvlMap<String, String>,
    reverse: AvlMap<String, String>,
}

impl Dictionary {
    /// Constructs a new, empty `Dictionary`.
    pub fn new() -> Self {
        Dictionary {
            forward: AvlMap::new(),
            reverse: AvlMap::new(),
        }
    }

    /// Adds a word pair to both maps. A word that is already present gets its translation
    /// replaced.
    pub fn insert_pair<S, T>(&mut self, source: S, target: T)
    where
        S: Into<String>,
        T: Into<String>,
    {
        let source = source.into();
        let target = target.into();
        self.forward.insert(source.clone(), target.clone());
        self.reverse.insert(target, source);
    }

    /// Reads whitespace-separated words from `reader` and adds them two at a time as
    /// `(source, target)` pairs. Returns the number of pairs read. A trailing word without a
    /// partner is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_dictionary::dictionary::Dictionary;
    ///
    /// let mut dictionary = Dictionary::new();
    /// let pairs = dictionary.load("кот cat\nпёс dog\n".as_bytes()).unwrap();
    /// assert_eq!(pairs, 2);
    /// assert_eq!(dictionary.translate("cat"), Some("кот"));
    /// ```
    pub fn load<R>(&mut self, reader: R) -> Result<usize>
    where
        R: BufRead,
    {
        let mut pairs = 0;
        let mut pending: Option<String> = None;

        for line in reader.lines() {
            for word in line?.split_whitespace() {
                match pending.take() {
                    None => pending = Some(word.to_string()),
                    Some(source) => {
                        debug!("Loaded pair {} - {}.", source, word);
                        self.insert_pair(source, word);
                        pairs += 1;
                    },
                }
            }
        }

        if let Some(word) = pending {
            warn!("Ignoring unpaired trailing word {:?}.", word);
        }
        info!(
            "Loaded {} word pairs; tree heights are {} and {}.",
            pairs,
            self.forward.height(),
            self.reverse.height(),
        );
        Ok(pairs)
    }

    /// Opens the file at `path` and loads it with `load`.
    pub fn load_from_path<P>(&mut self, path: P) -> Result<usize>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        info!("Loading dictionary from {}.", path.display());
        let file = File::open(path)?;
        self.load(BufReader::new(file))
    }

    /// Returns the translation of `word`, looking it up as a source word first and as a
    /// translation second.
    pub fn translate(&self, word: &str) -> Option<&str> {
        self.forward
            .get(word)
            .or_else(|| self.reverse.get(word))
            .map(String::as_str)
    }

    /// Returns the map from source words to translations.
    pub fn forward(&self) -> &AvlMap<String, String> {
        &self.forward
    }

    /// Returns the map from translations to source words.
    pub fn reverse(&self) -> &AvlMap<String, String> {
        &self.reverse
    }

    /// Returns the heights of the forward and reverse trees.
    pub fn heights(&self) -> (usize, usize) {
        (self.forward.height(), self.reverse.height())
    }

    /// Returns the number of distinct source words.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Writes both trees in key order, one `key - value` line per entry.
    pub fn write_trees<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(out, "Forward tree:")?;
        write_tree(&self.forward, out)?;
        writeln!(out)?;
        writeln!(out, "Reverse tree:")?;
        write_tree(&self.reverse, out)
    }
}

fn write_tree<W>(map: &AvlMap<String, String>, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    for (key, value) in map {
        writeln!(out, "{} - {}", key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Dictionary, Error};
    use std::io::{self, BufRead, Read};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    impl BufRead for FailingReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }

        fn consume(&mut self, _: usize) {}
    }

    #[test]
    fn test_empty() {
        let dictionary = Dictionary::new();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.heights(), (0, 0));
        assert_eq!(dictionary.translate("cat"), None);
    }

    #[test]
    fn test_load_pairs_across_lines() {
        let mut dictionary = Dictionary::new();
        let input = "кот cat\n\n  пёс\tdog пчела\nbee\n";
        assert_eq!(dictionary.load(input.as_bytes()).unwrap(), 3);
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.translate("пчела"), Some("bee"));
        assert_eq!(dictionary.translate("dog"), Some("пёс"));
        assert_eq!(dictionary.heights(), (2, 2));
    }

    #[test]
    fn test_load_unpaired_word() {
        let mut dictionary = Dictionary::new();
        assert_eq!(dictionary.load("кот cat пёс".as_bytes()).unwrap(), 1);
        assert_eq!(dictionary.translate("пёс"), None);
        assert_eq!(dictionary.translate("кот"), Some("cat"));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let mut dictionary = Dictionary::new();
        let input: &[u8] = &[0x6b, 0x6f, 0x20, 0xff, 0xfe, 0x0a];
        match dictionary.load(input) {
            Err(Error::IOError(error)) => assert_eq!(error.kind(), io::ErrorKind::InvalidData),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_load_read_failure() {
        let mut dictionary = Dictionary::new();
        let error = dictionary.load(FailingReader).unwrap_err();
        assert_eq!(error.to_string(), "disk on fire");
    }

    #[test]
    fn test_load_missing_file() {
        let mut dictionary = Dictionary::new();
        match dictionary.load_from_path("does/not/exist.txt") {
            Err(Error::IOError(error)) => assert_eq!(error.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_forward_lookup_wins() {
        let mut dictionary = Dictionary::new();
        dictionary.insert_pair("bank", "берег");
        dictionary.insert_pair("банк", "bank");
        assert_eq!(dictionary.translate("bank"), Some("берег"));
        assert_eq!(dictionary.reverse().get("bank").map(String::as_str), Some("банк"));
    }

    #[test]
    fn test_last_pair_wins() {
        let mut dictionary = Dictionary::new();
        dictionary.insert_pair("лук", "onion");
        dictionary.insert_pair("лук", "bow");
        assert_eq!(dictionary.translate("лук"), Some("bow"));
        assert_eq!(dictionary.forward().len(), 1);
        assert_eq!(dictionary.reverse().len(), 2);
    }

    #[test]
    fn test_write_trees() {
        let mut dictionary = Dictionary::new();
        dictionary.insert_pair("пёс", "dog");
        dictionary.insert_pair("кот", "cat");

        let mut out = Vec::new();
        dictionary.write_trees(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Forward tree:\nкот - cat\nпёс - dog\n\nReverse tree:\ncat - кот\ndog - пёс\n",
        );
    }
}
