//! Runtime configuration

use crate::error::{GameError, Result};
use crate::stats::JsonFileStore;
use crate::wordlists::{WordBank, loader::load_from_file};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

pub const DEFAULT_STORE_PATH: &str = "wordle_stats.jsonl";

/// Where the word bank comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordListSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl FromStr for WordListSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub word_list: WordListSource,
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list: WordListSource::Embedded,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl Config {
    /// Load the word bank once for the life of the process
    ///
    /// # Errors
    ///
    /// `Configuration` if the word file cannot be read or yields no words.
    pub async fn load_word_bank(&self) -> Result<WordBank> {
        let bank = match &self.word_list {
            WordListSource::Embedded => WordBank::embedded()?,
            WordListSource::File(path) => {
                let words = load_from_file(path).await.map_err(|e| {
                    GameError::Configuration(format!(
                        "cannot read word list {}: {e}",
                        path.display()
                    ))
                })?;
                WordBank::new(words)?
            }
        };
        info!(words = bank.len(), "word bank loaded");
        Ok(bank)
    }

    #[must_use]
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn word_list_source_parsing() {
        assert_eq!("embedded".parse::<WordListSource>(), Ok(WordListSource::Embedded));
        assert_eq!(
            "words.txt".parse::<WordListSource>(),
            Ok(WordListSource::File(PathBuf::from("words.txt")))
        );
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.word_list, WordListSource::Embedded);
        assert_eq!(config.open_store().path(), PathBuf::from(DEFAULT_STORE_PATH));
    }

    #[tokio::test]
    async fn loads_word_bank_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "river\ncrane").unwrap();
        let config = Config {
            word_list: WordListSource::File(file.path().to_path_buf()),
            ..Config::default()
        };

        let bank = config.load_word_bank().await.unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[tokio::test]
    async fn empty_word_file_is_configuration_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config {
            word_list: WordListSource::File(file.path().to_path_buf()),
            ..Config::default()
        };

        assert!(matches!(
            config.load_word_bank().await,
            Err(GameError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn missing_word_file_is_configuration_error() {
        let config = Config {
            word_list: WordListSource::File(PathBuf::from("/nonexistent/words.txt")),
            ..Config::default()
        };

        assert!(matches!(
            config.load_word_bank().await,
            Err(GameError::Configuration(_))
        ));
    }
}
