use serde::Deserialize;

use crate::common::SimError;

const DEFAULT_START_PC: u32 = 4000;
const DEFAULT_MEMORY_WORDS: usize = 4000;
const DEFAULT_DUMP_WORDS: usize = 100;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub memory: MemoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, SimError> {
        let content = std::fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SimError::ConfigParse {
            path: path.to_string(),
            source,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub trace_instructions: bool,
    pub start_pc: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: DEFAULT_START_PC,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub size_words: usize,
    pub dump_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_words: DEFAULT_MEMORY_WORDS,
            dump_words: DEFAULT_DUMP_WORDS,
        }
    }
}
