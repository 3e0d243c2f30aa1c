use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::rng::SplitGen;

/// Description of how to build a root generator, as found in a seed document.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum SeedSource {
    /// Raw state words. Without `gamma` the golden-ratio stream is used.
    Word { seed: u64, gamma: Option<u64> },
    /// Arbitrary bytes folded through [`SplitGen::from_bytes`].
    Bytes(Vec<u8>),
    /// UTF-8 text folded through [`SplitGen::from_bytes`].
    Text(String),
}

impl SeedSource {
    /// Load a seed JSON document from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open seed file {:?}", path))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Deserialize a seed document from an arbitrary reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("invalid seed json")
    }

    /// Realise the root generator described by this source.
    pub fn build(&self) -> Result<SplitGen> {
        let gen = match self {
            Self::Word {
                seed,
                gamma: Some(gamma),
            } => SplitGen::try_with_gamma(*seed, *gamma)
                .with_context(|| format!("seed word {seed} has an unusable gamma"))?,
            Self::Word { seed, gamma: None } => SplitGen::new(*seed),
            Self::Bytes(bytes) => SplitGen::from_bytes(bytes),
            Self::Text(text) => SplitGen::from_bytes(text.as_bytes()),
        };
        debug!(
            kind = self.kind(),
            seed = gen.seed(),
            gamma = gen.gamma(),
            "built root generator"
        );
        Ok(gen)
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Word { .. } => "word",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
        }
    }
}
