//! Error types describing the failure modes of molecule adaptation and the shift store.
//!
//! Malformed SMILES and missing chunk artifacts are the only two failure
//! modes that propagate as `Err`. An absent HOSE entry, an unrecognized
//! nucleus string, and a zero-count weighted average are *not* errors —
//! they resolve to `None` or a defined default, never a `Result::Err`.

use thiserror::Error;

/// Root error for every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The input SMILES string could not be parsed.
    #[error("failed to parse SMILES")]
    Molecule(#[from] MoleculeError),

    /// A chunk of the shift store could not be loaded.
    #[error("failed to load shift store chunk")]
    Store(#[from] StoreError),

    /// A configuration document could not be read or parsed.
    #[error("failed to load configuration")]
    Config(#[from] ConfigError),
}

/// Errors raised while turning a SMILES string into a queryable molecule.
#[derive(Debug, Error)]
pub enum MoleculeError {
    /// The external SMILES reader rejected the input.
    #[error("malformed SMILES '{smiles}': {message}")]
    InvalidSmiles {
        /// The SMILES string that failed to parse.
        smiles: String,
        /// Human-readable reason reported by the underlying reader.
        message: String,
    },
}

/// Errors raised while loading or addressing shards of the shift store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The artifact backing a chunk index could not be read.
    #[error("missing or unreadable chunk artifact for chunk {index:03}")]
    ChunkUnavailable {
        /// Index (0–255) of the chunk that failed to load.
        index: u16,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The artifact backing a chunk index was read but did not parse.
    #[error("malformed chunk artifact for chunk {index:03}")]
    ChunkMalformed {
        /// Index (0–255) of the chunk whose payload failed to parse.
        index: u16,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while loading the tunable configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read configuration file")]
    Io(#[from] std::io::Error),

    /// The configuration document did not parse as valid TOML matching the
    /// expected shape.
    #[error("malformed configuration document")]
    Parse(#[from] toml::de::Error),
}
