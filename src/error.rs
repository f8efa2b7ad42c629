use crate::engine::Dimension;
use std::path::PathBuf;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `paladar`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide how to surface the outcome; binaries use `anyhow::Result`
/// for ad-hoc context chains at the edges.
#[derive(Debug, Error)]
pub enum PaladarError {
    // ── Scoring engine ──────────────────────────────────────────────────
    #[error("engine: {0}")]
    Engine(#[from] EngineError),

    // ── Review corpus ───────────────────────────────────────────────────
    #[error("dataset: {0}")]
    Dataset(#[from] DatasetError),

    // ── Adjective scale ─────────────────────────────────────────────────
    #[error("scale: {0}")]
    Scale(#[from] ScaleError),

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Engine errors ───────────────────────────────────────────────────────────

/// Terminal pipeline outcomes. These are expected results of a lookup, not
/// bugs: the caller surfaces a not-found message and no score is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no restaurant named '{name}' in the corpus")]
    RestaurantNotFound { name: String },

    #[error("restaurant '{name}' has no review sentences")]
    NoReviews { name: String },
}

// ─── Adjective scale errors ──────────────────────────────────────────────────

/// Raised once at scale initialization; the vocabulary is fixed at build
/// time, so any of these is a design error and construction fails fast.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    #[error("adjective '{word}' has score {score}, outside 1..=5")]
    ScoreOutOfRange { word: String, score: u8 },

    #[error(
        "surface form '{form}' maps to both score {existing} and score {conflicting} \
         within the {dimension} dimension"
    )]
    AmbiguousForm {
        form: String,
        dimension: Dimension,
        existing: u8,
        conflicting: u8,
    },
}

// ─── Dataset errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("review file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsystem_errors_nest_into_the_top_level() {
        let err: PaladarError = EngineError::RestaurantNotFound {
            name: "Fasano".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "engine: no restaurant named 'Fasano' in the corpus"
        );

        let err: PaladarError = ConfigError::Validation("display_decimals".to_string()).into();
        assert!(err.to_string().starts_with("config:"));
    }

    #[test]
    fn ambiguity_message_names_form_and_dimension() {
        let err = ScaleError::AmbiguousForm {
            form: "bom".to_string(),
            dimension: Dimension::Food,
            existing: 4,
            conflicting: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("'bom'"));
        assert!(msg.contains("food"));
    }
}
