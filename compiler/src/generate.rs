//! Generation of the constant model tables from the JSON score files.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use clap::Parser;
use kugiri::compile::{self, CompiledModel, LanguageSpec, ModelSource, LANGUAGES};
use kugiri::errors::KugiriError;

#[derive(Parser, Debug)]
#[clap(
    name = "kugiri-compile",
    version,
    about = "Compiles the JSON score tables into kugiri's constant model data."
)]
pub struct Args {
    /// Directory holding the five JSON model files.
    #[clap(short = 'm', long, default_value = "models")]
    models_dir: PathBuf,

    /// File to which the generated Rust source is written.
    #[clap(short = 'o', long, default_value = "kugiri/src/models.rs")]
    out: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("{file}: {source}")]
    Model {
        file: &'static str,
        source: KugiriError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub fn run(args: Args) -> Result<(), GenerateError> {
    let mut compiled: Vec<(&LanguageSpec, CompiledModel)> = Vec::with_capacity(LANGUAGES.len());
    for spec in &LANGUAGES {
        let path = args.models_dir.join(spec.file);
        println!("Compiling {}...", path.display());
        let model = File::open(&path)
            .map_err(KugiriError::from)
            .and_then(ModelSource::from_reader)
            .and_then(|source| source.compile())
            .map_err(|source| GenerateError::Model {
                file: spec.file,
                source,
            })?;
        compiled.push((spec, model));
    }

    println!("Writing {}...", args.out.display());
    let text = compile::emit_models(&compiled);
    if let Err(e) = fs::write(&args.out, text) {
        // Never leave a truncated generated file behind.
        let _ = fs::remove_file(&args.out);
        return Err(e.into());
    }

    println!("Successfully generated {}", args.out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_generates_all_languages() {
        let dir = tempfile::tempdir().unwrap();
        for spec in &LANGUAGES {
            fs::write(
                dir.path().join(spec.file),
                r#"{"UW1": {"a": 1}, "UW2": {"b": -1}}"#,
            )
            .unwrap();
        }
        let out = dir.path().join("models.rs");
        run(Args {
            models_dir: dir.path().to_path_buf(),
            out: out.clone(),
        })
        .unwrap();

        let text = fs::read_to_string(&out).unwrap();
        for spec in &LANGUAGES {
            assert!(text.contains(&format!("pub(crate) mod {} {{", spec.module)));
        }
        assert!(text.contains("base: 0,"));
    }

    #[test]
    fn test_missing_model_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(Args {
            models_dir: dir.path().to_path_buf(),
            out: dir.path().join("models.rs"),
        })
        .unwrap_err();
        assert!(matches!(err, GenerateError::Model { .. }));
    }

    #[test]
    fn test_malformed_model_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        for spec in &LANGUAGES {
            fs::write(dir.path().join(spec.file), "{not json").unwrap();
        }
        let err = run(Args {
            models_dir: dir.path().to_path_buf(),
            out: dir.path().join("models.rs"),
        })
        .unwrap_err();
        assert!(matches!(err, GenerateError::Model { .. }));
    }
}
