//! Offline compilation of JSON score tables into constant model data.
//!
//! A model arrives as a JSON document whose top-level keys are the thirteen
//! table names (`UW1`..`UW6`, `BW1`..`BW3`, `TW1`..`TW4`) and whose values
//! map short strings to integer scores. [`ModelSource`] parses such a
//! document, [`ModelSource::compile`] packs every key into a single
//! binary-searchable integer and derives the base score, and
//! [`emit_models`] renders the compiled tables as the Rust source of the
//! crate's `models` module.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use crate::errors::{KugiriError, Result};
use crate::model::{pack2, pack3};

/// Identification of one supported language: its JSON file name, its cargo
/// feature, and the name of its generated module.
pub struct LanguageSpec {
    /// File name of the JSON model.
    pub file: &'static str,
    /// Cargo feature gating the language.
    pub feature: &'static str,
    /// Name of the generated module.
    pub module: &'static str,
}

/// The five supported languages, in emission order.
pub const LANGUAGES: [LanguageSpec; 5] = [
    LanguageSpec {
        file: "ja.json",
        feature: "ja",
        module: "ja",
    },
    LanguageSpec {
        file: "ja_knbc.json",
        feature: "ja-knbc",
        module: "ja_knbc",
    },
    LanguageSpec {
        file: "th.json",
        feature: "th",
        module: "th",
    },
    LanguageSpec {
        file: "zh-hans.json",
        feature: "zh-hans",
        module: "zh_hans",
    },
    LanguageSpec {
        file: "zh-hant.json",
        feature: "zh-hant",
        module: "zh_hant",
    },
];

/// Raw, string-keyed score tables as found in a model JSON document.
///
/// A table absent from the document is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ModelSource {
    #[serde(rename = "UW1", default)]
    uw1: BTreeMap<String, i32>,
    #[serde(rename = "UW2", default)]
    uw2: BTreeMap<String, i32>,
    #[serde(rename = "UW3", default)]
    uw3: BTreeMap<String, i32>,
    #[serde(rename = "UW4", default)]
    uw4: BTreeMap<String, i32>,
    #[serde(rename = "UW5", default)]
    uw5: BTreeMap<String, i32>,
    #[serde(rename = "UW6", default)]
    uw6: BTreeMap<String, i32>,
    #[serde(rename = "BW1", default)]
    bw1: BTreeMap<String, i32>,
    #[serde(rename = "BW2", default)]
    bw2: BTreeMap<String, i32>,
    #[serde(rename = "BW3", default)]
    bw3: BTreeMap<String, i32>,
    #[serde(rename = "TW1", default)]
    tw1: BTreeMap<String, i32>,
    #[serde(rename = "TW2", default)]
    tw2: BTreeMap<String, i32>,
    #[serde(rename = "TW3", default)]
    tw3: BTreeMap<String, i32>,
    #[serde(rename = "TW4", default)]
    tw4: BTreeMap<String, i32>,
}

impl ModelSource {
    /// Parses a model document from a reader.
    ///
    /// # Errors
    ///
    /// [`KugiriError::Json`] when the document is not valid JSON, its top
    /// level is not an object, or a leaf value is not an integer.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        Ok(serde_json::from_reader(rdr)?)
    }

    /// Parses a model document from a string.
    ///
    /// # Errors
    ///
    /// See [`ModelSource::from_reader`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Packs and sorts every table and derives the base score.
    ///
    /// # Errors
    ///
    /// [`KugiriError::InvalidKey`] when a key's code-point count does not
    /// match its table's rank. Keys outside one to three code points are
    /// silently discarded rather than rejected.
    pub fn compile(&self) -> Result<CompiledModel> {
        let uw = [
            compile_unigrams("UW1", &self.uw1)?,
            compile_unigrams("UW2", &self.uw2)?,
            compile_unigrams("UW3", &self.uw3)?,
            compile_unigrams("UW4", &self.uw4)?,
            compile_unigrams("UW5", &self.uw5)?,
            compile_unigrams("UW6", &self.uw6)?,
        ];
        let bw = [
            compile_ngrams("BW1", &self.bw1, 2)?,
            compile_ngrams("BW2", &self.bw2, 2)?,
            compile_ngrams("BW3", &self.bw3, 2)?,
        ];
        let tw = [
            compile_ngrams("TW1", &self.tw1, 3)?,
            compile_ngrams("TW2", &self.tw2, 3)?,
            compile_ngrams("TW3", &self.tw3, 3)?,
            compile_ngrams("TW4", &self.tw4, 3)?,
        ];

        let mut total: i64 = 0;
        for table in &uw {
            total += table.iter().map(|&(_, s)| i64::from(s)).sum::<i64>();
        }
        for table in bw.iter().chain(&tw) {
            total += table.iter().map(|&(_, s)| i64::from(s)).sum::<i64>();
        }
        let base = i32::try_from(-total)?;

        Ok(CompiledModel { uw, bw, tw, base })
    }
}

/// A compiled language model: thirteen strictly-ascending key-sorted tables
/// plus the base score.
pub struct CompiledModel {
    /// Unigram tables UW1..UW6.
    pub uw: [Vec<(u32, i32)>; 6],
    /// Bigram tables BW1..BW3.
    pub bw: [Vec<(u64, i32)>; 3],
    /// Trigram tables TW1..TW4.
    pub tw: [Vec<(u64, i32)>; 4],
    /// Negated sum of all scores across the thirteen tables.
    pub base: i32,
}

/// Decodes a table key, enforcing its rank.
///
/// `Ok(None)` means the key is to be discarded.
fn key_chars(table: &str, key: &str, rank: usize) -> Result<Option<Vec<char>>> {
    let chars: Vec<char> = key.chars().collect();
    if chars.is_empty() || chars.len() > 3 {
        return Ok(None);
    }
    if chars.len() != rank {
        return Err(KugiriError::invalid_key(
            table,
            format!(
                "key {key:?} has {} code points, expected {rank}",
                chars.len()
            ),
        ));
    }
    Ok(Some(chars))
}

fn compile_unigrams(name: &str, entries: &BTreeMap<String, i32>) -> Result<Vec<(u32, i32)>> {
    let mut packed = BTreeMap::new();
    for (key, &score) in entries {
        if let Some(chars) = key_chars(name, key, 1)? {
            packed.insert(chars[0] as u32, score);
        }
    }
    Ok(packed.into_iter().collect())
}

fn compile_ngrams(
    name: &str,
    entries: &BTreeMap<String, i32>,
    rank: usize,
) -> Result<Vec<(u64, i32)>> {
    let mut packed = BTreeMap::new();
    for (key, &score) in entries {
        if let Some(chars) = key_chars(name, key, rank)? {
            let packed_key = if rank == 2 {
                pack2(chars[0] as u32, chars[1] as u32)
            } else {
                pack3(chars[0] as u32, chars[1] as u32, chars[2] as u32)
            };
            packed.insert(packed_key, score);
        }
    }
    Ok(packed.into_iter().collect())
}

/// Renders the Rust source of the crate's `models` module: one feature-gated
/// module per language, each holding a `static MODEL`.
pub fn emit_models(models: &[(&LanguageSpec, CompiledModel)]) -> String {
    let mut out = String::new();
    out.push_str("// @generated by kugiri-compiler from the JSON score tables in models/.\n");
    out.push_str("// Run `cargo run -p kugiri-compiler` to regenerate. Do not edit by hand.\n");
    for (spec, model) in models {
        out.push('\n');
        out.push_str(&format!("#[cfg(feature = \"{}\")]\n", spec.feature));
        out.push_str(&format!("pub(crate) mod {} {{\n", spec.module));
        out.push_str("    use crate::model::Model;\n\n");
        out.push_str("    pub(crate) static MODEL: Model = Model {\n");
        for (i, table) in model.uw.iter().enumerate() {
            emit_table(&mut out, &format!("uw{}", i + 1), table.iter().map(|&(k, s)| (u64::from(k), s)));
        }
        for (i, table) in model.bw.iter().enumerate() {
            emit_table(&mut out, &format!("bw{}", i + 1), table.iter().copied());
        }
        for (i, table) in model.tw.iter().enumerate() {
            emit_table(&mut out, &format!("tw{}", i + 1), table.iter().copied());
        }
        out.push_str(&format!("        base: {},\n", model.base));
        out.push_str("    };\n");
        out.push_str("}\n");
    }
    out
}

fn emit_table<I>(out: &mut String, field: &str, entries: I)
where
    I: ExactSizeIterator<Item = (u64, i32)>,
{
    if entries.len() == 0 {
        out.push_str(&format!("        {field}: &[],\n"));
        return;
    }
    out.push_str(&format!("        {field}: &[\n"));
    for (key, score) in entries {
        out.push_str(&format!("            ({key:#x}, {score}),\n"));
    }
    out.push_str("        ],\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_sorts_and_packs() {
        let source = ModelSource::from_json(
            r#"{
                "UW1": {"い": 2, "あ": 1},
                "BW2": {"あい": 3},
                "TW4": {"あいう": -4}
            }"#,
        )
        .unwrap();
        let model = source.compile().unwrap();
        assert_eq!(model.uw[0], [(0x3042, 1), (0x3044, 2)]);
        assert_eq!(model.bw[1], [(pack2(0x3042, 0x3044), 3)]);
        assert_eq!(model.tw[3], [(pack3(0x3042, 0x3044, 0x3046), -4)]);
        assert!(model.uw[1].is_empty());
    }

    #[test]
    fn test_base_identity() {
        let source = ModelSource::from_json(
            r#"{
                "UW1": {"a": 10, "b": -3},
                "UW5": {"c": 5},
                "BW1": {"xy": -7},
                "TW2": {"xyz": 9}
            }"#,
        )
        .unwrap();
        let model = source.compile().unwrap();
        assert_eq!(model.base, -(10 - 3 + 5 - 7 + 9));
    }

    #[test]
    fn test_overlong_key_discarded() {
        let source = ModelSource::from_json(r#"{"UW1": {"abcd": 7, "a": 1}}"#).unwrap();
        let model = source.compile().unwrap();
        assert_eq!(model.uw[0], [(0x61, 1)]);
    }

    #[test]
    fn test_rank_mismatch_rejected() {
        let source = ModelSource::from_json(r#"{"UW1": {"ab": 7}}"#).unwrap();
        assert!(matches!(
            source.compile(),
            Err(KugiriError::InvalidKey { .. })
        ));

        let source = ModelSource::from_json(r#"{"TW1": {"ab": 7}}"#).unwrap();
        assert!(source.compile().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ModelSource::from_json("{"),
            Err(KugiriError::Json(_))
        ));
        assert!(ModelSource::from_json("[1, 2]").is_err());
        assert!(ModelSource::from_json(r#"{"UW1": {"a": "x"}}"#).is_err());
        assert!(ModelSource::from_json(r#"{"UW1": {"a": 1.5}}"#).is_err());
    }

    #[test]
    fn test_missing_tables_are_empty() {
        let source = ModelSource::from_json("{}").unwrap();
        let model = source.compile().unwrap();
        assert!(model.uw.iter().all(Vec::is_empty));
        assert!(model.bw.iter().all(Vec::is_empty));
        assert!(model.tw.iter().all(Vec::is_empty));
        assert_eq!(model.base, 0);
    }

    #[test]
    fn test_emit_format() {
        let source =
            ModelSource::from_json(r#"{"UW1": {"あ": 1}, "BW2": {"ab": -2}}"#).unwrap();
        let model = source.compile().unwrap();
        let out = emit_models(&[(&LANGUAGES[0], model)]);
        assert!(out.starts_with("// @generated"));
        assert!(out.contains("#[cfg(feature = \"ja\")]\n"));
        assert!(out.contains("pub(crate) mod ja {\n"));
        assert!(out.contains("            (0x3042, 1),\n"));
        assert!(out.contains(&format!(
            "            ({:#x}, -2),\n",
            pack2(0x61, 0x62)
        )));
        assert!(out.contains("        uw2: &[],\n"));
        assert!(out.contains("        base: 1,\n"));
        assert!(out.ends_with("    };\n}\n"));
    }
}
