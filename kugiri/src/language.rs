//! Supported languages and their pretrained models.

use crate::model::Model;
#[allow(unused_imports)]
use crate::models;

/// Selector of a pretrained language model.
///
/// Each variant exists only when the corresponding crate feature is enabled,
/// so a language that was compiled out cannot be requested at all.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Language {
    /// Japanese.
    #[cfg(feature = "ja")]
    Ja,
    /// Japanese, trained on the KNBC corpus.
    #[cfg(feature = "ja-knbc")]
    JaKnbc,
    /// Thai.
    #[cfg(feature = "th")]
    Th,
    /// Simplified Chinese.
    #[cfg(feature = "zh-hans")]
    ZhHans,
    /// Traditional Chinese.
    #[cfg(feature = "zh-hant")]
    ZhHant,
}

impl Language {
    /// Returns the pretrained score tables for this language.
    pub fn model(self) -> &'static Model {
        match self {
            #[cfg(feature = "ja")]
            Self::Ja => &models::ja::MODEL,
            #[cfg(feature = "ja-knbc")]
            Self::JaKnbc => &models::ja_knbc::MODEL,
            #[cfg(feature = "th")]
            Self::Th => &models::th::MODEL,
            #[cfg(feature = "zh-hans")]
            Self::ZhHans => &models::zh_hans::MODEL,
            #[cfg(feature = "zh-hant")]
            Self::ZhHant => &models::zh_hant::MODEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_languages() -> Vec<Language> {
        let mut langs = Vec::new();
        #[cfg(feature = "ja")]
        langs.push(Language::Ja);
        #[cfg(feature = "ja-knbc")]
        langs.push(Language::JaKnbc);
        #[cfg(feature = "th")]
        langs.push(Language::Th);
        #[cfg(feature = "zh-hans")]
        langs.push(Language::ZhHans);
        #[cfg(feature = "zh-hant")]
        langs.push(Language::ZhHant);
        langs
    }

    fn tables(m: &Model) -> (Vec<&'static [(u32, i32)]>, Vec<&'static [(u64, i32)]>) {
        (
            vec![m.uw1, m.uw2, m.uw3, m.uw4, m.uw5, m.uw6],
            vec![m.bw1, m.bw2, m.bw3, m.tw1, m.tw2, m.tw3, m.tw4],
        )
    }

    #[test]
    fn test_base_is_negated_table_sum() {
        for lang in all_languages() {
            let m = lang.model();
            let (unigrams, ngrams) = tables(m);
            let mut sum: i64 = 0;
            for table in unigrams {
                sum += table.iter().map(|&(_, s)| i64::from(s)).sum::<i64>();
            }
            for table in ngrams {
                sum += table.iter().map(|&(_, s)| i64::from(s)).sum::<i64>();
            }
            assert_eq!(i64::from(m.base) + sum, 0, "{lang:?}");
        }
    }

    #[test]
    fn test_tables_strictly_ascending() {
        for lang in all_languages() {
            let m = lang.model();
            let (unigrams, ngrams) = tables(m);
            for table in unigrams {
                assert!(table.windows(2).all(|w| w[0].0 < w[1].0), "{lang:?}");
            }
            for table in ngrams {
                assert!(table.windows(2).all(|w| w[0].0 < w[1].0), "{lang:?}");
            }
        }
    }
}
