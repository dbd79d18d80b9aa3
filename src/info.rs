//! Static dataset metadata and record schema
//!
//! Pure data: description, homepage, license, and citation as published
//! with the corpus, plus the typed feature schema of one record.

use serde::Serialize;

use crate::dataset::Label;

const DESCRIPTION: &str = "\
== 日本語SNLI(JSNLI)データセット ==

SNLI コーパスを日本語に翻訳した自然言語推論データセット
学習データは元データを翻訳し、計算機によるフィルタリングによって作成
評価データは日本語として意味が通るか、翻訳後のラベルが元のラベルと一致しているかどうかの2段階のクラウドソーシングによりデータをフィルタリング
";

const HOMEPAGE: &str =
    "https://nlp.ist.i.kyoto-u.ac.jp/?%E6%97%A5%E6%9C%AC%E8%AA%9ESNLI%28JSNLI%29%E3%83%87%E3%83%BC%E3%82%BF%E3%82%BB%E3%83%83%E3%83%88";

const LICENSE: &str = "CC BY-SA 4.0";

const CITATION: &str = "\
- 吉越 卓見, 河原 大輔, 黒橋 禎夫: 機械翻訳を用いた自然言語推論データセットの多言語化, 第244回自然言語処理研究会, (2020.7.3).
- Samuel R. Bowman, Gabor Angeli, Christopher Potts, and Christopher D. Manning. 2015. A large annotated corpus for learning natural language inference. In Proceedings of the 2015 Conference on Empirical Methods in Natural Language Processing (EMNLP).
- Peter Young, Alice Lai, Micah Hodosh, and Julia Hockenmaier. \"From image descriptions to visual denotations: New similarity metrics for semantic inference over event descriptions.\" Transactions of the Association for Computational Linguistics 2 (2014): 67-78.
";

/// Feature type of one record column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Feature {
    /// Free text
    Text,
    /// Categorical value drawn from a fixed, ordered set of class names
    ClassLabel { names: &'static [&'static str] },
}

/// Record schema: premise and hypothesis text plus a categorical label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Features {
    pub premise: Feature,
    pub hypothesis: Feature,
    pub label: Feature,
}

impl Features {
    /// The NLI record schema
    #[must_use]
    pub fn nli() -> Self {
        Self {
            premise: Feature::Text,
            hypothesis: Feature::Text,
            label: Feature::ClassLabel { names: &Label::NAMES },
        }
    }
}

/// Static dataset metadata
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub description: &'static str,
    pub homepage: &'static str,
    pub license: &'static str,
    pub citation: &'static str,
    pub features: Features,
}

impl DatasetInfo {
    /// Metadata for the JSNLI corpus
    #[must_use]
    pub fn jsnli() -> Self {
        Self {
            description: DESCRIPTION,
            homepage: HOMEPAGE,
            license: LICENSE,
            citation: CITATION,
            features: Features::nli(),
        }
    }
}
