use anyhow::anyhow;
use getset::Getters;
use itertools::Itertools;
use serde::Deserialize;

use crate::cli::PreprocessingOptions;
use crate::core::io::{map_from_json, vec_from_json};
use crate::preprocess::normalize;

/******************************************************************************/
/* Catalog types                                                              */
/******************************************************************************/

/// A catalog code paired with the raw comma-separated list of name variants,
/// exactly as written in the alias document.
#[derive(Debug, Getters)]
pub struct AliasEntry {
    #[getset(get = "pub")]
    code: String,
    #[getset(get = "pub")]
    names: String,
}

impl AliasEntry {
    pub fn new(code: String, names: String) -> Self {
        AliasEntry { code, names }
    }

    /// The normalized name variants of this entry, in their written order.
    pub fn options(&self, prep_opts: &PreprocessingOptions) -> Vec<String> {
        self.names
            .split(',')
            .map(|option| normalize(option, prep_opts))
            .collect()
    }
}

/// Alias entries in the alias document's member order. The order is
/// observable: missing entries are reported in it.
#[derive(Debug, Getters)]
pub struct AliasCatalog {
    #[getset(get = "pub")]
    entries: Vec<AliasEntry>,
}

impl AliasCatalog {
    pub fn from_json(file_path: &str) -> anyhow::Result<Self> {
        let members = map_from_json(file_path)?;

        let entries = members
            .into_iter()
            .map(|(code, value)| match value.as_str() {
                Some(names) => Ok(AliasEntry::new(code, names.to_string())),
                None => Err(anyhow!(
                    "alias for code {} in {} is not a string",
                    code,
                    file_path
                )),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(AliasCatalog { entries })
    }
}

/// An ingredient record as it appears in the records document. Only the
/// `ingredient` field matters; records without it are skipped.
#[derive(Debug, Deserialize)]
pub struct IngredientRecord {
    #[serde(default)]
    ingredient: Option<String>,
}

impl IngredientRecord {
    pub fn from_json(file_path: &str) -> anyhow::Result<Vec<Self>> {
        vec_from_json(file_path)
    }

    pub fn ingredient(&self) -> Option<&str> {
        self.ingredient.as_deref()
    }
}

/// Normalized canonical names, deduplicated with the first occurrence
/// winning. An explicit ordered sequence rather than a hash set: "first
/// candidate" is part of the matching contract, so iteration order must be
/// stable.
#[derive(Debug, Getters)]
pub struct CandidateSet {
    #[getset(get = "pub")]
    names: Vec<String>,
}

impl CandidateSet {
    /// Build from already-normalized names. Names that normalized to the
    /// empty string are dropped so they can never satisfy a containment
    /// probe.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let names = names
            .into_iter()
            .filter(|name| !name.is_empty())
            .unique()
            .collect();

        CandidateSet { names }
    }

    pub fn from_records(records: &[IngredientRecord], prep_opts: &PreprocessingOptions) -> Self {
        Self::new(
            records
                .iter()
                .filter_map(|record| record.ingredient())
                .map(|name| normalize(name, prep_opts)),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/*****************************************************************************/
/* Testing                                                                   */
/*****************************************************************************/
