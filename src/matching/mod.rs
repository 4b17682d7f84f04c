mod closest;
mod result;

pub use closest::{closest_candidate, edit_distance, CandidateMatch, MatchStage};
pub use result::MissingEntry;

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use anyhow::Context;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::cli::{IoArgs, MatchOptions, PreprocessingOptions};
use crate::core::{AliasCatalog, AliasEntry, CandidateSet, IngredientRecord};

/*****************************************************************************/
/* Reconciliation                                                            */
/*****************************************************************************/

/// Run the full reconciliation pass: load both catalogs, scan every alias
/// entry against the candidate set, and write the missing entries to the
/// output file in catalog order. Returns the number of missing entries.
pub fn execute_reconcile(
    io_args: &IoArgs,
    prep_opts: &PreprocessingOptions,
    match_opts: &MatchOptions,
) -> anyhow::Result<usize> {
    // Load both documents immediately and eagerly so that a malformed
    // input fails the run before any output exists.
    let catalog = AliasCatalog::from_json(&io_args.alias_file)?;
    let records = IngredientRecord::from_json(&io_args.ingredient_file)?;

    let candidates = CandidateSet::from_records(&records, prep_opts);

    // Open the file for writing, failing if it already exists
    let output_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&io_args.output_file)
        .with_context(|| format!("when accessing output file {}", io_args.output_file))?;

    let missing = find_missing(&catalog, &candidates, prep_opts, match_opts);

    let mut wtr = BufWriter::new(output_file);
    for entry in &missing {
        writeln!(wtr, "{}", entry)
            .with_context(|| format!("when writing to {}", io_args.output_file))?;
    }
    wtr.flush()?;

    Ok(missing.len())
}

/// Scan the catalog in parallel. rayon's collect keeps the source order, so
/// the checklist comes out in the alias document's member order.
pub fn find_missing(
    catalog: &AliasCatalog,
    candidates: &CandidateSet,
    prep_opts: &PreprocessingOptions,
    match_opts: &MatchOptions,
) -> Vec<MissingEntry> {
    catalog
        .entries()
        .par_iter()
        .progress()
        .filter(|entry| is_missing(entry, candidates, prep_opts, match_opts))
        .map(MissingEntry::from_entry)
        .collect()
}

/// An entry is missing only when none of its options matches: any single
/// matching option keeps the entry off the checklist.
fn is_missing(
    entry: &AliasEntry,
    candidates: &CandidateSet,
    prep_opts: &PreprocessingOptions,
    match_opts: &MatchOptions,
) -> bool {
    !entry
        .options(prep_opts)
        .iter()
        .any(|option| closest_candidate(option, candidates, match_opts).is_some())
}

/*****************************************************************************/
/* Testing                                                                   */
/*****************************************************************************/
#[cfg(test)]
mod test {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    fn io_args(dir: &TempDir, aliases: &str, ingredients: &str) -> IoArgs {
        IoArgs {
            alias_file: write_file(dir, "aliases.json", aliases),
            ingredient_file: write_file(dir, "ingredients.json", ingredients),
            output_file: dir
                .path()
                .join("checklist.txt")
                .to_str()
                .unwrap()
                .to_string(),
        }
    }

    fn prep_opts() -> PreprocessingOptions {
        PreprocessingOptions {
            retain_unicode: false,
            case_sensitive: false,
        }
    }

    fn match_opts() -> MatchOptions {
        MatchOptions {
            max_edit_distance: 4,
        }
    }

    #[test]
    fn contained_alias_stays_off_the_checklist() {
        let dir = TempDir::new().unwrap();
        let io = io_args(
            &dir,
            r#"{"123": "sea salt"}"#,
            r#"[{"ingredient": "salt"}]"#,
        );

        let num_missing = execute_reconcile(&io, &prep_opts(), &match_opts()).unwrap();
        assert_eq!(num_missing, 0);
        assert_eq!(fs::read_to_string(&io.output_file).unwrap(), "");
    }

    #[test]
    fn near_miss_alias_stays_off_the_checklist() {
        let dir = TempDir::new().unwrap();
        let io = io_args(
            &dir,
            r#"{"124": "tomatoe"}"#,
            r#"[{"ingredient": "tomato"}]"#,
        );

        let num_missing = execute_reconcile(&io, &prep_opts(), &match_opts()).unwrap();
        assert_eq!(num_missing, 0);
    }

    #[test]
    fn unmatched_alias_is_listed() {
        let dir = TempDir::new().unwrap();
        let io = io_args(
            &dir,
            r#"{"125": "xylophone extract"}"#,
            r#"[{"ingredient": "salt"}, {"ingredient": "pepper"}]"#,
        );

        let num_missing = execute_reconcile(&io, &prep_opts(), &match_opts()).unwrap();
        assert_eq!(num_missing, 1);
        assert_eq!(
            fs::read_to_string(&io.output_file).unwrap(),
            "125: xylophone extract\n"
        );
    }

    #[test]
    fn any_matching_option_suffices() {
        // The first option misses by a wide margin; the second matches.
        let dir = TempDir::new().unwrap();
        let io = io_args(
            &dir,
            r#"{"126": "brimstone, black pepper"}"#,
            r#"[{"ingredient": "pepper"}]"#,
        );

        let num_missing = execute_reconcile(&io, &prep_opts(), &match_opts()).unwrap();
        assert_eq!(num_missing, 0);
    }

    #[test]
    fn checklist_preserves_alias_document_order() {
        let dir = TempDir::new().unwrap();
        let io = io_args(
            &dir,
            r#"{"900": "wolfsbane", "100": "salt", "300": "dragon fruit powder"}"#,
            r#"[{"ingredient": "salt"}]"#,
        );

        let num_missing = execute_reconcile(&io, &prep_opts(), &match_opts()).unwrap();
        assert_eq!(num_missing, 2);
        assert_eq!(
            fs::read_to_string(&io.output_file).unwrap(),
            "900: wolfsbane\n300: dragon fruit powder\n"
        );
    }

    #[test]
    fn records_without_an_ingredient_field_are_skipped() {
        let dir = TempDir::new().unwrap();
        let io = io_args(
            &dir,
            r#"{"127": "nutmeg"}"#,
            r#"[{"upc": "0001"}, {"ingredient": "nutmeg", "upc": "0002"}]"#,
        );

        let num_missing = execute_reconcile(&io, &prep_opts(), &match_opts()).unwrap();
        assert_eq!(num_missing, 0);
    }

    #[test]
    fn missing_alias_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let io = IoArgs {
            alias_file: dir.path().join("nope.json").to_str().unwrap().to_string(),
            ingredient_file: write_file(&dir, "ingredients.json", "[]"),
            output_file: dir.path().join("out.txt").to_str().unwrap().to_string(),
        };

        let err = execute_reconcile(&io, &prep_opts(), &match_opts()).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn malformed_ingredient_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let io = io_args(&dir, r#"{"128": "salt"}"#, r#"{"not": "an array"}"#);

        assert!(execute_reconcile(&io, &prep_opts(), &match_opts()).is_err());
    }

    #[test]
    fn existing_output_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let io = io_args(&dir, r#"{"129": "salt"}"#, r#"[{"ingredient": "salt"}]"#);
        fs::write(&io.output_file, "already here").unwrap();

        let err = execute_reconcile(&io, &prep_opts(), &match_opts()).unwrap_err();
        assert!(err.to_string().contains("output file"));
    }
}
