use deunicode::deunicode;

use crate::cli::PreprocessingOptions;

/// Normalize a raw name for matching: trim surrounding whitespace,
/// transliterate unicode to ASCII unless retained, and case-fold.
pub fn normalize(raw: &str, opts: &PreprocessingOptions) -> String {
    PrepString(raw.trim().to_string())
        .deunicode(!opts.retain_unicode)
        .lowercase(!opts.case_sensitive)
        .trim()
        .0
}

/// A newtype that allows for nicer chaining of functions during text preprocessing
struct PrepString(String);

impl PrepString {
    fn deunicode(self, execute: bool) -> Self {
        if execute {
            PrepString(deunicode(&self.0))
        } else {
            self
        }
    }

    fn lowercase(self, execute: bool) -> Self {
        if execute {
            PrepString(self.0.to_lowercase())
        } else {
            self
        }
    }

    // Transliteration can introduce surrounding whitespace, so trim again last.
    fn trim(self) -> Self {
        PrepString(self.0.trim().to_string())
    }
}

/*****************************************************************************/
/* Testing                                                                   */
/*****************************************************************************/
#[cfg(test)]
mod test {
    use super::*;

    fn default_opts() -> PreprocessingOptions {
        PreprocessingOptions {
            retain_unicode: false,
            case_sensitive: false,
        }
    }

    #[test]
    fn trims_and_case_folds() {
        assert_eq!(normalize("  Sea Salt ", &default_opts()), "sea salt");
        assert_eq!(normalize("PEPPER", &default_opts()), "pepper");
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        assert_eq!(normalize(" sea  salt ", &default_opts()), "sea  salt");
    }

    #[test]
    fn transliterates_unless_retained() {
        assert_eq!(normalize("Jalapeño", &default_opts()), "jalapeno");

        let retain = PreprocessingOptions {
            retain_unicode: true,
            case_sensitive: false,
        };
        assert_eq!(normalize("Jalapeño", &retain), "jalapeño");
    }

    #[test]
    fn empty_and_blank_input_normalizes_to_empty() {
        assert_eq!(normalize("", &default_opts()), "");
        assert_eq!(normalize("   ", &default_opts()), "");
    }
}
