use super::error::Error;
use dioxus::logger::tracing::debug;

const CHECK_GLYPH: &str = "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z";

const ERROR_GLYPH: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";

// No artwork exists for warning yet.
const WARNING_GLYPH: &str = "";

/// Maps icon keys to 20x20 SVG path data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconCatalog {
    entries: &'static [(&'static str, &'static str)],
}

pub static ICONS: IconCatalog = IconCatalog {
    entries: &[
        ("check", CHECK_GLYPH),
        ("error", ERROR_GLYPH),
        ("warning", WARNING_GLYPH),
    ],
};

impl IconCatalog {
    pub fn lookup(&self, key: &str) -> Result<&'static str, Error> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, glyph)| *glyph)
            .ok_or_else(|| Error::UnknownIconKey(key.to_string()))
    }

    /// Unknown keys resolve to an empty glyph.
    pub fn resolve(&self, key: &str) -> &'static str {
        match self.lookup(key) {
            Ok(glyph) => glyph,
            Err(e) => {
                debug!("{}, rendering without a glyph", e);
                ""
            }
        }
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        ICONS
    }
}

pub fn resolve_icon(key: &str) -> &'static str {
    ICONS.resolve(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_glyphs() {
        assert_eq!(resolve_icon("check"), CHECK_GLYPH);
        assert_eq!(resolve_icon("error"), ERROR_GLYPH);
        assert!(!resolve_icon("check").is_empty());
        assert!(!resolve_icon("error").is_empty());
        assert_ne!(resolve_icon("check"), resolve_icon("error"));
    }

    #[test]
    fn test_warning_has_no_glyph() {
        assert_eq!(ICONS.lookup("warning"), Ok(""));
        assert_eq!(resolve_icon("warning"), "");
    }

    #[test]
    fn test_unknown_key_defaults_to_empty() {
        assert_eq!(resolve_icon("nonexistent"), "");
        assert_eq!(resolve_icon(""), "");
        assert_eq!(
            ICONS.lookup("nonexistent"),
            Err(Error::UnknownIconKey("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(ICONS.lookup("Check").is_err());
    }

    #[test]
    fn test_default_catalog_is_builtin() {
        assert_eq!(IconCatalog::default(), ICONS);
        assert_eq!(IconCatalog::default().resolve("error"), ERROR_GLYPH);
    }
}
