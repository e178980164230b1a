//! Horizontal layout direction and its detection from locale tags.

/// Scripts written right to left.
const RTL_SCRIPTS: &[&str] = &[
    "arab", "hebr", "thaa", "syrc", "nkoo", "adlm", "rohg", "mand", "samr", "mend", "yezi",
];

/// Languages whose default script is written right to left.
/// `iw` and `ji` are the legacy codes for Hebrew and Yiddish.
const RTL_LANGUAGES: &[&str] = &[
    "ar", "bal", "ckb", "dv", "fa", "glk", "he", "iw", "ji", "ks", "lrc", "mzn", "pnb", "ps", "sd",
    "sdh", "syr", "ug", "ur", "yi",
];

/// Direction in which a row of items is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        self == LayoutDirection::Rtl
    }

    /// Resolves the direction of a locale tag.
    ///
    /// Accepts BCP-47 (`ar-EG`, `az-Latn-AZ`) and POSIX (`he_IL.UTF-8@euro`)
    /// forms. An explicit script subtag wins over the language.
    pub fn from_locale(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        let mut subtags = tag.split(['-', '_']).filter(|s| !s.is_empty());

        let Some(language) = subtags.next() else {
            return LayoutDirection::Ltr;
        };

        let script = subtags.find(|s| s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic()));
        let rtl = match script {
            Some(script) => RTL_SCRIPTS.contains(&script.to_ascii_lowercase().as_str()),
            None => RTL_LANGUAGES.contains(&language.to_ascii_lowercase().as_str()),
        };

        if rtl {
            LayoutDirection::Rtl
        } else {
            LayoutDirection::Ltr
        }
    }

    /// Direction of the process locale at call time.
    ///
    /// Falls back to [`LayoutDirection::Ltr`] when the platform reports no locale.
    pub fn current() -> Self {
        match sys_locale::get_locale() {
            Some(locale) => {
                let direction = Self::from_locale(&locale);
                log::trace!("Locale {locale} resolves to {direction:?}");
                direction
            }
            None => {
                log::trace!("No system locale reported, assuming left-to-right");
                LayoutDirection::Ltr
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl_languages() {
        for tag in ["ar", "ar-EG", "he-IL", "iw", "fa_IR", "ur-PK", "yi"] {
            assert_eq!(LayoutDirection::from_locale(tag), LayoutDirection::Rtl, "{tag}");
        }
    }

    #[test]
    fn test_rtl_languages_with_regional_scripts() {
        for tag in ["ks", "ks-IN", "pnb", "mzn_IR", "lrc", "sdh", "bal", "ckb-IQ"] {
            assert_eq!(LayoutDirection::from_locale(tag), LayoutDirection::Rtl, "{tag}");
        }
    }

    #[test]
    fn test_ltr_languages() {
        for tag in ["en", "en-US", "zh-Hans-CN", "ru_RU", "ja"] {
            assert_eq!(LayoutDirection::from_locale(tag), LayoutDirection::Ltr, "{tag}");
        }
    }

    #[test]
    fn test_script_overrides_language() {
        assert_eq!(LayoutDirection::from_locale("az-Arab"), LayoutDirection::Rtl);
        assert_eq!(LayoutDirection::from_locale("pa-Arab-PK"), LayoutDirection::Rtl);
        assert_eq!(LayoutDirection::from_locale("ar-Latn"), LayoutDirection::Ltr);
    }

    #[test]
    fn test_posix_locale() {
        assert_eq!(
            LayoutDirection::from_locale("he_IL.UTF-8@euro"),
            LayoutDirection::Rtl
        );
        assert_eq!(LayoutDirection::from_locale("C.UTF-8"), LayoutDirection::Ltr);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(LayoutDirection::from_locale("AR-eg"), LayoutDirection::Rtl);
        assert_eq!(LayoutDirection::from_locale("sd-ARAB"), LayoutDirection::Rtl);
    }

    #[test]
    fn test_empty_tag_is_ltr() {
        assert_eq!(LayoutDirection::from_locale(""), LayoutDirection::Ltr);
        assert_eq!(LayoutDirection::from_locale("-"), LayoutDirection::Ltr);
        assert!(!LayoutDirection::default().is_rtl());
    }

    #[test]
    fn test_current_does_not_panic() {
        let _ = LayoutDirection::current();
    }
}
