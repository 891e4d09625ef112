//! Color themes for the vkbd virtual keyboard.
//!
//! Two built-in themes, `dark` and `light`, each mapping the keyboard's
//! visual roles to style classes. Both are compile-time constants shared
//! read-only by every caller.

mod colors;
mod error;
mod kind;

pub use colors::KeyboardTheme;
pub use error::ThemeError;
pub use kind::ThemeKind;

static THEME_DARK: KeyboardTheme = KeyboardTheme::DARK;
static THEME_LIGHT: KeyboardTheme = KeyboardTheme::LIGHT;

/// Get the built-in theme for `kind`.
pub fn get_theme(kind: ThemeKind) -> &'static KeyboardTheme {
    match kind {
        ThemeKind::Dark => &THEME_DARK,
        ThemeKind::Light => &THEME_LIGHT,
    }
}

/// Get a built-in theme by its runtime name.
///
/// Fails with [`ThemeError::InvalidThemeKind`] for anything other than
/// `dark` or `light`.
pub fn get_theme_by_name(name: &str) -> Result<&'static KeyboardTheme, ThemeError> {
    match name.parse() {
        Ok(kind) => Ok(get_theme(kind)),
        Err(e) => {
            vkbd_logger::warn(format!("Theme lookup failed: {}", e));
            Err(e)
        }
    }
}

impl KeyboardTheme {
    /// Get list of all built-in themes, in [`ThemeKind::ALL`] order.
    pub fn all_themes() -> Vec<&'static KeyboardTheme> {
        ThemeKind::ALL.into_iter().map(get_theme).collect()
    }

    /// Get list of all theme names, in [`ThemeKind::ALL`] order.
    pub fn all_theme_names() -> Vec<&'static str> {
        ThemeKind::ALL.into_iter().map(ThemeKind::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_values() {
        let dark = get_theme(ThemeKind::Dark);
        assert_eq!(dark.bg_color, "bg-[#67666b]");
        assert_eq!(dark.key_bg_color, "bg-[#161920]");
        assert_eq!(dark.key_text_color, "text-[#c2c5ca]");
        assert_eq!(dark.key_active_bg_color, "bg-[#1f2125]");
        assert_eq!(dark.border_color, "border-transparent");
        assert_eq!(dark.key_inset_border_color, "border-b-zinc-700");
    }

    #[test]
    fn test_light_theme_values() {
        let light = get_theme(ThemeKind::Light);
        assert_eq!(light.bg_color, "bg-[#c0c1c3]");
        assert_eq!(light.key_bg_color, "bg-[#f0f1f3]");
        assert_eq!(light.key_text_color, "text-[#aaabad]");
        assert_eq!(light.key_active_bg_color, "bg-[#eeeeee]");
        assert_eq!(light.border_color, "border-transparent");
        assert_eq!(light.key_inset_border_color, "border-b-gray-400");
    }

    #[test]
    fn test_every_kind_fully_populated() {
        for kind in ThemeKind::ALL {
            let fields = get_theme(kind).fields();
            assert_eq!(fields.len(), 6);
            for (name, value) in fields {
                assert!(!value.is_empty(), "{kind}.{name} is empty");
            }
        }
    }

    #[test]
    fn test_repeated_lookup_is_stable() {
        for kind in ThemeKind::ALL {
            let first = get_theme(kind);
            let second = get_theme(kind);
            assert_eq!(first, second);
            assert!(std::ptr::eq(first, second));
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(get_theme_by_name("dark"), Ok(&KeyboardTheme::DARK));
        assert_eq!(get_theme_by_name("light"), Ok(&KeyboardTheme::LIGHT));
        assert_eq!(
            get_theme_by_name("midnight"),
            Err(ThemeError::InvalidThemeKind("midnight".to_string()))
        );
    }

    #[test]
    fn test_all_theme_names_follow_kinds() {
        let names = KeyboardTheme::all_theme_names();
        assert_eq!(names, vec!["dark", "light"]);
        assert_eq!(names.len(), ThemeKind::ALL.len());
        for (kind, name) in ThemeKind::ALL.into_iter().zip(&names) {
            assert_eq!(kind.as_str(), *name);
        }
    }

    #[test]
    fn test_all_themes_match_names() {
        let themes = KeyboardTheme::all_themes();
        let names = KeyboardTheme::all_theme_names();
        assert_eq!(themes.len(), names.len());
        for (theme, name) in themes.into_iter().zip(names) {
            assert_eq!(Ok(theme), get_theme_by_name(name));
        }
    }

    #[test]
    fn test_themes_differ() {
        assert_ne!(KeyboardTheme::DARK, KeyboardTheme::LIGHT);
    }
}
