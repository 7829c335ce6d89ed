use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The fixed set of themes a category can use.
///
/// Serializes as the capitalized name (`"Default"`, `"Blue"`, ...), which is
/// also what the theme dropdown in the shell hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeName {
    #[default]
    Default,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

/// Resolved display colors for one theme, keyed by role.
///
/// `main` fills tab buttons and the item frame, `active` marks the selected
/// tab, `accent` and `hover` color action buttons, `text` is the label color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub main: String,
    pub active: String,
    pub accent: String,
    pub hover: String,
    pub text: String,
}

impl Palette {
    fn new(main: &str, active: &str, accent: &str, hover: &str, text: &str) -> Self {
        Self {
            main: main.to_string(),
            active: active.to_string(),
            accent: accent.to_string(),
            hover: hover.to_string(),
            text: text.to_string(),
        }
    }
}

static DEFAULT: Lazy<Palette> =
    Lazy::new(|| Palette::new("#454545", "#606060", "#404040", "#606060", "#EBEBEB"));

static RED: Lazy<Palette> =
    Lazy::new(|| Palette::new("#352929", "#685050", "#C53737", "#B86161", "#DADADA"));

static GREEN: Lazy<Palette> =
    Lazy::new(|| Palette::new("#2B352C", "#526858", "#2E9E44", "#6FBF7E", "#DADADA"));

static BLUE: Lazy<Palette> =
    Lazy::new(|| Palette::new("#3B4155", "#565E7A", "#2373EB", "#7CA7E7", "#DADADA"));

static YELLOW: Lazy<Palette> =
    Lazy::new(|| Palette::new("#35322A", "#68624F", "#D4A012", "#DFC065", "#DADADA"));

static PURPLE: Lazy<Palette> =
    Lazy::new(|| Palette::new("#322A3C", "#5C4F6E", "#8A3FD1", "#AB7EDE", "#DADADA"));

impl ThemeName {
    /// Every selectable theme, in dropdown order.
    pub const ALL: [ThemeName; 6] = [
        ThemeName::Default,
        ThemeName::Red,
        ThemeName::Green,
        ThemeName::Blue,
        ThemeName::Yellow,
        ThemeName::Purple,
    ];

    /// The display name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Red => "Red",
            ThemeName::Green => "Green",
            ThemeName::Blue => "Blue",
            ThemeName::Yellow => "Yellow",
            ThemeName::Purple => "Purple",
        }
    }

    /// Look a theme up by its display name. Names are exact; there is no
    /// fuzzy or case-insensitive matching.
    pub fn from_name(name: &str) -> Option<ThemeName> {
        ThemeName::ALL.into_iter().find(|t| t.name() == name)
    }

    /// The resolved palette record for this theme.
    ///
    /// Resolution happens once at creation or re-theme time; callers cache
    /// the cloned palette on the category rather than calling this per draw.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeName::Default => &DEFAULT,
            ThemeName::Red => &RED,
            ThemeName::Green => &GREEN,
            ThemeName::Blue => &BLUE,
            ThemeName::Yellow => &YELLOW,
            ThemeName::Purple => &PURPLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_theme() {
        for theme in ThemeName::ALL {
            assert_eq!(ThemeName::from_name(theme.name()), Some(theme));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown_and_miscased_names() {
        assert_eq!(ThemeName::from_name("Magenta"), None);
        assert_eq!(ThemeName::from_name("blue"), None);
        assert_eq!(ThemeName::from_name(""), None);
    }

    #[test]
    fn test_palettes_are_well_formed_hex() {
        for theme in ThemeName::ALL {
            let palette = theme.palette();
            for color in [
                &palette.main,
                &palette.active,
                &palette.accent,
                &palette.hover,
                &palette.text,
            ] {
                assert!(color.starts_with('#') && color.len() == 7, "{}", color);
            }
        }
    }

    #[test]
    fn test_blue_palette_values() {
        let palette = ThemeName::Blue.palette();
        assert_eq!(palette.accent, "#2373EB");
        assert_eq!(palette.main, "#3B4155");
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_value(ThemeName::Purple).unwrap();
        assert_eq!(json, serde_json::json!("Purple"));

        let back: ThemeName = serde_json::from_value(serde_json::json!("Default")).unwrap();
        assert_eq!(back, ThemeName::Default);
    }
}
