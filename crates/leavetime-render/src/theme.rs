use crate::layout::Rgb;

/// Urgency palette, theme-invariant: chosen for visibility against both
/// backgrounds. Escalation runs positive -> alert -> warning.
pub const POSITIVE: Rgb = Rgb(0x6b, 0xcb, 0x77);
pub const ALERT: Rgb = Rgb(0xff, 0xd9, 0x3d);
pub const WARNING: Rgb = Rgb(0xff, 0x6b, 0x6b);

/// Accent used for the transit line name in active headers.
pub const LINE_ACCENT: Rgb = Rgb(0xe9, 0x45, 0x60);

/// Two-entry palette keyed by the host's appearance flag.
///
/// Only these three colors vary with the theme; switching themes must never
/// change text content or node structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub text_primary: Rgb,
    pub text_subdued: Rgb,
}

impl Theme {
    pub fn resolve(is_dark: bool) -> Self {
        if is_dark {
            Theme {
                background: Rgb(0x1a, 0x1a, 0x2e),
                text_primary: Rgb(0xff, 0xff, 0xff),
                text_subdued: Rgb(0x9a, 0x9a, 0xb0),
            }
        } else {
            Theme {
                background: Rgb(0xf2, 0xf2, 0xf7),
                text_primary: Rgb(0x1c, 0x1c, 0x1e),
                text_subdued: Rgb(0x6e, 0x6e, 0x73),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_differ_only_where_they_should() {
        let dark = Theme::resolve(true);
        let light = Theme::resolve(false);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text_primary, light.text_primary);
        assert_ne!(dark.text_subdued, light.text_subdued);
    }
}
