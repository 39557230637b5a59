//! Icon identifiers and their terminal glyphs

use serde::Deserialize;

/// Glyph family used when painting icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSet {
    #[default]
    Unicode,
    Ascii,
}

/// Symbolic icon name, resolved to a glyph at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    LayoutDashboard,
    BarChart,
    FileText,
    Users,
    ShoppingCart,
    Package,
    TrendingUp,
    TrendingDown,
    Settings,
    Bell,
    User,
    DollarSign,
    Activity,
    ChevronLeft,
    ChevronRight,
}

impl IconId {
    /// Single-column glyph for this icon.
    pub fn glyph(self, set: IconSet) -> &'static str {
        match set {
            IconSet::Unicode => match self {
                IconId::LayoutDashboard => "▦",
                IconId::BarChart => "▥",
                IconId::FileText => "≡",
                IconId::Users => "☺",
                IconId::ShoppingCart => "⊞",
                IconId::Package => "◫",
                IconId::TrendingUp => "↗",
                IconId::TrendingDown => "↘",
                IconId::Settings => "⚙",
                IconId::Bell => "⍾",
                IconId::User => "☻",
                IconId::DollarSign => "$",
                IconId::Activity => "∿",
                IconId::ChevronLeft => "◀",
                IconId::ChevronRight => "▶",
            },
            IconSet::Ascii => match self {
                IconId::LayoutDashboard => "#",
                IconId::BarChart => "|",
                IconId::FileText => "=",
                IconId::Users => "&",
                IconId::ShoppingCart => "+",
                IconId::Package => "%",
                IconId::TrendingUp => "^",
                IconId::TrendingDown => "v",
                IconId::Settings => "*",
                IconId::Bell => "!",
                IconId::User => "@",
                IconId::DollarSign => "$",
                IconId::Activity => "~",
                IconId::ChevronLeft => "<",
                IconId::ChevronRight => ">",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconId; 15] = [
        IconId::LayoutDashboard,
        IconId::BarChart,
        IconId::FileText,
        IconId::Users,
        IconId::ShoppingCart,
        IconId::Package,
        IconId::TrendingUp,
        IconId::TrendingDown,
        IconId::Settings,
        IconId::Bell,
        IconId::User,
        IconId::DollarSign,
        IconId::Activity,
        IconId::ChevronLeft,
        IconId::ChevronRight,
    ];

    #[test]
    fn test_every_glyph_is_one_char() {
        for icon in ALL {
            assert_eq!(icon.glyph(IconSet::Unicode).chars().count(), 1, "{icon:?}");
            assert_eq!(icon.glyph(IconSet::Ascii).chars().count(), 1, "{icon:?}");
        }
    }

    #[test]
    fn test_ascii_set_is_ascii() {
        assert!(ALL.iter().all(|icon| icon.glyph(IconSet::Ascii).is_ascii()));
    }

    #[test]
    fn test_icon_names_deserialize_kebab_case() {
        #[derive(Deserialize)]
        struct Holder {
            icon: IconId,
        }
        let holder: Holder = toml::from_str("icon = \"shopping-cart\"").unwrap();
        assert_eq!(holder.icon, IconId::ShoppingCart);
    }
}
