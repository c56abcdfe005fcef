/// The screen currently shown in the window. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Menu,
    CircleSizing,
    CoinReference,
    Detection,
}

impl View {
    /// Window title for this screen.
    pub fn title(self) -> &'static str {
        match self {
            View::Menu => "Main Menu",
            View::CircleSizing => "Circle Sizing",
            View::CoinReference => "Coin Reference",
            View::Detection => "Circle Detection",
        }
    }

    /// Where the "Return to Menu" button leads.
    pub fn back(self) -> View {
        View::Menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_menu() {
        assert_eq!(View::default(), View::Menu);
        assert_eq!(View::default().title(), "Main Menu");
    }

    #[test]
    fn titles_are_distinct() {
        let views = [
            View::Menu,
            View::CircleSizing,
            View::CoinReference,
            View::Detection,
        ];
        for (i, a) in views.iter().enumerate() {
            for b in &views[i + 1..] {
                assert_ne!(a.title(), b.title());
            }
        }
    }

    #[test]
    fn every_screen_returns_to_menu() {
        assert_eq!(View::CircleSizing.back(), View::Menu);
        assert_eq!(View::CoinReference.back(), View::Menu);
        assert_eq!(View::Detection.back(), View::Menu);
    }
}
