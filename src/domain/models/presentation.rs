use super::scroll::ScrollState;

/// Class names for each navbar element, expanded at the top of the page
/// and compact once scrolled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPresentation {
    pub bar: &'static str,
    pub logo: &'static str,
    pub title: &'static str,
    pub cta: &'static str,
    pub item: &'static str,
}

impl NavPresentation {
    pub fn for_state(state: ScrollState) -> Self {
        if state.is_scrolled() {
            NavPresentation {
                bar: "c-navbar c-navbar--compact",
                logo: "c-navbar__logo c-navbar__logo--compact",
                title: "c-navbar__title c-navbar__title--compact",
                cta: "c-navbar__cta c-navbar__cta--compact",
                item: "c-navbar__item c-navbar__item--compact",
            }
        } else {
            NavPresentation {
                bar: "c-navbar",
                logo: "c-navbar__logo",
                title: "c-navbar__title",
                cta: "c-navbar__cta",
                item: "c-navbar__item",
            }
        }
    }

    /// Collapse menu class; always shown on wide screens via CSS
    pub fn menu(open: bool) -> &'static str {
        if open {
            "c-navbar__menu c-navbar__menu--open"
        } else {
            "c-navbar__menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_has_no_compact_modifiers() {
        let p = NavPresentation::for_state(ScrollState::TOP);
        for class in [p.bar, p.logo, p.title, p.cta, p.item] {
            assert!(!class.contains("--compact"), "{}", class);
        }
    }

    #[test]
    fn test_scrolled_compacts_every_element() {
        let p = NavPresentation::for_state(ScrollState::SCROLLED);
        for class in [p.bar, p.logo, p.title, p.cta, p.item] {
            assert!(class.ends_with("--compact"), "{}", class);
        }
    }

    #[test]
    fn test_menu_open_modifier() {
        assert_eq!(NavPresentation::menu(false), "c-navbar__menu");
        assert!(NavPresentation::menu(true).contains("c-navbar__menu--open"));
    }
}
