//! Click targets routed through in-page scrolling

/// A click the page forwards to the controller.
///
/// Each element gets one listener and one classification, see
/// [`ClickTarget::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget<'a> {
    /// Navigation entry with its `href`.
    NavLink { href: &'a str },
    /// Call-to-action button with its visible text. A button that is also
    /// a fragment link carries its `href` as the fallback target.
    Button {
        label: &'a str,
        href: Option<&'a str>,
    },
    /// Any other `a[href^="#"]` link.
    Anchor { href: &'a str },
}

impl<'a> ClickTarget<'a> {
    /// Classify a clicked element.
    ///
    /// Nav links win over buttons, buttons over plain anchors. Returns
    /// `None` for an element that is none of the three.
    pub fn classify(
        is_nav: bool,
        is_cta: bool,
        href: Option<&'a str>,
        label: &'a str,
    ) -> Option<Self> {
        let fragment = href.filter(|h| h.starts_with('#'));
        if is_nav {
            return Some(ClickTarget::NavLink {
                href: href.unwrap_or_default(),
            });
        }
        if is_cta {
            return Some(ClickTarget::Button {
                label,
                href: fragment,
            });
        }
        fragment.map(|href| ClickTarget::Anchor { href })
    }
}

/// What the host should do with the native event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Suppress the browser's default action.
    Intercepted,
    /// Leave the event to the browser.
    PassThrough,
}

impl ClickOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, ClickOutcome::Intercepted)
    }
}

/// Section id a nav link points at: its href with the `#` removed.
pub(crate) fn nav_link_target(href: &str) -> String {
    href.replacen('#', "", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_target() {
        assert_eq!(nav_link_target("#about"), "about");
        assert_eq!(nav_link_target("about"), "about");
        assert_eq!(nav_link_target("#"), "");
    }

    #[test]
    fn test_nav_link_that_is_also_an_anchor_is_a_nav_link() {
        assert_eq!(
            ClickTarget::classify(true, false, Some("#about"), "About"),
            Some(ClickTarget::NavLink { href: "#about" })
        );
        // Nav wins even over the button class
        assert_eq!(
            ClickTarget::classify(true, true, Some("#about"), "About"),
            Some(ClickTarget::NavLink { href: "#about" })
        );
    }

    #[test]
    fn test_cta_anchor_is_one_button_with_fallback_href() {
        assert_eq!(
            ClickTarget::classify(false, true, Some("#contact"), "Let's Connect"),
            Some(ClickTarget::Button {
                label: "Let's Connect",
                href: Some("#contact"),
            })
        );
        assert_eq!(
            ClickTarget::classify(false, true, Some("/cv.pdf"), "Download CV"),
            Some(ClickTarget::Button {
                label: "Download CV",
                href: None,
            })
        );
    }

    #[test]
    fn test_plain_links() {
        assert_eq!(
            ClickTarget::classify(false, false, Some("#projects"), "Projects"),
            Some(ClickTarget::Anchor { href: "#projects" })
        );
        assert_eq!(ClickTarget::classify(false, false, Some("/blog"), "Blog"), None);
        assert_eq!(ClickTarget::classify(false, false, None, "Text"), None);
    }

    #[test]
    fn test_prevents_default() {
        assert!(ClickOutcome::Intercepted.prevents_default());
        assert!(!ClickOutcome::PassThrough.prevents_default());
    }
}
