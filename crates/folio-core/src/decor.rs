//! Decorative effects: hover lifts, floating background blobs, parallax

use rand::Rng;

/// Transform applied when the pointer leaves any lifted element.
pub const REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// Elements that lift on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverLift {
    SkillItem,
    SocialLink,
    ProjectCard,
}

impl HoverLift {
    pub fn enter_transform(self) -> &'static str {
        match self {
            HoverLift::SkillItem => "translateY(-5px) scale(1.02)",
            HoverLift::SocialLink => "translateY(-5px) scale(1.1)",
            HoverLift::ProjectCard => "translateY(-10px) scale(1.02)",
        }
    }

    pub fn leave_transform(self) -> &'static str {
        REST_TRANSFORM
    }
}

/// Geometry of one floating background element.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingElement {
    pub width_px: f64,
    pub height_px: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    pub duration_s: f64,
}

impl FloatingElement {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            width_px: rng.gen_range(80.0..200.0),
            height_px: rng.gen_range(80.0..200.0),
            top_pct: rng.gen_range(0.0..100.0),
            left_pct: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(15.0..30.0),
        }
    }

    /// Inline style for the element.
    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: {:.1}px; height: {:.1}px; \
             background: linear-gradient(45deg, rgba(240, 147, 251, 0.1), rgba(245, 87, 108, 0.1)); \
             border-radius: 50%; top: {:.2}%; left: {:.2}%; \
             animation: float {:.2}s infinite linear; pointer-events: none; \
             z-index: 0; filter: blur(1px);",
            self.width_px, self.height_px, self.top_pct, self.left_pct, self.duration_s
        )
    }
}

/// Generate `count` floating elements.
pub fn floating_elements<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<FloatingElement> {
    (0..count).map(|_| FloatingElement::random(rng)).collect()
}

/// Vertical parallax shift of the `index`-th floating element.
///
/// Later elements move faster: `scrolled * (index + 1) * speed`.
pub fn parallax_offset(scrolled: f64, index: usize, speed: f64) -> f64 {
    scrolled * (index as f64 + 1.0) * speed
}

pub fn parallax_transform(scrolled: f64, index: usize, speed: f64) -> String {
    format!("translateY({}px)", parallax_offset(scrolled, index, speed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hover_transforms() {
        assert_eq!(
            HoverLift::ProjectCard.enter_transform(),
            "translateY(-10px) scale(1.02)"
        );
        assert_eq!(HoverLift::SocialLink.leave_transform(), REST_TRANSFORM);
    }

    #[test]
    fn test_floating_elements_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let elements = floating_elements(&mut rng, 6);
        assert_eq!(elements.len(), 6);
        for e in &elements {
            assert!((80.0..200.0).contains(&e.width_px));
            assert!((80.0..200.0).contains(&e.height_px));
            assert!((0.0..100.0).contains(&e.top_pct));
            assert!((15.0..30.0).contains(&e.duration_s));
            assert!(e.css_text().contains("animation: float"));
        }
    }

    #[test]
    fn test_parallax_speeds_up_per_index() {
        assert_eq!(parallax_offset(100.0, 0, 0.5), 50.0);
        assert_eq!(parallax_offset(100.0, 2, 0.5), 150.0);
        assert_eq!(parallax_transform(10.0, 1, 0.5), "translateY(10px)");
    }
}
