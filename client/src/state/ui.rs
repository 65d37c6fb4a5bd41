#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page-wide presentation state.
///
/// `motion` is resolved once when the app mounts; components read it
/// instead of querying the media preference themselves.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub motion: MotionMode,
}

/// Whether decorative animation runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionMode {
    #[default]
    Animated,
    Static,
}

impl MotionMode {
    #[must_use]
    pub fn from_reduced_motion(reduced: bool) -> Self {
        if reduced { Self::Static } else { Self::Animated }
    }

    #[must_use]
    pub fn is_animated(self) -> bool {
        self == Self::Animated
    }

    /// Root class toggling CSS animations.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Animated => "motion-animated",
            Self::Static => "motion-static",
        }
    }
}

/// Visual phase of a product card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPhase {
    #[default]
    Rest,
    Active,
}

impl CardPhase {
    /// Taps toggle, since touch screens have no hover.
    #[must_use]
    pub fn tapped(self) -> Self {
        match self {
            Self::Rest => Self::Active,
            Self::Active => Self::Rest,
        }
    }
}

/// Height of the fixed navigation bar, subtracted when scrolling to a section.
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Scrollable page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Catalog,
    Craft,
    Mission,
}

/// Sections linked from the navigation bar, in display order.
pub const NAV_SECTIONS: [Section; 3] = [Section::Catalog, Section::Craft, Section::Mission];

impl Section {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Catalog => "Catalog",
            Self::Craft => "Craft",
            Self::Mission => "Mission",
        }
    }

    /// Element id of the section anchor.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Catalog => "catalog",
            Self::Craft => "craft",
            Self::Mission => "mission",
        }
    }
}

/// Document scroll position that puts a section just below the nav bar.
///
/// `element_top` is the viewport-relative top of the section element.
#[must_use]
pub fn scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - NAV_OFFSET_PX
}

/// How far the hero copy drifts upward over a full page scroll.
pub const HERO_PARALLAX_PX: f64 = 100.0;

/// Fraction of the page scrolled, clamped to `0.0..=1.0`.
///
/// A page no taller than the viewport never scrolls and reports `0.0`.
#[must_use]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// CSS transform for the hero copy. Static motion pins it in place.
#[must_use]
pub fn hero_transform(motion: MotionMode, progress: f64) -> String {
    if !motion.is_animated() {
        return "none".to_string();
    }
    format!("translateY({}px)", -HERO_PARALLAX_PX * progress.clamp(0.0, 1.0))
}
