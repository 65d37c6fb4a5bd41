//! Reduced-motion preference detection.
//!
//! Reads `prefers-reduced-motion` once. Requires a browser environment;
//! on the server the page always renders the animated variant and the
//! client corrects it after hydration.

use crate::state::ui::MotionMode;

/// Whether the platform asks for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Resolve the page motion mode from the platform preference.
pub fn resolve() -> MotionMode {
    MotionMode::from_reduced_motion(prefers_reduced_motion())
}
