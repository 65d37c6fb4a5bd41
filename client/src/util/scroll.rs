//! Smooth scrolling to page sections and page scroll progress.

use crate::state::ui::Section;

/// Scroll so `section` sits just below the fixed nav bar.
///
/// A section with no element on the page is ignored.
pub fn scroll_to_section(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window.document().and_then(|d| d.get_element_by_id(section.anchor())) else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let top = crate::state::ui::scroll_target(element.get_bounding_client_rect().top(), scroll_y);

        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}

/// Current page scroll progress in `0.0..=1.0`. Always `0.0` off the browser.
#[must_use]
pub fn page_progress() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let scroll_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        crate::state::ui::scroll_progress(window.scroll_y().unwrap_or(0.0), scroll_height, viewport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
