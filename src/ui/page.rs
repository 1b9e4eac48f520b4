//! Vertical page scrolling over anchored sections.
//!
//! The page is a fixed stack of sections (hero, about, footer), each with
//! a string anchor. Quick links scroll smoothly to an anchor's offset with
//! the same exponential easing shape the scene uses for rotation; an
//! anchor with no matching section is a silent no-op.

/// Fraction of the remaining distance covered each tick.
const SCROLL_EASING: f32 = 0.1;

pub const HERO_HEIGHT: f32 = 700.0;
pub const ABOUT_HEIGHT: f32 = 620.0;
pub const FOOTER_HEIGHT: f32 = 280.0;

struct Section {
    anchor: &'static str,
    offset: f32,
}

pub struct Page {
    sections: Vec<Section>,
    scroll: f32,
    target_scroll: f32,
    content_height: f32,
    view_height: f32,
}

impl Page {
    pub fn new(view_height: f32) -> Self {
        Self {
            sections: vec![
                Section {
                    anchor: "home",
                    offset: 0.0,
                },
                Section {
                    anchor: "about",
                    offset: HERO_HEIGHT,
                },
            ],
            scroll: 0.0,
            target_scroll: 0.0,
            content_height: HERO_HEIGHT + ABOUT_HEIGHT + FOOTER_HEIGHT,
            view_height,
        }
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height - self.view_height).max(0.0)
    }

    pub fn set_view_height(&mut self, view_height: f32) {
        self.view_height = view_height;
        self.target_scroll = self.target_scroll.min(self.max_scroll());
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Ease toward the scroll target. Call once per redraw.
    pub fn tick(&mut self) {
        self.scroll += (self.target_scroll - self.scroll) * SCROLL_EASING;
    }

    /// Smooth-scroll to a named anchor. Unknown anchors do nothing.
    pub fn scroll_to(&mut self, anchor: &str) {
        if let Some(section) = self.sections.iter().find(|s| s.anchor == anchor) {
            self.target_scroll = section.offset.min(self.max_scroll());
        }
    }

    pub fn back_to_top(&mut self) {
        self.target_scroll = 0.0;
    }

    /// Mouse wheel input in logical pixels; moves the page directly.
    pub fn wheel(&mut self, delta: f32) {
        let next = (self.scroll - delta).clamp(0.0, self.max_scroll());
        self.scroll = next;
        self.target_scroll = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_about_approaches_without_overshoot() {
        let mut page = Page::new(800.0);
        page.scroll_to("about");
        let mut previous = page.scroll();
        for _ in 0..300 {
            page.tick();
            assert!(page.scroll() >= previous);
            assert!(page.scroll() <= HERO_HEIGHT + 1e-4);
            previous = page.scroll();
        }
        assert!((page.scroll() - HERO_HEIGHT).abs() < 1.0);
    }

    #[test]
    fn test_unknown_anchor_is_a_no_op() {
        let mut page = Page::new(800.0);
        page.scroll_to("about");
        let target_before = page.target_scroll;
        page.scroll_to("projects");
        page.scroll_to("contact");
        assert_eq!(page.target_scroll, target_before);
    }

    #[test]
    fn test_wheel_clamps_to_bounds() {
        let mut page = Page::new(800.0);
        page.wheel(500.0);
        assert_eq!(page.scroll(), 0.0);
        page.wheel(-1e6);
        assert_eq!(page.scroll(), page.max_scroll());
    }

    #[test]
    fn test_back_to_top() {
        let mut page = Page::new(800.0);
        page.wheel(-600.0);
        page.back_to_top();
        for _ in 0..300 {
            page.tick();
        }
        assert!(page.scroll() < 1.0);
    }

    #[test]
    fn test_tall_view_never_scrolls() {
        let mut page = Page::new(5000.0);
        page.scroll_to("about");
        for _ in 0..100 {
            page.tick();
        }
        assert_eq!(page.scroll(), 0.0);
    }
}
