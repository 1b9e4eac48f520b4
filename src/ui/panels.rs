//! Page panels: hero, about, and footer.
//!
//! Pure functions from the static content records to imgui widgets. The
//! panels never mutate anything themselves; activated controls are
//! reported back through `UiActions` and applied by the app after the
//! frame is built.

use crate::content;
use crate::gfx::scene::{ViewportRect, VIEWPORT_SIZE};
use crate::theme::Theme;

use super::page::{ABOUT_HEIGHT, FOOTER_HEIGHT, HERO_HEIGHT};

/// Controls activated during this UI frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiActions {
    pub scroll_to: Option<&'static str>,
    pub back_to_top: bool,
    pub toggle_theme: bool,
    pub open_link: Option<&'static str>,
}

const MARGIN: f32 = 40.0;

/// Where the decorative scene lands inside the hero section, in window
/// coordinates for the current scroll offset.
pub fn hero_viewport_rect(display_width: f32, scroll: f32) -> ViewportRect {
    ViewportRect {
        x: (display_width - VIEWPORT_SIZE - MARGIN * 2.0).max(MARGIN),
        y: (HERO_HEIGHT - VIEWPORT_SIZE) * 0.5 - scroll,
        width: VIEWPORT_SIZE,
        height: VIEWPORT_SIZE,
    }
}

/// Builds the whole page for one frame.
pub fn draw_page(ui: &imgui::Ui, scroll: f32, theme: Theme) -> UiActions {
    let mut actions = UiActions::default();
    let display = ui.io().display_size;
    if display[0] <= 0.0 || display[1] <= 0.0 {
        return actions;
    }

    hero_panel(ui, display, scroll, theme, &mut actions);
    about_panel(ui, display, scroll, &mut actions);
    footer_panel(ui, display, scroll, &mut actions);

    actions
}

fn section_window<F>(ui: &imgui::Ui, name: &str, position: [f32; 2], size: [f32; 2], build: F)
where
    F: FnOnce(),
{
    ui.window(name)
        .position(position, imgui::Condition::Always)
        .size(size, imgui::Condition::Always)
        .title_bar(false)
        .resizable(false)
        .movable(false)
        .scroll_bar(false)
        .build(build);
}

fn hero_panel(
    ui: &imgui::Ui,
    display: [f32; 2],
    scroll: f32,
    theme: Theme,
    actions: &mut UiActions,
) {
    let text_width = (display[0] - VIEWPORT_SIZE - MARGIN * 4.0).max(320.0);
    section_window(
        ui,
        "hero",
        [MARGIN, MARGIN - scroll],
        [text_width, HERO_HEIGHT - MARGIN * 2.0],
        || {
            ui.text_disabled(content::BADGE);
            ui.spacing();
            ui.text(content::NAME);
            ui.text_colored([0.55, 0.55, 0.9, 1.0], content::ROLE);
            ui.separator();
            ui.text_wrapped(content::TAGLINE);
            ui.spacing();

            if ui.button("Get to know me") {
                actions.scroll_to = Some("about");
            }
            ui.same_line();
            let theme_label = match theme {
                Theme::Light => "Dark mode",
                Theme::Dark => "Light mode",
            };
            if ui.button(theme_label) {
                actions.toggle_theme = true;
            }

            ui.spacing();
            for link in &content::SOCIAL_LINKS {
                if ui.small_button(link.label) {
                    actions.open_link = Some(link.href);
                }
                ui.same_line();
            }
            ui.new_line();
        },
    );
}

fn about_panel(ui: &imgui::Ui, display: [f32; 2], scroll: f32, _actions: &mut UiActions) {
    section_window(
        ui,
        "about",
        [MARGIN, HERO_HEIGHT + MARGIN - scroll],
        [display[0] - MARGIN * 2.0, ABOUT_HEIGHT - MARGIN * 2.0],
        || {
            ui.text("About Me");
            ui.separator();
            ui.text(content::ABOUT_HEADING);
            ui.spacing();
            for paragraph in &content::ABOUT_PARAGRAPHS {
                ui.text_wrapped(paragraph);
                ui.spacing();
            }

            ui.separator();
            // 2x2 skills grid
            ui.columns(2, "skills", false);
            for card in &content::SKILLS {
                ui.text_disabled(card.icon);
                ui.same_line();
                ui.text(card.title);
                ui.text_wrapped(card.description);
                ui.spacing();
                ui.next_column();
            }
            ui.columns(1, "skills_end", false);
        },
    );
}

fn footer_panel(ui: &imgui::Ui, display: [f32; 2], scroll: f32, actions: &mut UiActions) {
    section_window(
        ui,
        "footer",
        [MARGIN, HERO_HEIGHT + ABOUT_HEIGHT + MARGIN - scroll],
        [display[0] - MARGIN * 2.0, FOOTER_HEIGHT - MARGIN],
        || {
            ui.columns(3, "footer_columns", false);

            ui.text(content::NAME);
            ui.text_wrapped(content::FOOTER_BLURB);
            ui.spacing();
            for link in &content::SOCIAL_LINKS {
                if ui.small_button(link.icon) {
                    actions.open_link = Some(link.href);
                }
                ui.same_line();
            }
            ui.new_line();
            ui.next_column();

            ui.text("Quick Links");
            for entry in &content::NAV_ENTRIES {
                if ui.small_button(entry.label) {
                    actions.scroll_to = Some(entry.anchor);
                }
            }
            ui.next_column();

            ui.text("Get in Touch");
            for line in &content::CONTACT_LINES {
                ui.text(line);
            }
            ui.next_column();
            ui.columns(1, "footer_end", false);

            ui.separator();
            ui.text_disabled(content::COPYRIGHT);
            ui.same_line();
            if ui.small_button("Back to top") {
                actions.back_to_top = true;
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_rect_tracks_scroll() {
        let at_top = hero_viewport_rect(1200.0, 0.0);
        let scrolled = hero_viewport_rect(1200.0, 250.0);
        assert_eq!(at_top.width, VIEWPORT_SIZE);
        assert_eq!(scrolled.y, at_top.y - 250.0);
        assert_eq!(scrolled.x, at_top.x);
    }

    #[test]
    fn test_viewport_rect_stays_on_screen_for_narrow_windows() {
        let rect = hero_viewport_rect(500.0, 0.0);
        assert!(rect.x >= 0.0);
    }
}
