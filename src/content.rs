//! Static profile content.
//!
//! Everything on the page outside the animated scene is a pure rendering
//! of the records in this module. Defined at compile time, never mutated.

/// One card in the about section's skills grid.
pub struct SkillCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A social profile link shown in the hero and footer.
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// A quick-link entry in the footer navigation.
pub struct NavEntry {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAME: &str = "Alex Thompson";
pub const ROLE: &str = "Full Stack Developer & UI/UX Designer";
pub const BADGE: &str = "Welcome to my portfolio";
pub const TAGLINE: &str = "Passionate about creating beautiful, functional digital experiences \
that make a difference. I transform ideas into reality through code and design.";

pub const ABOUT_HEADING: &str = "Passionate Developer with 5+ Years of Experience";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a full-stack developer and UI/UX designer who loves crafting digital experiences \
that are both beautiful and functional. My journey in tech started with a curiosity about \
how things work, and it has evolved into a passion for creating solutions that make \
people's lives easier.",
    "When I'm not coding, you can find me exploring new design trends, contributing to \
open-source projects, or sharing knowledge with the developer community. I believe in \
continuous learning and staying up-to-date with the latest technologies.",
];

pub const SKILLS: [SkillCard; 4] = [
    SkillCard {
        icon: "</>",
        title: "Frontend Development",
        description: "React, TypeScript, Next.js, Tailwind CSS",
    },
    SkillCard {
        icon: "~>",
        title: "Backend Development",
        description: "Node.js, Python, PostgreSQL, MongoDB",
    },
    SkillCard {
        icon: "(*)",
        title: "UI/UX Design",
        description: "Figma, Adobe Creative Suite, User Research",
    },
    SkillCard {
        icon: "&&",
        title: "Collaboration",
        description: "Agile methodology, Git, Project Management",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "gh",
        label: "GitHub",
        href: "https://github.com",
    },
    SocialLink {
        icon: "in",
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
    SocialLink {
        icon: "@",
        label: "Email",
        href: "mailto:alex@example.com",
    },
];

/// Footer quick links. "projects" and "contact" have no matching section
/// on the page; activating them is a silent no-op.
pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry { label: "Home", anchor: "home" },
    NavEntry { label: "About", anchor: "about" },
    NavEntry { label: "Projects", anchor: "projects" },
    NavEntry { label: "Contact", anchor: "contact" },
];

pub const CONTACT_LINES: [&str; 3] = [
    "alex@example.com",
    "+1 (555) 123-4567",
    "San Francisco, CA",
];

pub const FOOTER_BLURB: &str =
    "Full Stack Developer & UI/UX Designer creating beautiful digital experiences.";
pub const COPYRIGHT: &str = "© 2025 Alex Thompson. Made with <3 and lots of coffee.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        assert_eq!(SKILLS.len(), 4);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert_eq!(NAV_ENTRIES.len(), 4);
    }

    #[test]
    fn test_nav_anchors_are_unique() {
        for (i, a) in NAV_ENTRIES.iter().enumerate() {
            for b in NAV_ENTRIES.iter().skip(i + 1) {
                assert_ne!(a.anchor, b.anchor);
            }
        }
    }
}
