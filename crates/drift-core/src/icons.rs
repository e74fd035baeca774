// Skill label -> devicon badge lookup.

pub const SKILL_ICONS: &[(&str, &str)] = &[
    ("Angular", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/angularjs/angularjs-original.svg"),
    ("React", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"),
    (".NET", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/dot-net/dot-net-original.svg"),
    ("Python", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg"),
    ("HTML", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg"),
    ("CSS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg"),
    ("Flutter", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flutter/flutter-original.svg"),
    ("React Native", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"),
];

// Fixed badge placement
pub const BADGE_REPEAT: &str = "no-repeat";
pub const BADGE_POSITION: &str = "top 16px right 16px";
pub const BADGE_SIZE: &str = "28px";

/// Icon URL for a skill label. Surrounding whitespace is ignored; matching is
/// otherwise exact.
pub fn icon_url(label: &str) -> Option<&'static str> {
    let label = label.trim();
    SKILL_ICONS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, url)| *url)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub url: &'static str,
}

impl BadgeStyle {
    /// `(property, value)` pairs to set on the label's inline style.
    pub fn declarations(&self) -> [(&'static str, String); 4] {
        [
            ("background-image", format!("url({})", self.url)),
            ("background-repeat", BADGE_REPEAT.to_string()),
            ("background-position", BADGE_POSITION.to_string()),
            ("background-size", BADGE_SIZE.to_string()),
        ]
    }
}

pub fn badge_for(label: &str) -> Option<BadgeStyle> {
    icon_url(label).map(|url| BadgeStyle { url })
}

