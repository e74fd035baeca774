// Document hooks the web frontend looks up. Page structure and styling live in
// the host page.

// Background canvas
pub const CANVAS_ID: &str = "bg";
pub const FOLLOW_ATTR: &str = "data-follow";
pub const SEED_ATTR: &str = "data-seed";

// Card reveal
pub const CARD_SELECTOR: &str = ".card";
pub const REVEAL_CLASS: &str = "show";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

// Scroll parallax
pub const CARD_IMAGE_SELECTOR: &str = ".card-image";

// Hover sound targets
pub const HOVER_SELECTOR: &str = ".card, .skills-grid span, .contact-row";

// Skill badges
pub const SKILL_SELECTOR: &str = ".skills-grid span";
