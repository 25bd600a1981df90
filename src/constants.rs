// Selectors, ids and class names the effects read from or write to the page.
// These are the contract with the hosting markup and stylesheet.

// Element ids
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const MESSAGE_FIELD_ID: &str = "message";
pub const BACK_TO_TOP_ID: &str = "backToTop";

// Selectors
pub const HEADER_SELECTOR: &str = "header";
pub const SECTION_SELECTOR: &str = "section";
pub const SKILL_CARD_SELECTOR: &str = ".skill-card";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const TILT_CARD_SELECTOR: &str = ".skill-card, .project-card";
pub const CARD_SHINE_SELECTOR: &str = ".card-shine";
pub const IN_PAGE_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const NOTICE_SELECTOR: &str = ".notification";

// Classes read from the markup
pub const SKILLS_SECTION_CLASS: &str = "skills";
pub const PROJECTS_SECTION_CLASS: &str = "projects";

// Classes written by the effects
pub const PARTICLE_FIELD_CLASS: &str = "particle";
pub const PARTICLE_DOT_CLASS: &str = "particle-dot";
pub const TRAIL_MARKER_CLASS: &str = "mouse-trail";
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";
pub const VISIBLE_CLASS: &str = "visible";
pub const NOTICE_CONTENT_CLASS: &str = "notification-content";
pub const NOTICE_CLOSE_CLASS: &str = "notification-close";
pub const NOTICE_CLOSE_GLYPH: &str = "\u{00d7}";
