// DOM selectors and class names the effects attach to.

// Cursor
pub const CURSOR_DOT: &str = ".cursor";
pub const CURSOR_RING: &str = ".cursor-follower";
pub const CURSOR_HOVER_TARGETS: &str = "a, button, .project-card, .skill-item, .contact-item";

// Navigation
pub const NAVBAR: &str = ".navbar";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_LINK_ANCHORS: &str = ".nav-links a";
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const SECTIONS: &str = "section[id]";
pub const HERO_SHAPES: &str = ".hero-shape";

// Intersection-triggered content
pub const STATS_SECTION: &str = ".hero-stats";
pub const STAT_NUMBERS: &str = ".stat-number";
pub const SKILLS_SECTION: &str = ".skills-progress";
pub const PROGRESS_FILLS: &str = ".progress-fill";
pub const FADE_IN_TARGETS: &str =
    ".section-header, .about-content, .about-image, .skills-content, .contact-info, .contact-form-wrapper";
pub const LAZY_IMAGES: &str = "img[data-src]";

// Projects
pub const FILTER_BUTTONS: &str = ".filter-btn";
pub const PROJECT_CARDS: &str = ".project-card";
pub const SKILL_ITEMS: &str = ".skill-item";
pub const SKILL_ICON: &str = ".skill-icon";
pub const SOCIAL_LINKS: &str = ".social-link";

// Contact
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const SPINNER_STYLE_ID: &str = "contact-spinner-style";

// Attributes
pub const ATTR_COUNT: &str = "data-count";
pub const ATTR_WIDTH: &str = "data-width";
pub const ATTR_FILTER: &str = "data-filter";
pub const ATTR_CATEGORY: &str = "data-category";
pub const ATTR_SRC: &str = "data-src";

// Classes
pub const CLASS_HOVER: &str = "hover";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_LOADED: &str = "loaded";

// Inline style values
pub const CARD_SHOW_ANIMATION: &str = "fadeInUp 0.5s ease forwards";
pub const FADE_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const FADE_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const FADE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// (enter, leave) transforms for hover lifts
pub const CARD_LIFT: (&str, &str) = ("translateY(-10px)", "translateY(0)");
pub const SKILL_ICON_LIFT: (&str, &str) = ("scale(1.1) rotate(5deg)", "scale(1) rotate(0deg)");
pub const SOCIAL_LIFT: (&str, &str) = ("translateY(-5px) rotate(5deg)", "translateY(0) rotate(0deg)");

pub const SPINNER_CSS: &str = ".spinner { animation: spin 1s linear infinite; }
@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }";

pub const SPINNER_SVG: &str = r#"<svg class="spinner" viewBox="0 0 24 24" width="20" height="20"><circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="3" fill="none" stroke-dasharray="30 70"/></svg>"#;
pub const CHECK_SVG: &str = r#"<svg viewBox="0 0 24 24"><path d="M20 6L9 17l-5-5" stroke="currentColor" stroke-width="2" fill="none"/></svg>"#;
