// Page wiring constants used by the web glue. Formula coefficients live in
// `scene::tuning`; these are selectors and timings only.

// Start-up
pub const INIT_DELAY_MS: u32 = 2000; // loading screen stays up this long
pub const LOADING_FADE_MS: u32 = 500;

// Navigation
pub const HAMBURGER: &str = ".hamburger";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV: &str = ".nav";
pub const HEADER: &str = ".header";
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const ACTIVE_CLASS: &str = "active";

// Particles
pub const PARTICLES_CONTAINER: &str = ".particles-container";
pub const PARTICLE: &str = ".particle";

// Typewriter and terminal
pub const TYPING_TEXT: &str = ".typing-text";
pub const TYPE_START_DELAY_MS: u32 = 1000;
pub const TYPE_STEP_MS: u32 = 100;
pub const TERMINAL_BODY: &str = ".terminal-body";
pub const CODE_LINE: &str = ".code-line";
pub const TERMINAL_FIRST_LINE_MS: u32 = 500;
pub const TERMINAL_LINE_STEP_MS: u32 = 300;
pub const TERMINAL_HIGHLIGHT_MS: u32 = 500;

// Reveal-on-visibility
pub const REVEAL_TARGETS: &str =
    ".skill-category-3d, .project-card-3d, .hologram-card, .timeline-content, .contact-form-3d";
pub const STAGGERED_GRIDS: [&str; 2] = ["skills-grid", "projects-grid"];
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_SECS: f32 = 0.1;

// Hover lifts
pub const SKILL_ITEM: &str = ".skill-item";
pub const PROJECT_CARD: &str = ".project-card-3d";
pub const CONTACT_METHOD: &str = ".contact-method";
pub const LIFT_SHADOW_SKILL: &str = "0 10px 25px rgba(139, 92, 246, 0.4)";
pub const LIFT_SHADOW_CONTACT: &str = "0 15px 40px rgba(139, 92, 246, 0.3)";

// Contact
pub const CONTACT_ITEMS: &str = ".contact-item-3d, .contact-method";
pub const CONTACT_PRESS_MS: u32 = 150;
pub const RIPPLE_MS: u32 = 600;
pub const RIPPLE_COLOR: &str = "rgba(139, 92, 246, 0.6)";

// Debug overlay
pub const DEBUG_HASH: &str = "#debug";
pub const DEBUG_REFRESH_MS: u32 = 1000;
