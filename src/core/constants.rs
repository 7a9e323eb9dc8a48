// Tuning constants shared by the pure effect logic and the DOM layer.

// Cursor smoothing (fraction of the remaining distance covered per frame)
pub const CURSOR_DOT_FACTOR: f32 = 0.2;
pub const CURSOR_RING_FACTOR: f32 = 0.1; // lower = longer trailing lag

// Half of each cursor element's size, so it is drawn centered on the point
pub const CURSOR_DOT_HALF_PX: f32 = 4.0;
pub const CURSOR_RING_HALF_PX: f32 = 20.0;

// Scroll reactors
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 50.0;
pub const SECTION_ACTIVE_OFFSET_PX: f64 = 100.0;
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 80.0;
pub const PARALLAX_BASE_SPEED: f64 = 0.1;
pub const PARALLAX_SPEED_STEP: f64 = 0.05; // added per shape index

// Counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0; // nominal frame length used for stepping

// Intersection thresholds (fraction of the target visible)
pub const COUNTER_VISIBLE_THRESHOLD: f64 = 0.5;
pub const PROGRESS_VISIBLE_THRESHOLD: f64 = 0.3;
pub const FADE_VISIBLE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const LAZY_IMAGE_VISIBLE_THRESHOLD: f64 = 0.0; // any pixel inside the margin
pub const LAZY_IMAGE_ROOT_MARGIN: &str = "50px 0px";

// Contact form simulator
pub const CONTACT_SENT_AFTER_MS: i32 = 1500;
pub const CONTACT_RESET_AFTER_MS: i32 = 2000;
pub const CONTACT_SENDING_LABEL: &str = "Enviando...";
pub const CONTACT_SENT_LABEL: &str = "Mensagem Enviada!";
pub const CONTACT_SENT_BACKGROUND: &str = "#00b894";

// Mobile navigation
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // inclusive

// Project filter
pub const FILTER_ALL: &str = "all";
