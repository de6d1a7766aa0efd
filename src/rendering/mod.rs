pub mod png;
pub mod summary;

pub use self::png::encode_rgb_png;
pub use summary::{render_palette_text, SummaryReport, SummaryReportRow};
