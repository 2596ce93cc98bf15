pub mod formatter;

pub use formatter::{
    format_assessment, format_breakdown, format_feedback, format_queue, format_wall,
    should_use_colors,
};
