// Display module for board formatting and visualization
pub mod formatters;

// Re-export main functions
pub use formatters::{format_board, format_column_headers, format_row_prefix, occupant_glyph, print_board};
