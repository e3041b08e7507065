pub mod account;
pub mod alert;
pub mod console;
pub mod detail;
pub mod footer;
pub mod header;
pub mod map;
pub mod sheet;

pub use account::{render_form, render_profile};
pub use alert::render_alert;
pub use console::{ConsoleState, render_console};
pub use detail::render_detail;
pub use footer::render_footer;
pub use header::render_header;
pub use map::{canvas_area, render_map};
pub use sheet::render_sheet;
