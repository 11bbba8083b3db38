pub mod app;
pub mod header;
pub mod cta;
pub mod mining_modal;
pub mod content;
pub mod footer;

pub use app::render_app;
pub use header::render_header;
pub use cta::render_cta_block;
pub use mining_modal::render_mining_modal;
pub use content::{render_about, render_intro, render_team, render_vibemap};
pub use footer::render_footer;
