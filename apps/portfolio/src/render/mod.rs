// Page rendering: static profile data and on-disk assets composed into one HTML page.

pub mod assets;
pub mod feedback;
pub mod page;

pub use assets::StaticAssets;
pub use page::render_page;
