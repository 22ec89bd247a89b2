// Public API
pub use markup::Element;
pub use svg::{card_svg, SvgTableView, CARD_HEIGHT, CARD_WIDTH};
pub use text::{card_text, TextTableView};
pub use view::{AlertLog, TableView, HAND_ELEMENT_ID};

// Internal modules
mod markup;
mod svg;
mod text;
mod view;
