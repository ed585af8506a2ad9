// GUI Components module
mod footer;
mod game_card;
mod header;

pub use footer::Footer;
pub use game_card::{GameCard, CARD_WIDTH};
pub use header::Header;
