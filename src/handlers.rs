pub mod callback;
pub mod disease;
pub mod diversify;
pub mod expert;
pub mod keyboard;
pub mod market;
pub mod photo;
pub mod soil;
pub mod text;
pub mod weather;

pub use callback::callback_handler;
pub use disease::start_disease;
pub use diversify::start_diversify;
pub use expert::start_ask;
pub use market::{market_overview, price_table};
pub use photo::handle_photo;
pub use soil::start_soil;
pub use text::{cancel, handle_text, help};
pub use weather::start_weather;
