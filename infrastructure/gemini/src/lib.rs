pub mod client;
pub mod price_recognizer;
