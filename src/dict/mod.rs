pub mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
pub use loader::{dictionary_for, reload_dictionary};
