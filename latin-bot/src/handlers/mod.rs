//! Chain handlers: [`DirectMessageGate`] filters, [`TranslationHandler`] answers.

mod direct_message;
mod translate;

pub use direct_message::DirectMessageGate;
pub use translate::TranslationHandler;
