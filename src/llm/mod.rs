pub mod interface;
pub mod openai_compatible;

pub use interface::{ChatCompletion, ChatMessage, CompletionOptions};
pub use openai_compatible::OpenAiCompatibleClient;
