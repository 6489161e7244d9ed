//! Rule-based emergency assistant.
//!
//! A message is first classified into an [`IntentCategory`] by keyword
//! priority, then answered with a canned response chosen by a second keyword
//! pass inside that category. Both steps are pure and cannot fail.

mod intent;
mod responses;

pub use intent::{IntentCategory, classify};
pub use responses::{ResponseSet, respond, responses_for};

/// Greeting appended when the assistant view opens.
pub const WELCOME_MESSAGE: &str = "🙏 Namaste! I'm CIVI-SHIELD AI Assistant. I'm here to help you with emergencies, first aid, legal rights, and safety information. I can understand and respond in multiple Indian languages. How can I assist you today?";

/// One-tap prompts offered under the chat log.
pub const QUICK_RESPONSES: [&str; 5] = [
    "🐍 Snake Bite",
    "🔥 Fire Emergency",
    "🚗 Car Accident",
    "👮‍♂️ Police Rights",
    "📞 Emergency Numbers",
];

/// What: Classify a message and pick its response in one step.
///
/// Inputs:
/// - `text`: Raw user message
///
/// Output:
/// - `(category, response)` pair
pub fn reply(text: &str) -> (IntentCategory, &'static str) {
    let category = classify(text);
    (category, respond(text, category))
}
