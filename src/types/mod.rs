pub mod span;
pub mod hearst_match;

pub use span::{Span, SpanWithCaptures, NamedCapture};
pub use hearst_match::HearstMatch;
