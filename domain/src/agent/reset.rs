//! Agent reset protocol.
//!
//! After a checkpoint each debater's working context is rebuilt from scratch:
//! role prompt, the side's latest restriction text, then the topic and
//! language directives. Prior turns are dropped; what survives of them is
//! whatever the restriction's summary carries.

use crate::agent::context::AgentContext;
use crate::core::topic::Topic;
use crate::prompt::template::DebatePromptTemplate;
use crate::restriction::entities::Restriction;

/// Build a fresh debater context.
///
/// Pure: the same inputs always yield an equal context, so resetting twice
/// with an unchanged restriction is a no-op.
pub fn reset_context(
    role_prompt: &str,
    restriction: &Restriction,
    topic: &Topic,
    language: &str,
) -> AgentContext {
    let mut system = role_prompt.trim_end().to_string();

    if !restriction.is_empty() {
        system.push_str("\n\n");
        system.push_str(restriction.rendered_text());
    }

    system.push_str("\n\n");
    system.push_str(&DebatePromptTemplate::session_directives(
        topic.content(),
        language,
    ));

    AgentContext::new(system)
}
