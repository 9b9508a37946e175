//! Prompt templates for the debate flow

/// Templates for generating prompts at each stage
pub struct DebatePromptTemplate;

impl DebatePromptTemplate {
    /// Placeholder replaced with the topic in role prompts
    pub const TOPIC_PLACEHOLDER: &'static str = "{topic}";

    /// Default role prompt for Debater A (in favour)
    pub fn debater_a_system() -> &'static str {
        r#"You are Debater A in a formal debate on the topic: {topic}
You argue IN FAVOUR of the proposition.
Respond directly to your opponent's latest argument, then advance your own case.
Be concrete: use evidence, examples and reasoning. Keep each reply focused."#
    }

    /// Default role prompt for Debater B (against)
    pub fn debater_b_system() -> &'static str {
        r#"You are Debater B in a formal debate on the topic: {topic}
You argue AGAINST the proposition.
Respond directly to your opponent's latest argument, then advance your own case.
Be concrete: use evidence, examples and reasoning. Keep each reply focused."#
    }

    /// Default system prompt for the summarizer
    pub fn summarizer_system() -> &'static str {
        "You are a precise debate analyst. Output only valid JSON."
    }

    /// Default system prompt for the judge
    pub fn judge_system() -> &'static str {
        r#"You are an impartial debate judge. You do not decide who is right about the topic;
you decide whether the debate should continue. Output only valid JSON."#
    }

    /// Substitute the topic into a role prompt
    pub fn render_role_prompt(template: &str, topic: &str) -> String {
        template.replace(Self::TOPIC_PLACEHOLDER, topic)
    }

    /// First message sent to Debater A
    pub fn opening_prompt(topic: &str) -> String {
        format!(
            "The topic is: {}. Please present your opening argument.",
            topic
        )
    }

    /// Topic and language directives appended to every debater context
    pub fn session_directives(topic: &str, language: &str) -> String {
        format!(
            "Debate topic: {}\nWrite all of your replies in {}.",
            topic, language
        )
    }

    /// Request to regenerate a reply that was too short
    pub fn regenerate_prompt(opponent_message: &str, actual: usize, minimum: usize) -> String {
        format!(
            r#"Your previous reply was only {} characters long. Replies must be at least {} characters.
Answer again, in more depth, to your opponent's argument:

{}"#,
            actual, minimum, opponent_message
        )
    }

    // ==================== Restriction Block ====================

    pub const RESTRICTION_HEADER: &'static str = "=== DEBATE PROGRESS RESTRICTIONS ===";
    pub const RESTRICTION_FOOTER: &'static str = "=================================";
    pub const FORBIDDEN_HEADING: &'static str = "FORBIDDEN ARGUMENT LINES (already exhausted):";
    pub const REFUTED_HEADING: &'static str = "REFUTED ARGUMENTS (do not use these):";
    pub const STALEMATE_HEADING: &'static str =
        "STALEMATE TOPICS (both sides failed to make progress):";
    pub const SUMMARY_HEADING: &'static str = "DEBATE SUMMARY SO FAR:";
    pub const RESTRICTION_WARNING: &'static str = r#"CRITICAL: You MUST NOT repeat any exhausted, refuted, or stalemate arguments.
You must bring NEW perspectives or evidence. If you have no new arguments,
acknowledge it honestly."#;

    // ==================== Summarizer ====================

    /// Analysis request sent to the summarizer at a checkpoint
    pub fn analysis_prompt(
        topic: &str,
        language: &str,
        transcript: &str,
        previous_restrictions: Option<&str>,
    ) -> String {
        let mut prompt = format!(
            r#"Analyze the following debate transcript and provide a structured JSON analysis.

Your task:
1. Identify ALL distinct arguments made by each debater
2. Determine which arguments have been REFUTED (opponent provided irrefutable counter-evidence)
3. Identify STALEMATES (same argument repeated 2+ times without progress)
4. List, per debater, the argument lines that are EXHAUSTED and must not be used again
5. Detect if a debater repeated a line that was already forbidden to them

Respond with ONLY a valid JSON object (no markdown, no extra text):
{{
    "debater_a_arguments": ["arg1", "arg2"],
    "debater_b_arguments": ["arg1", "arg2"],
    "refuted_arguments": ["refuted argument"],
    "stalemate_topics": ["topic stuck in loop"],
    "exhausted_lines": {{
        "debater_a": ["line debater A should not use anymore"],
        "debater_b": ["line debater B should not use anymore"]
    }},
    "repeated_lines": {{
        "debater_a": ["previously forbidden line debater A used again"],
        "debater_b": []
    }},
    "key_points": ["important developments in the debate"],
    "current_focus": "what the debate is currently about",
    "should_end": false,
    "end_reason": ""
}}

IMPORTANT:
- Be concise in argument descriptions (max 15 words each)
- Reuse the exact wording of previously forbidden lines when you list them again
- "should_end" = true if the debate has devolved into pure repetition
- Write descriptions in {}

Topic: {}
"#,
            language, topic
        );

        if let Some(previous) = previous_restrictions.filter(|p| !p.trim().is_empty()) {
            prompt.push_str(&format!(
                "\n[Previous restrictions given to debaters:\n{}]\n",
                previous
            ));
        }

        prompt.push_str(&format!("\nTranscript:\n{}\n", transcript));
        prompt
    }

    // ==================== Judge ====================

    /// Evaluation request sent to the judge
    pub fn judge_prompt(topic: &str, transcript: &str, forced: bool) -> String {
        let mut prompt = format!(
            r#"Evaluate the latest exchanges of this debate.

Decide one of:
- "end_agreement": both sides' latest positions have converged
- "end_refutation": one side's core claim was explicitly and unambiguously countered without rebuttal
- "end_concession": a debater explicitly conceded
- "continue": none of the above

Respond with ONLY a JSON object:
{{"decision": "continue", "rationale": "one or two sentences", "winner": "A" | "B" | null}}

Topic: {}

Transcript:
{}
"#,
            topic, transcript
        );

        if forced {
            prompt.push_str(
                r#"
The debate is over. Render your FINAL verdict now.
"continue" is NOT allowed: pick the ending that best describes the debate and name a winner if there is one."#,
            );
        }

        prompt
    }
}
