use clock_core::AnswerCheck;
use serde_json::{json, Value};

pub fn question_prompt() -> String {
    [
        "You are a friendly teacher helping a young child learn to read an analog clock.",
        "Make up one short question asking the child to set the clock to a specific time.",
        "Use a time of day a child would recognise (breakfast, school, bedtime, and so on).",
        "Keep the minute a multiple of 5 and give the hour in 24-hour form.",
        "Add a one-sentence hint about where the hour hand and minute hand should point.",
        "Reply with JSON only: questionText, targetHour (0-23), targetMinute (0-59), hint.",
    ]
    .join("\n")
}

/// Response schema for the question call, in the service's OpenAPI subset.
pub fn question_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questionText": { "type": "STRING" },
            "targetHour": { "type": "INTEGER" },
            "targetMinute": { "type": "INTEGER" },
            "hint": { "type": "STRING" }
        },
        "required": ["questionText", "targetHour", "targetMinute", "hint"]
    })
}

pub fn evaluation_prompt(check: &AnswerCheck) -> String {
    let outcome = if check.correct {
        "That counts as correct."
    } else {
        "That is not quite right yet."
    };
    format!(
        "A young child is learning to read an analog clock.\n\
         They set the clock to {submitted}. The target time was {target}.\n\
         They were {diff} minutes away. {outcome}\n\
         Reply with one short, warm sentence of encouragement for the child. \
         If they were off, gently say which hand to move. Plain text only.",
        submitted = check.submitted,
        target = check.target,
        diff = check.difference_minutes,
    )
}
