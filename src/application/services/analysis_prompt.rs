use crate::domain::Scenario;

/// Builds the coaching prompt. Scenario and transcript are embedded verbatim.
pub fn analysis_prompt(scenario: Scenario, transcript: &str) -> String {
    format!(
        "As a professional communication coach, analyze the following conversation/response:

Context:
- Scenario: {scenario}
- Transcript: {transcript}

Provide a detailed analysis covering:
1. Clarity and Effectiveness:

2. Tone and Professionalism:

3. Areas for Improvement:

4. Example

Format the response in a clear, structured manner with distinct sections. Use exactly 4 points and do not bold the points.",
        scenario = scenario.label(),
        transcript = transcript,
    )
}
