// Prompt templates for the interview module. Pure string construction — no
// I/O, no validation. Inputs are embedded verbatim; callers gate on
// non-empty input before building. The requested output format is a hint to
// the model only and is never parsed or enforced on the reply.

use crate::interview::Round;

/// Per-round question generation. Replace `{round}` and `{job_desc}`.
const ROUND_QUESTIONS_TEMPLATE: &str = r#"You are a senior interviewer. Based on this job description, generate 4 {round} interview questions.

Job Description:
{job_desc}

Format:
- Q1
- Q2
- Q3
- Q4"#;

/// All-rounds generation. Replace `{job_desc}`.
const ALL_ROUNDS_TEMPLATE: &str = r#"You are a senior interviewer. Based on the job description, generate interview questions in three sections:

1. Behavioral Questions (4)
2. Technical Questions (4)
3. HR Round Questions (4)

Job Description:
{job_desc}

Format:
### Behavioral
- Q1
- Q2
- Q3
- Q4

### Technical
- Q1
- Q2
- Q3
- Q4

### HR Round
- Q1
- Q2
- Q3
- Q4"#;

/// Answer feedback. Replace `{question}` and `{answer}`.
const FEEDBACK_TEMPLATE: &str = r#"You are an interview coach. Give concise feedback (max 4 lines) and suggest an improved answer.

Question: {question}
Candidate's Answer: {answer}

Format:
- Good Points
- Areas to Improve
- Suggested Improved Answer"#;

/// Prompt asking for exactly 4 questions of one round type.
pub fn questions_for_round(job_desc: &str, round: Round) -> String {
    ROUND_QUESTIONS_TEMPLATE
        .replace("{round}", round.as_str())
        .replace("{job_desc}", job_desc)
}

/// Prompt asking for 4 questions per round across all three rounds.
pub fn all_rounds_questions(job_desc: &str) -> String {
    ALL_ROUNDS_TEMPLATE.replace("{job_desc}", job_desc)
}

/// Prompt asking for a single random question, no explanation.
pub fn single_random_question(round: Round) -> String {
    format!(
        "Generate 1 random {} interview question only. No explanation, just the question.",
        round.as_str()
    )
}

/// Prompt asking for three-section feedback on an answer to a question.
pub fn feedback(question: &str, answer: &str) -> String {
    FEEDBACK_TEMPLATE
        .replace("{question}", question)
        .replace("{answer}", answer)
}
