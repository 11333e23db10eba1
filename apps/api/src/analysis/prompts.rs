// Prompt for resume-vs-JD analysis. The wording is the contract with the
// model: JSON only, exactly the `JD_match` and `analysis` keys.

/// Builds the single analysis prompt.
///
/// Both texts are embedded verbatim twice: inside the illustrative JSON
/// skeleton and in the labeled sections at the end. Nothing is escaped, so a
/// resume containing quotes or braces makes the skeleton invalid JSON; the
/// skeleton is only read by the model.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        r#"Act as an HR for an IT company. Analyze the following resume against the provided job description. Your response must be a single, valid JSON object and nothing else.

```json
{{
    "resume": {resume_text},
    "job_description": {job_description}
}}

The JSON object must contain two keys:
1. `JD_match`: A numerical score from 0 to 100, where a higher score indicates a closer alignment between the resume and the job description.
2. `analysis`: A brief summary (2-3 sentences) explaining the score, highlighting the candidate's key matching skills and any significant gaps.

---
**Resume:**
{resume_text}
---
**Job Description:**
{job_description}
---
"#
    )
}
