//! Prompt templates for the job analysis flow
//!
//! Word and structure budgets in these templates are instructions to the
//! model. Nothing here enforces them on the response.

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for the job description stage
    pub fn job_description(job_title: &str) -> String {
        format!(
            r#"Generate a concise job description for a {job_title}.
Include key responsibilities, required skills, and typical industries.
Format the output clearly with bullet points.
Keep your response under 200 words and focus on the most essential information.
Use short, clear sentences and avoid unnecessary jargon."#
        )
    }

    /// Prompt for extracting missions, deliverables and daily tasks
    pub fn missions_and_tasks(job_description: &str) -> String {
        format!(
            r#"Using ONLY the job description provided below, extract:
- 3 key missions (numbered) - one sentence each
- 5 main deliverables (bullet points) - one sentence each
- 7 critical daily tasks (bullet points) - keep to 5-7 words each

Do not add any information that is not directly derived from the job description.
Keep your entire response under 250 words.
Use clear, direct language and avoid unnecessary elaboration.

Job Description: {job_description}"#
        )
    }

    /// Prompt for AI augmentation opportunities
    pub fn ai_enhancements(job_description: &str) -> String {
        format!(
            r#"Concisely explain how AI can augment and improve this job role.
Provide in bullet point format:
1) Specific AI tools that could be used (3-4 tools, one sentence each)
2) Automation opportunities (3-4 points, one sentence each)
3) Efficiency gains (3-4 points, one sentence each)
4) Risks to consider (3-4 points, one sentence each)

Keep your entire response under 300 words.
Use clear, direct language with no unnecessary elaboration.
Focus on practical, actionable insights rather than theoretical possibilities.

Job: {job_description}"#
        )
    }

    /// Prompt for technology recommendations
    pub fn tech_recommendations(job_description: &str) -> String {
        format!(
            r#"Based on this job description, recommend 5 specific technologies and tools that would enhance this role.
For each technology, provide a single concise paragraph (2-3 sentences) that includes:
1) What it is and what it does
2) How it specifically helps with this job role
3) Approximate learning curve (easy/medium/difficult)
4) Whether it's free/paid/open-source

Format as a bulleted list with exactly 5 recommendations.
Keep your entire response under 300 words.
Focus on the most impactful technologies rather than covering everything possible.

Job: {job_description}"#
        )
    }

    /// Prompt for the transition plan.
    ///
    /// The enhancement and technology blocks are only included when present.
    pub fn transition_plan(
        job_title: &str,
        job_description: &str,
        ai_enhancements: Option<&str>,
        tech_recommendations: Option<&str>,
    ) -> String {
        let mut prompt = format!(
            r#"You are a specialized AI transformation consultant with expertise in helping professionals transition to AI-augmented roles.
Your task is to create a concise, practical, and actionable transition plan for a {job_title} to evolve into an AI-augmented professional.

First, analyze this job description carefully: {job_description}
"#
        );

        if let Some(enhancements) = ai_enhancements {
            prompt.push_str(&format!(
                "\nAI ENHANCEMENT OPPORTUNITIES IDENTIFIED:\n{enhancements}\n"
            ));
        }

        if let Some(technologies) = tech_recommendations {
            prompt.push_str(&format!("\nRECOMMENDED TECHNOLOGIES:\n{technologies}\n"));
        }

        prompt.push_str(&format!(
            r#"
Then, create a focused transition roadmap with the following sections, keeping the ENTIRE response under 600 words:

1) SKILLS DEVELOPMENT PLAN (25% of your response):
   - TECHNICAL SKILLS: List 3 specific technical skills most relevant for this role. For each, provide a one-sentence explanation of importance.
   - SOFT SKILLS: List 3 critical soft skills needed when working with AI. One sentence each.
   - LEARNING RESOURCES: For each skill, recommend ONE specific resource (course, book, or certification).

2) AI TOOLS IMPLEMENTATION STRATEGY (25% of your response):
   - IMMEDIATE ADOPTION (First 30 days): List 2 user-friendly AI tools with one-sentence descriptions.
   - INTERMEDIATE ADOPTION (2-3 months): List 2 more advanced tools with one-sentence descriptions.
   - ADVANCED ADOPTION (6-12 months): List 1 sophisticated AI solution with a one-sentence description.
   - For each tool, only note whether it's free/paid/open-source.

3) PSYCHOLOGICAL & ORGANIZATIONAL ADAPTATION (25% of your response):
   - MINDSET EVOLUTION: 2-3 sentences on required mindset shifts.
   - RESISTANCE MANAGEMENT: List 2 common resistance points with one-sentence strategies to overcome each.
   - ETHICAL CONSIDERATIONS: List 1 key ethical consideration with a one-sentence recommendation.

4) PHASED IMPLEMENTATION PLAN (25% of your response):
   - FIRST 30 DAYS: 2-3 bullet points with specific goals.
   - 2-3 MONTHS: 2-3 bullet points with specific goals.
   - 6-12 MONTHS: 2-3 bullet points with specific goals.
   - SUCCESS METRICS: List 3 specific metrics (one sentence each).

Format your response with clear headings and bullet points. Use extremely concise language. Make all recommendations highly specific to the {job_title} role, not generic advice. Prioritize brevity and clarity over comprehensiveness."#
        ));

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_description_contains_title() {
        let prompt = PromptTemplate::job_description("Accountant");
        assert!(prompt.contains("job description for a Accountant."));
    }

    #[test]
    fn test_downstream_prompts_embed_description() {
        let desc = "- Prepares financial statements\n- Reconciles ledgers";
        assert!(PromptTemplate::missions_and_tasks(desc).ends_with(desc));
        assert!(PromptTemplate::ai_enhancements(desc).ends_with(desc));
        assert!(PromptTemplate::tech_recommendations(desc).ends_with(desc));
    }

    #[test]
    fn test_transition_plan_with_all_context() {
        let prompt = PromptTemplate::transition_plan(
            "Accountant",
            "DESC",
            Some("Use OCR for invoices"),
            Some("Xero, Power BI"),
        );
        assert!(prompt.contains("analyze this job description carefully: DESC"));
        assert!(prompt.contains("AI ENHANCEMENT OPPORTUNITIES IDENTIFIED:\nUse OCR for invoices"));
        assert!(prompt.contains("RECOMMENDED TECHNOLOGIES:\nXero, Power BI"));
        assert!(prompt.contains("specific to the Accountant role"));
    }

    #[test]
    fn test_transition_plan_omits_absent_blocks() {
        let prompt = PromptTemplate::transition_plan("Accountant", "DESC", None, None);
        assert!(!prompt.contains("AI ENHANCEMENT OPPORTUNITIES"));
        assert!(!prompt.contains("RECOMMENDED TECHNOLOGIES"));
        assert!(!prompt.contains('{'));
        assert!(!prompt.contains("None"));
    }

    #[test]
    fn test_transition_plan_with_only_technologies() {
        let prompt = PromptTemplate::transition_plan("Accountant", "DESC", None, Some("Xero"));
        assert!(!prompt.contains("AI ENHANCEMENT OPPORTUNITIES"));
        assert!(prompt.contains("RECOMMENDED TECHNOLOGIES:\nXero"));
    }
}
