//! Prompt constants and builders for the two operations.
//!
//! The wording here is the product; change it deliberately. Tone fragments
//! are fixed instructional text. By the time a prompt is built, any
//! unrecognized tone has already been resolved to `Standard`.

use crate::roast::tone::RoastTone;

/// System role for roast generation.
pub const ROAST_SYSTEM: &str = "You are a witty and creative resume critic. \
Your job is to provide humorous but constructive feedback on resumes. \
Be clever and entertaining while pointing out areas for improvement.";

/// System role for improvement suggestions.
pub const IMPROVE_SYSTEM: &str = "You are a professional career counselor and resume expert. \
Provide detailed, actionable advice to help job seekers improve their resumes.";

const GENTLE_FRAGMENT: &str = "Please provide a gentle, humorous critique of this resume. \
Be witty but kind, pointing out areas for improvement with a light touch. \
Focus on constructive feedback wrapped in humor.";

const STANDARD_FRAGMENT: &str = "Roast this resume with a perfect balance of humor and insight. \
Be funny and creative while pointing out flaws and areas for improvement. \
Make it entertaining but genuinely helpful.";

const SAVAGE_FRAGMENT: &str = "Absolutely roast this resume! Be brutally honest, hilariously harsh, \
and creatively savage. Point out every flaw, gap, and questionable choice. \
Don't hold back - make it funny but devastating.";

const PROFESSIONAL_FRAGMENT: &str = "Provide a professional yet humorous analysis of this resume. \
Balance constructive criticism with witty observations. \
Be clever and insightful while maintaining a somewhat professional tone.";

/// The fixed instructional fragment for a tone.
pub fn tone_fragment(tone: RoastTone) -> &'static str {
    match tone {
        RoastTone::Gentle => GENTLE_FRAGMENT,
        RoastTone::Standard => STANDARD_FRAGMENT,
        RoastTone::Savage => SAVAGE_FRAGMENT,
        RoastTone::Professional => PROFESSIONAL_FRAGMENT,
    }
}

/// Builds the user prompt for a roast: preamble, resume text, tone fragment.
pub fn build_roast_prompt(resume_text: &str, tone: RoastTone) -> String {
    format!(
        "Here's a resume to analyze:\n\n{resume_text}\n\n{}",
        tone_fragment(tone)
    )
}

/// Builds the user prompt for improvement suggestions. Tone-independent,
/// with five fixed focus areas.
pub fn build_improvement_prompt(resume_text: &str) -> String {
    format!(
        "Please analyze this resume and provide specific, actionable improvement suggestions:\n\n\
         {resume_text}\n\n\
         Focus on:\n\
         1. Content improvements (missing sections, better descriptions)\n\
         2. Formatting and structure suggestions\n\
         3. Skills and experience presentation\n\
         4. Industry-specific recommendations\n\
         5. ATS (Applicant Tracking System) optimization tips\n\n\
         Provide concrete, implementable advice without being overly critical."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roast_prompt_embeds_resume_between_preamble_and_fragment() {
        let prompt = build_roast_prompt("John Doe, plumber", RoastTone::Standard);
        assert!(prompt.starts_with("Here's a resume to analyze:"));
        assert!(prompt.contains("John Doe, plumber"));
        assert!(prompt.ends_with(tone_fragment(RoastTone::Standard)));
    }

    #[test]
    fn test_each_tone_produces_a_distinct_prompt() {
        let tones = [
            RoastTone::Gentle,
            RoastTone::Standard,
            RoastTone::Savage,
            RoastTone::Professional,
        ];
        let prompts: Vec<String> = tones
            .iter()
            .map(|t| build_roast_prompt("resume", *t))
            .collect();
        for (i, a) in prompts.iter().enumerate() {
            for b in prompts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_savage_fragment_escalates_and_gentle_softens() {
        assert!(tone_fragment(RoastTone::Savage).contains("brutally honest"));
        assert!(tone_fragment(RoastTone::Gentle).contains("witty but kind"));
    }

    #[test]
    fn test_improvement_prompt_lists_all_focus_areas() {
        let prompt = build_improvement_prompt("resume body");
        assert!(prompt.contains("resume body"));
        assert!(prompt.contains("1. Content improvements"));
        assert!(prompt.contains("2. Formatting and structure"));
        assert!(prompt.contains("3. Skills and experience"));
        assert!(prompt.contains("4. Industry-specific"));
        assert!(prompt.contains("5. ATS (Applicant Tracking System)"));
    }
}
