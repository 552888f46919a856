//! Static idea catalog.
//!
//! The catalog is a fixed set of templates. Only the title depends on the
//! requested profession; every other field is identical across searches.

use entities::{Difficulty, NicheCategory, NicheCostLevel, NicheIdea, NicheSource, SourcePlatform};

/// Phrase substituted into titles when no profession was given.
pub const DEFAULT_PROFESSION: &str = "your profession";

/// Builds the full catalog for a profession.
pub fn base_ideas(profession: &str) -> Vec<NicheIdea> {
    let prof = if profession.is_empty() {
        DEFAULT_PROFESSION
    } else {
        profession
    };

    vec![
        NicheIdea {
            id: "idea-1".to_string(),
            title: format!("Premium {} advisory for remote-first companies", prof),
            category: NicheCategory::Business,
            cost_level: NicheCostLevel::Medium,
            estimated_revenue_range: "$3k–$7k / month".to_string(),
            roi_timeline: "3–6 months".to_string(),
            difficulty: Difficulty::Medium,
            summary: "Productize your expertise into async strategy sessions and retainers for \
                      distributed teams."
                .to_string(),
            insights: strings(&[
                "Growing number of remote-first companies report gaps in specialized advice on \
                 Reddit and LinkedIn.",
                "Leaders are willing to pay for fast, async guidance that fits across time zones.",
                "Narrow focus (industry, company size) improves positioning and pricing power.",
            ]),
            steps: strings(&[
                "Interview 5–10 people in your target market to validate biggest pains.",
                "Design 2–3 clear advisory packages with transparent scope and outcomes.",
                "Publish a focused landing page and share it in niche communities (Slack groups, \
                 LinkedIn).",
            ]),
            sources: vec![
                NicheSource::new(
                    "src-1",
                    "r/Entrepreneur threads on expert advisory offers",
                    SourcePlatform::Reddit,
                ),
                NicheSource::new(
                    "src-2",
                    "LinkedIn posts on async consulting trends",
                    SourcePlatform::Linkedin,
                ),
            ],
        },
        NicheIdea {
            id: "idea-2".to_string(),
            title: format!("Cohort-based bootcamp for aspiring {}s", prof),
            category: NicheCategory::Jobs,
            cost_level: NicheCostLevel::Low,
            estimated_revenue_range: "$1k–$4k / cohort".to_string(),
            roi_timeline: "1–3 months".to_string(),
            difficulty: Difficulty::Low,
            summary: "Host small-group, outcome-focused live sessions teaching the most in-demand \
                      skills people ask about online."
                .to_string(),
            insights: strings(&[
                "High volume of “how do I break into this field?” questions on Reddit and Quora.",
                "Learners increasingly prefer guided cohorts over self-paced courses.",
                "Repeatable curriculum lets you iterate towards better outcomes and testimonials.",
            ]),
            steps: strings(&[
                "Compile the top recurring questions beginners ask about your field.",
                "Design a 3–4 week live curriculum with clear weekly deliverables.",
                "Pilot the first cohort at a discounted rate with 5–10 students for testimonials.",
            ]),
            sources: vec![
                NicheSource::new(
                    "src-3",
                    "Quora questions about getting started in the field",
                    SourcePlatform::Quora,
                ),
                NicheSource::new(
                    "src-4",
                    "X / Twitter threads on cohort-based education trends",
                    SourcePlatform::Twitter,
                ),
            ],
        },
        NicheIdea {
            id: "idea-3".to_string(),
            title: format!("Done-with-you systems setup for solo {}s", prof),
            category: NicheCategory::SideHustles,
            cost_level: NicheCostLevel::Low,
            estimated_revenue_range: "$500–$2k / client".to_string(),
            roi_timeline: "1–2 months".to_string(),
            difficulty: Difficulty::Low,
            summary: "Help other professionals set up tools, automations, and workflows you \
                      already mastered in your own practice."
                .to_string(),
            insights: strings(&[
                "Social posts reveal many solo operators feel overwhelmed by tools and admin.",
                "People pay more for implementation than generic “tips.”",
                "Documented SOPs become assets you can later turn into templates or a course.",
            ]),
            steps: strings(&[
                "List the top 3–5 tools you rely on daily and what they accomplish for you.",
                "Offer a limited number of implementation slots with clear before/after outcomes.",
                "Record each engagement to turn into reusable checklists and templates.",
            ]),
            sources: vec![
                NicheSource::new(
                    "src-5",
                    "Instagram / LinkedIn posts about burnout from admin work",
                    SourcePlatform::Linkedin,
                ),
                NicheSource::new(
                    "src-6",
                    "Industry reports on rise of solo professionals",
                    SourcePlatform::Report,
                ),
            ],
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_one_idea_per_category() {
        let ideas = base_ideas("designer");
        assert_eq!(ideas.len(), 3);

        let categories: Vec<_> = ideas.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![
                NicheCategory::Business,
                NicheCategory::Jobs,
                NicheCategory::SideHustles
            ]
        );
    }

    #[test]
    fn test_profession_substitution() {
        let ideas = base_ideas("chef");
        assert_eq!(
            ideas[0].title,
            "Premium chef advisory for remote-first companies"
        );
        assert_eq!(ideas[1].title, "Cohort-based bootcamp for aspiring chefs");
        assert_eq!(ideas[2].title, "Done-with-you systems setup for solo chefs");
    }

    #[test]
    fn test_empty_profession_uses_placeholder() {
        for idea in base_ideas("") {
            assert!(idea.title.contains(DEFAULT_PROFESSION), "{}", idea.title);
        }
    }

    #[test]
    fn test_catalog_records_are_complete() {
        for idea in base_ideas("nurse") {
            assert_eq!(idea.insights.len(), 3);
            assert_eq!(idea.steps.len(), 3);
            assert_eq!(idea.sources.len(), 2);
            assert!(idea.sources.iter().all(|s| s.platform.is_some()));
        }
    }
}
