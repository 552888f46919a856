//! Plain-text rendering of shell output.

use std::fmt::Write;

use entities::{BillingPeriod, NicheIdea, NicheSearchResult, SearchHistoryItem, SubscriptionPlan, User};

pub fn user_badge(user: &User) -> String {
    format!(
        "[{}] {} <{}> · {} plan",
        user.initial().unwrap_or('?'),
        user.name,
        user.email,
        user.plan.as_str().to_uppercase()
    )
}

/// One-paragraph card for an idea.
pub fn idea_card(idea: &NicheIdea) -> String {
    format!(
        "[{}] {}\n    {} · {} cost · {} · ROI {} · difficulty {}\n    {}",
        idea.id,
        idea.title,
        idea.category,
        idea.cost_level,
        idea.estimated_revenue_range,
        idea.roi_timeline,
        idea.difficulty.as_str(),
        idea.summary
    )
}

/// Full report of an idea: card, insights, steps and sources.
pub fn idea_report(idea: &NicheIdea) -> String {
    let mut out = idea_card(idea);

    out.push_str("\n  Why this niche:");
    for insight in &idea.insights {
        let _ = write!(out, "\n    - {}", insight);
    }

    out.push_str("\n  Launch plan:");
    for (i, step) in idea.steps.iter().enumerate() {
        let _ = write!(out, "\n    {}. {}", i + 1, step);
    }

    out.push_str("\n  Sources:");
    for source in &idea.sources {
        match source.platform {
            Some(platform) => {
                let _ = write!(out, "\n    - {} ({:?})", source.label, platform);
            }
            None => {
                let _ = write!(out, "\n    - {}", source.label);
            }
        }
    }

    out
}

/// Search results followed by the free plan usage line, if any.
pub fn search_result(result: &NicheSearchResult, free_usage: Option<(u32, u32)>) -> String {
    let mut out = format!(
        "Showing {} AI-simulated niches for {}.",
        result.ideas.len(),
        result.query.profession
    );

    for idea in &result.ideas {
        out.push_str("\n\n");
        out.push_str(&idea_card(idea));
    }

    if let Some((used, limit)) = free_usage {
        let _ = write!(
            out,
            "\n\nFree plan: {}/{} full hunts used this session. Upgrade with `plan pro` for \
             unlimited searches and deeper reports.",
            used, limit
        );
    }

    out
}

pub fn history(items: &[SearchHistoryItem]) -> String {
    if items.is_empty() {
        return "No searches yet. Run `hunt <profession>` to get started.".to_string();
    }

    items
        .iter()
        .map(|item| {
            format!(
                "{} · {} ideas · {}",
                item.profession,
                item.result_count,
                item.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn saved(ideas: &[NicheIdea]) -> String {
    if ideas.is_empty() {
        return "No saved niches yet. Use `save <idea-id>` after a hunt.".to_string();
    }

    ideas.iter().map(idea_card).collect::<Vec<_>>().join("\n\n")
}

/// Price table, marking the current plan.
pub fn pricing(billing: BillingPeriod, current: Option<SubscriptionPlan>) -> String {
    SubscriptionPlan::all()
        .iter()
        .map(|plan| {
            let marker = if Some(*plan) == current {
                " (current)"
            } else {
                ""
            };
            format!("{:<10} {}{}", plan.as_str(), plan.price(billing), marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use entities::NicheSearchRequest;

    use super::*;

    #[test]
    fn test_user_badge() {
        let user = User::new("ada@example.com", "ada").with_plan(SubscriptionPlan::Pro);
        assert_eq!(user_badge(&user), "[A] ada <ada@example.com> · PRO plan");
    }

    #[test]
    fn test_search_result_with_free_usage() {
        let result = NicheSearchResult {
            request_id: "req".to_string(),
            query: NicheSearchRequest::new("chef"),
            ideas: niche_search::base_ideas("chef"),
            created_at: Utc::now(),
        };

        let out = search_result(&result, Some((1, 3)));
        assert!(out.starts_with("Showing 3 AI-simulated niches for chef."));
        assert!(out.contains("[idea-1] Premium chef advisory for remote-first companies"));
        assert!(out.contains("Free plan: 1/3 full hunts used this session."));

        let out = search_result(&result, None);
        assert!(!out.contains("Free plan"));
    }

    #[test]
    fn test_idea_report_lists_steps_in_order() {
        let idea = niche_search::base_ideas("chef").remove(1);
        let out = idea_report(&idea);
        assert!(out.contains("1. Compile the top recurring questions"));
        assert!(out.contains("3. Pilot the first cohort"));
        assert!(out.contains("(Quora)"));
    }

    #[test]
    fn test_history() {
        assert!(history(&[]).starts_with("No searches yet"));

        let items = vec![SearchHistoryItem {
            id: "req".to_string(),
            profession: "chef".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            result_count: 1,
        }];
        assert_eq!(history(&items), "chef · 1 ideas · 2026-01-02 03:04:05 UTC");
    }

    #[test]
    fn test_pricing_marks_current_plan() {
        let out = pricing(BillingPeriod::Annual, Some(SubscriptionPlan::Pro));
        assert_eq!(
            out,
            "free       $0\npro        $182/yr (current)\nenterprise $950/yr"
        );
    }
}
