//! Free-text search over site content.
//!
//! Case-insensitive substring matching across every published collection,
//! with title matches ranked ahead of body matches. This is deliberately
//! simple — the content set is small enough that a scan beats an index.

use crate::catalog::SiteContent;
use serde::{Deserialize, Serialize};

/// Which collection a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Services,
    TeamMembers,
    Testimonials,
    CaseStudies,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Services => "services",
            ContentKind::TeamMembers => "team-members",
            ContentKind::Testimonials => "testimonials",
            ContentKind::CaseStudies => "case-studies",
        }
    }
}

/// One ranked search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub kind: ContentKind,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
}

/// Search every collection for `query`. A blank query matches nothing.
pub fn search_content(content: &SiteContent, query: &str) -> Vec<SearchResult> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    for service in &content.services {
        let haystack = [
            service.name.as_str(),
            service.description.as_deref().unwrap_or(""),
            service.price_text.as_deref().unwrap_or(""),
        ]
        .join(" ");

        if normalize(&haystack).contains(&needle) {
            results.push(SearchResult {
                kind: ContentKind::Services,
                title: service.name.clone(),
                slug: service.slug.clone(),
                excerpt: excerpt(service.description.as_deref().unwrap_or("")),
            });
        }
    }

    for member in &content.team_members {
        let haystack = [
            member.full_name.as_str(),
            member.job_title.as_str(),
            member.bio.as_deref().unwrap_or(""),
            member.email.as_deref().unwrap_or(""),
        ]
        .join(" ");

        if normalize(&haystack).contains(&needle) {
            results.push(SearchResult {
                kind: ContentKind::TeamMembers,
                title: member.full_name.clone(),
                slug: member.slug.clone(),
                excerpt: excerpt(&member.job_title),
            });
        }
    }

    for testimonial in &content.testimonials {
        let haystack = [
            testimonial.client_name.as_str(),
            testimonial.company.as_deref().unwrap_or(""),
            testimonial.position.as_deref().unwrap_or(""),
            testimonial.quote.as_str(),
        ]
        .join(" ");

        if normalize(&haystack).contains(&needle) {
            results.push(SearchResult {
                kind: ContentKind::Testimonials,
                title: testimonial.client_name.clone(),
                slug: testimonial.slug.clone(),
                excerpt: excerpt(&testimonial.quote),
            });
        }
    }

    for case_study in &content.case_studies {
        let haystack = [
            case_study.project_title.as_str(),
            case_study.client_name.as_str(),
            case_study.overview.as_str(),
            case_study.challenge.as_deref().unwrap_or(""),
            case_study.solution.as_deref().unwrap_or(""),
            case_study.results.as_deref().unwrap_or(""),
        ]
        .join(" ");

        if normalize(&haystack).contains(&needle) {
            results.push(SearchResult {
                kind: ContentKind::CaseStudies,
                title: case_study.project_title.clone(),
                slug: case_study.slug.clone(),
                excerpt: excerpt(&case_study.overview),
            });
        }
    }

    // Title hits outrank body hits; ties break alphabetically.
    results.sort_by(|a, b| {
        let a_title = normalize(&a.title).contains(&needle);
        let b_title = normalize(&b.title).contains(&needle);
        b_title.cmp(&a_title).then_with(|| a.title.cmp(&b.title))
    });

    results
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn excerpt(text: &str) -> String {
    const MAX: usize = 150;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        text.chars().take(MAX).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_matches_nothing() {
        let content = SiteContent::default();
        assert!(search_content(&content, "").is_empty());
        assert!(search_content(&content, "   ").is_empty());
    }

    #[test]
    fn test_matches_are_case_insensitive() {
        let content = SiteContent::default();
        let results = search_content(&content, "WEB DESIGN");
        assert!(results
            .iter()
            .any(|r| r.kind == ContentKind::Services && r.slug == "web-design"));
    }

    #[test]
    fn test_matches_span_collections() {
        let content = SiteContent::default();
        // "Harborline" appears in a testimonial and a case study.
        let results = search_content(&content, "harborline");

        assert!(results.iter().any(|r| r.kind == ContentKind::Testimonials));
        assert!(results.iter().any(|r| r.kind == ContentKind::CaseStudies));
    }

    #[test]
    fn test_title_matches_rank_first() {
        let content = SiteContent::default();
        let results = search_content(&content, "harborline");

        // The case study has "Harborline" in its title; the testimonial only
        // mentions it in body fields.
        assert_eq!(results[0].kind, ContentKind::CaseStudies);
    }

    #[test]
    fn test_body_match_found() {
        let content = SiteContent::default();
        let results = search_content(&content, "inbound leads");
        assert!(results.iter().any(|r| r.kind == ContentKind::Testimonials));
    }
}
