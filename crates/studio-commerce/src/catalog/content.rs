//! Site content types beyond the service catalog.
//!
//! These mirror the remaining collections the agency site publishes — team,
//! testimonials, case studies. The cart never touches them; they exist for
//! rendering and search.

use crate::catalog::{CatalogItem, ContentSource};
use crate::ids::ServiceId;
use serde::{Deserialize, Serialize};

/// A team member profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub slug: String,
    pub full_name: String,
    pub job_title: String,
    pub bio: Option<String>,
    pub photo_ref: Option<String>,
    pub email: Option<String>,
}

impl TeamMember {
    pub fn new(slug: &str, full_name: &str, job_title: &str) -> Self {
        Self {
            slug: slug.to_string(),
            full_name: full_name.to_string(),
            job_title: job_title.to_string(),
            bio: None,
            photo_ref: None,
            email: None,
        }
    }

    pub fn with_bio(mut self, bio: &str) -> Self {
        self.bio = Some(bio.to_string());
        self
    }
}

/// A client testimonial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub slug: String,
    pub client_name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub quote: String,
    /// Star rating, 1-5.
    pub rating: Option<u8>,
}

impl Testimonial {
    pub fn new(slug: &str, client_name: &str, quote: &str) -> Self {
        Self {
            slug: slug.to_string(),
            client_name: client_name.to_string(),
            company: None,
            position: None,
            quote: quote.to_string(),
            rating: None,
        }
    }

    pub fn with_company(mut self, company: &str, position: &str) -> Self {
        self.company = Some(company.to_string());
        self.position = Some(position.to_string());
        self
    }
}

/// A project case study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseStudy {
    pub slug: String,
    pub project_title: String,
    pub client_name: String,
    pub overview: String,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub results: Option<String>,
    /// Service this project showcased, if still in the catalog.
    pub related_service: Option<ServiceId>,
}

impl CaseStudy {
    pub fn new(slug: &str, project_title: &str, client_name: &str, overview: &str) -> Self {
        Self {
            slug: slug.to_string(),
            project_title: project_title.to_string(),
            client_name: client_name.to_string(),
            overview: overview.to_string(),
            challenge: None,
            solution: None,
            results: None,
            related_service: None,
        }
    }
}

/// Everything the site publishes, held in memory.
///
/// Acts as the `ContentSource` for tests and demos; a hosted CMS client
/// would populate the same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteContent {
    pub services: Vec<CatalogItem>,
    pub team_members: Vec<TeamMember>,
    pub testimonials: Vec<Testimonial>,
    pub case_studies: Vec<CaseStudy>,
}

impl SiteContent {
    /// An empty content set.
    pub fn empty() -> Self {
        Self {
            services: Vec::new(),
            team_members: Vec::new(),
            testimonials: Vec::new(),
            case_studies: Vec::new(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            services: vec![
                CatalogItem::new("svc-web-design", "web-design", "Web Design & Development")
                    .with_description(
                        "Custom marketing sites and web apps, designed and built in-house.",
                    )
                    .with_price("$2,500.00"),
                CatalogItem::new("svc-brand-identity", "brand-identity", "Brand Identity")
                    .with_description("Naming, logo systems, and brand guidelines.")
                    .with_price("Starting at $1,200"),
                CatalogItem::new("svc-seo", "seo-retainer", "SEO Retainer")
                    .with_description("Ongoing technical SEO and content strategy.")
                    .with_price("$800/mo"),
            ],
            team_members: vec![
                TeamMember::new("ana-reyes", "Ana Reyes", "Creative Director")
                    .with_bio("Leads brand and design engagements."),
                TeamMember::new("tom-okafor", "Tom Okafor", "Lead Engineer")
                    .with_bio("Ships the web builds and keeps the lights on."),
            ],
            testimonials: vec![
                Testimonial::new(
                    "maria-chen",
                    "Maria Chen",
                    "The new site doubled our inbound leads within a quarter.",
                )
                .with_company("Harborline", "VP Marketing"),
                Testimonial::new(
                    "devon-hall",
                    "Devon Hall",
                    "Clear process, honest timelines, great work.",
                )
                .with_company("Northbeam Goods", "Founder"),
            ],
            case_studies: vec![CaseStudy {
                slug: "harborline-replatform".to_string(),
                project_title: "Harborline Replatform".to_string(),
                client_name: "Harborline".to_string(),
                overview: "Full redesign and replatform of a B2B marketing site.".to_string(),
                challenge: Some("Legacy CMS made every content change an engineering task.".to_string()),
                solution: Some("Headless CMS with a component-driven front end.".to_string()),
                results: Some("Content velocity up 4x; page weight cut in half.".to_string()),
                related_service: Some(ServiceId::new("svc-web-design")),
            }],
        }
    }
}

impl ContentSource for SiteContent {
    fn list_services(&self) -> Vec<CatalogItem> {
        self.services.clone()
    }

    fn service_by_slug_or_id(&self, key: &str) -> Option<CatalogItem> {
        self.services
            .iter()
            .find(|s| s.slug == key || s.id.as_str() == key)
            .cloned()
    }
}
