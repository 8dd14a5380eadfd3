use std::sync::LazyLock;

use chrono::NaiveDate;
use studio_models::content::{
    Article, ArticleCategory, ArticleSummary, CaseStudy, CaseStudyResult, Project,
    ProjectCategory, Service,
};

const TEAM: &str = "nordAi.studio Team";

pub static ARTICLES: LazyLock<Vec<ArticleSummary>> = LazyLock::new(|| {
    [
        (
            "future-of-ai-automation",
            "The Future of AI Automation in Business",
            "Exploring how artificial intelligence is reshaping enterprise workflows and what it means for the future of work.",
            ArticleCategory::Ai,
            (2025, 1, 8),
            8,
        ),
        (
            "design-systems-scale",
            "Building Design Systems That Scale",
            "A practical guide to creating maintainable design systems that grow with your product.",
            ArticleCategory::Design,
            (2025, 1, 5),
            6,
        ),
        (
            "ai-branding-strategy",
            "How AI is Transforming Brand Strategy",
            "Data-driven insights are revolutionizing how brands connect with their audiences.",
            ArticleCategory::Insights,
            (2025, 1, 2),
            5,
        ),
        (
            "workflow-automation-guide",
            "Complete Guide to Workflow Automation",
            "Step-by-step approach to identifying and automating repetitive business processes.",
            ArticleCategory::Automation,
            (2024, 12, 28),
            10,
        ),
        (
            "ux-trends-2025",
            "UX Design Trends to Watch in 2025",
            "From AI-powered interfaces to spatial design, here are the trends shaping user experience.",
            ArticleCategory::Trends,
            (2024, 12, 22),
            7,
        ),
        (
            "measuring-ai-roi",
            "Measuring ROI on AI Investments",
            "Practical frameworks for quantifying the business value of artificial intelligence initiatives.",
            ArticleCategory::Insights,
            (2024, 12, 18),
            9,
        ),
    ]
    .into_iter()
    .map(
        |(slug, title, excerpt, category, (y, m, d), read_time_minutes)| ArticleSummary {
            slug: slug.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            category,
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            read_time_minutes,
        },
    )
    .collect()
});

/// Body paragraphs of the articles that have a detail page.
pub static ARTICLE_BODIES: LazyLock<Vec<(&str, Vec<&str>)>> = LazyLock::new(|| {
    vec![
        (
            "future-of-ai-automation",
            vec![
                "Artificial intelligence is no longer a futuristic concept. It's transforming businesses today. From customer service chatbots to complex supply chain optimization, AI-powered automation is reshaping how organizations operate and compete.",
                "The integration of AI into business workflows represents a paradigm shift in operational efficiency. Companies that embrace this technology are seeing dramatic improvements in productivity, accuracy, and cost savings.",
                "One of the most significant impacts of AI automation is its ability to handle repetitive tasks with unprecedented speed and accuracy. This frees up human workers to focus on creative, strategic, and interpersonal work that machines cannot replicate.",
                "Looking ahead, we expect to see even more sophisticated AI systems that can handle complex decision-making processes, learn from their environment in real-time, and seamlessly collaborate with human teams.",
                "For businesses considering AI automation, the key is to start with clear objectives, pilot programs in controlled environments, and scale gradually based on proven results. The future belongs to organizations that can effectively blend human creativity with machine efficiency.",
            ],
        ),
        (
            "design-systems-scale",
            vec![
                "A well-crafted design system is the foundation of consistent, scalable product design. It serves as a single source of truth for design decisions, enabling teams to work efficiently and maintain brand coherence across all touchpoints.",
                "The key to building a scalable design system lies in establishing clear principles, flexible components, and robust documentation. These elements work together to create a system that can evolve with your product.",
                "Component design should prioritize composability and flexibility. Rather than creating rigid, single-purpose components, build modular pieces that can be combined in various ways to meet different use cases.",
                "Documentation is often undervalued but is crucial for adoption. Clear guidelines, usage examples, and best practices help designers and developers understand when and how to use each component.",
                "Remember that a design system is never truly finished. Plan for iteration and improvement from the start, and establish processes for gathering feedback and implementing updates.",
            ],
        ),
    ]
});

pub fn article(slug: &str) -> Option<Article> {
    let summary = ARTICLES.iter().find(|a| a.slug == slug)?;
    let (_, paragraphs) = ARTICLE_BODIES.iter().find(|(s, _)| *s == slug)?;
    Some(Article {
        summary: summary.clone(),
        author: TEAM.into(),
        paragraphs: paragraphs.iter().map(|&p| p.into()).collect(),
    })
}

pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    [
        (
            "fintech-automation",
            "FinTech AI Automation",
            "Nordic Bank Group",
            ProjectCategory::Ai,
            "Automated customer service reducing response times by 80%.",
        ),
        (
            "ecommerce-redesign",
            "E-commerce Redesign",
            "Scandinavian Retail Co",
            ProjectCategory::Web,
            "Complete platform overhaul resulting in 150% conversion increase.",
        ),
        (
            "brand-identity",
            "Tech Startup Branding",
            "GreenTech Innovations",
            ProjectCategory::Branding,
            "Full brand identity for sustainability-focused tech company.",
        ),
        (
            "healthcare-app",
            "Healthcare App UX",
            "MedCare Solutions",
            ProjectCategory::Design,
            "Patient-centered mobile app with accessibility focus.",
        ),
        (
            "ai-content-platform",
            "AI Content Platform",
            "MediaHouse International",
            ProjectCategory::Ai,
            "AI-powered content generation and distribution platform.",
        ),
        (
            "saas-dashboard",
            "SaaS Analytics Dashboard",
            "DataDriven Inc",
            ProjectCategory::Web,
            "Real-time analytics dashboard with predictive insights.",
        ),
    ]
    .into_iter()
    .map(|(slug, title, client, category, excerpt)| Project {
        slug: slug.into(),
        title: title.into(),
        client: client.into(),
        category,
        excerpt: excerpt.into(),
    })
    .collect()
});

struct CaseStudyDetail {
    slug: &'static str,
    challenge: &'static str,
    solution: &'static str,
    process: [&'static str; 4],
    results: [(&'static str, &'static str); 4],
    tech_stack: &'static [&'static str],
}

const CASE_STUDIES: &[CaseStudyDetail] = &[
    CaseStudyDetail {
        slug: "fintech-automation",
        challenge: "Nordic Bank Group was struggling with overwhelming customer service volumes, with average response times exceeding 24 hours and customer satisfaction scores declining.",
        solution: "We implemented a comprehensive AI-powered customer service automation system that handles 70% of inquiries automatically while seamlessly escalating complex issues to human agents.",
        process: [
            "Discovery & audit of existing customer service workflows",
            "AI model training on historical customer interactions",
            "Integration with existing CRM and ticketing systems",
            "Phased rollout with continuous optimization",
        ],
        results: [
            ("Response Time Reduction", "80%"),
            ("Customer Satisfaction", "+45%"),
            ("Cost Savings", "$2.4M/year"),
            ("Automation Rate", "70%"),
        ],
        tech_stack: &["GPT-4", "Python", "AWS", "Salesforce", "Custom NLP"],
    },
    CaseStudyDetail {
        slug: "ecommerce-redesign",
        challenge: "Legacy e-commerce platform with poor mobile experience, slow load times, and outdated design was causing high cart abandonment rates.",
        solution: "Complete platform rebuild with modern tech stack, AI-powered product recommendations, and streamlined checkout experience.",
        process: [
            "Comprehensive UX research and competitive analysis",
            "Design system creation with accessibility focus",
            "Headless commerce architecture implementation",
            "Performance optimization and A/B testing",
        ],
        results: [
            ("Conversion Rate", "+150%"),
            ("Mobile Revenue", "+220%"),
            ("Page Load Time", "-65%"),
            ("Cart Abandonment", "-40%"),
        ],
        tech_stack: &["Next.js", "Shopify", "Algolia", "Vercel", "Tailwind CSS"],
    },
];

pub fn case_study(slug: &str) -> Option<CaseStudy> {
    let project = PROJECTS.iter().find(|p| p.slug == slug)?;
    let detail = CASE_STUDIES.iter().find(|c| c.slug == slug)?;
    Some(CaseStudy {
        project: project.clone(),
        challenge: detail.challenge.into(),
        solution: detail.solution.into(),
        process: detail.process.iter().map(|&step| step.into()).collect(),
        results: detail
            .results
            .iter()
            .map(|&(metric, value)| CaseStudyResult {
                metric: metric.into(),
                value: value.into(),
            })
            .collect(),
        tech_stack: detail.tech_stack.iter().map(|&t| t.into()).collect(),
    })
}

/// Services in navigation order. Each one links to the next, the last one
/// back to the first.
pub static SERVICES: LazyLock<Vec<Service>> = LazyLock::new(|| {
    let services = [
        ("ai-automation", "ai_automation"),
        ("branding", "branding"),
        ("ux-design", "ux_design"),
        ("digital-products", "digital_products"),
        ("content-marketing", "content_marketing"),
    ];
    services
        .iter()
        .zip(services.iter().cycle().skip(1))
        .map(|(&(slug, key), &(next_slug, _))| Service {
            slug: slug.into(),
            key: key.into(),
            next_slug: next_slug.into(),
        })
        .collect()
});
