use studio_core_content_contracts::ContentService;
use studio_i18n_contracts::TextService;
use studio_models::content::{
    Article, ArticleCategory, ArticleSummary, CaseStudy, CategoryFilter, Project,
    ProjectCategory, Service, ServiceDetail,
};
use tracing::debug;

mod data;

#[derive(Debug, Clone)]
pub struct ContentServiceImpl<Text> {
    text: Text,
}

impl<Text> ContentServiceImpl<Text> {
    pub fn new(text: Text) -> Self {
        Self { text }
    }
}

impl<Text> ContentService for ContentServiceImpl<Text>
where
    Text: TextService,
{
    fn list_articles(&self, filter: CategoryFilter<ArticleCategory>) -> Vec<ArticleSummary> {
        data::ARTICLES
            .iter()
            .filter(|article| filter.matches(&article.category))
            .cloned()
            .collect()
    }

    fn get_article(&self, slug: &str) -> Option<Article> {
        let article = data::article(slug);
        if article.is_none() {
            debug!(slug, "article not found");
        }
        article
    }

    fn list_projects(&self, filter: CategoryFilter<ProjectCategory>) -> Vec<Project> {
        data::PROJECTS
            .iter()
            .filter(|project| filter.matches(&project.category))
            .cloned()
            .collect()
    }

    fn get_case_study(&self, slug: &str) -> Option<CaseStudy> {
        let case_study = data::case_study(slug);
        if case_study.is_none() {
            debug!(slug, "case study not found");
        }
        case_study
    }

    fn list_services(&self) -> Vec<ServiceDetail> {
        data::SERVICES
            .iter()
            .map(|service| self.service_detail(service))
            .collect()
    }

    fn get_service(&self, slug: &str) -> Option<ServiceDetail> {
        data::SERVICES
            .iter()
            .find(|service| service.slug == slug)
            .map(|service| self.service_detail(service))
    }
}

impl<Text> ContentServiceImpl<Text>
where
    Text: TextService,
{
    fn service_detail(&self, service: &Service) -> ServiceDetail {
        let prefix = format!("services.items.{}", service.key);
        ServiceDetail {
            service: service.clone(),
            title: self.text.lookup(&format!("{prefix}.title")),
            description: self.text.lookup(&format!("{prefix}.description")),
            features: self.text.lookup_list(&format!("{prefix}.features")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use studio_i18n_contracts::MockTextService;

    use super::*;

    fn sut() -> ContentServiceImpl<MockTextService> {
        ContentServiceImpl::new(MockTextService::echo())
    }

    fn slugs<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        items.into_iter().collect()
    }

    #[test]
    fn list_all_articles() {
        let articles = sut().list_articles(CategoryFilter::All);

        assert_eq!(
            slugs(articles.iter().map(|a| a.slug.as_str())),
            [
                "future-of-ai-automation",
                "design-systems-scale",
                "ai-branding-strategy",
                "workflow-automation-guide",
                "ux-trends-2025",
                "measuring-ai-roi",
            ]
        );
        assert!(articles.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn list_articles_by_category() {
        let articles = sut().list_articles(CategoryFilter::Only(ArticleCategory::Insights));

        assert_eq!(
            slugs(articles.iter().map(|a| a.slug.as_str())),
            ["ai-branding-strategy", "measuring-ai-roi"]
        );
    }

    #[test]
    fn get_article() {
        let article = sut().get_article("design-systems-scale").unwrap();

        assert_eq!(article.summary.title, "Building Design Systems That Scale");
        assert_eq!(article.author, "nordAi.studio Team");
        assert_eq!(article.paragraphs.len(), 5);
    }

    #[test]
    fn get_article_not_found() {
        assert_eq!(sut().get_article("nope"), None);
        assert_eq!(sut().get_article("ux-trends-2025"), None);
    }

    #[test]
    fn list_projects_by_category() {
        let projects = sut().list_projects(CategoryFilter::Only(ProjectCategory::Web));

        assert_eq!(
            slugs(projects.iter().map(|p| p.slug.as_str())),
            ["ecommerce-redesign", "saas-dashboard"]
        );
        assert_eq!(sut().list_projects(CategoryFilter::All).len(), 6);
    }

    #[test]
    fn get_case_study() {
        let case_study = sut().get_case_study("fintech-automation").unwrap();

        assert_eq!(case_study.project.client, "Nordic Bank Group");
        assert_eq!(case_study.process.len(), 4);
        assert_eq!(case_study.results[2].value, "$2.4M/year");
        assert_eq!(case_study.tech_stack.len(), 5);
    }

    #[test]
    fn get_case_study_not_found() {
        assert_eq!(sut().get_case_study("saas-dashboard"), None);
    }

    #[test]
    fn get_service() {
        // Arrange
        let text = MockTextService::echo().with_lookup_list(
            "services.items.branding.features",
            vec!["Brand strategy and positioning".into()],
        );
        let sut = ContentServiceImpl::new(text);

        // Act
        let service = sut.get_service("branding").unwrap();

        // Assert
        assert_eq!(service.title, "services.items.branding.title");
        assert_eq!(service.description, "services.items.branding.description");
        assert_eq!(service.features, ["Brand strategy and positioning"]);
        assert_eq!(service.service.next_slug, "ux-design");
    }

    #[test]
    fn next_service_wraps_around() {
        let services = data::SERVICES.clone();

        assert_eq!(services.len(), 5);
        assert_eq!(services[4].slug, "content-marketing");
        assert_eq!(services[4].next_slug, "ai-automation");
        for pair in services.windows(2) {
            assert_eq!(pair[0].next_slug, pair[1].slug);
        }
    }

    #[test]
    fn get_service_not_found() {
        assert_eq!(sut().get_service("nope"), None);
    }
}
