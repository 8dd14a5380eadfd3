use studio_models::content::{
    Article, ArticleCategory, ArticleSummary, CaseStudy, CategoryFilter, Project,
    ProjectCategory, ServiceDetail,
};

/// Read-only access to the site's blog, portfolio and service pages.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContentService: Send + Sync + 'static {
    /// Articles in the selected category, newest first.
    fn list_articles(&self, filter: CategoryFilter<ArticleCategory>) -> Vec<ArticleSummary>;

    fn get_article(&self, slug: &str) -> Option<Article>;

    fn list_projects(&self, filter: CategoryFilter<ProjectCategory>) -> Vec<Project>;

    fn get_case_study(&self, slug: &str) -> Option<CaseStudy>;

    /// All services in navigation order, with texts in the active locale.
    fn list_services(&self) -> Vec<ServiceDetail>;

    fn get_service(&self, slug: &str) -> Option<ServiceDetail>;
}

#[cfg(feature = "mock")]
impl MockContentService {
    pub fn with_get_article(mut self, slug: &'static str, result: Option<Article>) -> Self {
        self.expect_get_article()
            .once()
            .with(mockall::predicate::eq(slug))
            .return_once(move |_| result);
        self
    }

    pub fn with_list_articles(
        mut self,
        filter: CategoryFilter<ArticleCategory>,
        result: Vec<ArticleSummary>,
    ) -> Self {
        self.expect_list_articles()
            .once()
            .with(mockall::predicate::eq(filter))
            .return_once(move |_| result);
        self
    }
}
