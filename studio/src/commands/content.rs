use anyhow::anyhow;
use clap::Subcommand;
use studio_core_content_contracts::ContentService;
use studio_i18n_contracts::TextService;
use studio_models::content::{ArticleCategory, ArticleSummary, CategoryFilter, ProjectCategory};

#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// List blog articles, newest first
    #[command(aliases(["blog"]))]
    Articles {
        /// Only show articles in this category (all, ai, automation, design,
        /// insights, trends)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter<ArticleCategory>,
    },
    /// Show a blog article
    Article { slug: String },
    /// List portfolio projects
    #[command(aliases(["portfolio"]))]
    Projects {
        /// Only show projects in this category (all, ai, branding, web, design)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter<ProjectCategory>,
    },
    /// Show the case study of a project
    CaseStudy { slug: String },
    /// List services
    Services,
    /// Show a service
    Service { slug: String },
}

impl ContentCommand {
    pub fn render(
        self,
        content: &impl ContentService,
        text: &impl TextService,
    ) -> anyhow::Result<String> {
        let mut lines = Vec::new();

        match self {
            ContentCommand::Articles { category } => {
                lines.push(text.lookup("blog.title"));
                for article in content.list_articles(category) {
                    lines.push(String::new());
                    lines.push(article.title.clone());
                    lines.push(format!("  {}", article_meta(text, &article)));
                    lines.push(format!("  {}", article.excerpt));
                }
            }
            ContentCommand::Article { slug } => {
                let article = content
                    .get_article(&slug)
                    .ok_or_else(|| anyhow!("Article not found: {slug}"))?;
                lines.push(article.summary.title.clone());
                lines.push(format!(
                    "{} {} · {}",
                    text.lookup("blog.by"),
                    article.author,
                    article_meta(text, &article.summary)
                ));
                for paragraph in article.paragraphs {
                    lines.push(String::new());
                    lines.push(paragraph);
                }
            }
            ContentCommand::Projects { category } => {
                lines.push(text.lookup("portfolio.title"));
                for project in content.list_projects(category) {
                    lines.push(String::new());
                    lines.push(format!(
                        "{} ({})",
                        project.title,
                        text.lookup(&format!("portfolio.categories.{}", project.category))
                    ));
                    lines.push(format!("  {}", project.client));
                    lines.push(format!("  {}", project.excerpt));
                }
            }
            ContentCommand::CaseStudy { slug } => {
                let case_study = content
                    .get_case_study(&slug)
                    .ok_or_else(|| anyhow!("Case study not found: {slug}"))?;
                lines.push(case_study.project.title.clone());
                lines.push(format!(
                    "{}: {}",
                    text.lookup("portfolio.case_study.client"),
                    case_study.project.client
                ));
                lines.push(String::new());
                lines.push(text.lookup("portfolio.case_study.challenge"));
                lines.push(format!("  {}", case_study.challenge));
                lines.push(text.lookup("portfolio.case_study.solution"));
                lines.push(format!("  {}", case_study.solution));
                lines.push(text.lookup("portfolio.case_study.process"));
                lines.extend(
                    case_study
                        .process
                        .iter()
                        .enumerate()
                        .map(|(i, step)| format!("  {}. {step}", i + 1)),
                );
                lines.push(text.lookup("portfolio.case_study.results"));
                lines.extend(
                    case_study
                        .results
                        .iter()
                        .map(|result| format!("  {}: {}", result.metric, result.value)),
                );
                lines.push(text.lookup("portfolio.case_study.tech_stack"));
                lines.push(format!("  {}", case_study.tech_stack.join(", ")));
            }
            ContentCommand::Services => {
                lines.push(text.lookup("services.title"));
                for service in content.list_services() {
                    lines.push(String::new());
                    lines.push(format!("{} ({})", service.title, service.service.slug));
                    lines.push(format!("  {}", service.description));
                }
            }
            ContentCommand::Service { slug } => {
                let service = content
                    .get_service(&slug)
                    .ok_or_else(|| anyhow!("Service not found: {slug}"))?;
                lines.push(service.title);
                lines.push(format!("  {}", service.description));
                lines.push(String::new());
                lines.extend(service.features.iter().map(|feature| format!("- {feature}")));
                lines.push(String::new());
                lines.push(format!(
                    "{}: {}",
                    text.lookup("services.next"),
                    service.service.next_slug
                ));
            }
        }

        Ok(lines.into_iter().map(|line| line + "\n").collect())
    }
}

fn article_meta(text: &impl TextService, article: &ArticleSummary) -> String {
    format!(
        "{} · {} · {} {}",
        text.lookup(&format!("blog.categories.{}", article.category)),
        article.display_date(),
        article.read_time_minutes,
        text.lookup("blog.read_time")
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use studio_core_content_contracts::MockContentService;
    use studio_i18n_contracts::MockTextService;
    use studio_models::content::Article;
    use studio_utils::assert_matches;

    use super::*;

    fn summary() -> ArticleSummary {
        ArticleSummary {
            slug: "design-systems-scale".into(),
            title: "Building Design Systems That Scale".into(),
            excerpt: "A practical guide.".into(),
            category: ArticleCategory::Design,
            date: "2025-01-05".parse().unwrap(),
            read_time_minutes: 6,
        }
    }

    #[test]
    fn articles() {
        // Arrange
        let content = MockContentService::new().with_list_articles(
            CategoryFilter::Only(ArticleCategory::Design),
            vec![summary()],
        );
        let command = ContentCommand::Articles {
            category: CategoryFilter::Only(ArticleCategory::Design),
        };

        // Act
        let result = command.render(&content, &MockTextService::echo()).unwrap();

        // Assert
        assert_eq!(
            result,
            "blog.title\n\
             \n\
             Building Design Systems That Scale\n\
             \x20 blog.categories.design · January 5, 2025 · 6 blog.read_time\n\
             \x20 A practical guide.\n"
        );
    }

    #[test]
    fn article() {
        // Arrange
        let content = MockContentService::new().with_get_article(
            "design-systems-scale",
            Some(Article {
                summary: summary(),
                author: "nordAi.studio Team".into(),
                paragraphs: vec!["First.".into(), "Second.".into()],
            }),
        );
        let command = ContentCommand::Article {
            slug: "design-systems-scale".into(),
        };

        // Act
        let result = command.render(&content, &MockTextService::echo()).unwrap();

        // Assert
        assert_eq!(
            result,
            "Building Design Systems That Scale\n\
             blog.by nordAi.studio Team · blog.categories.design · January 5, 2025 · 6 blog.read_time\n\
             \n\
             First.\n\
             \n\
             Second.\n"
        );
    }

    #[test]
    fn article_not_found() {
        let content = MockContentService::new().with_get_article("nope", None);
        let command = ContentCommand::Article {
            slug: "nope".into(),
        };

        let result = command.render(&content, &MockTextService::echo());

        assert_eq!(result.unwrap_err().to_string(), "Article not found: nope");
    }

    #[derive(Debug, clap::Parser)]
    struct Cli {
        #[command(subcommand)]
        command: ContentCommand,
    }

    #[test]
    fn parse_category() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["studio", "articles", "--category", "insights"]).unwrap();
        assert_matches!(
            cli.command,
            ContentCommand::Articles {
                category: CategoryFilter::Only(ArticleCategory::Insights)
            }
        );

        let cli = Cli::try_parse_from(["studio", "projects"]).unwrap();
        assert_matches!(
            cli.command,
            ContentCommand::Projects {
                category: CategoryFilter::All
            }
        );

        assert!(Cli::try_parse_from(["studio", "projects", "-c", "trends"]).is_err());
    }
}
