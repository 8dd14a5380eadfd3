use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use studio::commands::{contact::ContactCommand, content::ContentCommand};
use studio_core_content_impl::ContentServiceImpl;
use studio_i18n_impl::DictionaryTextService;
use studio_models::i18n::Locale;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = studio_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Contact(command) => command.invoke(config).await?,
        Command::Content { locale, command } => {
            let default_locale = config.i18n.default_locale;
            let text = DictionaryTextService::new(locale.unwrap_or(default_locale), default_locale)?;
            let content = ContentServiceImpl::new(text.clone());
            print!("{}", command.render(&content, &text)?);
        }
        Command::CheckConfig { verbose } => {
            DictionaryTextService::new(config.i18n.default_locale, config.i18n.default_locale)?;
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in and send the contact form
    #[command(aliases(["c"]))]
    Contact(ContactCommand),
    /// Browse blog articles, case studies and services
    #[command(aliases(["show"]))]
    Content {
        /// Language of the page texts (en, sv)
        #[arg(short, long, global = true)]
        locale: Option<Locale>,
        #[command(subcommand)]
        command: ContentCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
