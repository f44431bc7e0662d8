use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use blogfeed::config::{read_config, Config, Service};
use blogfeed::configure_logger;
use blogfeed::create_service::create_service;
use blogfeed::paginator::PageRequest;
use blogfeed::service::BlogService;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file. Defaults to blogfeed.toml next to the executable
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CDN base url, overriding the configured service
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List posts, newest first
    List {
        /// Zero-based page number
        #[arg(short, long)]
        page: Option<String>,

        /// Posts per page
        #[arg(short, long)]
        limit: Option<String>,

        /// Keep only posts carrying at least one of these tags
        #[arg(short, long)]
        tag: Vec<String>,
    },
    /// Show one post in full
    View {
        /// The post folder name, e.g. 230101
        id: String,
    },
    /// List every tag known to the manifest
    Tags,
}

fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    if let Some(cfg_path) = cfg_path {
        return Ok(read_config(&cfg_path)?);
    }

    let exe_path = env::current_exe()?;
    let default_path = exe_path.parent().map(|dir| dir.join("blogfeed.toml"));
    match default_path {
        Some(path) if path.exists() => Ok(read_config(&path)?),
        _ => Ok(Config {
            service: Service { source: "mock".to_string(), url: None },
            defaults: None,
            log: None,
        }),
    }
}

async fn list(service: &dyn BlogService, request: PageRequest, tags: &[String]) -> Result<()> {
    let page = service.fetch_posts_with_pagination(request, tags).await?;

    for post in &page.data {
        println!("{}  {}  [{}]", post.folder, post.formatted_date(), post.tags.join(", "));
        println!("{}\n", post.preview(120));
    }

    for failure in &page.failures {
        println!("(skipped {}: {})", failure.folder, failure.reason);
    }

    println!("-- page {} | {} of {} posts{}",
             page.page,
             page.data.len(),
             page.total,
             if page.has_more { " | more available" } else { "" });
    Ok(())
}

async fn view(service: &dyn BlogService, id: &str) -> Result<()> {
    match service.fetch_post_by_id(id).await? {
        Some(post) => {
            println!("{}  {}", post.folder, post.formatted_date());
            println!("{}", post.content);
        }
        None => println!("Post {} not found", id),
    }
    Ok(())
}

async fn tags(service: &dyn BlogService) -> Result<()> {
    for tag in service.all_tags().await? {
        println!("{}", tag);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = open_config(args.config)?;
    if let Some(url) = args.url {
        config.service = Service { source: "cdn".to_string(), url: Some(url) };
    }

    configure_logger(&config)?;
    let service = create_service(&config.service)?;

    match args.command {
        Command::List { page, limit, tag } => {
            let mut request = PageRequest::from_query(page.as_deref(), limit.as_deref());
            if limit.is_none() {
                request.limit = config.page_size();
            }
            list(service.as_ref(), request.normalized(), &tag).await
        }
        Command::View { id } => view(service.as_ref(), &id).await,
        Command::Tags => tags(service.as_ref()).await,
    }
}
