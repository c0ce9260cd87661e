use clap::{Parser, Subcommand, ValueEnum};
use reqwest::Url;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "pddikti-cli")]
#[command(about = "Query a running PDDIKTI REST API instance", long_about = None)]
struct Cli {
    #[arg(short, long, env = "PDDIKTI_API_URL", default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show API information and endpoints
    Info,
    /// Check service liveness
    Health,
    /// Search by keyword
    Search {
        #[arg(value_enum)]
        scope: Scope,
        keyword: String,
    },
    /// Fetch one resource by id
    Get {
        #[arg(value_enum)]
        resource: Resource,
        id: String,
        /// Semester for university programs (YYYYS)
        #[arg(long)]
        semester: Option<String>,
    },
    /// National headline counts
    Counts,
    /// Visualization data for a category
    Visualizations {
        #[arg(default_value = "universities")]
        category: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Scope {
    All,
    Universities,
    Students,
    Lecturers,
    Programs,
}

#[derive(Clone, Copy, ValueEnum)]
enum Resource {
    University,
    UniversityPrograms,
    UniversityLogo,
    UniversityStats,
    Student,
    Lecturer,
    LecturerResearch,
    Program,
}

impl Resource {
    fn segments(self, id: &str) -> Vec<&str> {
        match self {
            Resource::University => vec!["api", "v1", "universities", id],
            Resource::UniversityPrograms => vec!["api", "v1", "universities", id, "programs"],
            Resource::UniversityLogo => vec!["api", "v1", "universities", id, "logo"],
            Resource::UniversityStats => vec!["api", "v1", "universities", id, "stats"],
            Resource::Student => vec!["api", "v1", "students", id],
            Resource::Lecturer => vec!["api", "v1", "lecturers", id],
            Resource::LecturerResearch => vec!["api", "v1", "lecturers", id, "research"],
            Resource::Program => vec!["api", "v1", "programs", id],
        }
    }
}

fn endpoint(base: &str, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("'{}' cannot be used as a base URL", base))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = match &cli.command {
        Commands::Info => endpoint(&cli.url, &[], &[])?,
        Commands::Health => endpoint(&cli.url, &["health"], &[])?,
        Commands::Search { scope, keyword } => {
            let segments: &[&str] = match scope {
                Scope::All => &["api", "v1", "search"],
                Scope::Universities => &["api", "v1", "universities", "search"],
                Scope::Students => &["api", "v1", "students", "search"],
                Scope::Lecturers => &["api", "v1", "lecturers", "search"],
                Scope::Programs => &["api", "v1", "programs", "search"],
            };
            endpoint(&cli.url, segments, &[("q", keyword.as_str())])?
        }
        Commands::Get { resource, id, semester } => {
            let query: Vec<(&str, &str)> = semester
                .as_deref()
                .map(|s| vec![("semester", s)])
                .unwrap_or_default();
            endpoint(&cli.url, &resource.segments(id), &query)?
        }
        Commands::Counts => endpoint(&cli.url, &["api", "v1", "statistics", "counts"], &[])?,
        Commands::Visualizations { category } => endpoint(
            &cli.url,
            &["api", "v1", "statistics", "visualizations"],
            &[("category", category.as_str())],
        )?,
    };

    let res = client.get(url).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => {
            let pretty = serde_json::to_string_pretty(&json)?;
            if status.is_success() {
                println!("{}", pretty);
            } else {
                eprintln!("Error: API returned status {}", status);
                eprintln!("{}", pretty);
            }
        }
        Err(_) => {
            eprintln!("Error: API returned status {} with a non-JSON body", status);
            eprintln!("{}", text);
        }
    }
    Ok(())
}
