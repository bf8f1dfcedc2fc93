use anyhow::Context;
use behance_gql::{
    DEFAULT_SESSION_ID, Detail, DetailedProfileProjects, FetchOutcome, FetcherConfig,
    GRAPHQL_API_URL, MoodboardItems, PagedFetcher, PagedQuery, ProfileProjects, ProjectCatalog,
    Subject, UreqTransport,
};
use clap::{Parser, Subcommand};
use patharg::OutputArg;
use serde::Serialize;
use serde_jsonlines::WriteExt;
use std::io::Write;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Fetch Behance profile projects, moodboard items, or gallery images as JSON
#[derive(Clone, Debug, Eq, Parser, PartialEq)]
struct Arguments {
    /// GraphQL endpoint to query
    #[arg(long, default_value = GRAPHQL_API_URL)]
    endpoint: String,

    /// Session ID to send in the `X-BCP` header & `bcp` cookie
    #[arg(long, default_value = DEFAULT_SESSION_ID)]
    session_id: String,

    /// Give up on any single HTTP request after this long (e.g., "15s")
    #[arg(long, default_value = "15s", value_parser = humantime::parse_duration)]
    timeout: Duration,

    /// Write fetched records to the given file [default: stdout]
    #[arg(short, long, default_value_t)]
    outfile: OutputArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
enum Command {
    /// Fetch the projects on a user's profile
    ///
    /// Projects are written as JSON Lines, or, with `--full`, as a single
    /// JSON object with owners & fields factored out into lookup tables.
    Projects {
        /// Number of projects to fetch
        #[arg(short = 'n', long, default_value = "50")]
        count: NonZeroUsize,

        /// Number of projects to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Request every available field instead of just names, links, &
        /// images
        #[arg(long)]
        full: bool,

        /// Behance username
        username: Subject,
    },

    /// Fetch the projects saved to a moodboard as JSON Lines
    Moodboard {
        /// Number of items to fetch
        #[arg(short = 'n', long, default_value = "40")]
        count: NonZeroUsize,

        /// Number of items to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Send the full moodboard query document
        #[arg(long)]
        full: bool,

        /// Numeric moodboard ID
        id: u64,
    },

    /// Fetch the image URLs on a gallery (project) page as JSON Lines
    Gallery {
        /// URL of the gallery page
        url: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Arguments::parse();
    let fetcher = PagedFetcher::new(FetcherConfig {
        endpoint: args.endpoint,
        session_id: args.session_id,
        timeout: Some(args.timeout),
    });
    let outfile = args.outfile;
    match args.command {
        Command::Projects {
            count,
            offset,
            full: false,
            username,
        } => {
            eprintln!("[·] Fetching up to {count} projects for {username} …");
            let items = run_fetch(&fetcher, &ProfileProjects::new(username), count, offset)?;
            dump_lines(&outfile, items)?;
        }
        Command::Projects {
            count,
            offset,
            full: true,
            username,
        } => {
            eprintln!("[·] Fetching up to {count} detailed projects for {username} …");
            let query = DetailedProfileProjects::new(username);
            let catalog = run_fetch(&fetcher, &query, count, offset)?
                .into_iter()
                .collect::<ProjectCatalog>();
            eprintln!(
                "[·] Catalogued {} owners and {} fields",
                catalog.owners.len(),
                catalog.fields.len()
            );
            dump_json(&outfile, &catalog)?;
        }
        Command::Moodboard {
            count,
            offset,
            full,
            id,
        } => {
            eprintln!("[·] Fetching up to {count} items from moodboard {id} …");
            let detail = if full { Detail::Full } else { Detail::Minimal };
            let query = MoodboardItems::new(id, detail);
            let items = run_fetch(&fetcher, &query, count, offset)?;
            dump_lines(&outfile, items)?;
        }
        Command::Gallery { url } => {
            eprintln!("[·] Scraping {url} …");
            let start = Instant::now();
            let urls = fetcher.gallery_scraper().scrape(&url);
            eprintln!(
                "[·] Found {} image URLs in {:?}",
                urls.len(),
                start.elapsed()
            );
            dump_lines(&outfile, urls)?;
        }
    }
    Ok(())
}

/// Run `query` to completion and report how it went.  A failure is only
/// fatal if nothing at all was fetched.
fn run_fetch<Q: PagedQuery>(
    fetcher: &PagedFetcher<UreqTransport>,
    query: &Q,
    count: NonZeroUsize,
    offset: usize,
) -> anyhow::Result<Vec<Q::Item>> {
    let start = Instant::now();
    let FetchOutcome {
        items,
        requests,
        next_offset,
        error,
    } = fetcher.fetch(query, count, offset);
    eprintln!(
        "[·] Fetched {} items in {} requests in {:?}",
        items.len(),
        requests,
        start.elapsed()
    );
    match error {
        Some(e) if items.is_empty() => {
            return Err(e).context("failed to fetch any items");
        }
        Some(e) => {
            eprintln!("[·] Stopped early: {e}; resume with --offset {next_offset}");
        }
        None if items.len() < count.get() => {
            eprintln!("[·] Collection exhausted after offset {next_offset}");
        }
        None => (),
    }
    Ok(items)
}

fn dump_lines<T: Serialize>(outfile: &OutputArg, items: Vec<T>) -> anyhow::Result<()> {
    eprintln!("[·] Dumping {} records to {outfile:#} …", items.len());
    let mut fp = outfile.create().context("failed to open file")?;
    fp.write_json_lines(items)
        .context("failed to dump records")?;
    fp.flush().context("failed to flush filehandle")?;
    Ok(())
}

fn dump_json<T: Serialize>(outfile: &OutputArg, value: &T) -> anyhow::Result<()> {
    eprintln!("[·] Dumping to {outfile:#} …");
    let mut fp = outfile.create().context("failed to open file")?;
    serde_json::to_writer_pretty(&mut fp, value).context("failed to dump catalog")?;
    writeln!(fp).context("failed to write to filehandle")?;
    fp.flush().context("failed to flush filehandle")?;
    Ok(())
}

/// Install a `tracing` subscriber that logs to stderr at the level given by
/// the `BEHANCE_FETCH_LOG` environment variable (default: "warn")
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter("BEHANCE_FETCH_LOG"))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Build a log filter from the directives in the environment variable `var`,
/// falling back to "warn" if it is unset or invalid
fn log_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn validate_cli() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn unset_log_variable_falls_back_to_warn() {
        assert_eq!(
            log_filter("BEHANCE_FETCH_LOG_NEVER_SET").to_string(),
            "warn"
        );
    }

    #[test]
    fn projects_defaults() {
        let args = Arguments::try_parse_from(["behance-fetch", "projects", "pugbomb"]).unwrap();
        assert_eq!(args.endpoint, GRAPHQL_API_URL);
        assert_eq!(args.session_id, DEFAULT_SESSION_ID);
        assert_eq!(args.timeout, Duration::from_secs(15));
        assert_eq!(
            args.command,
            Command::Projects {
                count: NonZeroUsize::new(50).unwrap(),
                offset: 0,
                full: false,
                username: "pugbomb".parse().unwrap(),
            }
        );
    }

    #[test]
    fn moodboard_options() {
        let args = Arguments::try_parse_from([
            "behance-fetch",
            "--timeout",
            "30s",
            "moodboard",
            "-n",
            "12",
            "--offset",
            "24",
            "--full",
            "217027557",
        ])
        .unwrap();
        assert_eq!(args.timeout, Duration::from_secs(30));
        assert_eq!(
            args.command,
            Command::Moodboard {
                count: NonZeroUsize::new(12).unwrap(),
                offset: 24,
                full: true,
                id: 217027557,
            }
        );
    }

    #[test]
    fn blank_username_rejected() {
        assert!(Arguments::try_parse_from(["behance-fetch", "projects", " "]).is_err());
    }

    #[test]
    fn zero_count_rejected() {
        assert!(
            Arguments::try_parse_from(["behance-fetch", "moodboard", "-n", "0", "1"]).is_err()
        );
    }
}
