use {
  anyhow::Context,
  arguments::{Arguments, Strategy},
  clap::{Parser, ValueEnum},
  crossterm::style::Stylize,
  hn_top::{
    CandidateSource, Client, Config, DEFAULT_LIMIT, FanOutSource, Item,
    SearchSource, TimeRange, TopStories,
  },
  render::render,
  reqwest::Url,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal, Write},
    process,
    time::{SystemTime, UNIX_EPOCH},
  },
  tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
  },
  utils::{domain, format_age, format_comments, format_points, truncate},
};

mod arguments;
mod render;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn candidate_source(
  strategy: Strategy,
  config: &Config,
  client: Client,
) -> Box<dyn CandidateSource> {
  match strategy {
    Strategy::FanOut => Box::new(FanOutSource::new(
      client,
      &config.item_api_url,
      config.story_window,
      config.concurrency,
    )),
    Strategy::Search => {
      Box::new(SearchSource::new(client, &config.search_api_url))
    }
  }
}

fn initialize_tracing(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("hn_top=debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();
}

fn now() -> i64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map_or(0, |elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_tracing(arguments.verbose);

  let mut config = Config::from_env().context("invalid configuration")?;

  if let Some(min_score) = arguments.min_score {
    config.min_score = min_score;
  }

  let client = Client::new(config.timeout)?;

  let top_stories = TopStories::new(
    candidate_source(arguments.strategy, &config, client),
    config.min_score,
    config.over_fetch_factor,
  );

  let items = top_stories
    .top_items(arguments.range, arguments.limit)
    .await
    .with_context(|| {
      format!("failed to load top stories for the last {}", arguments.range)
    })?;

  let mut stdout = io::stdout().lock();

  if arguments.json {
    serde_json::to_writer_pretty(&mut stdout, &items)?;
    writeln!(stdout)?;
  } else {
    write!(stdout, "{}", render(&items, arguments.range, now()))?;
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
