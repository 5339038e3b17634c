// Framework bootstrap for the client runtime.

use std::io::{self, Result, Write};
use std::sync::Arc;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use url::Url;

use crate::domain::entities::Movie;
use crate::domain::routes::{HOME_ROUTE, listing_segment, movie_details_path, showtimes_path};
use crate::frameworks::cli::{Cli, Commands};
use crate::frameworks::config;
use crate::interface_adapters::clients::ApiClient;
use crate::interface_adapters::interceptor::TokenInterceptor;
use crate::interface_adapters::navigator::BrowserHistory;
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::interface_adapters::token_store::FileTokenStore;
use crate::use_cases::{
    BrowseMoviesUseCase, DashboardUseCase, InspectSessionUseCase, ResolveMovieUseCase,
};

pub fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries command output; logs go to stderr.
    if config::json_logs() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub fn build_state(cli: &Cli) -> Result<AppState> {
    let raw_base_url = cli.api_url.clone().unwrap_or_else(config::api_base_url);
    let base_url = Url::parse(&raw_base_url)
        .map_err(|e| io::Error::other(format!("invalid api base url {raw_base_url}: {e}")))?;
    let timeout = config::http_timeout();

    let tokens = FileTokenStore::new(config::storage_path());
    let clock = SystemClock;
    let interceptor = TokenInterceptor::new(Arc::new(tokens.clone()), Arc::new(clock));
    let api = ApiClient::new(base_url.clone(), timeout, interceptor)
        .map_err(|e| io::Error::other(format!("failed to initialize api client: {e}")))?;
    tracing::debug!(
        api_base_url = %base_url,
        http_timeout_ms = timeout.as_millis(),
        storage_path = %tokens.path().display(),
        "api client configured"
    );

    let selected_city = config::normalize_city(cli.city.clone()).or_else(config::selected_city);

    Ok(AppState {
        api,
        tokens,
        history: BrowserHistory::starting_at(HOME_ROUTE),
        clock,
        selected_city,
    })
}

pub async fn run(cli: Cli) -> Result<()> {
    let state = build_state(&cli)?;

    match cli.command {
        Commands::Movies => list_movies(&state).await,
        Commands::Movie { param } => open_movie(&state, &param).await,
        Commands::Follow => follow_movies(&state).await,
        Commands::Dashboard => {
            let stats = dashboard(&state).stats().await.map_err(failed("dashboard stats"))?;
            print_json(&stats)
        }
        Commands::Revenue { days } => {
            let revenue = dashboard(&state).revenue(days).await.map_err(failed("revenue"))?;
            print_json(&revenue)
        }
        Commands::Activity { limit } => {
            let activity = dashboard(&state)
                .recent_activity(limit)
                .await
                .map_err(failed("recent activity"))?;
            print_json(&activity)
        }
        Commands::Popular { limit } => {
            let popular = dashboard(&state)
                .popular_movies(limit)
                .await
                .map_err(failed("popular movies"))?;
            print_json(&popular)
        }
        Commands::Session => {
            let use_case = InspectSessionUseCase {
                tokens: state.tokens.clone(),
                clock: state.clock,
            };
            print_json(&use_case.execute())
        }
    }
}

// A listing row with the routes a user would follow from it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingEntry<'a> {
    #[serde(flatten)]
    movie: &'a Movie,
    details_path: String,
    showtimes_path: String,
}

fn listing_entries(movies: &[Movie]) -> Vec<ListingEntry<'_>> {
    movies
        .iter()
        .map(|movie| {
            let segment = listing_segment(movies, &movie.id);
            ListingEntry {
                movie,
                details_path: movie_details_path(&segment),
                showtimes_path: showtimes_path(&segment),
            }
        })
        .collect()
}

async fn list_movies(state: &AppState) -> Result<()> {
    let use_case = BrowseMoviesUseCase {
        movies: state.api.clone(),
    };
    let movies = use_case
        .execute(state.selected_city.as_deref())
        .await
        .map_err(failed("movies"))?;
    print_json(&listing_entries(&movies))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoviePage<T> {
    location: Option<String>,
    #[serde(flatten)]
    details: T,
}

async fn open_movie(state: &AppState, param: &str) -> Result<()> {
    let history = BrowserHistory::starting_at(movie_details_path(param));
    let use_case = ResolveMovieUseCase {
        movies: state.api.clone(),
        showtimes: state.api.clone(),
        navigator: history.clone(),
        clock: state.clock,
    };

    match use_case.execute(param, state.selected_city.as_deref()).await {
        Ok(details) => print_json(&MoviePage {
            location: history.current(),
            details,
        }),
        Err(err) => {
            let location = history.current().unwrap_or_default();
            Err(io::Error::other(format!(
                "failed to open movie {param}: {err} (now at {location})"
            )))
        }
    }
}

async fn follow_movies(state: &AppState) -> Result<()> {
    let (selection_tx, selection_rx) = watch::channel(state.selected_city.clone());
    let use_case = BrowseMoviesUseCase {
        movies: state.api.clone(),
    };

    // Each stdin line selects a locality; closing stdin ends the session.
    let selections = async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let city = config::normalize_city(Some(line));
                    tracing::debug!(?city, "locality selected.");
                    if selection_tx.send(city).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read locality selection.");
                    break;
                }
            }
        }
    };

    let listings = use_case.follow(selection_rx, |locality, listing| match listing {
        Ok(movies) => {
            if let Err(e) = print_json(&listing_entries(&movies)) {
                tracing::warn!(?locality, error = %e, "failed to print listing.");
            }
        }
        Err(e) => tracing::error!(?locality, error = %e, "failed to load movies"),
    });

    tokio::join!(listings, selections);
    Ok(())
}

fn dashboard(state: &AppState) -> DashboardUseCase<ApiClient, ApiClient, ApiClient, SystemClock> {
    DashboardUseCase {
        movies: state.api.clone(),
        bookings: state.api.clone(),
        users: state.api.clone(),
        clock: state.clock,
    }
}

// The binary logs the returned error once.
fn failed<E: std::fmt::Display>(what: &'static str) -> impl Fn(E) -> io::Error {
    move |e| io::Error::other(format!("failed to load {what}: {e}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::other(format!("failed to render output: {e}")))?;
    write_output(&mut io::stdout().lock(), &rendered)
}

// A closed stdout surfaces as an error rather than a panic.
fn write_output(out: &mut impl Write, rendered: &str) -> Result<()> {
    writeln!(out, "{rendered}")?;
    out.flush()
}
