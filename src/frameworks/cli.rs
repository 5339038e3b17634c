use clap::{Parser, Subcommand};

use crate::use_cases::dashboard::{
    DEFAULT_ACTIVITY_LIMIT, DEFAULT_POPULAR_LIMIT, DEFAULT_REVENUE_DAYS, MAX_REVENUE_DAYS,
};

#[derive(Parser, Debug)]
#[command(name = "revticket")]
#[command(about = "RevTicket movie booking client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the backend API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Locality to scope listings and showtimes to
    #[arg(long, global = true)]
    pub city: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List active movies, newest first
    Movies,
    /// Open a movie page by id or slug
    Movie {
        /// Movie id (optionally with a :suffix) or title slug
        param: String,
    },
    /// Reload the listing for each locality read from stdin (empty line selects all)
    Follow,
    /// Admin summary statistics
    Dashboard,
    /// Confirmed revenue per day
    Revenue {
        #[arg(
            long,
            default_value_t = DEFAULT_REVENUE_DAYS,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_REVENUE_DAYS))
        )]
        days: u32,
    },
    /// Most recent bookings
    Activity {
        #[arg(long, default_value_t = DEFAULT_ACTIVITY_LIMIT)]
        limit: usize,
    },
    /// Movies ranked by bookings
    Popular {
        #[arg(long, default_value_t = DEFAULT_POPULAR_LIMIT)]
        limit: usize,
    },
    /// Inspect the stored session token
    Session,
}
