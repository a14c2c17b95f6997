use bsports::view_models::MatchListMode;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football fixtures from football-data.org
///
/// Lists today's matches by default. Use --upcoming or --recent for the
/// next or previous seven days. Those two views are limited to your
/// --favorites leagues when any are given.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show today's matches (default)
    #[arg(long, help_heading = "Fixtures", conflicts_with_all = ["upcoming", "recent"])]
    pub today: bool,

    /// Show matches in the next seven days
    #[arg(long, short = 'u', help_heading = "Fixtures", conflicts_with = "recent")]
    pub upcoming: bool,

    /// Show matches from the past seven days
    #[arg(long, short = 'r', help_heading = "Fixtures")]
    pub recent: bool,

    /// Only show this competition (id or code, e.g. PL). Can be repeated.
    /// Applies to every view and takes precedence over --favorites.
    #[arg(long = "league", short = 'L', value_name = "ID", help_heading = "Fixtures")]
    pub leagues: Vec<String>,

    /// Favorite competitions used by --upcoming and --recent
    #[arg(
        long,
        short = 'f',
        value_name = "ID,...",
        value_delimiter = ',',
        help_heading = "Fixtures"
    )]
    pub favorites: Vec<String>,

    /// Update the API base URL in config
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update the API token in config
    #[arg(long = "set-token", value_name = "TOKEN", help_heading = "Configuration")]
    pub new_api_token: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    pub fn list_mode(&self) -> MatchListMode {
        if self.upcoming {
            MatchListMode::Upcoming
        } else if self.recent {
            MatchListMode::Recent
        } else {
            MatchListMode::Today
        }
    }

    /// Any of the options that edit the config file
    pub fn is_config_update(&self) -> bool {
        self.new_api_url.is_some()
            || self.new_api_token.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_today() {
        let args = Args::parse_from(["bsports"]);
        assert_eq!(args.list_mode(), MatchListMode::Today);
        assert!(!args.is_config_update());
    }

    #[test]
    fn test_mode_flags() {
        assert_eq!(
            Args::parse_from(["bsports", "--upcoming"]).list_mode(),
            MatchListMode::Upcoming
        );
        assert_eq!(
            Args::parse_from(["bsports", "-r"]).list_mode(),
            MatchListMode::Recent
        );
        assert!(Args::try_parse_from(["bsports", "--upcoming", "--recent"]).is_err());
    }

    #[test]
    fn test_league_and_favorites_parsing() {
        let args = Args::parse_from([
            "bsports",
            "--league",
            "PL",
            "-L",
            "CL",
            "--favorites",
            "BL1,SA",
        ]);
        assert_eq!(args.leagues, ["PL", "CL"]);
        assert_eq!(args.favorites, ["BL1", "SA"]);
    }

    #[test]
    fn test_config_update_detection() {
        let args = Args::parse_from(["bsports", "--set-token", "abc"]);
        assert!(args.is_config_update());
        assert_eq!(args.new_api_token.as_deref(), Some("abc"));
    }
}
