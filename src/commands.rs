use crate::cli::Args;
use bsports::config::Config;
use bsports::data_fetcher::clock::{Clock, SystemClock};
use bsports::data_fetcher::fixtures::{
    FixturesService, recent_window, today_window, upcoming_window,
};
use bsports::data_fetcher::models::Match;
use bsports::data_fetcher::{HttpFootballApi, MatchList};
use bsports::error::AppError;
use bsports::view_models::{InMemoryFavorites, MatchListMode, MatchesListModel};
use chrono::Local;
use std::sync::Arc;
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-api-url, --set-token,
/// --set-log-file, --clear-log-file).
///
/// Starts from the stored config, or defaults when none exists yet.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_url) = &args.new_api_url {
        config.api_base_url = new_url.clone();
    }

    if let Some(new_token) = &args.new_api_token {
        config.api_token = Some(new_token.clone());
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Fetches the selected fixtures view once and prints it.
///
/// Explicit `--league` filters go straight to the fixtures service. Otherwise
/// the list model decides, applying `--favorites` to upcoming and recent.
/// Either way a failed fetch is returned as the error.
pub async fn handle_fixtures_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let api = HttpFootballApi::from_config(config)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let service = Arc::new(FixturesService::new(
        Arc::new(api),
        clock.clone(),
        config.cache_ttl(),
    ));
    let mode = args.list_mode();

    let matches: MatchList = if args.leagues.is_empty() {
        let favorites = Arc::new(InMemoryFavorites::from_ids(args.favorites.iter().cloned()));
        let mut model = MatchesListModel::new(service, favorites);
        model.set_mode(mode);
        model.load().await;

        if let Some(error) = model.take_error() {
            return Err(error);
        }
        model.matches().into()
    } else {
        let (from, to) = match mode {
            MatchListMode::Today => today_window(clock.today()),
            MatchListMode::Upcoming => upcoming_window(clock.today()),
            MatchListMode::Recent => recent_window(clock.today()),
        };
        info!("Fetching {} matches for leagues {:?}", mode, args.leagues);
        service
            .fetch_matches(Some(&args.leagues), Some(from), Some(to))
            .await?
    };

    print_matches(mode, &matches);
    Ok(())
}

fn print_matches(mode: MatchListMode, matches: &[Match]) {
    println!("{mode} matches");
    println!();

    if matches.is_empty() {
        println!("No matches found");
        return;
    }

    let mut current_league: Option<&str> = None;
    for m in matches {
        if current_league != Some(m.league_name.as_str()) {
            if current_league.is_some() {
                println!();
            }
            println!("{}", m.league_name);
            current_league = Some(m.league_name.as_str());
        }
        println!("  {}", format_match_line(m));
    }
}

/// One printed line: local kick-off time, teams, score and status.
fn format_match_line(m: &Match) -> String {
    let kickoff = m.date.with_timezone(&Local).format("%a %d.%m. %H:%M");
    let status = if m.status.is_in_progress() {
        format!("{} *", m.status)
    } else {
        m.status.to_string()
    };

    format!(
        "{kickoff}  {} {} {}  [{status}]",
        m.home_team_name,
        m.score_display(),
        m.away_team_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsports::data_fetcher::models::MatchStatus;
    use bsports::testing_utils::TestDataBuilder;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    async fn failing_server(status: u16) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn config_for(mock_server: &MockServer) -> Config {
        Config {
            api_base_url: mock_server.uri(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_fixtures_command_fails_when_list_load_fails() {
        let mock_server = failing_server(500).await;
        let args = Args {
            upcoming: true,
            favorites: vec!["PL".to_string()],
            ..Args::default()
        };

        let result = handle_fixtures_command(&args, &config_for(&mock_server)).await;

        assert!(
            matches!(result, Err(AppError::ApiServerError { status: 500, .. })),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn test_fixtures_command_fails_when_league_fetch_fails() {
        let mock_server = failing_server(503).await;
        let args = Args {
            leagues: vec!["PL".to_string()],
            ..Args::default()
        };

        let result = handle_fixtures_command(&args, &config_for(&mock_server)).await;

        assert!(
            matches!(result, Err(AppError::ApiServiceUnavailable { status: 503, .. })),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn test_fixtures_command_prints_today() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"matches": []})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = handle_fixtures_command(&Args::default(), &config_for(&mock_server)).await;

        assert!(result.is_ok(), "got {result:?}");
    }

    #[test]
    fn test_format_finished_match_line() {
        let line = format_match_line(&TestDataBuilder::domain_match("1"));
        assert!(line.contains("Arsenal FC 1 - 0 Chelsea FC"), "got {line}");
        assert!(line.ends_with("[Full-time]"), "got {line}");
    }

    #[test]
    fn test_format_live_match_line() {
        let mut m = TestDataBuilder::domain_match("2");
        m.status = MatchStatus::Live;
        m.score = None;
        let line = format_match_line(&m);
        assert!(line.contains("Arsenal FC vs Chelsea FC"), "got {line}");
        assert!(line.ends_with("[Live *]"), "got {line}");
    }
}
