use chrono::NaiveDate;
use log::info;
use thiserror::Error;
use crate::advisory::Advisory;
use crate::config::Config;
use crate::extraction::{extract_observation, ExtractError};
use crate::gate::is_target_day;
use crate::initialization::Mgr;
use crate::manager_jma::errors::FeedError;
use crate::manager_slack::errors::SlackError;
use crate::models::ObservationRecord;

const GREETING: &str = "おはようございます";

/// Result of a successful run
#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    /// Not a target day, nothing was fetched or sent
    Skipped,
    /// The message was composed and delivered
    Delivered(String),
}

/// Runs the advisory pipeline once: gate, fetch, extract, advise, print and post.
/// The composed message is printed to stdout before it is posted.
///
/// # Arguments
///
/// * 'config' - configuration
/// * 'mgr' - struct with configured managers
/// * 'today' - the date to check against the gate
/// * 'force' - run even if today is not a target day
pub fn run(config: &Config, mgr: &Mgr, today: NaiveDate, force: bool) -> Result<RunOutcome, WorkerError> {
    if !is_target_day(today, &config.gate) {
        if !force {
            info!("{} is not a target day, skipping", today);
            return Ok(RunOutcome::Skipped);
        }
        info!("{} is not a target day, running anyway", today);
    }

    let table = mgr.jma.get_temperature_table()?;
    let record = extract_observation(&table, &config.observation.location)?;
    let advisory = Advisory::for_temperature(record.temperature, &config.advisory);
    info!("Advisory for {:.1} degrees: {:?}", record.temperature, advisory);

    let message = compose_message(advisory, &record);
    println!("{}", message);

    mgr.slack.post(&message)?;

    Ok(RunOutcome::Delivered(message))
}

/// Composes the message as greeting, advisory, a blank line and the observation
///
/// # Arguments
///
/// * 'advisory' - advisory for the day
/// * 'record' - the observation the advisory is based on
fn compose_message(advisory: Advisory, record: &ObservationRecord) -> String {
    format!("{}\n{}\n\n{}", GREETING, advisory, record)
}

/// Error depicting errors that occur while running the advisory pipeline
///
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("FetchError: {0}")]
    FetchError(#[from] FeedError),
    #[error("{0}")]
    ExtractError(#[from] ExtractError),
    #[error("{0}")]
    NotifyError(#[from] SlackError),
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Mock, Server, ServerGuard};
    use serde_json::json;
    use super::*;
    use crate::config::{FeedParameters, SlackParameters};
    use crate::manager_jma::Jma;
    use crate::manager_slack::Slack;
    use crate::test_support::{client, shift_jis};

    const CSV: &str = "\
観測所番号,都道府県,地点,現在時刻(年),現在時刻(月),現在時刻(日),現在時刻(時),現在時刻(分),15日の最高気温(℃)
44132,東京都,東京（トウキョウ）,2024,7,15,14,0,28.5
";

    fn feed_mock(server: &mut ServerGuard) -> Mock {
        server.mock("GET", "/feed.csv")
            .with_status(200)
            .with_header("content-type", "text/csv")
            .with_body(shift_jis(CSV))
            .create()
    }

    fn setup(server: &ServerGuard, webhook: bool) -> (Config, Mgr) {
        let mut config = Config::default();
        config.feed = FeedParameters { url: format!("{}/feed.csv", server.url()), ..FeedParameters::default() };
        config.slack = SlackParameters { webhook_url: webhook.then(|| format!("{}/hook", server.url())) };

        let mgr = Mgr {
            jma: Jma::new(&config.feed, client()),
            slack: Slack::new(&config.slack, client()),
        };

        (config, mgr)
    }

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 5).unwrap()
    }

    #[test]
    fn non_target_day_makes_no_requests() {
        let mut server = Server::new();
        let feed = server.mock("GET", Matcher::Any).expect(0).create();
        let hook = server.mock("POST", Matcher::Any).expect(0).create();
        let (config, mgr) = setup(&server, true);

        let outcome = run(&config, &mgr, NaiveDate::from_ymd_opt(2024, 7, 6).unwrap(), false).unwrap();

        assert_eq!(outcome, RunOutcome::Skipped);
        feed.assert();
        hook.assert();
    }

    #[test]
    fn target_day_delivers_composed_message() {
        let mut server = Server::new();
        let expected = "おはようございます\nハァ……暑すぎ。今日は在宅作業をオススメするけど。\n\n28.5度@2024年7月15日14時0分 計測";
        let feed = feed_mock(&mut server);
        let hook = server.mock("POST", "/hook")
            .match_body(Matcher::Json(json!({"text": expected})))
            .with_status(200)
            .create();
        let (config, mgr) = setup(&server, true);

        let outcome = run(&config, &mgr, friday(), false).unwrap();

        assert_eq!(outcome, RunOutcome::Delivered(expected.to_string()));
        feed.assert();
        hook.assert();
    }

    #[test]
    fn force_bypasses_gate() {
        let mut server = Server::new();
        let feed = feed_mock(&mut server);
        let hook = server.mock("POST", "/hook").with_status(200).create();
        let (config, mgr) = setup(&server, true);

        let outcome = run(&config, &mgr, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(), true).unwrap();

        assert!(matches!(outcome, RunOutcome::Delivered(_)));
        feed.assert();
        hook.assert();
    }

    #[test]
    fn missing_location_stops_before_posting() {
        let mut server = Server::new();
        let feed = feed_mock(&mut server);
        let hook = server.mock("POST", "/hook").expect(0).create();
        let (mut config, mgr) = setup(&server, true);
        config.observation.location = "那覇（ナハ）".to_string();

        let err = run(&config, &mgr, friday(), false).unwrap_err();

        assert!(matches!(err, WorkerError::ExtractError(ExtractError::NotFoundError(_))));
        feed.assert();
        hook.assert();
    }

    #[test]
    fn missing_webhook_is_reported_after_fetch() {
        let mut server = Server::new();
        let feed = feed_mock(&mut server);
        let hook = server.mock("POST", Matcher::Any).expect(0).create();
        let (config, mgr) = setup(&server, false);

        let err = run(&config, &mgr, friday(), false).unwrap_err();

        assert!(matches!(err, WorkerError::NotifyError(SlackError::ConfigurationError(_))));
        feed.assert();
        hook.assert();
    }

    #[test]
    fn failed_delivery_is_reported() {
        let mut server = Server::new();
        let _feed = feed_mock(&mut server);
        let _hook = server.mock("POST", "/hook").with_status(500).with_body("oops").create();
        let (config, mgr) = setup(&server, true);

        let err = run(&config, &mgr, friday(), false).unwrap_err();

        assert!(matches!(err, WorkerError::NotifyError(SlackError::DeliveryError { status: 500, .. })));
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn feed_failure_is_a_fetch_error() {
        let mut server = Server::new();
        let _feed = server.mock("GET", "/feed.csv").with_status(503).with_body("unavailable").create();
        let hook = server.mock("POST", "/hook").expect(0).create();
        let (config, mgr) = setup(&server, true);

        let err = run(&config, &mgr, friday(), false).unwrap_err();

        assert!(matches!(err, WorkerError::FetchError(FeedError::StatusError(503))));
        hook.assert();
    }

    #[test]
    fn composes_message_layout() {
        let record = ObservationRecord { temperature: 31.0, year: 2024, month: 8, day: 2, hour: 9, minute: 30 };

        let message = compose_message(Advisory::ExtremeHeat, &record);

        assert_eq!(message, "おはようございます\n本日は在宅作業よ。屋内でも熱中症になることも多いから、気を付けて。\n\n31.0度@2024年8月2日9時30分 計測");
    }
}
