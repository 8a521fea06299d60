//! End-to-end workflow tests through the state container.
//!
//! Each test drives an [`App`] wired to mock HTTP and storage, dispatches
//! triggers, and checks the published state once the workflow settles.

mod common;

use common::*;
use std::time::Duration;
use who_drowning::catalog::{CountryFilter, Segment};
use who_drowning::models::IndicatorValue;
use who_drowning::state::{AppEvent, Lifecycle};

#[tokio::test]
async fn test_countries_load_normalises_flags_and_sections() {
    let mut app = TestAppBuilder::new().with_fixtures().build();

    app.dispatch(AppEvent::RequestCountries);
    let state = app.run_until(|s| !s.countries.loading()).await;

    assert_eq!(state.countries.lifecycle, Lifecycle::Resolved);
    assert_eq!(state.countries.countries.len(), 6);

    let flags: Vec<Option<&str>> = state
        .countries
        .countries
        .iter()
        .map(|c| c.flag.as_deref())
        .collect();
    assert_eq!(
        flags,
        vec![Some("fr"), Some("de"), Some("ke"), Some("br"), Some("zm"), Some("bd")]
    );

    let titles: Vec<&str> = state
        .countries
        .grouped_countries
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, vec!["B", "F", "G", "K", "Z"]);

    // Brazil before Bangladesh: input order within a section
    let b: Vec<&str> = state.countries.grouped_countries[0]
        .data
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(b, vec!["Brazil", "Bangladesh"]);
}

#[tokio::test]
async fn test_filters_replace_each_other() {
    let mut app = TestAppBuilder::new().with_fixtures().build();
    app.dispatch(AppEvent::RequestCountries);
    app.run_until(|s| !s.countries.loading()).await;

    app.dispatch(AppEvent::SetSearchText("an".to_string()));
    let names: Vec<&str> = app
        .state()
        .countries
        .filtered_countries
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["France", "Germany", "Bangladesh"]);

    app.dispatch(AppEvent::SelectSegment(Some("R...Z".to_string())));
    let countries = &app.state().countries;
    assert!(countries.search.is_empty());
    assert_eq!(countries.selected_segment, Some(Segment::RToZ));
    assert_eq!(countries.filtered_countries.len(), 1);
    assert_eq!(countries.grouped_countries[0].title, "Z");

    app.dispatch(AppEvent::SelectLetter('k'));
    let countries = &app.state().countries;
    assert_eq!(countries.selected_segment, None);
    assert_eq!(countries.filter, CountryFilter::Letter('k'));
    assert_eq!(countries.filtered_countries[0].name, "Kenya");

    app.dispatch(AppEvent::SelectSegment(None));
    assert_eq!(app.state().countries.filtered_countries.len(), 6);
}

#[tokio::test]
async fn test_filter_survives_reload() {
    let mut app = TestAppBuilder::new().with_fixtures().build();
    app.dispatch(AppEvent::SelectLetter('B'));

    app.dispatch(AppEvent::RequestCountries);
    let state = app.run_until(|s| !s.countries.loading()).await;

    assert_eq!(state.countries.filtered_countries.len(), 2);
    assert_eq!(state.countries.grouped_countries.len(), 1);
}

#[tokio::test]
async fn test_countries_failure_surfaces_message() {
    let http = MockHttpClient::new();
    http.set_response(&url("countries-en.json"), status(500, ""));
    let mut app = TestAppBuilder::new().with_http(http).build();

    app.dispatch(AppEvent::RequestCountries);
    let state = app.run_until(|s| !s.countries.loading()).await;

    assert_eq!(
        state.countries.error(),
        Some("The server is experiencing issues. Please try again later.")
    );
    assert!(state.countries.countries.is_empty());
}

#[tokio::test]
async fn test_country_profile_merge() {
    let mut app = TestAppBuilder::new().with_fixtures().build();

    app.dispatch(AppEvent::SelectCountry("KE".to_string()));
    app.dispatch(AppEvent::RequestIndicators("KE".to_string()));
    let state = app.run_until(|s| !s.indicators.loading()).await;

    assert_eq!(state.indicators.selected_code.as_deref(), Some("KE"));
    let profile = state.indicators.selected_country.as_ref().unwrap();
    assert_eq!(profile.name, "Kenya");
    assert_eq!(profile.flag.as_deref(), Some("ke"));

    let domains: Vec<&str> = profile.domains.iter().map(|d| d.unique_key.as_str()).collect();
    assert_eq!(domains, vec!["burden", "policy"]);

    let burden = &profile.domains[0];
    assert_eq!(burden.progress, 55.0);
    assert_eq!(burden.indicators[0].value, IndicatorValue::Number(4.5));

    let policy = &profile.domains[1];
    assert_eq!(policy.progress, 100.0);
    assert_eq!(policy.indicators[0].value, IndicatorValue::Text("YES".to_string()));
    assert_eq!(policy.indicators[1].value, IndicatorValue::not_available());

    assert_eq!(profile.trends_chart.years, vec!["2000", "2001", "2002"]);
    assert_eq!(profile.trends_chart.female, vec![4.0, 4.0, 3.0]);
    assert_eq!(profile.pie_chart.values.len(), 6);
}

#[tokio::test]
async fn test_sparse_record_gets_defaults() {
    let mut app = TestAppBuilder::new()
        .with_fixtures()
        .with_config(test_config().with_base_year(1990))
        .build();

    app.dispatch(AppEvent::RequestIndicators("BR".to_string()));
    let state = app.run_until(|s| !s.indicators.loading()).await;

    let profile = state.indicators.selected_country.as_ref().unwrap();
    assert_eq!(profile.region, "N/A");
    assert!(profile.domains.is_empty());
    assert!(profile.trends_chart.years.is_empty());
    assert_eq!(profile.pie_chart.values, vec![0.0; 6]);
}

#[tokio::test]
async fn test_unknown_code_is_no_data() {
    let mut app = TestAppBuilder::new().with_fixtures().build();

    app.dispatch(AppEvent::RequestIndicators("XX".to_string()));
    let state = app.run_until(|s| !s.indicators.loading()).await;

    assert_eq!(state.indicators.error(), Some("No data available"));
    assert!(state.indicators.selected_country.is_none());
}

#[tokio::test]
async fn test_profile_fetches_both_documents() {
    let (mut app, http, _) = TestAppBuilder::new().with_fixtures().build_with_mocks();

    app.dispatch(AppEvent::RequestIndicators("KE".to_string()));
    app.run_until(|s| !s.indicators.loading()).await;

    assert_eq!(http.request_count(&url("countryIndicators.json")), 1);
    assert_eq!(http.request_count(&url("indicators-en.json")), 1);
}

#[tokio::test]
async fn test_profile_fails_when_either_document_fails() {
    let http = MockHttpClient::new()
        .with_response(&url("countryIndicators.json"), Response::json_body(indicators_json()));
    http.set_response(&url("indicators-en.json"), connection_refused());
    let mut app = TestAppBuilder::new().with_http(http).build();

    app.dispatch(AppEvent::RequestIndicators("KE".to_string()));
    let state = app.run_until(|s| !s.indicators.loading()).await;

    assert_eq!(
        state.indicators.error(),
        Some("Unable to connect to the server. Please check your internet connection.")
    );
}

#[tokio::test(start_paused = true)]
async fn test_latest_countries_request_wins() {
    let http = MockHttpClient::new();
    let document = url("countries-en.json");
    http.push_response(&document, slow(500, r#"[{"iso":"FR","name":"France"}]"#));
    http.push_response(&document, ok(r#"[{"iso":"KE","name":"Kenya"}]"#));
    let mut app = TestAppBuilder::new().with_http(http.clone()).build();

    app.dispatch(AppEvent::RequestCountries);
    // Let the first fetch start and park on its delay.
    tokio::time::sleep(Duration::from_millis(10)).await;
    app.dispatch(AppEvent::RequestCountries);

    let state = app.run_until(|s| !s.countries.loading()).await;
    assert_eq!(state.countries.countries.len(), 1);
    assert_eq!(state.countries.countries[0].iso, "KE");
    assert_eq!(http.request_count(&document), 2);

    // The superseded fetch never reports back.
    while let Ok(true) = tokio::time::timeout(Duration::from_secs(2), app.process_next()).await {}
    assert_eq!(app.state().countries.countries[0].iso, "KE");
    assert!(!app.state().countries.loading());
}

#[tokio::test(start_paused = true)]
async fn test_latest_profile_request_wins() {
    let http = MockHttpClient::new()
        .with_response(&url("indicators-en.json"), Response::json_body(domains_json()));
    let records = url("countryIndicators.json");
    http.push_response(&records, slow(1_000, indicators_json()));
    http.push_response(&records, ok(indicators_json()));
    let mut app = TestAppBuilder::new().with_http(http).build();

    app.dispatch(AppEvent::RequestIndicators("KE".to_string()));
    tokio::time::sleep(Duration::from_millis(10)).await;
    app.dispatch(AppEvent::RequestIndicators("BR".to_string()));

    let state = app.run_until(|s| !s.indicators.loading()).await;
    assert_eq!(state.indicators.requested_code.as_deref(), Some("BR"));
    assert_eq!(
        state.indicators.selected_country.as_ref().map(|p| p.iso.as_str()),
        Some("BR")
    );
}

#[tokio::test]
async fn test_version_gate() {
    let mut app = TestAppBuilder::new()
        .with_document("version.json", version_json("1.1.0"))
        .build();

    app.dispatch(AppEvent::RequestVersionCheck);
    let state = app.run_until(|s| !s.version.loading()).await;

    assert!(state.version.needs_update);
    assert_eq!(state.version.remote_version.as_deref(), Some("1.1.0"));
    assert_eq!(state.version.current_version, TEST_VERSION);
}

#[tokio::test]
async fn test_version_gate_open_when_equal_or_failing() {
    let http = MockHttpClient::new();
    http.push_response(&url("version.json"), ok(version_json(TEST_VERSION)));
    http.push_response(&url("version.json"), connection_refused());
    let mut app = TestAppBuilder::new().with_http(http).build();

    app.dispatch(AppEvent::RequestVersionCheck);
    let state = app.run_until(|s| !s.version.loading()).await;
    assert!(!state.version.needs_update);
    assert!(state.version.error().is_none());

    app.dispatch(AppEvent::RequestVersionCheck);
    let state = app.run_until(|s| !s.version.loading()).await;
    assert!(!state.version.needs_update);
    assert!(state.version.error().is_some());
}

#[tokio::test]
async fn test_handle_drives_spawned_app() {
    let app = TestAppBuilder::new().with_fixtures().build();
    let (handle, task) = app.spawn();

    assert!(handle.request_countries());
    let state = handle
        .wait_for(|s| s.countries.lifecycle == Lifecycle::Resolved)
        .await
        .unwrap();
    assert_eq!(state.countries.countries.len(), 6);

    handle.set_search_text("ken");
    let state = handle
        .wait_for(|s| s.countries.filtered_countries.len() == 1)
        .await
        .unwrap();
    assert_eq!(state.countries.filtered_countries[0].iso, "KE");

    assert!(handle.shutdown());
    task.await.unwrap();
    assert!(!handle.request_countries());
}
