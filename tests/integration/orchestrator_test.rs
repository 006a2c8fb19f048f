// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    orchestrator, wait_until_done, FixtureEngine, BAYT_URL, MOURJAN_DRIVERS_URL,
};
use jobharvest::domain::models::scrape_job::JobStatus;
use jobharvest::domain::models::time_window::TimeWindow;
use jobharvest::infrastructure::sources::mourjan::CATEGORIES;

fn sources(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_every_source_reports_in_request_order() {
    let orchestrator = orchestrator(FixtureEngine::standard());
    let id = orchestrator.start_job(
        sources(&["expatriates", "mourjan", "bayt", "naukrigulf", "gulftalent"]),
        TimeWindow::Any,
    );

    let job = wait_until_done(orchestrator.registry(), id).await;
    assert_eq!(job.status, JobStatus::Done);
    assert_eq!((job.progress, job.total), (5, 5));

    let order: Vec<_> = job.outcomes.iter().map(|o| o.source.as_str()).collect();
    assert_eq!(order, vec!["expatriates", "mourjan", "bayt", "naukrigulf", "gulftalent"]);
    assert!(job.outcomes.iter().all(|o| !o.is_error()));

    // Sources whose pages all failed still report an empty data outcome
    assert!(job.outcomes[0].records().is_empty());
    assert!(job.outcomes[3].records().is_empty());

    assert_eq!(job.outcomes[1].records().len(), 2);
    assert_eq!(job.outcomes[2].records().len(), 3);
    assert_eq!(job.outcomes[4].records().len(), 1);
}

#[tokio::test]
async fn test_failing_categories_do_not_hide_working_ones() {
    let engine = FixtureEngine::standard();
    let orchestrator = orchestrator(engine.clone());
    let id = orchestrator.start_job(sources(&["https://www.mourjan.com"]), TimeWindow::Any);

    let job = wait_until_done(orchestrator.registry(), id).await;
    let records = job.outcomes[0].records();
    let categories: Vec<_> = records.iter().filter_map(|r| r.category.as_deref()).collect();
    assert_eq!(categories, vec!["drivers", "labors"]);
    assert_eq!(records[0].title, "Family driver needed.");
    assert_eq!(records[1].title, "Masons wanted!");

    // Every category was attempted, in order
    let visited = engine.visited();
    assert_eq!(visited.len(), CATEGORIES.len());
    assert_eq!(visited[11], MOURJAN_DRIVERS_URL);
}

#[tokio::test]
async fn test_window_filters_records() {
    let orchestrator = orchestrator(FixtureEngine::standard());
    let id = orchestrator.start_job(sources(&["bayt", "mourjan"]), TimeWindow::Last24h);

    let job = wait_until_done(orchestrator.registry(), id).await;

    let bayt: Vec<_> = job.outcomes[0].records().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(bayt, vec!["Staff Nurse"]);
    assert!(job.outcomes[0].records()[0].posted_at.is_some());

    // "1 day ago" sits exactly on the 24h boundary and is kept
    assert_eq!(job.outcomes[1].records().len(), 2);
}

#[tokio::test]
async fn test_unknown_source_in_the_middle() {
    let engine = FixtureEngine::standard();
    let orchestrator = orchestrator(engine.clone());
    let id = orchestrator.start_job(
        sources(&["https://www.bayt.com/", "https://www.linkedin.com", "gulftalent"]),
        TimeWindow::Any,
    );

    let job = wait_until_done(orchestrator.registry(), id).await;
    assert!(job.is_done());
    assert_eq!(job.progress, 3);
    assert_eq!(job.outcomes.len(), 3);
    assert!(!job.outcomes[0].is_error());
    assert_eq!(
        job.outcomes[1].error_message(),
        Some("No scraper found for this website")
    );
    assert!(!job.outcomes[2].is_error());
    assert_eq!(engine.visited()[0], BAYT_URL);
}

#[tokio::test]
async fn test_browser_launch_failure_is_reported_per_source() {
    let orchestrator = orchestrator(FixtureEngine::failing("no chrome binary"));
    let id = orchestrator.start_job(sources(&["bayt", "gulftalent"]), TimeWindow::Last7d);

    let job = wait_until_done(orchestrator.registry(), id).await;
    assert!(job.is_done());
    assert_eq!(job.progress, 2);
    for outcome in &job.outcomes {
        assert_eq!(
            outcome.error_message(),
            Some("Browser unavailable: Failed to launch browser: no chrome binary")
        );
    }
}

#[tokio::test]
async fn test_empty_request() {
    let orchestrator = orchestrator(FixtureEngine::standard());
    let id = orchestrator.start_job(vec![], TimeWindow::Any);

    let job = wait_until_done(orchestrator.registry(), id).await;
    assert_eq!((job.progress, job.total), (0, 0));
    assert!(job.outcomes.is_empty());
}
