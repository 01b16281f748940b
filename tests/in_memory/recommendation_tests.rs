//! In-memory integration tests for candidate assignee recommendation.

use super::helpers::{Tracker, tracker};
use issue_tracker::issue::{
    domain::{Issue, Project, Role, User},
    services::{CreateIssueRequest, ErrorKind},
};
use rstest::rstest;

/// Reports an issue, assigns it to `developer`, and lets them fix it.
async fn fixed_by(
    tracker: &Tracker,
    project: &Project,
    leader: &User,
    developer: &User,
    title: &str,
    description: &str,
) -> eyre::Result<Issue> {
    let issue = tracker
        .service
        .create(CreateIssueRequest::new(
            project.id(),
            leader.id(),
            title,
            description,
        ))
        .await?;
    tracker
        .service
        .set_assignee(issue.id(), leader.id(), developer.id())
        .await?;
    Ok(tracker
        .service
        .change_status(developer.id(), issue.id())
        .await?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn developer_with_matching_fix_history_is_recommended(
    tracker: Tracker,
) -> eyre::Result<()> {
    let leader = tracker.user("lead", Role::Admin).await?;
    let storage = tracker.user("sam", Role::Developer).await?;
    let frontend = tracker.user("fay", Role::Developer).await?;
    let project = tracker.project("tracker", &leader).await?;
    tracker.join(&project, &storage).await?;
    tracker.join(&project, &frontend).await?;

    fixed_by(&tracker, &project, &leader, &frontend, "button misaligned", "css grid").await?;
    fixed_by(&tracker, &project, &leader, &storage, "disk full", "write fails").await?;
    fixed_by(&tracker, &project, &leader, &storage, "write timeout", "disk slow").await?;

    let target = tracker
        .service
        .create(CreateIssueRequest::new(
            project.id(),
            leader.id(),
            "write fails",
            "disk quota",
        ))
        .await?;
    let candidate = tracker.service.candidate_user(target.id()).await?;

    eyre::ensure!(
        candidate == storage,
        "expected {}, got {}",
        storage.username(),
        candidate.username()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_in_other_projects_still_counts(tracker: Tracker) -> eyre::Result<()> {
    let leader = tracker.user("lead", Role::Admin).await?;
    let developer = tracker.user("dev", Role::Developer).await?;
    let home = tracker.project("home", &leader).await?;
    let legacy = tracker.project("legacy", &leader).await?;
    tracker.join(&home, &developer).await?;

    fixed_by(&tracker, &legacy, &leader, &developer, "memory leak", "").await?;
    let target = tracker
        .service
        .create(CreateIssueRequest::new(home.id(), leader.id(), "memory leak", ""))
        .await?;

    let candidate = tracker.service.candidate_user(target.id()).await?;
    eyre::ensure!(candidate == developer, "cross-project history ignored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_without_developers_has_no_candidate(tracker: Tracker) -> eyre::Result<()> {
    let leader = tracker.user("lead", Role::Admin).await?;
    let project = tracker.project("tracker", &leader).await?;
    tracker.join(&project, &leader).await?;
    let target = tracker
        .service
        .create(CreateIssueRequest::new(project.id(), leader.id(), "anything", ""))
        .await?;

    let result = tracker.service.candidate_user(target.id()).await;
    let Err(err) = result else {
        eyre::bail!("a candidate was returned without developers");
    };
    eyre::ensure!(err.kind() == ErrorKind::NotFound, "unexpected kind {err:?}");
    Ok(())
}
