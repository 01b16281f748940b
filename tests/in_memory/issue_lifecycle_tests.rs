//! In-memory integration tests for issue lifecycle operations.

use super::helpers::{Tracker, tracker};
use issue_tracker::issue::{
    domain::{IssuePriority, IssueStatus, Role},
    services::{CreateIssueRequest, ErrorKind, IssueLifecycleError, ModifyIssueRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reported_issue_can_be_read_back(tracker: Tracker) -> eyre::Result<()> {
    let tester = tracker.user("tess", Role::Tester).await?;
    let project = tracker.project("tracker", &tester).await?;

    let created = tracker
        .service
        .create(CreateIssueRequest::new(
            project.id(),
            tester.id(),
            "Login button does nothing",
            "Clicking it on Firefox has no effect",
        ))
        .await?;
    let fetched = tracker.service.get_issue(created.id()).await?;

    eyre::ensure!(fetched == created, "stored issue differs from created issue");
    eyre::ensure!(fetched.status() == IssueStatus::New, "new issue not in NEW");
    eyre::ensure!(
        fetched.priority() == Some(IssuePriority::Major),
        "default priority not applied"
    );
    eyre::ensure!(fetched.updated_at().is_none(), "fresh issue has update time");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn issue_travels_from_report_to_close(tracker: Tracker) -> eyre::Result<()> {
    let leader = tracker.user("lead", Role::ProjectLeader).await?;
    let tester = tracker.user("tess", Role::Tester).await?;
    let developer = tracker.user("dev", Role::Developer).await?;
    let project = tracker.project("tracker", &leader).await?;

    let issue = tracker
        .service
        .create(
            CreateIssueRequest::new(project.id(), tester.id(), "Crash on save", "")
                .with_priority(IssuePriority::Critical),
        )
        .await?;
    let revised = tracker
        .service
        .modify(ModifyIssueRequest::new(
            issue.id(),
            tester.id(),
            "Crash on save as",
            "Only with long file names",
            Some(IssuePriority::Blocker),
        ))
        .await?;
    eyre::ensure!(revised.updated_at().is_some(), "modify did not stamp update");

    tracker
        .service
        .set_assignee(issue.id(), leader.id(), developer.id())
        .await?;
    let assigned = tracker.service.list_by_assignee(developer.id()).await?;
    eyre::ensure!(assigned.len() == 1, "assignee listing missing the issue");

    tracker.service.change_status(developer.id(), issue.id()).await?;
    tracker.service.change_status(tester.id(), issue.id()).await?;
    let closed = tracker.service.change_status(leader.id(), issue.id()).await?;

    eyre::ensure!(closed.status() == IssueStatus::Close, "issue not closed");
    eyre::ensure!(closed.fixer() == Some(developer.id()), "fixer not recorded");
    eyre::ensure!(closed.title().as_str() == "Crash on save as", "title lost");
    eyre::ensure!(
        closed.priority() == Some(IssuePriority::Blocker),
        "priority lost"
    );
    let in_close = tracker
        .service
        .list_by_project_and_status(project.id(), IssueStatus::Close)
        .await?;
    eyre::ensure!(in_close == [closed], "status listing mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn plain_user_cannot_report_or_assign(tracker: Tracker) -> eyre::Result<()> {
    let user = tracker.user("pat", Role::User).await?;
    let tester = tracker.user("tess", Role::Tester).await?;
    let developer = tracker.user("dev", Role::Developer).await?;
    let project = tracker.project("tracker", &tester).await?;

    let rejected = tracker
        .service
        .create(CreateIssueRequest::new(project.id(), user.id(), "Typo", ""))
        .await;
    let Err(err) = rejected else {
        eyre::bail!("plain user reported an issue");
    };
    eyre::ensure!(err.kind() == ErrorKind::Forbidden, "unexpected kind {err:?}");
    eyre::ensure!(err.kind().status_code() == 403, "unexpected status code");

    let issue = tracker
        .service
        .create(CreateIssueRequest::new(project.id(), tester.id(), "Typo", ""))
        .await?;
    let rejected = tracker
        .service
        .set_assignee(issue.id(), tester.id(), developer.id())
        .await;
    eyre::ensure!(
        matches!(rejected, Err(IssueLifecycleError::RoleBadRequest { .. })),
        "tester assigned an issue"
    );
    eyre::ensure!(
        tracker.service.get_issue(issue.id()).await? == issue,
        "failed assignment changed the issue"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_issue_is_gone(tracker: Tracker) -> eyre::Result<()> {
    let admin = tracker.user("root", Role::Admin).await?;
    let project = tracker.project("tracker", &admin).await?;
    let issue = tracker
        .service
        .create(CreateIssueRequest::new(project.id(), admin.id(), "Obsolete", ""))
        .await?;

    let removed = tracker.service.delete(issue.id(), admin.id()).await?;
    eyre::ensure!(removed == issue, "delete returned a different issue");

    let lookup = tracker.service.get_issue(issue.id()).await;
    eyre::ensure!(
        matches!(lookup, Err(IssueLifecycleError::IssueNotFound(id)) if id == issue.id()),
        "issue still present"
    );
    eyre::ensure!(
        tracker.service.list_by_project(project.id()).await?.is_empty(),
        "project listing still holds the issue"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_are_listed_in_order(tracker: Tracker) -> eyre::Result<()> {
    let tester = tracker.user("tess", Role::Tester).await?;
    let developer = tracker.user("dev", Role::Developer).await?;
    let project = tracker.project("tracker", &tester).await?;
    let issue = tracker
        .service
        .create(CreateIssueRequest::new(project.id(), tester.id(), "Slow search", ""))
        .await?;

    tracker
        .service
        .add_comment(issue.id(), tester.id(), "Takes ten seconds")
        .await?;
    tracker
        .service
        .add_comment(issue.id(), developer.id(), "Missing index")
        .await?;

    let comments = tracker.service.list_comments(issue.id()).await?;
    let messages: Vec<_> = comments.iter().map(|c| c.message.as_str()).collect();
    eyre::ensure!(
        messages == ["Takes ten seconds", "Missing index"],
        "unexpected comments {messages:?}"
    );
    eyre::ensure!(
        comments.last().and_then(|c| c.author_id) == Some(developer.id()),
        "author not recorded"
    );
    Ok(())
}
