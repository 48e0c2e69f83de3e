#![cfg(unix)]

mod common;

use common::{
    commit_count, current_branch, git, git_available, init_bare_remote, init_repo, subject_at,
};
use gemini_pr::{
    AssistantConfig, AssistantError, GitError, GitStep, PrStatus, PushAuth, Runner, RunnerConfig,
    RunnerError, RunnerOptions, BRANCH_PREFIX, DEFAULT_PR_BODY,
};
use serde_json::{json, Value};
use std::path::Path;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn install_crypto_provider() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

fn options(dir: &Path, api_url: &str) -> RunnerOptions {
    RunnerOptions {
        instruction: "Add a CONTRIBUTING guide".to_string(),
        // Nothing listens on port 9, so a push fails fast.
        repository: "http://127.0.0.1:9/acme/widgets".to_string(),
        token: Some("tok123".to_string()),
        workdir: dir.to_path_buf(),
        config_path: dir.join("missing.toml"),
        api_url: Some(api_url.to_string()),
        ..RunnerOptions::default()
    }
}

async fn unused_api() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn missing_assistant_stops_before_staging() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    install_crypto_provider();
    let repo = init_repo();
    let server = unused_api().await;

    let config = RunnerConfig::new(options(repo.path(), &server.uri()))
        .unwrap()
        .with_assistant(AssistantConfig::new("gemini-pr-no-such-assistant", Vec::new()));
    let error = Runner::new(config).unwrap().run().await.unwrap_err();

    assert!(matches!(
        error,
        RunnerError::Assistant(AssistantError::NotFound { .. })
    ));
    assert!(error.to_string().contains("not found"));
    assert_eq!(error.exit_code(), 1);
    assert_eq!(commit_count(repo.path()), 1);
    // The branch created before the assistant ran is left behind.
    assert!(current_branch(repo.path()).starts_with(BRANCH_PREFIX));
}

#[tokio::test]
async fn failing_assistant_passes_exit_code_through() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    install_crypto_provider();
    let repo = init_repo();
    let server = unused_api().await;

    let config = RunnerConfig::new(options(repo.path(), &server.uri()))
        .unwrap()
        .with_assistant(AssistantConfig::new(
            "sh",
            vec!["-c".to_string(), "exit 7".to_string()],
        ));
    let error = Runner::new(config).unwrap().run().await.unwrap_err();

    assert!(matches!(
        error,
        RunnerError::Assistant(AssistantError::Failed { code: Some(7), .. })
    ));
    assert_eq!(error.exit_code(), 7);
    assert_eq!(commit_count(repo.path()), 1);
}

#[tokio::test]
async fn push_failure_aborts_before_pull_request() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    install_crypto_provider();
    let repo = init_repo();
    let server = unused_api().await;

    let config = RunnerConfig::new(options(repo.path(), &server.uri()))
        .unwrap()
        .with_assistant(AssistantConfig::new(
            "sh",
            vec!["-c".to_string(), "cat > CONTRIBUTING.md".to_string()],
        ));
    let error = Runner::new(config).unwrap().run().await.unwrap_err();

    match &error {
        RunnerError::Git(GitError::Failed { step, stderr, .. }) => {
            assert_eq!(*step, GitStep::Push);
            assert!(!stderr.contains("tok123"));
        }
        other => panic!("expected push failure, got {other:?}"),
    }
    assert!(!error.to_string().contains("tok123"));

    // Commit message falls back to the instruction.
    assert_eq!(commit_count(repo.path()), 2);
    assert_eq!(
        git(repo.path(), &["log", "-1", "--format=%s"]),
        "Add a CONTRIBUTING guide"
    );
    assert_eq!(
        std::fs::read_to_string(repo.path().join("CONTRIBUTING.md")).unwrap(),
        "Add a CONTRIBUTING guide"
    );
}

#[tokio::test]
async fn explicit_title_becomes_commit_message() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    install_crypto_provider();
    let repo = init_repo();
    let server = unused_api().await;

    let config = RunnerConfig::new(RunnerOptions {
        title: Some("docs: add contributing guide".to_string()),
        ..options(repo.path(), &server.uri())
    })
    .unwrap()
    .with_assistant(AssistantConfig::new(
        "sh",
        vec!["-c".to_string(), "cat > CONTRIBUTING.md".to_string()],
    ));
    let error = Runner::new(config).unwrap().run().await.unwrap_err();

    assert!(matches!(
        error,
        RunnerError::Git(GitError::Failed {
            step: GitStep::Push,
            ..
        })
    ));
    assert_eq!(
        git(repo.path(), &["log", "-1", "--format=%s"]),
        "docs: add contributing guide"
    );
}

#[tokio::test]
async fn dry_run_leaves_checkout_untouched() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    install_crypto_provider();
    let repo = init_repo();
    let server = unused_api().await;
    let branch_before = current_branch(repo.path());

    let config = RunnerConfig::new(RunnerOptions {
        dry_run: true,
        ..options(repo.path(), &server.uri())
    })
    .unwrap()
    .with_assistant(AssistantConfig::new(
        "sh",
        vec!["-c".to_string(), "cat > CONTRIBUTING.md".to_string()],
    ));
    let summary = Runner::new(config).unwrap().run().await.unwrap();

    assert!(summary.dry_run);
    assert!(!summary.pushed);
    assert!(summary.branch_name.starts_with(BRANCH_PREFIX));
    assert_eq!(summary.commit_message, "Add a CONTRIBUTING guide");
    assert_eq!(current_branch(repo.path()), branch_before);
    assert!(!repo.path().join("CONTRIBUTING.md").exists());
}

fn writing_assistant() -> AssistantConfig {
    AssistantConfig::new(
        "sh",
        vec!["-c".to_string(), "cat > CONTRIBUTING.md".to_string()],
    )
}

async fn pull_request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].body_json().unwrap()
}

#[tokio::test]
async fn pushes_branch_and_opens_pull_request() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    install_crypto_provider();
    let repo = init_repo();
    let remote = init_bare_remote();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/widgets/pulls"))
        .and(header("authorization", "token tok123"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 12,
            "html_url": "https://github.com/acme/widgets/pull/12"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = RunnerConfig::new(RunnerOptions {
        base_branch: "develop".to_string(),
        push_url: Some(remote.path().display().to_string()),
        ..options(repo.path(), &server.uri())
    })
    .unwrap()
    .with_assistant(writing_assistant());
    let summary = Runner::new(config).unwrap().run().await.unwrap();

    assert!(summary.pushed);
    assert!(!summary.pushed_without_pr());
    assert_eq!(
        summary.pr_url(),
        Some("https://github.com/acme/widgets/pull/12")
    );
    assert_eq!(
        subject_at(remote.path(), &summary.branch_name),
        "Add a CONTRIBUTING guide"
    );

    let body = pull_request_body(&server).await;
    assert_eq!(body["title"], "Add a CONTRIBUTING guide");
    assert_eq!(body["title"], summary.commit_message.as_str());
    assert_eq!(body["head"], summary.branch_name.as_str());
    assert_eq!(body["base"], "develop");
    assert_eq!(body["body"], DEFAULT_PR_BODY);
}

#[tokio::test]
async fn rejected_pull_request_leaves_branch_pushed() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    install_crypto_provider();
    let repo = init_repo();
    let remote = init_bare_remote();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/widgets/pulls"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = RunnerConfig::new(RunnerOptions {
        title: Some("docs: add contributing guide".to_string()),
        push_url: Some(remote.path().display().to_string()),
        push_auth: PushAuth::Url,
        ..options(repo.path(), &server.uri())
    })
    .unwrap()
    .with_assistant(writing_assistant());
    let summary = Runner::new(config).unwrap().run().await.unwrap();

    assert!(summary.pushed);
    assert!(summary.pushed_without_pr());
    match &summary.pull_request {
        Some(PrStatus::Rejected { status, body }) => {
            assert_eq!(*status, 422);
            assert!(body.contains("Validation Failed"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(
        subject_at(remote.path(), &summary.branch_name),
        "docs: add contributing guide"
    );

    let body = pull_request_body(&server).await;
    assert_eq!(body["title"], "docs: add contributing guide");
    assert_eq!(body["head"], summary.branch_name.as_str());
    assert_eq!(body["base"], "main");
}
