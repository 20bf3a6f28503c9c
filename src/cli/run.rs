//! `prswitch run`: the GitHub Action entry point
//!
//! Reads the pull request body, publishes the switch report as the `report`
//! step output and, when a checkbox was toggled, writes the synchronized body
//! back to the pull request.

use crate::action::output::{error_command, ActionOutput, WorkflowOutput};
use crate::action::delay_action;
use crate::github::context::{api_url, resolve_pull_request, PullRequestRef};
use crate::github::{GitHubClient, PullRequestStore};
use crate::models::{ActionConfig, Report};
use crate::services::{compute_report, rewrite_document_with_stats};
use crate::{Context, Result};
use clap::Args;
use tracing::{debug, info};

/// Name of the step output carrying the JSON report
pub const REPORT_OUTPUT: &str = "report";

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Repository as owner/name (defaults to GITHUB_REPOSITORY)
    #[arg(long)]
    pub repo: Option<String>,

    /// Pull request number (defaults to the number in the event payload)
    #[arg(long)]
    pub pr: Option<u64>,

    /// Compute and publish the report without updating the pull request
    #[arg(long)]
    pub dry_run: bool,
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub report: Report,

    /// The pull request body was written back
    pub updated: bool,
}

pub async fn run(args: RunArgs) -> Result<()> {
    match run_action(&args).await {
        Ok(_) => Ok(()),
        Err(e) => {
            // Fail the workflow step with an annotation
            println!("{}", error_command(&format!("{:#}", e)));
            Err(e)
        }
    }
}

async fn run_action(args: &RunArgs) -> Result<RunOutcome> {
    let config = ActionConfig::from_env().context("Failed to read action inputs")?;
    let reference = resolve_pull_request(args.repo.as_deref(), args.pr)?;
    let client = GitHubClient::new(&config.github_token, api_url())?;
    let mut output = WorkflowOutput::from_env();

    execute(&config, &reference, &client, &mut output, args.dry_run).await
}

/// Run the action against a pull request store and an output sink
pub async fn execute(
    config: &ActionConfig,
    reference: &PullRequestRef,
    store: &dyn PullRequestStore,
    output: &mut dyn ActionOutput,
    dry_run: bool,
) -> Result<RunOutcome> {
    delay_action(config.delay).await;

    if let Some(namespace) = &config.namespace {
        debug!("Running in namespace '{}'", namespace);
    }

    debug!("Fetching pull-request information");
    let pull = store
        .fetch(reference)
        .await
        .with_context(|| format!("Failed to fetch pull request {}", reference))?;

    debug!("Processing body <<<\n{}\n>>>", pull.body);
    let report = compute_report(&pull.body, config.capture_labels);
    output.set_output(REPORT_OUTPUT, &report.to_json()?)?;
    info!(
        "{} switch(es) found, changed: {}",
        report.state.len(),
        report.has_changed
    );

    if !report.has_changed {
        return Ok(RunOutcome {
            report,
            updated: false,
        });
    }

    debug!("Rewriting pull-request body");
    let rewrite = rewrite_document_with_stats(&pull.body);

    if dry_run {
        info!(
            "Dry run: would update {} marker(s) of {}",
            rewrite.updated, reference
        );
        debug!("New body <<<\n{}\n>>>", rewrite.body);
        return Ok(RunOutcome {
            report,
            updated: false,
        });
    }

    store
        .update_body(reference, &rewrite.body)
        .await
        .with_context(|| format!("Failed to update pull request {}", reference))?;
    info!("Updated {} marker(s) of {}", rewrite.updated, reference);

    Ok(RunOutcome {
        report,
        updated: true,
    })
}
