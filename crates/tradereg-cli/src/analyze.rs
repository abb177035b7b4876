//! Analysis pipeline: form → session → service → classifier.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tradereg_classify::classify;
use tradereg_client::AnalysisClient;
use tradereg_core::{
    AnalysisForm, AnalysisInput, AnalysisResult, AnalysisSession, ParsedAnalysisResult,
};

/// A completed analysis: the request as sent and its classified result.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub input: AnalysisInput,
    pub parsed: ParsedAnalysisResult,
}

/// Submit `form` through `session` and classify the service's answer.
///
/// On failure the session is left on the form with an error notice, and the
/// same error is returned.
pub async fn run_analysis(
    client: &AnalysisClient,
    session: &mut AnalysisSession,
    form: &AnalysisForm,
) -> anyhow::Result<AnalysisOutcome> {
    let input = session.submit(form)?;

    match client.analyze(&input).await {
        Ok(result) => session.complete(result)?,
        Err(e) => {
            session.fail(&e.to_string());
            return Err(e).context("regulatory analysis failed");
        }
    }

    let result = session
        .current_result()
        .context("completed analysis missing from session")?;
    Ok(AnalysisOutcome {
        parsed: classify(result),
        input,
    })
}

/// Read an analysis result document from `path`, or stdin when `path` is `None` or `-`.
pub fn load_result(path: Option<&Path>) -> anyhow::Result<AnalysisResult> {
    let json = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("reading {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading analysis result from stdin")?;
            buf
        }
    };
    serde_json::from_str(&json).context("parsing analysis result JSON")
}
