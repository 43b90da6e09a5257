use anyhow::Result;
use clap::Args;
use serde::Serialize;
use touch_action::{ActionStep, GestureRequest, TouchPrimitive};

use crate::cli::context::CliContext;
use crate::cli::output::emit;
use crate::cli::source::GestureSource;

#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: GestureSource,
}

#[derive(Debug, Serialize)]
pub struct GestureSummary {
    pub kind: &'static str,
    pub count: usize,
    pub steps: Vec<StepSummary>,
}

#[derive(Debug, Serialize)]
pub struct StepSummary {
    pub index: usize,
    pub action: TouchPrimitive,
    pub form: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl GestureSummary {
    pub fn from_request(request: &GestureRequest) -> Self {
        let steps = request
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| StepSummary::from_step(index, step))
            .collect();
        Self {
            kind: if request.is_sequence() {
                "sequence"
            } else {
                "single"
            },
            count: request.len(),
            steps,
        }
    }
}

impl StepSummary {
    fn from_step(index: usize, step: &ActionStep) -> Self {
        let action = step.primitive();
        let mut notes = Vec::new();
        let form = match step {
            ActionStep::Named(_) => "bare",
            ActionStep::Detailed(record) => {
                let positioned =
                    record.x.is_some() || record.y.is_some() || record.element.is_some();
                if positioned && !action.accepts_position() {
                    notes.push(format!("{} does not usually take a position", action));
                }
                if record.ms.is_some() && !action.accepts_duration() {
                    notes.push(format!("{} does not usually take ms", action));
                }
                if record.count.is_some() && action != TouchPrimitive::Tap {
                    notes.push(format!("{} does not usually take count", action));
                }
                if record.duration.is_some() && action != TouchPrimitive::LongPress {
                    notes.push(format!("{} does not usually take duration", action));
                }
                "structured"
            }
        };
        Self {
            index,
            action,
            form,
            detail: step.to_string(),
            notes,
        }
    }
}

pub async fn cmd_inspect(args: InspectArgs, ctx: &CliContext) -> Result<()> {
    let request = args.source.load(ctx.config()).await?;
    let summary = GestureSummary::from_request(&request);
    emit(&summary, ctx.output(), render_summary)
}

fn render_summary(summary: &GestureSummary) -> String {
    let mut lines = vec![format!("{} gesture, {} step(s)", summary.kind, summary.count)];
    for step in &summary.steps {
        lines.push(format!("  {}. {} ({})", step.index + 1, step.detail, step.form));
        for note in &step.notes {
            lines.push(format!("     note: {}", note));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use touch_action::StepRecord;

    #[test]
    fn summary_marks_forms_and_hints() {
        let request: GestureRequest = vec![
            TouchPrimitive::Press.into(),
            StepRecord::new(TouchPrimitive::Wait).lasting(300).into(),
            StepRecord::new(TouchPrimitive::Release).at(1, 2).into(),
            StepRecord::new(TouchPrimitive::Tap).times(2).held_for(900).into(),
        ]
        .into();

        let summary = GestureSummary::from_request(&request);
        assert_eq!(summary.kind, "sequence");
        assert_eq!(summary.count, 4);
        assert_eq!(summary.steps[0].form, "bare");
        assert_eq!(summary.steps[1].form, "structured");
        assert!(summary.steps[1].notes.is_empty());
        assert_eq!(summary.steps[2].notes.len(), 1);
        assert_eq!(
            summary.steps[3].notes,
            vec!["tap does not usually take duration".to_string()]
        );
    }

    #[test]
    fn human_render_numbers_steps() {
        let summary = GestureSummary::from_request(&TouchPrimitive::Tap.into());
        assert_eq!(render_summary(&summary), "single gesture, 1 step(s)\n  1. tap (bare)");
    }
}
