//! Numbered "what to expect" steps.

use super::heading_or;
use crate::compose::view_models::{ProcessView, StepView};
use crate::content::{PageContent, ProcessStep};

pub const DEFAULT_PROCESS_HEADING: &str = "What to expect";

pub fn generate(page: &PageContent) -> Option<ProcessView> {
    let steps: &[ProcessStep] = page.process.as_deref().unwrap_or_default();
    if steps.is_empty() {
        return None;
    }

    Some(ProcessView {
        heading: heading_or(&page.headings.process, DEFAULT_PROCESS_HEADING),
        steps: steps
            .iter()
            .enumerate()
            .map(|(idx, step)| StepView {
                number: idx + 1,
                title: step.title.clone(),
                body: step.body.clone(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;

    #[test]
    fn test_steps_numbered_from_one() {
        let registry = ContentRegistry::builtin().unwrap();
        let view = generate(registry.get("/gedling/emergency-dentist").unwrap()).unwrap();
        let numbers: Vec<usize> = view.steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(view.steps[0].title, "Call at 8:30am");
        assert_eq!(view.heading, DEFAULT_PROCESS_HEADING);
    }
}
