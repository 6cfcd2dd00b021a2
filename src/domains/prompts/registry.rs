//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{NodeJsSetupPrompt, PromptDefinition};
use super::templates::{PromptTemplate, PromptTemplateBuilder};

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    P::arguments()
        .into_iter()
        .fold(
            PromptTemplateBuilder::new(P::NAME).description(P::DESCRIPTION),
            PromptTemplateBuilder::argument,
        )
        .template(P::template())
        .build()
}

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![build_template::<NodeJsSetupPrompt>()]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![NodeJsSetupPrompt::NAME]
}
