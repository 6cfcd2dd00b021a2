//! Prompt service implementation.
//!
//! The PromptService maintains the available prompts and renders them with
//! the caller's arguments. Prompts are defined in `definitions/` and
//! registered via `registry.rs`.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for listing and rendering prompts.
#[derive(Debug, Clone)]
pub struct PromptService {
    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a service holding every registered prompt.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: HashMap::new(),
        };
        for template in get_all_prompts() {
            service.register_prompt(template);
        }
        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts, sorted by name.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        let mut prompts: Vec<Prompt> = self
            .prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect();
        prompts.sort_by(|a, b| a.name.cmp(&b.name));
        prompts
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn text_of(result: &GetPromptResult) -> &str {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            _ => panic!("Expected text message"),
        }
    }

    #[tokio::test]
    async fn test_list_prompts() {
        let service = PromptService::new();
        let prompts = service.list_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "nodejs-setup-resend");
    }

    #[tokio::test]
    async fn test_setup_guide_lists_all_package_managers() {
        let service = PromptService::new();
        let result = service.get_prompt("nodejs-setup-resend", None).await.unwrap();

        let text = text_of(&result);
        assert!(text.contains("npm install resend"));
        assert!(text.contains("yarn add resend"));
        assert!(text.contains("pnpm add resend"));
        assert!(!text.contains("{{"));
    }

    #[tokio::test]
    async fn test_setup_guide_with_package_manager() {
        let service = PromptService::new();
        let mut args = HashMap::new();
        args.insert("package_manager".to_string(), "bun".to_string());

        let result = service
            .get_prompt("nodejs-setup-resend", Some(args))
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.contains("bun add resend"));
        assert!(!text.contains("yarn add resend"));
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let mut service = PromptService::new();
        service.register_prompt(
            PromptTemplate::new(
                "with-required",
                None,
                vec![rmcp::model::PromptArgument {
                    name: "domain".to_string(),
                    title: None,
                    description: None,
                    required: Some(true),
                }],
                "Verify {{domain}}",
            ),
        );

        let result = service.get_prompt("with-required", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let service = PromptService::new();
        let result = service.get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
