//! Pre-written prompt templates for code review, debugging, and planning.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::Result;
use crate::mcp::protocol::{GetPromptResult, PromptMessage};
use crate::registry::{CapabilityDescriptor, CapabilityRegistry, Handler};
use crate::schema::{FieldSpec, InputSchema, JsonMap};

fn arg<'a>(args: &'a JsonMap, name: &str) -> &'a str {
    args.get(name).and_then(Value::as_str).unwrap_or_default()
}

fn prompt_result(description: &str, text: String) -> GetPromptResult {
    GetPromptResult {
        description: Some(description.to_string()),
        messages: vec![PromptMessage::user(text)],
    }
}

pub fn code_review_text(code: &str, language: &str) -> String {
    format!(
        "Please review this {language} code for:\n\
         - Potential bugs or errors\n\
         - Code style and best practices\n\
         - Performance improvements\n\
         - Security issues\n\
         \n\
         Code to review:\n\
         ```{language}\n\
         {code}\n\
         ```\n\
         \n\
         Provide specific suggestions with explanations."
    )
}

pub fn debug_helper_text(error_message: &str, code_context: &str) -> String {
    let context_block = if code_context.is_empty() {
        String::new()
    } else {
        format!("Code context:\n```\n{code_context}\n```")
    };
    format!(
        "I'm encountering this error: \"{error_message}\"\n\
         \n\
         {context_block}\n\
         \n\
         Please help me debug this by:\n\
         1. Explaining what the error likely means\n\
         2. Suggesting potential causes\n\
         3. Providing step-by-step debugging approach\n\
         4. Offering specific solutions"
    )
}

pub fn project_planner_text(project_description: &str, technology_stack: &str) -> String {
    let stack_line = if technology_stack.is_empty() {
        String::new()
    } else {
        format!("Preferred tech stack: {technology_stack}")
    };
    format!(
        "I want to build: {project_description}\n\
         \n\
         {stack_line}\n\
         \n\
         Please help me plan this project by providing:\n\
         1. Project structure and architecture recommendations\n\
         2. Technology stack suggestions (if not specified)\n\
         3. Development phases and milestones\n\
         4. Potential challenges and solutions\n\
         5. Best practices for this type of project"
    )
}

pub fn register(registry: &mut CapabilityRegistry) -> Result<()> {
    registry.register(CapabilityDescriptor {
        name: "code_review".to_string(),
        title: "Code Review Assistant".to_string(),
        description: "Help review code for best practices, bugs, and improvements".to_string(),
        schema: InputSchema::new(vec![
            FieldSpec::string("code").describe("The code to review"),
            FieldSpec::string("language")
                .describe("Programming language")
                .default_value(json!("javascript")),
        ]),
        uri_template: None,
        handler: Handler::Prompt(Arc::new(|_ctx, args| {
            Ok(prompt_result(
                "Help review code for best practices, bugs, and improvements",
                code_review_text(arg(args, "code"), arg(args, "language")),
            ))
        })),
    })?;

    registry.register(CapabilityDescriptor {
        name: "debug_helper".to_string(),
        title: "Debug Helper".to_string(),
        description: "Help debug code issues with systematic approach".to_string(),
        schema: InputSchema::new(vec![
            FieldSpec::string("error_message").describe("The error message or description"),
            FieldSpec::string("code_context")
                .describe("Relevant code context")
                .default_value(json!("")),
        ]),
        uri_template: None,
        handler: Handler::Prompt(Arc::new(|_ctx, args| {
            Ok(prompt_result(
                "Help debug code issues with systematic approach",
                debug_helper_text(arg(args, "error_message"), arg(args, "code_context")),
            ))
        })),
    })?;

    registry.register(CapabilityDescriptor {
        name: "project_planner".to_string(),
        title: "Project Planning Assistant".to_string(),
        description: "Help plan and structure development projects".to_string(),
        schema: InputSchema::new(vec![
            FieldSpec::string("project_description").describe("Description of the project"),
            FieldSpec::string("technology_stack")
                .describe("Preferred technologies")
                .default_value(json!("")),
        ]),
        uri_template: None,
        handler: Handler::Prompt(Arc::new(|_ctx, args| {
            Ok(prompt_result(
                "Help plan and structure development projects",
                project_planner_text(
                    arg(args, "project_description"),
                    arg(args, "technology_stack"),
                ),
            ))
        })),
    })
}
