//! Command vocabulary and dispatch
//!
//! Five built-in commands with canned responses. The behaviors are fixed;
//! names and response text come from configuration, defaulting to content
//! assembled from the profile. Dispatch is total: every input maps to a
//! response, the reset notice, the fallback line, or silence.

use std::collections::HashMap;

use crate::config::Config;

/// Behavior slot of a built-in command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Clear,
    Resume,
    About,
    Contact,
}

/// Outcome of dispatching one submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Append these response lines to the scrollback
    Respond(Vec<String>),
    /// Replace the entire scrollback with a single notice
    Reset(String),
    /// Unrecognized input: append one fallback line echoing it
    Fallback(String),
    /// Empty or whitespace-only input: echo only
    Silent,
}

/// The configured name -> behavior table with canned response text
pub struct CommandSet {
    names: HashMap<String, CommandKind>,
    responses: HashMap<CommandKind, Vec<String>>,
    clear_notice: String,
}

impl CommandSet {
    /// Build the command table from configuration
    ///
    /// Response defaults are assembled from the profile; explicit response
    /// overrides in the config win. The help listing is regenerated from the
    /// configured names so renames stay self-describing.
    pub fn from_config(config: &Config) -> Self {
        let cmds = &config.commands;
        let profile = &config.profile;

        let help_name = cmds.help.name.clone().unwrap_or_else(|| "help".to_string());
        let about_name = cmds.about.name.clone().unwrap_or_else(|| "about".to_string());
        let resume_name = cmds.resume.name.clone().unwrap_or_else(|| "resume".to_string());
        let contact_name = cmds.contact.name.clone().unwrap_or_else(|| "contact".to_string());
        let clear_name = cmds.clear.name.clone().unwrap_or_else(|| "clear".to_string());

        let help_response = cmds.help.response.clone().unwrap_or_else(|| {
            vec![
                "Available commands:".to_string(),
                format!("- {}: Show this help message", help_name),
                format!("- {}: Learn about me", about_name),
                format!("- {}: Get a link to my resume", resume_name),
                format!("- {}: Get my contact information", contact_name),
            ]
        });

        let about_response = cmds.about.response.clone().unwrap_or_else(|| {
            let mut lines = vec![format!("{} - {}", profile.name, profile.tagline)];
            lines.extend(profile.bio.iter().cloned());
            lines.push(format!("GitHub: {}", profile.github));
            lines.push(format!("Website: {}", profile.website));
            lines
        });

        let resume_response = cmds
            .resume
            .response
            .clone()
            .unwrap_or_else(|| vec![format!("Resume: {}", profile.resume_url)]);

        let contact_response = cmds.contact.response.clone().unwrap_or_else(|| {
            vec![
                format!("Email: {}", profile.email),
                format!("GitHub: {}", profile.github),
                format!("LinkedIn: {}", profile.linkedin),
            ]
        });

        let mut names = HashMap::new();
        names.insert(help_name, CommandKind::Help);
        names.insert(about_name, CommandKind::About);
        names.insert(resume_name, CommandKind::Resume);
        names.insert(contact_name, CommandKind::Contact);
        names.insert(clear_name, CommandKind::Clear);

        let mut responses = HashMap::new();
        responses.insert(CommandKind::Help, help_response);
        responses.insert(CommandKind::About, about_response);
        responses.insert(CommandKind::Resume, resume_response);
        responses.insert(CommandKind::Contact, contact_response);

        Self {
            names,
            responses,
            clear_notice: cmds
                .clear
                .notice
                .clone()
                .unwrap_or_else(|| "Cleared terminal.".to_string()),
        }
    }

    /// Dispatch a submitted line
    ///
    /// Matching is case-sensitive and exact on the trimmed text. The raw
    /// untrimmed input is what the fallback echoes.
    pub fn dispatch(&self, raw: &str) -> Dispatch {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Dispatch::Silent;
        }

        match self.names.get(trimmed) {
            Some(CommandKind::Clear) => Dispatch::Reset(self.clear_notice.clone()),
            Some(kind) => Dispatch::Respond(self.responses[kind].clone()),
            None => Dispatch::Fallback(format!("Command '{}' executed.", raw)),
        }
    }

    /// Configured name of a behavior slot
    pub fn name_of(&self, kind: CommandKind) -> &str {
        self.names
            .iter()
            .find(|(_, k)| **k == kind)
            .map(|(name, _)| name.as_str())
            .unwrap_or("")
    }
}
