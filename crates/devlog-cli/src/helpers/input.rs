//! Entry field collection from flags and interactive prompts.

use dialoguer::{Input, Select};

use devlog_core::{EntryType, Impact, NewEntry};

use crate::cli::AddArgs;

/// Source of values for required fields missing from the command line.
pub trait FieldPrompter {
    /// Pick one of `options` for `label`.
    fn choose(&mut self, label: &str, options: &[&str]) -> anyhow::Result<String>;

    /// Read a free-text value for `label`.
    fn text(&mut self, label: &str) -> anyhow::Result<String>;
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompter;

impl FieldPrompter for TerminalPrompter {
    fn choose(&mut self, label: &str, options: &[&str]) -> anyhow::Result<String> {
        let index = Select::new()
            .with_prompt(label)
            .items(options)
            .default(0)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))?;
        Ok(options[index].to_string())
    }

    fn text(&mut self, label: &str) -> anyhow::Result<String> {
        Input::<String>::new()
            .with_prompt(label)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))
    }
}

/// Build a candidate entry from `args`.
///
/// Required fields absent from the flags are asked for through `prompter`
/// when one is given. Without a prompter they stay empty and the core
/// validation names them.
pub fn collect_entry(
    args: &AddArgs,
    default_developer: Option<&str>,
    mut prompter: Option<&mut dyn FieldPrompter>,
) -> anyhow::Result<NewEntry> {
    let type_names: Vec<&str> = EntryType::ALL.iter().map(|t| t.as_str()).collect();
    let impact_names: Vec<&str> = Impact::ALL.iter().map(|i| i.as_str()).collect();

    let mut resolve = |value: &Option<String>, label: &str, options: Option<&[&str]>| {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            return Ok(value.to_string());
        }
        match prompter.as_deref_mut() {
            Some(p) => match options {
                Some(options) => p.choose(label, options),
                None => p.text(label),
            },
            None => Ok(String::new()),
        }
    };

    let entry_type = resolve(&args.entry_type, "Type", Some(type_names.as_slice()))?;
    let component = resolve(&args.component, "Component", None)?;
    let description = resolve(&args.description, "Description", None)?;
    let impact = resolve(&args.impact, "Impact", Some(impact_names.as_slice()))?;
    let files = resolve(&args.files, "Files changed", None)?;
    let duration = resolve(&args.duration, "Duration", None)?;

    let mut entry = NewEntry::new(entry_type, component, description, impact, files, duration);
    entry.impact_description = args.impact_description.clone();
    entry.developer = args
        .developer
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .or(default_developer.filter(|v| !v.trim().is_empty()))
        .map(str::to_string);
    entry.additional_context = args.additional_context.clone();
    Ok(entry)
}
