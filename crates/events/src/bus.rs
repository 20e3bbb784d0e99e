use super::models::{AppEvent, EventBus};
use std::sync::Arc;
use colored::Colorize;

impl EventBus {
    pub fn new(quiet: bool) -> Arc<Self> {
        Arc::new(Self { quiet })
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Invocation paths are echoed for the rpm build log
            AppEvent::FragmentPath { path } | AppEvent::PomPath { path } | AppEvent::JarPath { path } => {
                if !self.quiet {
                    println!("{}", path);
                }
            }

            // Configuration
            AppEvent::ConfigLoaded { path, roots } => {
                tracing::debug!("Loaded config {} ({} library roots)", path, roots);
            }
            AppEvent::ConfigDefaulted => {
                tracing::debug!("No config file, using built-in defaults");
            }

            // Resolution
            AppEvent::FragmentResolved { upstream, local } => {
                if !self.quiet {
                    println!("  {} {} {} {}", "✓".green(), upstream.cyan(), "→".dimmed(), local.cyan());
                }
            }

            // Provenance
            AppEvent::PropertiesInjected { jar, entry } => {
                if !self.quiet {
                    println!("  {} Injected {} into {}", "+".green(), entry.dimmed(), jar.cyan());
                }
            }
            AppEvent::PropertiesPresent { jar, entry } => {
                tracing::info!("{} already contains {}", jar, entry);
            }

            // Output
            AppEvent::FragmentWritten { path, records } => {
                if !self.quiet {
                    println!("  {} {} record(s) → {}", "✓".green(), records.to_string().cyan(), path.cyan());
                }
            }

            // Errors
            AppEvent::PomUnparseable { pom, bug_tracker } => {
                eprintln!(
                    "{} Problem parsing POM file. Is it valid maven POM? Send bugreport to {} and attach {} to this bugreport",
                    "✗".red(),
                    bug_tracker.blue(),
                    pom.cyan()
                );
            }
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}
