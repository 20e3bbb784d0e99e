use super::cli::Cli;
use depmap_archive::inject_pom_properties;
use depmap_config::Config;
use depmap_events::{AppEvent, EventBus};
use depmap_fragment::{create_mappings, parse_pom, write_fragment, FragmentError, VersionList};
use depmap_pom::PomSource;
use depmap_resolver::{JavaDirs, Resolver};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// One invocation: resolve the POM, inject provenance, append the fragment
pub async fn run(cli: &Cli, config: &Config, events: &Arc<EventBus>) -> Result<()> {
    let fragment_path = PathBuf::from(cli.fragment_path.trim());
    let source = PomSource::from_arg(&cli.pom_path);
    let jar_path = cli.jar_path.as_deref().map(str::trim).map(PathBuf::from);

    events.emit(AppEvent::FragmentPath {
        path: fragment_path.display().to_string(),
    });
    events.emit(AppEvent::PomPath {
        path: source.to_string(),
    });
    if let Some(jar_path) = &jar_path {
        events.emit(AppEvent::JarPath {
            path: jar_path.display().to_string(),
        });
    }

    let resolver = Resolver::new(JavaDirs::new(config.resolver.java_dirs.iter().cloned()));
    let fragment = parse_pom(&source, jar_path.as_deref(), &resolver).await?;

    events.emit(AppEvent::FragmentResolved {
        upstream: format!("{}:{}:{}", fragment.group_id, fragment.artifact_id, fragment.version),
        local: fragment.local.to_string(),
    });

    // Aliases are validated before anything touches the JAR or the fragment file
    let mappings = create_mappings(&fragment, cli.append.as_deref())?;
    let versions = VersionList::new(&fragment.version, cli.versions.as_deref());

    if let Some(jar_path) = &jar_path {
        let injection = inject_pom_properties(jar_path, &fragment, &config.output.properties_header).await?;
        let jar = jar_path.display().to_string();
        if injection.written {
            events.emit(AppEvent::PropertiesInjected { jar, entry: injection.entry });
        } else {
            events.emit(AppEvent::PropertiesPresent { jar, entry: injection.entry });
        }
    }

    let records = write_fragment(&fragment_path, &fragment, &mappings, &versions).await?;
    events.emit(AppEvent::FragmentWritten {
        path: fragment_path.display().to_string(),
        records,
    });

    Ok(())
}

/// Process exit code for failures that get a bug-report pointer instead of
/// the default error report. Only an unparseable POM qualifies.
pub fn exit_code_for(err: &anyhow::Error) -> Option<i32> {
    match err.downcast_ref::<FragmentError>() {
        Some(FragmentError::Pom(_)) => Some(1),
        _ => None,
    }
}
