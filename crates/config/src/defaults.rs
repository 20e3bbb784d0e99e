/// Default values for configuration fields

/// Library roots searched for installed JARs, in priority order
pub fn java_dirs() -> Vec<String> {
    vec![
        "/usr/share/java".to_string(),
        "/usr/share/java-jni".to_string(),
        "/usr/lib/java".to_string(),
        "/usr/lib64/java".to_string(),
    ]
}

pub fn bug_tracker_url() -> String {
    "https://fedorahosted.org/javapackages/".to_string()
}

pub fn properties_header() -> String {
    "Generated by Java Packages Tools".to_string()
}

pub fn resolver_settings() -> super::models::ResolverSettings {
    super::models::ResolverSettings {
        java_dirs: java_dirs(),
    }
}

pub fn output_settings() -> super::models::OutputSettings {
    super::models::OutputSettings {
        bug_tracker_url: bug_tracker_url(),
        properties_header: properties_header(),
    }
}
