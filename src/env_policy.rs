//! Environment variable policy for intercepted spawns.
//!
//! The JVM reads extra options from a handful of environment variables. Left
//! in place they can add conflicting or duplicate `-javaagent` options, so they
//! are stripped from every explicit child environment.

use std::collections::HashMap;

/// Environment variables that are ALWAYS stripped from an explicit child environment.
///
/// Matched case-sensitively.
pub const STRIPPED_ENV_VARS: &[&str] = &["_JAVA_OPTIONS", "JAVA_TOOL_OPTIONS", "JDK_JAVA_OPTIONS"];

/// Produce a copy of `env` without the JVM option variables.
///
/// Missing keys are not an error. The input mapping is left untouched.
pub fn strip_java_options(env: &HashMap<String, String>) -> HashMap<String, String> {
    env.iter()
        .filter(|(k, _)| !is_stripped(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Check if a specific key is removed by [`strip_java_options`].
pub fn is_stripped(key: &str) -> bool {
    STRIPPED_ENV_VARS.contains(&key)
}
