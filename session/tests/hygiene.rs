//! Source checks for the session core.
//!
//! The core handles a bearer credential and decides who is signed in, so it
//! must not panic, must not swallow decode failures and must not log the
//! credential. Each rule names the files it applies to and the offending
//! lines are listed on failure.

use std::fs;

/// Production modules; `_test.rs` siblings are not scanned.
const MODULES: &[&str] = &["access.rs", "claims.rs", "guard.rs", "lib.rs", "state.rs", "store.rs"];

/// Modules on the decode and restore path.
const DECODE_PATH: &[&str] = &["claims.rs", "state.rs"];

const PANIC_SITES: &[&str] =
    &[".unwrap()", ".expect(", "panic!(", "todo!(", "unimplemented!(", "unreachable!("];

/// Fallbacks that turn a failed decode into a plausible value.
const SILENT_FALLBACKS: &[&str] = &["unwrap_or_default", "let _ =", ".ok()"];

fn read(module: &str) -> String {
    let path = format!("{}/src/{module}", env!("CARGO_MANIFEST_DIR"));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

/// `module:line: text` for every line of `modules` that `hit` flags.
fn offenders(modules: &[&str], hit: impl Fn(&str) -> bool) -> Vec<String> {
    modules
        .iter()
        .flat_map(|module| {
            read(module)
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim_start().starts_with("//") && hit(line))
                .map(|(n, line)| format!("{module}:{}: {}", n + 1, line.trim()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// A log call whose arguments or inline captures name the credential.
fn logs_credential(line: &str) -> bool {
    let Some(start) = line.find("log::") else {
        return false;
    };
    let call = &line[start..];
    let args = call.rfind('"').map_or(call, |end| &call[end..]);
    call.contains("{credential") || call.contains("{token") || args.contains("credential") || args.contains("token")
}

#[test]
fn every_module_is_listed() {
    let mut on_disk: Vec<String> = fs::read_dir(format!("{}/src", env!("CARGO_MANIFEST_DIR")))
        .unwrap()
        .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
        .filter(|name| name.ends_with(".rs") && !name.ends_with("_test.rs"))
        .collect();
    on_disk.sort();
    assert_eq!(on_disk, MODULES);
}

#[test]
fn core_never_panics() {
    let hits = offenders(MODULES, |line| PANIC_SITES.iter().any(|p| line.contains(p)));
    assert!(hits.is_empty(), "panic sites:\n{}", hits.join("\n"));
}

#[test]
fn decode_path_never_falls_back_silently() {
    let hits = offenders(DECODE_PATH, |line| SILENT_FALLBACKS.iter().any(|p| line.contains(p)));
    assert!(hits.is_empty(), "silent fallbacks:\n{}", hits.join("\n"));
}

#[test]
fn credential_never_logged() {
    let hits = offenders(MODULES, logs_credential);
    assert!(hits.is_empty(), "credential in log output:\n{}", hits.join("\n"));
}

#[test]
fn credential_detector_flags_captures_and_arguments() {
    assert!(logs_credential(r#"log::info!("stored {credential}");"#));
    assert!(logs_credential(r#"log::debug!("stored {}", credential);"#));
    assert!(logs_credential(r#"log::debug!("token {:?}", self.token);"#));
    assert!(!logs_credential(r#"log::info!("stored credential expired, clearing");"#));
    assert!(!logs_credential(r#"log::info!("login: user {}", identity.id);"#));
}
