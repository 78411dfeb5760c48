//! Captures the git revision and build time for `--version` output.

use std::process::Command;

fn main() {
    println!(
        "cargo:rustc-env=GOCOLONIZE_REVISION={}",
        command_output("git", &["describe", "--always", "--dirty"])
    );
    println!(
        "cargo:rustc-env=GOCOLONIZE_BUILD_TIME={}",
        command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
    );
    println!("cargo:rerun-if-changed=build.rs");
}

fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
