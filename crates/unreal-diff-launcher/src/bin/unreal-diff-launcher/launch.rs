//! `diff`, `merge` and `locate` commands.

use std::path::{Path, PathBuf};

use unreal_diff_launcher::infer::{infer_for_diff, infer_for_merge};
use unreal_diff_launcher::{EditorInvocation, EditorMode};
use unreal_locate::{Resolution, Resolver};

use crate::style;

pub fn run_diff(
    resolver: &Resolver,
    left: PathBuf,
    right: PathBuf,
    dry_run: bool,
) -> anyhow::Result<i32> {
    let resolution = infer_for_diff(resolver, &left, &right)?;
    launch(&resolution, &EditorMode::Diff { left, right }, dry_run)
}

pub fn run_merge(
    resolver: &Resolver,
    remote: PathBuf,
    local: PathBuf,
    base: PathBuf,
    result: PathBuf,
    dry_run: bool,
) -> anyhow::Result<i32> {
    let resolution = infer_for_merge(resolver, &local)?;
    let mode = EditorMode::Merge {
        remote,
        local,
        base,
        result,
    };
    launch(&resolution, &mode, dry_run)
}

pub fn run_locate(resolver: &Resolver, path: &Path, json: bool) -> anyhow::Result<i32> {
    let resolution = resolver.resolve(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!(
            "{} {}",
            style::accent("editor:"),
            resolution.editor.display()
        );
        match &resolution.project {
            Some(project) => println!("{} {}", style::accent("project:"), project.display()),
            None => println!("{} (none)", style::accent("project:")),
        }
    }
    Ok(0)
}

fn launch(resolution: &Resolution, mode: &EditorMode, dry_run: bool) -> anyhow::Result<i32> {
    let invocation = EditorInvocation::new(resolution, mode);
    if dry_run {
        println!("{}", invocation.display());
        return Ok(0);
    }
    Ok(invocation.run()?)
}
