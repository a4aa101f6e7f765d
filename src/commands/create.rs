use std::path::{Path, PathBuf};
use std::thread;

use super::Cli;
use crate::error::{Result, ScaffoldError};
use crate::planner::{self, Mode, PlannedContent, PlannedWrite, ScaffoldPlan, ScaffoldRequest};
use crate::templates::TemplateEngine;
use crate::utils::file_writer::{DryRunWriter, FileWriter, RealWriter};
use crate::utils::output;
use crate::utils::process::{DryRunRunner, ProcessRunner, SystemRunner};

/// Entry point for `next-scaffold <project_name> [project_id]`.
pub fn run(args: Cli) -> Result<()> {
    let mode = Mode::from_static_flag(args.static_export);
    let request = ScaffoldRequest::new(args.project_name.as_deref(), args.project_id, mode)?;

    if request.project_id.is_some() && mode == Mode::Static {
        output::print_warn("Project id is only used by serverless builds; ignoring it");
    }

    let engine = TemplateEngine::new().map_err(|e| ScaffoldError::Template {
        name: "registry".to_string(),
        message: format!("{:#}", e),
    })?;
    let plan = planner::plan(&request, &engine, &args.package_manager)?;

    let root = PathBuf::from(&args.path).join(&request.project_name);
    if root.exists() {
        return Err(ScaffoldError::AlreadyExists(root));
    }

    let location = std::path::absolute(&root).unwrap_or_else(|_| root.clone());
    output::print_start(&location.display().to_string());

    if args.dry_run {
        let writer = DryRunWriter::new();
        execute(&plan, &root, &writer, &DryRunRunner, args.skip_install)?;
        writer.print_summary();
        output::print_end("Dry run complete. No files were written.");
        return Ok(());
    }

    execute(&plan, &root, &RealWriter, &SystemRunner, args.skip_install)?;

    output::print_end(&format!(
        "All done! cd into {} and run the dev server with \"npm start\".",
        request.project_name
    ));
    Ok(())
}

/// Create the project root, then run the root-file phase and the app phase concurrently.
/// Dependencies are installed only once both phases have written everything; the first
/// error of either phase aborts the run and files already written are left in place.
pub fn execute(
    plan: &ScaffoldPlan,
    root: &Path,
    writer: &dyn FileWriter,
    runner: &dyn ProcessRunner,
    skip_install: bool,
) -> Result<()> {
    writer.ensure_dir(root)?;

    let (root_result, app_result) = thread::scope(|s| {
        let root_phase = s.spawn(|| make_root_files(plan, root, writer));
        let app_phase = s.spawn(|| make_app_files(plan, root, writer));
        (join(root_phase), join(app_phase))
    });
    root_result.and(app_result)?;

    install_dependencies(plan, root, runner, skip_install)
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}

fn make_root_files(plan: &ScaffoldPlan, root: &Path, writer: &dyn FileWriter) -> Result<()> {
    output::print_waiting("Making root files...");
    write_all(&plan.root_files, root, writer)?;
    output::print_success("Made root files");
    Ok(())
}

fn make_app_files(plan: &ScaffoldPlan, root: &Path, writer: &dyn FileWriter) -> Result<()> {
    output::print_waiting("Making public directory...");
    write_all(&plan.app_files, root, writer)?;
    output::print_success("Made public directory");
    Ok(())
}

fn install_dependencies(
    plan: &ScaffoldPlan,
    root: &Path,
    runner: &dyn ProcessRunner,
    skip_install: bool,
) -> Result<()> {
    if skip_install {
        output::print_info("Skipping dependency installation (--skip-install)");
        return Ok(());
    }

    output::print_waiting("Installing dependencies for public (this might take some time)...");
    for command in &plan.installs {
        runner.run(&command.in_dir(root))?;
    }
    output::print_success("Installed dependencies for public");
    Ok(())
}

/// Issue every write of a phase at once and wait for all of them.
/// Writes are I/O-bound and a phase holds about twenty, so each gets its own thread.
fn write_all(writes: &[PlannedWrite], root: &Path, writer: &dyn FileWriter) -> Result<()> {
    let results: Vec<Result<()>> = thread::scope(|s| {
        let handles: Vec<_> = writes
            .iter()
            .map(|write| s.spawn(move || materialize(write, root, writer)))
            .collect();
        handles.into_iter().map(join).collect()
    });

    results.into_iter().collect()
}

fn materialize(write: &PlannedWrite, root: &Path, writer: &dyn FileWriter) -> Result<()> {
    let path = root.join(write.path);
    match &write.content {
        PlannedContent::Directory => writer.ensure_dir(&path),
        PlannedContent::Text(text) => writer.write_file(&path, text),
        PlannedContent::Asset(bytes) => writer.copy_asset(&path, bytes),
        PlannedContent::Empty => Ok(()),
    }
}
