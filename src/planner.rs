use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::manifest::{APP_DIR, Manifest};
use crate::templates::{self, Phase, TemplateEngine, TemplateSource};
use crate::utils::naming;

/// Runtime dependencies of the generated app.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["next", "react", "react-dom", "sass"];

/// Development dependencies of the generated app.
pub const DEV_DEPENDENCIES: &[&str] = &["typescript", "@types/react", "@types/node"];

/// Deployment target of the generated app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `next export` output is kept for static hosting
    Static,
    /// `.next` is moved into `functions/` for a serverless function target
    Serverless,
}

impl Mode {
    pub fn from_static_flag(is_static: bool) -> Self {
        if is_static { Mode::Static } else { Mode::Serverless }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Static => "static",
            Mode::Serverless => "serverless",
        }
    }
}

/// Validated input of one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub project_id: Option<String>,
    pub mode: Mode,
}

impl ScaffoldRequest {
    /// Validate and normalize the raw command-line values.
    pub fn new(raw_name: Option<&str>, project_id: Option<String>, mode: Mode) -> Result<Self> {
        let project_name = naming::project_name_from_arg(raw_name)?;
        Ok(Self {
            project_name,
            project_id: project_id.filter(|id| !id.trim().is_empty()),
            mode,
        })
    }
}

/// Content of one planned write, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedContent {
    Directory,
    /// Text without trailing newlines; the writer appends exactly one
    Text(String),
    Asset(&'static [u8]),
    /// Nothing is written
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub path: &'static str,
    pub content: PlannedContent,
}

/// An external command with its working directory relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CommandSpec {
    pub fn in_dir(&self, root: &Path) -> Self {
        Self {
            working_dir: root.join(&self.working_dir),
            ..self.clone()
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Everything a run will do, computed without side effects.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub root_files: Vec<PlannedWrite>,
    pub app_files: Vec<PlannedWrite>,
    pub installs: Vec<CommandSpec>,
}

impl ScaffoldPlan {
    pub fn writes(&self) -> impl Iterator<Item = &PlannedWrite> {
        self.root_files.iter().chain(self.app_files.iter())
    }

    #[cfg(test)]
    pub fn find(&self, path: &str) -> Option<&PlannedWrite> {
        self.writes().find(|w| w.path == path)
    }
}

/// The two install commands run inside the app directory.
pub fn install_commands(package_manager: &str) -> Vec<CommandSpec> {
    let install = |extra: &[&str], deps: &[&str]| CommandSpec {
        program: package_manager.to_string(),
        args: std::iter::once("install")
            .chain(extra.iter().copied())
            .chain(deps.iter().copied())
            .map(String::from)
            .collect(),
        working_dir: PathBuf::from(APP_DIR),
    };
    vec![
        install(&[], RUNTIME_DEPENDENCIES),
        install(&["--save-dev"], DEV_DEPENDENCIES),
    ]
}

/// Resolve the registry for the request's mode and render every entry.
pub fn plan(
    request: &ScaffoldRequest,
    engine: &TemplateEngine,
    package_manager: &str,
) -> Result<ScaffoldPlan> {
    let mut context = tera::Context::new();
    context.insert("project_name", &request.project_name);
    context.insert("mode", request.mode.label());
    if let Some(id) = &request.project_id {
        context.insert("project_id", id);
    }

    let render = |name: &str| -> Result<String> {
        engine
            .render(name, &context)
            .map(|text| text.trim_end_matches('\n').to_string())
            .map_err(|e| ScaffoldError::Template {
                name: name.to_string(),
                message: format!("{:#}", e),
            })
    };

    let mut plan = ScaffoldPlan {
        root_files: Vec::new(),
        app_files: Vec::new(),
        installs: install_commands(package_manager),
    };

    for entry in templates::resolve(request.mode) {
        let content = match entry.source {
            TemplateSource::Directory => PlannedContent::Directory,
            TemplateSource::Text(name) => PlannedContent::Text(render(name)?),
            TemplateSource::WithProjectId(name) => match request.project_id {
                Some(_) => PlannedContent::Text(render(name)?),
                None => PlannedContent::Empty,
            },
            TemplateSource::Manifest(kind) => {
                let manifest = Manifest::for_kind(kind, &request.project_name, request.mode);
                let rendered = manifest.render().map_err(|e| ScaffoldError::Template {
                    name: entry.path.to_string(),
                    message: e.to_string(),
                })?;
                PlannedContent::Text(rendered)
            }
            TemplateSource::Asset(bytes) => PlannedContent::Asset(bytes),
            TemplateSource::Placeholder => PlannedContent::Empty,
        };

        let write = PlannedWrite {
            path: entry.path,
            content,
        };
        match entry.phase {
            Phase::Root => plan.root_files.push(write),
            Phase::App => plan.app_files.push(write),
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plan(raw: &str, id: Option<&str>, mode: Mode) -> ScaffoldPlan {
        let request = ScaffoldRequest::new(Some(raw), id.map(String::from), mode).unwrap();
        let engine = TemplateEngine::new().unwrap();
        plan(&request, &engine, "npm").unwrap()
    }

    fn text_of<'a>(plan: &'a ScaffoldPlan, path: &str) -> &'a str {
        match &plan.find(path).unwrap().content {
            PlannedContent::Text(text) => text,
            other => panic!("{} is not text: {:?}", path, other),
        }
    }

    #[test]
    fn test_request_normalizes_name() {
        let request = ScaffoldRequest::new(Some("My  App"), None, Mode::Static).unwrap();
        assert_eq!(request.project_name, "my-app");
        assert_eq!(request.project_id, None);
    }

    #[test]
    fn test_request_without_name_is_usage_error() {
        let err = ScaffoldRequest::new(None, Some("id".into()), Mode::Serverless).unwrap_err();
        assert!(matches!(err, ScaffoldError::Usage(_)));
    }

    #[test]
    fn test_request_drops_blank_project_id() {
        let request = ScaffoldRequest::new(Some("x"), Some("  ".into()), Mode::Serverless).unwrap();
        assert_eq!(request.project_id, None);
    }

    #[test]
    fn test_serverless_plan() {
        let plan = make_plan("demo-app", None, Mode::Serverless);

        let manifest: Manifest = serde_json::from_str(text_of(&plan, "public/package.json")).unwrap();
        assert_eq!(manifest.scripts.dev.as_deref(), Some("next dev"));
        assert!(manifest.scripts.build.unwrap().contains("mv .next ../functions"));

        assert!(text_of(&plan, "public/pages/api/hello.js").contains("demo-app"));
        assert_eq!(
            plan.find("public/.env.local").unwrap().content,
            PlannedContent::Empty
        );
        assert_eq!(plan.find(".firebaserc").unwrap().content, PlannedContent::Empty);
    }

    #[test]
    fn test_static_plan_keeps_build_artifact() {
        let plan = make_plan("My App", None, Mode::Static);

        let root: Manifest = serde_json::from_str(text_of(&plan, "package.json")).unwrap();
        assert_eq!(root.name, "my-app");

        let app: Manifest = serde_json::from_str(text_of(&plan, "public/package.json")).unwrap();
        assert_eq!(app.scripts.build.as_deref(), Some("next build && next export"));
        assert!(plan.find("public/pages/api/hello.js").is_none());
    }

    #[test]
    fn test_project_id_renders_firebaserc() {
        let plan = make_plan("demo", Some("demo-1234"), Mode::Serverless);
        assert!(text_of(&plan, ".firebaserc").contains("\"default\": \"demo-1234\""));
        assert!(text_of(&plan, "public/.env.example").ends_with("NEXT_PUBLIC_PROJECT_ID=demo-1234"));
    }

    #[test]
    fn test_text_has_no_trailing_newline() {
        let plan = make_plan("demo", None, Mode::Serverless);
        for write in plan.writes() {
            if let PlannedContent::Text(text) = &write.content {
                assert!(!text.ends_with('\n'), "{} ends with newline", write.path);
            }
        }
    }

    #[test]
    fn test_phases_are_partitioned() {
        let plan = make_plan("demo", Some("id"), Mode::Serverless);
        assert!(plan.root_files.iter().all(|w| !w.path.starts_with("public")));
        assert!(plan.app_files.iter().all(|w| w.path.starts_with("public")));
        assert!(plan.app_files.iter().any(|w| w.path == "public/package.json"));
    }

    #[test]
    fn test_install_commands() {
        let plan = make_plan("demo", None, Mode::Static);
        assert_eq!(plan.installs.len(), 2);
        assert_eq!(
            plan.installs[0].to_string(),
            "npm install next react react-dom sass"
        );
        assert_eq!(
            plan.installs[1].to_string(),
            "npm install --save-dev typescript @types/react @types/node"
        );
        assert!(plan.installs.iter().all(|c| c.working_dir == Path::new("public")));

        let pnpm = install_commands("pnpm");
        assert_eq!(pnpm[0].program, "pnpm");
        let rooted = pnpm[0].in_dir(Path::new("/tmp/demo"));
        assert_eq!(rooted.working_dir, Path::new("/tmp/demo/public"));
    }
}
