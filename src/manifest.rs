use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::planner::Mode;

/// Directory holding the Next.js application inside the project root.
pub const APP_DIR: &str = "public";

/// A `package.json` document. Field order is emission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub scripts: Scripts,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<BTreeMap<String, String>>,

    pub private: bool,
}

/// The `scripts` section, emitted in dev/build/start/clean order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scripts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean: Option<String>,
}

/// Which manifest of the scaffold to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// `package.json` at the project root
    Root,
    /// `public/package.json` for the Next.js app
    App,
}

impl Manifest {
    pub fn for_kind(kind: ManifestKind, project_name: &str, mode: Mode) -> Self {
        match kind {
            ManifestKind::Root => Self::root(project_name, mode),
            ManifestKind::App => Self::app(mode),
        }
    }

    /// Root manifest: delegates to the app package and cleans build output.
    pub fn root(project_name: &str, mode: Mode) -> Self {
        let next_dir = match mode {
            Mode::Static => APP_DIR,
            Mode::Serverless => "functions",
        };
        Self {
            name: project_name.to_string(),
            version: None,
            scripts: Scripts {
                start: Some(format!("npm run dev -C {APP_DIR}")),
                clean: Some(format!("rm -rf {APP_DIR}/out {next_dir}/.next")),
                ..Scripts::default()
            },
            dependencies: None,
            dev_dependencies: None,
            private: true,
        }
    }

    /// App manifest. Serverless builds move `.next` into `../functions`.
    pub fn app(mode: Mode) -> Self {
        let mut build = "next build && next export".to_string();
        if mode == Mode::Serverless {
            build.push_str(" && mv .next ../functions");
        }
        Self {
            name: APP_DIR.to_string(),
            version: Some("1.0.0".to_string()),
            scripts: Scripts {
                dev: Some("next dev".to_string()),
                build: Some(build),
                start: Some("next start".to_string()),
                clean: None,
            },
            dependencies: Some(BTreeMap::new()),
            dev_dependencies: Some(BTreeMap::new()),
            private: true,
        }
    }

    /// Render as tab-indented JSON.
    pub fn render(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
