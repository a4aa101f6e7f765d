use std::collections::HashMap;

use anyhow::{Context, Result};
use tera::Tera;

use crate::manifest::ManifestKind;
use crate::planner::Mode;

// ============================================================================
// Root Templates
// ============================================================================

const TPL_ROOT_README_MD: &str = include_str!("root/README.md.tera");
const TPL_ROOT_GITIGNORE: &str = include_str!("root/gitignore.tera");
const TPL_ROOT_FIREBASERC: &str = include_str!("root/firebaserc.tera");
const TPL_ROOT_VSCODE_SETTINGS: &str = include_str!("root/vscode_settings.json.tera");

// ============================================================================
// App Templates (Next.js)
// ============================================================================

const TPL_APP_DOCUMENT_JS: &str = include_str!("app/_document.js.tera");
const TPL_APP_APP_JS: &str = include_str!("app/_app.js.tera");
const TPL_APP_INDEX_JS: &str = include_str!("app/index.js.tera");
const TPL_APP_API_HELLO_JS: &str = include_str!("app/api_hello.js.tera");
const TPL_APP_GLOBAL_SCSS: &str = include_str!("app/global.scss.tera");
const TPL_APP_HOME_MODULE_SCSS: &str = include_str!("app/Home.module.scss.tera");
const TPL_APP_NEXT_ENV_D_TS: &str = include_str!("app/next-env.d.ts.tera");
const TPL_APP_GITIGNORE: &str = include_str!("app/gitignore.tera");
const TPL_APP_ENV_EXAMPLE: &str = include_str!("app/env.example.tera");

// ============================================================================
// Binary Assets
// ============================================================================

const ASSET_FAVICON_ICO: &[u8] = include_bytes!("assets/favicon.ico");
const ASSET_VERCEL_SVG: &[u8] = include_bytes!("assets/vercel.svg");

/// Which concurrent phase of a run materializes an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Files directly under the project root
    Root,
    /// The nested Next.js package and its dependency install
    App,
}

/// Where the bytes of an entry come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    /// Directory, no content
    Directory,
    /// Named Tera template registered in [`TemplateEngine`]
    Text(&'static str),
    /// A `package.json` built from [`crate::manifest::Manifest`]
    Manifest(ManifestKind),
    /// Binary file copied verbatim
    Asset(&'static [u8]),
    /// File the user is expected to fill in; never written
    Placeholder,
    /// Text template written only when a project id was supplied
    WithProjectId(&'static str),
}

/// One output path of the scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub path: &'static str,
    pub phase: Phase,
    pub source: TemplateSource,
}

impl TemplateEntry {
    const fn new(path: &'static str, phase: Phase, source: TemplateSource) -> Self {
        Self {
            path,
            phase,
            source,
        }
    }

    #[cfg(test)]
    pub fn is_directory(&self) -> bool {
        self.source == TemplateSource::Directory
    }
}

use Phase::{App, Root};
use TemplateSource::{Asset, Directory, Manifest, Placeholder, Text, WithProjectId};

const SHARED_ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::new("package.json", Root, Manifest(ManifestKind::Root)),
    TemplateEntry::new(".gitignore", Root, Text("root/gitignore")),
    TemplateEntry::new("README.md", Root, Text("root/README.md")),
    TemplateEntry::new("public", App, Directory),
    TemplateEntry::new("public/public", App, Directory),
    TemplateEntry::new("public/pages", App, Directory),
    TemplateEntry::new("public/styles", App, Directory),
    TemplateEntry::new("public/public/favicon.ico", App, Asset(ASSET_FAVICON_ICO)),
    TemplateEntry::new("public/public/vercel.svg", App, Asset(ASSET_VERCEL_SVG)),
    TemplateEntry::new("public/pages/_document.js", App, Text("app/_document.js")),
    TemplateEntry::new("public/pages/_app.js", App, Text("app/_app.js")),
    TemplateEntry::new("public/pages/index.js", App, Text("app/index.js")),
    TemplateEntry::new("public/styles/global.scss", App, Text("app/global.scss")),
    TemplateEntry::new(
        "public/styles/Home.module.scss",
        App,
        Text("app/Home.module.scss"),
    ),
    TemplateEntry::new("public/next-env.d.ts", App, Text("app/next-env.d.ts")),
    TemplateEntry::new("public/.gitignore", App, Text("app/gitignore")),
    TemplateEntry::new("public/package.json", App, Manifest(ManifestKind::App)),
];

const SERVERLESS_ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::new(".firebaserc", Root, WithProjectId("root/firebaserc")),
    TemplateEntry::new(".vscode", Root, Directory),
    TemplateEntry::new(
        ".vscode/settings.json",
        Root,
        Text("root/vscode_settings.json"),
    ),
    TemplateEntry::new("public/pages/api", App, Directory),
    TemplateEntry::new("public/pages/api/hello.js", App, Text("app/api_hello.js")),
    TemplateEntry::new("public/.env.example", App, Text("app/env.example")),
    TemplateEntry::new("public/.env.local", App, Placeholder),
];

/// Ordered registry for one mode. Directories precede the files inside them.
pub fn resolve(mode: Mode) -> Vec<TemplateEntry> {
    let mut entries = SHARED_ENTRIES.to_vec();
    if mode == Mode::Serverless {
        entries.extend_from_slice(SERVERLESS_ENTRIES);
    }
    entries
}

pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        let templates: HashMap<&str, &str> = HashMap::from([
            ("root/README.md", TPL_ROOT_README_MD),
            ("root/gitignore", TPL_ROOT_GITIGNORE),
            ("root/firebaserc", TPL_ROOT_FIREBASERC),
            ("root/vscode_settings.json", TPL_ROOT_VSCODE_SETTINGS),
            ("app/_document.js", TPL_APP_DOCUMENT_JS),
            ("app/_app.js", TPL_APP_APP_JS),
            ("app/index.js", TPL_APP_INDEX_JS),
            ("app/api_hello.js", TPL_APP_API_HELLO_JS),
            ("app/global.scss", TPL_APP_GLOBAL_SCSS),
            ("app/Home.module.scss", TPL_APP_HOME_MODULE_SCSS),
            ("app/next-env.d.ts", TPL_APP_NEXT_ENV_D_TS),
            ("app/gitignore", TPL_APP_GITIGNORE),
            ("app/env.example", TPL_APP_ENV_EXAMPLE),
        ]);

        for (name, content) in &templates {
            tera.add_raw_template(name, content)
                .with_context(|| format!("Failed to register template: {}", name))?;
        }

        Ok(Self { tera })
    }

    pub fn render(&self, template_name: &str, context: &tera::Context) -> Result<String> {
        self.tera
            .render(template_name, context)
            .with_context(|| format!("Failed to render template: {}", template_name))
    }
}
