//! Built-in templates and template lookup
//!
//! Every template ships inside the binary. A user may override any of them by
//! placing a file with the same relative name (e.g.
//! `services/service.list.ts.tpl`) in the configured templates directory.

use anyhow::{Context, Result};
use modgen::Naming;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod files;
pub use files::*;

/// Where a module template's output lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `src/services/<Model>Services/<Verb><Model>Service.ts`
    Services,
    /// `src/controllers/<Model>Controller.ts`
    Controllers,
    /// `src/routes/<model>Routes.ts`
    Routes,
}

impl Category {
    /// Directory name used in progress output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Controllers => "controllers",
            Self::Routes => "routes",
        }
    }
}

/// A template rendered once per generated module
#[derive(Debug, Clone, Copy)]
pub struct ModuleTemplate {
    /// Template name, relative to the templates directory
    pub name: &'static str,
    /// Output category
    pub category: Category,
    /// Action the template implements (`list`, `store`, ...)
    pub verb: &'static str,
    /// Built-in template text
    pub default: &'static str,
}

impl ModuleTemplate {
    /// Output path for `model_name`, relative to the project root
    #[must_use]
    pub fn output_path(&self, model_name: &str) -> PathBuf {
        let pascal = Naming::to_pascal_case(model_name);

        match self.category {
            Category::Services => PathBuf::from("src/services")
                .join(Naming::to_services_path(model_name))
                .join(format!(
                    "{}{pascal}Service.ts",
                    Naming::to_pascal_case(self.verb)
                )),
            Category::Controllers => {
                PathBuf::from("src/controllers").join(format!("{pascal}Controller.ts"))
            }
            Category::Routes => PathBuf::from("src/routes")
                .join(format!("{}Routes.ts", Naming::to_lower(model_name))),
        }
    }
}

/// Templates rendered for every module, in generation order
pub const MODULE_TEMPLATES: &[ModuleTemplate] = &[
    ModuleTemplate { name: "services/service.delete.ts.tpl", category: Category::Services, verb: "delete", default: SERVICE_DELETE },
    ModuleTemplate { name: "services/service.list.ts.tpl", category: Category::Services, verb: "list", default: SERVICE_LIST },
    ModuleTemplate { name: "services/service.show.ts.tpl", category: Category::Services, verb: "show", default: SERVICE_SHOW },
    ModuleTemplate { name: "services/service.store.ts.tpl", category: Category::Services, verb: "store", default: SERVICE_STORE },
    ModuleTemplate { name: "services/service.update.ts.tpl", category: Category::Services, verb: "update", default: SERVICE_UPDATE },
    ModuleTemplate { name: "controller.ts.tpl", category: Category::Controllers, verb: "controller", default: CONTROLLER },
    ModuleTemplate { name: "route.ts.tpl", category: Category::Routes, verb: "route", default: ROUTE },
];

/// Static boilerplate copied once by `modgen init`
pub struct BootstrapFile {
    /// Template name, relative to the templates directory
    pub source: &'static str,
    /// Output path in the project
    pub output: &'static str,
    /// Built-in content
    pub content: &'static str,
}

/// Project bootstrap files
pub const BOOTSTRAP_FILES: &[BootstrapFile] = &[
    BootstrapFile { source: "init/config/auth.ts.tpl", output: "src/config/auth.ts", content: INIT_CONFIG_AUTH },
    BootstrapFile { source: "init/database/index.ts.tpl", output: "src/database/index.ts", content: INIT_DATABASE_INDEX },
    BootstrapFile { source: "init/database/schema.prisma.tpl", output: "src/database/schema.prisma", content: INIT_DATABASE_SCHEMA },
    BootstrapFile { source: "init/database/seed.ts.tpl", output: "src/database/seed.ts", content: INIT_DATABASE_SEED },
    BootstrapFile { source: "init/error/AppError.ts.tpl", output: "src/error/AppError.ts", content: INIT_APP_ERROR },
    BootstrapFile { source: "init/middleware/auth.ts.tpl", output: "src/middleware/auth.ts", content: INIT_MIDDLEWARE_AUTH },
    BootstrapFile { source: "init/@types/express.d.ts.tpl", output: "src/@types/express.d.ts", content: INIT_EXPRESS_TYPES },
    BootstrapFile { source: "init/utils/logger.ts.tpl", output: "src/utils/logger.ts", content: INIT_LOGGER },
    BootstrapFile { source: "init/utils/refreshtoken.ts.tpl", output: "src/utils/refreshtoken.ts", content: INIT_REFRESH_TOKEN },
    BootstrapFile { source: "init/app.ts.tpl", output: "src/app.ts", content: INIT_APP },
    BootstrapFile { source: "init/server.ts.tpl", output: "src/server.ts", content: INIT_SERVER },
];

/// Resolves template text, preferring user overrides over built-ins
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    override_dir: Option<PathBuf>,
}

impl TemplateStore {
    /// Create a store; `override_dir` may be absent
    #[must_use]
    pub const fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    /// Override directory, if configured
    #[must_use]
    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }

    /// Load template `name`, falling back to `default`
    ///
    /// # Errors
    ///
    /// Returns an error if an override file exists but cannot be read.
    pub fn load(&self, name: &str, default: &'static str) -> Result<Cow<'static, str>> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(name);
            if path.is_file() {
                debug!(template = name, path = %path.display(), "using template override");
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read template: {}", path.display()))?;
                return Ok(Cow::Owned(text));
            }
        }

        Ok(Cow::Borrowed(default))
    }
}
