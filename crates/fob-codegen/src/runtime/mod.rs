//! Runtime expressions referenced by generated code.
//!
//! [`RuntimeTemplate`] builds the snippets that call into the module runtime
//! (`__webpack_require__` and its helpers) from structured parameters, so
//! templates never format runtime calls by hand.

use fob_graph::identifier::{to_comment, to_normal_comment};
use fob_graph::{ExportsType, ModuleId};

use crate::config::RuntimeOptions;

/// Target of a dependency as far as the runtime is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    pub id: ModuleId,
    pub exports_type: Option<ExportsType>,
}

impl ResolvedModule {
    pub fn new(id: ModuleId, exports_type: Option<ExportsType>) -> Self {
        Self { id, exports_type }
    }
}

/// Produces runtime expressions.
#[derive(Debug, Clone, Default)]
pub struct RuntimeTemplate {
    options: RuntimeOptions,
}

impl RuntimeTemplate {
    pub fn new(options: RuntimeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RuntimeOptions {
        &self.options
    }

    /// Name of the runtime require function.
    pub fn require(&self) -> &str {
        &self.options.require_function
    }

    /// Comment describing a request and/or message, followed by a space.
    ///
    /// With `pathinfo` the request is included and the comment is preserved
    /// by minifiers (`/*! ... */`); without it only the message is kept.
    /// Returns an empty string when there is nothing to say.
    pub fn comment(&self, request: Option<&str>, message: Option<&str>) -> String {
        let parts: Vec<&str> = if self.options.pathinfo {
            [message, request].into_iter().flatten().collect()
        } else {
            message.into_iter().collect()
        };
        let content = parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" | ");

        if content.is_empty() {
            String::new()
        } else if self.options.pathinfo {
            format!("{} ", to_comment(&content))
        } else {
            format!("{} ", to_normal_comment(&content))
        }
    }

    /// JSON-quoted module id prefixed by the request comment.
    pub fn module_id(&self, module: &ResolvedModule, request: &str) -> String {
        format!(
            "{}{}",
            self.comment(Some(request), None),
            quote(module.id.as_str())
        )
    }

    fn throw_missing_module_error_block(&self, request: &str) -> String {
        let message = format!("Cannot find module '{request}'");
        format!(
            "var e = new Error({}); e.code = 'MODULE_NOT_FOUND'; throw e;",
            quote(&message)
        )
    }

    /// Expression throwing a `MODULE_NOT_FOUND` error when evaluated.
    pub fn missing_module(&self, request: &str) -> String {
        format!(
            "!(function webpackMissingModule() {{ {} }}())",
            self.throw_missing_module_error_block(request)
        )
    }

    pub fn missing_module_statement(&self, request: &str) -> String {
        format!("{};\n", self.missing_module(request))
    }

    pub fn missing_module_promise(&self, request: &str) -> String {
        format!("Promise.resolve().then({})", self.missing_module(request))
    }

    /// `require(id)` of the target, or a throwing expression when unresolved.
    pub fn module_exports(&self, module: Option<&ResolvedModule>, request: &str) -> String {
        match module {
            Some(module) => format!("{}({})", self.require(), self.module_id(module, request)),
            None => self.missing_module(request),
        }
    }

    /// Promise resolving to the namespace object of the target.
    ///
    /// `strict` is the origin module's strict-harmony flag. It only matters
    /// for targets without a known exports type.
    pub fn module_namespace_promise(
        &self,
        module: Option<&ResolvedModule>,
        request: &str,
        strict: bool,
        message: &str,
    ) -> String {
        let Some(module) = module else {
            return self.missing_module_promise(request);
        };

        let promise = format!(
            "Promise.resolve({})",
            self.comment(None, Some(message)).trim()
        );
        let id = format!(
            "{}{}",
            self.comment(Some(request), None),
            quote(module.id.as_str())
        );
        let require = self.require();

        let getter = match module.exports_type {
            Some(ExportsType::Namespace) => format!("{require}.bind(null, {id})"),
            Some(ExportsType::Named) => format!("{require}.t.bind(null, {id}, 3)"),
            None if strict => format!("{require}.t.bind(null, {id}, 1)"),
            None => format!("{require}.t.bind(null, {id}, 7)"),
        };

        format!("{promise}.then({getter})")
    }

    /// Statement binding `import_var` to the target's exports.
    ///
    /// `update` re-assigns an existing binding instead of declaring it. An
    /// interop `<import_var>_default` binding is added for targets without a
    /// known exports type imported from non-strict modules.
    pub fn import_statement(
        &self,
        update: bool,
        module: Option<&ResolvedModule>,
        request: &str,
        import_var: &str,
        origin_strict: bool,
    ) -> String {
        let Some(module) = module else {
            return self.missing_module_statement(request);
        };

        let declaration = if update { "" } else { "var " };
        let require = self.require();
        let mut content = format!(
            "/* harmony import */ {declaration}{import_var} = {require}({});\n",
            self.module_id(module, request)
        );

        if module.exports_type.is_none() && !origin_strict {
            content.push_str(&format!(
                "/* harmony import */ {declaration}{import_var}_default = /*#__PURE__*/{require}.n({import_var});\n"
            ));
        }

        content
    }
}

fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
