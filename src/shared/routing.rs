//! Named routes and reverse URL generation.
//!
//! Features register a name for each public route template when they are
//! bound, so handlers can build links (e.g. the `Location` header) without
//! knowing which feature owns the target route or how its path is shaped.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route '{0}' is not registered")]
    UnknownRoute(String),

    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    #[error("route '{0}' has a malformed template")]
    MalformedTemplate(String),
}

/// Route name -> path template (`/chats/{chatID}`)
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: HashMap<&'static str, &'static str>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a named template
    pub fn register(&mut self, name: &'static str, template: &'static str) -> &mut Self {
        self.routes.insert(name, template);
        self
    }

    pub fn template(&self, name: &str) -> Option<&'static str> {
        self.routes.get(name).copied()
    }

    /// Build a path for the named route, substituting every `{param}`
    /// placeholder from `params`. Parameters not used by the template are
    /// ignored.
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let template = self
            .template(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

        let mut url = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            url.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| RouteError::MalformedTemplate(name.to_string()))?;
            let param = &after[..close];
            if param.is_empty() || param.contains('{') {
                return Err(RouteError::MalformedTemplate(name.to_string()));
            }

            let value = params
                .iter()
                .find(|(key, _)| *key == param)
                .map(|(_, value)| *value)
                .ok_or_else(|| RouteError::MissingParam {
                    route: name.to_string(),
                    param: param.to_string(),
                })?;
            url.push_str(value);

            rest = &after[close + 1..];
        }

        if rest.contains('}') {
            return Err(RouteError::MalformedTemplate(name.to_string()));
        }
        url.push_str(rest);

        Ok(url)
    }
}
